use serde::{Deserialize, Serialize};

/// One page of results from a list endpoint.
///
/// The admin API reports the page slice in `data` together with the total
/// number of matching records and echoes of the served cursor.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub total: i64,
    #[serde(default)]
    pub page: Option<i64>,
    #[serde(default)]
    pub per_page: Option<i64>,
}
