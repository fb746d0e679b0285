use chrono::NaiveDate;
use url::Url;

use crate::types::{ServiceType, Status, Subscription};

use super::common::{Query, QueryCommon};

/// Query for `GET /admin/reservations`.
///
/// Unset filters are left out of the URL entirely, so the server never sees
/// an empty-string constraint.
#[derive(Default, Clone, Debug, PartialEq)]
pub struct ReservationQuery {
    pub common: QueryCommon,
    pub name: Option<String>,
    pub status: Option<Status>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub service_type: Option<ServiceType>,
    pub subscription: Option<Subscription>,
}

impl Query for ReservationQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.add_to_url(url);
        if let Some(name) = &self.name {
            url.query_pairs_mut().append_pair("name", name.as_str());
        }
        if let Some(status) = self.status {
            url.query_pairs_mut().append_pair("status", status.as_str());
        }
        if let Some(date_from) = self.date_from {
            url.query_pairs_mut()
                .append_pair("date_from", &date_from.format("%Y-%m-%d").to_string());
        }
        if let Some(date_to) = self.date_to {
            url.query_pairs_mut()
                .append_pair("date_to", &date_to.format("%Y-%m-%d").to_string());
        }
        if let Some(service_type) = self.service_type {
            url.query_pairs_mut()
                .append_pair("service_type", service_type.to_string().as_str());
        }
        if let Some(subscription) = self.subscription {
            url.query_pairs_mut()
                .append_pair("subscription", subscription.to_string().as_str());
        }
        url
    }
}

impl ReservationQuery {
    /// Filters by a name substring. Blank input clears the filter.
    pub fn with_name(mut self, name: &str) -> Self {
        let trimmed = name.trim();
        self.name = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
        self
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_date_from(mut self, date_from: NaiveDate) -> Self {
        self.date_from = Some(date_from);
        self
    }

    pub fn with_date_to(mut self, date_to: NaiveDate) -> Self {
        self.date_to = Some(date_to);
        self
    }

    pub fn with_service_type(mut self, service_type: ServiceType) -> Self {
        self.service_type = Some(service_type);
        self
    }

    pub fn with_subscription(mut self, subscription: Subscription) -> Self {
        self.subscription = Some(subscription);
        self
    }
}
