//! Operator-entered filter state and its translation into a [`ReservationQuery`].

use std::str::FromStr;

use chrono::NaiveDate;
use reservations_api::types::{ServiceType, Status, Subscription};
use reservations_api::{Query, ReservationQuery};

use crate::error::ReservationsError;
use crate::pagination::Pagination;
use crate::validation;

/// Keys an operator can filter on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterKey {
    Name,
    Status,
    DateFrom,
    DateTo,
    ServiceType,
    Subscription,
}

impl FilterKey {
    pub const ALL: [FilterKey; 6] = [
        FilterKey::Name,
        FilterKey::Status,
        FilterKey::DateFrom,
        FilterKey::DateTo,
        FilterKey::ServiceType,
        FilterKey::Subscription,
    ];

    /// Name of the matching request parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterKey::Name => "name",
            FilterKey::Status => "status",
            FilterKey::DateFrom => "date_from",
            FilterKey::DateTo => "date_to",
            FilterKey::ServiceType => "service_type",
            FilterKey::Subscription => "subscription",
        }
    }
}

impl std::fmt::Display for FilterKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterKey {
    type Err = ReservationsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "name" => Ok(FilterKey::Name),
            "status" => Ok(FilterKey::Status),
            "date_from" | "from" => Ok(FilterKey::DateFrom),
            "date_to" | "to" => Ok(FilterKey::DateTo),
            "service_type" | "service" => Ok(FilterKey::ServiceType),
            "subscription" => Ok(FilterKey::Subscription),
            _ => Err(ReservationsError::InvalidInput(format!(
                "unknown filter '{}'. Valid filters: name, status, date_from, date_to, service_type, subscription",
                s
            ))),
        }
    }
}

/// Current filter values. `None` means "no constraint" and is never sent.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Filters {
    pub name: Option<String>,
    pub status: Option<Status>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub service_type: Option<ServiceType>,
    pub subscription: Option<Subscription>,
}

impl Filters {
    /// Sets one filter from raw operator input. Blank input clears the key;
    /// anything else must validate or the filter is left untouched.
    pub fn set(&mut self, key: FilterKey, raw: &str) -> Result<(), ReservationsError> {
        if raw.trim().is_empty() {
            self.clear(key);
            return Ok(());
        }
        match key {
            FilterKey::Name => {
                let name = validation::validate_name(raw)?;
                self.name = if name.is_empty() { None } else { Some(name) };
            }
            FilterKey::Status => self.status = Some(validation::validate_status(raw)?),
            FilterKey::DateFrom => self.date_from = Some(validation::validate_date(raw)?),
            FilterKey::DateTo => self.date_to = Some(validation::validate_date(raw)?),
            FilterKey::ServiceType => {
                self.service_type = Some(validation::validate_service_type(raw)?)
            }
            FilterKey::Subscription => {
                self.subscription = Some(validation::validate_subscription(raw)?)
            }
        }
        Ok(())
    }

    pub fn clear(&mut self, key: FilterKey) {
        match key {
            FilterKey::Name => self.name = None,
            FilterKey::Status => self.status = None,
            FilterKey::DateFrom => self.date_from = None,
            FilterKey::DateTo => self.date_to = None,
            FilterKey::ServiceType => self.service_type = None,
            FilterKey::Subscription => self.subscription = None,
        }
    }

    /// Display form of one filter, or `None` when unset.
    pub fn get(&self, key: FilterKey) -> Option<String> {
        match key {
            FilterKey::Name => self.name.clone(),
            FilterKey::Status => self.status.map(|s| s.to_string()),
            FilterKey::DateFrom => self.date_from.map(|d| d.to_string()),
            FilterKey::DateTo => self.date_to.map(|d| d.to_string()),
            FilterKey::ServiceType => self.service_type.map(|s| s.to_string()),
            FilterKey::Subscription => self.subscription.map(|s| s.to_string()),
        }
    }

    pub fn is_empty(&self) -> bool {
        FilterKey::ALL.iter().all(|key| self.get(*key).is_none())
    }

    /// `key=value` pairs for every set filter, in [`FilterKey::ALL`] order.
    pub fn active(&self) -> Vec<(FilterKey, String)> {
        FilterKey::ALL
            .iter()
            .filter_map(|key| self.get(*key).map(|value| (*key, value)))
            .collect()
    }
}

/// Builds the read request for the given filters and cursor.
///
/// Unset filters produce no parameter at all; `page` and `per_page` are
/// always present.
pub fn build_query(filters: &Filters, pagination: &Pagination) -> ReservationQuery {
    let mut query = ReservationQuery::default()
        .with_page(pagination.page)
        .with_per_page(pagination.per_page);
    if let Some(name) = &filters.name {
        query = query.with_name(name);
    }
    if let Some(status) = filters.status {
        query = query.with_status(status);
    }
    if let Some(date_from) = filters.date_from {
        query = query.with_date_from(date_from);
    }
    if let Some(date_to) = filters.date_to {
        query = query.with_date_to(date_to);
    }
    if let Some(service_type) = filters.service_type {
        query = query.with_service_type(service_type);
    }
    if let Some(subscription) = filters.subscription {
        query = query.with_subscription(subscription);
    }
    query
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    fn params(query: &ReservationQuery) -> Vec<(String, String)> {
        let url = query.add_to_url(&Url::parse("https://example.com").unwrap());
        let mut pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        pairs.sort();
        pairs
    }

    #[test]
    fn name_and_status_on_second_page() {
        let mut filters = Filters::default();
        filters.set(FilterKey::Name, "Ivan").unwrap();
        filters.set(FilterKey::Status, "pending").unwrap();
        let pagination = Pagination {
            page: 2,
            per_page: 10,
            total: 40,
        };

        let expected: Vec<(String, String)> = [
            ("name", "Ivan"),
            ("page", "2"),
            ("per_page", "10"),
            ("status", "pending"),
        ]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        assert_eq!(params(&build_query(&filters, &pagination)), expected);
    }

    #[test]
    fn empty_values_never_become_keys() {
        let mut filters = Filters::default();
        for key in FilterKey::ALL {
            filters.set(key, "").unwrap();
        }
        filters.set(FilterKey::Name, "   ").unwrap();
        assert!(filters.is_empty());

        let keys: Vec<String> = params(&build_query(&filters, &Pagination::default()))
            .into_iter()
            .map(|(k, _)| k)
            .collect();
        assert_eq!(keys, vec!["page", "per_page"]);
    }

    #[test]
    fn blank_input_clears_existing_value() {
        let mut filters = Filters::default();
        filters.set(FilterKey::Status, "declined").unwrap();
        filters.set(FilterKey::Status, "").unwrap();
        assert_eq!(filters.status, None);
    }

    #[test]
    fn invalid_value_leaves_filter_untouched() {
        let mut filters = Filters::default();
        filters.set(FilterKey::DateFrom, "2024-05-01").unwrap();
        assert!(filters.set(FilterKey::DateFrom, "May 1st").is_err());
        assert_eq!(filters.get(FilterKey::DateFrom).as_deref(), Some("2024-05-01"));
    }

    #[test]
    fn active_lists_set_filters_in_order() {
        let mut filters = Filters::default();
        filters.set(FilterKey::Subscription, "weekly").unwrap();
        filters.set(FilterKey::Name, "Ivan").unwrap();
        assert_eq!(
            filters.active(),
            vec![
                (FilterKey::Name, "Ivan".to_string()),
                (FilterKey::Subscription, "weekly".to_string()),
            ]
        );
    }

    #[test]
    fn filter_key_aliases() {
        assert_eq!("date-from".parse::<FilterKey>().unwrap(), FilterKey::DateFrom);
        assert_eq!("to".parse::<FilterKey>().unwrap(), FilterKey::DateTo);
        assert_eq!("Service".parse::<FilterKey>().unwrap(), FilterKey::ServiceType);
        assert!("price".parse::<FilterKey>().is_err());
    }
}
