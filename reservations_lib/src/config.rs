//! Runtime configuration read from the environment.

use std::time::Duration;

use reservations_api::{Client, DEFAULT_BASE_URL, DEFAULT_PER_PAGE, DEFAULT_TIMEOUT};

use crate::error::ReservationsError;
use crate::validation::MAX_PER_PAGE;

pub const ENV_API_URL: &str = "RESERVATIONS_API_URL";
pub const ENV_TIMEOUT_SECS: &str = "RESERVATIONS_TIMEOUT_SECS";
pub const ENV_PER_PAGE: &str = "RESERVATIONS_PER_PAGE";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub base_url: String,
    pub timeout: Duration,
    /// Page size a freshly mounted view starts with.
    pub per_page: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl Config {
    /// Reads `RESERVATIONS_*` variables. Missing or unparseable values fall back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::from_env`] with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let base_url = lookup(ENV_API_URL)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.base_url);
        let timeout = parse_u64(lookup(ENV_TIMEOUT_SECS))
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(defaults.timeout);
        let per_page = parse_u64(lookup(ENV_PER_PAGE))
            .and_then(|n| i64::try_from(n).ok())
            .filter(|n| (1..=MAX_PER_PAGE).contains(n))
            .unwrap_or(defaults.per_page);
        Self {
            base_url,
            timeout,
            per_page,
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    /// Builds an API client for this configuration.
    pub fn client(&self) -> Result<Client, ReservationsError> {
        Ok(Client::with_timeout(&self.base_url, self.timeout)?)
    }
}

fn parse_u64(value: Option<String>) -> Option<u64> {
    value.and_then(|val| val.trim().parse::<u64>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[]));
        assert_eq!(config, Config::default());
        assert_eq!(config.base_url, "http://localhost:8000/api");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.per_page, 10);
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            (ENV_API_URL, "https://admin.example.com/api"),
            (ENV_TIMEOUT_SECS, "5"),
            (ENV_PER_PAGE, "25"),
        ]));
        assert_eq!(config.base_url, "https://admin.example.com/api");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.per_page, 25);
    }

    #[test]
    fn garbage_falls_back() {
        let config = Config::from_lookup(lookup_from(&[
            (ENV_API_URL, "  "),
            (ENV_TIMEOUT_SECS, "soon"),
            (ENV_PER_PAGE, "0"),
        ]));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn base_url_override() {
        let config = Config::default().with_base_url("http://127.0.0.1:9000");
        assert_eq!(config.base_url, "http://127.0.0.1:9000");
        assert!(config.client().is_ok());
    }
}
