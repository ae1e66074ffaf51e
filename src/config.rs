use crate::utils::delay::Latency;
use serde::Deserialize;

pub const BUSINESS_STORAGE_KEY: &str = "spotlight_businesses";
pub const REVIEW_STORAGE_KEY: &str = "spotlight_reviews";

/// Settings for the repository services.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub business_latency_ms: u64,
    pub review_latency_ms: u64,
    pub business_key: String,
    pub review_key: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        ServiceConfig {
            business_latency_ms: 300,
            review_latency_ms: 250,
            business_key: BUSINESS_STORAGE_KEY.to_string(),
            review_key: REVIEW_STORAGE_KEY.to_string(),
        }
    }
}

impl ServiceConfig {
    /// Default keys, no simulated latency.
    pub fn instant() -> Self {
        ServiceConfig {
            business_latency_ms: 0,
            review_latency_ms: 0,
            ..Default::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn business_latency(&self) -> Latency {
        Latency::from_millis(self.business_latency_ms)
    }

    pub fn review_latency(&self) -> Latency {
        Latency::from_millis(self.review_latency_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_defaults() {
        let config = ServiceConfig::default();
        assert_eq!(config.business_key, "spotlight_businesses");
        assert_eq!(config.review_key, "spotlight_reviews");
        assert_eq!(config.business_latency().duration(), Duration::from_millis(300));
        assert_eq!(config.review_latency().duration(), Duration::from_millis(250));
    }

    #[test]
    fn test_partial_json_keeps_other_defaults() {
        let config = ServiceConfig::from_json(r#"{"review_latency_ms": 0, "business_key": "alt"}"#).unwrap();
        assert_eq!(config.review_latency_ms, 0);
        assert_eq!(config.business_latency_ms, 300);
        assert_eq!(config.business_key, "alt");
        assert_eq!(config.review_key, REVIEW_STORAGE_KEY);
    }
}
