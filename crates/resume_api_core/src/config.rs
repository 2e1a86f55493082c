//! Deployment configuration for the two handlers.
//!
//! The original deployment embedded region, table name, and addresses as
//! literals inside the handlers; here they are injected at construction so
//! the handlers stay testable and portable across environments. The `Default`
//! impls carry the original deployment's values.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CounterConfig {
    pub region: String,
    pub table_name: String,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            region: "us-east-1".to_string(),
            table_name: "cloud-resume-test".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactConfig {
    pub region: String,
    pub source_address: String,
    pub recipient_addresses: Vec<String>,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            region: "eu-north-1".to_string(),
            source_address: "michellenkomo@outlook.com".to_string(),
            recipient_addresses: vec!["michellenkomo@outlook.com".to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_defaults_match_the_deployed_table() {
        let config = CounterConfig::default();
        assert_eq!(config.region, "us-east-1");
        assert_eq!(config.table_name, "cloud-resume-test");
    }

    #[test]
    fn contact_defaults_relay_to_the_site_owner() {
        let config = ContactConfig::default();
        assert_eq!(config.region, "eu-north-1");
        assert_eq!(config.source_address, "michellenkomo@outlook.com");
        assert_eq!(
            config.recipient_addresses,
            vec!["michellenkomo@outlook.com".to_string()]
        );
    }
}
