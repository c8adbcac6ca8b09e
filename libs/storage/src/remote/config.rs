use core_config::{env_required, ConfigError, FromEnv};

/// Record-store API configuration
///
/// # Example
///
/// ```ignore
/// use storage::remote::RecordStoreConfig;
/// use core_config::FromEnv;
///
/// // Manual construction
/// let config = RecordStoreConfig::new("https://records.example.com/api/v1", "rk_live_...");
///
/// // From environment variables
/// let config = RecordStoreConfig::from_env()?;
/// ```
#[derive(Clone, Debug)]
pub struct RecordStoreConfig {
    /// Base URL of the record-store API (required)
    pub base_url: String,

    /// API key sent as a bearer token (required)
    pub api_key: String,
}

impl RecordStoreConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            api_key: api_key.into(),
        }
    }
}

/// Load RecordStoreConfig from environment variables
///
/// Environment variables:
/// - `TASKFLOW_API_URL` (required) - base URL of the record-store API
/// - `TASKFLOW_API_KEY` (required) - bearer token
impl FromEnv for RecordStoreConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let base_url = env_required("TASKFLOW_API_URL")?;
        let api_key = env_required("TASKFLOW_API_KEY")?;
        Ok(Self::new(base_url, api_key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_store_config_new() {
        let config = RecordStoreConfig::new("https://records.example.com/api", "rk_test");
        assert_eq!(config.base_url, "https://records.example.com/api");
        assert_eq!(config.api_key, "rk_test");
    }

    #[test]
    fn test_record_store_config_strips_trailing_slash() {
        let config = RecordStoreConfig::new("https://records.example.com/api/", "rk_test");
        assert_eq!(config.base_url, "https://records.example.com/api");
    }

    #[test]
    fn test_record_store_config_from_env() {
        temp_env::with_vars(
            [
                ("TASKFLOW_API_URL", Some("https://records.example.com")),
                ("TASKFLOW_API_KEY", Some("rk_env")),
            ],
            || {
                let config = RecordStoreConfig::from_env().unwrap();
                assert_eq!(config.base_url, "https://records.example.com");
                assert_eq!(config.api_key, "rk_env");
            },
        );
    }

    #[test]
    fn test_record_store_config_from_env_missing_url() {
        temp_env::with_var_unset("TASKFLOW_API_URL", || {
            let config = RecordStoreConfig::from_env();
            assert!(config.is_err());
            assert!(config.unwrap_err().to_string().contains("TASKFLOW_API_URL"));
        });
    }
}
