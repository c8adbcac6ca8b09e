use std::path::PathBuf;

use core_config::{env_or_default, ConfigError, FromEnv};

/// Local storage configuration
///
/// # Example
///
/// ```ignore
/// use storage::local::LocalStoreConfig;
/// use core_config::FromEnv;
///
/// // Manual construction
/// let config = LocalStoreConfig::new("/var/lib/taskflow");
///
/// // From environment variables
/// let config = LocalStoreConfig::from_env()?;
/// ```
#[derive(Clone, Debug)]
pub struct LocalStoreConfig {
    /// Directory holding one `<key>.json` blob per collection
    pub data_dir: PathBuf,
}

impl LocalStoreConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }
}

/// Load LocalStoreConfig from environment variables
///
/// Environment variables:
/// - `TASKFLOW_DATA_DIR` (optional, default: "data")
impl FromEnv for LocalStoreConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let data_dir = env_or_default("TASKFLOW_DATA_DIR", "data");
        Ok(Self::new(data_dir))
    }
}
