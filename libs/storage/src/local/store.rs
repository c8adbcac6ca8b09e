use std::fs;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use super::LocalStoreConfig;
use crate::common::StorageResult;

/// File-backed JSON-blob store
///
/// Persists one serialized array per key as `<data_dir>/<key>.json`. Every
/// save rewrites the whole blob; there is no incremental persistence.
///
/// # Example
///
/// ```ignore
/// use storage::local::{JsonStore, LocalStoreConfig};
///
/// let store = JsonStore::new(LocalStoreConfig::new("data"));
/// store.save("taskflow_tasks", &tasks)?;
/// let tasks: Option<Vec<Task>> = store.load("taskflow_tasks");
/// ```
#[derive(Clone, Debug)]
pub struct JsonStore {
    data_dir: PathBuf,
}

impl JsonStore {
    pub fn new(config: LocalStoreConfig) -> Self {
        Self {
            data_dir: config.data_dir,
        }
    }

    /// Read the collection persisted under `key`.
    ///
    /// Returns `None` when no blob exists or when the blob cannot be read
    /// or parsed — a corrupt blob is treated as "no data", never an error,
    /// so callers can fall back to their seed fixture.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Option<Vec<T>> {
        let path = self.path_for(key);

        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(key, "No persisted collection");
                return None;
            }
            Err(err) => {
                warn!(key, error = %err, "Failed to read persisted collection");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(items) => Some(items),
            Err(err) => {
                warn!(key, error = %err, "Persisted collection is unparsable, treating as no data");
                None
            }
        }
    }

    /// Persist the full collection under `key`, replacing any previous blob.
    ///
    /// The blob is written to a temp file and renamed over the target so an
    /// interrupted write cannot corrupt the previous snapshot.
    pub fn save<T: Serialize>(&self, key: &str, items: &[T]) -> StorageResult<()> {
        fs::create_dir_all(&self.data_dir)?;

        let path = self.path_for(key);
        let tmp_path = path.with_extension("json.tmp");

        let raw = serde_json::to_string_pretty(items)?;
        fs::write(&tmp_path, raw)?;
        fs::rename(&tmp_path, &path)?;

        debug!(key, count = items.len(), "Persisted collection");
        Ok(())
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{key}.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Record {
        id: String,
        label: String,
    }

    fn store_in(dir: &tempfile::TempDir) -> JsonStore {
        JsonStore::new(LocalStoreConfig::new(dir.path()))
    }

    #[test]
    fn test_load_missing_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let loaded: Option<Vec<Record>> = store.load("missing");
        assert!(loaded.is_none());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let records = vec![
            Record {
                id: "1".to_string(),
                label: "first".to_string(),
            },
            Record {
                id: "2".to_string(),
                label: "second".to_string(),
            },
        ];

        store.save("records", &records).unwrap();
        let loaded: Vec<Record> = store.load("records").unwrap();
        assert_eq!(loaded, records);
    }

    #[test]
    fn test_save_overwrites_previous_blob() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let first = vec![Record {
            id: "1".to_string(),
            label: "first".to_string(),
        }];
        store.save("records", &first).unwrap();

        let second: Vec<Record> = vec![];
        store.save("records", &second).unwrap();

        let loaded: Vec<Record> = store.load("records").unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_load_corrupt_blob_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        fs::write(dir.path().join("records.json"), "{not json]").unwrap();

        let loaded: Option<Vec<Record>> = store.load("records");
        assert!(loaded.is_none());
    }

    #[test]
    fn test_load_wrong_shape_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        // Valid JSON, but not an array of records
        fs::write(dir.path().join("records.json"), r#"{"id": "1"}"#).unwrap();

        let loaded: Option<Vec<Record>> = store.load("records");
        assert!(loaded.is_none());
    }

    #[test]
    fn test_save_creates_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested").join("deeper");
        let store = JsonStore::new(LocalStoreConfig::new(&nested));

        let records = vec![Record {
            id: "1".to_string(),
            label: "first".to_string(),
        }];
        store.save("records", &records).unwrap();

        assert!(nested.join("records.json").exists());
    }
}
