//! Store Configuration

use serde::{Deserialize, Serialize};

/// Storage key used when nothing else is configured.
pub const DEFAULT_STORAGE_KEY: &str = "tasks";

/// Settings for where the task collection lives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Key of the single slot holding the serialized collection
    pub storage_key: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

impl StoreConfig {
    pub fn with_key(storage_key: impl Into<String>) -> Self {
        Self {
            storage_key: storage_key.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_key() {
        assert_eq!(StoreConfig::default().storage_key, "tasks");
    }

    #[test]
    fn test_missing_fields_fall_back_to_default() {
        let config: StoreConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, StoreConfig::default());

        let config: StoreConfig = serde_json::from_str(r#"{"storage_key":"board"}"#).unwrap();
        assert_eq!(config.storage_key, "board");
    }
}
