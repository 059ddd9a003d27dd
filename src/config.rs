use thiserror::Error;

use crate::file_store::NamingStrategy;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub node: NodeConfig,
    pub storage: StorageConfig,
    /// Enables dangerous operations like purge. Must never be true in production.
    pub test_mode: bool,
    /// Maximum upload size in bytes
    pub max_upload_size: u64,
}

#[derive(Debug, Clone)]
pub struct NodeConfig {
    pub bind_address: String,
    /// Directory holding the redb file-reference database
    pub data_dir: String,
}

#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Upload root. Blobs land directly under it and are served at `/uploads/<name>`.
    pub upload_root: String,
    pub naming: NamingStrategy,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            data_dir: "./data".to_string(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            upload_root: "./public/uploads".to_string(),
            naming: NamingStrategy::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let node_defaults = NodeConfig::default();
        let storage_defaults = StorageConfig::default();

        let bind_address = lookup("BIND_ADDRESS").unwrap_or(node_defaults.bind_address);

        let data_dir = lookup("DATA_DIR").unwrap_or(node_defaults.data_dir);

        let upload_root = lookup("UPLOAD_ROOT").unwrap_or(storage_defaults.upload_root);

        let naming = match lookup("NAMING_STRATEGY") {
            Some(value) => value.parse().map_err(ConfigError::ValidationError)?,
            None => storage_defaults.naming,
        };

        let test_mode = lookup("TEST_MODE")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);

        let max_upload_size = match lookup("MAX_UPLOAD_SIZE") {
            Some(value) => value.trim().parse().map_err(|_| {
                ConfigError::ValidationError(format!(
                    "MAX_UPLOAD_SIZE must be a byte count, got '{value}'"
                ))
            })?,
            None => 50 * 1024 * 1024, // 50MB
        };

        let config = Config {
            node: NodeConfig {
                bind_address,
                data_dir,
            },
            storage: StorageConfig {
                upload_root,
                naming,
            },
            test_mode,
            max_upload_size,
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.storage.upload_root.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "UPLOAD_ROOT cannot be empty".to_string(),
            ));
        }

        if self.node.data_dir.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "DATA_DIR cannot be empty".to_string(),
            ));
        }

        if self.max_upload_size == 0 {
            return Err(ConfigError::ValidationError(
                "MAX_UPLOAD_SIZE must be greater than 0".to_string(),
            ));
        }

        if matches!(self.storage.naming, NamingStrategy::Timestamp) {
            tracing::warn!(
                "NAMING_STRATEGY=timestamp: uploads of the same name within one \
                 millisecond overwrite each other."
            );
        }

        Ok(())
    }
}
