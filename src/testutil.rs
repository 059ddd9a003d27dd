//! Shared test helpers for handler tests.

use std::sync::Arc;

use crate::clock::{Clock, SystemClock};
use crate::config::{Config, NodeConfig, StorageConfig};
use crate::file_store::{LocalFileStore, NamingStrategy};
use crate::intent::TracingIntentSink;
use crate::storage::Database;
use crate::AppState;

/// Create a test AppState with a temporary database and upload root.
pub fn test_state(temp_dir: &tempfile::TempDir) -> Arc<AppState> {
    test_state_with(temp_dir, NamingStrategy::Uuid, Arc::new(SystemClock))
}

/// Like `test_state`, with a chosen naming strategy and clock for the store.
pub fn test_state_with(
    temp_dir: &tempfile::TempDir,
    naming: NamingStrategy,
    clock: Arc<dyn Clock>,
) -> Arc<AppState> {
    let data_dir = temp_dir.path().join("data");
    let upload_root = temp_dir.path().join("uploads");

    let config = Config {
        node: NodeConfig {
            bind_address: "127.0.0.1:0".to_string(),
            data_dir: data_dir.to_string_lossy().to_string(),
        },
        storage: StorageConfig {
            upload_root: upload_root.to_string_lossy().to_string(),
            naming,
        },
        test_mode: true,
        max_upload_size: 1024 * 1024, // 1MB for tests
    };

    let db = Database::open(&data_dir).expect("Failed to open test database");
    let file_store = LocalFileStore::new(&upload_root)
        .with_naming(naming)
        .with_clock(clock);

    Arc::new(AppState {
        config,
        db,
        file_store: Arc::new(file_store),
        intents: Arc::new(TracingIntentSink),
    })
}
