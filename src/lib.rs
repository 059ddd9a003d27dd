//! cloud-drive - backend for a cloud-drive style web application
//!
//! This crate provides:
//! - A local file store that saves uploads under an injected upload root with
//!   collision-avoided names and deletes them on a best-effort basis
//! - File reference records (name, url) in an embedded redb database
//! - The shared action, permission, entry-kind and MIME vocabularies
//! - Menu selections modeled as intents handed to an external sink
//! - REST API with multipart upload support

pub mod api;
pub mod clock;
pub mod config;
pub mod file_store;
pub mod intent;
pub mod logging;
pub mod storage;
#[cfg(test)]
pub mod testutil;
pub mod vocabulary;

use std::sync::Arc;

use config::Config;
use storage::Database;

/// Shared application state
pub struct AppState {
    pub config: Config,
    pub db: Database,
    pub file_store: Arc<dyn file_store::FileStore>,
    pub intents: Arc<dyn intent::IntentSink>,
}
