use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::vocabulary::{EntryKind, MimeCategory};

/// A file reference stored in redb. `url` is the reference path returned by
/// the file store; the record is created once and never rewritten.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileRecord {
    pub id: String,
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub entry_kind: EntryKind,
    pub mime_type: String,
    #[serde(default)]
    pub mime_category: Option<MimeCategory>,
    pub byte_size: u64,
    pub created_at: DateTime<Utc>,
}
