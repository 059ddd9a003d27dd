use redb::Database as RedbDatabase;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

use super::models::FileRecord;
use super::tables::*;

#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Any redb failure (open, transaction, table, storage, commit).
    #[error("Database error: {0}")]
    Redb(Box<redb::Error>),
    #[error("Record encoding error: {0}")]
    Encode(#[from] rmp_serde::encode::Error),
    #[error("Record decoding error: {0}")]
    Decode(#[from] rmp_serde::decode::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Funnel redb's per-stage error types through `redb::Error` so `?` works on all of them.
macro_rules! from_redb {
    ($($err:ty),+ $(,)?) => {
        $(
            impl From<$err> for DatabaseError {
                fn from(e: $err) -> Self {
                    DatabaseError::Redb(Box::new(e.into()))
                }
            }
        )+
    };
}

from_redb!(
    redb::Error,
    redb::DatabaseError,
    redb::TransactionError,
    redb::TableError,
    redb::StorageError,
    redb::CommitError,
);

/// File-reference records in a single redb file. Cheap to clone.
#[derive(Clone)]
pub struct Database {
    pub(super) db: Arc<RedbDatabase>,
}

/// What a purge removed
#[derive(Debug, Default)]
pub struct PurgeStats {
    pub files: u64,
    pub urls: Vec<String>,
}

impl Database {
    /// Open (or create) `cloud-drive.redb` under `data_dir` and make sure both tables exist.
    pub fn open<P: AsRef<Path>>(data_dir: P) -> Result<Self, DatabaseError> {
        std::fs::create_dir_all(data_dir.as_ref())?;
        let db = RedbDatabase::create(data_dir.as_ref().join("cloud-drive.redb"))?;

        let write_txn = db.begin_write()?;
        write_txn.open_table(FILES)?;
        write_txn.open_table(FILE_URLS)?;
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Drop every record - test mode only. The removed urls are reported so
    /// the caller can delete their blobs.
    pub fn purge_all(&self) -> Result<PurgeStats, DatabaseError> {
        let write_txn = self.db.begin_write()?;
        let mut stats = PurgeStats::default();

        {
            let mut files = write_txn.open_table(FILES)?;
            while let Some((_, value)) = files.pop_last()? {
                let file: FileRecord = rmp_serde::from_slice(value.value())?;
                stats.urls.push(file.url);
                stats.files += 1;
            }

            let mut urls = write_txn.open_table(FILE_URLS)?;
            while urls.pop_last()?.is_some() {}
        }

        write_txn.commit()?;
        Ok(stats)
    }
}
