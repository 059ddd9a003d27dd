use redb::ReadableTable;

use super::db::{Database, DatabaseError};
use super::models::FileRecord;
use super::tables::*;
use crate::vocabulary::{EntryKind, MimeCategory};

impl Database {
    // ========================================================================
    // File operations
    // ========================================================================

    /// Store a file record and index its url
    pub fn put_file(&self, file: &FileRecord) -> Result<(), DatabaseError> {
        debug_assert!(!file.id.is_empty(), "file id must not be empty");
        debug_assert!(!file.url.is_empty(), "file url must not be empty");

        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(FILES)?;
            let data = rmp_serde::to_vec_named(file)?;
            table.insert(file.id.as_str(), data.as_slice())?;

            let mut url_table = write_txn.open_table(FILE_URLS)?;
            url_table.insert(file.url.as_str(), file.id.as_str())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Get a file by its UUID
    pub fn get_file(&self, id: &str) -> Result<Option<FileRecord>, DatabaseError> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(FILES)?;

        match table.get(id)? {
            Some(data) => {
                let file: FileRecord = rmp_serde::from_slice(data.value())?;
                Ok(Some(file))
            }
            None => Ok(None),
        }
    }

    /// Get a file by its reference path (resolves url -> uuid -> file)
    pub fn get_file_by_url(&self, url: &str) -> Result<Option<FileRecord>, DatabaseError> {
        let read_txn = self.db.begin_read()?;
        let url_table = read_txn.open_table(FILE_URLS)?;

        let id = match url_table.get(url)? {
            Some(data) => data.value().to_string(),
            None => return Ok(None),
        };

        let files_table = read_txn.open_table(FILES)?;
        match files_table.get(id.as_str())? {
            Some(data) => {
                let file: FileRecord = rmp_serde::from_slice(data.value())?;
                Ok(Some(file))
            }
            None => Ok(None),
        }
    }

    /// Delete a file record and its url index entry. Returns the removed record.
    pub fn delete_file(&self, id: &str) -> Result<Option<FileRecord>, DatabaseError> {
        let write_txn = self.db.begin_write()?;

        let removed = {
            let mut table = write_txn.open_table(FILES)?;
            let removed = match table.remove(id)? {
                Some(data) => Some(rmp_serde::from_slice::<FileRecord>(data.value())?),
                None => None,
            };
            removed
        };

        if let Some(ref file) = removed {
            let mut url_table = write_txn.open_table(FILE_URLS)?;
            // Only drop the index entry if it still points at this record; a
            // same-millisecond timestamp collision can remap a url.
            let points_here = url_table
                .get(file.url.as_str())?
                .is_some_and(|v| v.value() == id);
            if points_here {
                url_table.remove(file.url.as_str())?;
            }
        }

        write_txn.commit()?;
        Ok(removed)
    }

    /// Get all files, oldest first
    pub fn get_all_files(&self) -> Result<Vec<FileRecord>, DatabaseError> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(FILES)?;

        let mut files = Vec::new();
        for result in table.iter()? {
            let (_, value) = result?;
            let file: FileRecord = rmp_serde::from_slice(value.value())?;
            files.push(file);
        }
        files.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));

        Ok(files)
    }

    /// List files with optional entry kind and MIME category filters
    pub fn list_files(
        &self,
        entry_kind: Option<EntryKind>,
        mime_category: Option<MimeCategory>,
    ) -> Result<Vec<FileRecord>, DatabaseError> {
        Ok(self
            .get_all_files()?
            .into_iter()
            .filter(|f| entry_kind.is_none_or(|k| f.entry_kind == k))
            .filter(|f| mime_category.is_none_or(|c| f.mime_category == Some(c)))
            .collect())
    }

    /// Check if a reference path is already recorded
    pub fn url_exists(&self, url: &str) -> Result<bool, DatabaseError> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(FILE_URLS)?;
        Ok(table.get(url)?.is_some())
    }
}
