use redb::TableDefinition;

/// File records: uuid -> FileRecord (msgpack)
pub const FILES: TableDefinition<&str, &[u8]> = TableDefinition::new("files");

/// Reference index: url (`/uploads/...`) -> uuid
pub const FILE_URLS: TableDefinition<&str, &str> = TableDefinition::new("file_urls");
