use chrono::{Duration, Utc};
use cloud_drive::storage::models::FileRecord;
use cloud_drive::storage::Database;
use cloud_drive::vocabulary::{EntryKind, MimeCategory};

fn test_db() -> (tempfile::TempDir, Database) {
    let dir = tempfile::tempdir().unwrap();
    let db = Database::open(dir.path().join("data")).unwrap();
    (dir, db)
}

fn sample_file(id: &str, url: &str) -> FileRecord {
    FileRecord {
        id: id.to_string(),
        name: "photo.png".to_string(),
        url: url.to_string(),
        entry_kind: EntryKind::File,
        mime_type: "image/png".to_string(),
        mime_category: Some(MimeCategory::Image),
        byte_size: 1024,
        created_at: Utc::now(),
    }
}

#[test]
fn test_put_and_get_file() {
    let (_dir, db) = test_db();
    let file = sample_file("file-1", "/uploads/photo-1.png");

    db.put_file(&file).unwrap();

    let retrieved = db.get_file("file-1").unwrap().expect("file should exist");
    assert_eq!(retrieved.id, "file-1");
    assert_eq!(retrieved.name, "photo.png");
    assert_eq!(retrieved.url, "/uploads/photo-1.png");
    assert_eq!(retrieved.entry_kind, EntryKind::File);
    assert_eq!(retrieved.mime_category, Some(MimeCategory::Image));
    assert_eq!(retrieved.byte_size, 1024);
}

#[test]
fn test_get_file_by_url() {
    let (_dir, db) = test_db();
    db.put_file(&sample_file("file-2", "/uploads/readme-2.txt"))
        .unwrap();

    let retrieved = db
        .get_file_by_url("/uploads/readme-2.txt")
        .unwrap()
        .expect("file should exist");
    assert_eq!(retrieved.id, "file-2");
    assert!(db.get_file_by_url("/uploads/nope.txt").unwrap().is_none());
}

#[test]
fn test_get_file_not_found() {
    let (_dir, db) = test_db();
    assert!(db.get_file("nonexistent").unwrap().is_none());
}

#[test]
fn test_delete_file() {
    let (_dir, db) = test_db();
    db.put_file(&sample_file("file-3", "/uploads/gone-3.png"))
        .unwrap();

    let removed = db.delete_file("file-3").unwrap().expect("record removed");
    assert_eq!(removed.url, "/uploads/gone-3.png");
    assert!(db.get_file("file-3").unwrap().is_none());
    assert!(!db.url_exists("/uploads/gone-3.png").unwrap());
}

#[test]
fn test_delete_file_not_found() {
    let (_dir, db) = test_db();
    assert!(db.delete_file("nonexistent").unwrap().is_none());
}

#[test]
fn test_delete_keeps_url_index_remapped_by_collision() {
    let (_dir, db) = test_db();
    let url = "/uploads/cat-1700000000000.jpg";
    db.put_file(&sample_file("older", url)).unwrap();
    db.put_file(&sample_file("newer", url)).unwrap();

    // The url now resolves to the newer record; dropping the older one must not unlink it
    db.delete_file("older").unwrap();
    let current = db.get_file_by_url(url).unwrap().expect("still indexed");
    assert_eq!(current.id, "newer");
}

#[test]
fn test_list_files_oldest_first() {
    let (_dir, db) = test_db();
    let now = Utc::now();
    for (i, id) in ["c", "a", "b"].iter().enumerate() {
        let mut file = sample_file(id, &format!("/uploads/{id}.png"));
        file.created_at = now + Duration::seconds(i as i64);
        db.put_file(&file).unwrap();
    }

    let ids: Vec<String> = db
        .list_files(None, None)
        .unwrap()
        .into_iter()
        .map(|f| f.id)
        .collect();
    assert_eq!(ids, vec!["c", "a", "b"]);
}

#[test]
fn test_list_files_with_filters() {
    let (_dir, db) = test_db();
    db.put_file(&sample_file("img", "/uploads/img.png")).unwrap();

    let mut pdf = sample_file("pdf", "/uploads/doc.pdf");
    pdf.mime_type = "application/pdf".to_string();
    pdf.mime_category = Some(MimeCategory::Pdf);
    db.put_file(&pdf).unwrap();

    let mut folder = sample_file("dir", "/uploads/dir");
    folder.entry_kind = EntryKind::Folder;
    folder.mime_type = "inode/directory".to_string();
    folder.mime_category = None;
    db.put_file(&folder).unwrap();

    let pdfs = db.list_files(None, Some(MimeCategory::Pdf)).unwrap();
    assert_eq!(pdfs.len(), 1);
    assert_eq!(pdfs[0].id, "pdf");

    let folders = db.list_files(Some(EntryKind::Folder), None).unwrap();
    assert_eq!(folders.len(), 1);
    assert_eq!(folders[0].id, "dir");

    let files = db.list_files(Some(EntryKind::File), None).unwrap();
    assert_eq!(files.len(), 2);

    assert!(db
        .list_files(Some(EntryKind::Folder), Some(MimeCategory::Image))
        .unwrap()
        .is_empty());
}

#[test]
fn test_url_exists() {
    let (_dir, db) = test_db();
    assert!(!db.url_exists("/uploads/a.png").unwrap());
    db.put_file(&sample_file("a", "/uploads/a.png")).unwrap();
    assert!(db.url_exists("/uploads/a.png").unwrap());
}

#[test]
fn test_purge_all() {
    let (_dir, db) = test_db();
    db.put_file(&sample_file("p1", "/uploads/p1.png")).unwrap();
    db.put_file(&sample_file("p2", "/uploads/p2.png")).unwrap();

    let stats = db.purge_all().unwrap();
    assert_eq!(stats.files, 2);
    let mut urls = stats.urls.clone();
    urls.sort();
    assert_eq!(urls, vec!["/uploads/p1.png", "/uploads/p2.png"]);

    assert!(db.get_all_files().unwrap().is_empty());
    assert!(!db.url_exists("/uploads/p1.png").unwrap());
}

#[test]
fn test_reopen_keeps_records() {
    let dir = tempfile::tempdir().unwrap();
    {
        let db = Database::open(dir.path().join("data")).unwrap();
        db.put_file(&sample_file("kept", "/uploads/kept.png"))
            .unwrap();
    }

    let db = Database::open(dir.path().join("data")).unwrap();
    assert!(db.get_file("kept").unwrap().is_some());
}
