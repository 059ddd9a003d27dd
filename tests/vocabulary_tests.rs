use cloud_drive::vocabulary::{ActionKind, EntryKind, MimeCategory, PermissionLevel};

#[test]
fn test_action_kinds_are_closed_and_lowercase() {
    let names: Vec<String> = ActionKind::ALL
        .iter()
        .map(|a| serde_json::to_string(a).unwrap().trim_matches('"').to_string())
        .collect();
    assert_eq!(
        names,
        vec![
            "upload", "create", "delete", "restore", "rename", "move", "copy", "share",
            "unshare", "star", "unstar", "comment", "download", "view"
        ]
    );
    for action in ActionKind::ALL {
        assert_eq!(action.to_string(), action.as_str());
    }
    assert!(serde_json::from_str::<ActionKind>("\"lock\"").is_err());
}

#[test]
fn test_permission_levels_are_ordered() {
    assert!(PermissionLevel::Viewer < PermissionLevel::Commenter);
    assert!(PermissionLevel::Commenter < PermissionLevel::Editor);
    assert_eq!(
        serde_json::from_str::<PermissionLevel>("\"commenter\"").unwrap(),
        PermissionLevel::Commenter
    );
    assert!(serde_json::from_str::<PermissionLevel>("\"owner\"").is_err());
}

#[test]
fn test_entry_kind_wire_format() {
    assert_eq!(serde_json::to_string(&EntryKind::Folder).unwrap(), "\"folder\"");
    assert_eq!(EntryKind::default(), EntryKind::File);
}

#[test]
fn test_mime_category_from_mime() {
    assert_eq!(
        MimeCategory::from_mime("application/pdf"),
        Some(MimeCategory::Pdf)
    );
    assert_eq!(MimeCategory::from_mime("image/png"), Some(MimeCategory::Image));
    assert_eq!(
        MimeCategory::from_mime("Image/WEBP"),
        Some(MimeCategory::Image)
    );
    assert_eq!(MimeCategory::from_mime("video/mp4"), Some(MimeCategory::Video));
    assert_eq!(
        MimeCategory::from_mime(
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        ),
        Some(MimeCategory::Document)
    );
    assert_eq!(
        MimeCategory::from_mime(
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
        ),
        Some(MimeCategory::Spreadsheet)
    );
    assert_eq!(
        MimeCategory::from_mime(
            "application/vnd.openxmlformats-officedocument.presentationml.presentation"
        ),
        Some(MimeCategory::Presentation)
    );
    assert_eq!(
        MimeCategory::from_mime("application/pdf; charset=binary"),
        Some(MimeCategory::Pdf)
    );
    assert_eq!(MimeCategory::from_mime("text/plain"), None);
    assert_eq!(MimeCategory::from_mime("audio/mpeg"), None);
    assert_eq!(MimeCategory::from_mime("image/"), None);
    assert_eq!(MimeCategory::from_mime(""), None);
}
