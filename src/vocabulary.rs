//! Closed vocabularies shared with the presentation and sharing layers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Something a user can ask to do to an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Upload,
    Create,
    Delete,
    Restore,
    Rename,
    Move,
    Copy,
    Share,
    Unshare,
    Star,
    Unstar,
    Comment,
    Download,
    View,
}

impl ActionKind {
    pub const ALL: [ActionKind; 14] = [
        ActionKind::Upload,
        ActionKind::Create,
        ActionKind::Delete,
        ActionKind::Restore,
        ActionKind::Rename,
        ActionKind::Move,
        ActionKind::Copy,
        ActionKind::Share,
        ActionKind::Unshare,
        ActionKind::Star,
        ActionKind::Unstar,
        ActionKind::Comment,
        ActionKind::Download,
        ActionKind::View,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::Upload => "upload",
            ActionKind::Create => "create",
            ActionKind::Delete => "delete",
            ActionKind::Restore => "restore",
            ActionKind::Rename => "rename",
            ActionKind::Move => "move",
            ActionKind::Copy => "copy",
            ActionKind::Share => "share",
            ActionKind::Unshare => "unshare",
            ActionKind::Star => "star",
            ActionKind::Unstar => "unstar",
            ActionKind::Comment => "comment",
            ActionKind::Download => "download",
            ActionKind::View => "view",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Access tiers, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionLevel {
    Viewer,
    Commenter,
    Editor,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Folder,
    #[default]
    File,
}

const DOCX_MIME: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
const PPTX_MIME: &str = "application/vnd.openxmlformats-officedocument.presentationml.presentation";

/// MIME types the drive recognizes for previews and icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MimeCategory {
    Pdf,
    Image,
    Video,
    Document,
    Spreadsheet,
    Presentation,
}

impl MimeCategory {
    /// Classify a MIME string. Parameters (`; charset=...`) and case are ignored.
    pub fn from_mime(mime_type: &str) -> Option<Self> {
        let essence = mime_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        match essence.as_str() {
            "application/pdf" => Some(MimeCategory::Pdf),
            DOCX_MIME => Some(MimeCategory::Document),
            XLSX_MIME => Some(MimeCategory::Spreadsheet),
            PPTX_MIME => Some(MimeCategory::Presentation),
            other => match other.split_once('/') {
                Some(("image", sub)) if !sub.is_empty() => Some(MimeCategory::Image),
                Some(("video", sub)) if !sub.is_empty() => Some(MimeCategory::Video),
                _ => None,
            },
        }
    }
}
