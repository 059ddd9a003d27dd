//! Menu selections as intents.
//!
//! Context menus and popovers carry no business logic: picking an item on a
//! subject emits `Intent { action, subject }` to whatever handles intents and
//! closes the menu.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::vocabulary::ActionKind;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSubject {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSubject {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// The entity a menu is bound to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Subject {
    File(FileSubject),
    User(UserSubject),
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Subject::File(file) => write!(f, "file:{}", file.url),
            Subject::User(user) => write!(f, "user:{}", user.id),
        }
    }
}

/// A menu item label. Labels from the shared vocabulary parse as `Known`;
/// anything else a menu offers (`lock`, `details`, ...) is carried as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MenuAction {
    Known(ActionKind),
    Other(String),
}

impl MenuAction {
    pub fn as_str(&self) -> &str {
        match self {
            MenuAction::Known(kind) => kind.as_str(),
            MenuAction::Other(label) => label,
        }
    }

    pub fn kind(&self) -> Option<ActionKind> {
        match self {
            MenuAction::Known(kind) => Some(*kind),
            MenuAction::Other(_) => None,
        }
    }
}

impl From<ActionKind> for MenuAction {
    fn from(kind: ActionKind) -> Self {
        MenuAction::Known(kind)
    }
}

impl From<&str> for MenuAction {
    fn from(label: &str) -> Self {
        ActionKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == label)
            .map(MenuAction::Known)
            .unwrap_or_else(|| MenuAction::Other(label.to_string()))
    }
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intent {
    pub action: MenuAction,
    pub subject: Subject,
}

/// Receives intents emitted by menus.
pub trait IntentSink: Send + Sync {
    fn emit(&self, intent: &Intent);
}

/// Logs every intent and does nothing else.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingIntentSink;

impl IntentSink for TracingIntentSink {
    fn emit(&self, intent: &Intent) {
        tracing::info!(action = %intent.action, subject = %intent.subject, "intent");
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    pub x: f64,
    pub y: f64,
}

/// A context menu or popover bound to one subject.
#[derive(Debug, Clone)]
pub struct Menu {
    anchor: Anchor,
    open: bool,
    subject: Subject,
}

impl Menu {
    pub fn new(subject: Subject) -> Self {
        Self {
            anchor: Anchor::default(),
            open: false,
            subject,
        }
    }

    pub fn open_at(&mut self, x: f64, y: f64) {
        self.anchor = Anchor { x, y };
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    pub fn subject(&self) -> &Subject {
        &self.subject
    }

    /// Emit `action(subject)` and close. A closed menu emits nothing.
    pub fn select(
        &mut self,
        action: impl Into<MenuAction>,
        sink: &dyn IntentSink,
    ) -> Option<Intent> {
        if !self.open {
            return None;
        }

        let intent = Intent {
            action: action.into(),
            subject: self.subject.clone(),
        };
        sink.emit(&intent);
        self.close();
        Some(intent)
    }
}
