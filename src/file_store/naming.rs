//! Stored-name derivation: `<base>-<unique><ext>`.

use std::str::FromStr;

use uuid::Uuid;

use super::FileStoreError;
use crate::clock::Clock;

/// How the unique part of a stored name is produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NamingStrategy {
    /// Epoch milliseconds. Two saves of the same name within one millisecond
    /// resolve to the same stored name and the later write wins.
    Timestamp,
    /// Random UUID v4 (simple form).
    #[default]
    Uuid,
}

impl FromStr for NamingStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "timestamp" => Ok(NamingStrategy::Timestamp),
            "uuid" => Ok(NamingStrategy::Uuid),
            other => Err(format!("unknown naming strategy '{other}'")),
        }
    }
}

/// Reduce a caller-supplied name to its final path component. Characters that
/// would break the name as a url path segment (`#`, `?`, `%`, whitespace and
/// control characters) become `_`.
pub fn sanitize_name(desired_name: &str) -> Result<String, FileStoreError> {
    let name = desired_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .trim();

    if name.is_empty() || name == "." || name == ".." || name.contains('\0') {
        return Err(FileStoreError::InvalidName(desired_name.to_string()));
    }

    Ok(name
        .chars()
        .map(|c| match c {
            '#' | '?' | '%' => '_',
            c if c.is_whitespace() || c.is_control() => '_',
            c => c,
        })
        .collect())
}

/// Split into base and extension. The extension keeps its dot; a leading dot
/// (`.env`) is part of the base.
pub fn split_name(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) if idx > 0 => name.split_at(idx),
        _ => (name, ""),
    }
}

pub fn stored_name(
    strategy: NamingStrategy,
    clock: &dyn Clock,
    desired_name: &str,
) -> Result<String, FileStoreError> {
    let name = sanitize_name(desired_name)?;
    let (base, ext) = split_name(&name);
    let unique = match strategy {
        NamingStrategy::Timestamp => clock.now_millis().to_string(),
        NamingStrategy::Uuid => Uuid::new_v4().simple().to_string(),
    };
    Ok(format!("{base}-{unique}{ext}"))
}
