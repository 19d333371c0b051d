//! Core types for repository listings.

use serde::{Deserialize, Serialize};

/// Path separator used by listings
pub const SEPARATOR: char = '/';

/// Entry kind as declared by the listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Directory,
}

impl EntryKind {
    /// Map a wire type tag to a kind. Hosted-git listings use `blob`/`tree`.
    pub fn from_type_tag(tag: &str) -> Option<Self> {
        match tag {
            "blob" | "file" => Some(EntryKind::File),
            "tree" | "directory" => Some(EntryKind::Directory),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::File => "file",
            EntryKind::Directory => "directory",
        }
    }
}

/// Raw listing record exactly as supplied by the retrieval side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEntry {
    pub path: String,
    #[serde(rename = "type")]
    pub entry_type: String,
}

impl RawEntry {
    pub fn new(path: impl Into<String>, entry_type: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            entry_type: entry_type.into(),
        }
    }
}

/// Validated listing entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entry {
    pub path: String,
    pub kind: EntryKind,
}

impl Entry {
    pub fn file(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::File,
        }
    }

    pub fn directory(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::Directory,
        }
    }
}

/// Final segment of a `/`-separated path.
pub fn base_name(path: &str) -> &str {
    path.rsplit(SEPARATOR).next().unwrap_or(path)
}

/// Parent prefix of a path, or `None` for a top-level path.
pub fn parent_path(path: &str) -> Option<&str> {
    path.rfind(SEPARATOR).map(|idx| &path[..idx])
}
