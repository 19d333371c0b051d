//! Graph node, edge and anomaly types.

use crate::types::EntryKind;
use serde::{Deserialize, Serialize};

/// Reserved id of the synthetic apex node
pub const ROOT_ID: &str = "root";

/// Display name of the synthetic apex node
pub const ROOT_LABEL: &str = "ROOT";

/// Node kind in the materialized tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Root,
    Directory,
    File,
}

impl NodeKind {
    /// Renderer grouping key.
    pub fn group(&self) -> &'static str {
        match self {
            NodeKind::Root => "root",
            NodeKind::Directory => "folder",
            NodeKind::File => "file",
        }
    }

    /// Renderer colour hint.
    pub fn color(&self) -> &'static str {
        match self {
            NodeKind::Root => "#ff4444",
            NodeKind::Directory => "#ffdd00",
            NodeKind::File => "#00d8ff",
        }
    }

    /// Renderer size hint.
    pub fn size(&self) -> u32 {
        match self {
            NodeKind::Root => 20,
            NodeKind::Directory => 12,
            NodeKind::File => 6,
        }
    }
}

/// A materialized path (or the apex)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Full path from the repository root, or [`ROOT_ID`]
    pub id: String,
    pub display_name: String,
    pub kind: NodeKind,
    pub annotation: Option<String>,
}

impl Node {
    pub fn root() -> Self {
        Self {
            id: ROOT_ID.to_string(),
            display_name: ROOT_LABEL.to_string(),
            kind: NodeKind::Root,
            annotation: None,
        }
    }

    pub fn is_root(&self) -> bool {
        self.kind == NodeKind::Root
    }

    /// Number of path segments; zero for the apex.
    pub fn depth(&self) -> usize {
        if self.is_root() {
            0
        } else {
            self.id.split(crate::types::SEPARATOR).count()
        }
    }
}

/// Containment edge, parent -> child
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    pub parent_id: String,
    pub child_id: String,
}

/// Irregularity detected while classifying prefixes. Never fatal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "anomaly", rename_all = "snake_case")]
pub enum Anomaly {
    /// A path was declared a file but also behaves as a directory.
    /// Resolved as a directory.
    KindConflict {
        path: String,
        declared: Vec<EntryKind>,
        has_children: bool,
    },
    /// A top-level path named like the apex id; merged into the apex.
    ReservedRootPath { declared: Vec<EntryKind> },
}

impl std::fmt::Display for Anomaly {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Anomaly::KindConflict {
                path,
                declared,
                has_children,
            } => {
                let kinds: Vec<&str> = declared.iter().map(|k| k.as_str()).collect();
                write!(
                    f,
                    "{}: declared as [{}]{}; treated as directory",
                    path,
                    kinds.join(", "),
                    if *has_children { " but has children" } else { "" }
                )
            }
            Anomaly::ReservedRootPath { .. } => {
                write!(f, "{}: top-level path shadows the apex id; merged into apex", ROOT_ID)
            }
        }
    }
}
