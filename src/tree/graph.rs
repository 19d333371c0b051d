//! Materialized repository graph and its renderer-facing export shape.

use crate::tree::node::{Anomaly, Edge, Node, NodeKind};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Output of one tree build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoGraph {
    /// Apex first, then prefixes in first-appearance order
    pub nodes: Vec<Node>,
    /// One edge per non-apex node
    pub edges: Vec<Edge>,
    pub anomalies: Vec<Anomaly>,
}

impl RepoGraph {
    /// Graph containing only the apex.
    pub fn empty() -> Self {
        Self {
            nodes: vec![Node::root()],
            edges: Vec::new(),
            anomalies: Vec::new(),
        }
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn summary(&self) -> GraphSummary {
        let count = |kind: NodeKind| self.nodes.iter().filter(|n| n.kind == kind).count();
        GraphSummary {
            nodes: self.nodes.len(),
            edges: self.edges.len(),
            files: count(NodeKind::File),
            directories: count(NodeKind::Directory),
            max_depth: self.nodes.iter().map(Node::depth).max().unwrap_or(0),
            anomalies: self.anomalies.clone(),
        }
    }

    /// Order-insensitive view of the node/edge content.
    pub fn canonical(&self) -> (Vec<CanonicalNode>, Vec<Edge>) {
        let mut nodes: Vec<CanonicalNode> = self
            .nodes
            .iter()
            .map(|n| CanonicalNode {
                id: n.id.clone(),
                display_name: n.display_name.clone(),
                kind: n.kind,
                annotation: n.annotation.clone(),
            })
            .collect();
        nodes.sort_by(|a, b| a.id.cmp(&b.id));
        let mut edges = self.edges.clone();
        edges.sort();
        (nodes, edges)
    }

    /// Check the structural invariants: unique ids, a single apex, and
    /// exactly one incoming edge per non-apex node.
    pub fn check_invariants(&self) -> Result<(), String> {
        let mut ids = HashSet::new();
        for node in &self.nodes {
            if !ids.insert(node.id.as_str()) {
                return Err(format!("duplicate node id {}", node.id));
            }
        }
        if self.nodes.iter().filter(|n| n.is_root()).count() != 1 {
            return Err("expected exactly one apex node".to_string());
        }
        let mut targets = HashSet::new();
        for edge in &self.edges {
            if !ids.contains(edge.parent_id.as_str()) {
                return Err(format!("edge from unknown node {}", edge.parent_id));
            }
            if !targets.insert(edge.child_id.as_str()) {
                return Err(format!("node {} has more than one parent", edge.child_id));
            }
        }
        for node in self.nodes.iter().filter(|n| !n.is_root()) {
            if !targets.contains(node.id.as_str()) {
                return Err(format!("node {} has no parent edge", node.id));
            }
        }
        if targets.len() != self.nodes.len() - 1 {
            return Err("edge targets do not match node set".to_string());
        }
        Ok(())
    }

    /// Renderer-facing `{nodes, links}` document.
    pub fn to_export(&self) -> GraphExport {
        GraphExport {
            nodes: self
                .nodes
                .iter()
                .map(|n| ExportNode {
                    id: n.id.clone(),
                    name: n.display_name.clone(),
                    kind: n.kind,
                    desc: n.annotation.clone(),
                    group: n.kind.group().to_string(),
                    color: n.kind.color().to_string(),
                    size: n.kind.size(),
                })
                .collect(),
            links: self
                .edges
                .iter()
                .map(|e| Link {
                    source: e.parent_id.clone(),
                    target: e.child_id.clone(),
                })
                .collect(),
        }
    }
}

/// Node content without renderer hints, sortable by id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalNode {
    pub id: String,
    pub display_name: String,
    pub kind: NodeKind,
    pub annotation: Option<String>,
}

/// Counts describing a built graph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphSummary {
    pub nodes: usize,
    pub edges: usize,
    pub files: usize,
    pub directories: usize,
    pub max_depth: usize,
    pub anomalies: Vec<Anomaly>,
}

/// Node as consumed by the 3D renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportNode {
    pub id: String,
    pub name: String,
    pub kind: NodeKind,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub desc: Option<String>,
    pub group: String,
    pub color: String,
    pub size: u32,
}

/// Containment edge as consumed by the renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub source: String,
    pub target: String,
}

/// `{nodes, links}` document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphExport {
    pub nodes: Vec<ExportNode>,
    pub links: Vec<Link>,
}
