//! Path Tree Builder
//!
//! Materializes a flat listing into a deduplicated containment tree. The
//! build runs in two passes: the first collects the prefix closure of every
//! entry path together with what was declared about each prefix, the second
//! classifies and annotates each prefix from that record alone. Node and edge
//! content therefore does not depend on the order entries arrive in.

use crate::annotate::Annotator;
use crate::error::ValidationError;
use crate::listing::validate_entries;
use crate::tree::graph::RepoGraph;
use crate::tree::node::{Anomaly, Edge, Node, NodeKind, ROOT_ID};
use crate::types::{base_name, parent_path, Entry, EntryKind, RawEntry, SEPARATOR};
use std::collections::{BTreeSet, HashMap};
use tracing::{debug, warn};

/// What the listing said about one prefix path.
#[derive(Debug, Default)]
struct PrefixRecord {
    declared: BTreeSet<EntryKind>,
    has_children: bool,
}

impl PrefixRecord {
    fn kind(&self) -> NodeKind {
        if self.has_children || self.declared.contains(&EntryKind::Directory) {
            NodeKind::Directory
        } else {
            NodeKind::File
        }
    }

    fn is_conflicted(&self) -> bool {
        self.declared.contains(&EntryKind::File)
            && (self.has_children || self.declared.contains(&EntryKind::Directory))
    }
}

/// Prefix closure in first-appearance order.
#[derive(Debug, Default)]
struct PrefixClosure {
    order: Vec<String>,
    records: HashMap<String, PrefixRecord>,
}

impl PrefixClosure {
    fn touch(&mut self, prefix: &str) -> &mut PrefixRecord {
        if !self.records.contains_key(prefix) {
            self.order.push(prefix.to_string());
        }
        self.records.entry(prefix.to_string()).or_default()
    }

    fn collect(entries: &[Entry]) -> Self {
        let mut closure = Self::default();
        for entry in entries {
            for (idx, _) in entry.path.match_indices(SEPARATOR) {
                closure.touch(&entry.path[..idx]).has_children = true;
            }
            closure.touch(&entry.path).declared.insert(entry.kind);
        }
        closure
    }
}

/// Builds a [`RepoGraph`] from a listing using an injected annotator.
pub struct TreeBuilder<'a> {
    annotator: &'a Annotator,
}

impl<'a> TreeBuilder<'a> {
    pub fn new(annotator: &'a Annotator) -> Self {
        Self { annotator }
    }

    /// Validate a raw listing and build the tree.
    ///
    /// Fails on the first malformed entry without producing any graph.
    pub fn build(&self, raw: &[RawEntry]) -> Result<RepoGraph, ValidationError> {
        let entries = validate_entries(raw)?;
        Ok(self.build_entries(&entries))
    }

    /// Build the tree from already validated entries.
    ///
    /// The graph holds the apex plus one node per distinct prefix of the
    /// entry paths, with one edge from each node to its parent. The single
    /// exception is a top-level path literally named `root`: it shares the
    /// apex id, so it is merged into the apex rather than added as a node
    /// and is reported as [`Anomaly::ReservedRootPath`]. Its descendants
    /// then hang directly off the apex, and the node count is one less than
    /// `1 + distinct prefixes`.
    pub fn build_entries(&self, entries: &[Entry]) -> RepoGraph {
        let closure = PrefixClosure::collect(entries);

        let mut graph = RepoGraph::empty();
        graph.nodes.reserve(closure.order.len());
        graph.edges.reserve(closure.order.len());

        for prefix in &closure.order {
            let Some(record) = closure.records.get(prefix) else {
                continue;
            };

            if prefix == ROOT_ID {
                let anomaly = Anomaly::ReservedRootPath {
                    declared: record.declared.iter().copied().collect(),
                };
                warn!(%anomaly, "path collides with apex id");
                graph.anomalies.push(anomaly);
                continue;
            }

            if record.is_conflicted() {
                let anomaly = Anomaly::KindConflict {
                    path: prefix.clone(),
                    declared: record.declared.iter().copied().collect(),
                    has_children: record.has_children,
                };
                warn!(%anomaly, "conflicting entry kinds");
                graph.anomalies.push(anomaly);
            }

            let annotation = if record.declared.is_empty() {
                None
            } else {
                self.annotator.label(prefix).map(str::to_string)
            };

            graph.nodes.push(Node {
                id: prefix.clone(),
                display_name: base_name(prefix).to_string(),
                kind: record.kind(),
                annotation,
            });
            graph.edges.push(Edge {
                parent_id: parent_path(prefix).unwrap_or(ROOT_ID).to_string(),
                child_id: prefix.clone(),
            });
        }

        debug!(
            entries = entries.len(),
            nodes = graph.nodes.len(),
            edges = graph.edges.len(),
            anomalies = graph.anomalies.len(),
            "built repository tree"
        );
        graph
    }
}
