//! Repository tree materialization: nodes, containment edges, export.

pub mod builder;
pub mod graph;
pub mod html;
pub mod node;

pub use builder::TreeBuilder;
pub use graph::{GraphExport, GraphSummary, RepoGraph};
pub use node::{Anomaly, Edge, Node, NodeKind, ROOT_ID};
