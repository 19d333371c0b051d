//! Repomap: Repository Listing Materialization
//!
//! Turns a flat, unordered listing of repository paths into (a) a
//! deduplicated containment graph for spatial visualization and (b) a
//! paginated, annotated tabular report.

pub mod annotate;
pub mod config;
pub mod error;
pub mod listing;
pub mod logging;
pub mod report;
pub mod tooling;
pub mod tree;
pub mod types;

pub use annotate::{AnnotationTable, Annotator};
pub use error::{ApiError, ValidationError};
pub use report::{paginate, Page, ReportLayout, ReportRow};
pub use tree::{RepoGraph, TreeBuilder};
pub use types::{Entry, EntryKind, RawEntry};
