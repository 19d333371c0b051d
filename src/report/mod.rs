//! Tabular report of a listing: header block plus paginated rows.

pub mod format;
pub mod pager;

pub use format::format_report_text;
pub use pager::{paginate, Page, Pager, ReportLayout, ReportRow, DIR_TAG, FILE_TAG};

use crate::annotate::Annotator;
use crate::error::ApiError;
use crate::types::{Entry, EntryKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Title block shown above the table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportHeader {
    pub title: String,
    pub total_entries: usize,
    pub files: usize,
    pub directories: usize,
    pub generated_at: DateTime<Utc>,
}

/// Complete report, ready for document composition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub header: ReportHeader,
    pub pages: Vec<Page>,
}

impl Report {
    /// Total rows across all pages.
    pub fn row_count(&self) -> usize {
        self.pages.iter().map(|p| p.rows.len()).sum()
    }
}

/// Build a report for `entries` in input order.
pub fn build_report(
    title: &str,
    entries: &[Entry],
    annotator: &Annotator,
    layout: &ReportLayout,
) -> Result<Report, ApiError> {
    layout.validate()?;

    let files = entries
        .iter()
        .filter(|e| e.kind == EntryKind::File)
        .count();
    let header = ReportHeader {
        title: title.to_string(),
        total_entries: entries.len(),
        files,
        directories: entries.len() - files,
        generated_at: Utc::now(),
    };
    let pages = paginate(entries, |path| annotator.annotate(path), layout);
    debug!(
        entries = entries.len(),
        pages = pages.len(),
        "paginated report"
    );

    Ok(Report { header, pages })
}
