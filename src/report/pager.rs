//! Report Pager
//!
//! Lays the listing out as fixed-capacity pages of `(kind, path, annotation)`
//! rows, in input order. Pagination is loss-free: every entry lands on
//! exactly one page and rows are never split.

use crate::error::ApiError;
use crate::types::{Entry, EntryKind};
use serde::{Deserialize, Serialize};

/// Fixed-width kind tag for files
pub const FILE_TAG: &str = "[ FILE ]";
/// Fixed-width kind tag for directories
pub const DIR_TAG: &str = "[ DIR  ]";

const ELLIPSIS: &str = "...";

fn default_page_capacity() -> u32 {
    700
}

fn default_row_height() -> u32 {
    15
}

fn default_first_page_offset() -> u32 {
    110
}

fn default_page_top_offset() -> u32 {
    40
}

fn default_path_width() -> usize {
    55
}

/// Vertical layout of report pages, in line-height units of the target document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportLayout {
    /// Once the running offset passes this, the next row opens a new page
    #[serde(default = "default_page_capacity")]
    pub page_capacity: u32,

    #[serde(default = "default_row_height")]
    pub row_height: u32,

    /// Starting offset on page one, below the title block and table header
    #[serde(default = "default_first_page_offset")]
    pub first_page_offset: u32,

    /// Starting offset on continuation pages
    #[serde(default = "default_page_top_offset")]
    pub page_top_offset: u32,

    /// Display width of the path column, in characters
    #[serde(default = "default_path_width")]
    pub path_width: usize,
}

impl Default for ReportLayout {
    fn default() -> Self {
        Self {
            page_capacity: default_page_capacity(),
            row_height: default_row_height(),
            first_page_offset: default_first_page_offset(),
            page_top_offset: default_page_top_offset(),
            path_width: default_path_width(),
        }
    }
}

impl ReportLayout {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.row_height == 0 {
            return Err(ApiError::ConfigError(
                "report.row_height must be greater than zero".to_string(),
            ));
        }
        if self.path_width <= ELLIPSIS.len() {
            return Err(ApiError::ConfigError(format!(
                "report.path_width must be at least {}",
                ELLIPSIS.len() + 1
            )));
        }
        Ok(())
    }
}

/// One table row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    pub kind: EntryKind,
    pub path: String,
    /// Path as shown in the table, possibly truncated
    pub display_path: String,
    /// Empty when no annotation applies
    pub annotation: String,
}

impl ReportRow {
    pub fn kind_label(&self) -> &'static str {
        match self.kind {
            EntryKind::File => FILE_TAG,
            EntryKind::Directory => DIR_TAG,
        }
    }
}

/// One page of rows, numbered from 1
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub number: usize,
    pub rows: Vec<ReportRow>,
}

/// Shorten `path` to `width` characters, ending in `...` when cut.
pub fn truncate_path(path: &str, width: usize) -> String {
    if path.chars().count() <= width {
        return path.to_string();
    }
    let keep = width.saturating_sub(ELLIPSIS.len());
    let mut out: String = path.chars().take(keep).collect();
    out.push_str(ELLIPSIS);
    out
}

/// Lazily yields pages as capacity is exhausted.
pub struct Pager<'a, F> {
    entries: std::slice::Iter<'a, Entry>,
    annotate: F,
    layout: &'a ReportLayout,
    offset: u32,
    next_number: usize,
    pending: Option<ReportRow>,
}

impl<'a, F> Pager<'a, F>
where
    F: Fn(&str) -> String,
{
    pub fn new(entries: &'a [Entry], annotate: F, layout: &'a ReportLayout) -> Self {
        Self {
            entries: entries.iter(),
            annotate,
            layout,
            offset: layout.first_page_offset,
            next_number: 1,
            pending: None,
        }
    }

    fn row(&self, entry: &Entry) -> ReportRow {
        ReportRow {
            kind: entry.kind,
            path: entry.path.clone(),
            display_path: truncate_path(&entry.path, self.layout.path_width),
            annotation: (self.annotate)(&entry.path),
        }
    }
}

impl<'a, F> Iterator for Pager<'a, F>
where
    F: Fn(&str) -> String,
{
    type Item = Page;

    fn next(&mut self) -> Option<Page> {
        let mut rows = Vec::new();
        if let Some(row) = self.pending.take() {
            rows.push(row);
            self.offset = self.offset.saturating_add(self.layout.row_height);
        }

        while let Some(entry) = self.entries.next() {
            let row = self.row(entry);
            if self.offset > self.layout.page_capacity && !rows.is_empty() {
                self.offset = self.layout.page_top_offset;
                self.pending = Some(row);
                break;
            }
            if self.offset > self.layout.page_capacity {
                // First row of a page that starts past capacity.
                self.offset = self.layout.page_top_offset;
            }
            rows.push(row);
            self.offset = self.offset.saturating_add(self.layout.row_height);
        }

        if rows.is_empty() {
            return None;
        }
        let page = Page {
            number: self.next_number,
            rows,
        };
        self.next_number += 1;
        Some(page)
    }
}

/// Paginate `entries` in input order.
pub fn paginate<F>(entries: &[Entry], annotate: F, layout: &ReportLayout) -> Vec<Page>
where
    F: Fn(&str) -> String,
{
    Pager::new(entries, annotate, layout).collect()
}
