//! Listing ingestion and entry validation.
//!
//! A listing is either a bare JSON array of `{path, type}` records or a
//! hosted-git recursive tree response carrying the records under `tree`.

use crate::error::{ApiError, InvalidEntryReason, ValidationError};
use crate::types::{Entry, EntryKind, RawEntry, SEPARATOR};
use serde::Deserialize;
use tracing::{debug, warn};

#[derive(Deserialize)]
#[serde(untagged)]
enum ListingDocument {
    Tree {
        tree: Vec<RawEntry>,
        #[serde(default)]
        truncated: bool,
    },
    Entries(Vec<RawEntry>),
}

/// Parse a listing document into raw entries, preserving order.
pub fn parse_listing(json: &str) -> Result<Vec<RawEntry>, ApiError> {
    let doc: ListingDocument = serde_json::from_str(json).map_err(|e| {
        ApiError::Listing(format!(
            "expected an array of entries or an object with a `tree` array: {}",
            e
        ))
    })?;
    let entries = match doc {
        ListingDocument::Tree { tree, truncated } => {
            if truncated {
                warn!(
                    entries = tree.len(),
                    "listing is marked truncated; tree will be incomplete"
                );
            }
            tree
        }
        ListingDocument::Entries(entries) => entries,
    };
    debug!(entries = entries.len(), "parsed listing");
    Ok(entries)
}

/// Validate a single raw entry at `index`.
pub fn validate_entry(index: usize, raw: &RawEntry) -> Result<Entry, ValidationError> {
    let reject = |reason| ValidationError {
        index,
        path: raw.path.clone(),
        reason,
    };

    if raw.path.is_empty() {
        return Err(reject(InvalidEntryReason::EmptyPath));
    }
    if raw.path.starts_with(SEPARATOR) {
        return Err(reject(InvalidEntryReason::LeadingSeparator));
    }
    if raw.path.split(SEPARATOR).any(str::is_empty) {
        return Err(reject(InvalidEntryReason::EmptySegment));
    }
    let kind = EntryKind::from_type_tag(&raw.entry_type)
        .ok_or_else(|| reject(InvalidEntryReason::UnknownType(raw.entry_type.clone())))?;

    Ok(Entry {
        path: raw.path.clone(),
        kind,
    })
}

/// Validate every entry; the first malformed entry fails the whole listing.
pub fn validate_entries(raw: &[RawEntry]) -> Result<Vec<Entry>, ValidationError> {
    raw.iter()
        .enumerate()
        .map(|(index, entry)| validate_entry(index, entry))
        .collect()
}

/// Result of pre-filtering a listing from an unreliable source.
#[derive(Debug, Clone, Default)]
pub struct Partitioned {
    pub valid: Vec<Entry>,
    pub rejected: Vec<ValidationError>,
}

/// Split a listing into valid entries and rejections, keeping input order.
pub fn retain_valid(raw: &[RawEntry]) -> Partitioned {
    let mut out = Partitioned::default();
    for (index, entry) in raw.iter().enumerate() {
        match validate_entry(index, entry) {
            Ok(valid) => out.valid.push(valid),
            Err(e) => {
                warn!(index = e.index, path = %e.path, reason = %e.reason, "skipping invalid entry");
                out.rejected.push(e);
            }
        }
    }
    out
}
