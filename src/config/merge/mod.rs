//! Config composition: defaults, file layers and environment overlay.

mod merge_policy;
pub mod service;
