//! Configuration
//!
//! Layered configuration for logging, report layout and annotation tables.
//! Precedence (lowest to highest): built-in defaults, global file, workspace
//! file, `REPOMAP__*` environment variables.

mod facade;
pub mod merge;
pub mod paths;
pub mod sources;

pub use facade::ConfigLoader;

use crate::annotate::{AnnotationTable, ExtensionRule};
use crate::error::ApiError;
use crate::logging::LoggingConfig;
use crate::report::ReportLayout;
use serde::{Deserialize, Serialize};

/// Well-known base name -> label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameRule {
    pub name: String,
    pub label: String,
}

/// User-supplied annotation rules
///
/// Names are a list rather than a map so that case-sensitive file names
/// survive the config key normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationConfig {
    /// Use only these rules instead of layering them over the built-in table
    #[serde(default)]
    pub replace_defaults: bool,

    #[serde(default)]
    pub names: Vec<NameRule>,

    #[serde(default)]
    pub extensions: Vec<ExtensionRule>,
}

impl AnnotationConfig {
    /// Resolve into the table handed to the annotator.
    pub fn to_table(&self) -> AnnotationTable {
        let overrides = AnnotationTable {
            names: self
                .names
                .iter()
                .map(|r| (r.name.clone(), r.label.clone()))
                .collect(),
            extensions: self
                .extensions
                .iter()
                .map(|r| ExtensionRule::new(r.extension.trim_start_matches('.'), &r.label))
                .collect(),
        };
        if self.replace_defaults {
            overrides
        } else {
            AnnotationTable::builtin().with_overrides(overrides)
        }
    }
}

fn default_true() -> bool {
    true
}

/// Root configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoMapConfig {
    /// Colourize text output
    #[serde(default = "default_true")]
    pub color: bool,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub report: ReportLayout,

    #[serde(default)]
    pub annotations: AnnotationConfig,
}

impl Default for RepoMapConfig {
    fn default() -> Self {
        Self {
            color: default_true(),
            logging: LoggingConfig::default(),
            report: ReportLayout::default(),
            annotations: AnnotationConfig::default(),
        }
    }
}

impl RepoMapConfig {
    /// Reject settings the report and logging layers cannot honour.
    pub fn validate(&self) -> Result<(), ApiError> {
        self.report.validate()?;
        if self.annotations.replace_defaults
            && self.annotations.names.is_empty()
            && self.annotations.extensions.is_empty()
        {
            tracing::warn!("annotations.replace_defaults is set with no rules; nothing will be annotated");
        }
        Ok(())
    }

    /// Effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApiError> {
        toml::to_string_pretty(self)
            .map_err(|e| ApiError::ConfigError(format!("Failed to serialize config: {}", e)))
    }
}
