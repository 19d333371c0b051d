//! Semantic Annotator
//!
//! Maps a path's base name to a short human-readable label. Exact base-name
//! matches win; otherwise the extension is checked against an ordered rule
//! table. An empty label means "no annotation" and is not an error.

use crate::types::base_name;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One extension -> label rule. `extension` is given without the dot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionRule {
    pub extension: String,
    pub label: String,
}

impl ExtensionRule {
    pub fn new(extension: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
            label: label.into(),
        }
    }
}

/// Lookup data for the annotator: well-known names plus extension rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationTable {
    #[serde(default)]
    pub names: BTreeMap<String, String>,
    #[serde(default)]
    pub extensions: Vec<ExtensionRule>,
}

impl AnnotationTable {
    /// A table with no entries; every lookup misses.
    pub fn empty() -> Self {
        Self {
            names: BTreeMap::new(),
            extensions: Vec::new(),
        }
    }

    /// Built-in table of common repository names and file extensions.
    pub fn builtin() -> Self {
        let names = [
            ("src", "Source Code"),
            ("public", "Public Assets"),
            ("components", "UI Components"),
            ("assets", "Images/Fonts"),
            ("server", "Backend Logic"),
            ("client", "Frontend UI"),
            ("utils", "Helpers"),
            ("config", "Config Settings"),
            ("routes", "API Routes"),
            ("models", "DB Models"),
            ("controllers", "API Logic"),
            ("package.json", "Dependencies"),
            (".gitignore", "Git Ignore"),
            ("README.md", "Documentation"),
            (".env", "Secrets"),
            ("index.js", "Entry Point"),
            ("App.js", "Main Component"),
            ("vite.config.js", "Vite Config"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let extensions = vec![
            ExtensionRule::new("js", "Logic File"),
            ExtensionRule::new("css", "Styles"),
            ExtensionRule::new("html", "HTML"),
            ExtensionRule::new("json", "Data"),
            ExtensionRule::new("jsx", "Component"),
        ];

        Self { names, extensions }
    }

    /// Layer `overrides` on top of this table.
    ///
    /// Override names replace same-named entries. Override extension rules are
    /// consulted before the existing ones.
    pub fn with_overrides(mut self, overrides: AnnotationTable) -> Self {
        self.names.extend(overrides.names);
        let mut extensions = overrides.extensions;
        extensions.append(&mut self.extensions);
        self.extensions = extensions;
        self
    }
}

impl Default for AnnotationTable {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Pure lookup over an injected [`AnnotationTable`].
#[derive(Debug, Clone, Default)]
pub struct Annotator {
    table: AnnotationTable,
}

impl Annotator {
    pub fn new(table: AnnotationTable) -> Self {
        Self { table }
    }

    /// Label for `path`, or `None` when no rule applies.
    pub fn label(&self, path: &str) -> Option<&str> {
        let name = base_name(path);
        if let Some(label) = self.table.names.get(name) {
            return Some(label.as_str());
        }
        let (_, extension) = name.rsplit_once('.')?;
        self.table
            .extensions
            .iter()
            .find(|rule| rule.extension == extension)
            .map(|rule| rule.label.as_str())
    }

    /// Label for `path`; the empty string signals no annotation.
    pub fn annotate(&self, path: &str) -> String {
        self.label(path).unwrap_or_default().to_string()
    }
}
