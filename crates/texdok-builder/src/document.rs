//! Document root
//!
//! A [`Document`] owns the preamble declarations and the top-level
//! components, and renders them into a complete `article` source.

use std::collections::HashSet;

use serde::Deserialize;
use serde_json::Value;

use crate::component::{Component, TexComponent};
use crate::error::Result;

/// A complete LaTeX document
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Document {
    /// Packages to include; emitted sorted
    packages: HashSet<String>,
    /// Custom preamble commands as `(command, argument)` pairs
    #[serde(rename = "preamble")]
    custom: Vec<(String, String)>,
    /// Top-level content
    components: Vec<Component>,
}

impl Document {
    /// Create a new empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a document description from TOML
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Parse a document description from JSON
    pub fn from_json_str(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }

    /// Add packages; names already present are ignored
    pub fn add_packages<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.packages.extend(names.into_iter().map(Into::into));
    }

    /// Append a `\key{value}` preamble line
    pub fn add_custom_preamble(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.custom.push((key.into(), value.into()));
    }

    /// Append a top-level component
    pub fn add_component(&mut self, component: impl Into<Component>) {
        self.components.push(component.into());
    }

    /// Decode and append an untyped value.
    ///
    /// Fails with [`BuildError::TypeMismatch`](crate::BuildError::TypeMismatch)
    /// when the value is not a component. The document is unchanged on error.
    pub fn add_value(&mut self, value: Value) -> Result<()> {
        let component = Component::from_value(value)?;
        self.components.push(component);
        Ok(())
    }

    /// Package names in render order
    pub fn packages(&self) -> Vec<&str> {
        let mut packages: Vec<&str> = self.packages.iter().map(String::as_str).collect();
        packages.sort_unstable();
        packages
    }

    /// Custom preamble pairs in insertion order
    pub fn preamble(&self) -> &[(String, String)] {
        &self.custom
    }

    /// Top-level components in insertion order
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Check if the document has no components
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Get the number of top-level components
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Render the full document source
    pub fn render(&self) -> String {
        let mut doc = String::from("\\documentclass{article}\n");

        // Set iteration order is unspecified; sort for reproducible output
        for package in self.packages() {
            doc.push_str(&format!("\\usepackage{{{}}}\n", package));
        }

        for (key, value) in &self.custom {
            doc.push_str(&format!("\\{}{{{}}}\n", key, value));
        }

        doc.push_str("\\begin{document}\n");
        for component in &self.components {
            doc.push_str(&component.render());
        }
        doc.push_str("\\end{document}");
        doc
    }
}
