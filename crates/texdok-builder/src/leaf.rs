//! Leaf components
//!
//! Leaves render a fixed LaTeX snippet with their fields substituted
//! verbatim. LaTeX special characters are not escaped.

use serde::{Deserialize, Serialize};

use crate::component::TexComponent;

/// Width used by [`Image`] when none is given
pub const DEFAULT_IMAGE_WIDTH: &str = "\\textwidth";

fn default_width() -> String {
    DEFAULT_IMAGE_WIDTH.to_string()
}

/// A centered figure with caption and label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    /// Path passed to `\includegraphics`
    pub filepath: String,
    /// Figure caption
    #[serde(default)]
    pub caption: String,
    /// Cross-reference label
    #[serde(default)]
    pub label: String,
    /// LaTeX dimension for the `width` key
    #[serde(default = "default_width")]
    pub width: String,
}

impl Image {
    /// Create an image with empty caption and label at full text width
    pub fn new(filepath: impl Into<String>) -> Self {
        Self {
            filepath: filepath.into(),
            caption: String::new(),
            label: String::new(),
            width: default_width(),
        }
    }

    /// Set the caption
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = caption.into();
        self
    }

    /// Set the label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the width, e.g. `0.5\textwidth` or `4cm`
    pub fn with_width(mut self, width: impl Into<String>) -> Self {
        self.width = width.into();
        self
    }
}

impl TexComponent for Image {
    fn render(&self) -> String {
        format!(
            "\\begin{{figure}}[h]\n\\centering\n\\includegraphics[width={}]{{{}}}\n\\caption{{{}}}\n\\label{{{}}}\n\\end{{figure}}\n",
            self.width, self.filepath, self.caption, self.label
        )
    }
}

/// One entry of a [`List`](crate::List)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    /// Item text
    pub text: String,
}

impl ListItem {
    /// Create a list item
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl TexComponent for ListItem {
    fn render(&self) -> String {
        format!("\\item {}\n", self.text)
    }
}

/// A display-math formula
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MathFormula {
    /// Formula source, inserted verbatim
    pub formula: String,
}

impl MathFormula {
    pub fn new(formula: impl Into<String>) -> Self {
        Self {
            formula: formula.into(),
        }
    }
}

impl TexComponent for MathFormula {
    fn render(&self) -> String {
        format!("\\[{}\\]\n", self.formula)
    }
}

/// A paragraph of text followed by a paragraph break
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Paragraph {
    pub text: String,
}

impl Paragraph {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl TexComponent for Paragraph {
    fn render(&self) -> String {
        format!("{}\n\n", self.text)
    }
}
