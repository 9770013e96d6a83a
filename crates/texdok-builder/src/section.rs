//! Titled sections

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::component::{Component, TexComponent};
use crate::error::Result;

/// A `\section` heading followed by its content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    #[serde(default)]
    content: Vec<Component>,
}

impl Section {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: Vec::new(),
        }
    }

    /// Append any component, including nested sections
    pub fn add_content(&mut self, component: impl Into<Component>) {
        self.content.push(component.into());
    }

    /// Decode and append an untyped value.
    ///
    /// Fails with [`BuildError::TypeMismatch`](crate::BuildError::TypeMismatch)
    /// if the value is not a component; the section is unchanged on error.
    pub fn add_value(&mut self, value: Value) -> Result<()> {
        let component = Component::from_value(value)?;
        self.content.push(component);
        Ok(())
    }

    /// Child components in insertion order
    pub fn content(&self) -> &[Component] {
        &self.content
    }
}

impl TexComponent for Section {
    fn render(&self) -> String {
        let mut output = format!("\\section{{{}}}\n", self.title);
        for child in &self.content {
            output.push_str(&child.render());
        }
        output
    }
}
