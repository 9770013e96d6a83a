//! Bulleted and enumerated lists

use serde::{Deserialize, Serialize};

use crate::component::{Component, TexComponent};
use crate::error::{BuildError, Result};
use crate::leaf::ListItem;

/// An `itemize` or `enumerate` environment
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct List {
    /// Use `enumerate` instead of `itemize`
    #[serde(default)]
    pub enumerated: bool,
    #[serde(default)]
    items: Vec<ListItem>,
}

impl List {
    /// Create an empty bulleted list
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty numbered list
    pub fn enumerated() -> Self {
        Self {
            enumerated: true,
            items: Vec::new(),
        }
    }

    /// Append an item, rejecting anything that is not a [`ListItem`].
    ///
    /// On error the list is left unchanged.
    pub fn add_item(&mut self, item: impl Into<Component>) -> Result<()> {
        match item.into() {
            Component::ListItem(item) => {
                self.items.push(item);
                Ok(())
            }
            other => Err(BuildError::type_mismatch("list_item", other.kind())),
        }
    }

    /// Append a typed item
    pub fn push(&mut self, item: ListItem) {
        self.items.push(item);
    }

    /// Items in insertion order
    pub fn items(&self) -> &[ListItem] {
        &self.items
    }

    /// Name of the enclosing LaTeX environment
    pub fn environment(&self) -> &'static str {
        if self.enumerated {
            "enumerate"
        } else {
            "itemize"
        }
    }
}

impl TexComponent for List {
    fn render(&self) -> String {
        let env = self.environment();
        let content: String = self.items.iter().map(ListItem::render).collect();
        format!("\\begin{{{env}}}\n{content}\\end{{{env}}}\n")
    }
}
