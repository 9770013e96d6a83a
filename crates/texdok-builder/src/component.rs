//! The component capability and the closed set of node kinds
//!
//! Every node that can appear in a document implements [`TexComponent`].
//! [`Component`] is the owned sum type stored in documents and sections.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{BuildError, Result};
use crate::leaf::{Image, ListItem, MathFormula, Paragraph};
use crate::list::List;
use crate::section::Section;
use crate::table::Table;

/// A node capable of producing a LaTeX fragment
pub trait TexComponent {
    /// Render this node to a LaTeX fragment.
    ///
    /// Must be a pure function of the node's fields.
    fn render(&self) -> String;
}

/// Any renderable document node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Component {
    /// A floating figure
    Image(Image),
    /// A single `\item`
    ListItem(ListItem),
    /// A bulleted or enumerated list
    List(List),
    /// A tabular block
    Table(Table),
    /// Display math
    MathFormula(MathFormula),
    /// Plain paragraph text
    Paragraph(Paragraph),
    /// A titled section with nested content
    Section(Section),
}

impl Component {
    /// Short name of the variant, matching its serialized `type` tag
    pub fn kind(&self) -> &'static str {
        match self {
            Component::Image(_) => "image",
            Component::ListItem(_) => "list_item",
            Component::List(_) => "list",
            Component::Table(_) => "table",
            Component::MathFormula(_) => "math_formula",
            Component::Paragraph(_) => "paragraph",
            Component::Section(_) => "section",
        }
    }

    /// Decode a component from an untyped value.
    ///
    /// Anything that does not decode as a component is a
    /// [`BuildError::TypeMismatch`].
    pub fn from_value(value: Value) -> Result<Self> {
        let found = describe(&value);
        serde_json::from_value(value)
            .map_err(|e| BuildError::type_mismatch("component", format!("{} ({})", found, e)))
    }
}

impl TexComponent for Component {
    fn render(&self) -> String {
        match self {
            Component::Image(c) => c.render(),
            Component::ListItem(c) => c.render(),
            Component::List(c) => c.render(),
            Component::Table(c) => c.render(),
            Component::MathFormula(c) => c.render(),
            Component::Paragraph(c) => c.render(),
            Component::Section(c) => c.render(),
        }
    }
}

macro_rules! impl_from_node {
    ($($node:ident),* $(,)?) => {
        $(
            impl From<$node> for Component {
                fn from(node: $node) -> Self {
                    Component::$node(node)
                }
            }
        )*
    };
}

impl_from_node!(Image, ListItem, List, Table, MathFormula, Paragraph, Section);

/// Human-readable summary of an untyped value for error messages
fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(_) => "boolean".to_string(),
        Value::Number(_) => "number".to_string(),
        Value::String(_) => "string".to_string(),
        Value::Array(_) => "array".to_string(),
        Value::Object(map) => match map.get("type").and_then(Value::as_str) {
            Some(tag) => format!("object of type `{}`", tag),
            None => "untagged object".to_string(),
        },
    }
}
