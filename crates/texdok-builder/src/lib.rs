//! texdok-builder - LaTeX document trees
//!
//! This crate provides an in-memory tree of renderable nodes that
//! serializes to LaTeX source.
//!
//! # Example
//!
//! ```
//! use texdok_builder::{Document, List, ListItem, Paragraph, Section, Table};
//!
//! let mut doc = Document::new();
//! doc.add_packages(["graphicx"]);
//! doc.add_custom_preamble("graphicspath", "/img");
//!
//! let mut section = Section::new("Introduction");
//! section.add_content(Paragraph::new("Hello"));
//!
//! let mut list = List::new();
//! list.add_item(ListItem::new("First")).unwrap();
//! section.add_content(list);
//!
//! let mut table = Table::new(["A", "B"]);
//! table.add_row(["1", "2"]).unwrap();
//! section.add_content(table);
//!
//! doc.add_component(section);
//!
//! let latex = doc.render();
//! assert!(latex.starts_with("\\documentclass{article}\n\\usepackage{graphicx}\n"));
//! assert!(latex.ends_with("\\end{document}"));
//! ```
//!
//! Text is inserted verbatim; LaTeX special characters are not escaped.

mod component;
mod document;
mod error;
mod leaf;
mod list;
pub mod sample;
mod section;
mod table;

pub use component::{Component, TexComponent};
pub use document::Document;
pub use error::{BuildError, Result};
pub use leaf::{Image, ListItem, MathFormula, Paragraph, DEFAULT_IMAGE_WIDTH};
pub use list::List;
pub use section::Section;
pub use table::{Table, DEFAULT_ALIGN};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
