//! texdok-template - Template rendering for LaTeX sources
//!
//! Thin wrapper over the handlebars engine configured for LaTeX output:
//! no HTML escaping, plus `date`, `default` and `length` helpers.
//!
//! # Example
//!
//! ```ignore
//! use serde_json::json;
//! use texdok_template::{RenderOptions, TemplateRenderer};
//!
//! let renderer = TemplateRenderer::new("templates");
//! let latex = renderer.render_with(
//!     "document.tpl",
//!     &json!({ "title": "Sample Document", "author": "John Doe" }),
//!     RenderOptions::new().with_skip_empty_lines(true),
//! )?;
//! ```

mod error;
pub mod helpers;
mod renderer;

pub use error::{Result, TemplateError};
pub use renderer::{RenderOptions, TemplateRenderer};
