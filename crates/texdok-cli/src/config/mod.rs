//! Configuration
//!
//! Settings are loaded from `texdok.toml`, either the file named with
//! `--config` or one in the current directory:
//!
//! ```toml
//! [paths]
//! dist = "dist"
//! images = "images"
//! templates = "templates"
//!
//! [pdf]
//! program = "pdflatex"
//! args = ["-interaction=nonstopmode"]
//! ```
//!
//! Relative paths are resolved against the directory holding the file.

mod settings;

#[cfg(test)]
mod tests;

pub use settings::{PathSettings, PdfSettings, Settings, CONFIG_FILE};
