//! texdok CLI - Command-line interface library
//!
//! This library provides the CLI functionality for texdok, including:
//! - Example: render the built-in sample document
//! - Build: render a TOML/JSON document description
//! - Template: render a template with variables
//!
//! # Binary Usage
//!
//! ```bash
//! # Print the sample document's LaTeX
//! texdok example
//!
//! # Compile a description to dist/report.pdf
//! texdok build report.toml --pdf
//!
//! # Render a template
//! texdok template document.tpl --var title="Sample Document" --skip-empty-lines
//! ```

pub mod app;
pub mod config;

// Re-export main entry point and commands
pub use app::{build_latex, emit, example_latex, init_logging, parse_vars, run_cli, template_latex};
pub use config::Settings;
