//! Template loading and rendering

use std::path::{Path, PathBuf};

use handlebars::Handlebars;
use serde::Serialize;
use tracing::debug;

use crate::error::{Result, TemplateError};
use crate::helpers;

/// Options that post-process rendered output
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Drop lines that are empty after trimming whitespace
    pub skip_empty_lines: bool,
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_skip_empty_lines(mut self, skip: bool) -> Self {
        self.skip_empty_lines = skip;
        self
    }
}

/// Renders named templates from a directory
///
/// Output is never HTML-escaped.
pub struct TemplateRenderer {
    template_dir: PathBuf,
    registry: Handlebars<'static>,
}

impl TemplateRenderer {
    /// Create a renderer for templates under `template_dir`
    pub fn new(template_dir: impl Into<PathBuf>) -> Self {
        let mut registry = Handlebars::new();
        registry.register_escape_fn(handlebars::no_escape);
        helpers::register(&mut registry);
        Self {
            template_dir: template_dir.into(),
            registry,
        }
    }

    /// Directory templates are loaded from
    pub fn template_dir(&self) -> &Path {
        &self.template_dir
    }

    /// Render the template file `name` with `variables`
    pub fn render<T: Serialize>(&self, name: &str, variables: &T) -> Result<String> {
        self.render_with(name, variables, RenderOptions::default())
    }

    /// Render the template file `name` with post-processing options
    pub fn render_with<T: Serialize>(
        &self,
        name: &str,
        variables: &T,
        options: RenderOptions,
    ) -> Result<String> {
        let path = self.template_dir.join(name);
        if !path.is_file() {
            return Err(TemplateError::TemplateNotFound {
                name: name.to_string(),
                path: self.template_dir.clone(),
            });
        }

        debug!("Rendering template {}", path.display());
        let source = std::fs::read_to_string(&path)?;
        let output = self.render_str(&source, variables)?;
        Ok(apply_options(output, options))
    }

    /// Render an inline template source
    pub fn render_str<T: Serialize>(&self, source: &str, variables: &T) -> Result<String> {
        Ok(self.registry.render_template(source, variables)?)
    }
}

fn apply_options(output: String, options: RenderOptions) -> String {
    if !options.skip_empty_lines {
        return output;
    }
    output
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
