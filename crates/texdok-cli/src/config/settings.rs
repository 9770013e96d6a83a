//! Configuration settings structures

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use texdok_pdf::{PdfCompiler, DEFAULT_PROGRAM};
use texdok_template::TemplateRenderer;

/// Configuration file looked up in the current directory
pub const CONFIG_FILE: &str = "texdok.toml";

/// Top-level settings structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    /// Directory layout
    pub paths: PathSettings,
    /// LaTeX engine invocation
    pub pdf: PdfSettings,
}

/// Directory layout
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathSettings {
    /// Where compiled PDFs are placed
    pub dist: PathBuf,
    /// Image directory, registered with `\graphicspath`
    pub images: PathBuf,
    /// Template directory
    pub templates: PathBuf,
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            dist: PathBuf::from("dist"),
            images: PathBuf::from("images"),
            templates: PathBuf::from("templates"),
        }
    }
}

/// LaTeX engine invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfSettings {
    /// Engine executable
    pub program: String,
    /// Arguments placed before the source file name
    pub args: Vec<String>,
}

impl Default for PdfSettings {
    fn default() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            args: vec!["-interaction=nonstopmode".to_string()],
        }
    }
}

impl Settings {
    /// Parse settings from a TOML string
    pub fn from_toml_str(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Load settings and resolve relative paths.
    ///
    /// An explicit `path` must exist. Without one, `texdok.toml` in `cwd` is
    /// used when present, otherwise defaults relative to `cwd`.
    pub fn load(path: Option<&Path>, cwd: &Path) -> Result<Self> {
        let candidate = match path {
            Some(p) => {
                if !p.is_file() {
                    anyhow::bail!("Config file not found: {}", p.display());
                }
                Some(p.to_path_buf())
            }
            None => Some(cwd.join(CONFIG_FILE)).filter(|p| p.is_file()),
        };

        let (settings, base) = match candidate {
            Some(file) => {
                debug!("Loading config: {}", file.display());
                let content = fs::read_to_string(&file)
                    .with_context(|| format!("Failed to read config: {}", file.display()))?;
                let settings = Self::from_toml_str(&content)
                    .with_context(|| format!("Failed to parse config: {}", file.display()))?;
                let base = file
                    .parent()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| cwd.to_path_buf());
                (settings, base)
            }
            None => (Self::default(), cwd.to_path_buf()),
        };

        Ok(settings.resolved_against(&base))
    }

    /// Make every relative path absolute with respect to `base`
    pub fn resolved_against(mut self, base: &Path) -> Self {
        let base = if base.is_absolute() {
            base.to_path_buf()
        } else {
            std::env::current_dir()
                .map(|cwd| cwd.join(base))
                .unwrap_or_else(|_| base.to_path_buf())
        };
        for dir in [
            &mut self.paths.dist,
            &mut self.paths.images,
            &mut self.paths.templates,
        ] {
            if dir.is_relative() {
                *dir = base.join(&*dir);
            }
        }
        self
    }

    /// Compiler configured from these settings
    pub fn compiler(&self) -> PdfCompiler {
        PdfCompiler::new(&self.paths.dist)
            .with_program(self.pdf.program.clone())
            .with_args(self.pdf.args.iter().cloned())
    }

    /// Template renderer for the configured template directory
    pub fn renderer(&self) -> TemplateRenderer {
        TemplateRenderer::new(&self.paths.templates)
    }
}
