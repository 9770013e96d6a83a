//! CLI Application logic
//!
//! Contains the command-line interface implementation.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing::info;

use texdok_builder::{sample, Document};
use texdok_template::RenderOptions;

use crate::config::Settings;

#[derive(Parser)]
#[command(name = "texdok")]
#[command(author, version, about = "Programmatic LaTeX documents", long_about = None)]
struct Cli {
    /// Configuration file (defaults to ./texdok.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Where generated LaTeX goes
#[derive(clap::Args, Debug, Clone)]
struct OutputArgs {
    /// Compile to PDF instead of printing LaTeX
    #[arg(long)]
    pdf: bool,

    /// Base name of the generated PDF
    #[arg(short, long)]
    output: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the built-in sample document
    Example {
        #[command(flatten)]
        out: OutputArgs,
    },

    /// Render a TOML or JSON document description
    Build {
        /// Description file (.toml or .json)
        input: PathBuf,

        #[command(flatten)]
        out: OutputArgs,
    },

    /// Render a template from the template directory
    Template {
        /// Template file name, relative to the template directory
        name: String,

        /// Template variable as KEY=VALUE; VALUE is parsed as JSON when possible
        #[arg(long = "var", value_name = "KEY=VALUE")]
        vars: Vec<String>,

        /// Drop blank lines from the output
        #[arg(long)]
        skip_empty_lines: bool,

        #[command(flatten)]
        out: OutputArgs,
    },
}

/// Install the stderr log subscriber, honoring `RUST_LOG` (default `info`)
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    // A subscriber may already be installed (tests, embedding)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Run the CLI application
///
/// This is the main entry point for the command-line interface.
/// It parses arguments and dispatches to the appropriate command.
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    let cwd = std::env::current_dir().context("Failed to determine current directory")?;
    let settings = Settings::load(cli.config.as_deref(), &cwd)?;

    match cli.command {
        Commands::Example { out } => {
            let latex = example_latex(&settings)?;
            emit(&settings, &latex, out.pdf, out.output.as_deref().unwrap_or("example"))?;
        }
        Commands::Build { input, out } => {
            let latex = build_latex(&input)?;
            let name = out.output.unwrap_or_else(|| file_stem(&input));
            emit(&settings, &latex, out.pdf, &name)?;
        }
        Commands::Template {
            name,
            vars,
            skip_empty_lines,
            out,
        } => {
            let variables = parse_vars(&vars)?;
            let latex = template_latex(&settings, &name, &variables, skip_empty_lines)?;
            let output = out
                .output
                .unwrap_or_else(|| file_stem(Path::new(&name)));
            emit(&settings, &latex, out.pdf, &output)?;
        }
    }

    Ok(())
}

/// LaTeX for the built-in sample document
pub fn example_latex(settings: &Settings) -> Result<String> {
    let doc = sample::example_document(&settings.paths.images)
        .context("Failed to build sample document")?;
    Ok(doc.render())
}

/// Load a document description and render it
pub fn build_latex(input: &Path) -> Result<String> {
    if !input.exists() {
        anyhow::bail!("Input file not found: {}", input.display());
    }
    let content = fs::read_to_string(input)
        .with_context(|| format!("Failed to read input file: {}", input.display()))?;

    let is_json = input
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let doc = if is_json {
        Document::from_json_str(&content)
    } else {
        Document::from_toml_str(&content)
    }
    .with_context(|| format!("Failed to load document description: {}", input.display()))?;

    info!("Loaded {} top-level components", doc.len());
    Ok(doc.render())
}

/// Render a named template with the given variables
pub fn template_latex(
    settings: &Settings,
    name: &str,
    variables: &BTreeMap<String, Value>,
    skip_empty_lines: bool,
) -> Result<String> {
    let options = RenderOptions::new().with_skip_empty_lines(skip_empty_lines);
    settings
        .renderer()
        .render_with(name, variables, options)
        .with_context(|| format!("Failed to render template: {}", name))
}

/// Parse `KEY=VALUE` pairs; values that are valid JSON keep their type
pub fn parse_vars(vars: &[String]) -> Result<BTreeMap<String, Value>> {
    let mut parsed = BTreeMap::new();
    for var in vars {
        let Some((key, value)) = var.split_once('=') else {
            anyhow::bail!("Invalid variable '{}': expected KEY=VALUE", var);
        };
        let key = key.trim();
        if key.is_empty() {
            anyhow::bail!("Invalid variable '{}': empty key", var);
        }
        let value =
            serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
        parsed.insert(key.to_string(), value);
    }
    Ok(parsed)
}

/// Print LaTeX to stdout or compile it to `<dist>/<name>.pdf`
pub fn emit(settings: &Settings, latex: &str, pdf: bool, name: &str) -> Result<()> {
    if !pdf {
        println!("{}", latex);
        return Ok(());
    }

    let outcome = settings
        .compiler()
        .compile(latex, name)
        .context("Failed to run LaTeX engine")?;
    if !outcome.success {
        anyhow::bail!("PDF generation failed: {}", outcome.target.display());
    }
    println!("{}", outcome.target.display());
    Ok(())
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("document")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_vars() {
        let vars = parse_vars(&[
            "title=Sample Document".to_string(),
            "show_meta=true".to_string(),
            "count=3".to_string(),
            "eq=a=b".to_string(),
        ])
        .unwrap();
        assert_eq!(vars["title"], json!("Sample Document"));
        assert_eq!(vars["show_meta"], json!(true));
        assert_eq!(vars["count"], json!(3));
        assert_eq!(vars["eq"], json!("a=b"));
    }

    #[test]
    fn test_parse_vars_rejects_malformed() {
        assert!(parse_vars(&["novalue".to_string()]).is_err());
        assert!(parse_vars(&["=x".to_string()]).is_err());
    }

    #[test]
    fn test_file_stem() {
        assert_eq!(file_stem(Path::new("docs/report.toml")), "report");
        assert_eq!(file_stem(Path::new("document.tpl")), "document");
    }

    #[test]
    fn test_cli_parses_template_command() {
        let cli = Cli::try_parse_from([
            "texdok",
            "template",
            "document.tpl",
            "--var",
            "author=John Doe",
            "--skip-empty-lines",
            "--pdf",
        ])
        .unwrap();
        match cli.command {
            Commands::Template {
                name,
                vars,
                skip_empty_lines,
                out,
            } => {
                assert_eq!(name, "document.tpl");
                assert_eq!(vars, vec!["author=John Doe"]);
                assert!(skip_empty_lines);
                assert!(out.pdf);
            }
            _ => panic!("Expected template command"),
        }
    }
}
