//! LaTeX to PDF compiler
//!
//! Runs an external LaTeX engine in a scratch directory and moves the
//! resulting PDF into an output directory.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use tracing::{debug, info, warn};

use crate::command::run_command;
use crate::error::Result;

/// Engine invoked when none is configured
pub const DEFAULT_PROGRAM: &str = "pdflatex";

/// Name used when the requested output name has no file component
const FALLBACK_NAME: &str = "document";

/// Result of one compilation run
#[derive(Debug, Clone)]
pub struct CompileOutcome {
    /// Whether this run produced the target PDF
    pub success: bool,
    /// Where the PDF is (or would have been) placed
    pub target: PathBuf,
    /// Exit code of the engine
    pub exit_code: Option<i32>,
    /// Engine stderr, or stdout when stderr is empty
    pub log: String,
}

/// Compiler for converting LaTeX source to PDF files
#[derive(Debug, Clone)]
pub struct PdfCompiler {
    output_dir: PathBuf,
    program: String,
    args: Vec<String>,
}

impl PdfCompiler {
    /// Create a compiler writing PDFs into `output_dir`
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            program: DEFAULT_PROGRAM.to_string(),
            args: vec!["-interaction=nonstopmode".to_string()],
        }
    }

    /// Use a different engine executable
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Replace the arguments passed before the source file name
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Path the PDF for `output_name` is written to
    pub fn target_path(&self, output_name: &str) -> PathBuf {
        self.output_dir.join(format!("{}.pdf", job_name(output_name)))
    }

    /// Compile `source` into `<output_dir>/<basename(output_name)>.pdf`.
    ///
    /// Engine failures (non-zero exit or any stderr output) are logged and
    /// reported through the outcome. Only environment problems, such as an
    /// unwritable output directory or a missing engine, are errors. A PDF
    /// left at the target by an earlier run is removed first.
    pub fn compile(&self, source: &str, output_name: &str) -> Result<CompileOutcome> {
        fs::create_dir_all(&self.output_dir)?;
        let job = job_name(output_name);
        let target = self.target_path(output_name);
        if target.is_file() {
            debug!("Removing stale {}", target.display());
            fs::remove_file(&target)?;
        }

        // Auxiliary files (.aux, .log) go away with the scratch directory
        let scratch = TempDir::new()?;
        let tex_file = format!("{}.tex", job);
        fs::write(scratch.path().join(&tex_file), source)?;

        info!("Compiling {} with {}", tex_file, self.program);
        let args = self.args.iter().map(String::as_str).chain([tex_file.as_str()]);
        let output = run_command(&self.program, args, None, Some(scratch.path()))?;

        let log = if output.stderr.is_empty() {
            output.stdout.clone()
        } else {
            output.stderr.clone()
        };

        if !output.success() || !output.stderr.is_empty() {
            warn!("Error code: {:?}", output.exit_code);
            warn!("Error: {}", log);
            return Ok(CompileOutcome {
                success: false,
                target,
                exit_code: output.exit_code,
                log,
            });
        }

        let produced = scratch.path().join(format!("{}.pdf", job));
        if produced.is_file() {
            move_file(&produced, &target)?;
        } else {
            warn!("{} exited cleanly but produced no PDF", self.program);
        }

        let success = target.exists();
        if success {
            info!("Created {}", target.display());
        }
        Ok(CompileOutcome {
            success,
            target,
            exit_code: output.exit_code,
            log,
        })
    }
}

impl Default for PdfCompiler {
    fn default() -> Self {
        Self::new("dist")
    }
}

/// Base file name used for the scratch source and the target PDF
fn job_name(output_name: &str) -> String {
    Path::new(output_name)
        .file_name()
        .and_then(|name| name.to_str())
        .filter(|name| !name.is_empty())
        .unwrap_or(FALLBACK_NAME)
        .to_string()
}

/// Rename, falling back to copy when the scratch directory is on another filesystem
fn move_file(from: &Path, to: &Path) -> std::io::Result<()> {
    if fs::rename(from, to).is_ok() {
        return Ok(());
    }
    fs::copy(from, to)?;
    fs::remove_file(from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PdfError;

    #[test]
    fn test_job_name() {
        assert_eq!(job_name("report"), "report");
        assert_eq!(job_name("nested/dir/report"), "report");
        assert_eq!(job_name(""), "document");
        assert_eq!(job_name(".."), "document");
    }

    #[test]
    fn test_target_path() {
        let compiler = PdfCompiler::new("/out");
        assert_eq!(compiler.target_path("a/b/sample"), PathBuf::from("/out/sample.pdf"));
    }

    #[test]
    fn test_missing_program_is_error() {
        let dist = TempDir::new().unwrap();
        let out = dist.path().join("out");
        let compiler = PdfCompiler::new(&out).with_program("texdok-no-such-latex");
        let err = compiler
            .compile("\\documentclass{article}", "x")
            .unwrap_err();
        assert!(matches!(err, PdfError::Spawn { .. }));
        // The output directory is created before the engine runs
        assert!(out.is_dir());
    }

    #[cfg(unix)]
    #[test]
    fn test_successful_run_moves_pdf() {
        let dist = TempDir::new().unwrap();
        // Stand-in engine: copies the source to <job>.pdf
        let compiler = PdfCompiler::new(dist.path().join("dist"))
            .with_program("sh")
            .with_args(["-c", "cp \"$0\" \"${0%.tex}.pdf\""]);

        let outcome = compiler.compile("fake pdf body", "out/sample").unwrap();
        assert!(outcome.success, "log: {}", outcome.log);
        assert_eq!(outcome.target, dist.path().join("dist").join("sample.pdf"));
        assert_eq!(fs::read_to_string(&outcome.target).unwrap(), "fake pdf body");
    }

    #[cfg(unix)]
    #[test]
    fn test_failed_run_reports_without_error() {
        let dist = TempDir::new().unwrap();
        let compiler = PdfCompiler::new(dist.path())
            .with_program("sh")
            .with_args(["-c", "echo 'Undefined control sequence' >&2; exit 1"]);

        let outcome = compiler.compile("\\bogus", "broken").unwrap();
        assert!(!outcome.success);
        assert_eq!(outcome.exit_code, Some(1));
        assert!(outcome.log.contains("Undefined control sequence"));
        assert!(!outcome.target.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_stderr_output_counts_as_failure() {
        let dist = TempDir::new().unwrap();
        let compiler = PdfCompiler::new(dist.path())
            .with_program("sh")
            .with_args(["-c", "cp \"$0\" \"${0%.tex}.pdf\"; echo warning >&2"]);

        let outcome = compiler.compile("body", "noisy").unwrap();
        assert!(!outcome.success);
        assert_eq!(outcome.exit_code, Some(0));
    }

    #[cfg(unix)]
    #[test]
    fn test_clean_exit_without_pdf() {
        let dist = TempDir::new().unwrap();
        let compiler = PdfCompiler::new(dist.path())
            .with_program("sh")
            .with_args(["-c", "true"]);

        let outcome = compiler.compile("body", "nothing").unwrap();
        assert!(!outcome.success);
    }

    #[cfg(unix)]
    #[test]
    fn test_stale_target_is_not_success() {
        let dist = TempDir::new().unwrap();
        let stale = dist.path().join("report.pdf");
        fs::write(&stale, "old pdf").unwrap();
        let compiler = PdfCompiler::new(dist.path())
            .with_program("sh")
            .with_args(["-c", "true"]);

        let outcome = compiler.compile("body", "report").unwrap();
        assert!(!outcome.success);
        assert!(!stale.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_failed_run_removes_stale_target() {
        let dist = TempDir::new().unwrap();
        let stale = dist.path().join("report.pdf");
        fs::write(&stale, "old pdf").unwrap();
        let compiler = PdfCompiler::new(dist.path())
            .with_program("sh")
            .with_args(["-c", "exit 1"]);

        let outcome = compiler.compile("body", "report").unwrap();
        assert!(!outcome.success);
        assert!(!stale.exists());
    }

    /// Requires a TeX installation; skipped when `pdflatex` is not on PATH.
    #[test]
    fn test_pdflatex_end_to_end() {
        if run_command(DEFAULT_PROGRAM, ["--version"], None, None).is_err() {
            eprintln!("pdflatex not available, skipping");
            return;
        }
        let dist = TempDir::new().unwrap();
        let compiler = PdfCompiler::new(dist.path());
        let source = "\\documentclass{article}\n\\begin{document}\nHello\n\n\\end{document}";
        let outcome = compiler.compile(source, "hello").unwrap();
        if outcome.success {
            let bytes = fs::read(&outcome.target).unwrap();
            assert!(bytes.starts_with(b"%PDF"));
        }
    }
}
