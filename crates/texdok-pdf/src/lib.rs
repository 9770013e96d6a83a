//! texdok-pdf - PDF generation via an external LaTeX engine
//!
//! # Architecture
//!
//! 1. **Command** - runs a process and captures its decoded output
//! 2. **Compiler** - writes LaTeX source to a scratch directory, runs the
//!    engine there and moves the PDF into the output directory
//!
//! # Example
//!
//! ```ignore
//! use texdok_pdf::PdfCompiler;
//!
//! let compiler = PdfCompiler::new("dist");
//! let outcome = compiler.compile(&latex, "report")?;
//! if outcome.success {
//!     println!("{}", outcome.target.display());
//! }
//! ```

mod command;
mod compiler;
mod error;

pub use command::{run_command, CommandOutput};
pub use compiler::{CompileOutcome, PdfCompiler, DEFAULT_PROGRAM};
pub use error::{PdfError, Result};
