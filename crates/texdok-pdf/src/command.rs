//! External process execution

use std::ffi::OsStr;
use std::io::{ErrorKind, Write};
use std::path::Path;
use std::process::{Command, Stdio};
use std::thread;

use tracing::debug;

use crate::error::{PdfError, Result};

/// Captured result of a finished process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Standard output, lossily decoded as UTF-8
    pub stdout: String,
    /// Standard error, lossily decoded as UTF-8
    pub stderr: String,
    /// Exit code, `None` if the process was killed by a signal
    pub exit_code: Option<i32>,
}

impl CommandOutput {
    /// Check if the process exited with status zero
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Run `program` with `args` and wait for it to finish.
///
/// `input` is written to the process's stdin, which is closed afterwards;
/// without input stdin is attached to the null device. `cwd` sets the
/// working directory.
pub fn run_command<I, S>(
    program: &str,
    args: I,
    input: Option<&str>,
    cwd: Option<&Path>,
) -> Result<CommandOutput>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut command = Command::new(program);
    command
        .args(args)
        .stdin(if input.is_some() {
            Stdio::piped()
        } else {
            Stdio::null()
        })
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    if let Some(dir) = cwd {
        command.current_dir(dir);
    }

    debug!("Running {:?}", command);
    let mut child = command.spawn().map_err(|source| PdfError::Spawn {
        program: program.to_string(),
        source,
    })?;

    // Feed stdin from a separate thread so a child filling its stdout pipe
    // cannot block against us
    let writer = match (input, child.stdin.take()) {
        (Some(data), Some(mut stdin)) => {
            let data = data.to_owned();
            Some(thread::spawn(move || stdin.write_all(data.as_bytes())))
        }
        _ => None,
    };

    let output = child.wait_with_output()?;

    if let Some(writer) = writer {
        match writer.join() {
            Ok(Ok(())) => {}
            // The child may exit without reading all of its input
            Ok(Err(err)) if err.kind() == ErrorKind::BrokenPipe => {
                debug!("{} closed stdin early", program);
            }
            Ok(Err(err)) => return Err(err.into()),
            Err(_) => {
                return Err(PdfError::Io(std::io::Error::other(
                    "stdin writer thread panicked",
                )))
            }
        }
    }

    Ok(CommandOutput {
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        exit_code: output.status.code(),
    })
}
