//! texdok CLI binary entry point
//!
//! This is a thin wrapper that calls the library's `run_cli()` function.

use anyhow::Result;
use texdok_cli::{init_logging, run_cli};

fn main() -> Result<()> {
    init_logging();
    run_cli()
}
