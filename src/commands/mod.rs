//! CLI command handlers.

mod compare;
mod config;
mod extract;

pub use compare::run_compare_command;
pub use config::run_config_show_command;
pub use extract::run_extract_command;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

/// Opens `output` for writing, or stdout when no path is given.
fn open_output(output: Option<&Path>) -> Result<Box<dyn Write>> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}
