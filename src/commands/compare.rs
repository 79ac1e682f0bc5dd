//! Compare command handler: presence report across annotated files.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::{debug, info};

use tagspan_core::{PresenceTable, read_cleaned};

use super::open_output;
use crate::app_config::LoadedConfig;
use crate::cli::CompareArgs;

pub fn run_compare_command(args: &CompareArgs, config: &LoadedConfig) -> Result<()> {
    let parser = config.parser(&args.tags)?;
    let names = source_names(&args.inputs, config.source_names(&args.names))?;

    let mut table = PresenceTable::new(names)?;
    for (index, input) in args.inputs.iter().enumerate() {
        let text = read_cleaned(input)
            .with_context(|| format!("Failed to read input file: {}", input.display()))?;
        let spans = parser
            .parse(&text)
            .with_context(|| format!("Failed to parse {}", input.display()))?;
        debug!(input = %input.display(), spans = spans.len(), "parsed annotator file");
        table.add(index, &spans)?;
    }

    let writer = open_output(args.output.as_deref())?;
    table.write_tsv(writer)?;

    let summary = table.summary();
    for (name, count) in &summary.per_source {
        info!(source = %name, spans = count, "Distinct spans");
    }
    info!(
        shared = summary.shared,
        total = summary.total,
        "Comparison complete"
    );
    Ok(())
}

/// Uses `names` when given, otherwise each input's file stem.
fn source_names(inputs: &[PathBuf], names: Vec<String>) -> Result<Vec<String>> {
    if names.is_empty() {
        return Ok(inputs.iter().map(|path| file_stem(path)).collect());
    }
    if names.len() != inputs.len() {
        bail!(
            "Got {} source name(s) for {} input file(s); pass one name per file",
            names.len(),
            inputs.len()
        );
    }
    Ok(names)
}

fn file_stem(path: &Path) -> String {
    path.file_stem().map_or_else(
        || path.display().to_string(),
        |stem| stem.to_string_lossy().into_owned(),
    )
}
