//! Extract command handler: list every span of one annotated file.

use anyhow::{Context, Result};
use tracing::{info, trace};

use tagspan_core::{read_cleaned, write_entities};

use super::open_output;
use crate::app_config::LoadedConfig;
use crate::cli::ExtractArgs;

pub fn run_extract_command(args: &ExtractArgs, config: &LoadedConfig) -> Result<()> {
    let parser = config.parser(&args.tags)?;
    let format = config.format(args.format);

    let text = read_cleaned(&args.input)
        .with_context(|| format!("Failed to read input file: {}", args.input.display()))?;
    let spans = parser
        .parse_spans(&text)
        .with_context(|| format!("Failed to parse {}", args.input.display()))?;

    for span in &spans {
        trace!(span = %span, "extracted span");
    }

    let writer = open_output(args.output.as_deref())?;
    write_entities(writer, &spans, format).context("Failed to write extracted entities")?;

    info!(
        input = %args.input.display(),
        spans = spans.len(),
        %format,
        "Extraction complete"
    );
    Ok(())
}
