//! Config command handler: show effective configuration.

use anyhow::Result;

use crate::app_config::LoadedConfig;
use crate::cli::TagArgs;

pub fn run_config_show_command(tag_args: &TagArgs, config: &LoadedConfig) -> Result<()> {
    let parser = config.parser(tag_args)?;

    let resolved_path = config.path.as_ref().map_or_else(
        || "<unresolved>".to_string(),
        |path| path.display().to_string(),
    );
    println!("config_path = {resolved_path}");
    println!(
        "config_file = {}",
        if config.loaded_from_file() {
            "loaded"
        } else {
            "not found (using defaults)"
        }
    );
    println!("begin_tag = {}", parser.tags().begin());
    println!("end_tag = {}", parser.tags().end());
    println!("mode = {}", parser.mode());
    println!("format = {}", config.format(None));
    let names = config.source_names(&[]);
    if names.is_empty() {
        println!("source_names = <file stems>");
    } else {
        println!("source_names = {}", names.join(","));
    }

    Ok(())
}
