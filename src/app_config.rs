//! Application configuration loading for CLI defaults.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use tagspan_core::{ExportFormat, ParseMode, Parser, TagSet};

use crate::cli::TagArgs;

/// TOML-backed file configuration for tagspan defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Default begin tag marker.
    pub begin_tag: Option<String>,
    /// Default end tag marker.
    pub end_tag: Option<String>,
    /// Reject unbalanced input by default.
    pub strict: Option<bool>,
    /// Default output format for `extract`.
    pub format: Option<ExportFormat>,
    /// Default column names for `compare`.
    pub source_names: Option<Vec<String>>,
}

impl FileConfig {
    /// Validates config values against parser constraints.
    pub fn validate(&self) -> Result<()> {
        let begin = self.begin_tag.as_deref().unwrap_or(tagspan_core::parser::DEFAULT_BEGIN_TAG);
        let end = self.end_tag.as_deref().unwrap_or(tagspan_core::parser::DEFAULT_END_TAG);
        TagSet::new(begin, end).context("Invalid tag markers in config")?;

        if let Some(names) = &self.source_names
            && names.iter().any(|name| name.trim().is_empty())
        {
            anyhow::bail!("Invalid config value for `source_names`: names must not be empty");
        }
        Ok(())
    }
}

/// Loaded config metadata.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    /// Resolved config path if a base directory is known.
    pub path: Option<PathBuf>,
    /// Parsed file config when a config file exists and was valid.
    pub config: Option<FileConfig>,
}

impl LoadedConfig {
    /// Indicates whether configuration was loaded from disk.
    #[must_use]
    pub fn loaded_from_file(&self) -> bool {
        self.config.is_some()
    }

    /// Builds the parser from CLI flags, then file values, then defaults.
    pub fn parser(&self, args: &TagArgs) -> Result<Parser> {
        let file = self.config.as_ref();
        let begin = args
            .begin_tag
            .clone()
            .or_else(|| file.and_then(|c| c.begin_tag.clone()))
            .unwrap_or_else(|| tagspan_core::parser::DEFAULT_BEGIN_TAG.to_string());
        let end = args
            .end_tag
            .clone()
            .or_else(|| file.and_then(|c| c.end_tag.clone()))
            .unwrap_or_else(|| tagspan_core::parser::DEFAULT_END_TAG.to_string());
        let strict = args.strict || file.and_then(|c| c.strict).unwrap_or(false);

        let tags = TagSet::new(begin, end)?;
        let mode = if strict {
            ParseMode::Strict
        } else {
            ParseMode::Permissive
        };
        Ok(Parser::new(tags, mode))
    }

    /// Output format from the CLI flag, then the file, then CSV.
    #[must_use]
    pub fn format(&self, cli: Option<ExportFormat>) -> ExportFormat {
        cli.or_else(|| self.config.as_ref().and_then(|c| c.format))
            .unwrap_or_default()
    }

    /// Source names from the CLI flag, then the file, then an empty list.
    #[must_use]
    pub fn source_names(&self, cli: &[String]) -> Vec<String> {
        if !cli.is_empty() {
            return cli.to_vec();
        }
        self.config
            .as_ref()
            .and_then(|c| c.source_names.clone())
            .unwrap_or_default()
    }
}

/// Resolves default config path.
///
/// Priority:
/// 1. `$XDG_CONFIG_HOME/tagspan/config.toml`
/// 2. `$HOME/.config/tagspan/config.toml`
#[must_use]
pub fn resolve_default_config_path() -> Option<PathBuf> {
    if let Some(xdg_config_home) = env_var_non_empty_os("XDG_CONFIG_HOME") {
        return Some(
            PathBuf::from(xdg_config_home)
                .join("tagspan")
                .join("config.toml"),
        );
    }

    let home = env_var_non_empty_os("HOME")?;
    Some(
        PathBuf::from(home)
            .join(".config")
            .join("tagspan")
            .join("config.toml"),
    )
}

fn env_var_non_empty_os(name: &str) -> Option<std::ffi::OsString> {
    let value = env::var_os(name)?;
    if value.is_empty() { None } else { Some(value) }
}

/// Loads config from default path if present.
pub fn load_default_file_config() -> Result<LoadedConfig> {
    let path = resolve_default_config_path();
    let Some(path_ref) = path.as_deref() else {
        return Ok(LoadedConfig { path, config: None });
    };

    if !path_ref.exists() {
        return Ok(LoadedConfig { path, config: None });
    }

    let config = load_file_config(path_ref)?;
    Ok(LoadedConfig {
        path,
        config: Some(config),
    })
}

fn load_file_config(path: &Path) -> Result<FileConfig> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
    parse_config_str(&raw)
        .with_context(|| format!("Failed to parse config file '{}'", path.display()))
}

fn parse_config_str(raw: &str) -> Result<FileConfig> {
    let config: FileConfig = toml::from_str(raw)?;
    config.validate()?;
    Ok(config)
}
