use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::args::{Cli, OutputFormat};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) struct FileConfig {
    pub round_json: Option<PathBuf>,
    pub seed: Option<u64>,
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub round_json: PathBuf,
    /// `None` seeds the pairing rng from the OS.
    pub seed: Option<u64>,
    pub format: OutputFormat,
}

/// Merge CLI flags over the optional TOML file. Flags win.
///
/// # Errors
/// Returns an error if the config file is unreadable or invalid, or if no
/// round file was given either way.
pub fn load_config(cli: Cli) -> Result<RunConfig> {
    let file_config = match cli.config_toml.as_deref() {
        Some(path) => read_file_config(path)?,
        None => FileConfig::default(),
    };
    let round_json = cli
        .round_json
        .or(file_config.round_json)
        .ok_or_else(|| anyhow!("missing --round-json"))?;
    Ok(RunConfig {
        round_json,
        seed: cli.seed.or(file_config.seed),
        format: cli.format.or(file_config.format).unwrap_or_default(),
    })
}

fn read_file_config(path: &Path) -> Result<FileConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("read config toml {}", path.display()))?;
    toml::from_str::<FileConfig>(&contents)
        .with_context(|| format!("parse config toml {}", path.display()))
}
