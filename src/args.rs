use clap::{Parser, ValueEnum};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Settle side games for a golf group.", long_about = None)]
pub struct Cli {
    /// Round file: tee, roster with scores, and wagers.
    #[arg(short = 'r', long, value_name = "ROUND_JSON")]
    pub round_json: Option<PathBuf>,
    /// Optional TOML file with defaults for the flags below.
    #[arg(long, value_name = "CONFIG_TOML")]
    pub config_toml: Option<PathBuf>,
    /// Seed for sixes partner rotations the round file leaves open.
    #[arg(long)]
    pub seed: Option<u64>,
    #[arg(short = 'f', long, value_enum)]
    pub format: Option<OutputFormat>,
}
