use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use rusty_golf_wagers::args::{Cli, OutputFormat};
use rusty_golf_wagers::config::load_config;
use rusty_golf_wagers::round::RoundFile;
use rusty_golf_wagers::view::render_text;
use rusty_golf_wagers::{assign_missing_pairings, settle_group};

fn main() -> Result<()> {
    env_logger::init();
    let config = load_config(Cli::parse())?;

    let mut round = RoundFile::load(&config.round_json)
        .with_context(|| format!("load round {}", config.round_json.display()))?;
    let players = round.players();
    log::info!(
        "loaded {} players and {} wagers from {}",
        players.len(),
        round.wagers.len(),
        config.round_json.display()
    );

    let mut rng = match config.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };
    let assigned = assign_missing_pairings(&mut round.wagers, &mut rng);
    if assigned > 0 {
        log::info!("drew partner rotations for {assigned} sixes wager(s)");
    }

    let settlement = settle_group(&players, &round.wagers);
    match config.format {
        OutputFormat::Text => print!("{}", render_text(&round, &players, &settlement)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&settlement)?),
    }
    Ok(())
}
