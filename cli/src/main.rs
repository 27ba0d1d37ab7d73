use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use prizegrid_core::GameSession;

mod game;
mod input;
mod render;
mod settings;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Find the prizes hidden in the grid before your tries run out",
    long_about = None
)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// TOML file with any of `rows`, `columns`, `prizes` and `max_tries`
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(flatten)]
    overrides: settings::Overrides,

    /// Show the odds of the round after every move
    #[arg(long)]
    odds: bool,

    /// Print every move as a JSON observation instead of drawing the grid
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let config = settings::load(args.config.as_deref(), &args.overrides)?;
    let seed = args.seed.unwrap_or_else(rand::random);
    log::debug!("seed: {seed}, config: {config:?}");

    let mut session = GameSession::new(config, seed).context("Could not start the game")?;
    let options = game::Options {
        odds: args.odds,
        json: args.json,
    };
    game::play(&mut session, options, io::stdin().lock(), io::stdout().lock())
}
