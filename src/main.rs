//! Connect-K - headless CLI
//!
//! Bot-vs-bot self-play and move suggestions for arbitrary positions.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use connect_k_cli::{AppConfig, Cli, Command, GameArgs, logging, self_play, suggest};
use tracing::{info, instrument};
use tracing_subscriber::util::SubscriberInitExt;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let rust_log = std::env::var("RUST_LOG").ok();
    let bootstrap = logging::filter_for(rust_log.as_deref(), logging::DEFAULT_LOG_FILTER);
    let (subscriber, log_handle) = logging::subscriber(bootstrap, std::io::stderr);
    subscriber.init();

    let config = AppConfig::load(cli.config.as_deref())?;
    logging::apply_settings(&log_handle, rust_log.as_deref(), &config)?;
    info!(
        path = ?cli.config,
        log_filter = %config.log_filter(),
        "Settings applied"
    );

    match cli.command {
        Command::Selfplay { game } => run_selfplay(config, &game, cli.json),
        Command::Suggest { game, cells } => run_suggest(config, &game, &cells, cli.json),
    }
}

/// Play the bot against itself and print the result
#[instrument(skip(config))]
fn run_selfplay(mut config: AppConfig, args: &GameArgs, json: bool) -> Result<()> {
    config.apply_overrides(args);
    let result = self_play(config.game_config()?, config.bot_config()?, *config.seed())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", result);
    }
    Ok(())
}

/// Print the bot's move for a replayed position
#[instrument(skip(config))]
fn run_suggest(
    mut config: AppConfig,
    args: &GameArgs,
    cells: &[usize],
    json: bool,
) -> Result<()> {
    config.apply_overrides(args);
    let report = suggest(
        config.game_config()?,
        config.bot_config()?,
        *config.seed(),
        cells,
    )?;

    match (report, json) {
        (Some(report), true) => println!("{}", serde_json::to_string_pretty(&report)?),
        (Some(report), false) => println!("{}", report),
        (None, true) => println!("null"),
        (None, false) => println!("none"),
    }
    Ok(())
}
