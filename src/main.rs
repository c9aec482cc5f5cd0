use anyhow::Context;
use clap::Parser;
use std::time::Duration;

use ppvcalc::cli::Cli;
use ppvcalc::config::Config;

fn main() -> anyhow::Result<()> {
    ppvcalc::logging::init_tracing();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load configuration")?;

    let params = cli.initial_params(&config.defaults);
    let population = cli.population(&config.defaults);
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);

    tracing::info!(?params, population, "starting");

    ppvcalc::ui::runtime::run(params, population, tick_rate).context("terminal UI failed")?;
    Ok(())
}
