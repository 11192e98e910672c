//! OOP Demo Binary
//!
//! Runs the bank, library, store, basket and design-pattern scenarios
//! against in-memory systems and prints what happens.

mod config;
mod scenarios;

use anyhow::Context;
use clap::Parser;
use config::DemoConfig;
use entity_core::Metrics;
use scenarios::Selection;
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "oop-demo", version, about = "Registry-backed entity systems demo")]
struct Cli {
    /// TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Scenario to run
    #[arg(short, long, value_enum, default_value_t = Selection::All)]
    scenario: Selection,

    /// Print operation counters in Prometheus text format at the end
    #[arg(long)]
    metrics: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = DemoConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    init_tracing(&config.core);

    info!(
        service = %config.core.service_name,
        version = %config.core.service_version,
        "Starting demo"
    );

    let metrics = if config.core.metrics_enabled {
        Some(Metrics::new().context("Failed to create metrics registry")?)
    } else {
        None
    };

    for scenario in cli.scenario.scenarios() {
        println!("\n=== {} ===\n", scenario.title());
        if let Err(err) = scenarios::run(*scenario, &config, metrics.clone()) {
            error!(scenario = ?scenario, "Scenario failed: {:#}", err);
        }
    }

    if cli.metrics {
        match &metrics {
            Some(metrics) => print!("\n{}", metrics.render()?),
            None => warn!("Metrics are disabled in the configuration"),
        }
    }

    Ok(())
}

/// Install the global subscriber; `RUST_LOG` wins over the configured filter
fn init_tracing(config: &entity_core::Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    let registry = tracing_subscriber::registry().with(filter);

    if config.log_json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry.with(fmt::layer().with_writer(std::io::stderr)).init();
    }
}
