//! Smoke test a deployed hello server: wait for it, check the landing page
//! and the message API, and exit non-zero if anything is off.

/// Configuration and argument parsing
mod config;

/// Retrying flaky requests
mod retry;

/// The individual checks
mod scenario;

/// Counting up results
mod tally;

#[cfg(test)]
mod test_server;

use clap::Parser;
use config::Config;
use reqwest::Url;
use std::process::ExitCode;
use tally::Tally;
use tokio::time::sleep;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Run the smoke tests and exit with their result.
#[tokio::main]
async fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;

    let config = Config::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer())
        .init();

    // a bad base URL would fail every attempt of every scenario, so catch it
    // up front instead.
    Url::parse(&config.server)?;

    let client = config.http_client()?;
    let tally = run(&config, &client).await;

    Ok(tally.exit_code())
}

/// Run every scenario in order and count up the results. Scenario failures
/// never stop the run.
async fn run(config: &Config, client: &reqwest::Client) -> Tally {
    tracing::info!(server = %config.server, "starting smoke tests");

    tracing::info!(wait = ?config.initial_wait, "waiting for services to stabilize");
    sleep(config.initial_wait).await;

    let mut outcomes = Vec::with_capacity(2);

    let home = scenario::home_page(client, config).await;
    home.log("home page");
    outcomes.push(home);

    tracing::info!(wait = ?config.between_wait, "waiting before next scenario");
    sleep(config.between_wait).await;

    let api = scenario::api_message(client, config).await;
    api.log("api message");
    outcomes.push(api);

    let tally: Tally = outcomes.iter().collect();

    if tally.all_passed() {
        tracing::info!(passed = tally.passed, failed = tally.failed, "all tests passed");
    } else {
        tracing::error!(passed = tally.passed, failed = tally.failed, "tests failed");
    }

    tally
}
