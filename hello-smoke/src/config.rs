use crate::retry::Retry;
use clap::Parser;
use reqwest::Client;
use std::{num::ParseIntError, time::Duration};

/// Check that a deployed hello server is up and serving the right message
#[derive(Debug, Parser)]
#[clap(version)]
pub struct Config {
    /// Base URL of the server, e.g. `http://localhost:3000`
    #[clap(long, env, default_value = "http://localhost:3000")]
    pub server: String,

    /// How many times to try each request before giving up
    #[clap(long, env, default_value = "10")]
    pub max_retries: u32,

    /// How long to wait between attempts, in seconds
    #[clap(long, env, default_value = "5", value_parser = duration_parser)]
    pub retry_delay: Duration,

    /// Per-request timeout, in seconds
    #[clap(long, env, default_value = "10", value_parser = duration_parser)]
    pub request_timeout: Duration,

    /// How long to wait before the first request, in seconds
    #[clap(long, env, default_value = "10", value_parser = duration_parser)]
    pub initial_wait: Duration,

    /// How long to wait between scenarios, in seconds
    #[clap(long, env, default_value = "3", value_parser = duration_parser)]
    pub between_wait: Duration,

    /// How long to give the database before checking the API, in seconds
    #[clap(long, env, default_value = "5", value_parser = duration_parser)]
    pub settle_wait: Duration,

    /// Text the landing page must contain
    #[clap(long, env, default_value = "DevOps CI/CD Project")]
    pub expected_home: String,

    /// Message the API must return
    #[clap(long, env, default_value = "Hello World3283289832")]
    pub expected_message: String,
}

impl Config {
    /// The retry policy every scenario request goes through.
    pub fn retry(&self) -> Retry {
        Retry {
            attempts: self.max_retries,
            delay: self.retry_delay,
        }
    }

    /// An HTTP client that gives up on any single request after
    /// `request_timeout`.
    pub fn http_client(&self) -> reqwest::Result<Client> {
        Client::builder()
            .timeout(self.request_timeout)
            .build()
    }
}

/// Parse a whole number of seconds.
fn duration_parser(s: &str) -> Result<Duration, ParseIntError> {
    s.parse().map(Duration::from_secs)
}
