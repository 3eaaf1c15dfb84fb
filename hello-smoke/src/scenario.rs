use crate::config::Config;
use hello_core::api;
use reqwest::StatusCode;
use tokio::time::sleep;

/// How a scenario went.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The check held.
    Passed,

    /// The check didn't hold, or we never got a response. Holds the reason.
    Failed(String),
}

impl Outcome {
    /// Did the scenario pass?
    pub fn passed(&self) -> bool {
        matches!(self, Self::Passed)
    }

    /// Report the outcome of the named scenario.
    pub fn log(&self, name: &str) {
        match self {
            Self::Passed => tracing::info!(scenario = name, "PASSED"),
            Self::Failed(reason) => tracing::error!(scenario = name, %reason, "FAILED"),
        }
    }
}

/// The landing page is up and has the expected content.
#[tracing::instrument(skip_all)]
pub async fn home_page(client: &reqwest::Client, config: &Config) -> Outcome {
    let res = config
        .retry()
        .run(|| api::index(client, &config.server))
        .await;

    // non-2xx statuses already came back as errors
    match res {
        Ok(page) if page.status == StatusCode::OK && page.body.contains(&config.expected_home) => {
            Outcome::Passed
        }
        Ok(page) => Outcome::Failed(format!(
            "expected status 200 and a page containing {:?}, got status {}",
            config.expected_home, page.status
        )),
        Err(err) => Outcome::Failed(err.to_string()),
    }
}

/// The API reads the expected message out of the database.
#[tracing::instrument(skip_all)]
pub async fn api_message(client: &reqwest::Client, config: &Config) -> Outcome {
    tracing::info!(wait = ?config.settle_wait, "waiting for database connection to be ready");
    sleep(config.settle_wait).await;

    let res = config
        .retry()
        .run(|| api::message(client, &config.server))
        .await;

    match res {
        Ok(envelope) if envelope.is_success() && envelope.message == config.expected_message => {
            Outcome::Passed
        }
        Ok(envelope) => Outcome::Failed(format!(
            "expected a success with {:?}, got {envelope:?}",
            config.expected_message
        )),
        Err(err) => Outcome::Failed(err.to_string()),
    }
}
