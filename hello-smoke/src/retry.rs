use std::{fmt::Display, future::Future, time::Duration};
use tokio::time::sleep;

/// Try something a fixed number of times with a fixed pause in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Retry {
    /// Total attempts, including the first. Zero is treated as one.
    pub attempts: u32,

    /// Pause after each failed attempt except the last.
    pub delay: Duration,
}

impl Retry {
    /// Run `attempt` until it succeeds or we run out of attempts, returning
    /// the last error in that case.
    pub async fn run<T, E, F, Fut>(&self, mut attempt: F) -> Result<T, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Display,
    {
        let attempts = self.attempts.max(1);
        let mut current = 1;

        loop {
            match attempt().await {
                Ok(value) => return Ok(value),
                Err(err) if current >= attempts => {
                    tracing::warn!(attempt = current, attempts, %err, "attempt failed, giving up");
                    return Err(err);
                }
                Err(err) => {
                    tracing::warn!(attempt = current, attempts, %err, "attempt failed");
                    tracing::info!(delay = ?self.delay, "waiting before retry");
                    sleep(self.delay).await;
                    current += 1;
                }
            }
        }
    }
}
