use std::time::Duration;
use thiserror::Error;

/// Something that went wrong while reading the message. The `Display` output
/// is what callers see in the error envelope.
#[derive(Debug, Error)]
pub enum Fault {
    /// We couldn't reach the database or it refused our credentials.
    #[error("Connection failed: {0}")]
    Connect(#[source] sqlx::Error),

    /// Connecting, querying, and closing together took longer than allowed.
    #[error("Timed out after {}s waiting for the database", .0.as_secs_f64())]
    Timeout(Duration),

    /// We connected, but the query itself failed (e.g. a missing table.)
    #[error("Query failed: {0}")]
    Query(#[source] sqlx::Error),

    /// The query worked but there was no row for the id.
    #[error("No data found")]
    NotFound,
}

impl Fault {
    /// Log the fault at a level matching how surprising it is.
    pub fn log(&self) {
        match self {
            Self::Connect(err) => tracing::error!(?err, "could not connect to database"),
            Self::Timeout(after) => tracing::error!(?after, "timed out talking to database"),
            Self::Query(err) => tracing::error!(?err, "sqlx error"),
            Self::NotFound => tracing::info!("no message row found"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use sqlx::Error as SqlxError;

    #[test]
    fn not_found_message() {
        assert_eq!(Fault::NotFound.to_string(), "No data found");
    }

    #[test]
    fn connect_messages_are_prefixed() {
        let fault = Fault::Connect(SqlxError::PoolTimedOut);

        assert!(fault.to_string().starts_with("Connection failed: "));
    }

    #[test]
    fn timeout_message_includes_duration() {
        let fault = Fault::Timeout(Duration::from_millis(1500));

        assert_eq!(
            fault.to_string(),
            "Timed out after 1.5s waiting for the database"
        );
    }
}
