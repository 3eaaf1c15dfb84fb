use axum::extract::FromRef;
use sqlx::postgres::PgConnectOptions;
use std::time::Duration;

/// Shared state needed by requests. Only configuration lives here: every
/// request opens its own connection, so there's nothing mutable to share.
#[derive(Clone, FromRef)]
pub struct State {
    /// Where the message lives.
    db: Db,
}

impl State {
    /// Create a new state.
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

/// How to reach the database, and which row to read from it.
#[derive(Debug, Clone)]
pub struct Db {
    /// Host, port, database name, and credentials.
    pub options: PgConnectOptions,

    /// Deadline for a whole read: connect, query, and close. Must be shorter
    /// than the request timeout so faults still make it into the envelope.
    pub timeout: Duration,

    /// The id of the row in `messages` that we serve.
    pub message_id: i32,
}
