use crate::error::Fault;
use sqlx::{postgres::PgConnectOptions, Connection, PgConnection};

/// A single, unpooled connection to the database. Each request opens its own
/// and closes it before responding.
#[derive(Debug)]
pub struct Conn(
    /// The open connection.
    pub PgConnection,
);

impl Conn {
    /// Connect. Callers bound how long this may take.
    pub async fn open(options: &PgConnectOptions) -> Result<Self, Fault> {
        let conn = PgConnection::connect_with(options)
            .await
            .map_err(Fault::Connect)?;

        Ok(Self(conn))
    }

    /// Close the connection gracefully. Failing to say goodbye doesn't
    /// change the outcome of the request, so we only log it.
    pub async fn close(self) {
        if let Err(err) = self.0.close().await {
            tracing::warn!(?err, "error closing database connection");
        }
    }
}
