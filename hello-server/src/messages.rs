use crate::conn::Conn;
use crate::error::Fault;
use crate::state::Db;
use sqlx::query_scalar;
use tokio::time::timeout;

/// Read the configured message out of the database. The connection is
/// released before this returns, whatever happened, and the whole read is
/// bounded by `db.timeout`.
///
/// ## Errors
///
/// - `Fault::Connect` if we can't get a connection
/// - `Fault::Query` if the query fails
/// - `Fault::NotFound` if there is no row with the configured id
/// - `Fault::Timeout` if any of that takes longer than `db.timeout`
#[tracing::instrument(skip(db), fields(message_id = db.message_id))]
pub async fn fetch(db: &Db) -> Result<String, Fault> {
    // dropping the read on timeout drops the connection with it
    timeout(db.timeout, read(db))
        .await
        .map_err(|_| Fault::Timeout(db.timeout))?
}

/// Connect, query, and close, with no deadline of its own.
async fn read(db: &Db) -> Result<String, Fault> {
    let mut conn = Conn::open(&db.options).await?;

    let row = query_scalar::<_, String>("SELECT message FROM messages WHERE id = $1")
        .bind(db.message_id)
        .fetch_optional(&mut conn.0)
        .await;

    conn.close().await;

    row.map_err(Fault::Query)?.ok_or(Fault::NotFound)
}

#[cfg(test)]
pub(crate) mod test {
    use super::*;
    use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
    use std::{net::TcpListener as StdListener, time::Duration};
    use tokio::net::TcpListener;

    /// Connection options pointing at a local port nothing is listening on.
    pub fn unreachable_db() -> Db {
        let port = StdListener::bind("127.0.0.1:0")
            .and_then(|listener| listener.local_addr())
            .expect("could not reserve a local port")
            .port();

        Db {
            options: PgConnectOptions::new().host("127.0.0.1").port(port),
            timeout: Duration::from_secs(5),
            message_id: 1,
        }
    }

    /// Start a listener that accepts connections and never says anything,
    /// like a database that has hung, and return its port.
    pub async fn silent_port() -> u16 {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("could not bind silent listener");
        let port = listener
            .local_addr()
            .expect("silent listener has no address")
            .port();

        tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                held.push(socket);
            }
        });

        port
    }

    /// Read `message_id` through `options` with a generous deadline.
    pub fn db(options: PgConnectOptions, message_id: i32) -> Db {
        Db {
            options,
            timeout: Duration::from_secs(5),
            message_id,
        }
    }

    #[test_log::test(tokio::test)]
    async fn test_silent_database_times_out() {
        let options = PgConnectOptions::new()
            .host("127.0.0.1")
            .port(silent_port().await);
        let db = Db {
            timeout: Duration::from_millis(200),
            ..db(options, 1)
        };

        let err = fetch(&db).await.unwrap_err();

        assert!(matches!(err, Fault::Timeout(_)), "got {err:?}");
    }

    #[test_log::test(tokio::test)]
    async fn test_unreachable() {
        let err = fetch(&unreachable_db()).await.unwrap_err();

        assert!(matches!(err, Fault::Connect(_)), "got {err:?}");
    }

    #[test_log::test(sqlx::test(migrations = false, fixtures("messages")))]
    async fn test_success(_: PgPoolOptions, options: PgConnectOptions) {
        let message = fetch(&db(options, 1)).await.unwrap();

        assert_eq!(message, "Hello World3283289832");
    }

    #[test_log::test(sqlx::test(migrations = false, fixtures("messages")))]
    async fn test_missing_id(_: PgPoolOptions, options: PgConnectOptions) {
        let err = fetch(&db(options, 2)).await.unwrap_err();

        assert!(matches!(err, Fault::NotFound), "got {err:?}");
    }

    #[test_log::test(sqlx::test(migrations = false, fixtures("empty")))]
    async fn test_empty_table(_: PgPoolOptions, options: PgConnectOptions) {
        let err = fetch(&db(options, 1)).await.unwrap_err();

        assert!(matches!(err, Fault::NotFound), "got {err:?}");
    }

    #[test_log::test(sqlx::test(migrations = false))]
    async fn test_missing_table(_: PgPoolOptions, options: PgConnectOptions) {
        let err = fetch(&db(options, 1)).await.unwrap_err();

        assert!(matches!(err, Fault::Query(_)), "got {err:?}");
    }

    #[test_log::test(sqlx::test(migrations = false, fixtures("messages")))]
    async fn test_repeatable(_: PgPoolOptions, options: PgConnectOptions) {
        let db = db(options, 1);

        let first = fetch(&db).await.unwrap();
        let second = fetch(&db).await.unwrap();

        assert_eq!(first, second);
    }
}
