//! Serves a landing page and a single message read from the database.

/// Opening and closing database connections
mod conn;

/// Faults that can happen while reading the message
mod error;

/// Route handlers
mod handlers;

/// Reading the message
mod messages;

/// State shared between requests
mod state;

use axum::{routing::get, Router};
use clap::Parser;
use color_eyre::eyre::bail;
use hello_core::api::{health, index, message};
use sqlx::postgres::PgConnectOptions;
use std::{num::ParseIntError, time::Duration};
use tokio::net::TcpListener;
use tower_http::{timeout, trace};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Serve a landing page and one message from the database
#[derive(Debug, Parser)]
struct Config {
    /// Address to listen on
    #[clap(long, env, default_value = "127.0.0.1:3000")]
    address: String,

    /// Request timeout, in seconds
    #[clap(long, env, default_value = "5", value_parser = duration_parser)]
    request_timeout: Duration,

    /// Database host
    #[clap(long, env, default_value = "localhost")]
    db_host: String,

    /// Database port
    #[clap(long, env, default_value = "5432")]
    db_port: u16,

    /// Database name
    #[clap(long, env, default_value = "testdb")]
    db_name: String,

    /// Database user
    #[clap(long, env, default_value = "testuser")]
    db_user: String,

    /// Database password
    #[clap(long, env, default_value = "testpassword", hide_env_values = true)]
    db_password: String,

    /// Deadline for reading the message (connect, query, and close), in
    /// seconds. Must be shorter than the request timeout.
    #[clap(long, env, default_value = "3", value_parser = duration_parser)]
    db_timeout: Duration,

    /// The id of the row in `messages` to serve
    #[clap(long, env, default_value = "1")]
    message_id: i32,
}

impl Config {
    /// Database settings for request handlers.
    ///
    /// ## Errors
    ///
    /// If `db_timeout` isn't shorter than `request_timeout`. The request
    /// timeout would fire first and clients would get a bare 408 instead of
    /// an error envelope.
    fn db(&self) -> color_eyre::Result<state::Db> {
        if self.db_timeout >= self.request_timeout {
            bail!(
                "db timeout ({:?}) must be shorter than request timeout ({:?})",
                self.db_timeout,
                self.request_timeout
            );
        }

        Ok(state::Db {
            options: PgConnectOptions::new()
                .host(&self.db_host)
                .port(self.db_port)
                .database(&self.db_name)
                .username(&self.db_user)
                .password(&self.db_password),
            timeout: self.db_timeout,
            message_id: self.message_id,
        })
    }
}

/// Parse a whole number of seconds.
fn duration_parser(s: &str) -> Result<Duration, ParseIntError> {
    s.parse().map(Duration::from_secs)
}

/// Build the app. Layers only wrap the routes added before them, so they go
/// last.
fn router(state: state::State, request_timeout: Duration) -> Router {
    Router::new()
        // ROUTES
        .route("/", get(handlers::index::handler))
        .route(index::PATH, get(handlers::index::handler))
        .route(message::PATH, get(handlers::api::handler))
        .route(health::PATH, get(handlers::health::handler))
        // LAYERS
        .layer(trace::TraceLayer::new_for_http())
        .layer(timeout::TimeoutLayer::new(request_timeout))
        // STATE
        .with_state(state)
}

/// Parse config, set up logging, and serve until killed.
#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let options = Config::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer())
        .init();

    let db = options.db()?;
    tracing::info!(
        host = %options.db_host,
        port = options.db_port,
        database = %options.db_name,
        message_id = db.message_id,
        "configured database"
    );

    let app = router(state::State::new(db), options.request_timeout);

    let listener = TcpListener::bind(&options.address).await?;
    tracing::info!(address = ?listener.local_addr(), "listening");

    axum::serve(listener, app).await?;

    Ok(())
}
