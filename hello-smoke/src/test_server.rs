//! Stand-in servers for exercising the scenarios.

use crate::config::Config;
use axum::{response::Html, routing::get, Json, Router};
use hello_core::api::{self, Envelope};
use std::{net::TcpListener as StdListener, time::Duration};
use tokio::net::TcpListener;

/// A server that behaves like a healthy deployment serving `message`.
pub fn fake(message: &'static str) -> Router {
    Router::new()
        .route(
            api::index::PATH,
            get(|| async { Html("<h1>DevOps CI/CD Project</h1>") }),
        )
        .route(
            api::message::PATH,
            get(move || async move { Json(Envelope::success(message)) }),
        )
}

/// Serve `app` on an ephemeral local port and return its base URL.
pub async fn serve(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("could not bind test server");
    let addr = listener.local_addr().expect("test server has no address");

    tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("test server failed");
    });

    format!("http://{addr}")
}

/// A base URL that nothing is listening on.
pub fn unreachable() -> String {
    let addr = StdListener::bind("127.0.0.1:0")
        .and_then(|listener| listener.local_addr())
        .expect("could not reserve a local port");

    format!("http://{addr}")
}

/// Config pointed at `server`, with waits short enough for tests.
pub fn config(server: String) -> Config {
    Config {
        server,
        max_retries: 2,
        retry_delay: Duration::from_millis(10),
        request_timeout: Duration::from_secs(2),
        initial_wait: Duration::ZERO,
        between_wait: Duration::ZERO,
        settle_wait: Duration::ZERO,
        expected_home: "DevOps CI/CD Project".to_string(),
        expected_message: "Hello World3283289832".to_string(),
    }
}
