use crate::messages;
use crate::state::Db;
use axum::{extract::State, Json};
use hello_core::api::Envelope;

/// Always answers 200: whether the read worked is reported in the envelope.
#[tracing::instrument(skip(db))]
pub async fn handler(State(db): State<Db>) -> Json<Envelope> {
    let envelope = match messages::fetch(&db).await {
        Ok(message) => Envelope::success(message),
        Err(fault) => {
            fault.log();
            Envelope::error(fault.to_string())
        }
    };

    Json(envelope)
}
