use hello_core::api::health::OK;

#[tracing::instrument]
pub async fn handler() -> &'static str {
    OK
}
