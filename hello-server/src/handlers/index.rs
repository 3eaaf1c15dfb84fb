use axum::response::Html;

static PAGE: &str = include_str!("index.html");

#[tracing::instrument]
pub async fn handler() -> Html<&'static str> {
    Html(PAGE)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test_log::test(tokio::test)]
    async fn test_success() {
        let Html(body) = handler().await;

        assert!(body.contains("DevOps CI/CD Project"));
    }
}
