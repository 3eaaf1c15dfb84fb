use thiserror::Error;

/// Easy alias for error handling
#[expect(clippy::absolute_paths)]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can happen while talking to the query service
#[derive(Debug, Error)]
pub enum Error {
    /// We couldn't parse a URL, for example if the base URL was invalid.
    #[error("URL error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// We encountered an HTTP error: the connection was refused, the request
    /// timed out, the server returned a 4xx or 5xx, or the body didn't decode.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}
