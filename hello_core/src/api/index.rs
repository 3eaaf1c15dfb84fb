use super::error::Result;
use reqwest::{StatusCode, Url};

/// Where the landing page lives.
pub const PATH: &str = "/index.php";

/// A fetched landing page.
#[derive(Debug)]
pub struct Page {
    /// The HTTP status the server answered with. `index` turns anything
    /// outside 2xx into an error, so this only tells apart success codes
    /// (e.g. a 200 from a 203 served by a caching proxy.)
    pub status: StatusCode,

    /// The HTML body.
    pub body: String,
}

/// Fetch the landing page.
///
/// ## Errors
///
/// - `Error::UrlParse` if `server` is not a valid base URL.
/// - `Error::Http` if the request fails or the server returns a non-2xx.
pub async fn index(client: &reqwest::Client, server: &str) -> Result<Page> {
    let url = Url::parse(server)?.join(PATH)?;

    let resp = client.get(url).send().await?.error_for_status()?;
    let status = resp.status();
    let body = resp.text().await?;

    Ok(Page { status, body })
}
