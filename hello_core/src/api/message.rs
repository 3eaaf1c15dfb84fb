use super::{envelope::Envelope, error::Result, handle_response};
use reqwest::Url;

/// Where the message endpoint lives.
pub const PATH: &str = "/api.php";

/// Ask the service for the stored message.
///
/// ## Errors
///
/// Errors are the same as `handle_response`, plus `Error::UrlParse` if
/// `server` is not a valid base URL. Note that a fault on the server side
/// (e.g. the database being down) is *not* an error here: it comes back as
/// an `Envelope` with an error status.
pub async fn message(client: &reqwest::Client, server: &str) -> Result<Envelope> {
    let url = Url::parse(server)?.join(PATH)?;

    handle_response(client.get(url)).await
}
