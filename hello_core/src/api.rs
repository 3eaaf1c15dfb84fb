/// Things that can go wrong in the API
pub mod error;
pub use error::Error;

/// The JSON envelope returned by the message endpoint
pub mod envelope;
pub use envelope::{Envelope, Status};

/// The HTML landing page
pub mod index;
pub use index::index;

/// The message endpoint
pub mod message;
pub use message::message;

/// Liveness checks
pub mod health;

use error::Result;
use serde::de::DeserializeOwned;

/// Send a request and decode a JSON body out of the response.
///
/// ## Errors
///
/// - `Error::Http` if the request could not be sent, timed out, the server
///   answered with a non-2xx status, or the body was not valid JSON for `T`.
async fn handle_response<T>(req: reqwest::RequestBuilder) -> Result<T>
where
    T: DeserializeOwned,
{
    let resp = req.send().await?.error_for_status()?;

    Ok(resp.json().await?)
}
