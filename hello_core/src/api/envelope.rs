use serde::{Deserialize, Serialize};

/// Whether the service managed to read the message.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Exactly one row was found.
    Success,

    /// Something went wrong. The envelope's message says what.
    Error,
}

/// What the message endpoint returns, whether or not it worked. Failures are
/// reported in here rather than through HTTP status codes, so callers always
/// need to look at `status`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Envelope {
    /// Did it work?
    pub status: Status,

    /// The stored message on success, or a description of the fault.
    pub message: String,
}

impl Envelope {
    /// An envelope carrying a message we read from the database.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: Status::Success,
            message: message.into(),
        }
    }

    /// An envelope describing something that went wrong.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            message: message.into(),
        }
    }

    /// Did the request succeed?
    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }
}
