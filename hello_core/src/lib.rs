//! Common code shared by the hello server and the clients that check it.

/// Talking to the query service over HTTP.
pub mod api;
