//! Error types for the API client.

/// Errors that can occur when talking to the OpenDART open API.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An HTTP request failed (network error, timeout, or unreadable response).
    #[error("request failed")]
    RequestFailed,
    /// OpenDART returned a non-success HTTP status with a body snippet.
    #[error("request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// OpenDART answered with a non-success application status code
    /// (bad key, quota exceeded, bad parameters).
    #[error("OpenDART status {code}: {message}")]
    Api { code: String, message: String },
    /// The corp index feed could not be decoded (bad archive or bad XML).
    #[error("malformed corp index feed: {0}")]
    MalformedFeed(String),
}
