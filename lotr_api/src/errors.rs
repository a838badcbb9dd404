//! Error types for the API client.

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An HTTP request failed (invalid URL, network error, or unreadable body).
    #[error("Request failed")]
    RequestFailed,
    /// The API returned a non-success status. `reason` is the canonical
    /// status text (e.g. "Unauthorized") and `body` a truncated snippet.
    #[error("API call failed! Problem is: {status} {reason}")]
    HttpStatus {
        status: u16,
        reason: String,
        body: String,
    },
    /// The response body was empty or could not be decoded into an envelope.
    #[error("Sorry, but the API returned an empty or unreadable result: {0}")]
    EmptyResult(String),
}
