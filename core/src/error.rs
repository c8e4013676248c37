//! Error types for the recipe API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers need to tell "no such
//! recipe" apart from any other failure. All other unexpected statuses land
//! in `HttpError` with the raw status code and body.

/// Errors returned by `RecipeClient` build and parse methods.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server returned 404; the requested recipe does not exist.
    #[error("recipe not found")]
    NotFound,

    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    #[error("serialization failed: {0}")]
    SerializationError(String),
}
