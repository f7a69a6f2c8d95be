//! Error taxonomy for the API data path.

use thiserror::Error;

/// Every failure the request pipeline can surface, in classification order.
///
/// A payload whose `status` field is not `"success"` is NOT an error; the
/// mapping layer turns it into an empty result instead.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The endpoint could not be composed into a valid URL.
    #[error("invalid URL")]
    InvalidUrl,

    /// The response carried an empty body where a payload was expected.
    #[error("no data received")]
    NoData,

    /// A body was received but did not parse into the expected shape.
    #[error("failed to decode response: {0}")]
    Decoding(#[from] serde_json::Error),

    /// A response arrived with a status code outside 200-299.
    #[error("HTTP error with status code: {0}")]
    Http(u16),

    /// Transport-level failure: connection, timeout, or anything else the
    /// HTTP stack reports before a status code exists.
    #[error("unknown error: {0}")]
    Unknown(#[from] reqwest::Error),
}
