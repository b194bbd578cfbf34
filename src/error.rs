/// Error type returned by this crate.
#[derive(Debug, thiserror::Error)]
pub enum AirbnbError {
    /// The request URL or one of its headers could not be built.
    #[error("invalid request: {0}")]
    Build(String),
    /// Client configuration was rejected before any request was sent.
    #[error("invalid configuration: {0}")]
    Config(String),
    /// Network or request execution error from `reqwest`.
    #[error("transport error: {0}")]
    Transport(reqwest::Error),
    /// The API kept answering with a non-success status until the retry cap.
    #[error("http error {status} after {attempts} attempts: {body}")]
    Exhausted {
        /// Status code of the last response.
        status: u16,
        /// Number of sends performed, including the first one.
        attempts: usize,
        /// Raw body of the last response.
        body: String,
    },
    /// A success response arrived but its body could not be drained.
    #[error("body read error: {0}")]
    Body(reqwest::Error),
    /// Response JSON did not match the requested type.
    #[error("decode error: {0}")]
    Decode(String),
    /// The caller cancelled the request while it was in flight or backing off.
    #[error("request cancelled")]
    Cancelled,
}
