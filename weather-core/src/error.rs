use thiserror::Error;

/// Failure taxonomy for the weather pipeline.
///
/// Nothing is retried internally; every error propagates to the binary,
/// which exits non-zero with the rendered message.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Missing or unusable configuration, detected before any network call.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Connection failure, timeout, or a non-success HTTP status.
    #[error("transport error: {0}")]
    Transport(String),

    /// Response body that could not be decoded as JSON.
    #[error("provider returned a malformed response: {0}")]
    Malformed(String),

    /// Well-formed payload lacking a field the report cannot be built without.
    #[error("provider response is missing required field `{0}`")]
    MissingField(&'static str),

    /// The report could not be serialized or written to its destination.
    #[error("output error: {0}")]
    Output(String),
}

impl From<reqwest::Error> for WeatherError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            WeatherError::Transport(format!("request timed out: {err}"))
        } else {
            WeatherError::Transport(err.to_string())
        }
    }
}
