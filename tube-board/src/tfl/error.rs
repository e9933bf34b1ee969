//! TfL client error types.

/// A failed fetch from the TfL API (or the mock standing in for it).
///
/// Every variant is transient from the board's point of view: the scheduler
/// shows the message and retries on the next tick.
#[derive(Debug, thiserror::Error)]
pub enum TflError {
    /// HTTP request failed (network error, timeout, etc.)
    ///
    /// Holds the error with its URL stripped; the URL carries the app key.
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    /// Response body did not match the expected schema
    #[error(
        "JSON parse error: {message}{}",
        .body.as_ref().map(|b| format!(" (body: {b})")).unwrap_or_default()
    )]
    Json {
        message: String,
        body: Option<String>,
    },

    /// API returned an error status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Rate limited by the API
    #[error("rate limited by TfL API")]
    RateLimited,

    /// Invalid or missing app key
    #[error("unauthorized: check TFL_APP_KEY")]
    Unauthorized,

    /// Mock data directory could not be read
    #[error("mock data error: {0}")]
    Mock(String),
}

impl From<reqwest::Error> for TflError {
    fn from(err: reqwest::Error) -> Self {
        TflError::Http(err.without_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = TflError::Api {
            status: 503,
            message: "Service Unavailable".into(),
        };
        assert_eq!(err.to_string(), "API error 503: Service Unavailable");

        let err = TflError::Json {
            message: "missing field `timeToStation`".into(),
            body: Some("[{}]".into()),
        };
        assert_eq!(
            err.to_string(),
            "JSON parse error: missing field `timeToStation` (body: [{}])"
        );

        let err = TflError::Json {
            message: "expected a sequence".into(),
            body: None,
        };
        assert_eq!(err.to_string(), "JSON parse error: expected a sequence");

        assert_eq!(TflError::RateLimited.to_string(), "rate limited by TfL API");
    }
}
