//! Realtime page fetch error types.

/// Errors that can occur while retrieving a station page.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// HTTP request failed (network error, timeout, undecodable body)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("HTTP status {status} for {url}")]
    Status { status: u16, url: String },

    /// Fixture fetcher could not provide the page
    #[error("fixture error: {message}")]
    Fixture { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = FetchError::Status {
            status: 404,
            url: "http://example.test/page.html".into(),
        };
        assert_eq!(
            err.to_string(),
            "HTTP status 404 for http://example.test/page.html"
        );

        let err = FetchError::Fixture {
            message: "no page for gilroy".into(),
        };
        assert_eq!(err.to_string(), "fixture error: no page for gilroy");
    }
}
