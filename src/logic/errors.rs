use anyhow::Error;

use crate::api::SourceError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorType {
    Fetch,           // Network, DNS, refused connection, unreadable file
    HttpStatus(u16), // Non-2xx response
    Parse,           // Body is not a valid snapshot
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::Fetch => "fetch",
            ErrorType::HttpStatus(_) => "http-status",
            ErrorType::Parse => "parse",
        }
    }
}

/// Classify an error based on its type and error chain
pub fn classify_error(error: &Error) -> ErrorType {
    for cause in error.chain() {
        if let Some(reqwest_err) = cause.downcast_ref::<reqwest::Error>() {
            if let Some(status) = reqwest_err.status() {
                return ErrorType::HttpStatus(status.as_u16());
            }
            if reqwest_err.is_decode() {
                return ErrorType::Parse;
            }
        }
        if let Some(SourceError::UnexpectedStatus { status, .. }) = cause.downcast_ref::<SourceError>() {
            return ErrorType::HttpStatus(*status);
        }
        if cause.downcast_ref::<serde_json::Error>().is_some() {
            return ErrorType::Parse;
        }
    }

    ErrorType::Fetch
}

/// Walk the error chain to get the deepest (root cause) message
pub fn format_error_message(error: &Error) -> String {
    error
        .chain()
        .last()
        .map(|cause| cause.to_string())
        .unwrap_or_else(|| error.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_classify_json_error() {
        let err = serde_json::from_str::<serde_json::Value>("{oops")
            .context("Failed to parse meter data")
            .unwrap_err();
        assert_eq!(classify_error(&err), ErrorType::Parse);
    }

    #[test]
    fn test_classify_io_error_as_fetch() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = Error::new(io).context("Failed to read data.json");
        assert_eq!(classify_error(&err), ErrorType::Fetch);
    }

    #[test]
    fn test_classify_unexpected_status() {
        let err = Error::new(SourceError::UnexpectedStatus {
            status: 304,
            url: "http://x/data.json".to_string(),
        })
        .context("Failed to fetch meter data");
        assert_eq!(classify_error(&err), ErrorType::HttpStatus(304));
    }

    #[test]
    fn test_status_text_alone_is_not_a_status() {
        // Only the typed error carries a status; lookalike messages don't
        let err = anyhow::anyhow!("Unexpected status 304 Not Modified from http://x/data.json");
        assert_eq!(classify_error(&err), ErrorType::Fetch);
    }

    #[test]
    fn test_classify_other_error() {
        let err = anyhow::anyhow!("some random error");
        assert_eq!(classify_error(&err), ErrorType::Fetch);
    }

    #[test]
    fn test_format_shows_root_cause() {
        let inner = anyhow::anyhow!("tcp connect error");
        let outer = inner.context("Failed to fetch meter data");
        assert_eq!(format_error_message(&outer), "tcp connect error");
    }

    #[test]
    fn test_format_preserves_simple_errors() {
        let err = anyhow::anyhow!("custom error message");
        assert_eq!(format_error_message(&err), "custom error message");
    }
}
