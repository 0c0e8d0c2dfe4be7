use serde::Deserialize;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppError {
    Config(String),
    Network(String),
    Timeout(String),
    Http { status: u16, message: String },
    Parse(String),
    Serialization(String),
}

/// Error body shape used by the backend (`{"detail": "..."}`).
#[derive(Deserialize)]
struct ErrorDetail {
    detail: String,
}

impl AppError {
    /// Returns the backend-provided `detail` text of an HTTP error, if the body
    /// carried one as a plain string.
    pub fn detail(&self) -> Option<String> {
        match self {
            AppError::Http { message, .. } => serde_json::from_str::<ErrorDetail>(message)
                .ok()
                .map(|body| body.detail.trim().to_string())
                .filter(|detail| !detail.is_empty()),
            _ => None,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(message) => write!(formatter, "Config error: {message}"),
            AppError::Network(message) => write!(formatter, "Network error: {message}"),
            AppError::Timeout(message) => write!(formatter, "Timeout: {message}"),
            AppError::Http { status, message } => {
                write!(formatter, "Request failed ({status}): {message}")
            }
            AppError::Parse(message) => write!(formatter, "Response error: {message}"),
            AppError::Serialization(message) => {
                write!(formatter, "Request error: {message}")
            }
        }
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn detail_reads_backend_message() {
        let err = AppError::Http {
            status: 401,
            message: r#"{"detail":"Invalid email or password"}"#.to_string(),
        };
        assert_eq!(err.detail().as_deref(), Some("Invalid email or password"));
    }

    #[test]
    fn detail_ignores_structured_or_plain_bodies() {
        let validation = AppError::Http {
            status: 422,
            message: r#"{"detail":[{"loc":["body","email"],"msg":"bad"}]}"#.to_string(),
        };
        assert_eq!(validation.detail(), None);

        let plain = AppError::Http {
            status: 502,
            message: "Bad Gateway".to_string(),
        };
        assert_eq!(plain.detail(), None);
        assert_eq!(AppError::Network("down".to_string()).detail(), None);
    }

    #[test]
    fn display_includes_status() {
        let err = AppError::Http {
            status: 404,
            message: "missing".to_string(),
        };
        assert_eq!(err.to_string(), "Request failed (404): missing");
    }
}
