use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("Document Format Error: {0}")]
    DocumentFormat(String),
    #[error("Missing Currency: no rate for {0}")]
    MissingCurrency(String),
    #[error("Validation Error: {0}")]
    ValidationError(String),
    #[error("Parse Error: {0}")]
    ParseError(String),
    #[error("Network Error: {0}")]
    NetworkError(String),
    #[error("Database Error: {0}")]
    DatabaseError(String),
    #[error("IO Error: {0}")]
    IoError(String),
}

impl From<reqwest::Error> for ScraperError {
    fn from(err: reqwest::Error) -> Self {
        ScraperError::NetworkError(err.to_string())
    }
}

impl From<serde_json::Error> for ScraperError {
    fn from(err: serde_json::Error) -> Self {
        ScraperError::ParseError(err.to_string())
    }
}

impl From<sqlx::Error> for ScraperError {
    fn from(err: sqlx::Error) -> Self {
        ScraperError::DatabaseError(err.to_string())
    }
}

impl From<std::io::Error> for ScraperError {
    fn from(err: std::io::Error) -> Self {
        ScraperError::IoError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ScraperError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = ScraperError::DocumentFormat("missing table".to_string());
        assert_eq!(error.to_string(), "Document Format Error: missing table");

        let error = ScraperError::MissingCurrency("Divine Orb".to_string());
        assert_eq!(error.to_string(), "Missing Currency: no rate for Divine Orb");
    }

    #[test]
    fn test_json_error_becomes_parse_error() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(matches!(ScraperError::from(err), ScraperError::ParseError(_)));
    }
}
