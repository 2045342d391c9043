use thiserror::Error;

/// Main error type for strava-cli
#[derive(Error, Debug)]
pub enum StravaError {
    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Ingest error: {0}")]
    IngestData(String),

    #[error("Not authenticated. Check STRAVA_CLIENT_ID, STRAVA_CLIENT_SECRET and STRAVA_REFRESH_TOKEN.")]
    NotAuthenticated,

    #[error("Rate limited. Please wait before retrying.")]
    RateLimited,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StravaError>;

impl StravaError {
    /// Create a missing-field error for a named field
    pub fn missing_field(field: &'static str) -> Self {
        Self::MissingField { field }
    }

    /// Create a parse error from a message
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create an ingest error from a message
    pub fn ingest(msg: impl Into<String>) -> Self {
        Self::IngestData(msg.into())
    }

    /// Create a configuration error from a message
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a storage error from a message
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StravaError::missing_field("start_date_local");
        assert_eq!(err.to_string(), "Missing required field: start_date_local");
    }

    #[test]
    fn test_not_authenticated_error() {
        let err = StravaError::NotAuthenticated;
        assert!(err.to_string().contains("STRAVA_CLIENT_ID"));
    }

    #[test]
    fn test_rate_limited_error() {
        let err = StravaError::RateLimited;
        assert!(err.to_string().contains("Rate limited"));
    }

    #[test]
    fn test_error_constructors() {
        let parse_err = StravaError::parse("bad timestamp");
        assert!(matches!(parse_err, StravaError::Parse(_)));

        let ingest_err = StravaError::ingest("fetch failed");
        assert!(matches!(ingest_err, StravaError::IngestData(_)));

        let config_err = StravaError::config("missing variable");
        assert!(matches!(config_err, StravaError::Config(_)));

        let storage_err = StravaError::storage("bad file");
        assert!(matches!(storage_err, StravaError::Storage(_)));
    }
}
