use crate::error::{Result, StravaError};

const CLIENT_ID_VAR: &str = "STRAVA_CLIENT_ID";
const CLIENT_SECRET_VAR: &str = "STRAVA_CLIENT_SECRET";
const REFRESH_TOKEN_VAR: &str = "STRAVA_REFRESH_TOKEN";

/// API application credentials plus the athlete's long-lived refresh token.
/// Read from the environment (`.env` files are loaded by the binary before
/// commands run).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StravaCredentials {
    pub client_id: String,
    pub client_secret: String,
    pub refresh_token: String,
}

impl StravaCredentials {
    /// Load credentials from the environment
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            client_id: require_env(CLIENT_ID_VAR)?,
            client_secret: require_env(CLIENT_SECRET_VAR)?,
            refresh_token: require_env(REFRESH_TOKEN_VAR)?,
        })
    }
}

fn require_env(key: &'static str) -> Result<String> {
    std::env::var(key)
        .ok()
        .filter(|value| !value.is_empty())
        .ok_or_else(|| StravaError::config(format!("{key} is not set")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_env_rejects_missing_variable() {
        let err = require_env("STRAVA_CLI_TEST_UNSET_VARIABLE").unwrap_err();
        assert!(matches!(err, StravaError::Config(_)));
        assert!(err.to_string().contains("STRAVA_CLI_TEST_UNSET_VARIABLE"));
    }
}
