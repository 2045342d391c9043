use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Short-lived bearer token returned by the token endpoint.
/// Obtained per run from the long-lived refresh token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccessToken {
    pub token_type: String,
    pub access_token: String,
    pub refresh_token: String,
    /// Epoch seconds at which the access token expires
    pub expires_at: i64,
    #[serde(default)]
    pub expires_in: i64,
}

impl AccessToken {
    /// Check if the access token has expired.
    pub fn is_expired(&self) -> bool {
        self.expires_at < Utc::now().timestamp()
    }

    /// Returns the Authorization header value.
    pub fn authorization_header(&self) -> String {
        format!("{} {}", self.token_type, self.access_token)
    }
}
