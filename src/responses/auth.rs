use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Result of the OAuth password grant.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LogInResponse {
    #[serde(rename = "expires_in")]
    pub expires_in_seconds: i64,
    pub access_token: String,
    pub token_type: String,
}
