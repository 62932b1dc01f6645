use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ClaimCodeResponse {
    pub claim_code: String,
    pub device_ids: Vec<String>,
}
