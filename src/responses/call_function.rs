use serde::{Deserialize, Serialize};

// API: POST /v1/devices/{device id}/{function}
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CallFunctionResponse {
    #[serde(rename = "id")]
    pub device_id: String,
    #[serde(rename = "name")]
    pub device_name: String,
    pub connected: bool,
    pub return_value: i32,
}
