use crate::responses::VariableType;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One entry of `GET /v1/devices`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SimpleDevice {
    pub id: String,
    pub name: String,
    #[serde(rename = "connected")]
    pub is_connected: bool,
    pub product_id: i32,
}

// API: GET /v1/devices/{device id}
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CompleteDevice {
    #[serde(rename = "id")]
    pub device_id: String,
    pub name: String,
    #[serde(rename = "connected")]
    pub is_connected: bool,
    pub variables: HashMap<String, String>, // variable name -> declared type, e.g. "int32"
    pub functions: Vec<String>,
    #[serde(rename = "cc3000_patch_version")]
    pub version: String,
    pub product_id: i32,
    #[serde(rename = "device_needs_update")]
    pub requires_update: bool,
}

impl CompleteDevice {
    /// Returns the declared type of the variable `name`, or `None` when the device does not expose it.
    pub fn variable_type(&self, name: &str) -> Option<VariableType> {
        self.variables.get(name).map(|declared| VariableType::from_declared(declared))
    }
}
