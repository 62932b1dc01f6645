use crate::responses::CoreInfo;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

// API: GET /v1/devices/{device id}/{variable}
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReadVariableResponse<T> {
    #[serde(rename = "cmd")]
    pub command_name: String,
    #[serde(rename = "name")]
    pub variable_name: String,
    pub result: T,
    #[serde(rename = "coreInfo", default)]
    pub core_info: Option<CoreInfo>,
}

pub type ReadIntVariableResponse = ReadVariableResponse<i32>;
pub type ReadDoubleVariableResponse = ReadVariableResponse<f64>;
pub type ReadStringVariableResponse = ReadVariableResponse<String>;
pub type ReadObjectVariableResponse = ReadVariableResponse<Value>;

impl<T> ReadVariableResponse<T> {
    /// Converts the result while keeping the rest of the envelope.
    pub fn map_result<U>(self, f: impl FnOnce(T) -> U) -> ReadVariableResponse<U> {
        ReadVariableResponse {
            command_name: self.command_name,
            variable_name: self.variable_name,
            result: f(self.result),
            core_info: self.core_info,
        }
    }
}

/// The type a device declares for one of its variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariableType {
    Int,
    Double,
    String,
    Opaque,
}

impl VariableType {
    /// Maps the type string of `CompleteDevice::variables` to a variable type. Unknown types are opaque.
    pub fn from_declared(declared: &str) -> Self {
        match declared {
            "int32" | "int" => VariableType::Int,
            "double" | "float" => VariableType::Double,
            "string" => VariableType::String,
            _ => VariableType::Opaque,
        }
    }
}

impl fmt::Display for VariableType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariableType::Int => write!(f, "int32"),
            VariableType::Double => write!(f, "double"),
            VariableType::String => write!(f, "string"),
            VariableType::Opaque => write!(f, "opaque"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum VariableValue {
    Int(i32),
    Double(f64),
    String(String),
    Opaque(Value),
}

impl VariableValue {
    pub fn variable_type(&self) -> VariableType {
        match self {
            VariableValue::Int(_) => VariableType::Int,
            VariableValue::Double(_) => VariableType::Double,
            VariableValue::String(_) => VariableType::String,
            VariableValue::Opaque(_) => VariableType::Opaque,
        }
    }
}
