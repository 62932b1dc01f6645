use serde::{Deserialize, Serialize};
use std::fmt;

/// Generic acknowledgement envelope, also used by the service to report errors.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SimpleResponse {
    pub ok: bool,
    pub error: Option<String>,
}

impl fmt::Display for SimpleResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SimpleResponse [ok={}, error={}]", self.ok, self.error.as_deref().unwrap_or("null"))
    }
}
