use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Device metadata attached to a variable read.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CoreInfo {
    pub last_app: String,
    pub last_heard: String, // RFC 3339, kept as text
    pub connected: bool,
    #[serde(rename = "deviceId")]
    pub device_id: String,
}

impl CoreInfo {
    /// Returns `last_heard` as a timestamp, or `None` if the service sent something that is not RFC 3339.
    pub fn last_heard_at(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.last_heard).ok().map(|at| at.with_timezone(&Utc))
    }
}
