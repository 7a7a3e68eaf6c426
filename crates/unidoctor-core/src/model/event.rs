// ── Event domain type ──

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::MacAddress;

/// Controller event log entry.
///
/// The analyzers use events for exactly one thing: detecting radar
/// indications (key or message containing "radar"). Everything else rides
/// along for the report layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub timestamp: Option<DateTime<Utc>>,
    pub key: String,
    pub message: String,
    pub channel: Option<u16>,
    pub subsystem: Option<String>,
    pub ap_mac: Option<MacAddress>,
}

impl Event {
    /// True if this event looks like a radar (DFS) indication.
    pub fn mentions_radar(&self) -> bool {
        fn has_radar(s: &str) -> bool {
            s.to_ascii_lowercase().contains("radar")
        }
        has_radar(&self.key) || has_radar(&self.message)
    }
}
