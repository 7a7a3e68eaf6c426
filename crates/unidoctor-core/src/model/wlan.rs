// ── SSID configuration domain type ──

use serde::{Deserialize, Serialize};

/// Band steering configuration for an SSID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BandSteering {
    Off,
    Prefer5g,
    Force5g,
}

/// One SSID's roaming-relevant configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WlanProfile {
    pub name: String,
    pub enabled: bool,
    /// 802.11r Fast BSS Transition.
    pub fast_roaming: bool,
    pub min_rssi_enabled: bool,
    pub min_rssi_dbm: Option<i32>,
    pub band_steering: BandSteering,
}
