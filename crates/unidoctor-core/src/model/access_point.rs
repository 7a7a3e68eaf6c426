// ── Access point domain types ──

use serde::{Deserialize, Serialize};

use super::common::{Band, ChannelWidth, MacAddress, TxPower};

/// Observed + configured state of one radio on one band.
///
/// At most one instance exists per (AP, band). A `channel` of `None` means
/// the controller reported a non-numeric value (e.g. `"auto"` before the
/// first scan); such radios are excluded from validity and overlap checks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RadioState {
    pub band: Band,
    pub channel: Option<u16>,
    pub width: ChannelWidth,
    pub tx_power: TxPower,
    /// Total channel utilization, 0-100.
    pub utilization_pct: u8,
    /// Airtime spent receiving our own traffic, 0-100.
    pub self_rx_pct: u8,
    /// Airtime spent transmitting our own traffic, 0-100.
    pub self_tx_pct: u8,
    pub noise_floor_dbm: i32,
    /// Controller-computed quality score, 0-100.
    pub satisfaction: u8,
}

/// Uplink state for throughput checks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UplinkState {
    pub wireless: bool,
    pub speed_mbps: Option<u32>,
    pub rx_errors: u64,
    pub tx_errors: u64,
}

/// An access point with up to one radio per band.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessPoint {
    pub mac: MacAddress,
    pub name: Option<String>,
    pub model: Option<String>,
    pub radio_2g: Option<RadioState>,
    pub radio_5g: Option<RadioState>,
    pub uplink: Option<UplinkState>,
    /// Derived from topology: placement floor `detached` marks the AP outdoor.
    pub outdoor: bool,
}

impl AccessPoint {
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| self.mac.as_str())
    }

    pub fn radio(&self, band: Band) -> Option<&RadioState> {
        match band {
            Band::Ghz2_4 => self.radio_2g.as_ref(),
            Band::Ghz5 => self.radio_5g.as_ref(),
        }
    }
}
