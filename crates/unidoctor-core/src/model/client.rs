// ── Wireless client domain type ──

use serde::{Deserialize, Serialize};

use super::common::{Band, MacAddress};

/// A connected wireless client (wired stations are dropped at conversion).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WirelessClient {
    pub mac: MacAddress,
    pub name: Option<String>,
    pub hostname: Option<String>,
    /// MAC of the AP this client is associated to.
    pub ap_mac: Option<MacAddress>,
    pub band: Option<Band>,
    pub channel: Option<u16>,
    pub signal_dbm: Option<i32>,
    /// PHY rates in Mbps (normalized from wire kbps where needed).
    pub tx_rate_mbps: Option<u32>,
    pub rx_rate_mbps: Option<u32>,
    pub satisfaction: u8,
}

impl WirelessClient {
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.hostname.as_deref())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| self.mac.as_str())
    }

    /// The lower of the two PHY rates, the usual bottleneck indicator.
    pub fn min_phy_rate_mbps(&self) -> Option<u32> {
        match (self.tx_rate_mbps, self.rx_rate_mbps) {
            (Some(tx), Some(rx)) => Some(tx.min(rx)),
            (one, other) => one.or(other),
        }
    }
}
