// ── Rogue (neighboring foreign) AP observation ──

use serde::{Deserialize, Serialize};

use super::common::{Band, MacAddress};

/// A foreign AP heard by one of our APs during a background scan.
///
/// Read-only evidence: used for congestion estimation and co-located
/// interference findings. Not owned by any `AccessPoint`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RogueObservation {
    pub bssid: Option<MacAddress>,
    pub essid: Option<String>,
    pub band: Option<Band>,
    pub channel: Option<u16>,
    /// Observed signal in dBm; -100 when the controller omitted it.
    pub signal_dbm: i32,
    pub age_secs: Option<i64>,
    /// The in-network AP that observed this neighbor.
    pub seen_by: Option<MacAddress>,
}
