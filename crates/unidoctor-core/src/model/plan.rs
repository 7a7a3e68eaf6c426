// ── Channel plan output type ──

use serde::Serialize;

use super::common::{Band, ChannelWidth, MacAddress, TxPower};

/// One row of the recommended channel plan: the current and recommended
/// channel/width/power for one AP on one band.
///
/// The planner emits at most one entry per (AP, band) per run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChannelPlanEntry {
    pub ap_mac: MacAddress,
    pub ap_name: String,
    pub band: Band,
    /// `None` when the controller reported a non-numeric channel.
    pub current_channel: Option<u16>,
    pub recommended_channel: u16,
    pub current_width: ChannelWidth,
    pub recommended_width: ChannelWidth,
    pub current_power: TxPower,
    pub recommended_power: TxPower,
    /// Human-readable trigger(s), `"; "`-joined, or `"no change needed"`.
    pub reason: String,
}

impl ChannelPlanEntry {
    /// True if applying this entry would change the radio configuration.
    pub fn needs_change(&self) -> bool {
        self.current_channel != Some(self.recommended_channel)
            || self.current_width != self.recommended_width
            || self.current_power != self.recommended_power
    }
}
