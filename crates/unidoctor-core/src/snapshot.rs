// ── Immutable network snapshot ──
//
// One frozen view of the network for the duration of one analysis run.
// The engine never mutates it; repeated runs over the same snapshot
// produce byte-identical output.

use serde::Serialize;

use crate::model::{
    AccessPoint, Event, GatewaySettings, MacAddress, RogueObservation, Topology, WirelessClient,
    WlanProfile,
};

/// Everything the analyzers consume, in domain form.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NetworkSnapshot {
    pub access_points: Vec<AccessPoint>,
    pub clients: Vec<WirelessClient>,
    pub rogue_aps: Vec<RogueObservation>,
    pub events: Vec<Event>,
    pub wlans: Vec<WlanProfile>,
    pub settings: GatewaySettings,
    pub topology: Topology,
}

impl NetworkSnapshot {
    pub fn ap_by_mac(&self, mac: &MacAddress) -> Option<&AccessPoint> {
        self.access_points.iter().find(|ap| &ap.mac == mac)
    }

    /// Display name for an AP MAC, falling back to the MAC itself.
    pub fn ap_name(&self, mac: &MacAddress) -> String {
        self.ap_by_mac(mac)
            .map_or_else(|| mac.to_string(), |ap| ap.display_name().to_owned())
    }

    /// Access points in deterministic processing order:
    /// ascending MAC, ties broken by name.
    pub fn ordered_aps(&self) -> Vec<&AccessPoint> {
        let mut aps: Vec<&AccessPoint> = self.access_points.iter().collect();
        aps.sort_by(|a, b| {
            a.mac
                .cmp(&b.mac)
                .then_with(|| a.display_name().cmp(b.display_name()))
        });
        aps
    }
}
