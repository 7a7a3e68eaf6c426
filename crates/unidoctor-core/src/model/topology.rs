// ── Physical topology types ──
//
// Optional user-supplied knowledge about where APs physically sit and what
// separates them. The engine never requires topology; its absence only
// caps overlap-finding severity at `warning`.

use serde::{Deserialize, Serialize};

use super::common::MacAddress;

/// Floor category for an AP placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FloorLevel {
    Ground,
    Upper,
    Basement,
    /// A detached structure (shed, garage) -- marks the AP outdoor.
    Detached,
}

/// What separates two APs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BarrierType {
    Wall,
    FloorCeiling,
    Outdoor,
    OpenAir,
}

/// How an AP reaches the core network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackhaulType {
    Wired,
    WirelessMesh,
}

/// Where one AP sits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Placement {
    pub mac: MacAddress,
    pub name: String,
    pub floor: FloorLevel,
    #[serde(default)]
    pub location: String,
    pub backhaul: BackhaulType,
}

/// Distance and barrier between a pair of APs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopologyLink {
    pub ap1: MacAddress,
    pub ap2: MacAddress,
    pub distance_ft: f64,
    pub barrier: BarrierType,
}

/// The full (optional) physical topology.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Topology {
    #[serde(default)]
    pub placements: Vec<Placement>,
    #[serde(default)]
    pub links: Vec<TopologyLink>,
}

impl Topology {
    pub fn placement_for(&self, mac: &MacAddress) -> Option<&Placement> {
        self.placements.iter().find(|p| &p.mac == mac)
    }

    /// Symmetric link lookup for an unordered AP pair.
    pub fn link_between(&self, a: &MacAddress, b: &MacAddress) -> Option<&TopologyLink> {
        self.links
            .iter()
            .find(|l| (&l.ap1 == a && &l.ap2 == b) || (&l.ap1 == b && &l.ap2 == a))
    }

    /// An AP is outdoor iff its placement floor is `detached`.
    /// No placement record implies indoor.
    pub fn is_outdoor(&self, mac: &MacAddress) -> bool {
        self.placement_for(mac)
            .is_some_and(|p| p.floor == FloorLevel::Detached)
    }
}
