// ── Unified domain model ──
//
// Every type in this module is the canonical representation of a network
// entity as the analyzers see it. The wire-format models in `unidoctor-api`
// are lowered into these by `crate::convert`; nothing here knows about
// JSON quirks or missing fields.

pub mod access_point;
pub mod client;
pub mod common;
pub mod event;
pub mod finding;
pub mod plan;
pub mod rogue;
pub mod settings;
pub mod topology;
pub mod wlan;

// ── Re-exports ──────────────────────────────────────────────────────
// Flat access: `use unidoctor_core::model::*` gives you everything.

pub use common::{Band, ChannelWidth, MacAddress, TxPower};

pub use access_point::{AccessPoint, RadioState, UplinkState};
pub use client::WirelessClient;
pub use event::Event;
pub use rogue::RogueObservation;

pub use topology::{BackhaulType, BarrierType, FloorLevel, Placement, Topology, TopologyLink};

pub use finding::{Finding, Severity};
pub use plan::ChannelPlanEntry;

pub use settings::GatewaySettings;
pub use wlan::{BandSteering, WlanProfile};
