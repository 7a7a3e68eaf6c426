// unidoctor-core: domain model and analysis engine.
//
// Everything in this crate is a pure computation over one immutable
// `NetworkSnapshot`. No I/O, no persistence, no retries -- the API crate
// collects data, the CLI renders results, and this crate sits in between
// turning a snapshot into findings and a channel plan.

pub mod analysis;
pub mod convert;
pub mod model;
pub mod report;
pub mod rules;
pub mod snapshot;

// ── Primary re-exports ──────────────────────────────────────────────
pub use analysis::AnalysisModule;
pub use analysis::rf::RfAnalyzer;
pub use report::DiagnosticReport;
pub use rules::RuleSet;
pub use snapshot::NetworkSnapshot;

// Re-export model types at the crate root for ergonomics.
pub use model::{
    // Core entities
    AccessPoint, Band, ChannelWidth, MacAddress, RadioState, TxPower,
    // Evidence
    Event, RogueObservation, WirelessClient,
    // Topology
    BackhaulType, BarrierType, FloorLevel, Placement, Topology, TopologyLink,
    // Outputs
    ChannelPlanEntry, Finding, Severity,
    // Site-wide configuration evidence
    GatewaySettings, WlanProfile,
};
