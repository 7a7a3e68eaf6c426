// ── RF analysis & channel planning engine ──
//
// The one module with real algorithmic content: frequency-overlap
// geometry, radar-aware candidate ordering, congestion-driven width
// selection, and deterministic multi-AP channel assignment.
//
// Everything here is a pure computation over the snapshot. Finding
// generation is independent per radio; the 5 GHz assignment pass is the
// single place that needs cross-AP coordination and runs as one ordered
// fold over the deterministically sorted AP list.

mod congestion;
mod findings;
mod planner;
mod radar;
pub mod spectrum;

pub use radar::radar_detected;

use tracing::debug;

use crate::model::{ChannelPlanEntry, Finding};
use crate::rules::RuleSet;
use crate::snapshot::NetworkSnapshot;

/// Module tag carried on every finding produced here.
pub const MODULE: &str = "rf-analysis";

/// The RF analysis engine. Thresholds are fixed at construction; the
/// engine itself is stateless across `analyze` calls.
#[derive(Debug, Clone)]
pub struct RfAnalyzer {
    rules: RuleSet,
}

impl RfAnalyzer {
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// Run the full RF analysis over one immutable snapshot, producing
    /// severity-ranked findings and a per-AP, per-band channel plan.
    ///
    /// Deterministic: identical input yields byte-identical output.
    /// Total: an empty snapshot yields empty outputs, never an error.
    pub fn analyze(&self, snapshot: &NetworkSnapshot) -> (Vec<Finding>, Vec<ChannelPlanEntry>) {
        debug!(
            aps = snapshot.access_points.len(),
            rogues = snapshot.rogue_aps.len(),
            "running RF analysis"
        );

        let findings = findings::generate(&self.rules, snapshot);
        let plan = planner::plan(&self.rules, snapshot);

        debug!(
            findings = findings.len(),
            plan_entries = plan.len(),
            "RF analysis complete"
        );

        (findings, plan)
    }
}
