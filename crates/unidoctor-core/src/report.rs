// ── Diagnostic report assembly ──

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::model::{ChannelPlanEntry, Finding, Severity};

/// Everything one analysis run produced, ready for rendering.
///
/// Findings keep their generation order; the report layer groups them by
/// severity at render time.
#[derive(Debug, Clone, Serialize)]
pub struct DiagnosticReport {
    pub generated_at: DateTime<Utc>,
    pub modules_run: Vec<String>,
    pub findings: Vec<Finding>,
    pub channel_plan: Vec<ChannelPlanEntry>,
}

impl DiagnosticReport {
    pub fn with_severity(&self, severity: Severity) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(move |f| f.severity == severity)
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.with_severity(severity).count()
    }

    /// True when nothing needs attention (no critical or warning findings).
    pub fn healthy(&self) -> bool {
        self.count(Severity::Critical) == 0 && self.count(Severity::Warning) == 0
    }
}
