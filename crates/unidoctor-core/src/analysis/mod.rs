// ── Analysis modules ──
//
// Each module is a pure function over one immutable snapshot. `rf` is the
// only one that also produces a channel plan; the rest are threshold-only
// finding generators.

pub mod rf;
pub mod roaming;
pub mod settings;
pub mod streaming;
pub mod throughput;

use chrono::Utc;
use tracing::debug;

use crate::report::DiagnosticReport;
use crate::rules::RuleSet;
use crate::snapshot::NetworkSnapshot;

/// Selectable analysis module.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    serde::Serialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AnalysisModule {
    Rf,
    Roaming,
    Throughput,
    Settings,
    Streaming,
}

impl AnalysisModule {
    pub const ALL: [Self; 5] = [
        Self::Rf,
        Self::Roaming,
        Self::Throughput,
        Self::Settings,
        Self::Streaming,
    ];
}

/// Run the selected analysis modules over one snapshot and assemble the
/// report. Module order is fixed so repeated runs produce identical output.
pub fn run(
    rules: &RuleSet,
    snapshot: &NetworkSnapshot,
    modules: &[AnalysisModule],
) -> DiagnosticReport {
    let mut report = DiagnosticReport {
        generated_at: Utc::now(),
        modules_run: Vec::new(),
        findings: Vec::new(),
        channel_plan: Vec::new(),
    };

    for module in AnalysisModule::ALL {
        if !modules.contains(&module) {
            continue;
        }
        debug!(%module, "running analysis module");
        report.modules_run.push(module.to_string());

        match module {
            AnalysisModule::Rf => {
                let analyzer = rf::RfAnalyzer::new(rules.clone());
                let (findings, plan) = analyzer.analyze(snapshot);
                report.findings.extend(findings);
                report.channel_plan.extend(plan);
            }
            AnalysisModule::Roaming => report.findings.extend(roaming::analyze(rules, snapshot)),
            AnalysisModule::Throughput => {
                report.findings.extend(throughput::analyze(rules, snapshot));
            }
            AnalysisModule::Settings => report.findings.extend(settings::analyze(rules, snapshot)),
            AnalysisModule::Streaming => {
                report.findings.extend(streaming::analyze(rules, snapshot));
            }
        }
    }

    report
}
