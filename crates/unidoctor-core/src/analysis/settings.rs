// ── Gateway settings audit ──
//
// The UDM-class gateways cannot run IDS/IPS or Smart Queues at gigabit
// line rate; both silently cap throughput for the whole site.

use crate::model::{Finding, Severity};
use crate::rules::RuleSet;
use crate::snapshot::NetworkSnapshot;

pub const MODULE: &str = "settings-audit";

pub fn analyze(_rules: &RuleSet, snapshot: &NetworkSnapshot) -> Vec<Finding> {
    let mut findings = Vec::new();
    let settings = &snapshot.settings;

    // ── IDS/IPS ─────────────────────────────────────────────────────
    if let Some(mode) = settings.ips_mode.as_deref() {
        findings.push(
            Finding::new(
                Severity::Critical,
                MODULE,
                format!("IDS/IPS is enabled (mode: {})", mode.to_uppercase()),
                "Threat Management inspects every packet in software. On gigabit WAN \
                 the engine tops out well below line rate and causes drops and latency \
                 spikes under load.",
            )
            .recommend(
                "Disable Threat Management, or at minimum switch to IDS-only mode and \
                 re-test throughput.",
            )
            .at_ui_path("Settings > Security > Internet Threat Management")
            .with_change(serde_json::json!({ "setting": "ips", "ips_mode": "disabled" })),
        );
    } else {
        findings.push(Finding::new(
            Severity::Good,
            MODULE,
            "IDS/IPS is disabled",
            "No threat-inspection throughput penalty.",
        ));
    }

    // ── Smart Queues ────────────────────────────────────────────────
    if settings.smart_queues_enabled {
        findings.push(
            Finding::new(
                Severity::Critical,
                MODULE,
                "Smart Queues (SQM) is enabled",
                "SQM targets bufferbloat on slow links; at gigabit speeds the gateway \
                 cannot shape at line rate and throughput drops hard.",
            )
            .recommend("Disable Smart Queues on fast fiber/cable connections.")
            .at_ui_path("Settings > Internet > Advanced > Smart Queues")
            .with_change(serde_json::json!({ "setting": "sqm", "enabled": false })),
        );
    } else {
        findings.push(Finding::new(
            Severity::Good,
            MODULE,
            "Smart Queues (SQM) is disabled",
            "No shaping overhead on the WAN path.",
        ));
    }

    // ── DPI ─────────────────────────────────────────────────────────
    if settings.dpi_enabled {
        findings.push(
            Finding::new(
                Severity::Info,
                MODULE,
                "Deep Packet Inspection is enabled",
                "DPI adds modest CPU overhead per packet. Worth keeping only if the \
                 traffic identification data is actually used.",
            )
            .recommend("Disable DPI if the insights are not being used."),
        );
    } else {
        findings.push(Finding::new(
            Severity::Good,
            MODULE,
            "Deep Packet Inspection is disabled",
            "No per-packet classification overhead.",
        ));
    }

    findings
}
