// ── Throughput analysis ──
//
// Backhaul checks: wireless mesh uplinks, slow wired uplinks, uplink
// errors. A congested or degraded backhaul bottlenecks every client on
// the AP regardless of RF conditions.

use crate::model::{Finding, Severity};
use crate::rules::RuleSet;
use crate::snapshot::NetworkSnapshot;

pub const MODULE: &str = "throughput-analysis";

pub fn analyze(rules: &RuleSet, snapshot: &NetworkSnapshot) -> Vec<Finding> {
    let mut findings = Vec::new();
    let aps = snapshot.ordered_aps();
    if aps.is_empty() {
        return findings;
    }

    // ── Mesh uplinks ────────────────────────────────────────────────
    let mut any_mesh = false;
    for ap in &aps {
        if !ap.uplink.as_ref().is_some_and(|u| u.wireless) {
            continue;
        }
        any_mesh = true;
        findings.push(
            Finding::new(
                Severity::Critical,
                MODULE,
                format!("{}: running on a wireless mesh uplink", ap.display_name()),
                "A mesh backhaul halves the available bandwidth (the same radio serves \
                 backhaul and clients) and adds latency on every hop.",
            )
            .recommend(
                "Run Ethernet to this AP if at all possible; MoCA or powerline beat \
                 mesh if cable is not an option.",
            )
            .at_ui_path(format!(
                "Devices > {} > Details > Uplink",
                ap.display_name()
            )),
        );
    }
    if !any_mesh {
        findings.push(Finding::new(
            Severity::Good,
            MODULE,
            "All APs are wired (no mesh)",
            "Every AP has a wired Ethernet backhaul.",
        ));
    }

    // ── Wired uplink speed ──────────────────────────────────────────
    let mut any_slow = false;
    for ap in &aps {
        let Some(uplink) = ap.uplink.as_ref().filter(|u| !u.wireless) else {
            continue;
        };
        let Some(speed) = uplink.speed_mbps.filter(|s| *s > 0) else {
            continue;
        };
        if speed >= rules.expected_uplink_speed_mbps {
            continue;
        }
        any_slow = true;
        findings.push(
            Finding::new(
                Severity::Warning,
                MODULE,
                format!(
                    "{}: uplink negotiated at {speed} Mbps (expected {})",
                    ap.display_name(),
                    rules.expected_uplink_speed_mbps
                ),
                "A slow uplink bottlenecks every client on this AP. Common causes: \
                 Cat5 cable, bad termination, or a port negotiation problem.",
            )
            .recommend("Replace the cable with Cat6 and re-check both terminations."),
        );
    }
    if !any_slow && aps.iter().any(|ap| ap.uplink.is_some()) {
        findings.push(Finding::new(
            Severity::Good,
            MODULE,
            "All wired uplinks at full speed",
            format!(
                "No AP uplink below {} Mbps.",
                rules.expected_uplink_speed_mbps
            ),
        ));
    }

    // ── Uplink errors ───────────────────────────────────────────────
    for ap in &aps {
        let Some(uplink) = ap.uplink.as_ref() else {
            continue;
        };
        let errors = uplink.rx_errors + uplink.tx_errors;
        if errors <= rules.uplink_error_threshold {
            continue;
        }
        findings.push(
            Finding::new(
                Severity::Warning,
                MODULE,
                format!("{}: {errors} uplink errors", ap.display_name()),
                format!(
                    "{} RX and {} TX errors accumulated on the uplink -- usually a \
                     cabling problem.",
                    uplink.rx_errors, uplink.tx_errors
                ),
            )
            .recommend("Replace the Ethernet cable; if errors persist, try another port."),
        );
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AccessPoint, MacAddress, UplinkState};

    fn ap(mac: &str, uplink: Option<UplinkState>) -> AccessPoint {
        AccessPoint {
            mac: MacAddress::new(mac),
            name: Some("AP".into()),
            model: None,
            radio_2g: None,
            radio_5g: None,
            uplink,
            outdoor: false,
        }
    }

    #[test]
    fn mesh_uplink_is_critical() {
        let snapshot = NetworkSnapshot {
            access_points: vec![ap(
                "aa:00:00:00:00:01",
                Some(UplinkState {
                    wireless: true,
                    speed_mbps: None,
                    rx_errors: 0,
                    tx_errors: 0,
                }),
            )],
            ..NetworkSnapshot::default()
        };
        let findings = analyze(&RuleSet::default(), &snapshot);
        assert!(findings.iter().any(|f| f.severity == Severity::Critical
            && f.title.contains("wireless mesh uplink")));
    }

    #[test]
    fn slow_uplink_warns() {
        let snapshot = NetworkSnapshot {
            access_points: vec![ap(
                "aa:00:00:00:00:01",
                Some(UplinkState {
                    wireless: false,
                    speed_mbps: Some(100),
                    rx_errors: 0,
                    tx_errors: 0,
                }),
            )],
            ..NetworkSnapshot::default()
        };
        let findings = analyze(&RuleSet::default(), &snapshot);
        assert!(findings.iter().any(|f| f.severity == Severity::Warning
            && f.title.contains("negotiated at 100 Mbps")));
    }

    #[test]
    fn clean_wired_site_is_affirmed() {
        let snapshot = NetworkSnapshot {
            access_points: vec![ap(
                "aa:00:00:00:00:01",
                Some(UplinkState {
                    wireless: false,
                    speed_mbps: Some(1000),
                    rx_errors: 1,
                    tx_errors: 0,
                }),
            )],
            ..NetworkSnapshot::default()
        };
        let findings = analyze(&RuleSet::default(), &snapshot);
        assert!(findings.iter().all(|f| f.severity == Severity::Good));
        assert_eq!(findings.len(), 2);
    }
}
