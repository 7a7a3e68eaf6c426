// ── Roaming analysis ──
//
// Threshold-only checks: sticky clients, 802.11r, min-RSSI, band steering.

use crate::model::{BandSteering, Finding, Severity};
use crate::rules::RuleSet;
use crate::snapshot::NetworkSnapshot;

pub const MODULE: &str = "roaming-analysis";

pub fn analyze(rules: &RuleSet, snapshot: &NetworkSnapshot) -> Vec<Finding> {
    let mut findings = Vec::new();
    let ap_count = snapshot.access_points.len();
    if ap_count == 0 {
        return findings;
    }

    // ── Sticky clients ──────────────────────────────────────────────
    for client in &snapshot.clients {
        let Some(rssi) = client.signal_dbm else {
            continue;
        };
        if rssi >= rules.sticky_client_rssi_dbm {
            continue;
        }
        let ap_name = client
            .ap_mac
            .as_ref()
            .map_or_else(|| "unknown AP".to_owned(), |mac| snapshot.ap_name(mac));

        findings.push(
            Finding::new(
                Severity::Warning,
                MODULE,
                format!(
                    "Sticky client: {} at {rssi} dBm on {ap_name}",
                    client.display_name()
                ),
                format!(
                    "Signal is below the {} dBm threshold; this client should have \
                     roamed to a closer AP already.",
                    rules.sticky_client_rssi_dbm
                ),
            )
            .recommend(
                "Enable minimum RSSI to kick weak clients, and 802.11r for faster handoffs.",
            ),
        );
    }

    // ── 802.11r per SSID ────────────────────────────────────────────
    for wlan in snapshot.wlans.iter().filter(|w| w.enabled) {
        if wlan.fast_roaming {
            findings.push(Finding::new(
                Severity::Good,
                MODULE,
                format!("SSID '{}': 802.11r fast roaming is enabled", wlan.name),
                "Clients can perform fast BSS transitions.",
            ));
        } else if ap_count > 1 {
            findings.push(
                Finding::new(
                    Severity::Warning,
                    MODULE,
                    format!("SSID '{}': 802.11r fast roaming is disabled", wlan.name),
                    "Without fast BSS transition, every roam renegotiates keys from \
                     scratch (~400ms instead of ~50ms) -- long enough to drop a stream.",
                )
                .recommend("Enable Fast Roaming (802.11r) on this SSID.")
                .at_ui_path(format!(
                    "Settings > WiFi > {} > Advanced > Fast Roaming",
                    wlan.name
                )),
            );
        }
    }

    // ── Min RSSI ────────────────────────────────────────────────────
    let any_min_rssi = snapshot
        .wlans
        .iter()
        .any(|w| w.enabled && w.min_rssi_enabled);
    if any_min_rssi {
        findings.push(Finding::new(
            Severity::Good,
            MODULE,
            "Minimum RSSI is enabled",
            "Weak clients are disconnected so they roam instead of lingering.",
        ));
    } else if ap_count > 1 {
        let recommended = if ap_count >= rules.dense_site_ap_count {
            rules.min_rssi_tight_dbm
        } else {
            rules.min_rssi_loose_dbm
        };
        findings.push(
            Finding::new(
                Severity::Info,
                MODULE,
                "Minimum RSSI is not enabled on any SSID",
                "Without min RSSI, weak clients stay connected to a far AP with \
                 terrible signal instead of roaming to a closer one.",
            )
            .recommend(format!(
                "Enable min RSSI at {recommended} dBm to force clean roams."
            )),
        );
    }

    // ── Band steering per SSID ──────────────────────────────────────
    for wlan in snapshot.wlans.iter().filter(|w| w.enabled) {
        match wlan.band_steering {
            BandSteering::Force5g => findings.push(
                Finding::new(
                    Severity::Warning,
                    MODULE,
                    format!("SSID '{}': band steering forces 5 GHz", wlan.name),
                    "Force mode blocks 2.4 GHz-only devices (many IoT devices) from \
                     connecting at all.",
                )
                .recommend("Change band steering to 'Prefer 5G'.")
                .at_ui_path(format!(
                    "Settings > WiFi > {} > Advanced > Band Steering",
                    wlan.name
                )),
            ),
            BandSteering::Off => findings.push(
                Finding::new(
                    Severity::Info,
                    MODULE,
                    format!("SSID '{}': band steering is off", wlan.name),
                    "Capable clients may camp on 2.4 GHz unnecessarily.",
                )
                .recommend("Set band steering to 'Prefer 5G'."),
            ),
            BandSteering::Prefer5g => findings.push(Finding::new(
                Severity::Good,
                MODULE,
                format!("SSID '{}': band steering set to 'Prefer 5G'", wlan.name),
                "5 GHz-capable clients are steered there; 2.4 GHz devices still work.",
            )),
        }
    }

    findings
}
