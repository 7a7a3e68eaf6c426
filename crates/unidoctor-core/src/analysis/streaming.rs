// ── Streaming device analysis ──
//
// Classifies wireless clients as streaming devices (by vendor OUI or
// hostname keyword) and checks each one for the conditions that cause
// buffering: parked on 2.4 GHz, weak signal, or a poor PHY rate.

use crate::model::{Band, Finding, Severity, WirelessClient};
use crate::rules::RuleSet;
use crate::snapshot::NetworkSnapshot;

pub const MODULE: &str = "streaming-analysis";

/// Vendor OUI prefixes (lowercase, colon-separated) for common streaming
/// hardware. Deliberately partial: hostname keywords catch the rest.
const STREAMING_OUIS: &[(&str, &str)] = &[
    // Amazon / Fire TV
    ("f0:d2:f1", "Amazon"),
    ("74:c2:46", "Amazon"),
    ("a0:02:dc", "Amazon"),
    ("fc:65:de", "Amazon"),
    // Apple TV
    ("d0:03:4b", "Apple"),
    ("68:db:ca", "Apple"),
    ("c8:69:cd", "Apple"),
    // Roku
    ("d8:31:34", "Roku"),
    ("b0:a7:37", "Roku"),
    ("dc:3a:5e", "Roku"),
    // Google Chromecast
    ("f4:f5:d8", "Google"),
    ("54:60:09", "Google"),
    // Samsung / LG smart TVs
    ("8c:79:f5", "Samsung"),
    ("f8:04:2e", "Samsung"),
    ("a8:23:fe", "LG"),
    // Sonos
    ("b8:e9:37", "Sonos"),
    ("5c:aa:fd", "Sonos"),
];

const STREAMING_KEYWORDS: &[&str] = &[
    "firetv", "fire-tv", "firestick", "roku", "appletv", "apple-tv", "chromecast", "smarttv",
    "smart-tv", "shield", "sonos", "playstation", "xbox", "tivo",
];

/// Vendor name if this client looks like a streaming device.
fn classify(client: &WirelessClient) -> Option<&'static str> {
    let oui = client.mac.oui().to_owned();
    if let Some((_, vendor)) = STREAMING_OUIS.iter().find(|(prefix, _)| *prefix == oui) {
        return Some(vendor);
    }

    let hostname = client
        .hostname
        .as_deref()
        .or(client.name.as_deref())
        .unwrap_or_default()
        .to_ascii_lowercase();
    STREAMING_KEYWORDS
        .iter()
        .find(|kw| hostname.contains(*kw))
        .map(|_| "streaming device")
}

pub fn analyze(rules: &RuleSet, snapshot: &NetworkSnapshot) -> Vec<Finding> {
    let mut findings = Vec::new();

    for client in &snapshot.clients {
        let Some(vendor) = classify(client) else {
            continue;
        };
        let name = client.display_name();

        // Weak signal trumps everything else for streaming.
        if let Some(rssi) = client.signal_dbm.filter(|r| *r < rules.sticky_client_rssi_dbm) {
            findings.push(
                Finding::new(
                    Severity::Critical,
                    MODULE,
                    format!("Streaming device {name} has weak signal ({rssi} dBm)"),
                    format!(
                        "{vendor} device with signal below {} dBm -- expect constant \
                         buffering.",
                        rules.sticky_client_rssi_dbm
                    ),
                )
                .recommend("Move the device or AP closer, or wire the device."),
            );
            continue;
        }

        if let Some(rate) = client
            .min_phy_rate_mbps()
            .filter(|r| *r < rules.poor_phy_rate_mbps)
        {
            findings.push(
                Finding::new(
                    Severity::Warning,
                    MODULE,
                    format!("Streaming device {name} at only {rate} Mbps PHY"),
                    format!(
                        "Rates below {} Mbps leave no headroom for high-bitrate video.",
                        rules.poor_phy_rate_mbps
                    ),
                )
                .recommend("Check distance and interference for this device."),
            );
            continue;
        }

        if client.band == Some(Band::Ghz2_4) {
            findings.push(
                Finding::new(
                    Severity::Warning,
                    MODULE,
                    format!("Streaming device {name} is on 2.4 GHz"),
                    format!(
                        "{vendor} device parked on the congested band; 2.4 GHz has \
                         neither the airtime nor the rates for reliable streaming."
                    ),
                )
                .recommend("Steer it to 5 GHz (band steering, or a 5 GHz-only SSID)."),
            );
            continue;
        }

        findings.push(Finding::new(
            Severity::Info,
            MODULE,
            format!("Streaming device: {name} ({vendor})"),
            format!(
                "On {} with good signal and rate.",
                client.band.map_or("unknown band", Band::label)
            ),
        ));
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MacAddress;

    fn client(mac: &str, hostname: &str, band: Band, rssi: i32, rate: u32) -> WirelessClient {
        WirelessClient {
            mac: MacAddress::new(mac),
            name: None,
            hostname: Some(hostname.into()),
            ap_mac: None,
            band: Some(band),
            channel: None,
            signal_dbm: Some(rssi),
            tx_rate_mbps: Some(rate),
            rx_rate_mbps: Some(rate),
            satisfaction: 90,
        }
    }

    fn snapshot(clients: Vec<WirelessClient>) -> NetworkSnapshot {
        NetworkSnapshot {
            clients,
            ..NetworkSnapshot::default()
        }
    }

    #[test]
    fn detects_by_oui() {
        let snap = snapshot(vec![client(
            "F0:D2:F1:AA:BB:CC",
            "device",
            Band::Ghz5,
            -55,
            400,
        )]);
        let findings = analyze(&RuleSet::default(), &snap);
        assert!(findings.iter().any(|f| f.severity == Severity::Info
            && f.title.contains("Amazon")));
    }

    #[test]
    fn detects_by_hostname_keyword() {
        let snap = snapshot(vec![client(
            "00:11:22:33:44:55",
            "living-room-roku",
            Band::Ghz5,
            -50,
            400,
        )]);
        let findings = analyze(&RuleSet::default(), &snap);
        assert_eq!(findings.len(), 1);
    }

    #[test]
    fn weak_signal_is_critical() {
        let snap = snapshot(vec![client(
            "F0:D2:F1:AA:BB:CC",
            "fire-tv",
            Band::Ghz5,
            -80,
            50,
        )]);
        let findings = analyze(&RuleSet::default(), &snap);
        assert!(findings.iter().any(|f| f.severity == Severity::Critical
            && f.title.contains("weak signal")));
    }

    #[test]
    fn parked_on_2g_warns() {
        let snap = snapshot(vec![client(
            "F0:D2:F1:AA:BB:CC",
            "fire-tv",
            Band::Ghz2_4,
            -50,
            150,
        )]);
        let findings = analyze(&RuleSet::default(), &snap);
        assert!(findings.iter().any(|f| f.severity == Severity::Warning
            && f.title.contains("2.4 GHz")));
    }

    #[test]
    fn non_streaming_clients_ignored() {
        let snap = snapshot(vec![client(
            "00:11:22:33:44:55",
            "work-laptop",
            Band::Ghz5,
            -50,
            400,
        )]);
        assert!(analyze(&RuleSet::default(), &snap).is_empty());
    }
}
