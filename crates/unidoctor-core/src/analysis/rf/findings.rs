// ── RF finding generator ──
//
// Per-radio threshold checks plus the two snapshot-level checks
// (co-channel overlap between APs, co-located foreign APs). Every check
// that passes cleanly still emits a `good` finding -- the report promises
// positive affirmation, not just problems.
//
// Checks are independent of each other; only the output order is fixed
// (per-AP checks in AP order, then overlap pairs, then interference).

use super::planner::recommended_power;
use super::spectrum::{self, overlaps};
use super::MODULE;
use crate::model::{
    AccessPoint, Band, BarrierType, Finding, RadioState, Severity, TopologyLink,
};
use crate::rules::RuleSet;
use crate::snapshot::NetworkSnapshot;

pub(crate) fn generate(rules: &RuleSet, snapshot: &NetworkSnapshot) -> Vec<Finding> {
    let aps = snapshot.ordered_aps();
    let mut findings = Vec::new();

    // An empty snapshot yields empty findings, not a report about nothing.
    if aps.is_empty() {
        return findings;
    }

    for ap in &aps {
        for band in [Band::Ghz2_4, Band::Ghz5] {
            let Some(radio) = ap.radio(band) else {
                continue;
            };
            if band == Band::Ghz2_4 {
                check_channel_validity(&mut findings, ap, radio);
            }
            check_utilization(rules, &mut findings, ap, radio);
            check_noise_floor(rules, &mut findings, ap, radio);
            check_power_fit(&mut findings, ap, radio);
        }
    }

    for band in [Band::Ghz2_4, Band::Ghz5] {
        check_co_channel_overlap(rules, &mut findings, snapshot, &aps, band);
    }

    check_colocated_interference(rules, &mut findings, snapshot);

    findings
}

// ── Per-radio checks ───────────────────────────────────────────────

/// 2.4 GHz only: anything outside {1, 6, 11} overlaps a neighbor channel.
/// Radios with unknown channels are skipped entirely.
fn check_channel_validity(findings: &mut Vec<Finding>, ap: &AccessPoint, radio: &RadioState) {
    let Some(channel) = radio.channel else {
        return;
    };
    let name = ap.display_name();

    if spectrum::is_valid_2g(channel) {
        findings.push(Finding::new(
            Severity::Good,
            MODULE,
            format!("{name}: 2.4 GHz on standard channel {channel}"),
            "Using one of the three non-overlapping 2.4 GHz channels.",
        ));
    } else {
        findings.push(
            Finding::new(
                Severity::Warning,
                MODULE,
                format!("{name}: Non-standard 2.4 GHz channel {channel}"),
                format!(
                    "Channel {channel} is not one of the three non-overlapping channels. \
                     Non-standard channels overlap their neighbors and raise interference \
                     for everyone nearby."
                ),
            )
            .recommend("Change to channel 1, 6, or 11.")
            .at_ui_path(format!(
                "Devices > {name} > Settings > Radios > 2.4 GHz > Channel"
            )),
        );
    }
}

fn check_utilization(
    rules: &RuleSet,
    findings: &mut Vec<Finding>,
    ap: &AccessPoint,
    radio: &RadioState,
) {
    let name = ap.display_name();
    let band = radio.band;
    let cu = radio.utilization_pct;

    if cu > rules.channel_util_warning_pct {
        findings.push(
            Finding::new(
                Severity::Warning,
                MODULE,
                format!("{name}: {band} channel utilization at {cu}%"),
                format!(
                    "Utilization above {}% means congested airtime; clients see delays \
                     and retransmissions.",
                    rules.channel_util_warning_pct
                ),
            )
            .recommend(
                "Consider changing channels, reducing channel width, or lowering TX power \
                 to reduce self-interference.",
            ),
        );
    } else {
        findings.push(Finding::new(
            Severity::Good,
            MODULE,
            format!("{name}: {band} channel utilization healthy ({cu}%)"),
            "Airtime is not congested.",
        ));
    }
}

fn check_noise_floor(
    rules: &RuleSet,
    findings: &mut Vec<Finding>,
    ap: &AccessPoint,
    radio: &RadioState,
) {
    let name = ap.display_name();
    let band = radio.band;
    let nf = radio.noise_floor_dbm;

    if nf > rules.noise_floor_warning_dbm {
        findings.push(
            Finding::new(
                Severity::Warning,
                MODULE,
                format!("{name}: {band} noise floor is {nf} dBm"),
                format!(
                    "A noise floor above {} dBm indicates RF interference from non-WiFi \
                     sources (microwaves, Bluetooth, baby monitors).",
                    rules.noise_floor_warning_dbm
                ),
            )
            .recommend("Identify and relocate interference sources; consider changing channels."),
        );
    } else {
        findings.push(Finding::new(
            Severity::Good,
            MODULE,
            format!("{name}: {band} noise floor clean ({nf} dBm)"),
            "No significant non-WiFi interference.",
        ));
    }
}

/// Current power mode against the indoor/outdoor recommendation.
fn check_power_fit(findings: &mut Vec<Finding>, ap: &AccessPoint, radio: &RadioState) {
    let name = ap.display_name();
    let band = radio.band;
    let expected = recommended_power(band, ap.outdoor);

    if radio.tx_power == expected {
        findings.push(Finding::new(
            Severity::Good,
            MODULE,
            format!("{name}: {band} transmit power configured correctly ({expected})"),
            "Power matches the placement recommendation.",
        ));
    } else {
        let placement = if ap.outdoor { "outdoor" } else { "indoor" };
        findings.push(
            Finding::new(
                Severity::Info,
                MODULE,
                format!(
                    "{name}: {band} transmit power is {} (recommended: {expected})",
                    radio.tx_power
                ),
                format!("For an {placement} AP, {expected} power gives the best cell shape."),
            )
            .recommend(format!("Set {band} TX power to {expected}."))
            .at_ui_path(format!(
                "Devices > {name} > Settings > Radios > {band} > Transmit Power"
            )),
        );
    }
}

// ── Snapshot-level checks ──────────────────────────────────────────

/// Does topology evidence make this overlap critical?
///
/// A wall or open-air barrier, or a short link, means strong coupling.
/// Absence of topology data never upgrades severity beyond warning.
fn strong_coupling(rules: &RuleSet, link: &TopologyLink) -> bool {
    matches!(link.barrier, BarrierType::Wall | BarrierType::OpenAir)
        || link.distance_ft <= rules.short_range_link_ft
}

fn check_co_channel_overlap(
    rules: &RuleSet,
    findings: &mut Vec<Finding>,
    snapshot: &NetworkSnapshot,
    aps: &[&AccessPoint],
    band: Band,
) {
    let radios: Vec<(&AccessPoint, u16, &RadioState)> = aps
        .iter()
        .filter_map(|ap| {
            ap.radio(band)
                .and_then(|r| r.channel.map(|ch| (*ap, ch, r)))
        })
        .collect();

    let mut any_overlap = false;
    for i in 0..radios.len() {
        for j in (i + 1)..radios.len() {
            let (ap_a, ch_a, radio_a) = radios[i];
            let (ap_b, ch_b, radio_b) = radios[j];
            if !overlaps(band, ch_a, radio_a.width, ch_b, radio_b.width) {
                continue;
            }
            any_overlap = true;

            let link = snapshot.topology.link_between(&ap_a.mac, &ap_b.mac);
            let severity = match link {
                Some(l) if strong_coupling(rules, l) => Severity::Critical,
                _ => Severity::Warning,
            };

            let (name_a, name_b) = (ap_a.display_name(), ap_b.display_name());
            let coupling_note = match link {
                Some(l) => format!(
                    "The topology shows them {:.0} ft apart through {}.",
                    l.distance_ft,
                    barrier_label(l.barrier)
                ),
                None => "No topology data is available for this pair.".to_owned(),
            };

            findings.push(
                Finding::new(
                    severity,
                    MODULE,
                    format!(
                        "{band} channel overlap: {name_a} (ch{ch_a}/{}) <-> {name_b} (ch{ch_b}/{})",
                        radio_a.width, radio_b.width
                    ),
                    format!(
                        "These radios occupy intersecting frequency spans, so they contend \
                         for the same airtime. {coupling_note}"
                    ),
                )
                .recommend(
                    "Assign non-overlapping channels (see the channel plan) or reduce \
                     channel width.",
                ),
            );
        }
    }

    if !any_overlap && radios.len() > 1 {
        findings.push(Finding::new(
            Severity::Good,
            MODULE,
            format!("No overlapping {band} channels between APs"),
            format!("No co-channel interference between your APs on {band}."),
        ));
    }
}

fn barrier_label(barrier: BarrierType) -> &'static str {
    match barrier {
        BarrierType::Wall => "a wall",
        BarrierType::FloorCeiling => "a floor/ceiling",
        BarrierType::Outdoor => "an outdoor path",
        BarrierType::OpenAir => "open air",
    }
}

/// A rogue AP heard very loudly is physically co-located and will contend
/// regardless of our channel choices.
fn check_colocated_interference(
    rules: &RuleSet,
    findings: &mut Vec<Finding>,
    snapshot: &NetworkSnapshot,
) {
    let mut any_close = false;
    for rogue in &snapshot.rogue_aps {
        if rogue.signal_dbm <= rules.colocated_rogue_signal_dbm {
            continue;
        }
        any_close = true;

        let essid = rogue.essid.as_deref().filter(|e| !e.is_empty());
        let label = match (essid, &rogue.bssid) {
            (Some(essid), _) => essid.to_owned(),
            (None, Some(bssid)) => bssid.to_string(),
            (None, None) => "<hidden>".to_owned(),
        };
        let seen_by = rogue
            .seen_by
            .as_ref()
            .map_or_else(|| "an AP".to_owned(), |mac| snapshot.ap_name(mac));

        findings.push(
            Finding::new(
                Severity::Warning,
                MODULE,
                format!(
                    "Co-located foreign AP '{label}' at {} dBm",
                    rogue.signal_dbm
                ),
                format!(
                    "{seen_by} hears this neighbor above {} dBm, which means it is \
                     physically very close and contends for the same airtime.",
                    rules.colocated_rogue_signal_dbm
                ),
            )
            .recommend(
                "If the device is yours, wire it or move it. Otherwise plan channels \
                 away from its spectrum.",
            ),
        );
    }

    if !any_close {
        findings.push(Finding::new(
            Severity::Good,
            MODULE,
            "No co-located foreign APs detected",
            "No neighboring network is close enough to contend directly.",
        ));
    }
}
