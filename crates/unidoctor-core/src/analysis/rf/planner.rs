// ── Channel planner ──
//
// Produces one ChannelPlanEntry per AP per populated band, in two
// independent passes. The 2.4 GHz pass is a fixed round-robin over the
// three non-overlapping channels. The 5 GHz pass is the ordered fold:
// each AP's assignment must avoid every span already claimed earlier in
// the pass, preferring DFS spectrum when no radar has been seen and
// falling back through narrower widths before ever reusing a channel.

use super::congestion::neighbor_count;
use super::radar::radar_detected;
use super::spectrum::{self, is_dfs, overlaps};
use crate::model::{
    AccessPoint, Band, ChannelPlanEntry, ChannelWidth, RadioState, TxPower,
};
use crate::rules::RuleSet;
use crate::snapshot::NetworkSnapshot;

/// Power recommendation for a band given the AP's indoor/outdoor status.
/// Outdoor (detached placement) escalates to high regardless of band.
pub(crate) fn recommended_power(band: Band, outdoor: bool) -> TxPower {
    if outdoor {
        return TxPower::High;
    }
    match band {
        Band::Ghz2_4 => TxPower::Low,
        Band::Ghz5 => TxPower::Medium,
    }
}

/// Run both planning passes over the snapshot.
pub(crate) fn plan(rules: &RuleSet, snapshot: &NetworkSnapshot) -> Vec<ChannelPlanEntry> {
    let aps = snapshot.ordered_aps();
    let mut entries = plan_2g(&aps);
    entries.extend(plan_5g(rules, snapshot, &aps));
    entries
}

// ── 2.4 GHz pass ───────────────────────────────────────────────────

/// Fixed candidate set {1, 6, 11}, assigned round-robin in AP order.
/// Width is always 20 MHz; power is low unless the AP is outdoor.
fn plan_2g(aps: &[&AccessPoint]) -> Vec<ChannelPlanEntry> {
    aps.iter()
        .filter_map(|ap| ap.radio_2g.as_ref().map(|radio| (*ap, radio)))
        .enumerate()
        .map(|(index, (ap, radio))| {
            let channel = spectrum::VALID_2G_CHANNELS[index % spectrum::VALID_2G_CHANNELS.len()];
            let power = recommended_power(Band::Ghz2_4, ap.outdoor);
            entry(
                ap,
                radio,
                channel,
                ChannelWidth::Mhz20,
                power,
                ReasonContext::default(),
            )
        })
        .collect()
}

// ── 5 GHz pass ─────────────────────────────────────────────────────

fn plan_5g(
    rules: &RuleSet,
    snapshot: &NetworkSnapshot,
    aps: &[&AccessPoint],
) -> Vec<ChannelPlanEntry> {
    let radar = radar_detected(&snapshot.events);

    // Candidate order: DFS spectrum first (least congested by neighbors)
    // unless radar disqualifies it, then UNII-3, then UNII-1.
    let mut base_order: Vec<u16> = Vec::new();
    if !radar {
        base_order.extend_from_slice(&spectrum::DFS_CHANNELS);
    }
    base_order.extend_from_slice(&spectrum::UNII3_CHANNELS);
    base_order.extend_from_slice(&spectrum::UNII1_CHANNELS);

    let five_ghz: Vec<(&AccessPoint, &RadioState)> = aps
        .iter()
        .filter_map(|ap| ap.radio_5g.as_ref().map(|radio| (*ap, radio)))
        .collect();
    let pass_size = five_ghz.len();

    let mut assigned: Vec<(u16, ChannelWidth)> = Vec::new();
    let mut entries = Vec::with_capacity(pass_size);

    for (ap, radio) in five_ghz {
        // Candidates stably sorted by congestion at a given width; the
        // base order breaks ties, so DFS still wins among equals.
        let sorted_candidates = |width: ChannelWidth| {
            let mut candidates = base_order.clone();
            candidates.sort_by_key(|&ch| {
                neighbor_count(snapshot, Band::Ghz5, ch, width, &ap.mac)
            });
            candidates
        };

        // Width selection: 80 MHz only if some candidate is quiet enough.
        let preferred_width = if base_order.iter().any(|&ch| {
            neighbor_count(snapshot, Band::Ghz5, ch, ChannelWidth::Mhz80, &ap.mac)
                <= rules.max_neighbors_for_80mhz
        }) {
            ChannelWidth::Mhz80
        } else {
            ChannelWidth::Mhz40
        };

        // Walk widths from preferred down to 20 MHz looking for a channel
        // that avoids every span already claimed in this pass.
        let mut choice: Option<(u16, ChannelWidth)> = None;
        let mut width = preferred_width;
        loop {
            let free = sorted_candidates(width).into_iter().find(|&ch| {
                !assigned
                    .iter()
                    .any(|&(taken_ch, taken_w)| overlaps(Band::Ghz5, ch, width, taken_ch, taken_w))
            });
            if let Some(ch) = free {
                choice = Some((ch, width));
                break;
            }
            match width.narrower() {
                Some(narrower) => width = narrower,
                None => break,
            }
        }

        // Last resort: reuse the least-congested candidate at the
        // congestion-determined width, flagging the reason.
        let (channel, width, reused) = match choice {
            Some((ch, w)) => (ch, w, false),
            None => {
                let ch = sorted_candidates(preferred_width)
                    .first()
                    .copied()
                    .unwrap_or(spectrum::UNII1_CHANNELS[0]);
                (ch, preferred_width, true)
            }
        };

        assigned.push((channel, width));

        let power = recommended_power(Band::Ghz5, ap.outdoor);
        let context = ReasonContext {
            radar,
            reused_for: reused.then_some(pass_size),
        };
        entries.push(entry(ap, radio, channel, width, power, context));
    }

    entries
}

// ── Entry construction ─────────────────────────────────────────────

#[derive(Default)]
struct ReasonContext {
    radar: bool,
    /// Set when the planner had to reuse an overlapping channel; carries
    /// the number of APs competing in the pass.
    reused_for: Option<usize>,
}

fn entry(
    ap: &AccessPoint,
    radio: &RadioState,
    channel: u16,
    width: ChannelWidth,
    power: TxPower,
    context: ReasonContext,
) -> ChannelPlanEntry {
    ChannelPlanEntry {
        ap_mac: ap.mac.clone(),
        ap_name: ap.display_name().to_owned(),
        band: radio.band,
        current_channel: radio.channel,
        recommended_channel: channel,
        current_width: radio.width,
        recommended_width: width,
        current_power: radio.tx_power,
        recommended_power: power,
        reason: build_reason(radio, channel, width, power, &context),
    }
}

/// Name the triggers behind a recommendation, `"; "`-joined, or
/// `"no change needed"` when everything already matches.
fn build_reason(
    radio: &RadioState,
    channel: u16,
    width: ChannelWidth,
    power: TxPower,
    context: &ReasonContext,
) -> String {
    let mut parts: Vec<String> = Vec::new();

    if let Some(competing) = context.reused_for {
        parts.push(format!(
            "channel reuse (insufficient non-overlapping space for {competing} APs)"
        ));
    } else if radio.channel != Some(channel) {
        if context.radar && radio.channel.is_some_and(is_dfs) {
            parts.push("DFS/radar avoidance".to_owned());
        } else {
            parts.push("overlap avoidance".to_owned());
        }
    }

    if radio.width != width {
        parts.push("congestion-based width change".to_owned());
    }

    if radio.tx_power != power {
        parts.push("power adjustment".to_owned());
    }

    if parts.is_empty() {
        "no change needed".to_owned()
    } else {
        parts.join("; ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MacAddress;
    use pretty_assertions::assert_eq;

    fn radio(band: Band, channel: Option<u16>, width: ChannelWidth, power: TxPower) -> RadioState {
        RadioState {
            band,
            channel,
            width,
            tx_power: power,
            utilization_pct: 0,
            self_rx_pct: 0,
            self_tx_pct: 0,
            noise_floor_dbm: -100,
            satisfaction: 100,
        }
    }

    fn ap(mac: &str, name: &str, ch_2g: Option<u16>, ch_5g: Option<u16>) -> AccessPoint {
        AccessPoint {
            mac: MacAddress::new(mac),
            name: Some(name.to_owned()),
            model: None,
            radio_2g: ch_2g.map(|_| {
                radio(Band::Ghz2_4, ch_2g, ChannelWidth::Mhz20, TxPower::Low)
            }),
            radio_5g: ch_5g
                .map(|_| radio(Band::Ghz5, ch_5g, ChannelWidth::Mhz40, TxPower::Medium)),
            uplink: None,
            outdoor: false,
        }
    }

    fn snapshot(access_points: Vec<AccessPoint>) -> NetworkSnapshot {
        NetworkSnapshot {
            access_points,
            ..NetworkSnapshot::default()
        }
    }

    #[test]
    fn two_ghz_round_robin_over_1_6_11() {
        let snap = snapshot(vec![
            ap("aa:00:00:00:00:01", "A", Some(6), None),
            ap("aa:00:00:00:00:02", "B", Some(6), None),
            ap("aa:00:00:00:00:03", "C", Some(6), None),
            ap("aa:00:00:00:00:04", "D", Some(6), None),
        ]);
        let entries = plan(&RuleSet::default(), &snap);
        let channels: Vec<u16> = entries.iter().map(|e| e.recommended_channel).collect();
        assert_eq!(channels, vec![1, 6, 11, 1]);
        assert!(
            entries
                .iter()
                .all(|e| e.recommended_width == ChannelWidth::Mhz20)
        );
    }

    #[test]
    fn two_ghz_entry_with_no_change_needed() {
        let snap = snapshot(vec![ap("aa:00:00:00:00:01", "A", Some(1), None)]);
        let entries = plan(&RuleSet::default(), &snap);
        assert_eq!(entries[0].reason, "no change needed");
    }

    #[test]
    fn five_ghz_prefers_distinct_dfs_channels() {
        let snap = snapshot(vec![
            ap("aa:00:00:00:00:01", "A", None, Some(36)),
            ap("aa:00:00:00:00:02", "B", None, Some(36)),
            ap("aa:00:00:00:00:03", "C", None, Some(36)),
        ]);
        let entries = plan(&RuleSet::default(), &snap);
        let channels: Vec<u16> = entries.iter().map(|e| e.recommended_channel).collect();
        for ch in &channels {
            assert!(is_dfs(*ch), "expected DFS channel, got {ch}");
        }
        // Pairwise non-overlapping at the recommended widths.
        for i in 0..entries.len() {
            for j in (i + 1)..entries.len() {
                assert!(
                    !overlaps(
                        Band::Ghz5,
                        entries[i].recommended_channel,
                        entries[i].recommended_width,
                        entries[j].recommended_channel,
                        entries[j].recommended_width,
                    ),
                    "entries {i} and {j} overlap"
                );
            }
        }
    }

    #[test]
    fn radar_excludes_dfs_channels() {
        let mut snap = snapshot(vec![
            ap("aa:00:00:00:00:01", "A", None, Some(52)),
            ap("aa:00:00:00:00:02", "B", None, Some(100)),
        ]);
        snap.events.push(crate::model::Event {
            timestamp: None,
            key: "EVT_AP_DetectRadar".into(),
            message: String::new(),
            channel: Some(100),
            subsystem: None,
            ap_mac: None,
        });

        let entries = plan(&RuleSet::default(), &snap);
        for e in &entries {
            assert!(
                !is_dfs(e.recommended_channel),
                "DFS channel {} recommended despite radar",
                e.recommended_channel
            );
            assert_eq!(e.band, Band::Ghz5);
        }
        // Moving off a DFS channel under radar names the right trigger.
        assert!(entries[0].reason.contains("DFS/radar avoidance"));
    }

    #[test]
    fn width_falls_back_before_reusing() {
        // Radar restricts the pool to UNII-3 + UNII-1, where only two
        // 80 MHz blocks fit. Four APs therefore cannot all stay at 80 MHz;
        // the later ones must narrow to 40 MHz rather than reuse spectrum.
        let mut snap = snapshot(vec![
            ap("aa:00:00:00:00:01", "A", None, Some(149)),
            ap("aa:00:00:00:00:02", "B", None, Some(149)),
            ap("aa:00:00:00:00:03", "C", None, Some(149)),
            ap("aa:00:00:00:00:04", "D", None, Some(149)),
        ]);
        snap.events.push(crate::model::Event {
            timestamp: None,
            key: "radar".into(),
            message: String::new(),
            channel: None,
            subsystem: None,
            ap_mac: None,
        });

        let entries = plan(&RuleSet::default(), &snap);
        let widths: Vec<ChannelWidth> = entries.iter().map(|e| e.recommended_width).collect();
        assert_eq!(
            widths,
            vec![
                ChannelWidth::Mhz80,
                ChannelWidth::Mhz80,
                ChannelWidth::Mhz40,
                ChannelWidth::Mhz40,
            ]
        );
        assert!(entries.iter().all(|e| !e.reason.contains("channel reuse")));
        for i in 0..entries.len() {
            for j in (i + 1)..entries.len() {
                assert!(!overlaps(
                    Band::Ghz5,
                    entries[i].recommended_channel,
                    entries[i].recommended_width,
                    entries[j].recommended_channel,
                    entries[j].recommended_width,
                ));
            }
        }
    }

    #[test]
    fn reuse_is_last_resort_and_flagged() {
        // Radar + heavy congestion forces 40 MHz; only five 40 MHz slots
        // exist in UNII-3 + UNII-1, so the sixth AP must reuse spectrum.
        let mut snap = snapshot(
            (1..=6)
                .map(|i| {
                    ap(
                        &format!("aa:00:00:00:00:0{i}"),
                        &format!("AP-{i}"),
                        None,
                        Some(149),
                    )
                })
                .collect(),
        );
        snap.events.push(crate::model::Event {
            timestamp: None,
            key: "EVT_AP_DetectRadar".into(),
            message: String::new(),
            channel: None,
            subsystem: None,
            ap_mac: None,
        });
        // Enough rogue neighbors everywhere that 80 MHz is never safe.
        for ch in [36, 40, 44, 48, 149, 153, 157, 161, 165] {
            for _ in 0..4 {
                snap.rogue_aps.push(crate::model::RogueObservation {
                    bssid: None,
                    essid: None,
                    band: Some(Band::Ghz5),
                    channel: Some(ch),
                    signal_dbm: -75,
                    age_secs: None,
                    seen_by: None,
                });
            }
        }

        let entries = plan(&RuleSet::default(), &snap);
        assert_eq!(entries.len(), 6);
        let reused: Vec<&ChannelPlanEntry> = entries
            .iter()
            .filter(|e| e.reason.contains("channel reuse"))
            .collect();
        assert_eq!(reused.len(), 1, "exactly one AP should reuse spectrum");
        assert!(reused[0].reason.contains("6 APs"));
    }

    #[test]
    fn outdoor_ap_gets_high_power_on_both_bands() {
        let mut shed = ap("aa:00:00:00:00:01", "Shed", Some(6), Some(36));
        shed.outdoor = true;
        let snap = snapshot(vec![shed]);

        let entries = plan(&RuleSet::default(), &snap);
        assert_eq!(entries.len(), 2);
        for e in &entries {
            assert_eq!(e.recommended_power, TxPower::High);
        }
    }

    #[test]
    fn unknown_current_channel_reported_as_unknown() {
        let snap = snapshot(vec![ap("aa:00:00:00:00:01", "A", None, None)
            .tap_set_5g_unknown()]);
        let entries = plan(&RuleSet::default(), &snap);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].current_channel, None);
        assert_ne!(entries[0].reason, "no change needed");
    }

    #[test]
    fn plan_is_deterministic() {
        let build = || {
            snapshot(vec![
                ap("aa:00:00:00:00:03", "C", Some(3), Some(36)),
                ap("aa:00:00:00:00:01", "A", Some(6), Some(36)),
                ap("aa:00:00:00:00:02", "B", Some(11), Some(149)),
            ])
        };
        let first = plan(&RuleSet::default(), &build());
        let second = plan(&RuleSet::default(), &build());
        assert_eq!(first, second);
        // AP order follows ascending MAC regardless of input order.
        let names: Vec<&str> = first.iter().map(|e| e.ap_name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C", "A", "B", "C"]);
    }

    // Small helper for the unknown-channel case.
    trait TapUnknown {
        fn tap_set_5g_unknown(self) -> Self;
    }

    impl TapUnknown for AccessPoint {
        fn tap_set_5g_unknown(mut self) -> Self {
            self.radio_5g = Some(radio(
                Band::Ghz5,
                None,
                ChannelWidth::Mhz40,
                TxPower::Auto,
            ));
            self
        }
    }
}
