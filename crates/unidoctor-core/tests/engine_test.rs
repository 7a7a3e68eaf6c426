// Engine-level tests for the RF analyzer: the acceptance scenarios and
// the cross-cutting properties (determinism, radar exclusion, 2.4 GHz
// closure, bounded no-conflict planning).

use unidoctor_core::analysis::rf::spectrum::overlaps;
use unidoctor_core::model::{
    AccessPoint, Band, BarrierType, ChannelWidth, Event, FloorLevel, MacAddress, Placement,
    RadioState, RogueObservation, Severity, Topology, TopologyLink, TxPower,
};
use unidoctor_core::{BackhaulType, NetworkSnapshot, RfAnalyzer, RuleSet};

// ── Builders ────────────────────────────────────────────────────────

fn radio(band: Band, channel: Option<u16>, width: ChannelWidth) -> RadioState {
    RadioState {
        band,
        channel,
        width,
        tx_power: TxPower::Auto,
        utilization_pct: 10,
        self_rx_pct: 2,
        self_tx_pct: 3,
        noise_floor_dbm: -96,
        satisfaction: 95,
    }
}

fn make_ap(mac: &str, name: &str, ch_2g: Option<u16>, ch_5g: Option<u16>) -> AccessPoint {
    AccessPoint {
        mac: MacAddress::new(mac),
        name: Some(name.to_owned()),
        model: Some("U6-LR".into()),
        radio_2g: ch_2g.map(|ch| radio(Band::Ghz2_4, Some(ch), ChannelWidth::Mhz20)),
        radio_5g: ch_5g.map(|ch| radio(Band::Ghz5, Some(ch), ChannelWidth::Mhz40)),
        uplink: None,
        outdoor: false,
    }
}

fn radar_event() -> Event {
    Event {
        timestamp: None,
        key: "EVT_AP_DetectRadar".into(),
        message: "Radar detected on channel 100".into(),
        channel: Some(100),
        subsystem: Some("wlan".into()),
        ap_mac: None,
    }
}

fn rogue(channel: u16, signal_dbm: i32) -> RogueObservation {
    RogueObservation {
        bssid: None,
        essid: Some("Neighbor".into()),
        band: Band::for_channel(channel),
        channel: Some(channel),
        signal_dbm,
        age_secs: Some(10),
        seen_by: None,
    }
}

fn analyze(snapshot: &NetworkSnapshot) -> (Vec<unidoctor_core::Finding>, Vec<unidoctor_core::ChannelPlanEntry>) {
    RfAnalyzer::new(RuleSet::default()).analyze(snapshot)
}

// ── Scenario A/B: overlap severity and topology evidence ────────────

fn two_aps_on_channel_6() -> NetworkSnapshot {
    NetworkSnapshot {
        access_points: vec![
            make_ap("aa:00:00:00:00:01", "Living Room", Some(6), None),
            make_ap("aa:00:00:00:00:02", "Office", Some(6), None),
        ],
        ..NetworkSnapshot::default()
    }
}

#[test]
fn scenario_a_short_wall_link_escalates_overlap_to_critical() {
    let mut snapshot = two_aps_on_channel_6();
    snapshot.topology = Topology {
        placements: Vec::new(),
        links: vec![TopologyLink {
            ap1: MacAddress::new("aa:00:00:00:00:01"),
            ap2: MacAddress::new("aa:00:00:00:00:02"),
            distance_ft: 40.0,
            barrier: BarrierType::Wall,
        }],
    };

    let (findings, _) = analyze(&snapshot);
    let overlap: Vec<_> = findings
        .iter()
        .filter(|f| f.title.contains("channel overlap"))
        .collect();
    assert_eq!(overlap.len(), 1);
    assert_eq!(overlap[0].severity, Severity::Critical);
    assert!(overlap[0].title.contains("Living Room"));
    assert!(overlap[0].title.contains("Office"));
}

#[test]
fn scenario_b_no_topology_caps_overlap_at_warning() {
    let snapshot = two_aps_on_channel_6();

    let (findings, _) = analyze(&snapshot);
    let overlap: Vec<_> = findings
        .iter()
        .filter(|f| f.title.contains("channel overlap"))
        .collect();
    assert_eq!(overlap.len(), 1);
    assert_eq!(overlap[0].severity, Severity::Warning);
}

#[test]
fn weak_coupling_link_stays_warning() {
    let mut snapshot = two_aps_on_channel_6();
    snapshot.topology.links.push(TopologyLink {
        ap1: MacAddress::new("aa:00:00:00:00:01"),
        ap2: MacAddress::new("aa:00:00:00:00:02"),
        distance_ft: 65.0,
        barrier: BarrierType::FloorCeiling,
    });

    let (findings, _) = analyze(&snapshot);
    let overlap: Vec<_> = findings
        .iter()
        .filter(|f| f.title.contains("channel overlap"))
        .collect();
    assert_eq!(overlap[0].severity, Severity::Warning);
}

// ── Scenario C: empty snapshot ──────────────────────────────────────

#[test]
fn scenario_c_empty_snapshot_yields_empty_outputs() {
    let (findings, plan) = analyze(&NetworkSnapshot::default());
    assert!(findings.is_empty());
    assert!(plan.is_empty());
}

// ── Scenario D: DFS preference and width fallback ───────────────────

#[test]
fn scenario_d_five_aps_get_distinct_dfs_channels() {
    let snapshot = NetworkSnapshot {
        access_points: (1..=5)
            .map(|i| {
                make_ap(
                    &format!("aa:00:00:00:00:0{i}"),
                    &format!("AP-{i}"),
                    None,
                    Some(36),
                )
            })
            .collect(),
        ..NetworkSnapshot::default()
    };

    let (_, plan) = analyze(&snapshot);
    assert_eq!(plan.len(), 5);

    // First three get distinct channels from the DFS pool.
    for entry in plan.iter().take(3) {
        assert!(
            (52..=144).contains(&entry.recommended_channel),
            "expected DFS channel, got {}",
            entry.recommended_channel
        );
    }

    // The whole plan is pairwise non-overlapping at recommended widths.
    for i in 0..plan.len() {
        for j in (i + 1)..plan.len() {
            assert!(
                !overlaps(
                    Band::Ghz5,
                    plan[i].recommended_channel,
                    plan[i].recommended_width,
                    plan[j].recommended_channel,
                    plan[j].recommended_width,
                ),
                "plan entries {i} and {j} overlap"
            );
        }
    }
}

// ── Radar exclusion ─────────────────────────────────────────────────

#[test]
fn radar_event_excludes_every_dfs_channel() {
    let snapshot = NetworkSnapshot {
        access_points: (1..=6)
            .map(|i| {
                make_ap(
                    &format!("aa:00:00:00:00:0{i}"),
                    &format!("AP-{i}"),
                    None,
                    Some(100),
                )
            })
            .collect(),
        events: vec![radar_event()],
        ..NetworkSnapshot::default()
    };

    let (_, plan) = analyze(&snapshot);
    for entry in &plan {
        assert!(
            !(52..=144).contains(&entry.recommended_channel),
            "DFS channel {} recommended despite radar",
            entry.recommended_channel
        );
    }
}

// ── 2.4 GHz closure ─────────────────────────────────────────────────

#[test]
fn every_2g_recommendation_is_1_6_or_11() {
    let snapshot = NetworkSnapshot {
        access_points: vec![
            make_ap("aa:00:00:00:00:01", "A", Some(3), None),
            make_ap("aa:00:00:00:00:02", "B", Some(13), None),
            make_ap("aa:00:00:00:00:03", "C", None, None),
            make_ap("aa:00:00:00:00:04", "D", Some(6), Some(44)),
        ],
        rogue_aps: vec![rogue(4, -60), rogue(9, -55)],
        ..NetworkSnapshot::default()
    };

    let (_, plan) = analyze(&snapshot);
    for entry in plan.iter().filter(|e| e.band == Band::Ghz2_4) {
        assert!(
            [1, 6, 11].contains(&entry.recommended_channel),
            "2.4 GHz plan recommended channel {}",
            entry.recommended_channel
        );
        assert_eq!(entry.recommended_width, ChannelWidth::Mhz20);
    }
}

// ── Bounded no-conflict property ────────────────────────────────────

#[test]
fn three_aps_without_radar_get_pairwise_non_overlapping_channels() {
    let snapshot = NetworkSnapshot {
        access_points: vec![
            make_ap("aa:00:00:00:00:01", "A", None, Some(36)),
            make_ap("aa:00:00:00:00:02", "B", None, Some(36)),
            make_ap("aa:00:00:00:00:03", "C", None, Some(36)),
        ],
        ..NetworkSnapshot::default()
    };

    let (_, plan) = analyze(&snapshot);
    assert_eq!(plan.len(), 3);
    for i in 0..plan.len() {
        for j in (i + 1)..plan.len() {
            assert!(!overlaps(
                Band::Ghz5,
                plan[i].recommended_channel,
                plan[i].recommended_width,
                plan[j].recommended_channel,
                plan[j].recommended_width,
            ));
        }
    }
}

// ── Congestion-driven width selection ───────────────────────────────

#[test]
fn crowded_spectrum_forces_40mhz_widths() {
    let mut snapshot = NetworkSnapshot {
        access_points: vec![make_ap("aa:00:00:00:00:01", "A", None, Some(36))],
        ..NetworkSnapshot::default()
    };
    // Four rogues on every candidate channel: no 80 MHz block is quiet.
    for ch in [
        52, 56, 60, 64, 100, 104, 108, 112, 116, 120, 124, 128, 132, 136, 140, 144, 149, 153,
        157, 161, 165, 36, 40, 44, 48,
    ] {
        for _ in 0..4 {
            snapshot.rogue_aps.push(rogue(ch, -70));
        }
    }

    let (_, plan) = analyze(&snapshot);
    assert_eq!(plan[0].recommended_width, ChannelWidth::Mhz40);
}

// ── Outdoor power ───────────────────────────────────────────────────

#[test]
fn detached_placement_always_gets_high_power_on_5ghz() {
    let mut snapshot = NetworkSnapshot {
        access_points: vec![
            make_ap("aa:00:00:00:00:01", "Shed", Some(11), Some(149)),
            make_ap("aa:00:00:00:00:02", "Hall", Some(1), Some(36)),
        ],
        ..NetworkSnapshot::default()
    };
    snapshot.topology.placements.push(Placement {
        mac: MacAddress::new("aa:00:00:00:00:01"),
        name: "Shed".into(),
        floor: FloorLevel::Detached,
        location: "back garden".into(),
        backhaul: BackhaulType::Wired,
    });
    // The outdoor flag is derived at conversion; mirror that here.
    snapshot.access_points[0].outdoor = true;

    let (_, plan) = analyze(&snapshot);
    let shed_5g = plan
        .iter()
        .find(|e| e.ap_name == "Shed" && e.band == Band::Ghz5)
        .expect("Shed 5 GHz entry");
    assert_eq!(shed_5g.recommended_power, TxPower::High);

    let hall_5g = plan
        .iter()
        .find(|e| e.ap_name == "Hall" && e.band == Band::Ghz5)
        .expect("Hall 5 GHz entry");
    assert_eq!(hall_5g.recommended_power, TxPower::Medium);
}

// ── Determinism ─────────────────────────────────────────────────────

#[test]
fn identical_input_produces_byte_identical_output() {
    let build = || NetworkSnapshot {
        access_points: vec![
            make_ap("aa:00:00:00:00:03", "C", Some(3), Some(36)),
            make_ap("aa:00:00:00:00:01", "A", Some(6), Some(149)),
            make_ap("aa:00:00:00:00:02", "B", Some(11), Some(36)),
        ],
        rogue_aps: vec![rogue(44, -61), rogue(6, -48)],
        events: vec![radar_event()],
        ..NetworkSnapshot::default()
    };

    let (findings_a, plan_a) = analyze(&build());
    let (findings_b, plan_b) = analyze(&build());

    assert_eq!(plan_a, plan_b);
    let json_a = serde_json::to_string(&findings_a).expect("serialize");
    let json_b = serde_json::to_string(&findings_b).expect("serialize");
    assert_eq!(json_a, json_b);
}

// ── Per-(AP, band) uniqueness ───────────────────────────────────────

#[test]
fn at_most_one_plan_entry_per_ap_band() {
    let snapshot = NetworkSnapshot {
        access_points: vec![
            make_ap("aa:00:00:00:00:01", "A", Some(1), Some(36)),
            make_ap("aa:00:00:00:00:02", "B", Some(6), None),
            make_ap("aa:00:00:00:00:03", "C", None, Some(149)),
        ],
        ..NetworkSnapshot::default()
    };

    let (_, plan) = analyze(&snapshot);
    let mut seen = std::collections::BTreeSet::new();
    for entry in &plan {
        assert!(
            seen.insert((entry.ap_mac.to_string(), entry.band.label())),
            "duplicate entry for {} on {}",
            entry.ap_mac,
            entry.band
        );
    }
    assert_eq!(plan.len(), 4);
}
