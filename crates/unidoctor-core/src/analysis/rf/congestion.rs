// ── Congestion estimator ──
//
// Counts interfering neighbors -- rogue observations plus other in-network
// APs' current radios -- for a candidate (channel, width). The planner uses
// this both to deprioritize crowded channels and to decide whether 80 MHz
// is safe.

use super::spectrum::overlaps;
use crate::model::{Band, ChannelWidth, MacAddress};
use crate::snapshot::NetworkSnapshot;

/// Number of neighbors whose occupied span overlaps the candidate
/// (channel, width) on `band`, excluding the AP being planned.
///
/// Rogue observations carry no width and are counted at 20 MHz; in-network
/// radios count at their configured width. Radios with unknown channels
/// contribute nothing.
pub fn neighbor_count(
    snapshot: &NetworkSnapshot,
    band: Band,
    channel: u16,
    width: ChannelWidth,
    exclude: &MacAddress,
) -> usize {
    let rogues = snapshot
        .rogue_aps
        .iter()
        .filter(|r| r.band == Some(band))
        .filter_map(|r| r.channel)
        .filter(|&ch| overlaps(band, channel, width, ch, ChannelWidth::Mhz20))
        .count();

    let aps = snapshot
        .access_points
        .iter()
        .filter(|ap| &ap.mac != exclude)
        .filter_map(|ap| ap.radio(band))
        .filter_map(|radio| radio.channel.map(|ch| (ch, radio.width)))
        .filter(|&(ch, w)| overlaps(band, channel, width, ch, w))
        .count();

    rogues + aps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AccessPoint, RadioState, RogueObservation, TxPower};

    fn radio(band: Band, channel: u16, width: ChannelWidth) -> RadioState {
        RadioState {
            band,
            channel: Some(channel),
            width,
            tx_power: TxPower::Auto,
            utilization_pct: 0,
            self_rx_pct: 0,
            self_tx_pct: 0,
            noise_floor_dbm: -100,
            satisfaction: 100,
        }
    }

    fn ap(mac: &str, radio_5g: Option<RadioState>) -> AccessPoint {
        AccessPoint {
            mac: MacAddress::new(mac),
            name: None,
            model: None,
            radio_2g: None,
            radio_5g,
            uplink: None,
            outdoor: false,
        }
    }

    fn rogue(band: Band, channel: u16) -> RogueObservation {
        RogueObservation {
            bssid: None,
            essid: None,
            band: Some(band),
            channel: Some(channel),
            signal_dbm: -70,
            age_secs: None,
            seen_by: None,
        }
    }

    #[test]
    fn counts_rogues_and_other_aps() {
        let snapshot = NetworkSnapshot {
            access_points: vec![
                ap(
                    "aa:bb:cc:dd:ee:01",
                    Some(radio(Band::Ghz5, 36, ChannelWidth::Mhz40)),
                ),
                ap(
                    "aa:bb:cc:dd:ee:02",
                    Some(radio(Band::Ghz5, 149, ChannelWidth::Mhz40)),
                ),
            ],
            rogue_aps: vec![rogue(Band::Ghz5, 40), rogue(Band::Ghz5, 100)],
            ..NetworkSnapshot::default()
        };

        let planning = MacAddress::new("aa:bb:cc:dd:ee:01");
        // Candidate ch36 @ 80 MHz spans [5140, 5220): hits rogue ch40 and
        // nothing else (the excluded AP's own radio doesn't count).
        let count = neighbor_count(
            &snapshot,
            Band::Ghz5,
            36,
            ChannelWidth::Mhz80,
            &planning,
        );
        assert_eq!(count, 1);

        // Candidate ch149 @ 40 hits the other AP's radio.
        let count = neighbor_count(
            &snapshot,
            Band::Ghz5,
            149,
            ChannelWidth::Mhz40,
            &planning,
        );
        assert_eq!(count, 1);
    }

    #[test]
    fn band_mismatch_does_not_count() {
        let snapshot = NetworkSnapshot {
            rogue_aps: vec![rogue(Band::Ghz2_4, 6)],
            ..NetworkSnapshot::default()
        };
        let planning = MacAddress::new("aa:bb:cc:dd:ee:01");
        assert_eq!(
            neighbor_count(&snapshot, Band::Ghz5, 36, ChannelWidth::Mhz80, &planning),
            0
        );
    }

    #[test]
    fn unknown_channels_contribute_nothing() {
        let mut unknown = radio(Band::Ghz5, 36, ChannelWidth::Mhz40);
        unknown.channel = None;
        let snapshot = NetworkSnapshot {
            access_points: vec![ap("aa:bb:cc:dd:ee:02", Some(unknown))],
            ..NetworkSnapshot::default()
        };
        let planning = MacAddress::new("aa:bb:cc:dd:ee:01");
        assert_eq!(
            neighbor_count(&snapshot, Band::Ghz5, 36, ChannelWidth::Mhz80, &planning),
            0
        );
    }
}
