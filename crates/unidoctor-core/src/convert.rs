// ── Wire-to-domain conversion ──
//
// Lowers `unidoctor_api` response types into the domain `NetworkSnapshot`.
// This is where the wire format's documented defaults are applied:
// satisfaction -> 100, noise floor -> -100 dBm, non-numeric channels ->
// unknown. Conversion is total: any well-typed raw snapshot converts,
// including the empty one.

use chrono::DateTime;

use unidoctor_api::models::{
    ClientEntry, DeviceEntry, EventEntry, RadioConfigEntry, RadioStatsEntry, RawSnapshot,
    RogueApEntry, SettingEntry, WlanConfEntry,
};

use crate::model::{
    AccessPoint, Band, BandSteering, ChannelWidth, Event, GatewaySettings, MacAddress, RadioState,
    RogueObservation, Topology, TxPower, UplinkState, WirelessClient, WlanProfile,
};
use crate::rules::normalize_rate_mbps;
use crate::snapshot::NetworkSnapshot;

/// Lower a raw API snapshot (plus optional user topology) into the domain
/// snapshot the analyzers consume.
pub fn snapshot_from_raw(raw: RawSnapshot, topology: Topology) -> NetworkSnapshot {
    let access_points = raw
        .devices
        .iter()
        .filter(|d| is_access_point(d))
        .map(|d| convert_access_point(d, &topology))
        .collect();

    let clients = raw
        .clients
        .iter()
        .filter(|c| !c.is_wired.unwrap_or(false))
        .map(convert_client)
        .collect();

    let rogue_aps = raw.rogue_aps.iter().map(convert_rogue).collect();
    let events = raw.events.iter().map(convert_event).collect();
    let wlans = raw.wlans.iter().map(convert_wlan).collect();
    let settings = convert_settings(&raw.settings);

    NetworkSnapshot {
        access_points,
        clients,
        rogue_aps,
        events,
        wlans,
        settings,
        topology,
    }
}

// ── Device ─────────────────────────────────────────────────────────

/// Is this device an access point?
///
/// The legacy `type` field is `"uap"` for APs; newer hardware sometimes
/// reports an unknown type, so the model prefix is checked as a fallback.
fn is_access_point(device: &DeviceEntry) -> bool {
    if device.device_type == "uap" {
        return true;
    }
    device.model.as_deref().is_some_and(|m| {
        let upper = m.to_uppercase();
        upper.starts_with("UAP") || upper.starts_with("U6") || upper.starts_with("U7")
    })
}

/// Band of a radio identifier (`radio_table.radio` or `radio_table_stats.name`).
fn band_of_radio_name(name: &str) -> Option<Band> {
    match name {
        "ng" | "ra0" => Some(Band::Ghz2_4),
        "na" | "rai0" | "ra1" => Some(Band::Ghz5),
        _ => None,
    }
}

fn stats_for_band<'a>(device: &'a DeviceEntry, band: Band) -> Option<&'a RadioStatsEntry> {
    device
        .radio_table_stats
        .iter()
        .find(|s| s.channel.and_then(Band::for_channel) == Some(band))
        .or_else(|| {
            device.radio_table_stats.iter().find(|s| {
                band_of_radio_name(s.radio.as_deref().unwrap_or(s.name.as_str())) == Some(band)
            })
        })
}

fn config_for_band<'a>(device: &'a DeviceEntry, band: Band) -> Option<&'a RadioConfigEntry> {
    device
        .radio_table
        .iter()
        .find(|c| band_of_radio_name(&c.radio) == Some(band))
        .or_else(|| {
            device
                .radio_table
                .iter()
                .find(|c| c.channel.and_then(Band::for_channel) == Some(band))
        })
}

/// Clamp a raw percentage to 0-100.
fn clamp_pct(raw: Option<i64>) -> u8 {
    u8::try_from(raw.unwrap_or(0).clamp(0, 100)).unwrap_or(0)
}

/// Build the `RadioState` for one band, merging observed stats with the
/// configured radio table. Observed channel wins over configured.
fn radio_for_band(device: &DeviceEntry, band: Band) -> Option<RadioState> {
    let stats = stats_for_band(device, band);
    let config = config_for_band(device, band);
    if stats.is_none() && config.is_none() {
        return None;
    }

    // A channel outside the band's valid range is as good as unknown.
    let channel = stats
        .and_then(|s| s.channel)
        .or_else(|| config.and_then(|c| c.channel))
        .filter(|ch| Band::for_channel(*ch) == Some(band));

    let default_width = match band {
        Band::Ghz2_4 => ChannelWidth::Mhz20,
        Band::Ghz5 => ChannelWidth::Mhz40,
    };
    let width = config
        .and_then(|c| c.width_mhz)
        .and_then(ChannelWidth::from_mhz)
        .unwrap_or(default_width);

    let tx_power = TxPower::from_wire(config.and_then(|c| c.tx_power_mode.as_deref()));

    Some(RadioState {
        band,
        channel,
        width,
        tx_power,
        utilization_pct: clamp_pct(stats.and_then(|s| s.cu_total)),
        self_rx_pct: clamp_pct(stats.and_then(|s| s.cu_self_rx)),
        self_tx_pct: clamp_pct(stats.and_then(|s| s.cu_self_tx)),
        noise_floor_dbm: stats
            .and_then(|s| s.noise_floor)
            .and_then(|n| i32::try_from(n).ok())
            .unwrap_or(-100),
        satisfaction: u8::try_from(
            stats
                .and_then(|s| s.satisfaction)
                .unwrap_or(100)
                .clamp(0, 100),
        )
        .unwrap_or(100),
    })
}

fn convert_access_point(device: &DeviceEntry, topology: &Topology) -> AccessPoint {
    let mac = MacAddress::new(&device.mac);
    let uplink = device.uplink.as_ref().map(|u| UplinkState {
        wireless: u.uplink_type == "wireless",
        speed_mbps: u.speed.and_then(|s| u32::try_from(s).ok()),
        rx_errors: u.rx_errors.and_then(|e| u64::try_from(e).ok()).unwrap_or(0),
        tx_errors: u.tx_errors.and_then(|e| u64::try_from(e).ok()).unwrap_or(0),
    });

    AccessPoint {
        outdoor: topology.is_outdoor(&mac),
        radio_2g: radio_for_band(device, Band::Ghz2_4),
        radio_5g: radio_for_band(device, Band::Ghz5),
        name: device.name.clone(),
        model: device.model.clone(),
        uplink,
        mac,
    }
}

// ── Client ─────────────────────────────────────────────────────────

fn convert_client(client: &ClientEntry) -> WirelessClient {
    WirelessClient {
        mac: MacAddress::new(&client.mac),
        name: client.name.clone(),
        hostname: client.hostname.clone(),
        ap_mac: client.ap_mac.as_deref().map(MacAddress::new),
        band: client.channel.and_then(Band::for_channel),
        channel: client.channel,
        signal_dbm: client
            .rssi
            .or(client.signal)
            .and_then(|s| i32::try_from(s).ok())
            .filter(|s| *s != 0),
        tx_rate_mbps: client.tx_rate.and_then(normalize_rate_mbps),
        rx_rate_mbps: client.rx_rate.and_then(normalize_rate_mbps),
        satisfaction: u8::try_from(client.satisfaction.unwrap_or(100).clamp(0, 100)).unwrap_or(100),
    }
}

// ── Rogue AP ───────────────────────────────────────────────────────

fn convert_rogue(rogue: &RogueApEntry) -> RogueObservation {
    let band = rogue
        .channel
        .and_then(Band::for_channel)
        .or_else(|| band_of_radio_name(rogue.radio.as_deref().unwrap_or_default()));

    RogueObservation {
        bssid: rogue.bssid.as_deref().map(MacAddress::new),
        essid: rogue.essid.clone(),
        band,
        channel: rogue.channel,
        signal_dbm: rogue
            .signal
            .and_then(|s| i32::try_from(s).ok())
            .unwrap_or(-100),
        age_secs: rogue.age,
        seen_by: rogue.ap_mac.as_deref().map(MacAddress::new),
    }
}

// ── Event ──────────────────────────────────────────────────────────

fn convert_event(event: &EventEntry) -> Event {
    Event {
        timestamp: event.time.and_then(DateTime::from_timestamp_millis),
        key: event.key.clone().unwrap_or_default(),
        message: event.msg.clone().unwrap_or_default(),
        channel: event.channel,
        subsystem: event.subsystem.clone(),
        ap_mac: event.ap.as_deref().map(MacAddress::new),
    }
}

// ── WLAN ───────────────────────────────────────────────────────────

fn convert_wlan(wlan: &WlanConfEntry) -> WlanProfile {
    let band_steering = match wlan.band_steering_mode.as_deref() {
        Some("prefer_5g" | "prefer") => BandSteering::Prefer5g,
        Some("force_5g" | "force" | "steer_5g") => BandSteering::Force5g,
        _ => BandSteering::Off,
    };

    WlanProfile {
        name: wlan.name.clone(),
        enabled: wlan.enabled,
        fast_roaming: wlan.fast_roaming_enabled,
        min_rssi_enabled: wlan.min_rssi_enabled,
        min_rssi_dbm: wlan.min_rssi.and_then(|v| i32::try_from(v).ok()),
        band_steering,
    }
}

// ── Settings ───────────────────────────────────────────────────────

/// Assemble the gateway toggles from keyed settings sections. Key names
/// shifted across controller versions, so alternates are checked and the
/// flattened `extra` map is consulted where the typed field is absent.
fn convert_settings(entries: &[SettingEntry]) -> GatewaySettings {
    let extra_bool = |entry: &SettingEntry, field: &str| {
        entry.extra.get(field).and_then(serde_json::Value::as_bool)
    };

    let mut settings = GatewaySettings::default();
    for entry in entries {
        match entry.key.as_str() {
            "ips" => {
                settings.ips_mode = entry
                    .ips_mode
                    .clone()
                    .filter(|m| matches!(m.as_str(), "ids" | "ips"));
            }
            "threat_management" if settings.ips_mode.is_none() => {
                settings.ips_mode = entry
                    .extra
                    .get("mode")
                    .and_then(serde_json::Value::as_str)
                    .filter(|m| matches!(*m, "ids" | "ips"))
                    .map(str::to_owned);
            }
            "sqm" | "smart_queue" => {
                settings.smart_queues_enabled = entry
                    .sqm_enabled
                    .or_else(|| extra_bool(entry, "enabled"))
                    .unwrap_or(false)
                    || settings.smart_queues_enabled;
            }
            "dpi" => {
                settings.dpi_enabled = entry
                    .dpi_enabled
                    .or_else(|| extra_bool(entry, "enabled"))
                    .unwrap_or(false);
            }
            _ => {}
        }
    }
    settings
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn device_json(json: serde_json::Value) -> DeviceEntry {
        serde_json::from_value(json).expect("device parses")
    }

    #[test]
    fn ap_detection_by_type_and_model() {
        let by_type = device_json(serde_json::json!({ "mac": "aa:bb:cc:00:00:01", "type": "uap" }));
        assert!(is_access_point(&by_type));

        let by_model = device_json(
            serde_json::json!({ "mac": "aa:bb:cc:00:00:02", "type": "??", "model": "U6-LR" }),
        );
        assert!(is_access_point(&by_model));

        let switch =
            device_json(serde_json::json!({ "mac": "aa:bb:cc:00:00:03", "type": "usw" }));
        assert!(!is_access_point(&switch));
    }

    #[test]
    fn radio_merges_stats_and_config() {
        let device = device_json(serde_json::json!({
            "mac": "aa:bb:cc:00:00:01",
            "type": "uap",
            "radio_table": [
                { "radio": "na", "channel": 36, "ht": 80, "tx_power_mode": "medium" }
            ],
            "radio_table_stats": [
                // Observed channel differs from configured -- observed wins.
                { "name": "rai0", "channel": 44, "cu_total": 17, "noise_floor": -98 }
            ]
        }));

        let radio = radio_for_band(&device, Band::Ghz5).expect("5 GHz radio");
        assert_eq!(radio.channel, Some(44));
        assert_eq!(radio.width, ChannelWidth::Mhz80);
        assert_eq!(radio.tx_power, TxPower::Medium);
        assert_eq!(radio.utilization_pct, 17);
        assert_eq!(radio.noise_floor_dbm, -98);
    }

    #[test]
    fn radio_defaults_applied_for_missing_fields() {
        let device = device_json(serde_json::json!({
            "mac": "aa:bb:cc:00:00:01",
            "type": "uap",
            "radio_table": [ { "radio": "ng", "channel": "auto" } ]
        }));

        let radio = radio_for_band(&device, Band::Ghz2_4).expect("2.4 GHz radio");
        assert_eq!(radio.channel, None);
        assert_eq!(radio.width, ChannelWidth::Mhz20);
        assert_eq!(radio.tx_power, TxPower::Auto);
        assert_eq!(radio.noise_floor_dbm, -100);
        assert_eq!(radio.satisfaction, 100);
        assert_eq!(radio.utilization_pct, 0);
    }

    #[test]
    fn out_of_band_channel_becomes_unknown() {
        let device = device_json(serde_json::json!({
            "mac": "aa:bb:cc:00:00:01",
            "type": "uap",
            "radio_table": [ { "radio": "na", "channel": 200 } ]
        }));
        let radio = radio_for_band(&device, Band::Ghz5).expect("5 GHz radio");
        assert_eq!(radio.channel, None);
    }

    #[test]
    fn no_radio_for_absent_band() {
        let device = device_json(serde_json::json!({
            "mac": "aa:bb:cc:00:00:01",
            "type": "uap",
            "radio_table": [ { "radio": "ng", "channel": 6 } ]
        }));
        assert!(radio_for_band(&device, Band::Ghz5).is_none());
    }

    #[test]
    fn rogue_band_inference() {
        let from_channel: RogueApEntry =
            serde_json::from_value(serde_json::json!({ "channel": 157, "signal": -61 }))
                .expect("parse");
        assert_eq!(convert_rogue(&from_channel).band, Some(Band::Ghz5));

        let from_radio: RogueApEntry =
            serde_json::from_value(serde_json::json!({ "radio": "ng", "signal": -70 }))
                .expect("parse");
        assert_eq!(convert_rogue(&from_radio).band, Some(Band::Ghz2_4));
    }

    #[test]
    fn settings_read_typed_and_extra_fields() {
        let entries: Vec<SettingEntry> = serde_json::from_value(serde_json::json!([
            { "key": "ips", "ips_mode": "ips" },
            { "key": "dpi", "enabled": true },
            { "key": "smart_queue", "enabled": true }
        ]))
        .expect("parse");

        let settings = convert_settings(&entries);
        assert_eq!(settings.ips_mode.as_deref(), Some("ips"));
        assert!(settings.dpi_enabled);
        assert!(settings.smart_queues_enabled);
    }

    #[test]
    fn empty_raw_snapshot_converts_to_empty_domain() {
        let snapshot = snapshot_from_raw(RawSnapshot::default(), Topology::default());
        assert!(snapshot.access_points.is_empty());
        assert!(snapshot.clients.is_empty());
        assert!(snapshot.events.is_empty());
    }
}
