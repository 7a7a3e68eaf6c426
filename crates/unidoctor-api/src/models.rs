// Legacy API response types
//
// Models for the UniFi controller's legacy JSON API. All responses are wrapped
// in the `ApiResponse<T>` envelope. Fields use `#[serde(default)]` liberally
// because the API is inconsistent about field presence across firmware
// versions; undocumented fields land in the flattened `extra` map.

use serde::{Deserialize, Deserializer, Serialize};

// ── Response Envelope ────────────────────────────────────────────────

/// Standard UniFi legacy API response envelope.
///
/// Every legacy endpoint wraps its payload:
/// ```json
/// { "meta": { "rc": "ok", "msg": "optional" }, "data": [...] }
/// ```
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub meta: Meta,
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

/// Metadata from the legacy envelope. `rc` == `"ok"` means success.
#[derive(Debug, Deserialize)]
pub struct Meta {
    pub rc: String,
    #[serde(default)]
    pub msg: Option<String>,
}

// ── Field helpers ────────────────────────────────────────────────────

/// Deserialize a channel field that may be an integer, a numeric string,
/// `"auto"`, or absent. Anything non-numeric becomes `None`.
fn de_channel<'de, D>(deserializer: D) -> Result<Option<u16>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(i64),
        Text(String),
        Other(serde_json::Value),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Num(n) => u16::try_from(n).ok().filter(|ch| *ch > 0),
        Raw::Text(s) => s.parse::<u16>().ok().filter(|ch| *ch > 0),
        Raw::Other(_) => None,
    })
}

/// Same lenient treatment for channel width (`ht`): integer or numeric string.
fn de_width<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(i64),
        Text(String),
        Other(serde_json::Value),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Num(n) => u32::try_from(n).ok(),
        Raw::Text(s) => s.parse::<u32>().ok(),
        Raw::Other(_) => None,
    })
}

// ── Device ───────────────────────────────────────────────────────────

/// Full device object from `stat/device`.
///
/// The legacy API can return 100+ fields per device. We model the ones the
/// analyzers need explicitly; everything else lands in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceEntry {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    pub mac: String,
    #[serde(rename = "type", default)]
    pub device_type: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub ip: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub adopted: bool,
    /// 0=offline, 1=online, 2=pending, 4=upgrading, 5=provisioning
    #[serde(default)]
    pub state: i32,
    #[serde(default)]
    pub uptime: Option<i64>,
    #[serde(default)]
    pub satisfaction: Option<i64>,
    #[serde(default)]
    pub num_sta: Option<i64>,
    #[serde(default)]
    pub radio_table: Vec<RadioConfigEntry>,
    #[serde(default)]
    pub radio_table_stats: Vec<RadioStatsEntry>,
    #[serde(default)]
    pub uplink: Option<UplinkEntry>,
    /// Catch-all for undocumented fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Configured radio entry from a device's `radio_table`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RadioConfigEntry {
    /// Radio identifier: `"ng"`/`"ra0"` for 2.4 GHz, `"na"`/`"rai0"`/`"ra1"` for 5 GHz.
    #[serde(default)]
    pub radio: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "de_channel")]
    pub channel: Option<u16>,
    /// Channel width in MHz (the legacy `ht` field).
    #[serde(rename = "ht", default, deserialize_with = "de_width")]
    pub width_mhz: Option<u32>,
    #[serde(default)]
    pub tx_power_mode: Option<String>,
    #[serde(default)]
    pub tx_power: Option<i64>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Observed radio statistics from a device's `radio_table_stats`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RadioStatsEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub radio: Option<String>,
    #[serde(default, deserialize_with = "de_channel")]
    pub channel: Option<u16>,
    /// Total channel utilization, 0-100.
    #[serde(default)]
    pub cu_total: Option<i64>,
    #[serde(default)]
    pub cu_self_rx: Option<i64>,
    #[serde(default)]
    pub cu_self_tx: Option<i64>,
    #[serde(default)]
    pub noise_floor: Option<i64>,
    #[serde(default)]
    pub satisfaction: Option<i64>,
    #[serde(default)]
    pub num_sta: Option<i64>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Uplink info nested inside `DeviceEntry`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UplinkEntry {
    /// `"wire"` or `"wireless"`.
    #[serde(rename = "type", default)]
    pub uplink_type: String,
    #[serde(default)]
    pub speed: Option<i64>,
    #[serde(default)]
    pub max_speed: Option<i64>,
    #[serde(default)]
    pub full_duplex: Option<bool>,
    #[serde(default)]
    pub rx_errors: Option<i64>,
    #[serde(default)]
    pub tx_errors: Option<i64>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

// ── Client (Station) ─────────────────────────────────────────────────

/// Connected client from `stat/sta`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientEntry {
    pub mac: String,
    #[serde(default)]
    pub hostname: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub oui: Option<String>,
    #[serde(default)]
    pub ap_mac: Option<String>,
    #[serde(default)]
    pub essid: Option<String>,
    #[serde(default, deserialize_with = "de_channel")]
    pub channel: Option<u16>,
    #[serde(default)]
    pub radio: Option<String>,
    #[serde(default)]
    pub rssi: Option<i64>,
    #[serde(default)]
    pub signal: Option<i64>,
    #[serde(default)]
    pub noise: Option<i64>,
    /// PHY rates in kbps (some firmware reports Mbps; normalized in core).
    #[serde(default)]
    pub tx_rate: Option<i64>,
    #[serde(default)]
    pub rx_rate: Option<i64>,
    #[serde(default)]
    pub satisfaction: Option<i64>,
    #[serde(default)]
    pub is_wired: Option<bool>,
    #[serde(default)]
    pub uptime: Option<i64>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

// ── Rogue AP ─────────────────────────────────────────────────────────

/// Neighboring (foreign) AP observation from `stat/rogueap`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RogueApEntry {
    #[serde(default)]
    pub bssid: Option<String>,
    #[serde(default)]
    pub essid: Option<String>,
    #[serde(default, deserialize_with = "de_channel")]
    pub channel: Option<u16>,
    /// Observed signal strength in dBm (negative).
    #[serde(default)]
    pub signal: Option<i64>,
    #[serde(default)]
    pub rssi: Option<i64>,
    #[serde(default)]
    pub age: Option<i64>,
    #[serde(default)]
    pub radio: Option<String>,
    /// MAC of the in-network AP that observed this neighbor.
    #[serde(default)]
    pub ap_mac: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

// ── Event ────────────────────────────────────────────────────────────

/// Event log entry from `stat/event`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventEntry {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub msg: Option<String>,
    /// Epoch milliseconds.
    #[serde(default)]
    pub time: Option<i64>,
    #[serde(default, deserialize_with = "de_channel")]
    pub channel: Option<u16>,
    #[serde(default)]
    pub subsystem: Option<String>,
    /// MAC of the AP this event relates to, if any.
    #[serde(default)]
    pub ap: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

// ── WLAN configuration ───────────────────────────────────────────────

/// SSID configuration from `rest/wlanconf`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WlanConfEntry {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default)]
    pub fast_roaming_enabled: bool,
    #[serde(default)]
    pub min_rssi_enabled: bool,
    #[serde(default)]
    pub min_rssi: Option<i64>,
    /// `"off"`, `"prefer_5g"`, or `"steer_5g"`.
    #[serde(default)]
    pub band_steering_mode: Option<String>,
    #[serde(default)]
    pub wlan_band: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

fn default_true() -> bool {
    true
}

// ── Site settings ────────────────────────────────────────────────────

/// One keyed settings section from `rest/setting`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingEntry {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub ips_mode: Option<String>,
    #[serde(default)]
    pub dpi_enabled: Option<bool>,
    #[serde(default)]
    pub sqm_enabled: Option<bool>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

// ── Health ───────────────────────────────────────────────────────────

/// Per-subsystem health summary from `stat/health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthEntry {
    #[serde(default)]
    pub subsystem: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub num_ap: Option<i64>,
    #[serde(default)]
    pub num_sta: Option<i64>,
    #[serde(default)]
    pub wan_ip: Option<String>,
    #[serde(default)]
    pub latency: Option<i64>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

// ── Snapshot ─────────────────────────────────────────────────────────

/// Everything the analyzers need, fetched in one concurrent round.
///
/// Raw wire models only -- `unidoctor-core::convert` lowers this into the
/// domain `NetworkSnapshot`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RawSnapshot {
    pub devices: Vec<DeviceEntry>,
    pub clients: Vec<ClientEntry>,
    pub rogue_aps: Vec<RogueApEntry>,
    pub events: Vec<EventEntry>,
    pub wlans: Vec<WlanConfEntry>,
    pub settings: Vec<SettingEntry>,
    pub health: Vec<HealthEntry>,
}
