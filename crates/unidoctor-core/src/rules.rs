// ── Analysis thresholds ──
//
// Community-consensus best practices encoded as one immutable value.
// Constructed once and handed to the analyzers; there is no process-wide
// threshold state, so tests can run the engine with varied rules.

/// Thresholds used across the analyzers. `RuleSet::default()` encodes the
/// r/Ubiquiti-consensus values; callers may override any field.
#[derive(Debug, Clone)]
pub struct RuleSet {
    // ── RF ──────────────────────────────────────────────────────────
    /// Channel utilization above this (%) is congested.
    pub channel_util_warning_pct: u8,
    /// Noise floor above this (dBm) indicates non-WiFi interference.
    pub noise_floor_warning_dbm: i32,
    /// 80 MHz width is only safe with at most this many overlapping neighbors.
    pub max_neighbors_for_80mhz: usize,
    /// A rogue AP heard above this (dBm) is physically co-located.
    pub colocated_rogue_signal_dbm: i32,
    /// Links at or under this distance (ft) couple strongly enough to make
    /// channel overlap critical.
    pub short_range_link_ft: f64,

    // ── Roaming ─────────────────────────────────────────────────────
    /// Clients below this (dBm) should have roamed already.
    pub sticky_client_rssi_dbm: i32,
    /// Min-RSSI recommendation for dense AP deployments.
    pub min_rssi_tight_dbm: i32,
    /// Min-RSSI recommendation for sparse deployments.
    pub min_rssi_loose_dbm: i32,
    /// At or above this many APs, recommend the tight min-RSSI value.
    pub dense_site_ap_count: usize,

    // ── Throughput ──────────────────────────────────────────────────
    /// Expected wired uplink speed (Mbps).
    pub expected_uplink_speed_mbps: u32,
    /// Uplink error count above which the cable is suspect.
    pub uplink_error_threshold: u64,

    // ── Streaming ───────────────────────────────────────────────────
    /// 5 GHz PHY rates below this (Mbps) are a problem for streaming.
    pub poor_phy_rate_mbps: u32,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            channel_util_warning_pct: 50,
            noise_floor_warning_dbm: -90,
            max_neighbors_for_80mhz: 3,
            colocated_rogue_signal_dbm: -50,
            short_range_link_ft: 40.0,
            sticky_client_rssi_dbm: -72,
            min_rssi_tight_dbm: -75,
            min_rssi_loose_dbm: -80,
            dense_site_ap_count: 3,
            expected_uplink_speed_mbps: 1000,
            uplink_error_threshold: 100,
            poor_phy_rate_mbps: 100,
        }
    }
}

/// Normalize a PHY rate to Mbps. Some firmware reports Kbps (values above
/// 10000 are assumed to be Kbps).
pub fn normalize_rate_mbps(rate: i64) -> Option<u32> {
    let rate = if rate > 10_000 { rate / 1000 } else { rate };
    u32::try_from(rate).ok().filter(|r| *r > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_normalization() {
        assert_eq!(normalize_rate_mbps(866), Some(866));
        assert_eq!(normalize_rate_mbps(866_000), Some(866));
        assert_eq!(normalize_rate_mbps(0), None);
        assert_eq!(normalize_rate_mbps(-5), None);
    }
}
