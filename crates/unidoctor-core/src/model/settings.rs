// ── Gateway settings domain type ──

use serde::{Deserialize, Serialize};

/// Gateway-level feature toggles relevant to the settings audit,
/// assembled from the keyed `rest/setting` sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GatewaySettings {
    /// `"ids"`, `"ips"`, or `None` when Threat Management is off.
    pub ips_mode: Option<String>,
    pub smart_queues_enabled: bool,
    pub dpi_enabled: bool,
}
