// Diagnostic data endpoints
//
// Read endpoints for everything the analyzers consume, plus the one write
// path (`cmd/devmgr`) used to apply a channel plan.

use serde_json::json;
use tracing::debug;

use crate::client::UniFiClient;
use crate::error::Error;
use crate::models::{
    ClientEntry, DeviceEntry, EventEntry, HealthEntry, RawSnapshot, RogueApEntry, SettingEntry,
    WlanConfEntry,
};

impl UniFiClient {
    /// List all devices with full statistics.
    ///
    /// `GET /api/s/{site}/stat/device`
    pub async fn list_devices(&self) -> Result<Vec<DeviceEntry>, Error> {
        let url = self.site_url("stat/device")?;
        debug!("listing devices");
        self.get(url).await
    }

    /// List connected clients.
    ///
    /// `GET /api/s/{site}/stat/sta`
    pub async fn list_clients(&self) -> Result<Vec<ClientEntry>, Error> {
        let url = self.site_url("stat/sta")?;
        debug!("listing clients");
        self.get(url).await
    }

    /// List neighboring (rogue) AP observations.
    ///
    /// `GET /api/s/{site}/stat/rogueap`
    pub async fn list_rogue_aps(&self) -> Result<Vec<RogueApEntry>, Error> {
        let url = self.site_url("stat/rogueap")?;
        debug!("listing rogue APs");
        self.get(url).await
    }

    /// List recent events, newest first.
    ///
    /// `GET /api/s/{site}/stat/event?_limit={n}&_sort=-time`
    pub async fn list_events(&self, limit: u32) -> Result<Vec<EventEntry>, Error> {
        let url = self.site_url(&format!("stat/event?_limit={limit}&_sort=-time"))?;
        debug!(limit, "listing events");
        self.get(url).await
    }

    /// List SSID configurations.
    ///
    /// `GET /api/s/{site}/rest/wlanconf`
    pub async fn list_wlan_configs(&self) -> Result<Vec<WlanConfEntry>, Error> {
        let url = self.site_url("rest/wlanconf")?;
        debug!("listing WLAN configs");
        self.get(url).await
    }

    /// List keyed site settings sections.
    ///
    /// `GET /api/s/{site}/rest/setting`
    pub async fn list_settings(&self) -> Result<Vec<SettingEntry>, Error> {
        let url = self.site_url("rest/setting")?;
        debug!("listing site settings");
        self.get(url).await
    }

    /// List per-subsystem health summaries.
    ///
    /// `GET /api/s/{site}/stat/health`
    pub async fn list_health(&self) -> Result<Vec<HealthEntry>, Error> {
        let url = self.site_url("stat/health")?;
        debug!("listing health");
        self.get(url).await
    }

    /// Fetch everything the analyzers need in one concurrent round.
    ///
    /// All endpoint GETs run concurrently; the first transport failure
    /// aborts the whole fetch (a half-collected snapshot would skew the
    /// analysis).
    pub async fn fetch_snapshot(&self) -> Result<RawSnapshot, Error> {
        debug!(site = self.site(), "fetching snapshot");

        let (devices, clients, rogue_aps, events, wlans, settings, health) = tokio::try_join!(
            self.list_devices(),
            self.list_clients(),
            self.list_rogue_aps(),
            self.list_events(500),
            self.list_wlan_configs(),
            self.list_settings(),
            self.list_health(),
        )?;

        debug!(
            devices = devices.len(),
            clients = clients.len(),
            rogues = rogue_aps.len(),
            events = events.len(),
            "snapshot fetched"
        );

        Ok(RawSnapshot {
            devices,
            clients,
            rogue_aps,
            events,
            wlans,
            settings,
            health,
        })
    }

    /// Push a radio channel/width override to an AP.
    ///
    /// `POST /api/s/{site}/cmd/devmgr` with `{"cmd": "set-radiotable", ...}`.
    /// The AP re-provisions within 30-60s; this call only queues the change.
    pub async fn set_radio_channel(
        &self,
        mac: &str,
        radio: &str,
        channel: u16,
        width_mhz: u32,
    ) -> Result<(), Error> {
        let url = self.site_url("cmd/devmgr")?;
        debug!(mac, radio, channel, width_mhz, "applying radio override");

        let _: Vec<serde_json::Value> = self
            .post(
                url,
                &json!({
                    "cmd": "set-radiotable",
                    "mac": mac,
                    "radio_table": [
                        {
                            "radio": radio,
                            "channel": channel,
                            "ht": width_mhz,
                        }
                    ],
                }),
            )
            .await?;
        Ok(())
    }
}
