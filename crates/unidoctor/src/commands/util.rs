//! Shared command plumbing: client construction and snapshot collection.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use unidoctor_api::{TlsMode, TransportConfig, UniFiClient};
use unidoctor_config::{Config, load_config, load_topology};
use unidoctor_core::{NetworkSnapshot, convert};

use crate::cli::GlobalOpts;
use crate::error::CliError;

/// Load the config (with CLI flag overrides applied) and build a client.
pub(crate) fn build_client(global: &GlobalOpts) -> Result<(UniFiClient, Config), CliError> {
    let mut config = load_config()?;
    if let Some(ref host) = global.controller {
        config.controller.host = host.clone();
    }
    if let Some(ref site) = global.site {
        config.controller.site = site.clone();
    }

    let url = config.controller.url()?;
    let tls = if config.controller.verify_ssl && !global.insecure {
        TlsMode::System
    } else {
        TlsMode::DangerAcceptInvalid
    };
    let transport = TransportConfig {
        tls,
        timeout: Duration::from_secs(global.timeout),
        cookie_jar: None,
    };

    let client = UniFiClient::new(url, config.controller.site.clone(), &transport)?;
    Ok((client, config))
}

/// Authenticate, fetch everything, and lower it to the domain snapshot.
/// Shows a spinner on stderr unless quiet.
pub(crate) async fn fetch_snapshot(
    client: &UniFiClient,
    config: &Config,
    quiet: bool,
) -> Result<NetworkSnapshot, CliError> {
    let spinner = if quiet {
        None
    } else {
        let bar = ProgressBar::new_spinner().with_message("Fetching data from controller...");
        bar.set_style(
            ProgressStyle::with_template("{spinner} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.enable_steady_tick(Duration::from_millis(120));
        Some(bar)
    };

    let password = config.controller.secret_password()?;
    client.login(&config.controller.username, &password).await?;
    let raw = client.fetch_snapshot().await?;
    let _ = client.logout().await;

    let topology = load_topology()?;
    let snapshot = convert::snapshot_from_raw(raw, topology);

    if let Some(bar) = spinner {
        bar.finish_and_clear();
    }
    debug!(
        aps = snapshot.access_points.len(),
        clients = snapshot.clients.len(),
        "snapshot collected"
    );

    Ok(snapshot)
}
