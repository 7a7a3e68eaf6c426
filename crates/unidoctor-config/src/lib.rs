//! Configuration and topology persistence for unidoctor.
//!
//! Two TOML documents under the platform config directory
//! (`~/.config/unidoctor/` on Linux):
//!
//! - `config.toml` -- controller connection profile, loaded through
//!   figment with `UNIFI_*` environment overrides
//! - `topology.toml` -- the user-described AP placements and links,
//!   written by the setup interview and consumed by the analyzers

use std::path::PathBuf;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use unidoctor_core::Topology;

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("no credentials configured -- run `unidoctor setup` first")]
    NoCredentials,

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("failed to parse topology file: {0}")]
    TopologyParse(#[from] toml::de::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── Config structs ──────────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub controller: ControllerProfile,
}

/// Connection profile for one controller.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ControllerProfile {
    /// Controller base URL (e.g., "https://192.168.1.1").
    pub host: String,

    #[serde(default = "default_username")]
    pub username: String,

    /// Password in plaintext -- the config directory is chmod 700, and the
    /// `UNIFI_PASS` environment variable is preferred where available.
    pub password: Option<String>,

    #[serde(default = "default_site")]
    pub site: String,

    #[serde(default)]
    pub verify_ssl: bool,
}

impl Default for ControllerProfile {
    fn default() -> Self {
        Self {
            host: "https://192.168.1.1".into(),
            username: default_username(),
            password: None,
            site: default_site(),
            verify_ssl: false,
        }
    }
}

fn default_username() -> String {
    "admin".into()
}
fn default_site() -> String {
    "default".into()
}

impl ControllerProfile {
    /// Parse the host into a `Url`, validating it in the process.
    pub fn url(&self) -> Result<url::Url, ConfigError> {
        self.host.parse().map_err(|e| ConfigError::Validation {
            field: "controller.host".into(),
            reason: format!("{e}"),
        })
    }

    /// The password as a secret, or an error directing the user to setup.
    pub fn secret_password(&self) -> Result<SecretString, ConfigError> {
        self.password
            .as_deref()
            .filter(|p| !p.is_empty())
            .map(|p| SecretString::from(p.to_owned()))
            .ok_or(ConfigError::NoCredentials)
    }
}

// ── Paths ───────────────────────────────────────────────────────────

fn config_dir() -> PathBuf {
    ProjectDirs::from("", "", "unidoctor")
        .map_or_else(|| PathBuf::from(".unidoctor"), |d| d.config_dir().to_owned())
}

pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

pub fn topology_path() -> PathBuf {
    config_dir().join("topology.toml")
}

// ── Config loading / saving ─────────────────────────────────────────

/// Load the config by layering: defaults, then the TOML file, then
/// `UNIFI_*` environment variables (`UNIFI_HOST`, `UNIFI_USER`,
/// `UNIFI_PASS`, `UNIFI_SITE`).
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

fn load_config_from(path: &std::path::Path) -> Result<Config, ConfigError> {
    let env = Env::prefixed("UNIFI_").map(|key| {
        let lower = key.as_str().to_ascii_lowercase();
        let mapped = match lower.as_str() {
            "host" => "controller.host".to_owned(),
            "user" => "controller.username".to_owned(),
            "pass" => "controller.password".to_owned(),
            "site" => "controller.site".to_owned(),
            _ => format!("controller.{lower}"),
        };
        mapped.into()
    });

    let config = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(env)
        .extract()?;
    Ok(config)
}

/// Write the config file, creating the directory (mode 700 on Unix) as
/// needed.
pub fn save_config(config: &Config) -> Result<(), ConfigError> {
    let path = config_path();
    write_private(&path, &toml::to_string_pretty(config)?)
}

// ── Topology loading / saving ───────────────────────────────────────

/// Load the topology document, or an empty topology if none exists yet.
pub fn load_topology() -> Result<Topology, ConfigError> {
    let path = topology_path();
    if !path.exists() {
        return Ok(Topology::default());
    }
    let raw = std::fs::read_to_string(&path)?;
    Ok(toml::from_str(&raw)?)
}

pub fn save_topology(topology: &Topology) -> Result<(), ConfigError> {
    let path = topology_path();
    write_private(&path, &toml::to_string_pretty(topology)?)
}

fn write_private(path: &std::path::Path, contents: &str) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(dir, std::fs::Permissions::from_mode(0o700))?;
        }
    }
    std::fs::write(path, contents)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))?;
    }
    Ok(())
}
