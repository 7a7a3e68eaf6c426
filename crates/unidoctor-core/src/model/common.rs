// ── Common types shared across the domain model ──

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Band ────────────────────────────────────────────────────────────

/// Radio frequency band.
///
/// An access point carries at most one `RadioState` per band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Band {
    /// 2.4 GHz (channels 1-14).
    #[serde(rename = "2g")]
    Ghz2_4,
    /// 5 GHz (channels 36-165).
    #[serde(rename = "5g")]
    Ghz5,
}

impl Band {
    /// Human-readable label, e.g. `"2.4 GHz"`.
    pub fn label(self) -> &'static str {
        match self {
            Self::Ghz2_4 => "2.4 GHz",
            Self::Ghz5 => "5 GHz",
        }
    }

    /// The legacy API radio identifier for this band (`"ng"` / `"na"`).
    pub fn radio_code(self) -> &'static str {
        match self {
            Self::Ghz2_4 => "ng",
            Self::Ghz5 => "na",
        }
    }

    /// Infer the band from a channel number. Channels 1-14 are 2.4 GHz,
    /// 36-165 are 5 GHz; anything else is unrecognized.
    pub fn for_channel(channel: u16) -> Option<Self> {
        match channel {
            1..=14 => Some(Self::Ghz2_4),
            36..=165 => Some(Self::Ghz5),
            _ => None,
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ── ChannelWidth ────────────────────────────────────────────────────

/// Channel width. Serialized as plain MHz for JSON consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u32", try_from = "u32")]
pub enum ChannelWidth {
    Mhz20,
    Mhz40,
    Mhz80,
    Mhz160,
}

impl ChannelWidth {
    pub fn mhz(self) -> u32 {
        match self {
            Self::Mhz20 => 20,
            Self::Mhz40 => 40,
            Self::Mhz80 => 80,
            Self::Mhz160 => 160,
        }
    }

    pub fn from_mhz(mhz: u32) -> Option<Self> {
        match mhz {
            20 => Some(Self::Mhz20),
            40 => Some(Self::Mhz40),
            80 => Some(Self::Mhz80),
            160 => Some(Self::Mhz160),
            _ => None,
        }
    }

    /// The next-narrower width, if any (160 -> 80 -> 40 -> 20).
    pub fn narrower(self) -> Option<Self> {
        match self {
            Self::Mhz160 => Some(Self::Mhz80),
            Self::Mhz80 => Some(Self::Mhz40),
            Self::Mhz40 => Some(Self::Mhz20),
            Self::Mhz20 => None,
        }
    }
}

impl From<ChannelWidth> for u32 {
    fn from(width: ChannelWidth) -> Self {
        width.mhz()
    }
}

impl TryFrom<u32> for ChannelWidth {
    type Error = String;

    fn try_from(mhz: u32) -> Result<Self, Self::Error> {
        Self::from_mhz(mhz).ok_or_else(|| format!("invalid channel width: {mhz} MHz"))
    }
}

impl fmt::Display for ChannelWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} MHz", self.mhz())
    }
}

// ── TxPower ─────────────────────────────────────────────────────────

/// Transmit power mode, as the controller configures it.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TxPower {
    Auto,
    Low,
    Medium,
    High,
    Custom,
}

impl TxPower {
    /// Lenient parse from the wire `tx_power_mode` field. Unknown or
    /// missing values map to `Auto`.
    pub fn from_wire(raw: Option<&str>) -> Self {
        raw.and_then(|s| s.parse().ok()).unwrap_or(Self::Auto)
    }
}

// ── MacAddress ──────────────────────────────────────────────────────

/// MAC address, normalized to lowercase colon-separated format (aa:bb:cc:dd:ee:ff).
///
/// `Ord` is derived so AP processing order is deterministic across runs.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MacAddress(String);

impl MacAddress {
    /// Create a normalized MAC address from any common format.
    /// Accepts colon-separated, dash-separated, or bare hex.
    pub fn new(raw: impl AsRef<str>) -> Self {
        let normalized = raw.as_ref().to_lowercase().replace('-', ":");
        Self(normalized)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The first three octets, used for vendor (OUI) lookups.
    pub fn oui(&self) -> &str {
        let end = self
            .0
            .char_indices()
            .filter(|(_, c)| *c == ':')
            .nth(2)
            .map_or(self.0.len(), |(i, _)| i);
        &self.0[..end]
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MacAddress {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}
