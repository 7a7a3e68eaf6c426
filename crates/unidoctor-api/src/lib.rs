// unidoctor-api: raw HTTP access to the UniFi controller's legacy API.
//
// This crate knows about cookies, envelopes, and wire-format quirks --
// nothing about diagnostics. `unidoctor-core` converts the wire models
// returned here into its own domain types.

pub mod client;
pub mod error;
pub mod models;
pub mod transport;

mod endpoints;

// ── Primary re-exports ──────────────────────────────────────────────
pub use client::UniFiClient;
pub use error::Error;
pub use models::RawSnapshot;
pub use transport::{TlsMode, TransportConfig};
