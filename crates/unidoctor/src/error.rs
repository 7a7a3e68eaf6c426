//! CLI error types with miette diagnostics.
//!
//! Maps API and config errors into user-facing diagnostics with
//! actionable help text and stable exit codes.

use miette::Diagnostic;
use thiserror::Error;

/// Exit codes for process termination.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const CONNECTION: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not reach the controller")]
    #[diagnostic(
        code(unidoctor::connection_failed),
        help(
            "Check that the controller is running and reachable.\n\
             Self-signed certificate? Add --insecure (-k)."
        )
    )]
    ConnectionFailed {
        #[source]
        source: unidoctor_api::Error,
    },

    // ── Authentication ───────────────────────────────────────────────
    #[error("Authentication failed")]
    #[diagnostic(
        code(unidoctor::auth_failed),
        help(
            "Verify the username and password.\n\
             Re-run: unidoctor setup"
        )
    )]
    AuthFailed {
        #[source]
        source: unidoctor_api::Error,
    },

    #[error("No credentials configured")]
    #[diagnostic(
        code(unidoctor::no_credentials),
        help(
            "Run: unidoctor setup\n\
             Or set the UNIFI_HOST / UNIFI_USER / UNIFI_PASS environment variables."
        )
    )]
    NoCredentials,

    // ── API ──────────────────────────────────────────────────────────
    #[error("Controller API error: {message}")]
    #[diagnostic(code(unidoctor::api_error))]
    Api { message: String },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(unidoctor::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error(transparent)]
    #[diagnostic(code(unidoctor::config))]
    Config(unidoctor_config::ConfigError),

    // ── Interactive ──────────────────────────────────────────────────
    #[error("Cancelled")]
    #[diagnostic(code(unidoctor::cancelled))]
    Cancelled,

    #[error(transparent)]
    Prompt(#[from] dialoguer::Error),

    // ── IO / Serialization ───────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::AuthFailed { .. } | Self::NoCredentials => exit_code::AUTH,
            Self::Validation { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── Error source mappings ────────────────────────────────────────────

impl From<unidoctor_api::Error> for CliError {
    fn from(err: unidoctor_api::Error) -> Self {
        use unidoctor_api::Error as ApiError;
        match err {
            ApiError::Authentication { .. } | ApiError::SessionExpired => {
                Self::AuthFailed { source: err }
            }
            ApiError::Transport(_) | ApiError::Tls(_) | ApiError::InvalidUrl(_) => {
                Self::ConnectionFailed { source: err }
            }
            ApiError::Api { message } => Self::Api { message },
            ApiError::Deserialization { message, .. } => Self::Api {
                message: format!("unexpected response: {message}"),
            },
        }
    }
}

impl From<unidoctor_config::ConfigError> for CliError {
    fn from(err: unidoctor_config::ConfigError) -> Self {
        match err {
            unidoctor_config::ConfigError::NoCredentials => Self::NoCredentials,
            other => Self::Config(other),
        }
    }
}
