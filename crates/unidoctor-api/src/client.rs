// Legacy API HTTP client
//
// Wraps `reqwest::Client` with UniFi-specific URL construction, cookie
// session auth, and envelope unwrapping. Endpoint methods live in
// `endpoints.rs` as inherent methods, keeping this module focused on
// transport mechanics.

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::models::ApiResponse;
use crate::transport::TransportConfig;

/// HTTP client for the UniFi controller's legacy API behind the UniFi OS
/// proxy (`/proxy/network/api/s/{site}/...`).
///
/// Handles the `{ data: [], meta: { rc, msg } }` envelope and site-scoped
/// URL construction. All methods return unwrapped `data` payloads -- the
/// envelope is stripped before the caller sees it. Endpoints that 404
/// (older firmware) resolve to empty lists rather than errors, so a
/// partial snapshot is still usable.
pub struct UniFiClient {
    http: reqwest::Client,
    base_url: Url,
    site: String,
}

impl UniFiClient {
    /// Create a new client from a `TransportConfig`.
    ///
    /// If the config doesn't already include a cookie jar, one is created
    /// automatically (legacy auth requires cookies). The `base_url` should
    /// be the controller root, e.g. `https://192.168.1.1`.
    pub fn new(base_url: Url, site: String, transport: &TransportConfig) -> Result<Self, Error> {
        let config = if transport.cookie_jar.is_some() {
            transport.clone()
        } else {
            transport.clone().with_cookie_jar()
        };
        let http = config.build_client()?;
        Ok(Self {
            http,
            base_url,
            site,
        })
    }

    /// The current site identifier.
    pub fn site(&self) -> &str {
        &self.site
    }

    /// The controller base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── Authentication ───────────────────────────────────────────────

    /// Authenticate with the controller using username/password.
    ///
    /// `POST /api/auth/login` (UniFi OS). On success the session cookie is
    /// stored in the client's cookie jar and used for all subsequent
    /// requests.
    pub async fn login(&self, username: &str, password: &SecretString) -> Result<(), Error> {
        let url = self.base_url.join("api/auth/login")?;
        debug!("logging in at {}", url);

        let body = serde_json::json!({
            "username": username,
            "password": password.expose_secret(),
        });

        let resp = self
            .http
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(Error::Transport)?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Authentication {
                message: format!("login failed (HTTP {status}): {body}"),
            });
        }

        debug!("login successful");
        Ok(())
    }

    /// End the current session. Failures are ignored -- the session cookie
    /// expires server-side regardless.
    pub async fn logout(&self) -> Result<(), Error> {
        let url = self.base_url.join("api/auth/logout")?;
        debug!("logging out at {}", url);
        let _ = self.http.post(url).send().await;
        Ok(())
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// Build a site-scoped URL: `{base}/proxy/network/api/s/{site}/{path}`
    ///
    /// All diagnostic endpoints are site-scoped: stat/device, stat/rogueap,
    /// rest/wlanconf, cmd/devmgr, etc.
    pub(crate) fn site_url(&self, path: &str) -> Result<Url, Error> {
        let full = format!(
            "{}proxy/network/api/s/{}/{}",
            self.base_url, self.site, path
        );
        Url::parse(&full).map_err(Error::InvalidUrl)
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Send a GET request and unwrap the legacy envelope.
    ///
    /// A 404 response yields an empty list: older firmware lacks some
    /// diagnostic endpoints and the snapshot should degrade, not fail.
    pub(crate) async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<Vec<T>, Error> {
        debug!("GET {}", url);

        let resp = self.http.get(url).send().await.map_err(Error::Transport)?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }

        self.parse_envelope(resp).await
    }

    /// Send a POST request with JSON body and unwrap the legacy envelope.
    pub(crate) async fn post<T: DeserializeOwned>(
        &self,
        url: Url,
        body: &impl Serialize,
    ) -> Result<Vec<T>, Error> {
        debug!("POST {}", url);

        let resp = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(Error::Transport)?;

        self.parse_envelope(resp).await
    }

    /// Parse the `{ meta, data }` envelope, returning `data` on success
    /// or an `Error::Api` if `meta.rc != "ok"`.
    async fn parse_envelope<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<Vec<T>, Error> {
        let status = resp.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(Error::SessionExpired);
        }

        let body = resp.text().await.map_err(Error::Transport)?;

        let envelope: ApiResponse<T> =
            serde_json::from_str(&body).map_err(|e| Error::Deserialization {
                message: e.to_string(),
                body: body.clone(),
            })?;

        match envelope.meta.rc.as_str() {
            "ok" => Ok(envelope.data),
            _ => Err(Error::Api {
                message: envelope
                    .meta
                    .msg
                    .unwrap_or_else(|| format!("rc={}", envelope.meta.rc)),
            }),
        }
    }
}
