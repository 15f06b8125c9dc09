//! Partner client settings loaded via OrthoConfig.

use std::fmt;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::config::ClientConfig;

/// Base URL used when no override is configured.
pub const DEFAULT_API_URL: &str = "https://api.mobihealth.com";

/// Layered settings for building a [`ClientConfig`] from the environment.
///
/// Values are read from `MOBIHEALTH_API_URL`, `MOBIHEALTH_PARTNER_ID`,
/// `MOBIHEALTH_PARTNER_SECRET` and `MOBIHEALTH_TIMEOUT_MS`. Missing
/// credentials are passed on as empty strings so that client construction
/// reports them.
#[derive(Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "MOBIHEALTH")]
pub struct PartnerSettings {
    /// Partner API base URL.
    #[ortho_config(default = String::from(DEFAULT_API_URL))]
    pub api_url: String,
    /// Partner identifier (UUID v4).
    pub partner_id: Option<String>,
    /// Partner secret key.
    pub partner_secret: Option<String>,
    /// Per-request timeout in milliseconds.
    pub timeout_ms: Option<u64>,
}

impl PartnerSettings {
    /// Return the configured base URL.
    #[must_use]
    pub fn api_url(&self) -> &str {
        self.api_url.as_str()
    }

    /// Convert these settings into an unvalidated client configuration.
    ///
    /// The secret moves into the configuration's zeroizing buffer; no copy
    /// is left behind in the settings.
    #[must_use]
    pub fn into_client_config(self) -> ClientConfig {
        let config = ClientConfig::new(
            self.api_url,
            self.partner_id.unwrap_or_default(),
            self.partner_secret.unwrap_or_default(),
        );
        match self.timeout_ms {
            Some(millis) => config.with_timeout(Duration::from_millis(millis)),
            None => config,
        }
    }
}

impl fmt::Debug for PartnerSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PartnerSettings")
            .field("api_url", &self.api_url)
            .field("partner_id", &self.partner_id)
            .field(
                "partner_secret",
                &self.partner_secret.as_ref().map(|_| "<redacted>"),
            )
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}
