//! Client configuration and its one-time validation.

use std::fmt;
use std::time::Duration;

use reqwest::Url;
use zeroize::Zeroizing;

use crate::credentials::PartnerCredentials;
use crate::error::ConfigError;

/// Timeout applied when the configuration does not set one.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(30_000);

/// Raw configuration accepted by [`crate::PartnerClient::new`].
///
/// Nothing is checked until the client is built; see
/// [`ClientConfig::validate`] for the rules.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use mobihealth_partner::ClientConfig;
///
/// let config = ClientConfig::new(
///     "https://api.mobihealth.com/",
///     "123e4567-e89b-42d3-a456-426614174000",
///     "secret",
/// )
/// .with_timeout(Duration::from_secs(5));
/// assert_eq!(config.base_url(), "https://api.mobihealth.com/");
/// assert_eq!(config.timeout(), Some(Duration::from_secs(5)));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
    partner_id: String,
    partner_secret: Zeroizing<String>,
    timeout: Option<Duration>,
}

impl ClientConfig {
    /// Create a configuration with the default timeout.
    #[must_use]
    pub fn new(
        base_url: impl Into<String>,
        partner_id: impl Into<String>,
        partner_secret: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            partner_id: partner_id.into(),
            partner_secret: Zeroizing::new(partner_secret.into()),
            timeout: None,
        }
    }

    /// Override the per-request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Base URL exactly as supplied.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Explicit timeout, if one was set.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Validate and normalize the configuration.
    ///
    /// The base URL must be non-empty and parse as a URL once a single
    /// trailing slash is removed. Credentials are checked by
    /// [`PartnerCredentials::try_from_parts`]. A missing timeout becomes
    /// [`DEFAULT_TIMEOUT`].
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found, checking the base URL
    /// presence, then the credentials, then the base URL syntax.
    pub fn validate(&self) -> Result<ResolvedConfig, ConfigError> {
        if self.base_url.is_empty() {
            return Err(ConfigError::MissingBaseUrl);
        }
        let credentials =
            PartnerCredentials::try_from_parts(&self.partner_id, &self.partner_secret)?;

        let base_url = self
            .base_url
            .strip_suffix('/')
            .unwrap_or(&self.base_url)
            .to_owned();
        if let Err(error) = Url::parse(&base_url) {
            return Err(ConfigError::InvalidBaseUrl {
                value: self.base_url.clone(),
                message: error.to_string(),
            });
        }

        Ok(ResolvedConfig {
            base_url,
            credentials,
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
        })
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("partner_id", &self.partner_id)
            .field("partner_secret", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Configuration after validation, fixed for the lifetime of a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    base_url: String,
    credentials: PartnerCredentials,
    timeout: Duration,
}

impl ResolvedConfig {
    /// Base URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Validated partner credentials.
    #[must_use]
    pub const fn credentials(&self) -> &PartnerCredentials {
        &self.credentials
    }

    /// Per-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Join an endpoint path onto the base URL.
    pub(crate) fn endpoint_url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}
