//! Reqwest-backed Partner API client.
//!
//! This client owns transport details only: credential headers, timeout and
//! HTTP error mapping, and JSON decoding of response envelopes.

use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::{ClientConfig, ResolvedConfig};
use crate::credentials::PartnerCredentials;
use crate::envelope::{ApiEnvelope, ApiErrorEnvelope};
use crate::error::{ClientError, ConfigError};
use crate::model::{IdentifyRequest, IdentifyResponse};
use crate::port::UserIdentifier;

/// Relative path of the identify endpoint.
pub const IDENTIFY_PATH: &str = "/api/v1/public/identify/";
/// Header carrying the partner identifier.
pub const PARTNER_ID_HEADER: &str = "X-PARTNER-ID";
/// Header carrying the partner secret.
pub const PARTNER_KEY_HEADER: &str = "X-PARTNER-KEY";

const DEFAULT_USER_AGENT: &str = concat!("mobihealth-partner/", env!("CARGO_PKG_VERSION"));
const MISSING_IDENTIFIER: &str = "Either email or phone_number must be provided";

/// Client for the MobiHealth Partner API.
///
/// Configuration is validated once by [`PartnerClient::new`] and never changes
/// afterwards, so one client can serve concurrent calls from many tasks.
///
/// # Examples
///
/// ```rust,no_run
/// use mobihealth_partner::{ClientConfig, IdentifyRequest, PartnerClient};
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let client = PartnerClient::new(ClientConfig::new(
///     "https://api.mobihealth.com",
///     "123e4567-e89b-42d3-a456-426614174000",
///     "your-secret-key",
/// ))?;
///
/// let user = client
///     .identify(&IdentifyRequest::by_email("user@example.com").with_name("John", "Doe"))
///     .await?;
/// println!("identified {}", user.id);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct PartnerClient {
    http: Client,
    config: ResolvedConfig,
    headers: HeaderMap,
}

impl PartnerClient {
    /// Validate `config` and build a client around it.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the configuration is invalid, when a
    /// credential cannot be sent as a header, or when the HTTP client cannot
    /// be constructed.
    pub fn new(config: ClientConfig) -> Result<Self, ConfigError> {
        let resolved = config.validate()?;
        let headers = credential_headers(resolved.credentials())?;
        let http = Client::builder()
            .timeout(resolved.timeout())
            .user_agent(DEFAULT_USER_AGENT)
            .build()
            .map_err(|error| ConfigError::HttpClient {
                message: error.to_string(),
            })?;

        Ok(Self {
            http,
            config: resolved,
            headers,
        })
    }

    /// Normalized configuration this client was built with.
    #[must_use]
    pub const fn config(&self) -> &ResolvedConfig {
        &self.config
    }

    /// Identify a partner user, creating them when they do not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidRequest`] without contacting the API when
    /// neither `email` nor `phone_number` is present. Otherwise returns
    /// [`ClientError::Api`] for non-success statuses, [`ClientError::Timeout`]
    /// when the configured timeout elapses, and [`ClientError::Transport`] or
    /// [`ClientError::Decode`] for other failures.
    pub async fn identify(
        &self,
        request: &IdentifyRequest,
    ) -> Result<IdentifyResponse, ClientError> {
        if !request.has_identifier() {
            return Err(ClientError::invalid_request(MISSING_IDENTIFIER));
        }

        self.request(Method::POST, IDENTIFY_PATH, Some(request))
            .await
    }

    /// Execute one authenticated call and unwrap the success envelope.
    ///
    /// The whole exchange, including reading the body, is bounded by the
    /// configured timeout; when it fires the in-flight transfer is dropped.
    async fn request<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ClientError>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        debug!(%method, path, "sending partner API request");

        let mut builder = self
            .http
            .request(method, self.config.endpoint_url(path))
            .headers(self.headers.clone());
        if let Some(payload) = body {
            builder = builder.json(payload);
        }

        let response = builder.send().await.map_err(map_transport_error)?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(map_transport_error)?;
        debug!(status = status.as_u16(), path, "partner API responded");

        if !status.is_success() {
            return Err(map_status_error(status, bytes.as_ref()));
        }
        decode_envelope(bytes.as_ref())
    }
}

#[async_trait]
impl UserIdentifier for PartnerClient {
    async fn identify(&self, request: &IdentifyRequest) -> Result<IdentifyResponse, ClientError> {
        Self::identify(self, request).await
    }
}

fn credential_headers(credentials: &PartnerCredentials) -> Result<HeaderMap, ConfigError> {
    let partner_id = HeaderValue::from_str(credentials.partner_id()).map_err(|_| {
        ConfigError::InvalidHeaderValue {
            header: PARTNER_ID_HEADER,
        }
    })?;
    let mut partner_key = HeaderValue::from_str(credentials.partner_secret()).map_err(|_| {
        ConfigError::InvalidHeaderValue {
            header: PARTNER_KEY_HEADER,
        }
    })?;
    partner_key.set_sensitive(true);

    let mut headers = HeaderMap::with_capacity(3);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(HeaderName::from_static("x-partner-id"), partner_id);
    headers.insert(HeaderName::from_static("x-partner-key"), partner_key);
    Ok(headers)
}

fn decode_envelope<T: DeserializeOwned>(body: &[u8]) -> Result<T, ClientError> {
    serde_json::from_slice::<ApiEnvelope<T>>(body)
        .map(ApiEnvelope::into_data)
        .map_err(|error| {
            debug!(%error, "partner API success body did not decode");
            ClientError::decode(format!("invalid Partner API JSON payload: {error}"))
        })
}

fn map_transport_error(error: reqwest::Error) -> ClientError {
    if error.is_timeout() {
        debug!("partner API request timed out");
        ClientError::timeout()
    } else if error.is_decode() {
        debug!(%error, "partner API response body could not be read");
        ClientError::decode(error.to_string())
    } else {
        debug!(%error, "partner API transport failed");
        ClientError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> ClientError {
    let envelope = serde_json::from_slice::<ApiErrorEnvelope>(body).unwrap_or_else(|error| {
        debug!(%error, status = status.as_u16(), "error body was not an API envelope");
        ApiErrorEnvelope::default()
    });
    let message = envelope.message_or_fallback().to_owned();
    ClientError::api(message, status.as_u16(), envelope.errors)
}
