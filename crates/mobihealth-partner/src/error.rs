//! Error types for the partner client.
//!
//! Configuration problems are reported once, when the client is built, through
//! [`ConfigError`]. Every failure of an API call is reported through
//! [`ClientError`], which keeps the HTTP status code and per-field validation
//! messages of API rejections available to callers.

use thiserror::Error;

use crate::envelope::FieldErrors;
use crate::macros::define_client_error;

/// Errors raised while validating client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The base URL was empty.
    #[error("base_url is required")]
    MissingBaseUrl,

    /// The base URL could not be parsed.
    #[error("base_url '{value}' is not a valid URL: {message}")]
    InvalidBaseUrl {
        /// The rejected base URL.
        value: String,
        /// Parser error message.
        message: String,
    },

    /// The partner identifier was empty.
    #[error("partner_id is required")]
    MissingPartnerId,

    /// The partner identifier is not a hyphenated UUID v4.
    #[error("partner_id must be a valid UUID v4")]
    InvalidPartnerId,

    /// The partner secret was empty.
    #[error("partner_secret is required")]
    MissingPartnerSecret,

    /// A credential cannot be carried in an HTTP header.
    #[error("{header} contains characters not allowed in an HTTP header")]
    InvalidHeaderValue {
        /// Name of the header that rejected the value.
        header: &'static str,
    },

    /// The underlying HTTP client could not be built.
    #[error("failed to build HTTP client: {message}")]
    HttpClient {
        /// Description of the builder failure.
        message: String,
    },
}

define_client_error! {
    /// Errors surfaced by partner API calls.
    pub enum ClientError {
        /// The request was rejected locally before any network call.
        InvalidRequest {
            /// Why the request was rejected.
            message: String,
        } => "invalid request: {message}",
        /// The Partner API answered with a non-success status.
        Api {
            /// Message reported by the API.
            message: String,
            /// HTTP status code of the response.
            status_code: u16,
            /// Per-field validation messages, when the API supplied them.
            errors: Option<FieldErrors>,
        } => "partner API error ({status_code}): {message}",
        /// The call did not complete within the configured timeout.
        Timeout => "Request timeout",
        /// Network transport failed before a response was received.
        Transport {
            /// Description of the transport failure.
            message: String,
        } => "partner API transport failed: {message}",
        /// The response body was not the expected JSON.
        Decode {
            /// Description of the decode failure.
            message: String,
        } => "partner API response decode failed: {message}",
    }
}

impl ClientError {
    /// Return the HTTP status code for API rejections.
    ///
    /// # Examples
    ///
    /// ```
    /// use mobihealth_partner::ClientError;
    ///
    /// assert_eq!(ClientError::api("Not found", 404_u16, None).status_code(), Some(404));
    /// assert_eq!(ClientError::timeout().status_code(), None);
    /// ```
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }

    /// Return per-field validation messages for API rejections.
    #[must_use]
    pub const fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Api {
                errors: Some(errors),
                ..
            } => Some(errors),
            _ => None,
        }
    }

    /// Return whether the call was abandoned because it exceeded the timeout.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout)
    }
}
