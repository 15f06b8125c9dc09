//! JSON envelopes wrapping every Partner API response body.
//!
//! Success bodies carry the payload under `data`; error bodies carry a message
//! and, for validation failures, per-field messages under `errors`.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Field name mapped to the ordered validation messages reported for it.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Envelope wrapping a successful response payload.
///
/// Only `data` is required; the status flag and message are informational and
/// may be absent or `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    /// Success flag reported by the API.
    #[serde(default)]
    pub status: Option<bool>,
    /// Human-readable message.
    #[serde(default)]
    pub message: Option<String>,
    /// Endpoint-specific payload.
    pub data: T,
}

impl<T> ApiEnvelope<T> {
    /// Unwrap the payload, discarding the status flag and message.
    #[must_use]
    pub fn into_data(self) -> T {
        self.data
    }
}

/// Envelope wrapping a non-success response body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorEnvelope {
    /// Success flag reported by the API; `false` for errors.
    #[serde(default)]
    pub status: Option<bool>,
    /// Human-readable message, when the API supplied one.
    #[serde(default)]
    pub message: Option<String>,
    /// Per-field validation messages.
    ///
    /// Any other shape under `errors` decodes as `None` so the message is
    /// still reported.
    #[serde(
        default,
        deserialize_with = "lenient_field_errors",
        skip_serializing_if = "Option::is_none"
    )]
    pub errors: Option<FieldErrors>,
}

impl ApiErrorEnvelope {
    /// Message used when the API supplies no usable message.
    pub const FALLBACK_MESSAGE: &'static str = "API request failed";

    /// Return the API message, or [`Self::FALLBACK_MESSAGE`] when it is absent
    /// or empty.
    #[must_use]
    pub fn message_or_fallback(&self) -> &str {
        self.message
            .as_deref()
            .filter(|message| !message.is_empty())
            .unwrap_or(Self::FALLBACK_MESSAGE)
    }
}

fn lenient_field_errors<'de, D>(deserializer: D) -> Result<Option<FieldErrors>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| serde_json::from_value(value).ok()))
}
