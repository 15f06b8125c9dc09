//! Partner credential pair sent with every API request.
//!
//! Keep credential validation in one constructor so the client can never hold
//! an identifier or secret the API would reject outright.

use std::fmt;

use zeroize::Zeroizing;

use crate::error::ConfigError;
use crate::validation::is_valid_uuid_v4;

/// Validated partner credentials.
///
/// ## Invariants
/// - `partner_id` is a hyphenated UUID v4.
/// - `partner_secret` is non-empty and is zeroized when dropped.
///
/// # Examples
/// ```
/// use mobihealth_partner::PartnerCredentials;
///
/// let creds = PartnerCredentials::try_from_parts(
///     "123e4567-e89b-42d3-a456-426614174000",
///     "hunter2",
/// )
/// .expect("valid credentials");
/// assert_eq!(creds.partner_id(), "123e4567-e89b-42d3-a456-426614174000");
/// assert!(!format!("{creds:?}").contains("hunter2"));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct PartnerCredentials {
    partner_id: String,
    partner_secret: Zeroizing<String>,
}

impl PartnerCredentials {
    /// Construct credentials from raw identifier and secret inputs.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingPartnerId`] or
    /// [`ConfigError::MissingPartnerSecret`] for empty inputs, and
    /// [`ConfigError::InvalidPartnerId`] when the identifier is not a UUID v4.
    pub fn try_from_parts(partner_id: &str, partner_secret: &str) -> Result<Self, ConfigError> {
        if partner_id.is_empty() {
            return Err(ConfigError::MissingPartnerId);
        }
        if partner_secret.is_empty() {
            return Err(ConfigError::MissingPartnerSecret);
        }
        if !is_valid_uuid_v4(partner_id) {
            return Err(ConfigError::InvalidPartnerId);
        }

        Ok(Self {
            partner_id: partner_id.to_owned(),
            partner_secret: Zeroizing::new(partner_secret.to_owned()),
        })
    }

    /// Partner identifier sent as `X-PARTNER-ID`.
    #[must_use]
    pub fn partner_id(&self) -> &str {
        self.partner_id.as_str()
    }

    /// Partner secret sent as `X-PARTNER-KEY`.
    #[must_use]
    pub fn partner_secret(&self) -> &str {
        self.partner_secret.as_str()
    }
}

impl fmt::Debug for PartnerCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PartnerCredentials")
            .field("partner_id", &self.partner_id)
            .field("partner_secret", &"<redacted>")
            .finish()
    }
}
