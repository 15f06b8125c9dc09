//! Request and response shapes for the identify endpoint.

use serde::{Deserialize, Serialize};

/// Payload identifying a partner user.
///
/// Either `email` or `phone_number` must be present for the request to be
/// sent. Absent fields are omitted from the JSON body rather than sent as
/// `null`.
///
/// # Examples
///
/// ```
/// use mobihealth_partner::IdentifyRequest;
///
/// let request = IdentifyRequest::by_email("user@example.com")
///     .with_name("John", "Doe")
///     .with_date_of_birth("1990-01-01");
/// assert!(request.has_identifier());
///
/// let json = serde_json::to_value(&request).expect("request serializes");
/// assert_eq!(json["email"], "user@example.com");
/// assert!(json.get("phone_number").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentifyRequest {
    /// Email address; optional when `phone_number` is provided.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Phone number; optional when `email` is provided.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// Country code for the phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    /// Given name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Family name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Gender as understood by the Partner API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    /// Date of birth in ISO 8601 format.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
}

impl IdentifyRequest {
    /// Start a request identifying the user by email.
    #[must_use]
    pub fn by_email(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            ..Self::default()
        }
    }

    /// Start a request identifying the user by phone number.
    #[must_use]
    pub fn by_phone(phone_number: impl Into<String>, country_code: impl Into<String>) -> Self {
        Self {
            phone_number: Some(phone_number.into()),
            country_code: Some(country_code.into()),
            ..Self::default()
        }
    }

    /// Attach the user's given and family names.
    #[must_use]
    pub fn with_name(mut self, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self.last_name = Some(last_name.into());
        self
    }

    /// Attach the country code for the phone number.
    #[must_use]
    pub fn with_country_code(mut self, country_code: impl Into<String>) -> Self {
        self.country_code = Some(country_code.into());
        self
    }

    /// Attach the user's gender.
    #[must_use]
    pub fn with_gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = Some(gender.into());
        self
    }

    /// Attach the user's date of birth.
    #[must_use]
    pub fn with_date_of_birth(mut self, date_of_birth: impl Into<String>) -> Self {
        self.date_of_birth = Some(date_of_birth.into());
        self
    }

    /// Return whether an email or phone number is present.
    ///
    /// Empty strings do not count as present.
    #[must_use]
    pub fn has_identifier(&self) -> bool {
        is_present(self.email.as_deref()) || is_present(self.phone_number.as_deref())
    }
}

fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|value| !value.is_empty())
}

/// User record returned by the identify endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentifyResponse {
    /// Partner-scoped user identifier.
    pub id: String,
    /// Profile identifier.
    pub profile_id: String,
    /// Public identifier safe to share with end users.
    pub public_id: String,
    /// Email address on record.
    pub email: Option<String>,
    /// Phone number on record.
    pub phone_number: Option<String>,
    /// Country code on record.
    pub country_code: Option<String>,
    /// Given name on record.
    pub first_name: Option<String>,
    /// Family name on record.
    pub last_name: Option<String>,
    /// Profile picture URL.
    pub profile_picture: Option<String>,
}
