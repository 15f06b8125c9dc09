//! Typed client for the MobiHealth Partner identity-resolution API.
//!
//! A partner authenticates with a static identifier/secret pair and asks the
//! API to find or create a user from an email address or phone number. This
//! crate validates the partner configuration once, sends the identify call
//! with the partner credential headers, and maps the JSON envelopes returned by
//! the API onto typed values and structured errors.
//!
//! # Overview
//!
//! - [`PartnerClient`] performs the authenticated, timeout-bounded HTTP calls.
//! - [`UserIdentifier`] is the port callers can depend on (and mock) instead
//!   of the concrete client.
//! - [`ClientError`] distinguishes local validation failures, API rejections
//!   (with status code and field errors), timeouts, and transport failures.
//! - [`PartnerSettings`] loads connection settings from `MOBIHEALTH_*`
//!   environment variables.
//!
//! # Example
//!
//! ```rust,no_run
//! use mobihealth_partner::{ClientConfig, ClientError, IdentifyRequest, PartnerClient};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = PartnerClient::new(ClientConfig::new(
//!     "https://api.mobihealth.com",
//!     "123e4567-e89b-42d3-a456-426614174000",
//!     "your-secret-key",
//! ))?;
//!
//! let request = IdentifyRequest::by_phone("+1234567890", "US").with_name("Jane", "Smith");
//! match client.identify(&request).await {
//!     Ok(user) => println!("identified {}", user.public_id),
//!     Err(ClientError::Api { status_code, message, errors }) => {
//!         eprintln!("API error ({status_code}): {message} {errors:?}");
//!     }
//!     Err(other) => return Err(other.into()),
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod credentials;
mod envelope;
mod error;
pub mod identify_cli;
mod macros;
mod model;
mod port;
mod settings;
mod validation;

pub use client::{IDENTIFY_PATH, PARTNER_ID_HEADER, PARTNER_KEY_HEADER, PartnerClient};
pub use config::{ClientConfig, DEFAULT_TIMEOUT, ResolvedConfig};
pub use credentials::PartnerCredentials;
pub use envelope::{ApiEnvelope, ApiErrorEnvelope, FieldErrors};
pub use error::{ClientError, ConfigError};
pub use model::{IdentifyRequest, IdentifyResponse};
pub use port::UserIdentifier;
pub use settings::{DEFAULT_API_URL, PartnerSettings};
pub use validation::is_valid_uuid_v4;
