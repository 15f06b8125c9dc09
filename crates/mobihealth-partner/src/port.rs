//! Port for resolving partner users to MobiHealth identities.
//!
//! Callers that only need identification can depend on this trait instead of
//! the concrete HTTP client, which keeps their own tests free of network I/O.

use async_trait::async_trait;

use crate::error::ClientError;
use crate::model::{IdentifyRequest, IdentifyResponse};

/// Find-or-create lookup of a partner user.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserIdentifier: Send + Sync {
    /// Return the existing user matching `request`, or the newly created one.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use mobihealth_partner::{
    ///     ClientConfig, IdentifyRequest, PartnerClient, UserIdentifier,
    /// };
    ///
    /// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = PartnerClient::new(ClientConfig::new(
    ///     "https://api.mobihealth.com",
    ///     "123e4567-e89b-42d3-a456-426614174000",
    ///     "secret",
    /// ))?;
    /// let identifier: &dyn UserIdentifier = &client;
    /// let user = identifier
    ///     .identify(&IdentifyRequest::by_email("user@example.com"))
    ///     .await?;
    /// println!("{}", user.public_id);
    /// # Ok(())
    /// # }
    /// ```
    async fn identify(&self, request: &IdentifyRequest) -> Result<IdentifyResponse, ClientError>;
}
