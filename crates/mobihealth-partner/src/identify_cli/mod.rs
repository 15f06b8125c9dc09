//! CLI support for identifying a partner user from the command line.
//!
//! This module provides parsing, execution and rendering helpers for the
//! `partner-identify` binary. The binary delegates to these functions so they
//! can be exercised in tests without spawning a subprocess or reaching the
//! network.

mod error;

pub use error::CliError;

use crate::error::ClientError;
use crate::model::IdentifyRequest;
use crate::port::UserIdentifier;

/// Parsed options for the identify CLI.
#[derive(Debug, Clone)]
pub struct Options {
    request: IdentifyRequest,
}

impl Options {
    /// Returns the request assembled from the supplied flags.
    ///
    /// # Example
    ///
    /// ```
    /// use mobihealth_partner::identify_cli::{ParseOutcome, parse_args};
    ///
    /// let args = vec!["--email".to_string(), "user@example.com".to_string()];
    /// let ParseOutcome::Options(options) = parse_args(args.into_iter()).expect("parse") else {
    ///     panic!("expected options");
    /// };
    ///
    /// assert_eq!(options.request().email.as_deref(), Some("user@example.com"));
    /// ```
    #[must_use]
    pub const fn request(&self) -> &IdentifyRequest {
        &self.request
    }
}

/// Outcome of parsing CLI arguments.
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    /// Show help output and exit successfully.
    Help,
    /// Continue with the parsed options.
    Options(Options),
}

/// Parses CLI arguments into an identify request.
///
/// Presence of an email or phone number is not checked here; the client
/// rejects such requests before contacting the API.
///
/// # Errors
///
/// Returns [`CliError`] when a flag is missing its value or an argument is not
/// recognized.
///
/// # Example
///
/// ```
/// use mobihealth_partner::identify_cli::{ParseOutcome, parse_args};
///
/// let args = vec![
///     "--phone-number".to_string(),
///     "+1234567890".to_string(),
///     "--country-code".to_string(),
///     "US".to_string(),
/// ];
///
/// let outcome = parse_args(args.into_iter()).expect("parse args");
/// assert!(matches!(outcome, ParseOutcome::Options(_)));
/// ```
pub fn parse_args<I>(mut args: I) -> Result<ParseOutcome, CliError>
where
    I: Iterator<Item = String>,
{
    let mut request = IdentifyRequest::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(ParseOutcome::Help),
            "--email" => request.email = Some(next_value(&mut args, "--email")?),
            "--phone-number" => {
                request.phone_number = Some(next_value(&mut args, "--phone-number")?);
            }
            "--country-code" => {
                request.country_code = Some(next_value(&mut args, "--country-code")?);
            }
            "--first-name" => request.first_name = Some(next_value(&mut args, "--first-name")?),
            "--last-name" => request.last_name = Some(next_value(&mut args, "--last-name")?),
            "--gender" => request.gender = Some(next_value(&mut args, "--gender")?),
            "--date-of-birth" => {
                request.date_of_birth = Some(next_value(&mut args, "--date-of-birth")?);
            }
            _ => return Err(CliError::UnknownArgument { value: arg }),
        }
    }

    Ok(ParseOutcome::Options(Options { request }))
}

/// Identifies the user described by `options` and renders the result as JSON.
///
/// # Errors
///
/// Returns [`CliError::Client`] when the identify call fails and
/// [`CliError::Render`] when the response cannot be serialized.
pub async fn run_identify<I>(identifier: &I, options: &Options) -> Result<String, CliError>
where
    I: UserIdentifier + ?Sized,
{
    let user = identifier.identify(options.request()).await?;
    serde_json::to_string_pretty(&user).map_err(|error| CliError::Render {
        message: error.to_string(),
    })
}

/// Formats the failure message emitted by the CLI.
///
/// API rejections include their status code and any per-field validation
/// messages, one field per line.
///
/// # Example
///
/// ```
/// use mobihealth_partner::ClientError;
/// use mobihealth_partner::identify_cli::{CliError, failure_message};
///
/// let err = CliError::from(ClientError::api("Unauthorized", 401_u16, None));
/// assert_eq!(failure_message(&err), "API Error (401): Unauthorized");
/// ```
#[must_use]
pub fn failure_message(error: &CliError) -> String {
    let CliError::Client {
        source:
            ClientError::Api {
                message,
                status_code,
                errors,
            },
    } = error
    else {
        return format!("Error: {error}");
    };

    let mut rendered = format!("API Error ({status_code}): {message}");
    if let Some(field_errors) = errors {
        rendered.push_str("\nValidation errors:");
        for (field, messages) in field_errors {
            rendered.push_str(&format!("\n  {field}: {}", messages.join("; ")));
        }
    }
    rendered
}

fn next_value<I>(args: &mut I, flag: &'static str) -> Result<String, CliError>
where
    I: Iterator<Item = String>,
{
    args.next().ok_or(CliError::MissingValue { flag })
}
