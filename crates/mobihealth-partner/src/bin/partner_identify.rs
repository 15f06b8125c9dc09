//! Identify a partner user against the MobiHealth Partner API.
//!
//! Connection settings come from `MOBIHEALTH_*` environment variables; the
//! user to identify comes from command-line flags. This binary delegates to
//! `mobihealth_partner::identify_cli` for parsing and rendering.

use std::env;
use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;

use mobihealth_partner::identify_cli::{
    CliError, ParseOutcome, failure_message, parse_args, run_identify,
};
use mobihealth_partner::{PartnerClient, PartnerSettings};
use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

const PROGRAM_NAME: &str = "partner-identify";

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{}", failure_message(&err)) {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), CliError> {
    match parse_args(env::args().skip(1))? {
        ParseOutcome::Help => {
            print_usage(io::stdout().lock());
            Ok(())
        }
        ParseOutcome::Options(options) => {
            let settings = PartnerSettings::load_from_iter([OsString::from(PROGRAM_NAME)])
                .map_err(|error| CliError::Settings {
                    message: error.to_string(),
                })?;
            let client = PartnerClient::new(settings.into_client_config())?;
            let rendered = run_identify(&client, &options).await?;
            write_success(&rendered);
            Ok(())
        }
    }
}

fn print_usage(mut out: impl Write) {
    let usage = concat!(
        "Usage: partner-identify (--email <email> | --phone-number <phone>) [options]\n",
        "\n",
        "Options:\n",
        "  --email <email>          Email address of the user\n",
        "  --phone-number <phone>   Phone number of the user\n",
        "  --country-code <code>    Country code for the phone number\n",
        "  --first-name <name>      Given name\n",
        "  --last-name <name>       Family name\n",
        "  --gender <gender>        Gender\n",
        "  --date-of-birth <date>   Date of birth (YYYY-MM-DD)\n",
        "  -h, --help               Print this help output\n",
        "\n",
        "Environment:\n",
        "  MOBIHEALTH_API_URL         API base URL (defaults to https://api.mobihealth.com)\n",
        "  MOBIHEALTH_PARTNER_ID      Partner identifier (UUID v4)\n",
        "  MOBIHEALTH_PARTNER_SECRET  Partner secret key\n",
        "  MOBIHEALTH_TIMEOUT_MS      Request timeout in milliseconds (defaults to 30000)\n",
    );
    if let Err(err) = out.write_all(usage.as_bytes()) {
        drop(err);
    }
}

fn write_success(message: &str) {
    if let Err(err) = writeln!(io::stdout().lock(), "{message}") {
        drop(err);
    }
}
