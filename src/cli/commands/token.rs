use chrono::{TimeZone, Utc};
use clap::Subcommand;
use serde_json::json;

use crate::auth::{decode_token, encode_claims, Claims};
use crate::cli::utils::{output_success, output_value};
use crate::cli::OutputFormat;
use crate::config;
use crate::database::ProfileId;

/// Ten years
const MAX_TOKEN_HOURS: u64 = 24 * 365 * 10;

#[derive(Subcommand)]
pub enum TokenCommands {
    #[command(about = "Mint a token for a profile id")]
    Issue {
        #[arg(help = "Profile id the token belongs to")]
        id: ProfileId,
        #[arg(long, help = "Email recorded in the token claims")]
        email: Option<String>,
        #[arg(
            long,
            value_parser = clap::value_parser!(u64).range(1..=MAX_TOKEN_HOURS),
            help = "Lifetime in hours (defaults to SECURITY_JWT_EXPIRY_HOURS)"
        )]
        hours: Option<u64>,
    },

    #[command(about = "Verify a token and print its claims")]
    Inspect {
        #[arg(help = "Token to inspect")]
        token: String,
    },
}

pub fn handle(cmd: TokenCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    let security = &config::config().security;

    match cmd {
        TokenCommands::Issue { id, email, hours } => {
            let hours = hours.unwrap_or(security.jwt_expiry_hours);
            let claims = Claims::new(id, email.unwrap_or_default(), hours)?;
            let token = encode_claims(security, &claims)?;

            match output_format {
                OutputFormat::Json => output_success(
                    output_format,
                    &format!("Issued token for profile {}", id),
                    Some(json!({
                        "token": token,
                        "profile_id": id,
                        "expires_at": timestamp(claims.exp),
                    })),
                ),
                OutputFormat::Text => {
                    println!("{}", token);
                    Ok(())
                }
            }
        }
        TokenCommands::Inspect { token } => {
            let claims = decode_token(security, &token)?;
            output_value(
                output_format,
                &json!({
                    "profile_id": claims.sub,
                    "email": claims.email,
                    "issued_at": timestamp(claims.iat),
                    "expires_at": timestamp(claims.exp),
                }),
            )
        }
    }
}

fn timestamp(secs: i64) -> String {
    Utc.timestamp_opt(secs, 0)
        .single()
        .map(|t| t.to_rfc3339())
        .unwrap_or_else(|| secs.to_string())
}
