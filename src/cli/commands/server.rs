use anyhow::Context;
use clap::Subcommand;
use serde_json::Value;

use crate::cli::utils::output_value;
use crate::cli::OutputFormat;
use crate::config;

#[derive(Subcommand)]
pub enum ServerCommands {
    #[command(about = "Check server health status from the /health endpoint")]
    Health {
        #[arg(long, help = "Server base URL (defaults to PROFILES_API_URL or the configured port)")]
        url: Option<String>,
    },

    #[command(about = "Show server information from the API root endpoint")]
    Info {
        #[arg(long, help = "Server base URL (defaults to PROFILES_API_URL or the configured port)")]
        url: Option<String>,
    },
}

pub async fn handle(cmd: ServerCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        ServerCommands::Health { url } => {
            let base = resolve_base_url(url);
            let (status, body) = fetch_json(&format!("{}/health", base)).await?;
            output_value(output_format, &body)?;
            if !status.is_success() {
                anyhow::bail!("server at {} is unhealthy ({})", base, status);
            }
            Ok(())
        }
        ServerCommands::Info { url } => {
            let base = resolve_base_url(url);
            let (_, body) = fetch_json(&format!("{}/", base)).await?;
            output_value(output_format, &body)
        }
    }
}

fn resolve_base_url(url: Option<String>) -> String {
    url.or_else(|| std::env::var("PROFILES_API_URL").ok())
        .unwrap_or_else(|| format!("http://127.0.0.1:{}", config::config().server.port))
        .trim_end_matches('/')
        .to_string()
}

async fn fetch_json(url: &str) -> anyhow::Result<(reqwest::StatusCode, Value)> {
    let res = reqwest::get(url)
        .await
        .with_context(|| format!("failed to reach {}", url))?;
    let status = res.status();
    let body = res
        .json::<Value>()
        .await
        .with_context(|| format!("invalid JSON from {}", url))?;
    Ok((status, body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_url_wins_and_loses_trailing_slash() {
        assert_eq!(
            resolve_base_url(Some("http://example.com:9000/".to_string())),
            "http://example.com:9000"
        );
    }
}
