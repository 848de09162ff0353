use clap::Subcommand;

use crate::cli::utils::output_value;
use crate::cli::OutputFormat;
use crate::config;

#[derive(Subcommand)]
pub enum ConfigCommands {
    #[command(about = "Print the effective configuration with secrets masked")]
    Show,

    #[command(about = "Check that the configuration can start a server")]
    Check,
}

pub fn handle(cmd: ConfigCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    let config = config::config();

    match cmd {
        ConfigCommands::Show => output_value(output_format, &serde_json::to_value(config.redacted())?),
        ConfigCommands::Check => {
            config.validate()?;
            crate::cli::utils::output_success(
                output_format,
                &format!("Configuration is valid for {:?}", config.environment),
                None,
            )
        }
    }
}
