//! marketplace - Marketplace account CLI
//!
//! Signs in against the marketplace API and keeps the session on disk so later
//! invocations stay signed in. Output is JSON on stdout; logs go to stderr.
//!
//! # Examples
//!
//! ```bash
//! marketplace login --login alice@x.com --password secret123 --pretty
//! marketplace status
//! marketplace update-profile --whatsapp-number "+229 97 00 00 00"
//! marketplace logout
//! ```

use mp_cli::{Cli, CliError, Result as CliResult, Runner, connect, logger};
use mp_config::Config;

use std::process::ExitCode;

use clap::Parser;
use log::error;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {}", e.user_message());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliResult<String> {
    let mut config = Config::load()?;

    // Explicit flag > env var > config file > default
    if let Some(server) = cli.server {
        config.api.base_url = server;
    }
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;
    config.log_summary();

    let runner = Runner::new(connect(&config)?);
    let value = runner.run(cli.command).await?;

    let output = if cli.pretty {
        serde_json::to_string_pretty(&value)
    } else {
        serde_json::to_string(&value)
    };
    output.map_err(CliError::from)
}
