use crate::commands::Commands;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "marketplace")]
#[command(about = "Marketplace account CLI: sign in, register and manage your profile")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API base URL (overrides config.toml and MP_API_BASE_URL)
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
