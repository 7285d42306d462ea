use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use cp_scaffold::cli::Cli;
use cp_scaffold::config::Config;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cp_scaffold=info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let config = Config::from_env();
    cli.run(&config).await
}
