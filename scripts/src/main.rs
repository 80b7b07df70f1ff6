use std::process::ExitCode;

use clap::Parser;
use dotenv::dotenv;
use tracing_subscriber::EnvFilter;
use vault_scripts::cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    // Load a `.env` file before parsing so that `env = ...` args pick it up
    dotenv().ok();
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
