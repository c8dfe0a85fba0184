use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use airdata_client::fetch::fetch_text;
use airdata_client::{create_client_with, logging, ClientSettings};

/// Issue a GET against the air data API and print the raw response body.
#[derive(Parser, Debug)]
#[command(name = "airdata-client", version, about)]
struct Cli {
    /// Request path, resolved against the base URL (e.g. `/stations`).
    path: String,

    /// Base URL override.
    #[arg(long)]
    base_url: Option<String>,

    /// Settings file (defaults to the per-user config directory).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Request timeout in seconds.
    #[arg(long)]
    timeout: Option<u64>,

    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut settings = match &cli.config {
        Some(path) => ClientSettings::load_from(path),
        None => ClientSettings::load(),
    }
    .context("Failed to load settings")?;

    if cli.timeout.is_some() {
        settings.timeout_secs = cli.timeout;
    }

    let client = create_client_with(cli.base_url.as_deref(), &settings)?;
    log::debug!("Using base URL {:?}", client.base_url());

    let body = fetch_text(&client, &cli.path).await?;
    println!("{}", body);

    Ok(())
}
