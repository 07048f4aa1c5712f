// TMS bridge - CLI binary
// Run with: cargo run --bin tms-bridge -- [args]

use clap::Parser;
use tms_bridge_lib::cli::{runner, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Credentials may live in a local .env file
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    tms_bridge_lib::init_logging(cli.verbose);

    if cli.verbose {
        tracing::debug!("Verbose mode enabled");
    }

    runner::run(cli).await
}
