//! CLI command runner

use anyhow::Context;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tokio_util::sync::CancellationToken;

use crate::api::{with_cancellation, ShipmentClient};
use crate::commands::{self, AppState};
use crate::config::{Settings, TmsCredentials};
use crate::export::{export_loads_to_csv, export_to_json, ExportFormat};
use crate::models::Load;

use super::{Cli, Commands, CreateArgs, ExportArgs, ServeArgs};

const DEFAULT_EXPORT_DIR: &str = "./tms_export";

/// Run the CLI application
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let settings = match &cli.config {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load()?,
    };

    let Some(command) = cli.command else {
        println!("TMS bridge");
        println!("Use --help for usage information");
        return Ok(());
    };

    let client = connect(&settings)?;
    let cancel = CancellationToken::new();
    spawn_ctrl_c(cancel.clone());

    match command {
        Commands::Serve(args) => run_serve(&settings, client, args, cancel).await,
        Commands::Token => run_token(&client, &cancel).await,
        Commands::List(args) => {
            let page = with_cancellation(&cancel, client.list_shipments(args.page)).await?;
            print_json(&page)
        }
        Commands::Get { id } => {
            let details = with_cancellation(&cancel, client.get_shipment_details(&id)).await?;
            print_json(&details)
        }
        Commands::Create(args) => run_create(&client, args, &cancel).await,
        Commands::Export(args) => run_export(&settings, &client, args, &cancel).await,
    }
}

/// Build a client from the environment, with the settings file as base-URL fallback
fn connect(settings: &Settings) -> anyhow::Result<ShipmentClient> {
    let credentials = TmsCredentials::from_env(settings.base_url.as_deref())?;

    tracing::debug!("Using TMS at {}", credentials.base_url);
    Ok(ShipmentClient::new(credentials, settings.request_timeout())?)
}

fn spawn_ctrl_c(cancel: CancellationToken) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Interrupt received, cancelling");
            cancel.cancel();
        }
    });
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    let mut out = io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, value)?;
    writeln!(out)?;
    Ok(())
}

async fn run_serve(
    settings: &Settings,
    client: ShipmentClient,
    args: ServeArgs,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let bind = args.bind.unwrap_or_else(|| settings.bind_address.clone());
    let listener = tokio::net::TcpListener::bind(&bind)
        .await
        .with_context(|| format!("failed to bind {}", bind))?;

    commands::serve(listener, AppState::new(client), cancel.cancelled_owned()).await?;
    tracing::info!("Server stopped");
    Ok(())
}

async fn run_token(client: &ShipmentClient, cancel: &CancellationToken) -> anyhow::Result<()> {
    let auth = client.token_manager();
    with_cancellation(cancel, auth.get_token()).await?;

    match auth.expires_at().await {
        Some(expires_at) => println!("✓ Authenticated, token valid until {}", expires_at),
        None => println!("✓ Authenticated"),
    }
    Ok(())
}

async fn run_create(
    client: &ShipmentClient,
    args: CreateArgs,
    cancel: &CancellationToken,
) -> anyhow::Result<()> {
    let load = read_load(&args.file)?;
    let response = with_cancellation(cancel, client.create_shipment(&load)).await?;
    println!("✓ Created shipment {}", response.shipment_id);
    print_json(&response)
}

fn read_load(path: &Path) -> anyhow::Result<Load> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("invalid load in {}", path.display()))
}

/// Walk pages until the requested count or the TMS reports no more data
async fn run_export(
    settings: &Settings,
    client: &ShipmentClient,
    args: ExportArgs,
    cancel: &CancellationToken,
) -> anyhow::Result<()> {
    let formats = args
        .format
        .iter()
        .map(|f| f.parse::<ExportFormat>())
        .collect::<Result<Vec<_>, _>>()?;

    let output = args
        .output
        .or_else(|| settings.export_directory.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_EXPORT_DIR));

    let mut loads = Vec::new();
    for page in 1..=args.pages {
        print!("Fetching page {}... ", page);
        io::stdout().flush()?;

        let result = with_cancellation(cancel, client.list_shipments(page)).await?;
        println!("✓ {} records", result.shipments.len());

        let more = result.more_available();
        loads.extend(result.shipments);
        if !more {
            break;
        }
    }

    for format in formats {
        let path = output.join(format!("loads.{}", format.extension()));
        let count = match format {
            ExportFormat::Csv => export_loads_to_csv(&loads, &path)?,
            ExportFormat::Json => export_to_json(&loads, &path)?,
        };
        println!("✓ Wrote {} loads to {}", count, path.display());
    }

    Ok(())
}
