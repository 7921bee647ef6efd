mod cli;
mod config;

use anyhow::{Context, Result, bail};
use clap::Parser;
use cli::{CliArgs, Command};
use client::ClusterApi;
use protocol::{ConnectRequestParams, ConnectResponse, STATUS_ERROR};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    let args = CliArgs::parse();

    let mut cfg = config::CtlConfig::load_or_default(&args.config)
        .with_context(|| format!("Failed to load config from {}", args.config))?;

    // Override with command line arguments
    if let Some(server) = args.server {
        cfg.server_url = server;
    }
    if let Some(log_level) = args.log_level {
        cfg.log_level = log_level;
    }
    if let Some(log_dir) = args.log_dir {
        cfg.log_dir = Some(log_dir);
    }

    let _guard = common::init_tracing(cfg.log_dir.as_deref(), &cfg.log_file, &cfg.log_level);

    info!("Using server {}", cfg.server_url);
    let api = ClusterApi::for_server(&cfg.server_url);

    let response = run(&api, args.command).await?;
    println!("{}", serde_json::to_string_pretty(&response)?);

    ensure_not_error(&response)
}

/// An `error` status fails the command even though the request went through.
fn ensure_not_error(response: &ConnectResponse) -> Result<()> {
    if response.status == STATUS_ERROR {
        let msg = response.message().unwrap_or("no message");
        error!("Server reported an error: {}", msg);
        bail!("server reported an error: {}", msg);
    }
    Ok(())
}

async fn run(api: &ClusterApi, command: Command) -> Result<ConnectResponse> {
    match command {
        Command::Connect { target } => {
            let params = ConnectRequestParams::try_from(target)?;
            info!("Connecting to cluster: {:?}", params);
            api.connect_to_cluster(params)
                .await
                .context("Connect request failed")
        }
        Command::Status => api
            .check_cluster_connection()
            .await
            .context("Status request failed"),
    }
}
