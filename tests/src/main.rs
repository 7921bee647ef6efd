pub mod integration_tests;

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use protocol::ConnectRequestParams;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "integration-tests")]
#[command(about = "Integration testing tool for the cluster connection API")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run integration tests against a server
    Integration {
        /// Server URL (e.g., "http://127.0.0.1:9000")
        #[arg(short, long, default_value = "http://127.0.0.1:9000")]
        server: String,

        /// Attach to this scheduler instead of starting a local cluster
        #[arg(long)]
        tcp_address: Option<String>,

        /// Worker count for the local cluster
        #[arg(long, default_value = "2")]
        workers: u32,
    },
    /// Start the mock API server
    MockServer {
        /// HTTP server port
        #[arg(long, default_value = "9000")]
        port: u16,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Integration {
            server,
            tcp_address,
            workers,
        } => {
            tracing::info!("Running integration tests against {}", server);
            let params = match tcp_address {
                Some(address) => ConnectRequestParams::tcp(address),
                None => ConnectRequestParams::local(Some(workers)),
            };
            let results = integration_tests::run_all_tests(&server, params).await?;
            if results.failed > 0 {
                bail!("{} of {} tests failed", results.failed, results.total_tests);
            }
        }
        Commands::MockServer { port } => {
            tracing::info!("Starting mock API server on port {}", port);
            mock_server::run_mock_server(port).await?;
        }
    }

    Ok(())
}
