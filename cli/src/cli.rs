use anyhow::bail;
use clap::{Parser, Subcommand};
use protocol::ConnectRequestParams;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

#[derive(Parser, Debug)]
#[command(name = "cluster-ctl")]
#[command(author, version, about = "Connect the server to a compute cluster", long_about = None)]
pub struct CliArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "cluster-ctl.toml")]
    pub config: String,

    /// Override server URL, e.g. http://127.0.0.1:9000
    #[arg(short, long, env = "CLUSTER_CTL_SERVER")]
    pub server: Option<String>,

    /// Override log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Override log directory
    #[arg(long)]
    pub log_dir: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Connect the server to a cluster
    Connect {
        #[command(subcommand)]
        target: ConnectTarget,
    },
    /// Show the current cluster connection
    Status,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConnectTarget {
    /// Start a cluster on the server host
    Local {
        /// Number of CPU workers
        #[arg(short, long)]
        workers: Option<u32>,

        /// CUDA workers as DEVICE=COUNT, repeatable; each device at most once
        #[arg(long = "cuda", value_parser = parse_cuda)]
        cudas: Vec<(u32, u32)>,
    },
    /// Attach to a running scheduler
    Tcp {
        /// Scheduler address, e.g. tcp://10.0.0.1:8786
        #[arg(short, long)]
        address: String,
    },
}

impl TryFrom<ConnectTarget> for ConnectRequestParams {
    type Error = anyhow::Error;

    fn try_from(target: ConnectTarget) -> anyhow::Result<Self> {
        match target {
            ConnectTarget::Local { workers, cudas } => {
                let mut devices = BTreeMap::new();
                for (device, count) in cudas {
                    match devices.entry(device) {
                        Entry::Vacant(slot) => {
                            slot.insert(count);
                        }
                        Entry::Occupied(_) => {
                            bail!("CUDA device {} given more than once", device)
                        }
                    }
                }
                Ok(ConnectRequestParams::Local {
                    num_workers: workers,
                    cudas: devices,
                })
            }
            ConnectTarget::Tcp { address } => Ok(ConnectRequestParams::Tcp { address }),
        }
    }
}

fn parse_cuda(value: &str) -> Result<(u32, u32), String> {
    let (device, count) = value
        .split_once('=')
        .ok_or_else(|| format!("expected DEVICE=COUNT, got '{}'", value))?;
    let device = device
        .trim()
        .parse::<u32>()
        .map_err(|e| format!("invalid device id '{}': {}", device, e))?;
    let count = count
        .trim()
        .parse::<u32>()
        .map_err(|e| format!("invalid worker count '{}': {}", count, e))?;
    Ok((device, count))
}
