use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use vitals_core::probe::DEFAULT_TIMEOUT_SECS;
use vitals_core::ProbeTarget;

mod check_cmd;
mod probe;
mod status_cmd;

#[derive(Parser)]
#[command(name = "vitals", about = "Vitals CLI - health probe for the imaging agents")]
struct Cli {
    /// Per-check timeout in seconds (0 disables it)
    #[arg(long, env = "VITALS_TIMEOUT", default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Probe a single health endpoint
    Check {
        /// Health endpoint URL
        url: String,
    },

    /// Probe several services and report the overall status
    Status {
        /// Service to probe as `name=url` (repeatable; defaults to both local agents)
        #[arg(long = "target")]
        targets: Vec<ProbeTarget>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let healthy = match cli.command {
        Commands::Check { url } => check_cmd::run(&url, cli.timeout).await?,
        Commands::Status { targets } => status_cmd::run(targets, cli.timeout).await?,
    };

    Ok(if healthy {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
