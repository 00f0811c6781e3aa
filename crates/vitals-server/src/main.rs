use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use vitals_core::{Error, ServiceProfile, SystemClock};
use vitals_server::Responder;

/// Which placeholder agent this process stands in for.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum Service {
    /// Segmentation Agent on localhost:8001
    Segmentation,
    /// Analysis Agent on localhost:8003
    Analysis,
}

#[derive(Parser)]
#[command(name = "vitals-agent", about = "Health check responder for the imaging agents")]
struct Args {
    /// Agent to answer for
    #[arg(long, env = "VITALS_SERVICE", value_enum)]
    service: Service,

    /// Bind host (defaults to the agent's own)
    #[arg(long, env = "VITALS_HOST")]
    host: Option<String>,

    /// Bind port (defaults to the agent's own)
    #[arg(long, env = "VITALS_PORT")]
    port: Option<u16>,
}

impl Args {
    fn profile(&self) -> ServiceProfile {
        let mut profile = match self.service {
            Service::Segmentation => ServiceProfile::segmentation(),
            Service::Analysis => ServiceProfile::analysis(),
        };
        if let Some(host) = &self.host {
            profile = profile.with_host(host.clone());
        }
        if let Some(port) = self.port {
            profile = profile.with_port(port);
        }
        profile
    }
}

async fn run(profile: ServiceProfile) -> Result<(), Error> {
    let responder = Responder::bind(profile, Arc::new(SystemClock)).await?;

    let profile = responder.bound_profile();
    println!("{} health check running on {}", profile.name, profile.base_url());
    println!("Health endpoint: {}", profile.health_url());

    responder.run().await
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    match run(args.profile()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "health responder stopped");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
