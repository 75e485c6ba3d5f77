mod commands;
mod utils;

use clap::{Parser, Subcommand};
use commands::{container_list, pod_inspect, pod_list, PsArgs};
use podview_snapshot::StaticRuntime;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "podview")]
#[command(about = "Inspect container and pod snapshots of a runtime state dump")]
struct Cli {
    /// Runtime state dump to read
    #[arg(
        long,
        global = true,
        env = "PODVIEW_STATE",
        default_value = "/tmp/podview/state.json"
    )]
    state: PathBuf,

    /// Print JSON instead of a table
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List containers
    #[command(visible_alias = "list")]
    Ps(PsArgs),
    /// List pods
    Pods,
    /// Show a single pod and its containers
    Pod {
        /// Pod ID or name
        pod_id: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    tracing::info!("Loading state dump {:?}", cli.state);
    let runtime = StaticRuntime::load(&cli.state)
        .await
        .map_err(|e| format!("Failed to load state from {}: {}", cli.state.display(), e))?;

    match cli.command {
        Commands::Ps(args) => {
            container_list(&runtime, args, cli.json).await?;
        }
        Commands::Pods => {
            pod_list(&runtime, cli.json).await?;
        }
        Commands::Pod { pod_id } => {
            pod_inspect(&runtime, &pod_id, cli.json).await?;
        }
    }

    Ok(())
}
