use clap::Args;
use podview_core::PsOpts;
use podview_snapshot::{ContainerLister, StaticRuntime};

use crate::utils::{ellipsize, format_ports, short_id};

#[derive(Args, Debug, Default)]
pub struct PsArgs {
    /// Show all containers (default shows just running)
    #[arg(long, short)]
    all: bool,

    /// Show n last created containers (includes all states)
    #[arg(long, short = 'n')]
    last: Option<i64>,

    /// Show the latest created container (includes all states)
    #[arg(long, short)]
    latest: bool,

    /// Don't truncate output
    #[arg(long)]
    no_trunc: bool,

    /// Only show containers that belong to a pod
    #[arg(long)]
    pod: bool,

    /// Display total file sizes (always on)
    #[arg(long, short)]
    size: bool,

    /// Display namespace information (always on)
    #[arg(long)]
    namespace: bool,

    /// Sort output by created, id, image, names, runningfor or status
    #[arg(long)]
    sort: Option<String>,

    /// Sync container state with the OCI runtime
    #[arg(long)]
    sync: bool,
}

impl PsArgs {
    /// Unset flags stay `None` so they resolve to their defaults.
    pub fn into_opts(self) -> PsOpts {
        PsOpts {
            all: self.all,
            last: self.last,
            latest: self.latest.then_some(true),
            no_trunc: self.no_trunc.then_some(true),
            pod: self.pod.then_some(true),
            quiet: None,
            size: self.size.then_some(true),
            sort: self.sort,
            sync: self.sync.then_some(true),
            namespace: self.namespace.then_some(true),
        }
    }
}

pub async fn container_list(
    runtime: &StaticRuntime,
    args: PsArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let no_trunc = args.no_trunc;
    let containers = ContainerLister::new(runtime, runtime)
        .list(args.into_opts())
        .await
        .map_err(|e| format!("Failed to list containers: {}", e))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&containers)?);
        return Ok(());
    }

    if containers.is_empty() {
        println!("No containers found");
        return Ok(());
    }

    println!(
        "{:<15} {:<20} {:<25} {:<12} {:<10} {:<25} {:<20}",
        "CONTAINER ID", "IMAGE", "COMMAND", "RUNNING FOR", "STATUS", "PORTS", "NAMES"
    );

    for container in containers {
        let id = if no_trunc {
            container.id.as_str()
        } else {
            short_id(&container.id)
        };
        let command = format!("\"{}\"", ellipsize(&container.command.join(" "), 21));

        println!(
            "{:<15} {:<20} {:<25} {:<12} {:<10} {:<25} {:<20}",
            id,
            ellipsize(&container.image, 18),
            command,
            container.running_for,
            container.status,
            format_ports(&container.ports),
            container.names
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_flags_stay_unset() {
        let opts = PsArgs::default().into_opts();
        assert_eq!(opts.latest, None);
        assert_eq!(opts.size, None);
        assert_eq!(opts.last, None);
    }

    #[test]
    fn test_set_flags_are_forwarded() {
        let opts = PsArgs {
            all: true,
            last: Some(2),
            sort: Some("names".to_string()),
            pod: true,
            ..Default::default()
        }
        .into_opts();
        assert!(opts.all);
        assert_eq!(opts.last, Some(2));
        assert_eq!(opts.sort.as_deref(), Some("names"));
        assert_eq!(opts.pod, Some(true));
    }
}
