use crate::runtime::NamespaceLookup;
use crate::types::{ContainerStatus, MountSpec, PortSpec, StateBundle};
use chrono::{DateTime, SecondsFormat, Utc};
use podview_core::{Container, ContainerMount, ContainerPortMappings, ListPodContainerInfo};

/// Turns container state bundles into wire snapshots.
pub struct ContainerSnapshotBuilder<'a> {
    namespaces: &'a dyn NamespaceLookup,
}

impl<'a> ContainerSnapshotBuilder<'a> {
    pub fn new(namespaces: &'a dyn NamespaceLookup) -> Self {
        Self { namespaces }
    }

    pub async fn build(&self, container_id: &str, bundle: &StateBundle) -> Container {
        self.build_at(container_id, bundle, Utc::now()).await
    }

    /// Same as [`build`](Self::build) with uptime measured against `now`.
    pub async fn build_at(
        &self,
        container_id: &str,
        bundle: &StateBundle,
        now: DateTime<Utc>,
    ) -> Container {
        tracing::debug!("Building snapshot for container: {}", container_id);

        let namespaces = self.namespaces.namespaces(bundle.pid).await;

        Container {
            id: container_id.to_string(),
            image: bundle.image_name.clone(),
            image_id: bundle.image_id.clone(),
            command: bundle.args.clone(),
            created_at: format_timestamp(bundle.created_at),
            running_for: format_duration(now.signed_duration_since(bundle.created_at)),
            status: bundle.state.to_string(),
            ports: bundle.port_mappings.iter().map(port_mapping_to_wire).collect(),
            rootfs_size: bundle.size.map(|size| size.rootfs_size),
            rw_size: bundle.size.map(|size| size.rw_size),
            names: bundle.name.clone(),
            labels: bundle.labels.clone(),
            mounts: bundle.mounts.iter().map(mount_to_wire).collect(),
            container_running: bundle.state == ContainerStatus::Running,
            namespaces: Some(namespaces),
        }
    }
}

/// The reduced per-container view embedded in pod snapshots.
pub fn pod_container_info(container_id: &str, bundle: &StateBundle) -> ListPodContainerInfo {
    ListPodContainerInfo {
        name: bundle.name.clone(),
        id: container_id.to_string(),
        status: bundle.state.to_string(),
    }
}

fn port_mapping_to_wire(p: &PortSpec) -> ContainerPortMappings {
    ContainerPortMappings {
        host_port: p.host_port.to_string(),
        host_ip: p.host_ip.clone(),
        protocol: p.protocol.clone(),
        container_port: p.container_port.to_string(),
    }
}

fn mount_to_wire(m: &MountSpec) -> ContainerMount {
    ContainerMount {
        destination: m.destination.clone(),
        mount_type: m.mount_type.clone(),
        source: m.source.clone(),
        options: m.options.clone(),
    }
}

pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Renders an uptime as `1h2m3s`. Negative durations render as `0s`.
pub fn format_duration(d: chrono::Duration) -> String {
    let total = d.num_seconds();
    if total <= 0 {
        return "0s".to_string();
    }

    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    if hours > 0 {
        format!("{}h{}m{}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m{}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}
