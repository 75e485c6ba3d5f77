use crate::container::{format_timestamp, pod_container_info};
use crate::error::SnapshotError;
use crate::runtime::{ContainerSource, PodHandle};
use crate::types::{ContainerStatus, ListOptions};
use podview_core::ListPodData;

const POD_CREATED: &str = "Created";
const POD_RUNNING: &str = "Running";
const POD_PAUSED: &str = "Paused";
const POD_STOPPED: &str = "Stopped";
const POD_EXITED: &str = "Exited";
const POD_ERROR: &str = "Error";

/// Aggregate status of a pod from the states of its members.
pub fn pod_status(states: &[ContainerStatus]) -> &'static str {
    if states.is_empty() {
        return POD_CREATED;
    }

    let (mut running, mut paused, mut stopped, mut failed) = (0, 0, 0, 0);
    for state in states {
        match state {
            ContainerStatus::Running => running += 1,
            ContainerStatus::Paused => paused += 1,
            ContainerStatus::Stopped | ContainerStatus::Exited => stopped += 1,
            ContainerStatus::Created | ContainerStatus::Configured => {}
            ContainerStatus::Unknown | ContainerStatus::Removing => failed += 1,
        }
    }

    if running > 0 {
        POD_RUNNING
    } else if paused == states.len() {
        POD_PAUSED
    } else if stopped == states.len() {
        POD_EXITED
    } else if stopped > 0 {
        POD_STOPPED
    } else if failed > 0 {
        POD_ERROR
    } else {
        POD_CREATED
    }
}

/// Builds pod snapshots.
///
/// A pod build stops at the first member whose state cannot be read and
/// returns that error; no partial pod snapshot is ever produced. Member
/// states are read one by one, so the result is not a consistent
/// point-in-time view of the pod.
pub struct PodSnapshotBuilder<'a> {
    containers: &'a dyn ContainerSource,
}

impl<'a> PodSnapshotBuilder<'a> {
    pub fn new(containers: &'a dyn ContainerSource) -> Self {
        Self { containers }
    }

    pub async fn build(
        &self,
        pod: &dyn PodHandle,
        opts: &ListOptions,
    ) -> Result<ListPodData, SnapshotError> {
        tracing::debug!("Building snapshot for pod: {}", pod.id());

        let status = pod.status().await.map_err(|source| SnapshotError::PodStatus {
            pod: pod.id().to_string(),
            source,
        })?;

        let members = pod
            .container_ids()
            .await
            .map_err(|source| SnapshotError::PodContainers {
                pod: pod.id().to_string(),
                source,
            })?;

        let mut containers_info = Vec::with_capacity(members.len());
        for id in &members {
            let bundle = match self.containers.state(id, opts).await {
                Ok(bundle) => bundle,
                Err(source) => {
                    tracing::warn!(
                        "Aborting snapshot of pod {}: container {} failed: {}",
                        pod.id(),
                        id,
                        source
                    );
                    return Err(SnapshotError::ContainerState {
                        id: id.clone(),
                        source,
                    });
                }
            };
            containers_info.push(pod_container_info(id, &bundle));
        }

        Ok(ListPodData {
            id: pod.id().to_string(),
            name: pod.name().to_string(),
            created_at: format_timestamp(pod.created_at()),
            cgroup: pod.cgroup_parent().to_string(),
            status,
            number_of_containers: containers_info.len().to_string(),
            containers_info,
        })
    }

    /// Builds every pod independently. A failed pod is reported next to its
    /// id and does not stop the remaining pods.
    pub async fn build_all(
        &self,
        pods: &[&dyn PodHandle],
        opts: &ListOptions,
    ) -> (Vec<ListPodData>, Vec<(String, SnapshotError)>) {
        let mut snapshots = Vec::with_capacity(pods.len());
        let mut failures = Vec::new();

        for pod in pods {
            match self.build(*pod, opts).await {
                Ok(snapshot) => snapshots.push(snapshot),
                Err(e) => failures.push((pod.id().to_string(), e)),
            }
        }

        (snapshots, failures)
    }
}
