use podview_core::{ListPodData, PsOpts};
use podview_snapshot::{
    coerce_list_options, dispatch, PodHandle, PodSnapshotBuilder, ReplyOutcome, StaticRuntime,
};

use crate::utils::short_id;

pub async fn pod_list(runtime: &StaticRuntime, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let opts = coerce_list_options(PsOpts::default());
    let handles = runtime.pods();
    let pods: Vec<&dyn PodHandle> = handles.iter().map(|p| p as &dyn PodHandle).collect();

    let (snapshots, failures) = PodSnapshotBuilder::new(runtime).build_all(&pods, &opts).await;

    for (pod_id, err) in failures {
        if let Some(outcome) = dispatch(&pod_id, None::<Vec<(String, String)>>, Some(err)) {
            eprintln!("Error: {}", outcome.message());
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&snapshots)?);
        return Ok(());
    }

    if snapshots.is_empty() {
        println!("No pods found");
        return Ok(());
    }

    println!(
        "{:<15} {:<20} {:<10} {:<22} {:<15} {:<20}",
        "POD ID", "NAME", "STATUS", "CREATED", "# OF CONTAINERS", "CGROUP"
    );
    for pod in snapshots {
        println!(
            "{:<15} {:<20} {:<10} {:<22} {:<15} {:<20}",
            short_id(&pod.id),
            pod.name,
            pod.status,
            pod.created_at,
            pod.number_of_containers,
            pod.cgroup
        );
    }

    Ok(())
}

pub async fn pod_inspect(
    runtime: &StaticRuntime,
    pod_id: &str,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let snapshot = match build_pod(runtime, pod_id).await {
        Ok(snapshot) => snapshot,
        Err(outcome) => return Err(outcome.message().into()),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    println!("Pod: {} ({})", snapshot.name, snapshot.id);
    println!("  Status: {}", snapshot.status);
    println!("  Created: {}", snapshot.created_at);
    println!("  Cgroup parent: {}", snapshot.cgroup);
    println!("  Containers: {}", snapshot.number_of_containers);
    for container in &snapshot.containers_info {
        println!(
            "    {:<15} {:<20} {}",
            short_id(&container.id),
            container.name,
            container.status
        );
    }

    Ok(())
}

async fn build_pod(runtime: &StaticRuntime, pod_id: &str) -> Result<ListPodData, ReplyOutcome> {
    let opts = coerce_list_options(PsOpts::default());
    let result = match runtime.pod(pod_id) {
        Ok(pod) => PodSnapshotBuilder::new(runtime)
            .build(&pod, &opts)
            .await
            .map_err(|e| e.to_string()),
        Err(e) => Err(e.to_string()),
    };

    result.map_err(|message| {
        tracing::warn!("Pod {} could not be listed: {}", pod_id, message);
        dispatch(pod_id, None::<Vec<(String, String)>>, Some(message.clone()))
            .unwrap_or(ReplyOutcome::Fatal { message })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATE: &str = r#"{
        "containers": [
            {"id": "c1", "name": "web", "created_at": "2024-05-01T10:00:00Z", "state": "running"},
            {"id": "c2", "name": "db", "created_at": "2024-05-01T10:00:00Z", "state": "running", "error": "no such file"}
        ],
        "pods": [
            {"id": "p1", "name": "good", "created_at": "2024-05-01T09:00:00Z", "containers": ["c1"]},
            {"id": "p2", "name": "bad", "created_at": "2024-05-01T09:00:00Z", "status": "Running", "containers": ["c1", "c2"]}
        ]
    }"#;

    #[tokio::test]
    async fn test_build_pod_by_name() {
        let runtime = StaticRuntime::from_json(STATE).unwrap();
        let snapshot = build_pod(&runtime, "good").await.unwrap();
        assert_eq!(snapshot.id, "p1");
        assert_eq!(snapshot.number_of_containers, "1");
    }

    #[tokio::test]
    async fn test_failed_pod_is_fatal() {
        let runtime = StaticRuntime::from_json(STATE).unwrap();
        let outcome = build_pod(&runtime, "p2").await.unwrap_err();
        assert_eq!(
            outcome,
            ReplyOutcome::Fatal {
                message: "failed to get state of container c2: query failed for c2: no such file"
                    .to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_unknown_pod_is_fatal() {
        let runtime = StaticRuntime::from_json(STATE).unwrap();
        let outcome = build_pod(&runtime, "nope").await.unwrap_err();
        assert_eq!(outcome.message(), "pod not found: nope");
    }
}
