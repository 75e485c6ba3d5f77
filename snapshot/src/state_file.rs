use crate::error::{RuntimeError, StateFileError};
use crate::pod::pod_status;
use crate::runtime::{ContainerSource, NamespaceLookup, PodHandle};
use crate::types::{ContainerStatus, ListOptions, StateBundle};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use podview_core::ContainerNameSpace;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContainerEntry {
    pub id: String,
    #[serde(flatten)]
    pub bundle: StateBundle,
    /// When set, state queries for this container fail with this reason.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PodEntry {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub cgroup_parent: String,
    #[serde(default)]
    pub containers: Vec<String>,
    /// Fixed status. Derived from the member containers when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub containers_error: Option<String>,
}

/// Runtime backed by a JSON state dump instead of a live engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StaticRuntime {
    pub containers: Vec<ContainerEntry>,
    pub pods: Vec<PodEntry>,
    pub namespaces: HashMap<i32, ContainerNameSpace>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_error: Option<String>,
}

impl StaticRuntime {
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, StateFileError> {
        let path = path.as_ref();
        tracing::debug!("Loading runtime state from {:?}", path);
        let data = tokio::fs::read_to_string(path).await?;
        Self::from_json(&data)
    }

    pub fn from_json(data: &str) -> Result<Self, StateFileError> {
        Ok(serde_json::from_str(data)?)
    }

    pub fn pods(&self) -> Vec<StaticPod<'_>> {
        self.pods
            .iter()
            .map(|entry| StaticPod {
                runtime: self,
                entry,
            })
            .collect()
    }

    pub fn pod(&self, id_or_name: &str) -> Result<StaticPod<'_>, RuntimeError> {
        self.pods
            .iter()
            .find(|entry| entry.id == id_or_name || entry.name == id_or_name)
            .map(|entry| StaticPod {
                runtime: self,
                entry,
            })
            .ok_or_else(|| RuntimeError::PodNotFound(id_or_name.to_string()))
    }

    fn entry(&self, id: &str) -> Result<&ContainerEntry, RuntimeError> {
        self.containers
            .iter()
            .find(|entry| entry.id == id)
            .ok_or_else(|| RuntimeError::ContainerNotFound(id.to_string()))
    }
}

#[async_trait]
impl NamespaceLookup for StaticRuntime {
    async fn namespaces(&self, pid: i32) -> ContainerNameSpace {
        self.namespaces.get(&pid).cloned().unwrap_or_default()
    }
}

#[async_trait]
impl ContainerSource for StaticRuntime {
    async fn container_ids(&self) -> Result<Vec<String>, RuntimeError> {
        if let Some(reason) = &self.list_error {
            return Err(RuntimeError::QueryFailed {
                id: "containers".to_string(),
                reason: reason.clone(),
            });
        }
        Ok(self.containers.iter().map(|entry| entry.id.clone()).collect())
    }

    async fn state(&self, id: &str, opts: &ListOptions) -> Result<StateBundle, RuntimeError> {
        let entry = self.entry(id)?;
        if let Some(reason) = &entry.error {
            return Err(RuntimeError::QueryFailed {
                id: id.to_string(),
                reason: reason.clone(),
            });
        }

        let mut bundle = entry.bundle.clone();
        if !opts.size {
            bundle.size = None;
        }
        Ok(bundle)
    }
}

pub struct StaticPod<'a> {
    runtime: &'a StaticRuntime,
    entry: &'a PodEntry,
}

#[async_trait]
impl<'a> PodHandle for StaticPod<'a> {
    fn id(&self) -> &str {
        &self.entry.id
    }

    fn name(&self) -> &str {
        &self.entry.name
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.entry.created_at
    }

    fn cgroup_parent(&self) -> &str {
        &self.entry.cgroup_parent
    }

    async fn status(&self) -> Result<String, RuntimeError> {
        if let Some(reason) = &self.entry.status_error {
            return Err(RuntimeError::QueryFailed {
                id: self.entry.id.clone(),
                reason: reason.clone(),
            });
        }
        if let Some(status) = &self.entry.status {
            return Ok(status.clone());
        }

        let mut states = Vec::with_capacity(self.entry.containers.len());
        for id in &self.entry.containers {
            let entry = self.runtime.entry(id)?;
            if let Some(reason) = &entry.error {
                return Err(RuntimeError::QueryFailed {
                    id: id.clone(),
                    reason: reason.clone(),
                });
            }
            states.push(entry.bundle.state);
        }
        Ok(pod_status(&states).to_string())
    }

    async fn container_ids(&self) -> Result<Vec<String>, RuntimeError> {
        if let Some(reason) = &self.entry.containers_error {
            return Err(RuntimeError::QueryFailed {
                id: self.entry.id.clone(),
                reason: reason.clone(),
            });
        }
        Ok(self.entry.containers.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const STATE: &str = r#"{
        "containers": [
            {
                "id": "c1",
                "name": "web",
                "image_name": "docker.io/library/nginx:latest",
                "created_at": "2024-05-01T10:00:00Z",
                "state": "running",
                "pid": 4242,
                "size": {"rootfs_size": 1024, "rw_size": 12}
            },
            {
                "id": "c2",
                "name": "db",
                "created_at": "2024-05-01T10:05:00Z",
                "state": "exited",
                "error": "storage layer missing"
            }
        ],
        "pods": [
            {"id": "p1", "name": "app", "created_at": "2024-05-01T09:59:00Z", "containers": ["c1"]}
        ],
        "namespaces": {
            "4242": {"net": "net:[4026531993]", "pid": "pid:[4026531836]"}
        }
    }"#;

    #[tokio::test]
    async fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state.json");
        tokio::fs::write(&path, STATE).await.unwrap();

        let runtime = StaticRuntime::load(&path).await.unwrap();
        assert_eq!(runtime.containers.len(), 2);
        assert_eq!(runtime.containers[0].bundle.port_mappings.len(), 0);
        assert_eq!(runtime.pods[0].cgroup_parent, "");
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = StaticRuntime::load(dir.path().join("missing.json")).await;
        assert!(matches!(result, Err(StateFileError::Io(_))));
    }

    #[test]
    fn test_invalid_json() {
        let result = StaticRuntime::from_json("{\"containers\": 3}");
        assert!(matches!(result, Err(StateFileError::Parse(_))));
    }

    #[tokio::test]
    async fn test_state_honours_size_flag() {
        let runtime = StaticRuntime::from_json(STATE).unwrap();
        let sized = ListOptions {
            size: true,
            ..Default::default()
        };

        let bundle = runtime.state("c1", &sized).await.unwrap();
        assert_eq!(bundle.size.map(|s| s.rootfs_size), Some(1024));

        let bundle = runtime.state("c1", &ListOptions::default()).await.unwrap();
        assert!(bundle.size.is_none());
    }

    #[tokio::test]
    async fn test_state_errors() {
        let runtime = StaticRuntime::from_json(STATE).unwrap();
        let opts = ListOptions::default();

        let err = runtime.state("c2", &opts).await.unwrap_err();
        assert_eq!(err.to_string(), "query failed for c2: storage layer missing");

        let err = runtime.state("nope", &opts).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_namespace_lookup_defaults_to_empty() {
        let runtime = StaticRuntime::from_json(STATE).unwrap();

        let ns = runtime.namespaces(4242).await;
        assert_eq!(ns.net, "net:[4026531993]");
        assert_eq!(ns.user, "");

        assert_eq!(runtime.namespaces(1).await, ContainerNameSpace::default());
    }

    #[tokio::test]
    async fn test_pod_status_derived_from_members() {
        let runtime = StaticRuntime::from_json(STATE).unwrap();
        let pod = runtime.pod("app").unwrap();
        assert_eq!(pod.id(), "p1");
        assert_eq!(pod.status().await.unwrap(), "Running");

        assert!(runtime.pod("other").is_err());
    }
}
