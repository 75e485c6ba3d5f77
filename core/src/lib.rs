//! Wire records exchanged with the RPC layer.
//!
//! Every record is a `prost` message so it can be framed by a gRPC transport,
//! and carries serde derives for JSON output. Serde names follow the varlink
//! field names (`imageid`, `numberofcontainers`, ...).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
pub struct ContainerPortMappings {
    #[prost(string, tag = "1")]
    pub host_port: String,
    #[prost(string, tag = "2")]
    pub host_ip: String,
    #[prost(string, tag = "3")]
    pub protocol: String,
    #[prost(string, tag = "4")]
    pub container_port: String,
}

#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
pub struct ContainerMount {
    #[prost(string, tag = "1")]
    pub destination: String,
    #[prost(string, tag = "2")]
    #[serde(rename = "type")]
    pub mount_type: String,
    #[prost(string, tag = "3")]
    pub source: String,
    #[prost(string, repeated, tag = "4")]
    pub options: Vec<String>,
}

/// Namespace identifiers of a container's init process. A namespace that
/// could not be resolved is an empty string.
#[derive(Clone, PartialEq, Eq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerNameSpace {
    #[prost(string, tag = "1")]
    pub user: String,
    #[prost(string, tag = "2")]
    pub uts: String,
    #[prost(string, tag = "3")]
    pub pidns: String,
    #[prost(string, tag = "4")]
    pub pid: String,
    #[prost(string, tag = "5")]
    pub cgroup: String,
    #[prost(string, tag = "6")]
    pub net: String,
    #[prost(string, tag = "7")]
    pub mnt: String,
    #[prost(string, tag = "8")]
    pub ipc: String,
}

/// Snapshot of a single container as returned by a container listing.
#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
pub struct Container {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub image: String,
    #[prost(string, tag = "3")]
    #[serde(rename = "imageid")]
    pub image_id: String,
    #[prost(string, repeated, tag = "4")]
    pub command: Vec<String>,
    #[prost(string, tag = "5")]
    #[serde(rename = "createdat")]
    pub created_at: String,
    #[prost(string, tag = "6")]
    #[serde(rename = "runningfor")]
    pub running_for: String,
    #[prost(string, tag = "7")]
    pub status: String,
    #[prost(message, repeated, tag = "8")]
    pub ports: Vec<ContainerPortMappings>,
    /// Size of the container root filesystem. `None` when the runtime did not
    /// compute sizes, which is not the same as an empty filesystem.
    #[prost(int64, optional, tag = "9")]
    #[serde(rename = "rootfssize", skip_serializing_if = "Option::is_none")]
    pub rootfs_size: Option<i64>,
    #[prost(int64, optional, tag = "10")]
    #[serde(rename = "rwsize", skip_serializing_if = "Option::is_none")]
    pub rw_size: Option<i64>,
    #[prost(string, tag = "11")]
    pub names: String,
    #[prost(map = "string, string", tag = "12")]
    pub labels: HashMap<String, String>,
    #[prost(message, repeated, tag = "13")]
    pub mounts: Vec<ContainerMount>,
    #[prost(bool, tag = "14")]
    #[serde(rename = "containerrunning")]
    pub container_running: bool,
    #[prost(message, optional, tag = "15")]
    pub namespaces: Option<ContainerNameSpace>,
}

#[derive(Clone, PartialEq, Eq, prost::Message, Serialize, Deserialize)]
pub struct ListPodContainerInfo {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, tag = "2")]
    pub id: String,
    #[prost(string, tag = "3")]
    pub status: String,
}

#[derive(Clone, PartialEq, Eq, prost::Message, Serialize, Deserialize)]
pub struct ListPodData {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(string, tag = "3")]
    #[serde(rename = "createdat")]
    pub created_at: String,
    #[prost(string, tag = "4")]
    pub cgroup: String,
    #[prost(string, tag = "5")]
    pub status: String,
    /// Decimal length of `containers_info`.
    #[prost(string, tag = "6")]
    #[serde(rename = "numberofcontainers")]
    pub number_of_containers: String,
    #[prost(message, repeated, tag = "7")]
    #[serde(rename = "containersinfo")]
    pub containers_info: Vec<ListPodContainerInfo>,
}

#[derive(Clone, PartialEq, Eq, prost::Message, Serialize, Deserialize)]
pub struct PodContainerErrorData {
    #[prost(string, tag = "1")]
    #[serde(rename = "containerid")]
    pub container_id: String,
    #[prost(string, tag = "2")]
    pub reason: String,
}

/// Body of a partial-failure reply for a pod operation.
#[derive(Clone, PartialEq, Eq, prost::Message, Serialize, Deserialize)]
pub struct PodContainerError {
    #[prost(string, tag = "1")]
    #[serde(rename = "podname")]
    pub pod_id: String,
    #[prost(message, repeated, tag = "2")]
    pub errors: Vec<PodContainerErrorData>,
}

/// Container listing options as sent by a client. Unset fields are `None`.
#[derive(Clone, PartialEq, Eq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct PsOpts {
    #[prost(bool, tag = "1")]
    pub all: bool,
    #[prost(int64, optional, tag = "2")]
    pub last: Option<i64>,
    #[prost(bool, optional, tag = "3")]
    pub latest: Option<bool>,
    #[prost(bool, optional, tag = "4")]
    #[serde(rename = "noTrunc")]
    pub no_trunc: Option<bool>,
    #[prost(bool, optional, tag = "5")]
    pub pod: Option<bool>,
    #[prost(bool, optional, tag = "6")]
    pub quiet: Option<bool>,
    #[prost(bool, optional, tag = "7")]
    pub size: Option<bool>,
    #[prost(string, optional, tag = "8")]
    pub sort: Option<String>,
    #[prost(bool, optional, tag = "9")]
    pub sync: Option<bool>,
    #[prost(bool, optional, tag = "10")]
    pub namespace: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use prost::Message;

    #[test]
    fn test_container_serializes_wire_names() {
        let container = Container {
            id: "abc".to_string(),
            image_id: "sha256:1".to_string(),
            container_running: true,
            ..Default::default()
        };

        let value = serde_json::to_value(&container).unwrap();
        assert_eq!(value["imageid"], "sha256:1");
        assert_eq!(value["containerrunning"], true);
        assert!(value.get("rootfssize").is_none());
        assert!(value.get("rwsize").is_none());
    }

    #[test]
    fn test_pod_serializes_wire_names() {
        let pod = ListPodData {
            id: "pod1".to_string(),
            number_of_containers: "1".to_string(),
            containers_info: vec![ListPodContainerInfo {
                name: "web".to_string(),
                id: "c1".to_string(),
                status: "running".to_string(),
            }],
            ..Default::default()
        };

        let value = serde_json::to_value(&pod).unwrap();
        assert_eq!(value["numberofcontainers"], "1");
        assert_eq!(value["containersinfo"][0]["name"], "web");
    }

    #[test]
    fn test_explicit_zero_size_survives_encoding() {
        let container = Container {
            rootfs_size: Some(0),
            rw_size: Some(0),
            ..Default::default()
        };

        let decoded = Container::decode(container.encode_to_vec().as_slice()).unwrap();
        assert_eq!(decoded.rootfs_size, Some(0));
        assert_eq!(decoded.rw_size, Some(0));
    }

    #[test]
    fn test_ps_opts_deserializes_partial_document() {
        let opts: PsOpts = serde_json::from_str(r#"{"all": true, "last": 3}"#).unwrap();
        assert!(opts.all);
        assert_eq!(opts.last, Some(3));
        assert_eq!(opts.latest, None);
        assert_eq!(opts.sort, None);
    }
}
