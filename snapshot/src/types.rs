use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerStatus {
    #[default]
    Unknown,
    Configured,
    Created,
    Running,
    Stopped,
    Paused,
    Exited,
    Removing,
}

impl std::fmt::Display for ContainerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContainerStatus::Unknown => write!(f, "unknown"),
            ContainerStatus::Configured => write!(f, "configured"),
            ContainerStatus::Created => write!(f, "created"),
            ContainerStatus::Running => write!(f, "running"),
            ContainerStatus::Stopped => write!(f, "stopped"),
            ContainerStatus::Paused => write!(f, "paused"),
            ContainerStatus::Exited => write!(f, "exited"),
            ContainerStatus::Removing => write!(f, "removing"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MountSpec {
    pub destination: String,
    #[serde(rename = "type")]
    pub mount_type: String,
    pub source: String,
    #[serde(default)]
    pub options: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortSpec {
    pub host_port: i32,
    #[serde(default)]
    pub host_ip: String,
    #[serde(default = "default_protocol")]
    pub protocol: String,
    pub container_port: i32,
}

fn default_protocol() -> String {
    "tcp".to_string()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeInfo {
    pub rootfs_size: i64,
    pub rw_size: i64,
}

/// Everything the runtime knows about one container at query time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateBundle {
    pub name: String,
    #[serde(default)]
    pub image_name: String,
    #[serde(default)]
    pub image_id: String,
    #[serde(default)]
    pub args: Vec<String>,
    #[serde(default)]
    pub mounts: Vec<MountSpec>,
    #[serde(default)]
    pub port_mappings: Vec<PortSpec>,
    #[serde(default)]
    pub labels: HashMap<String, String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub state: ContainerStatus,
    #[serde(default)]
    pub pid: i32,
    /// Only present when the runtime was asked to compute sizes.
    #[serde(default)]
    pub size: Option<SizeInfo>,
    #[serde(default)]
    pub pod: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionKind {
    Uncompressed,
    Bzip2,
    Gzip,
    Xz,
}

impl std::fmt::Display for CompressionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompressionKind::Uncompressed => write!(f, "uncompressed"),
            CompressionKind::Bzip2 => write!(f, "bzip2"),
            CompressionKind::Gzip => write!(f, "gzip"),
            CompressionKind::Xz => write!(f, "xz"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PullPolicy {
    PullIfMissing,
    PullAlways,
    PullNever,
}

impl std::fmt::Display for PullPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PullPolicy::PullIfMissing => write!(f, "pullifmissing"),
            PullPolicy::PullAlways => write!(f, "pullalways"),
            PullPolicy::PullNever => write!(f, "pullnever"),
        }
    }
}

/// Resolved container listing options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOptions {
    pub all: bool,
    pub last: i64,
    pub latest: bool,
    pub no_trunc: bool,
    pub pod: bool,
    pub size: bool,
    pub sort: String,
    pub namespace: bool,
    pub sync: bool,
}
