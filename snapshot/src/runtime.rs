//! Interfaces of the live runtime this crate reads from.
//!
//! Implementations may block or do I/O; callers await them one at a time and
//! impose no timeout of their own.

use crate::error::RuntimeError;
use crate::types::{ListOptions, StateBundle};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use podview_core::ContainerNameSpace;

#[async_trait]
pub trait NamespaceLookup: Send + Sync {
    /// Namespaces of process `pid`. Unresolvable entries are left empty.
    async fn namespaces(&self, pid: i32) -> ContainerNameSpace;
}

#[async_trait]
pub trait ContainerSource: Send + Sync {
    async fn container_ids(&self) -> Result<Vec<String>, RuntimeError>;

    async fn state(&self, id: &str, opts: &ListOptions) -> Result<StateBundle, RuntimeError>;
}

#[async_trait]
pub trait PodHandle: Send + Sync {
    fn id(&self) -> &str;

    fn name(&self) -> &str;

    fn created_at(&self) -> DateTime<Utc>;

    fn cgroup_parent(&self) -> &str;

    /// Aggregate status derived from the member containers.
    async fn status(&self) -> Result<String, RuntimeError>;

    /// Member container ids in the runtime's enumeration order.
    async fn container_ids(&self) -> Result<Vec<String>, RuntimeError>;
}
