mod coerce;
mod container;
mod error;
mod list;
mod pod;
mod reply;
mod runtime;
mod state_file;
mod types;

pub use coerce::{
    coerce_list_options, compression_from_name, pull_policy_from_name, unwrap_or_default,
    COMPRESSION_NAMES, DEFAULT_COMPRESSION, DEFAULT_PULL_POLICY, PULL_POLICY_NAMES,
};
pub use container::{format_duration, format_timestamp, pod_container_info, ContainerSnapshotBuilder};
pub use error::{RuntimeError, SnapshotError, StateFileError};
pub use list::ContainerLister;
pub use pod::{pod_status, PodSnapshotBuilder};
pub use reply::{dispatch, ReplyOutcome};
pub use runtime::{ContainerSource, NamespaceLookup, PodHandle};
pub use state_file::{ContainerEntry, PodEntry, StaticPod, StaticRuntime};
pub use types::*;
