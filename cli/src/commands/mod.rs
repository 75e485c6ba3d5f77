pub mod container;
pub mod pod;

pub use container::{container_list, PsArgs};
pub use pod::{pod_inspect, pod_list};
