use thiserror::Error;

/// Failure reported by a runtime collaborator.
#[derive(Error, Debug)]
pub enum RuntimeError {
    #[error("container not found: {0}")]
    ContainerNotFound(String),

    #[error("pod not found: {0}")]
    PodNotFound(String),

    #[error("query failed for {id}: {reason}")]
    QueryFailed { id: String, reason: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl RuntimeError {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            RuntimeError::ContainerNotFound(_) | RuntimeError::PodNotFound(_)
        )
    }
}

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("failed to get status of pod {pod}: {source}")]
    PodStatus {
        pod: String,
        #[source]
        source: RuntimeError,
    },

    #[error("failed to list containers of pod {pod}: {source}")]
    PodContainers {
        pod: String,
        #[source]
        source: RuntimeError,
    },

    #[error("failed to get state of container {id}: {source}")]
    ContainerState {
        id: String,
        #[source]
        source: RuntimeError,
    },

    #[error("failed to list containers: {0}")]
    ContainerList(#[source] RuntimeError),
}

impl SnapshotError {
    pub fn runtime_error(&self) -> &RuntimeError {
        match self {
            SnapshotError::PodStatus { source, .. }
            | SnapshotError::PodContainers { source, .. }
            | SnapshotError::ContainerState { source, .. }
            | SnapshotError::ContainerList(source) => source,
        }
    }
}

impl From<SnapshotError> for tonic::Status {
    fn from(err: SnapshotError) -> Self {
        if err.runtime_error().is_not_found() {
            tonic::Status::not_found(err.to_string())
        } else {
            tonic::Status::internal(err.to_string())
        }
    }
}

#[derive(Error, Debug)]
pub enum StateFileError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid state file: {0}")]
    Parse(#[from] serde_json::Error),
}
