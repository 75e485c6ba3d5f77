use podview_core::{PodContainerError, PodContainerErrorData};
use prost::Message;
use std::fmt::Display;

/// Reply to send for a finished pod operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyOutcome {
    /// The operation failed as a whole.
    Fatal { message: String },
    /// The operation ran, but some member containers failed.
    Partial {
        pod_id: String,
        errors: Vec<PodContainerErrorData>,
    },
}

/// Picks the reply for a pod operation.
///
/// A per-container error list, even an empty one, always produces a partial
/// reply and discards `error`. `error` alone produces a fatal reply. With
/// neither, `None` is returned and the caller replies with its own success
/// value.
pub fn dispatch<C, E>(
    pod_id: &str,
    container_errors: Option<Vec<(String, C)>>,
    error: Option<E>,
) -> Option<ReplyOutcome>
where
    C: Display,
    E: Display,
{
    match (container_errors, error) {
        (Some(failures), error) => {
            if let Some(e) = error {
                tracing::debug!(
                    "Replying with container errors for pod {}, dropping: {}",
                    pod_id,
                    e
                );
            }
            let errors = failures
                .into_iter()
                .map(|(container_id, reason)| PodContainerErrorData {
                    container_id,
                    reason: reason.to_string(),
                })
                .collect();
            Some(ReplyOutcome::Partial {
                pod_id: pod_id.to_string(),
                errors,
            })
        }
        (None, Some(e)) => Some(ReplyOutcome::Fatal {
            message: e.to_string(),
        }),
        (None, None) => None,
    }
}

impl ReplyOutcome {
    pub fn message(&self) -> String {
        match self {
            ReplyOutcome::Fatal { message } => message.clone(),
            ReplyOutcome::Partial { pod_id, errors } => {
                format!("{} container(s) in pod {} failed", errors.len(), pod_id)
            }
        }
    }
}

impl From<ReplyOutcome> for tonic::Status {
    fn from(outcome: ReplyOutcome) -> Self {
        let message = outcome.message();
        match outcome {
            ReplyOutcome::Fatal { .. } => tonic::Status::internal(message),
            ReplyOutcome::Partial { pod_id, errors } => {
                let details = PodContainerError { pod_id, errors }.encode_to_vec();
                tonic::Status::with_details(tonic::Code::Aborted, message, details.into())
            }
        }
    }
}
