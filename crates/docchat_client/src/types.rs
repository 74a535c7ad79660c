pub type SubmissionId = u64;

/// Display text used whenever the service supplies no usable `detail`.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// The document source attached to an outgoing ask. Exactly one kind per
/// request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    Url(String),
    Pdf { name: String, bytes: Vec<u8> },
}

/// Completion delivered back to the platform layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceEvent {
    AskCompleted {
        submission_id: SubmissionId,
        result: Result<String, AskError>,
    },
}

/// A failed ask. `message` is already display-ready: either the service's
/// `detail` text or [`GENERIC_FAILURE_MESSAGE`]; `kind` exists for logs and
/// tests only.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct AskError {
    pub kind: FailureKind,
    pub message: String,
}

impl AskError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub(crate) fn generic(kind: FailureKind) -> Self {
        Self::new(kind, GENERIC_FAILURE_MESSAGE)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FailureKind {
    #[error("invalid request")]
    InvalidRequest,
    #[error("http status {0}")]
    HttpStatus(u16),
    #[error("timeout")]
    Timeout,
    #[error("network error")]
    Network,
    #[error("malformed response")]
    MalformedResponse,
}
