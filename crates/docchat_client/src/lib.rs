//! Docchat client: executes ask effects against the question-answering service.
mod client;
mod service;
mod types;

pub use client::{HttpQuestionService, QuestionService, ServiceSettings};
pub use service::ServiceHandle;
pub use types::{
    AskError, DocumentSource, FailureKind, ServiceEvent, SubmissionId, GENERIC_FAILURE_MESSAGE,
};
