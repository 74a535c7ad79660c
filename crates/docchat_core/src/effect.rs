#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    SendQuestion {
        submission_id: crate::SubmissionId,
        question: String,
        source: QuestionSource,
    },
}

/// Document source attached to an outgoing question. Exactly one kind is
/// ever sent per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionSource {
    Url(String),
    File(crate::FilePick),
}
