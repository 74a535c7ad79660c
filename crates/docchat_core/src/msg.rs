#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User switched the document-source selector.
    ModeSelected(crate::SourceMode),
    /// User edited the URL input box.
    UrlChanged(String),
    /// User edited the question input box.
    QuestionChanged(String),
    /// User picked a file through the manual selector.
    FileChosen(crate::FilePick),
    /// User dropped a file onto the drop zone.
    FileDropped(crate::FilePick),
    /// User removed the selected file.
    FileRemoved,
    /// Pointer entered or left the drop zone while dragging.
    DragStateChanged(bool),
    /// User submitted the pending question.
    SubmitPressed,
    /// The question service answered a submission.
    SubmitSucceeded {
        submission_id: crate::SubmissionId,
        answer: String,
    },
    /// The question service failed a submission; `message` is display text.
    SubmitFailed {
        submission_id: crate::SubmissionId,
        message: String,
    },
    /// User clicked Clear Chat.
    ClearClicked,
    /// Fallback for placeholder wiring.
    NoOp,
}
