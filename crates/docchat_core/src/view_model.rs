use crate::{FilePick, Message, SourceMode};

/// Immutable snapshot the render layer consumes. Derived by
/// [`crate::SessionState::view`] whenever the dirty flag was set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionViewModel {
    pub mode: SourceMode,
    pub url: String,
    pub question: String,
    pub transcript: Vec<Message>,
    pub loading: bool,
    pub error: Option<String>,
    pub dragging_over: bool,
    pub selected_file: Option<FilePick>,
    /// Mirrors the submit control's enabled state: a non-blank question and
    /// no request in flight.
    pub can_submit: bool,
}
