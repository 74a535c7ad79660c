use std::path::PathBuf;

use crate::view_model::SessionViewModel;

pub type MessageId = u64;
pub type SubmissionId = u64;

/// The only declared media type a file pick is accepted with.
pub const PDF_MEDIA_TYPE: &str = "application/pdf";

/// Greeting seeded into every fresh transcript.
pub const WELCOME_MESSAGE: &str =
    "Hello! I'm your RAG assistant. Provide a PDF document and ask me anything about it.";

/// Notice left behind when the transcript is cleared.
pub const CLEARED_NOTICE: &str = "Chat cleared. Ready for new questions!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    System,
}

/// One transcript entry. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: MessageId,
    pub role: Role,
    pub content: String,
    pub is_error: bool,
}

/// Which document-source input is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceMode {
    #[default]
    Url,
    Upload,
}

/// A file offered by the platform picker or drop zone.
///
/// `media_type` is whatever the platform declared for the file; acceptance
/// is decided against it, not against the file contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePick {
    pub name: String,
    pub size_bytes: u64,
    pub media_type: String,
    pub path: PathBuf,
}

/// All mutable session state, owned by a single view instance.
///
/// Fields are private; `update` drives the named transitions below and the
/// render layer reads a [`SessionViewModel`] snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    mode: SourceMode,
    url: String,
    file: Option<FilePick>,
    question: String,
    transcript: Vec<Message>,
    loading: bool,
    error: Option<String>,
    dragging_over: bool,
    next_message_id: MessageId,
    next_submission_id: SubmissionId,
    in_flight: Option<SubmissionId>,
    dirty: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    pub fn new() -> Self {
        let mut state = Self {
            mode: SourceMode::Url,
            url: String::new(),
            file: None,
            question: String::new(),
            transcript: Vec::new(),
            loading: false,
            error: None,
            dragging_over: false,
            next_message_id: 1,
            next_submission_id: 1,
            in_flight: None,
            dirty: false,
        };
        state.push_message(Role::System, WELCOME_MESSAGE, false);
        state.dirty = false;
        state
    }

    pub fn view(&self) -> SessionViewModel {
        SessionViewModel {
            mode: self.mode,
            url: self.url.clone(),
            question: self.question.clone(),
            transcript: self.transcript.clone(),
            loading: self.loading,
            error: self.error.clone(),
            dragging_over: self.dragging_over,
            selected_file: self.file.clone(),
            can_submit: !self.loading && !self.question.trim().is_empty(),
        }
    }

    /// Returns whether a render is pending and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        let was_dirty = self.dirty;
        self.dirty = false;
        was_dirty
    }

    pub(crate) fn mode(&self) -> SourceMode {
        self.mode
    }

    pub(crate) fn url(&self) -> &str {
        &self.url
    }

    pub(crate) fn file(&self) -> Option<&FilePick> {
        self.file.as_ref()
    }

    pub(crate) fn question(&self) -> &str {
        &self.question
    }

    pub(crate) fn is_loading(&self) -> bool {
        self.loading
    }

    pub(crate) fn in_flight(&self) -> Option<SubmissionId> {
        self.in_flight
    }

    pub(crate) fn set_mode(&mut self, mode: SourceMode) {
        if self.mode != mode {
            self.mode = mode;
            self.touch();
        }
    }

    pub(crate) fn set_url(&mut self, text: String) {
        if self.url != text {
            self.url = text;
            self.touch();
        }
    }

    pub(crate) fn set_question(&mut self, text: String) {
        if self.question != text {
            self.question = text;
            self.touch();
        }
    }

    pub(crate) fn set_dragging(&mut self, over: bool) {
        if self.dragging_over != over {
            self.dragging_over = over;
            self.touch();
        }
    }

    /// Stores an accepted pick and drops any stale banner.
    pub(crate) fn accept_file(&mut self, pick: FilePick) {
        self.file = Some(pick);
        self.error = None;
        self.touch();
    }

    pub(crate) fn remove_file(&mut self) {
        if self.file.take().is_some() {
            self.touch();
        }
    }

    pub(crate) fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.touch();
    }

    pub(crate) fn push_message(
        &mut self,
        role: Role,
        content: impl Into<String>,
        is_error: bool,
    ) -> MessageId {
        let id = self.next_message_id;
        self.next_message_id += 1;
        self.transcript.push(Message {
            id,
            role,
            content: content.into(),
            is_error,
        });
        self.touch();
        id
    }

    /// Starts the in-flight phase of a validated submission: clears the
    /// question input and any prior banner, flips `loading`, and allocates
    /// the submission id late answers are matched against.
    pub(crate) fn begin_submission(&mut self) -> SubmissionId {
        let id = self.next_submission_id;
        self.next_submission_id += 1;
        self.question.clear();
        self.error = None;
        self.loading = true;
        self.in_flight = Some(id);
        self.touch();
        id
    }

    pub(crate) fn complete_submission(&mut self) {
        self.loading = false;
        self.in_flight = None;
        self.touch();
    }

    /// Replaces the whole transcript with a single system notice and clears
    /// the banner. Document source, question, and in-flight state survive.
    pub(crate) fn reset_transcript(&mut self, notice: &str) {
        self.transcript.clear();
        self.error = None;
        self.push_message(Role::System, notice, false);
    }

    fn touch(&mut self) {
        self.dirty = true;
    }
}
