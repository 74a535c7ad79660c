//! Docchat core: pure chat-session state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::{Effect, QuestionSource};
pub use msg::Msg;
pub use state::{
    FilePick, Message, MessageId, Role, SessionState, SourceMode, SubmissionId, CLEARED_NOTICE,
    PDF_MEDIA_TYPE, WELCOME_MESSAGE,
};
pub use update::update;
pub use view_model::SessionViewModel;
