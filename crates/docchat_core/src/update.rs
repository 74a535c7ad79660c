use crate::{
    Effect, FilePick, Msg, QuestionSource, Role, SessionState, SourceMode, CLEARED_NOTICE,
    PDF_MEDIA_TYPE,
};

const ERR_INVALID_PDF: &str = "Please upload a valid PDF file.";
const ERR_MISSING_URL: &str = "Please enter a PDF URL.";
const ERR_MISSING_FILE: &str = "Please upload a PDF file.";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: SessionState, msg: Msg) -> (SessionState, Vec<Effect>) {
    let effects = match msg {
        Msg::ModeSelected(mode) => {
            // Switching the selector never discards the other side's value.
            state.set_mode(mode);
            Vec::new()
        }
        Msg::UrlChanged(text) => {
            // Stored as typed; the service decides whether it resolves.
            state.set_url(text);
            Vec::new()
        }
        Msg::QuestionChanged(text) => {
            state.set_question(text);
            Vec::new()
        }
        Msg::FileChosen(pick) => {
            apply_pick(&mut state, pick, false);
            Vec::new()
        }
        Msg::FileDropped(pick) => {
            state.set_dragging(false);
            apply_pick(&mut state, pick, true);
            Vec::new()
        }
        Msg::FileRemoved => {
            state.remove_file();
            Vec::new()
        }
        Msg::DragStateChanged(over) => {
            state.set_dragging(over);
            Vec::new()
        }
        Msg::SubmitPressed => submit(&mut state),
        Msg::SubmitSucceeded {
            submission_id,
            answer,
        } => {
            // Answers for anything but the current in-flight submission are
            // discarded, so a completion can never mutate a session that has
            // moved on.
            if state.in_flight() == Some(submission_id) {
                state.push_message(Role::System, answer, false);
                state.complete_submission();
            }
            Vec::new()
        }
        Msg::SubmitFailed {
            submission_id,
            message,
        } => {
            if state.in_flight() == Some(submission_id) {
                state.push_message(Role::System, format!("Error: {message}"), true);
                state.set_error(message);
                state.complete_submission();
            }
            Vec::new()
        }
        Msg::ClearClicked => {
            state.reset_transcript(CLEARED_NOTICE);
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

/// The submission algorithm. Validation failures surface on the banner only
/// and never touch the transcript; a pass appends the user message before
/// the request is even built.
fn submit(state: &mut SessionState) -> Vec<Effect> {
    if state.is_loading() {
        return Vec::new();
    }
    if state.question().trim().is_empty() {
        return Vec::new();
    }

    let source = match state.mode() {
        SourceMode::Url => {
            if state.url().is_empty() {
                state.set_error(ERR_MISSING_URL);
                return Vec::new();
            }
            QuestionSource::Url(state.url().to_owned())
        }
        SourceMode::Upload => match state.file() {
            Some(pick) => QuestionSource::File(pick.clone()),
            None => {
                state.set_error(ERR_MISSING_FILE);
                return Vec::new();
            }
        },
    };

    let question = state.question().to_owned();
    state.push_message(Role::User, question.clone(), false);
    let submission_id = state.begin_submission();

    vec![Effect::SendQuestion {
        submission_id,
        question,
        source,
    }]
}

/// Accepts only picks declared as PDF. A rejected pick leaves the stored
/// file and the active mode untouched; an accepted drop force-switches to
/// upload mode.
fn apply_pick(state: &mut SessionState, pick: FilePick, switch_mode: bool) {
    if pick.media_type == PDF_MEDIA_TYPE {
        state.accept_file(pick);
        if switch_mode {
            state.set_mode(SourceMode::Upload);
        }
    } else {
        state.set_error(ERR_INVALID_PDF);
    }
}
