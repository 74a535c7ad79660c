//! Renders view-model snapshots as incremental terminal output.

use docchat_core::{Message, MessageId, Role, SessionViewModel, SourceMode};

use super::constants;

/// Remembers what has already been printed so each render only emits the
/// delta. Message ids are monotonic, so a high-water mark is enough even
/// across transcript clears.
#[derive(Default)]
pub(crate) struct RenderTracker {
    last_message_id: MessageId,
    last_error: Option<String>,
    was_loading: bool,
    last_source: Option<String>,
}

pub(crate) fn render_full(view: &SessionViewModel, tracker: &mut RenderTracker) {
    println!("{}", constants::PROMPT_HINT);
    render_update(view, tracker);
}

pub(crate) fn render_update(view: &SessionViewModel, tracker: &mut RenderTracker) {
    for message in &view.transcript {
        if message.id > tracker.last_message_id {
            print_message(message);
            tracker.last_message_id = message.id;
        }
    }

    if view.error != tracker.last_error {
        if let Some(error) = &view.error {
            println!("! {error}");
        }
        tracker.last_error = view.error.clone();
    }

    if view.loading && !tracker.was_loading {
        println!("{}", constants::THINKING_LINE);
    }
    tracker.was_loading = view.loading;

    let source = source_summary(view);
    if tracker.last_source.as_ref() != Some(&source) {
        println!("[{source}]");
        tracker.last_source = Some(source);
    }
}

pub(crate) fn render_help() {
    println!("{}", constants::HELP_TEXT);
}

pub(crate) fn render_rejection(reason: &str) {
    println!("! {reason}");
}

fn print_message(message: &Message) {
    let label = match message.role {
        Role::User => constants::USER_LABEL,
        Role::System => constants::ASSISTANT_LABEL,
    };
    if message.is_error {
        println!("{label}> [error] {}", message.content);
    } else {
        println!("{label}> {}", message.content);
    }
}

fn source_summary(view: &SessionViewModel) -> String {
    match view.mode {
        SourceMode::Url => {
            if view.url.is_empty() {
                "source: url (unset)".to_string()
            } else {
                format!("source: url {}", view.url)
            }
        }
        SourceMode::Upload => match &view.selected_file {
            Some(file) => format!(
                "source: upload {} ({:.2} MB, {})",
                file.name,
                file.size_bytes as f64 / 1024.0 / 1024.0,
                constants::MAX_SIZE_HINT
            ),
            None => format!("source: upload (no file, {})", constants::MAX_SIZE_HINT),
        },
    }
}
