//! Maps terminal line input onto session messages.

use std::fs;
use std::path::Path;

use docchat_core::{FilePick, Msg, SourceMode, PDF_MEDIA_TYPE};

/// What a single input line asks the app to do.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum ParsedLine {
    Dispatch(Vec<Msg>),
    Help,
    Quit,
    Ignored,
    Invalid(String),
}

pub(crate) fn parse_line(line: &str) -> ParsedLine {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return ParsedLine::Ignored;
    }

    if let Some(rest) = trimmed.strip_prefix(':') {
        return parse_command(rest);
    }

    // A bare line naming an existing file is the terminal's drag-and-drop:
    // most terminals paste the path when a file is dropped on the window.
    let path = Path::new(trimmed);
    if path.is_file() {
        return match pick_from_path(path) {
            Ok(pick) => ParsedLine::Dispatch(vec![Msg::FileDropped(pick)]),
            Err(err) => ParsedLine::Invalid(format!("cannot read {trimmed}: {err}")),
        };
    }

    // Anything else is a question; hitting enter submits it.
    ParsedLine::Dispatch(vec![
        Msg::QuestionChanged(line.to_string()),
        Msg::SubmitPressed,
    ])
}

fn parse_command(command: &str) -> ParsedLine {
    let (name, rest) = match command.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (command, ""),
    };

    match name {
        "quit" | "q" => ParsedLine::Quit,
        "help" | "h" => ParsedLine::Help,
        "clear" => ParsedLine::Dispatch(vec![Msg::ClearClicked]),
        "remove" => ParsedLine::Dispatch(vec![Msg::FileRemoved]),
        "mode" => match rest {
            "url" => ParsedLine::Dispatch(vec![Msg::ModeSelected(SourceMode::Url)]),
            "upload" => ParsedLine::Dispatch(vec![Msg::ModeSelected(SourceMode::Upload)]),
            other => {
                ParsedLine::Invalid(format!("unknown mode '{other}', expected url or upload"))
            }
        },
        "url" => ParsedLine::Dispatch(vec![Msg::UrlChanged(rest.to_string())]),
        "file" => {
            if rest.is_empty() {
                return ParsedLine::Invalid("usage: :file <path>".to_string());
            }
            match pick_from_path(Path::new(rest)) {
                Ok(pick) => ParsedLine::Dispatch(vec![Msg::FileChosen(pick)]),
                Err(err) => ParsedLine::Invalid(format!("cannot read {rest}: {err}")),
            }
        }
        other => ParsedLine::Invalid(format!("unknown command ':{other}', try :help")),
    }
}

/// Builds a pick carrying the declared media type a browser picker would
/// report: a `.pdf` extension declares `application/pdf`, everything else is
/// opaque bytes. Acceptance is decided by the session, not here.
fn pick_from_path(path: &Path) -> std::io::Result<FilePick> {
    let metadata = fs::metadata(path)?;
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let media_type = if path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
    {
        PDF_MEDIA_TYPE
    } else {
        "application/octet-stream"
    };

    Ok(FilePick {
        name,
        size_bytes: metadata.len(),
        media_type: media_type.to_string(),
        path: path.to_path_buf(),
    })
}
