use docchat_core::{update, FilePick, Msg, SessionState, SourceMode, PDF_MEDIA_TYPE};

fn init_logging() {
    chat_logging::initialize_for_tests();
}

fn pdf_pick(name: &str) -> FilePick {
    FilePick {
        name: name.to_string(),
        size_bytes: 2048,
        media_type: PDF_MEDIA_TYPE.to_string(),
        path: format!("/tmp/{name}").into(),
    }
}

fn text_pick(name: &str) -> FilePick {
    FilePick {
        name: name.to_string(),
        size_bytes: 64,
        media_type: "text/plain".to_string(),
        path: format!("/tmp/{name}").into(),
    }
}

#[test]
fn chosen_pdf_is_stored_without_switching_mode() {
    init_logging();
    let (state, effects) = update(SessionState::new(), Msg::FileChosen(pdf_pick("a.pdf")));
    let view = state.view();

    assert!(effects.is_empty());
    assert_eq!(view.mode, SourceMode::Url);
    assert_eq!(view.selected_file.as_ref().unwrap().name, "a.pdf");
    assert_eq!(view.error, None);
}

#[test]
fn non_pdf_pick_is_rejected_without_clobbering_selection() {
    init_logging();
    let (state, _) = update(SessionState::new(), Msg::FileChosen(pdf_pick("keep.pdf")));
    let (state, _) = update(state, Msg::FileChosen(text_pick("notes.txt")));
    let view = state.view();

    assert_eq!(view.selected_file.as_ref().unwrap().name, "keep.pdf");
    assert_eq!(view.error.as_deref(), Some("Please upload a valid PDF file."));
    // Rejection is banner-only; the transcript never records it.
    assert_eq!(view.transcript.len(), 1);
}

#[test]
fn accepted_drop_forces_upload_mode() {
    init_logging();
    let (state, _) = update(SessionState::new(), Msg::DragStateChanged(true));
    assert!(state.view().dragging_over);

    let (state, _) = update(state, Msg::FileDropped(pdf_pick("dropped.pdf")));
    let view = state.view();

    assert_eq!(view.mode, SourceMode::Upload);
    assert_eq!(view.selected_file.as_ref().unwrap().name, "dropped.pdf");
    assert!(!view.dragging_over);
    assert_eq!(view.error, None);
}

#[test]
fn rejected_drop_keeps_mode_and_selection() {
    init_logging();
    let (state, _) = update(SessionState::new(), Msg::FileChosen(pdf_pick("keep.pdf")));
    let (state, _) = update(state, Msg::DragStateChanged(true));
    let (state, _) = update(state, Msg::FileDropped(text_pick("image.png")));
    let view = state.view();

    assert_eq!(view.mode, SourceMode::Url);
    assert_eq!(view.selected_file.as_ref().unwrap().name, "keep.pdf");
    assert_eq!(view.error.as_deref(), Some("Please upload a valid PDF file."));
    assert!(!view.dragging_over);
}

#[test]
fn accepting_a_file_clears_a_previous_banner() {
    init_logging();
    let (state, _) = update(SessionState::new(), Msg::FileChosen(text_pick("bad.txt")));
    assert!(state.view().error.is_some());

    let (state, _) = update(state, Msg::FileChosen(pdf_pick("good.pdf")));
    assert_eq!(state.view().error, None);
}

#[test]
fn mode_switch_preserves_both_stored_values() {
    init_logging();
    let (state, _) = update(
        SessionState::new(),
        Msg::UrlChanged("https://x.com/a.pdf".to_string()),
    );
    let (state, _) = update(state, Msg::FileChosen(pdf_pick("kept.pdf")));

    let (state, _) = update(state, Msg::ModeSelected(SourceMode::Upload));
    let (state, _) = update(state, Msg::ModeSelected(SourceMode::Url));
    let view = state.view();

    assert_eq!(view.url, "https://x.com/a.pdf");
    assert_eq!(view.selected_file.as_ref().unwrap().name, "kept.pdf");
}

#[test]
fn remove_clears_file_but_not_mode() {
    init_logging();
    let (state, _) = update(SessionState::new(), Msg::FileDropped(pdf_pick("a.pdf")));
    assert_eq!(state.view().mode, SourceMode::Upload);

    let (state, effects) = update(state, Msg::FileRemoved);
    let view = state.view();

    assert!(effects.is_empty());
    assert_eq!(view.selected_file, None);
    assert_eq!(view.mode, SourceMode::Upload);
}

#[test]
fn drag_state_changes_are_declarative_and_coalesced() {
    init_logging();
    let (mut state, _) = update(SessionState::new(), Msg::DragStateChanged(true));
    assert!(state.consume_dirty());
    assert!(state.view().dragging_over);

    // Same value again: nothing to re-render.
    let (mut state, _) = update(state, Msg::DragStateChanged(true));
    assert!(!state.consume_dirty());

    let (mut state, _) = update(state, Msg::DragStateChanged(false));
    assert!(state.consume_dirty());
    assert!(!state.view().dragging_over);
}
