use std::io::{self, BufRead};
use std::sync::mpsc;
use std::thread;

use chat_logging::chat_info;
use docchat_client::ServiceSettings;
use docchat_core::{update, Msg, SessionState};

use super::effects::EffectRunner;
use super::input::{parse_line, ParsedLine};
use super::logging;
use super::ui::render::{self, RenderTracker};

/// Everything the event loop can receive: core messages plus the few
/// terminal-only requests that never touch session state.
pub(crate) enum PlatformMsg {
    Core(Msg),
    ShowHelp,
    Reject(String),
    Quit,
}

pub fn run_app() -> anyhow::Result<()> {
    logging::initialize();

    let settings = match std::env::args().nth(1) {
        Some(base_url) => ServiceSettings::with_base_url(base_url),
        None => ServiceSettings::default(),
    };
    chat_info!("docchat starting against {}", settings.base_url);

    let (msg_tx, msg_rx) = mpsc::channel::<PlatformMsg>();
    let effects = EffectRunner::new(msg_tx.clone(), settings);
    spawn_stdin_reader(msg_tx);

    let mut state = SessionState::new();
    let mut tracker = RenderTracker::default();
    render::render_full(&state.view(), &mut tracker);

    while let Ok(platform_msg) = msg_rx.recv() {
        match platform_msg {
            PlatformMsg::Quit => break,
            PlatformMsg::ShowHelp => render::render_help(),
            PlatformMsg::Reject(reason) => render::render_rejection(&reason),
            PlatformMsg::Core(msg) => {
                let (next, pending) = update(std::mem::take(&mut state), msg);
                state = next;
                effects.run(pending);
                if state.consume_dirty() {
                    render::render_update(&state.view(), &mut tracker);
                }
            }
        }
    }

    chat_info!("docchat exiting");
    Ok(())
}

fn spawn_stdin_reader(msg_tx: mpsc::Sender<PlatformMsg>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            let outcome = match parse_line(&line) {
                ParsedLine::Dispatch(msgs) => msgs
                    .into_iter()
                    .try_for_each(|msg| msg_tx.send(PlatformMsg::Core(msg))),
                ParsedLine::Help => msg_tx.send(PlatformMsg::ShowHelp),
                ParsedLine::Invalid(reason) => msg_tx.send(PlatformMsg::Reject(reason)),
                ParsedLine::Ignored => Ok(()),
                ParsedLine::Quit => break,
            };
            if outcome.is_err() {
                break;
            }
        }
        // Reached on :quit and on stdin EOF alike.
        let _ = msg_tx.send(PlatformMsg::Quit);
    });
}
