use std::fs;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use chat_logging::{chat_info, chat_warn};
use docchat_client::{
    DocumentSource, ServiceEvent, ServiceHandle, ServiceSettings, GENERIC_FAILURE_MESSAGE,
};
use docchat_core::{Effect, Msg, QuestionSource};

use super::app::PlatformMsg;

pub(crate) struct EffectRunner {
    service: Arc<ServiceHandle>,
    msg_tx: mpsc::Sender<PlatformMsg>,
}

impl EffectRunner {
    pub(crate) fn new(msg_tx: mpsc::Sender<PlatformMsg>, settings: ServiceSettings) -> Self {
        let service = Arc::new(ServiceHandle::new(settings));
        let runner = Self {
            service,
            msg_tx: msg_tx.clone(),
        };
        runner.spawn_event_pump(msg_tx);
        runner
    }

    pub(crate) fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SendQuestion {
                    submission_id,
                    question,
                    source,
                } => {
                    chat_info!(
                        "ask submission_id={} question_len={}",
                        submission_id,
                        question.len()
                    );
                    match load_source(source) {
                        Ok(source) => self.service.ask(submission_id, question, source),
                        Err(message) => {
                            // The file vanished between pick and send; fold it
                            // back in as an ordinary submission failure.
                            let _ = self.msg_tx.send(PlatformMsg::Core(Msg::SubmitFailed {
                                submission_id,
                                message,
                            }));
                        }
                    }
                }
            }
        }
    }

    fn spawn_event_pump(&self, msg_tx: mpsc::Sender<PlatformMsg>) {
        let service = self.service.clone();
        thread::spawn(move || loop {
            if let Some(event) = service.try_recv() {
                let ServiceEvent::AskCompleted {
                    submission_id,
                    result,
                } = event;
                let msg = match result {
                    Ok(answer) => Msg::SubmitSucceeded {
                        submission_id,
                        answer,
                    },
                    Err(err) => {
                        chat_warn!("ask {} failed: {}", submission_id, err);
                        Msg::SubmitFailed {
                            submission_id,
                            message: err.message,
                        }
                    }
                };
                if msg_tx.send(PlatformMsg::Core(msg)).is_err() {
                    break;
                }
            } else {
                thread::sleep(Duration::from_millis(20));
            }
        });
    }
}

/// Reads the picked file into memory at send time; the session itself only
/// ever holds pick metadata.
fn load_source(source: QuestionSource) -> Result<DocumentSource, String> {
    match source {
        QuestionSource::Url(url) => Ok(DocumentSource::Url(url)),
        QuestionSource::File(pick) => match fs::read(&pick.path) {
            Ok(bytes) => Ok(DocumentSource::Pdf {
                name: pick.name,
                bytes,
            }),
            Err(err) => {
                chat_warn!("reading {:?} failed: {}", pick.path, err);
                Err(GENERIC_FAILURE_MESSAGE.to_string())
            }
        },
    }
}
