use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use crate::{
    AskError, DocumentSource, HttpQuestionService, QuestionService, ServiceEvent, ServiceSettings,
    SubmissionId,
};

enum ServiceCommand {
    Ask {
        submission_id: SubmissionId,
        question: String,
        source: DocumentSource,
    },
}

/// Owns the background thread that talks to the service. Commands go in
/// through [`ServiceHandle::ask`]; completions come back out of
/// [`ServiceHandle::try_recv`].
pub struct ServiceHandle {
    cmd_tx: mpsc::Sender<ServiceCommand>,
    event_rx: Mutex<mpsc::Receiver<ServiceEvent>>,
}

impl ServiceHandle {
    pub fn new(settings: ServiceSettings) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel::<ServiceEvent>();
        let service = Arc::new(HttpQuestionService::new(settings));

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let service = service.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(service.as_ref(), command, event_tx).await;
                });
            }
        });

        Self {
            cmd_tx,
            event_rx: Mutex::new(event_rx),
        }
    }

    pub fn ask(&self, submission_id: SubmissionId, question: String, source: DocumentSource) {
        let _ = self.cmd_tx.send(ServiceCommand::Ask {
            submission_id,
            question,
            source,
        });
    }

    pub fn try_recv(&self) -> Option<ServiceEvent> {
        self.event_rx.lock().ok()?.try_recv().ok()
    }
}

async fn handle_command(
    service: &dyn QuestionService,
    command: ServiceCommand,
    event_tx: mpsc::Sender<ServiceEvent>,
) {
    match command {
        ServiceCommand::Ask {
            submission_id,
            question,
            source,
        } => {
            let result: Result<String, AskError> = service.ask(&question, &source).await;
            let _ = event_tx.send(ServiceEvent::AskCompleted {
                submission_id,
                result,
            });
        }
    }
}
