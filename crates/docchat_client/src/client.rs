use std::time::Duration;

use chat_logging::{chat_debug, chat_warn};
use serde::Deserialize;

use crate::{AskError, DocumentSource, FailureKind};

/// Connection settings for the question-answering service.
#[derive(Debug, Clone)]
pub struct ServiceSettings {
    /// Base url of the service; the chat endpoint is always `{base_url}/chat`.
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(60),
        }
    }
}

impl ServiceSettings {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    fn chat_endpoint(&self) -> String {
        format!("{}/chat", self.base_url.trim_end_matches('/'))
    }
}

/// Seam for the remote question-answering service.
#[async_trait::async_trait]
pub trait QuestionService: Send + Sync {
    async fn ask(&self, question: &str, source: &DocumentSource) -> Result<String, AskError>;
}

#[derive(Debug, Clone)]
pub struct HttpQuestionService {
    settings: ServiceSettings,
}

#[derive(Debug, Deserialize)]
struct AnswerPayload {
    answer: String,
}

impl HttpQuestionService {
    pub fn new(settings: ServiceSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, AskError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| {
                chat_warn!("client build failed: {err}");
                AskError::generic(FailureKind::InvalidRequest)
            })
    }
}

#[async_trait::async_trait]
impl QuestionService for HttpQuestionService {
    async fn ask(&self, question: &str, source: &DocumentSource) -> Result<String, AskError> {
        let client = self.build_client()?;
        let form = build_form(question, source)?;
        let endpoint = self.settings.chat_endpoint();
        chat_debug!("POST {} question_len={}", endpoint, question.len());

        let response = client
            .post(&endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(error_from_body(status.as_u16(), &body));
        }

        let payload: AnswerPayload = response.json().await.map_err(|err| {
            chat_warn!("malformed answer payload: {err}");
            AskError::generic(FailureKind::MalformedResponse)
        })?;
        Ok(payload.answer)
    }
}

fn build_form(
    question: &str,
    source: &DocumentSource,
) -> Result<reqwest::multipart::Form, AskError> {
    let form = reqwest::multipart::Form::new().text("question", question.to_owned());
    let form = match source {
        DocumentSource::Url(url) => form.text("url", url.clone()),
        DocumentSource::Pdf { name, bytes } => {
            let part = reqwest::multipart::Part::bytes(bytes.clone())
                .file_name(name.clone())
                .mime_str("application/pdf")
                .map_err(|err| {
                    chat_warn!("building pdf part failed: {err}");
                    AskError::generic(FailureKind::InvalidRequest)
                })?;
            form.part("file", part)
        }
    };
    Ok(form)
}

/// Pulls the service's human-readable `detail` out of an error body, falling
/// back to the generic message when absent or non-textual.
fn error_from_body(status: u16, body: &str) -> AskError {
    let detail = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| value.get("detail")?.as_str().map(ToOwned::to_owned));
    match detail {
        Some(message) => AskError::new(FailureKind::HttpStatus(status), message),
        None => AskError::generic(FailureKind::HttpStatus(status)),
    }
}

fn map_transport_error(err: reqwest::Error) -> AskError {
    if err.is_timeout() {
        chat_warn!("ask timed out: {err}");
        return AskError::generic(FailureKind::Timeout);
    }
    chat_warn!("ask transport failure: {err}");
    AskError::generic(FailureKind::Network)
}
