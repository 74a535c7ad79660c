use std::time::Duration;

use docchat_client::{
    DocumentSource, FailureKind, HttpQuestionService, QuestionService, ServiceSettings,
    GENERIC_FAILURE_MESSAGE,
};
use pretty_assertions::assert_eq;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn service_for(server: &MockServer) -> HttpQuestionService {
    HttpQuestionService::new(ServiceSettings::with_base_url(server.uri()))
}

#[tokio::test]
async fn url_ask_posts_multipart_and_returns_the_answer() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat"))
        .and(body_string_contains("name=\"question\""))
        .and(body_string_contains("What is this about?"))
        .and(body_string_contains("name=\"url\""))
        .and(body_string_contains("https://x.com/a.pdf"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "answer": "This is a report on X." })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let service = service_for(&server);
    let source = DocumentSource::Url("https://x.com/a.pdf".to_string());

    let answer = service
        .ask("What is this about?", &source)
        .await
        .expect("ask ok");
    assert_eq!(answer, "This is a report on X.");
}

#[tokio::test]
async fn pdf_ask_attaches_the_file_part() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat"))
        .and(body_string_contains("name=\"file\""))
        .and(body_string_contains("filename=\"report.pdf\""))
        .and(body_string_contains("application/pdf"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "answer": "Summary." })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let service = service_for(&server);
    let source = DocumentSource::Pdf {
        name: "report.pdf".to_string(),
        bytes: b"%PDF-1.4 fake".to_vec(),
    };

    let answer = service.ask("Summarize", &source).await.expect("ask ok");
    assert_eq!(answer, "Summary.");
}

#[tokio::test]
async fn error_body_detail_is_surfaced_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(
            ResponseTemplate::new(422)
                .set_body_json(serde_json::json!({ "detail": "file too large" })),
        )
        .mount(&server)
        .await;

    let service = service_for(&server);
    let source = DocumentSource::Url("https://x.com/a.pdf".to_string());

    let err = service.ask("Summarize", &source).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(422));
    assert_eq!(err.message, "file too large");
}

#[tokio::test]
async fn error_without_detail_uses_the_generic_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let service = service_for(&server);
    let source = DocumentSource::Url("https://x.com/a.pdf".to_string());

    let err = service.ask("Summarize", &source).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(500));
    assert_eq!(err.message, GENERIC_FAILURE_MESSAGE);
}

#[tokio::test]
async fn malformed_success_body_maps_to_generic_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let service = service_for(&server);
    let source = DocumentSource::Url("https://x.com/a.pdf".to_string());

    let err = service.ask("Summarize", &source).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::MalformedResponse);
    assert_eq!(err.message, GENERIC_FAILURE_MESSAGE);
}

#[tokio::test]
async fn slow_service_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(serde_json::json!({ "answer": "late" })),
        )
        .mount(&server)
        .await;

    let settings = ServiceSettings {
        request_timeout: Duration::from_millis(50),
        ..ServiceSettings::with_base_url(server.uri())
    };
    let service = HttpQuestionService::new(settings);
    let source = DocumentSource::Url("https://x.com/a.pdf".to_string());

    let err = service.ask("Summarize", &source).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
    assert_eq!(err.message, GENERIC_FAILURE_MESSAGE);
}

#[tokio::test]
async fn unreachable_service_maps_to_network_failure() {
    // Nothing listens on port 9; connection is refused immediately.
    let service = HttpQuestionService::new(ServiceSettings::with_base_url("http://127.0.0.1:9"));
    let source = DocumentSource::Url("https://x.com/a.pdf".to_string());

    let err = service.ask("Summarize", &source).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Network);
    assert_eq!(err.message, GENERIC_FAILURE_MESSAGE);
}
