mod common;

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use common::{closed_port_url, completion_body, serve_once, serve_silence};
use jiff::Timestamp;
use waypoint_core::{
    decompose, CompletionService, EngineConfig, Goal, OpenAiService, PlanOrchestrator,
    ServiceConfig, ServiceError,
};

const GOAL: &str = "Launch a product and marketing campaign in 2 weeks";

fn now() -> Timestamp {
    "2026-01-05T12:00:00Z".parse().unwrap()
}

fn service_config(base_url: &str) -> ServiceConfig {
    ServiceConfig::new("sk-test").with_base_url(base_url)
}

struct FailingService;

#[async_trait]
impl CompletionService for FailingService {
    async fn complete(&self, _prompt: &str) -> Result<String, ServiceError> {
        Err(ServiceError::Timeout(Duration::from_secs(15)))
    }
}

struct CannedService(String);

#[async_trait]
impl CompletionService for CannedService {
    async fn complete(&self, _prompt: &str) -> Result<String, ServiceError> {
        Ok(self.0.clone())
    }
}

#[tokio::test]
async fn test_failing_service_matches_deterministic_plan() {
    let orchestrator = PlanOrchestrator::with_service(Arc::new(FailingService));

    let tasks = orchestrator.generate_at(GOAL, true, now()).await;

    assert_eq!(tasks, decompose(&Goal::new(GOAL), now()));
    assert!(tasks.iter().all(|t| t.llm_note.is_none()));
}

#[tokio::test]
async fn test_unparseable_reply_annotates_fallback() {
    let reply = "x".repeat(600);
    let orchestrator = PlanOrchestrator::with_service(Arc::new(CannedService(reply)));

    let tasks = orchestrator.generate_at(GOAL, true, now()).await;

    assert_eq!(tasks.len(), 7);
    for (task, expected) in tasks.iter().zip(decompose(&Goal::new(GOAL), now())) {
        assert_eq!(task.title, expected.title);
        assert_eq!(task.llm_note.as_deref(), Some("x".repeat(400).as_str()));
    }
}

#[tokio::test]
async fn test_unconfigured_service_is_bypassed() {
    let orchestrator = PlanOrchestrator::new(&EngineConfig::deterministic());
    let tasks = orchestrator.generate_at(GOAL, true, now()).await;
    assert_eq!(tasks, decompose(&Goal::new(GOAL), now()));
}

#[tokio::test]
async fn test_http_reply_replaces_plan() {
    let content = r#"[{"title":"Research market","description":"Interview users","start_date":"2026-01-05","end_date":"2026-01-07","depends_on":""},{"title":"Build landing page","description":"","start_date":"2026-01-08","end_date":"2026-01-12","depends_on":["Research market"]}]"#;
    let (base_url, request) = serve_once("200 OK", completion_body(content)).await;
    let orchestrator = PlanOrchestrator::new(&EngineConfig::with_service(service_config(&base_url)));

    let tasks = orchestrator.generate_at(GOAL, true, now()).await;

    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].title, "Research market");
    assert_eq!(tasks[1].depends_on, "Research market");

    let request = request.await.unwrap();
    assert!(request.starts_with("POST /v1/chat/completions"));
    assert!(request
        .to_ascii_lowercase()
        .contains("authorization: bearer sk-test"));
    assert!(request.contains("Goal: Launch a product and marketing campaign in 2 weeks"));
}

#[tokio::test]
async fn test_http_error_status_falls_back() {
    let (base_url, _request) =
        serve_once("503 Service Unavailable", r#"{"error":"overloaded"}"#.to_string()).await;
    let service = OpenAiService::from_config(&service_config(&base_url)).unwrap();

    let err = service.complete("Goal: write a book").await.unwrap_err();
    assert!(matches!(err, ServiceError::Status { status: 503, .. }));

    let (base_url, _request) =
        serve_once("503 Service Unavailable", r#"{"error":"overloaded"}"#.to_string()).await;
    let orchestrator = PlanOrchestrator::new(&EngineConfig::with_service(service_config(&base_url)));
    let tasks = orchestrator.generate_at(GOAL, true, now()).await;
    assert_eq!(tasks, decompose(&Goal::new(GOAL), now()));
}

#[tokio::test]
async fn test_envelope_without_choices_is_invalid() {
    let (base_url, _request) = serve_once("200 OK", r#"{"choices":[]}"#.to_string()).await;
    let service = OpenAiService::from_config(&service_config(&base_url)).unwrap();

    let err = service.complete("Goal: write a book").await.unwrap_err();
    assert!(matches!(err, ServiceError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_slow_service_times_out() {
    let base_url = serve_silence(Duration::from_secs(5)).await;
    let config = service_config(&base_url).with_timeout(Duration::from_millis(200));
    let service = OpenAiService::from_config(&config).unwrap();

    let err = service.complete("Goal: write a book").await.unwrap_err();
    assert!(matches!(err, ServiceError::Timeout(t) if t == Duration::from_millis(200)));
}

#[tokio::test]
async fn test_connection_refused_falls_back() {
    let base_url = closed_port_url().await;
    let service = OpenAiService::from_config(&service_config(&base_url)).unwrap();
    let err = service.complete("Goal: write a book").await.unwrap_err();
    assert!(matches!(err, ServiceError::Network(_)));

    let orchestrator = PlanOrchestrator::new(&EngineConfig::with_service(service_config(&base_url)));
    let tasks = orchestrator.generate_at("Write a book", true, now()).await;
    assert_eq!(tasks, decompose(&Goal::new("Write a book"), now()));
}
