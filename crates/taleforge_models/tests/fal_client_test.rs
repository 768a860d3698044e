// HTTP-level tests for the fal queue client against a local mock server.

use serde_json::json;
use taleforge_error::{ExternalService, TaleforgeErrorKind};
use taleforge_models::{FalClient, ImageArguments, ImageProvider, QueueStatus};
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client(server: &MockServer) -> anyhow::Result<FalClient> {
    Ok(FalClient::new("test-key", FalClient::DEFAULT_MODEL)?.with_base_url(server.uri()))
}

#[tokio::test]
async fn test_submit_posts_arguments_to_model_path() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/fal-ai/flux/dev"))
        .and(header("Authorization", "Key test-key"))
        .and(body_partial_json(json!({
            "prompt": "a rocket",
            "image_size": "portrait_4_3",
            "num_images": 1,
            "sync_mode": false,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "request_id": "abc-123",
            "status_url": "ignored",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request_id = client(&server)
        .await?
        .submit(&ImageArguments::cover("a rocket"))
        .await?;

    assert_eq!(request_id.as_deref(), Some("abc-123"));
    Ok(())
}

#[tokio::test]
async fn test_submit_without_request_id_returns_none() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let request_id = client(&server)
        .await?
        .submit(&ImageArguments::cover("a rocket"))
        .await?;

    assert_eq!(request_id, None);
    Ok(())
}

#[tokio::test]
async fn test_status_is_read_from_app_path_with_logs() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/fal-ai/flux/requests/abc-123/status"))
        .and(query_param("logs", "1"))
        .respond_with(ResponseTemplate::new(202).set_body_json(json!({
            "status": "IN_PROGRESS",
            "logs": [{"message": "denoising 3/8", "level": "INFO"}],
        })))
        .mount(&server)
        .await;

    let status = client(&server).await?.status("abc-123").await?;

    match status {
        QueueStatus::InProgress { logs } => {
            let logs = logs.unwrap_or_default();
            assert_eq!(logs.len(), 1);
            assert_eq!(logs[0].message, "denoising 3/8");
        }
        other => panic!("expected in-progress, got {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn test_queued_and_completed_statuses_parse() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/fal-ai/flux/requests/queued/status"))
        .respond_with(
            ResponseTemplate::new(202)
                .set_body_json(json!({"status": "IN_QUEUE", "queue_position": 4})),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/fal-ai/flux/requests/done/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "COMPLETED"})))
        .mount(&server)
        .await;

    let fal = client(&server).await?;
    assert_eq!(
        fal.status("queued").await?,
        QueueStatus::InQueue {
            queue_position: Some(4)
        }
    );
    assert_eq!(fal.status("done").await?, QueueStatus::Completed { logs: None });
    Ok(())
}

#[tokio::test]
async fn test_result_returns_first_image_url() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/fal-ai/flux/requests/abc-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "images": [
                {"url": "https://fal.media/first.jpg", "content_type": "image/jpeg"},
                {"url": "https://fal.media/second.jpg"},
            ],
            "seed": 42,
        })))
        .mount(&server)
        .await;

    let output = client(&server).await?.result("abc-123").await?;

    assert_eq!(output.first_url(), Some("https://fal.media/first.jpg"));
    Ok(())
}

#[tokio::test]
async fn test_error_status_becomes_image_model_error() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid key"))
        .mount(&server)
        .await;

    let err = client(&server).await?.status("abc-123").await.unwrap_err();

    match err.kind() {
        TaleforgeErrorKind::ExternalService(e) => {
            assert_eq!(e.service, ExternalService::ImageModel);
            assert_eq!(e.status, 401);
            assert_eq!(e.message, "invalid key");
        }
        other => panic!("expected external service error, got {other:?}"),
    }
    assert_eq!(err.status_code(), 500);
    Ok(())
}

#[test]
fn test_blank_api_key_is_rejected() {
    let err = FalClient::new("  ", FalClient::DEFAULT_MODEL).unwrap_err();
    match err.kind() {
        TaleforgeErrorKind::Config(e) => assert_eq!(e.setting.as_deref(), Some("FAL_KEY")),
        other => panic!("expected config error, got {other:?}"),
    }
}
