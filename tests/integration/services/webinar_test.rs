//! Webinar service against the mock backend

use assert_matches::assert_matches;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, ResponseTemplate};

use eventdesk::models::{CreateWebinarRequest, WebinarStatus, WebinarType};
use eventdesk::normalize::FieldCase;
use eventdesk::services::ListQuery;
use eventdesk::utils::errors::EventDeskError;

use crate::fixtures;
use crate::helpers::{webinar_payload, TestConfig};
use crate::integration::{setup_integration_test, setup_with_config};

#[tokio::test]
async fn test_get_all_normalizes_results_envelope() {
    let ctx = setup_integration_test().await;
    ctx.backend.mock_get("/webinars/", fixtures::webinar_list()).await;

    let webinars = ctx.services.webinar_service.get_all(&ListQuery::new()).await.unwrap();

    assert_eq!(webinars.len(), 3);
    assert_eq!(webinars[0].status, WebinarStatus::RegistrationOpen);
    assert!(webinars[0].featured);
    assert_eq!(webinars[1].status, WebinarStatus::Live);
    assert_eq!(webinars[1].webinar_type, WebinarType::Hybrid);
    assert_eq!(webinars[2].webinar_type, WebinarType::Recorded);
    assert_eq!(webinars[2].recording_url, "https://videos.example.org/w3");
}

#[tokio::test]
async fn test_get_by_id_reads_camel_case_aliases() {
    let ctx = setup_integration_test().await;
    ctx.backend
        .mock_get("/webinars/w7/", json!({ "data": webinar_payload("w7", "upcoming", "2025-05-05") }))
        .await;

    let webinar = ctx.services.webinar_service.get_by_id("w7").await.unwrap();

    assert_eq!(webinar.id, "w7");
    assert_eq!(webinar.status, WebinarStatus::RegistrationOpen);
    assert_eq!(webinar.registration_count, 3);
    assert_eq!(webinar.speakers.len(), 1);
    assert_eq!(webinar.tags, vec!["ai".to_string()]);
}

#[tokio::test]
async fn test_ids_are_encoded_as_one_path_segment() {
    let ctx = setup_integration_test().await;
    ctx.backend
        .mock_get("/webinars/a%2Fb%3Fc%23d/", webinar_payload("a/b?c#d", "Live", "2025-05-05"))
        .await;
    ctx.backend.mock_no_content("DELETE", "/webinars/a%2Fb%3Fc%23d/").await;

    let webinar = ctx.services.webinar_service.get_by_id("a/b?c#d").await.unwrap();
    ctx.services.webinar_service.delete("a/b?c#d").await.unwrap();

    assert_eq!(webinar.id, "a/b?c#d");
    let requests = ctx.backend.received().await;
    assert_eq!(requests.len(), 2);
    assert!(requests.iter().all(|r| r.url.path() == "/webinars/a%2Fb%3Fc%23d/" && r.url.query().is_none()));
}

#[tokio::test]
async fn test_get_featured() {
    let ctx = setup_integration_test().await;
    ctx.backend
        .mock_get("/webinars/featured/", json!({ "webinars": [webinar_payload("w1", "Live", "2025-05-05")] }))
        .await;

    let featured = ctx.services.webinar_service.get_featured().await.unwrap();

    assert_eq!(featured.len(), 1);
    assert_eq!(featured[0].id, "w1");
}

#[tokio::test]
async fn test_toggle_featured_posts_and_reads_back() {
    let ctx = setup_integration_test().await;
    ctx.backend
        .mock_json("POST", "/webinars/w1/toggle-featured/", 200, json!({ "success": true }))
        .await;
    ctx.backend
        .mock_get("/webinars/w1/", json!({ "id": "w1", "title": "Intro to Async Rust", "is_featured": false }))
        .await;

    let webinar = ctx.services.webinar_service.toggle_featured("w1").await.unwrap();

    assert_eq!(webinar.id, "w1");
    assert!(!webinar.featured);
}

#[tokio::test]
async fn test_update_status_sends_label() {
    let ctx = setup_integration_test().await;
    Mock::given(method("PATCH"))
        .and(path("/webinars/w1/status/"))
        .and(body_partial_json(json!({ "status": "Registration Open" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": { "id": "w1", "status": "registration_open" } })))
        .mount(&ctx.backend.server)
        .await;

    let webinar = ctx
        .services
        .webinar_service
        .update_status("w1", WebinarStatus::RegistrationOpen)
        .await
        .unwrap();

    assert_eq!(webinar.status, WebinarStatus::RegistrationOpen);
}

#[tokio::test]
async fn test_delete() {
    let ctx = setup_integration_test().await;
    ctx.backend.mock_no_content("DELETE", "/webinars/w1/").await;
    ctx.backend.mock_error("DELETE", "/webinars/missing/", 404, "Not found").await;

    let service = &ctx.services.webinar_service;
    assert!(service.delete("w1").await.is_ok());

    let err = service.delete("missing").await.unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert_matches!(err, EventDeskError::Api(_));
}

#[tokio::test]
async fn test_camel_case_wire_format() {
    let ctx = setup_with_config(TestConfig {
        wire_case: FieldCase::Camel,
        ..Default::default()
    })
    .await;
    Mock::given(method("POST"))
        .and(path("/webinars/"))
        .and(body_partial_json(json!({
            "title": "Open Science",
            "targetAudience": ["Researchers"],
            "meetingLink": "https://meet.example.org/open-science",
            "type": "Recorded"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": "w9", "title": "Open Science" })))
        .mount(&ctx.backend.server)
        .await;

    let request = CreateWebinarRequest {
        title: "Open Science".to_string(),
        target_audience: vec!["Researchers".to_string()],
        meeting_link: "https://meet.example.org/open-science".to_string(),
        webinar_type: WebinarType::Recorded,
        ..Default::default()
    };
    let webinar = ctx.services.webinar_service.create(&request).await.unwrap();

    assert_eq!(webinar.id, "w9");
}

#[tokio::test]
async fn test_analytics() {
    let ctx = setup_integration_test().await;
    ctx.backend
        .mock_get("/webinars/w1/analytics/", json!({ "registrations": [1, 2, 3], "conversion": "0.25" }))
        .await;

    let report = ctx.services.webinar_service.get_analytics("w1").await.unwrap();

    assert_eq!(report.total_registrations(), 3);
    assert_eq!(report.conversion_rate(), 0.25);
}
