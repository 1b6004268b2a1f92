//! Workshop service against the mock backend

use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, ResponseTemplate};

use eventdesk::models::ConferenceStatus;
use eventdesk::services::ListQuery;

use crate::fixtures;
use crate::helpers::{registration_payload, workshop_payload};
use crate::integration::setup_integration_test;

#[tokio::test]
async fn test_get_all_reads_bare_array() {
    let ctx = setup_integration_test().await;
    ctx.backend.mock_get("/workshops/", fixtures::workshop_list()).await;

    let workshops = ctx.services.workshop_service.get_all(&ListQuery::new()).await.unwrap();

    assert_eq!(workshops.len(), 2);
    assert_eq!(workshops[0].facilitator, "Ada");
    assert_eq!(workshops[0].status, ConferenceStatus::RegistrationOpen);
    assert_eq!(workshops[1].status, ConferenceStatus::Planning);
}

#[tokio::test]
async fn test_get_by_id_reads_aliases() {
    let ctx = setup_integration_test().await;
    ctx.backend.mock_get("/workshops/k3/", workshop_payload("k3", "2025-07-20")).await;

    let workshop = ctx.services.workshop_service.get_by_id("k3").await.unwrap();

    assert_eq!(workshop.capacity, 20);
    assert!(!workshop.facilitator.is_empty());
    assert_eq!(workshop.start().map(|d| d.to_string()), Some("2025-07-20".to_string()));
}

#[tokio::test]
async fn test_update_status_patches_record() {
    let ctx = setup_integration_test().await;
    Mock::given(method("PATCH"))
        .and(path("/workshops/k1/"))
        .and(body_partial_json(json!({ "status": "completed" })))
        .respond_with(ResponseTemplate::new(204))
        .mount(&ctx.backend.server)
        .await;
    ctx.backend
        .mock_get("/workshops/k1/", json!({ "id": "k1", "title": "Hands-on Tokio", "status": "completed" }))
        .await;

    let workshop = ctx
        .services
        .workshop_service
        .update_status("k1", ConferenceStatus::Completed)
        .await
        .unwrap();

    assert_eq!(workshop.id, "k1");
    assert_eq!(workshop.status, ConferenceStatus::Completed);
}

#[tokio::test]
async fn test_registrations() {
    let ctx = setup_integration_test().await;
    ctx.backend
        .mock_get("/workshops/k1/registrations/", json!([registration_payload("r1", "", "paid")]))
        .await;

    let registrations = ctx.services.workshop_service.get_registrations("k1").await.unwrap();

    assert_eq!(registrations.len(), 1);
    assert_eq!(registrations[0].id, "r1");
}
