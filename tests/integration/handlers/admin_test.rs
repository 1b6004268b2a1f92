//! Admin boards: cache reconciliation, wizard saves and failure notices

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use assert_matches::assert_matches;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, ResponseTemplate};

use eventdesk::handlers::AdminBoard;
use eventdesk::models::{ConferenceStatus, PaymentStatus};
use eventdesk::services::{ImageUpload, ListQuery};
use eventdesk::state::scenarios::create_conference_wizard;
use eventdesk::state::FormDraft;
use eventdesk::utils::errors::EventDeskError;

use crate::fixtures;
use crate::helpers::{conference_payload, registration_payload, valid_conference_values};
use crate::integration::setup_integration_test;

#[tokio::test]
async fn test_load_fills_cache() {
    let ctx = setup_integration_test().await;
    ctx.backend.mock_get("/api/conferences", fixtures::conference_list()).await;

    let mut board = AdminBoard::new(ctx.services.conference_service.clone());
    assert!(board.store().loaded_at().is_none());

    let items = board.load(&ListQuery::new()).await.unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(board.store().len(), 3);
    assert!(board.store().loaded_at().is_some());
}

#[tokio::test]
async fn test_load_failure_gives_static_message() {
    let ctx = setup_integration_test().await;
    ctx.backend.mock_outage().await;

    let mut board = AdminBoard::new(ctx.services.conference_service.clone());
    let notice = board.load(&ListQuery::new()).await.unwrap_err();

    assert_eq!(notice.message, "Failed to load conferences");
    assert_eq!(notice.cause.status(), Some(500));
    assert!(board.items().is_empty());
}

/// Counts ERROR events seen by the current thread's subscriber
#[derive(Clone, Default)]
struct ErrorEvents(Arc<AtomicUsize>);

impl<S: tracing::Subscriber> Layer<S> for ErrorEvents {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == tracing::Level::ERROR {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

#[tokio::test]
async fn test_failure_is_logged_once_at_error_level() {
    let ctx = setup_integration_test().await;
    ctx.backend.mock_outage().await;
    let errors = ErrorEvents::default();
    let _guard = tracing_subscriber::registry().with(errors.clone()).set_default();

    let mut board = AdminBoard::new(ctx.services.conference_service.clone());
    board.load(&ListQuery::new()).await.unwrap_err();
    assert_eq!(errors.0.load(Ordering::SeqCst), 1);

    // validation failures stay local to the form
    let wizard = create_conference_wizard();
    let mut draft = FormDraft::new(&wizard);
    board.save_draft(&wizard, &mut draft).await.unwrap_err();
    assert_eq!(errors.0.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_create_then_delete_keeps_cache_in_step() {
    let ctx = setup_integration_test().await;
    ctx.backend
        .mock_json("POST", "/api/conferences", 201, conference_payload(42, "planning", "2025-11-01"))
        .await;
    ctx.backend.mock_no_content("DELETE", "/api/conferences/42").await;

    let wizard = create_conference_wizard();
    let mut board = AdminBoard::new(ctx.services.conference_service.clone());
    let mut draft = FormDraft::new(&wizard).with_values(valid_conference_values());

    let created = board.save_draft(&wizard, &mut draft).await.unwrap();
    assert_eq!(created.id, "42");
    assert_eq!(board.items().len(), 1);

    board.delete("42").await.unwrap();
    assert!(board.items().is_empty());
}

#[tokio::test]
async fn test_save_draft_sends_flattened_request() {
    let ctx = setup_integration_test().await;
    Mock::given(method("POST"))
        .and(path("/api/conferences"))
        .and(body_partial_json(json!({
            "type": "hybrid",
            "capacity": 300,
            "regular_fee": 149.0,
            "status": "registration_open",
            "start_time": "09:00"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": 77 })))
        .mount(&ctx.backend.server)
        .await;

    let wizard = create_conference_wizard();
    let mut board = AdminBoard::new(ctx.services.conference_service.clone());
    let mut draft = FormDraft::new(&wizard).with_values(valid_conference_values());

    let created = board.save_draft(&wizard, &mut draft).await.unwrap();
    assert_eq!(created.id, "77");
}

#[tokio::test]
async fn test_invalid_draft_never_reaches_backend() {
    let ctx = setup_integration_test().await;

    let wizard = create_conference_wizard();
    let mut board = AdminBoard::new(ctx.services.conference_service.clone());
    let mut draft = FormDraft::new(&wizard);

    let notice = board.save_draft(&wizard, &mut draft).await.unwrap_err();

    assert_eq!(notice.message, "Failed to create conference");
    assert_matches!(notice.cause, EventDeskError::Validation(_));
    assert_eq!(draft.errors().get("title"), Some("Title is required"));
    assert!(ctx.backend.received().await.is_empty());
}

#[tokio::test]
async fn test_edit_draft_round_trip() {
    let ctx = setup_integration_test().await;
    ctx.backend
        .mock_get("/api/conferences/5", conference_payload(5, "registration_open", "2025-09-01"))
        .await;
    Mock::given(method("PATCH"))
        .and(path("/api/conferences/5"))
        .and(body_partial_json(json!({ "title": "Renamed Conference", "capacity": 250 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 5, "title": "Renamed Conference" })))
        .mount(&ctx.backend.server)
        .await;

    let wizard = create_conference_wizard();
    let mut board = AdminBoard::new(ctx.services.conference_service.clone());

    let mut draft = board.edit_draft(&wizard, "5").await.unwrap();
    assert_eq!(draft.edit_id(), Some("5"));
    assert_eq!(draft.text("capacity"), "250");
    assert_eq!(draft.text("status"), "registration_open");

    draft.set("title", "Renamed Conference");
    let updated = board.save_draft(&wizard, &mut draft).await.unwrap();

    assert_eq!(updated.title, "Renamed Conference");
    assert_eq!(board.store().get("5").map(|c| c.title.as_str()), Some("Renamed Conference"));
}

#[tokio::test]
async fn test_status_and_featured_changes_reconcile_cache() {
    let ctx = setup_integration_test().await;
    ctx.backend.mock_get("/api/conferences", fixtures::conference_list()).await;
    ctx.backend
        .mock_json("PATCH", "/api/conferences/3/status", 200, json!({ "id": 3, "status": "planning" }))
        .await;
    Mock::given(method("PATCH"))
        .and(path("/api/conferences/1"))
        .and(body_partial_json(json!({ "featured": false })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 1, "is_featured": false })))
        .mount(&ctx.backend.server)
        .await;

    let mut board = AdminBoard::new(ctx.services.conference_service.clone());
    board.load(&ListQuery::new()).await.unwrap();

    board.update_status("3", ConferenceStatus::Planning).await.unwrap();
    assert_eq!(board.store().get("3").map(|c| c.status), Some(ConferenceStatus::Planning));

    board.toggle_featured("1").await.unwrap();
    assert_eq!(board.store().get("1").map(|c| c.featured), Some(false));

    // the cached record was used, so no extra read
    assert_eq!(ctx.backend.received().await.len(), 3);
}

#[tokio::test]
async fn test_upload_image_updates_draft_field() {
    let ctx = setup_integration_test().await;
    ctx.backend
        .mock_json("POST", "/api/conferences/upload-image", 200, fixtures::uploaded_file())
        .await;

    let wizard = create_conference_wizard();
    let board = AdminBoard::new(ctx.services.conference_service.clone());
    let mut draft = FormDraft::new(&wizard);

    let file = board
        .upload_image(&mut draft, "imageUrl", ImageUpload::new("banner.png", fixtures::PNG_BYTES.to_vec()))
        .await
        .unwrap();

    assert_eq!(draft.text("imageUrl"), file.url);
    assert!(!draft.is_uploading("imageUrl"));
}

#[tokio::test]
async fn test_failed_upload_clears_flag_and_keeps_value() {
    let ctx = setup_integration_test().await;
    ctx.backend
        .mock_error("POST", "/webinars/upload-image/", 413, "File too large")
        .await;

    let board = AdminBoard::new(ctx.services.webinar_service.clone());
    let wizard = eventdesk::state::scenarios::create_webinar_wizard();
    let mut draft = FormDraft::new(&wizard);
    draft.set("imageUrl", "https://cdn.example.org/old.png");

    let notice = board
        .upload_image(&mut draft, "imageUrl", ImageUpload::new("new.png", fixtures::PNG_BYTES.to_vec()))
        .await
        .unwrap_err();

    assert_eq!(notice.message, "Failed to upload image for webinar");
    assert_eq!(notice.cause.to_string(), "Backend API error: File too large");
    assert!(!draft.is_uploading("imageUrl"));
    assert_eq!(draft.text("imageUrl"), "https://cdn.example.org/old.png");
}

#[tokio::test]
async fn test_webinar_toggle_featured() {
    let ctx = setup_integration_test().await;
    ctx.backend
        .mock_json("POST", "/webinars/w1/toggle-featured/", 200, json!({ "id": "w1", "isFeatured": false }))
        .await;

    let mut board = AdminBoard::new(ctx.services.webinar_service.clone());
    let webinar = board.toggle_featured("w1").await.unwrap();

    assert!(!webinar.featured);
    assert_eq!(board.items().len(), 1);
}

#[tokio::test]
async fn test_payment_status_update() {
    let ctx = setup_integration_test().await;
    ctx.backend
        .mock_get("/registrations/", json!([registration_payload("r1", "c1", "pending")]))
        .await;
    ctx.backend
        .mock_json("PATCH", "/registrations/r1/", 200, registration_payload("r1", "c1", "paid"))
        .await;

    let mut board = AdminBoard::new(ctx.services.registration_service.clone());
    board.load(&ListQuery::new()).await.unwrap();
    board.update_payment_status("r1", PaymentStatus::Paid).await.unwrap();

    assert_eq!(board.store().get("r1").map(|r| r.payment_status), Some(PaymentStatus::Paid));
}

#[tokio::test]
async fn test_generic_board_for_research_projects() {
    let ctx = setup_integration_test().await;
    ctx.backend.mock_get("/research-projects/", fixtures::research_project_list()).await;
    ctx.backend.mock_no_content("DELETE", "/research-projects/10/").await;
    ctx.backend.mock_error("DELETE", "/research-projects/11/", 403, "Forbidden").await;

    let mut board = AdminBoard::new(ctx.services.research_service.clone());
    board.load(&ListQuery::new()).await.unwrap();

    board.delete("10").await.unwrap();
    assert_eq!(board.items().len(), 1);

    let notice = board.delete("11").await.unwrap_err();
    assert_eq!(notice.message, "Failed to delete research project");
    assert_eq!(board.items().len(), 1);
}
