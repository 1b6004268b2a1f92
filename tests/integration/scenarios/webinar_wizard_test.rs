//! Walking the webinar wizard, saving it and editing an existing webinar

use assert_matches::assert_matches;
use serde_json::{json, Value};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, ResponseTemplate};

use eventdesk::handlers::AdminBoard;
use eventdesk::models::{WebinarStatus, WebinarType};
use eventdesk::state::scenarios::create_webinar_wizard;
use eventdesk::state::FormDraft;
use eventdesk::utils::errors::EventDeskError;

use crate::helpers::{fake_description, fake_name, webinar_payload};
use crate::integration::setup_integration_test;

#[tokio::test]
async fn test_full_webinar_wizard() {
    let ctx = setup_integration_test().await;
    let speaker = fake_name();
    Mock::given(method("POST"))
        .and(path("/webinars/"))
        .and(body_partial_json(json!({
            "title": "Async Rust in Production",
            "type": "Hybrid",
            "status": "Registration Open",
            "duration": "90 minutes",
            "target_audience": ["Backend engineers"]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(webinar_payload("w9", "Registration Open", "2025-06-12")))
        .mount(&ctx.backend.server)
        .await;

    let wizard = create_webinar_wizard();
    let mut draft = FormDraft::new(&wizard);
    assert_eq!(draft.text("type"), "Live");

    draft.set("title", "Async Rust in Production");
    draft.set("category", "Engineering");
    draft.set("description", fake_description());
    draft.set("type", "hybrid");
    assert_eq!(draft.next_step(&wizard).unwrap(), 1);

    draft.set("date", "2025-06-12");
    draft.set("time", "15:00");
    draft.set("duration", "soon");
    assert_matches!(draft.next_step(&wizard), Err(EventDeskError::Validation(_)));
    assert!(draft.errors().get("duration").is_some());

    draft.set("duration", "90 minutes");
    assert_eq!(draft.next_step(&wizard).unwrap(), 2);

    // no speakers at all, then a row with details but no name
    assert_matches!(draft.next_step(&wizard), Err(EventDeskError::Validation(_)));
    assert_eq!(draft.errors().get("speakers"), Some("Speaker is required"));

    draft.set("speakers", json!([{ "name": speaker }, { "name": "", "title": "Staff Engineer" }]));
    assert_matches!(draft.next_step(&wizard), Err(EventDeskError::Validation(_)));
    assert_eq!(draft.errors().get("speakers"), Some("Speaker #2: name is required"));
    assert_eq!(draft.step, 2);

    draft.set("speakers", json!([{ "name": speaker, "title": "Staff Engineer" }, { "name": "  ", "title": "" }]));
    assert_eq!(draft.next_step(&wizard).unwrap(), 3);

    draft.set("status", "registration_open");
    draft.set("targetAudience", json!(["Backend engineers", ""]));
    assert_eq!(draft.next_step(&wizard).unwrap(), 4);
    assert!(draft.is_last_step(&wizard));

    let mut board = AdminBoard::new(ctx.services.webinar_service.clone());
    let created = board.save_draft(&wizard, &mut draft).await.unwrap();

    assert_eq!(created.id, "w9");
    assert_eq!(board.items().len(), 1);

    let requests = ctx.backend.received().await;
    assert_eq!(requests.len(), 1);
    let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
    let speakers = body["speakers"].as_array().unwrap();
    assert_eq!(speakers.len(), 1);
    assert_eq!(speakers[0]["name"], json!(speaker));
    assert_eq!(body["target_audience"], json!(["Backend engineers"]));
}

#[tokio::test]
async fn test_edit_webinar_draft() {
    let ctx = setup_integration_test().await;
    ctx.backend
        .mock_get("/webinars/w1/", webinar_payload("w1", "Registration Open", "2025-06-12"))
        .await;
    let mut saved = webinar_payload("w1", "Live", "2025-06-12");
    saved["title"] = json!("Async Rust, Revisited");
    Mock::given(method("PATCH"))
        .and(path("/webinars/w1/"))
        .and(body_partial_json(json!({ "title": "Async Rust, Revisited", "status": "Live", "type": "Live" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(saved))
        .mount(&ctx.backend.server)
        .await;

    let wizard = create_webinar_wizard();
    let mut board = AdminBoard::new(ctx.services.webinar_service.clone());

    let mut draft = board.edit_draft(&wizard, "w1").await.unwrap();
    assert_eq!(draft.edit_id(), Some("w1"));
    assert_eq!(draft.text("status"), "Registration Open");
    assert_eq!(draft.text("duration"), "60 minutes");

    draft.set("title", "Async Rust, Revisited");
    draft.set("status", "Live");
    let updated = board.save_draft(&wizard, &mut draft).await.unwrap();

    assert_eq!(updated.title, "Async Rust, Revisited");
    assert_eq!(updated.status, WebinarStatus::Live);
    assert_eq!(updated.webinar_type, WebinarType::Live);
    assert_eq!(board.store().get("w1").map(|w| w.title.as_str()), Some("Async Rust, Revisited"));
}

#[tokio::test]
async fn test_edit_save_with_invalid_step_sends_nothing() {
    let ctx = setup_integration_test().await;
    ctx.backend
        .mock_get("/webinars/w2/", webinar_payload("w2", "Planning", "2025-07-01"))
        .await;

    let wizard = create_webinar_wizard();
    let mut board = AdminBoard::new(ctx.services.webinar_service.clone());
    let mut draft = board.edit_draft(&wizard, "w2").await.unwrap();
    draft.set("speakers", json!([]));

    let notice = board.save_draft(&wizard, &mut draft).await.unwrap_err();

    assert_eq!(notice.message, "Failed to update webinar");
    assert_eq!(draft.errors().get("speakers"), Some("Speaker is required"));
    assert_eq!(ctx.backend.received().await.len(), 1);
}
