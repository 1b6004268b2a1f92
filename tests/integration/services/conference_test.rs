//! Conference service against the mock backend

use assert_matches::assert_matches;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, header_exists, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use eventdesk::config::Settings;
use eventdesk::models::{ConferenceStatus, ConferenceType, CreateConferenceRequest, PaymentStatus, UpdateConferenceRequest};
use eventdesk::services::{ImageUpload, ListQuery, ServiceFactory};
use eventdesk::utils::errors::{ApiError, EventDeskError, UploadError};

use crate::fixtures;
use crate::helpers::{conference_payload, registration_payload};
use crate::integration::setup_integration_test;

#[tokio::test]
async fn test_get_all_normalizes_wrapped_snake_case_list() {
    let ctx = setup_integration_test().await;
    ctx.backend.mock_get("/api/conferences", fixtures::conference_list()).await;

    let conferences = ctx
        .services
        .conference_service
        .get_all(&ListQuery::new())
        .await
        .expect("Failed to load conferences");

    assert_eq!(conferences.len(), 3);
    assert_eq!(conferences[0].id, "1");
    assert_eq!(conferences[0].status, ConferenceStatus::RegistrationOpen);
    assert_eq!(conferences[0].conference_type, ConferenceType::InPerson);
    assert_eq!(conferences[0].capacity, 400);
    assert!(conferences[0].featured);
    assert_eq!(conferences[1].conference_type, ConferenceType::Hybrid);
    assert_eq!(conferences[1].status, ConferenceStatus::Completed);
    assert_eq!(conferences[2].status, ConferenceStatus::Cancelled);
}

#[tokio::test]
async fn test_list_request_carries_query_auth_and_request_id() {
    let ctx = setup_integration_test().await;
    Mock::given(method("GET"))
        .and(path("/api/conferences"))
        .and(query_param("status", "registration_open"))
        .and(query_param("type", "virtual"))
        .and(query_param("search", "rust"))
        .and(header("authorization", "Bearer test-token"))
        .and(header_exists("x-request-id"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&ctx.backend.server)
        .await;

    let query = ListQuery::new()
        .status("registration_open")
        .event_type("virtual")
        .search("  rust ");
    let conferences = ctx.services.conference_service.get_all(&query).await;

    assert_matches!(conferences, Ok(ref items) if items.is_empty());
}

#[tokio::test]
async fn test_get_by_id_unwraps_single_record_envelope() {
    let ctx = setup_integration_test().await;
    ctx.backend
        .mock_get("/api/conferences/7", json!({ "conference": conference_payload(7, "coming_soon", "2025-12-01") }))
        .await;

    let conference = ctx.services.conference_service.get_by_id("7").await.unwrap();

    assert_eq!(conference.id, "7");
    assert_eq!(conference.status, ConferenceStatus::ComingSoon);
    assert_eq!(conference.capacity, 250);
    assert_eq!(conference.fees.early_bird, 99.0);
    assert_eq!(conference.fees.regular, 149.5);
    assert_eq!(conference.venue, "Main Hall");
    assert_eq!(conference.highlights, vec!["Keynotes".to_string(), "Workshops".to_string()]);
    assert_eq!(conference.speakers.len(), 1);
    assert!(!conference.speakers[0].name.is_empty());
    assert!(!conference.speakers[0].organization.is_empty());
    assert_eq!(conference.registration_count, 12);
    assert_eq!(conference.remaining_capacity(), Some(238));
}

#[tokio::test]
async fn test_get_by_id_maps_404_to_not_found() {
    let ctx = setup_integration_test().await;
    ctx.backend.mock_error("GET", "/api/conferences/99", 404, "Conference not found").await;

    let err = ctx.services.conference_service.get_by_id("99").await.unwrap_err();

    assert_matches!(err, EventDeskError::NotFound { ref resource, ref id } if resource == "conference" && id == "99");
}

#[tokio::test]
async fn test_create_sends_wire_case_body() {
    let ctx = setup_integration_test().await;
    Mock::given(method("POST"))
        .and(path("/api/conferences"))
        .and(body_partial_json(json!({
            "title": "Rust Systems Summit",
            "start_date": "2025-10-01",
            "early_bird_fee": 99.0,
            "type": "hybrid",
            "status": "registration_open"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "data": { "id": 42, "title": "Rust Systems Summit", "conference_type": "hybrid" }
        })))
        .mount(&ctx.backend.server)
        .await;

    let request = CreateConferenceRequest {
        title: "Rust Systems Summit".to_string(),
        start_date: "2025-10-01".to_string(),
        early_bird_fee: 99.0,
        conference_type: ConferenceType::Hybrid,
        status: ConferenceStatus::RegistrationOpen,
        ..Default::default()
    };
    let conference = ctx.services.conference_service.create(&request).await.unwrap();

    assert_eq!(conference.id, "42");
    assert_eq!(conference.conference_type, ConferenceType::Hybrid);
}

#[tokio::test]
async fn test_create_without_id_is_an_invalid_response() {
    let ctx = setup_integration_test().await;
    ctx.backend.mock_json("POST", "/api/conferences", 200, json!({ "message": "saved" })).await;

    let err = ctx
        .services
        .conference_service
        .create(&CreateConferenceRequest::default())
        .await
        .unwrap_err();

    assert_matches!(err, EventDeskError::Api(ApiError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_backend_message_is_surfaced() {
    let ctx = setup_integration_test().await;
    ctx.backend.mock_error("POST", "/api/conferences", 422, "Title is required").await;

    let err = ctx
        .services
        .conference_service
        .create(&CreateConferenceRequest::default())
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(422));
    assert_eq!(err.to_string(), "Backend API error: Title is required");
}

#[tokio::test]
async fn test_server_error_without_message_falls_back_to_status() {
    let ctx = setup_integration_test().await;
    ctx.backend.mock_outage().await;

    let err = ctx
        .services
        .conference_service
        .get_all(&ListQuery::new())
        .await
        .unwrap_err();

    assert_matches!(err, EventDeskError::Api(ApiError::Status { status: 500, ref message }) if message == "HTTP 500");
    assert!(err.is_recoverable());
}

#[tokio::test]
async fn test_update_reads_record_back_after_empty_response() {
    let ctx = setup_integration_test().await;
    ctx.backend.mock_no_content("PATCH", "/api/conferences/5").await;
    ctx.backend
        .mock_get("/api/conferences/5", conference_payload(5, "registration_open", "2025-09-01"))
        .await;

    let change = UpdateConferenceRequest {
        capacity: Some(250),
        ..Default::default()
    };
    let conference = ctx.services.conference_service.update("5", &change).await.unwrap();

    assert_eq!(conference.id, "5");
    assert_eq!(conference.status, ConferenceStatus::RegistrationOpen);

    let methods: Vec<String> = ctx
        .backend
        .received()
        .await
        .iter()
        .map(|r| r.method.to_string())
        .collect();
    assert_eq!(methods, vec!["PATCH".to_string(), "GET".to_string()]);
}

#[tokio::test]
async fn test_update_status_patches_status_endpoint() {
    let ctx = setup_integration_test().await;
    Mock::given(method("PATCH"))
        .and(path("/api/conferences/5/status"))
        .and(body_partial_json(json!({ "status": "cancelled" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 5, "status": "cancelled" })))
        .mount(&ctx.backend.server)
        .await;

    let conference = ctx
        .services
        .conference_service
        .update_status("5", ConferenceStatus::Cancelled)
        .await
        .unwrap();

    assert_eq!(conference.status, ConferenceStatus::Cancelled);
}

#[tokio::test]
async fn test_toggle_featured_sends_negated_flag() {
    let ctx = setup_integration_test().await;
    ctx.backend.mock_get("/api/conferences", fixtures::conference_list()).await;
    Mock::given(method("PATCH"))
        .and(path("/api/conferences/1"))
        .and(body_partial_json(json!({ "featured": false })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 1, "is_featured": false })))
        .mount(&ctx.backend.server)
        .await;

    let service = &ctx.services.conference_service;
    let current = service.get_all(&ListQuery::new()).await.unwrap().remove(0);
    assert!(current.featured);

    let updated = service.toggle_featured(&current).await.unwrap();
    assert!(!updated.featured);
}

#[tokio::test]
async fn test_analytics_and_registrations() {
    let ctx = setup_integration_test().await;
    ctx.backend
        .mock_get(
            "/api/conferences/1/analytics",
            json!({ "analytics": { "total_registrations": 120, "revenue": "2500.50", "attendance": 95 } }),
        )
        .await;
    ctx.backend
        .mock_get(
            "/api/conferences/1/registrations",
            json!({ "registrations": [registration_payload("r1", "1", "paid"), registration_payload("r2", "1", "pending")] }),
        )
        .await;

    let service = &ctx.services.conference_service;
    let report = service.get_analytics("1").await.unwrap();
    assert_eq!(report.total_registrations(), 120);
    assert_eq!(report.total_attendees(), 95);
    assert_eq!(report.revenue(), 2500.5);

    let registrations = service.get_registrations("1").await.unwrap();
    assert_eq!(registrations.len(), 2);
    assert_eq!(registrations[0].payment_status, PaymentStatus::Paid);
    assert_eq!(registrations[0].conference_id, "1");
    assert!(!registrations[0].attendee.name.is_empty());
}

#[tokio::test]
async fn test_upload_image_sends_multipart_file_part() {
    let ctx = setup_integration_test().await;
    ctx.backend
        .mock_json("POST", "/api/conferences/upload-image", 200, fixtures::uploaded_file())
        .await;

    let path = ctx.write_file("banner.png", fixtures::PNG_BYTES);
    let upload = ImageUpload::from_path(&path).await.unwrap();
    let file = ctx.services.conference_service.upload_image(upload).await.unwrap();

    assert_eq!(file.url, "https://cdn.example.org/uploads/banner.png");
    assert_eq!(file.filename, "banner.png");

    let requests = ctx.backend.received().await;
    assert_eq!(requests.len(), 1);
    let content_type = requests[0]
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("multipart/form-data"));
    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(body.contains("name=\"file\""));
    assert!(body.contains("filename=\"banner.png\""));
    assert!(body.contains("image/png"));
}

#[tokio::test]
async fn test_upload_is_checked_before_any_request() {
    let ctx = setup_integration_test().await;
    let service = &ctx.services.conference_service;

    let err = service
        .upload_image(ImageUpload::new("notes.txt", b"hello".to_vec()))
        .await
        .unwrap_err();
    assert_matches!(err, EventDeskError::Upload(UploadError::UnsupportedType(ref ext)) if ext == "txt");

    let err = service
        .upload_image(ImageUpload::new("huge.png", vec![0u8; 2 * 1024 * 1024]))
        .await
        .unwrap_err();
    assert_matches!(err, EventDeskError::Upload(UploadError::TooLarge { .. }));

    let err = service.upload_image(ImageUpload::new("empty.png", Vec::new())).await.unwrap_err();
    assert_matches!(err, EventDeskError::Upload(UploadError::Empty));

    assert!(ctx.backend.received().await.is_empty());
}

#[tokio::test]
async fn test_unreachable_backend_is_service_unavailable() {
    let settings = Settings::for_base_url("http://127.0.0.1:1");
    let services = ServiceFactory::new(&settings).unwrap();

    let err = services.conference_service.get_all(&ListQuery::new()).await.unwrap_err();

    assert_matches!(err, EventDeskError::Api(ApiError::ServiceUnavailable));
    assert!(err.is_recoverable());
}
