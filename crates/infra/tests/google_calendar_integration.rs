//! Integration tests for the Google Calendar client against a mock server.

mod support;

use serde_json::json;
use slotguard_core::CalendarProvider;
use slotguard_domain::{EventDraft, EventPatch, SlotGuardError, TimeWindow};
use support::{client_for, client_with_token, EVENTS_PATH, TEST_TOKEN};
use wiremock::matchers::{bearer_token, body_json, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn window() -> TimeWindow {
    TimeWindow::parse("2026-02-02T00:00:00+11:00", "2026-02-03T00:00:00+11:00").unwrap()
}

#[tokio::test]
async fn list_events_follows_pagination() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(EVENTS_PATH))
        .and(bearer_token(TEST_TOKEN))
        .and(query_param("singleEvents", "true"))
        .and(query_param("orderBy", "startTime"))
        .and(query_param("timeMin", "2026-02-02T00:00:00+11:00"))
        .and(query_param_is_missing("pageToken"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{
                "id": "a",
                "summary": "Standup",
                "start": {"dateTime": "2026-02-02T09:00:00+11:00"},
                "end": {"dateTime": "2026-02-02T09:15:00+11:00"}
            }],
            "nextPageToken": "page-2"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(EVENTS_PATH))
        .and(query_param("pageToken", "page-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{
                "id": "b",
                "start": {"date": "2026-02-02"},
                "end": {"date": "2026-02-03"}
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let events = client_for(&server).list_events(&window()).await.unwrap();

    let ids: Vec<&str> = events.iter().map(|event| event.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b"]);
    assert!(events[1].is_all_day());
}

#[tokio::test]
async fn list_events_with_no_items_key_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(EVENTS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"kind": "calendar#events"})))
        .mount(&server)
        .await;

    assert!(client_for(&server).list_events(&window()).await.unwrap().is_empty());
}

#[tokio::test]
async fn missing_token_fails_before_any_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET")).respond_with(ResponseTemplate::new(200)).expect(0).mount(&server).await;

    let err = client_with_token(&server, "").list_events(&window()).await.unwrap_err();
    assert!(matches!(err, SlotGuardError::AuthMissing(_)));
}

#[tokio::test]
async fn provider_errors_carry_status_and_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(EVENTS_PATH))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "error": {"code": 403, "message": "Rate Limit Exceeded"}
        })))
        .mount(&server)
        .await;

    let err = client_for(&server).list_events(&window()).await.unwrap_err();
    match err {
        SlotGuardError::Provider { status, message } => {
            assert_eq!(status, Some(403));
            assert!(message.contains("Rate Limit Exceeded"));
        }
        other => panic!("expected provider error, got {other:?}"),
    }
}

#[tokio::test]
async fn insert_event_sends_summary_and_notifies_attendees() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(EVENTS_PATH))
        .and(query_param("sendUpdates", "all"))
        .and(body_json(json!({
            "summary": "Dentist",
            "start": {"dateTime": "2026-02-02T14:00:00+11:00"},
            "end": {"dateTime": "2026-02-02T15:00:00+11:00"},
            "attendees": [{"email": "a@example.com"}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "new-1",
            "summary": "Dentist",
            "status": "confirmed",
            "htmlLink": "https://www.google.com/calendar/event?eid=new-1",
            "start": {"dateTime": "2026-02-02T14:00:00+11:00"},
            "end": {"dateTime": "2026-02-02T15:00:00+11:00"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let created = client_for(&server)
        .insert_event(EventDraft {
            title: "Dentist".into(),
            start: "2026-02-02T14:00:00+11:00".into(),
            end: "2026-02-02T15:00:00+11:00".into(),
            attendees: vec!["a@example.com".into()],
        })
        .await
        .unwrap();

    assert_eq!(created.id, "new-1");
    assert_eq!(created.html_link.as_deref(), Some("https://www.google.com/calendar/event?eid=new-1"));
}

#[tokio::test]
async fn update_event_puts_merged_body() {
    let server = MockServer::start().await;
    let event_path = format!("{EVENTS_PATH}/evt-1");

    Mock::given(method("GET"))
        .and(path(event_path.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "evt-1",
            "summary": "Planning",
            "location": "Room 4",
            "start": {"dateTime": "2026-02-02T10:00:00+11:00"},
            "end": {"dateTime": "2026-02-02T11:00:00+11:00"}
        })))
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path(event_path.as_str()))
        .and(query_param("sendUpdates", "all"))
        .and(body_json(json!({
            "id": "evt-1",
            "summary": "Planning",
            "location": "Room 4",
            "start": {"dateTime": "2026-02-02T13:00:00+11:00"},
            "end": {"dateTime": "2026-02-02T14:00:00+11:00"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "evt-1",
            "summary": "Planning",
            "start": {"dateTime": "2026-02-02T13:00:00+11:00"},
            "end": {"dateTime": "2026-02-02T14:00:00+11:00"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let updated = client_for(&server)
        .update_event(
            "evt-1",
            EventPatch {
                start: Some("2026-02-02T13:00:00+11:00".into()),
                end: Some("2026-02-02T14:00:00+11:00".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.start, "2026-02-02T13:00:00+11:00");
}

#[tokio::test]
async fn empty_update_skips_the_put() {
    let server = MockServer::start().await;
    let event_path = format!("{EVENTS_PATH}/evt-2");

    Mock::given(method("GET"))
        .and(path(event_path.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "evt-2",
            "summary": "Retro",
            "start": {"dateTime": "2026-02-03T15:00:00+11:00"},
            "end": {"dateTime": "2026-02-03T16:00:00+11:00"}
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT")).respond_with(ResponseTemplate::new(200)).expect(0).mount(&server).await;

    let unchanged = client_for(&server).update_event("evt-2", EventPatch::default()).await.unwrap();

    assert_eq!(unchanged.title.as_deref(), Some("Retro"));
    assert_eq!(unchanged.start, "2026-02-03T15:00:00+11:00");
}

#[tokio::test]
async fn get_missing_event_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{EVENTS_PATH}/ghost").as_str()))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": {"code": 404, "message": "Not Found"}
        })))
        .mount(&server)
        .await;

    let err = client_for(&server).get_event("ghost").await.unwrap_err();
    assert!(matches!(err, SlotGuardError::NotFound(_)));
}

#[tokio::test]
async fn delete_event_accepts_empty_response() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path(format!("{EVENTS_PATH}/evt-1").as_str()))
        .and(query_param("sendUpdates", "all"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server).delete_event("evt-1").await.unwrap();
}

#[tokio::test]
async fn deleting_an_already_deleted_event_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(410).set_body_json(json!({
            "error": {"code": 410, "message": "Resource has been deleted"}
        })))
        .mount(&server)
        .await;

    let err = client_for(&server).delete_event("evt-1").await.unwrap_err();
    assert!(matches!(err, SlotGuardError::NotFound(_)));
}
