//! Tests for the HTTP transport module

use super::*;
use crate::config::ClientConfig;
use crate::error::Error;
use crate::filter::Filter;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn transport_for(server: &MockServer) -> HttpTransport {
    let config = ClientConfig::builder()
        .base_url(server.uri())
        .api_key("test-key")
        .build();
    HttpTransport::new(config).unwrap()
}

#[tokio::test]
async fn test_get_json_attaches_api_key_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/groups.json"))
        .and(header("X-Redmine-API-Key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .mount(&mock_server)
        .await;

    let transport = transport_for(&mock_server);
    let body: serde_json::Value = transport
        .get_json("/groups.json", &Filter::new())
        .await
        .unwrap();

    assert_eq!(body["ok"], true);
}

#[tokio::test]
async fn test_get_json_passes_filter_params() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/time_entries.json"))
        .and(query_param("project_id", "12"))
        .and(query_param("limit", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .mount(&mock_server)
        .await;

    let transport = transport_for(&mock_server);
    let filter = Filter::new().project_id(12).with("limit", "100");
    let body: serde_json::Value = transport
        .get_json("/time_entries.json", &filter)
        .await
        .unwrap();

    assert_eq!(body["ok"], true);
}

#[tokio::test]
async fn test_404_maps_to_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/time_entries/99.json"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let transport = transport_for(&mock_server);
    let err = transport
        .get_json::<serde_json::Value>("/time_entries/99.json", &Filter::new())
        .await
        .unwrap_err();

    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_error_body_decodes_to_rejection() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/time_entries.json"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "errors": ["Hours can't be blank", "Activity can't be blank"]
        })))
        .mount(&mock_server)
        .await;

    let transport = transport_for(&mock_server);
    let err = transport
        .post_json::<serde_json::Value, _>("/time_entries.json", &json!({}))
        .await
        .unwrap_err();

    assert_eq!(
        err.messages().unwrap(),
        &[
            "Hours can't be blank".to_string(),
            "Activity can't be blank".to_string()
        ]
    );
    assert_eq!(
        err.to_string(),
        "HTTP 422: Hours can't be blank\nActivity can't be blank"
    );
}

#[tokio::test]
async fn test_unstructured_error_body_keeps_raw_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/groups.json"))
        .respond_with(ResponseTemplate::new(500).set_body_string("worker died"))
        .mount(&mock_server)
        .await;

    let transport = transport_for(&mock_server);
    let err = transport
        .get_json::<serde_json::Value>("/groups.json", &Filter::new())
        .await
        .unwrap_err();

    match err {
        Error::Status { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "worker died");
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_delete_succeeds_on_no_content() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/time_entries/5.json"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let transport = transport_for(&mock_server);
    transport.delete("/time_entries/5.json").await.unwrap();
}

#[tokio::test]
async fn test_feed_authenticates_via_query_key() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects/website/activity.atom"))
        .and(query_param("key", "feed-key"))
        .and(query_param("from", "2023-01-05"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<feed></feed>"))
        .mount(&mock_server)
        .await;

    let config = ClientConfig::builder()
        .base_url(mock_server.uri())
        .api_key("test-key")
        .atom_key("feed-key")
        .build();
    let transport = HttpTransport::new(config).unwrap();

    let body = transport
        .get_feed(
            "/projects/website/activity.atom",
            [("from", "2023-01-05")].into_iter(),
        )
        .await
        .unwrap();

    assert_eq!(body, "<feed></feed>");
}

#[tokio::test]
async fn test_feed_error_body_decodes_to_rejection() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects/website/activity.atom"))
        .respond_with(
            ResponseTemplate::new(403)
                .set_body_string("<errors><error>Forbidden project</error></errors>"),
        )
        .mount(&mock_server)
        .await;

    let transport = transport_for(&mock_server);
    let err = transport
        .get_feed("/projects/website/activity.atom", std::iter::empty())
        .await
        .unwrap_err();

    assert_eq!(err.messages().unwrap(), &["Forbidden project".to_string()]);
}

#[tokio::test]
async fn test_base_url_with_path_prefix() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/redmine/groups.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .mount(&mock_server)
        .await;

    let config = ClientConfig::builder()
        .base_url(format!("{}/redmine", mock_server.uri()))
        .api_key("test-key")
        .build();
    let transport = HttpTransport::new(config).unwrap();

    let body: serde_json::Value = transport
        .get_json("/groups.json", &Filter::new())
        .await
        .unwrap();
    assert_eq!(body["ok"], true);
}
