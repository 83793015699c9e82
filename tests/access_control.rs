mod common;

use serde_json::json;
use std::sync::Arc;
use vendorlink::connectors::access_control::User;
use vendorlink::connectors::{
    AccessControlConnector, ConnectionProfile, Connector, ErrorKind, PagedResults,
};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn connect_with_empty_password_makes_no_request() {
    let server = MockServer::start().await;
    let connector = AccessControlConnector::new();

    let err = connector
        .connect(ConnectionProfile::password("ops@example.com", "").with_base_url(server.uri()))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvalidCredentials);
    assert!(!connector.is_connected());
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn connect_rejects_token_credentials() {
    let connector = AccessControlConnector::new();
    let err = connector
        .connect(ConnectionProfile::token("abc"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidCredentials);
}

#[tokio::test]
async fn login_round_trip_posts_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({ "email": "ops@example.com", "password": "pw" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": "flat-token" })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .and(header("authorization", "Bearer flat-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [], "totalCount": 0 })))
        .expect(1)
        .mount(&server)
        .await;

    let connector = AccessControlConnector::new();
    connector
        .connect(ConnectionProfile::password("ops@example.com", "pw").with_base_url(server.uri()))
        .await
        .unwrap();
    assert!(connector.is_connected());

    let mut results = PagedResults::new();
    connector.users_api().unwrap().list(&mut results).await.unwrap();
    assert!(results.items.is_empty());
}

#[tokio::test]
async fn failed_login_is_invalid_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "message": "bad password" })))
        .mount(&server)
        .await;

    let connector = AccessControlConnector::new();
    let err = connector
        .connect(ConnectionProfile::password("ops@example.com", "nope").with_base_url(server.uri()))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvalidCredentials);
    assert!(err.to_string().contains("bad password"));
    assert!(!connector.is_connected());
}

#[tokio::test]
async fn login_server_error_is_invalid_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let connector = AccessControlConnector::new();
    let err = connector
        .connect(ConnectionProfile::password("ops@example.com", "pw").with_base_url(server.uri()))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvalidCredentials);
    assert!(err.to_string().contains("status 500"));
    assert!(!connector.is_connected());
}

#[tokio::test]
async fn login_transport_failure_is_invalid_credentials() {
    let connector = AccessControlConnector::new();
    let err = connector
        .connect(ConnectionProfile::password("ops@example.com", "pw").with_base_url("http://127.0.0.1:1"))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvalidCredentials);
    assert!(!connector.is_connected());
}

#[tokio::test]
async fn login_without_token_is_invalid_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": {} })))
        .mount(&server)
        .await;

    let connector = AccessControlConnector::new();
    let err = connector
        .connect(ConnectionProfile::password("ops@example.com", "pw").with_base_url(server.uri()))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidCredentials);
}

#[tokio::test]
async fn list_translates_page_into_offset_and_limit() {
    let server = MockServer::start().await;
    let connector = common::connected_access_control(&server).await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .and(query_param("offset", "5"))
        .and(query_param("limit", "5"))
        .and(header("authorization", "Bearer session-token-1"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                { "id": "u1", "email": "a@example.com", "first_name": "Ann" },
                { "id": "u2", "email": "", "first_name": null }
            ],
            "totalCount": 12
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut results = PagedResults::page(2, 5);
    connector.users_api().unwrap().list(&mut results).await.unwrap();

    assert_eq!(results.count, 12);
    assert_eq!(results.items.len(), 2);
    assert_eq!(results.items[0].id, "u1");
    assert!(results.items[1].email.is_absent());
    assert!(results.items[1].first_name.is_null());
    assert_eq!(results.page_token, None);
}

#[tokio::test]
async fn list_without_page_sends_only_offset() {
    let server = MockServer::start().await;
    let connector = common::connected_access_control(&server).await;
    Mock::given(method("GET"))
        .and(path("/groups"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [], "totalCount": 0 })))
        .mount(&server)
        .await;

    let mut results = PagedResults::new();
    connector.groups_api().unwrap().list(&mut results).await.unwrap();

    // request 0 is the login
    let query = common::query_of(&server, 1).await;
    assert_eq!(query, vec![("offset".to_string(), "0".to_string())]);
}

#[tokio::test]
async fn large_page_size_is_clamped() {
    let server = MockServer::start().await;
    let connector = common::connected_access_control(&server).await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .and(query_param("limit", "1000"))
        .and(query_param("offset", "5000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [], "totalCount": 0 })))
        .expect(1)
        .mount(&server)
        .await;

    let mut results = PagedResults::page(2, 5000);
    connector.users_api().unwrap().list(&mut results).await.unwrap();
}

#[tokio::test]
async fn missing_data_is_an_empty_page() {
    let server = MockServer::start().await;
    let connector = common::connected_access_control(&server).await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "totalCount": 3 })))
        .mount(&server)
        .await;

    let mut results = PagedResults::page(1, 10);
    connector.users_api().unwrap().list(&mut results).await.unwrap();

    assert!(results.items.is_empty());
    assert_eq!(results.count, 3);
}

#[tokio::test]
async fn get_accepts_nested_and_bare_objects() {
    let server = MockServer::start().await;
    let connector = common::connected_access_control(&server).await;
    let body = json!({ "id": "u7", "email": "u7@example.com", "status": "active" });
    Mock::given(method("GET"))
        .and(path("/users/u7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": body.clone() })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/users/u8"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "u7", "email": "u7@example.com", "status": "active"
        })))
        .mount(&server)
        .await;

    let users = connector.users_api().unwrap();
    let nested: User = users.get("u7").await.unwrap();
    let bare: User = users.get("u8").await.unwrap();
    assert_eq!(nested, bare);
    assert_eq!(nested.status.value().map(String::as_str), Some("active"));
}

#[tokio::test]
async fn get_with_null_data_is_no_such_object() {
    let server = MockServer::start().await;
    let connector = common::connected_access_control(&server).await;
    Mock::given(method("GET"))
        .and(path("/groups/g1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": null })))
        .mount(&server)
        .await;

    let err = connector.groups_api().unwrap().get("g1").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NoSuchObject);
}

#[tokio::test]
async fn get_404_reports_missing_id() {
    let server = MockServer::start().await;
    let connector = common::connected_access_control(&server).await;
    Mock::given(method("GET"))
        .and(path("/users/ghost"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "message": "User not found" })))
        .mount(&server)
        .await;

    let err = connector.users_api().unwrap().get("ghost").await.unwrap_err();
    match err {
        vendorlink::connectors::ConnectorError::NoSuchObject { id, message } => {
            assert_eq!(id.as_deref(), Some("ghost"));
            assert_eq!(message, "User not found");
        }
        other => panic!("expected NoSuchObject, got {:?}", other),
    }
}

#[tokio::test]
async fn group_users_of_missing_group_is_no_such_object() {
    let server = MockServer::start().await;
    let connector = common::connected_access_control(&server).await;
    Mock::given(method("GET"))
        .and(path("/groups/g404/users"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let mut results = PagedResults::<User>::page(1, 10);
    let err = connector
        .groups_api()
        .unwrap()
        .list_users(&mut results, "g404")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NoSuchObject);
}

#[tokio::test]
async fn server_error_is_unexpected_and_leaves_results_untouched() {
    let server = MockServer::start().await;
    let connector = common::connected_access_control(&server).await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal"))
        .mount(&server)
        .await;

    let mut results = PagedResults::page(1, 10);
    results.count = 99;
    let err = connector.users_api().unwrap().list(&mut results).await.unwrap_err();

    match err {
        vendorlink::connectors::ConnectorError::Unexpected { status, .. } => {
            assert_eq!(status, Some(500))
        }
        other => panic!("expected Unexpected, got {:?}", other),
    }
    assert_eq!(results.count, 99);
    assert!(results.items.is_empty());
}

#[tokio::test]
async fn status_codes_map_to_error_kinds() {
    let server = MockServer::start().await;
    let connector = common::connected_access_control(&server).await;
    let cases = [
        ("400", 400, "bad filter", ErrorKind::InvalidInput),
        ("401", 401, "token expired", ErrorKind::InvalidCredentials),
        ("403", 403, "Insufficient role", ErrorKind::Unauthorized),
        ("403-throttled", 403, "Rate limit exceeded", ErrorKind::RateLimitExceeded),
        ("422", 422, "bad filter", ErrorKind::InvalidInput),
        ("429", 429, "slow down", ErrorKind::RateLimitExceeded),
        ("503", 503, "maintenance", ErrorKind::Unexpected),
    ];
    for (id, status, message, _) in cases.iter() {
        Mock::given(method("GET"))
            .and(path(format!("/groups/{}", id)))
            .respond_with(ResponseTemplate::new(*status).set_body_json(json!({ "message": message })))
            .mount(&server)
            .await;
    }

    let groups = connector.groups_api().unwrap();
    for (id, _, _, kind) in cases {
        let err = groups.get(id).await.unwrap_err();
        assert_eq!(err.kind(), kind, "status {}", id);
    }
}

#[tokio::test]
async fn disconnect_is_idempotent() {
    let connector = AccessControlConnector::new();
    connector.disconnect().unwrap();
    connector.disconnect().unwrap();
    assert!(!connector.is_connected());
}

#[tokio::test]
async fn producers_are_cached_per_connection() {
    let server = MockServer::start().await;
    let connector = AccessControlConnector::new();
    assert_eq!(connector.users_api().unwrap_err().kind(), ErrorKind::NotConnected);

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": { "token": "t" } })))
        .mount(&server)
        .await;
    let profile = ConnectionProfile::password("ops@example.com", "pw").with_base_url(server.uri());

    connector.connect(profile.clone()).await.unwrap();
    let first = connector.users_api().unwrap();
    let again = connector.users_api().unwrap();
    assert!(Arc::ptr_eq(&first, &again));

    connector.disconnect().unwrap();
    assert_eq!(connector.groups_api().unwrap_err().kind(), ErrorKind::NotConnected);

    connector.connect(profile).await.unwrap();
    let after_reconnect = connector.users_api().unwrap();
    assert!(!Arc::ptr_eq(&first, &after_reconnect));
}

#[tokio::test]
async fn producer_used_after_disconnect_is_not_connected() {
    let server = MockServer::start().await;
    let connector = common::connected_access_control(&server).await;
    let users = connector.users_api().unwrap();
    connector.disconnect().unwrap();

    let mut results = PagedResults::new();
    let err = users.list(&mut results).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotConnected);
}

#[tokio::test]
async fn metadata_reflects_connection() {
    let server = MockServer::start().await;
    let connector = AccessControlConnector::new();
    assert_eq!(
        connector.metadata().base_url,
        "https://api.accesscontrol.example.com/v1"
    );
    assert!(connector.is_supported(vendorlink::connectors::ResourceKind::Users));
    assert!(!connector.is_supported(vendorlink::connectors::ResourceKind::Avatars));

    let connector = common::connected_access_control(&server).await;
    let metadata = connector.metadata();
    assert_eq!(metadata.base_url, server.uri());
    assert_eq!(metadata.vendor, "access_control");
}
