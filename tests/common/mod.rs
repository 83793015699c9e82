#![allow(dead_code)]

use serde_json::json;
use vendorlink::connectors::{
    AccessControlConnector, AvatarConnector, ConnectionProfile, Connector, GitHubConnector,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const ACCESS_TOKEN: &str = "session-token-1";
pub const GITHUB_TOKEN: &str = "ghp_test_token";
pub const AVATAR_KEY: &str = "avatar-app-key";

pub async fn connected_access_control(server: &MockServer) -> AccessControlConnector {
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "data": { "token": ACCESS_TOKEN } })),
        )
        .mount(server)
        .await;

    let connector = AccessControlConnector::new();
    connector
        .connect(ConnectionProfile::password("ops@example.com", "correct-horse").with_base_url(server.uri()))
        .await
        .expect("access control connect");
    connector
}

pub async fn connected_github(server: &MockServer) -> GitHubConnector {
    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "login": "mona" })))
        .mount(server)
        .await;

    let connector = GitHubConnector::new();
    connector
        .connect(ConnectionProfile::token(GITHUB_TOKEN).with_base_url(server.uri()))
        .await
        .expect("github connect");
    connector
}

pub async fn connected_avatar(server: &MockServer) -> AvatarConnector {
    let connector = AvatarConnector::new();
    connector
        .connect(ConnectionProfile::api_key(AVATAR_KEY).with_base_url(server.uri()))
        .await
        .expect("avatar connect");
    connector
}

/// Query pairs of the n-th request the mock server received
pub async fn query_of(server: &MockServer, index: usize) -> Vec<(String, String)> {
    let requests = server.received_requests().await.expect("request recording enabled");
    requests[index]
        .url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}
