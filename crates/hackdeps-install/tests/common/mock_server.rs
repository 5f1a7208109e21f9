//! Mock server helpers for artifact downloads

use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// URL path used by `DependencyBuilder::served_by`
pub fn artifact_path(name: &str, version: &str, os: &str, arch: &str) -> String {
    format!("/{}/{}/{}-{}-{}", name, version, name, os, arch)
}

/// Serve `content` at `path`
pub async fn mock_artifact(server: &MockServer, url_path: &str, content: &[u8]) {
    Mock::given(method("GET"))
        .and(path(url_path))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(content.to_vec()))
        .mount(server)
        .await;
}

/// Serve `content` at `path` after `delay`
pub async fn mock_slow_artifact(
    server: &MockServer,
    url_path: &str,
    content: &[u8],
    delay: Duration,
) {
    Mock::given(method("GET"))
        .and(path(url_path))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(content.to_vec())
                .set_delay(delay),
        )
        .mount(server)
        .await;
}

/// Answer `path` with `status`
pub async fn mock_failing_artifact(server: &MockServer, url_path: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(url_path))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}
