//! Mock server helpers for the releases API

use hackdeps_core::{Fetcher, RuntimeConfig};
use hackdeps_update::{Release, Updater};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Updater talking to `server` instead of the GitHub API
pub fn updater_for(server: &MockServer) -> Updater {
    let config = RuntimeConfig::default().with_api_url(server.uri());
    let fetcher = Fetcher::new(&config).expect("fetcher builds");
    Updater::new(fetcher, &config)
}

/// URL of an asset served by `mock_asset`
pub fn asset_url(server: &MockServer, project: &str, tag: &str, name: &str) -> String {
    format!("{}{}", server.uri(), asset_path(project, tag, name))
}

fn asset_path(project: &str, tag: &str, name: &str) -> String {
    format!("/downloads/{}/{}/{}", project, tag, name)
}

/// Serve `release` as the latest release of `project`
pub async fn mock_latest_release(server: &MockServer, project: &str, release: &Release) {
    Mock::given(method("GET"))
        .and(path(format!("/repos/{}/releases/latest", project)))
        .respond_with(ResponseTemplate::new(200).set_body_json(release))
        .mount(server)
        .await;
}

/// Serve `release` as the latest release of `project` after `delay`
pub async fn mock_slow_latest_release(
    server: &MockServer,
    project: &str,
    release: &Release,
    delay: Duration,
) {
    Mock::given(method("GET"))
        .and(path(format!("/repos/{}/releases/latest", project)))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(release)
                .set_delay(delay),
        )
        .mount(server)
        .await;
}

/// Serve `release` under its own tag for `project`
pub async fn mock_release_by_tag(server: &MockServer, project: &str, release: &Release) {
    Mock::given(method("GET"))
        .and(path(format!(
            "/repos/{}/releases/tags/{}",
            project, release.tag_name
        )))
        .respond_with(ResponseTemplate::new(200).set_body_json(release))
        .mount(server)
        .await;
}

/// Answer the latest-release endpoint of `project` with `status`
pub async fn mock_latest_release_failure(server: &MockServer, project: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(format!("/repos/{}/releases/latest", project)))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// Serve an asset of `project` at `tag`
pub async fn mock_asset(server: &MockServer, project: &str, tag: &str, name: &str, content: &str) {
    Mock::given(method("GET"))
        .and(path(asset_path(project, tag, name)))
        .respond_with(ResponseTemplate::new(200).set_body_string(content))
        .mount(server)
        .await;
}
