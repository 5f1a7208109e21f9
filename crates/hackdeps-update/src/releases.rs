//! GitHub releases lookup

use hackdeps_core::{CancellationToken, Fetcher, Result, RuntimeConfig};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Release information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Release {
    /// Release tag (e.g., "v0.58.0")
    pub tag_name: String,

    /// Release body (changelog)
    #[serde(default)]
    pub body: Option<String>,

    /// Release assets
    #[serde(default)]
    pub assets: Vec<ReleaseAsset>,
}

impl Release {
    /// Release notes, empty when the release has none
    pub fn notes(&self) -> &str {
        self.body.as_deref().unwrap_or_default()
    }

    /// Asset with exactly this name
    pub fn find_asset(&self, name: &str) -> Option<&ReleaseAsset> {
        self.assets.iter().find(|a| a.name == name)
    }
}

/// Release asset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReleaseAsset {
    /// Asset name
    pub name: String,

    /// Download URL
    pub browser_download_url: String,
}

/// Looks up releases of upstream GitHub projects
#[derive(Debug, Clone)]
pub struct ReleaseManager {
    fetcher: Fetcher,
    api_url: String,
}

impl ReleaseManager {
    /// Create a release manager talking to the configured API
    pub fn new(fetcher: Fetcher, config: &RuntimeConfig) -> Self {
        Self {
            fetcher,
            api_url: config.api_url.clone(),
        }
    }

    /// Get the release GitHub considers latest for `project` (`owner/repo`)
    pub async fn get_latest(&self, project: &str, cancel: &CancellationToken) -> Result<Release> {
        let url = format!("{}/repos/{}/releases/latest", self.api_url, project);
        debug!("Fetching latest release from: {}", url);
        self.fetcher.fetch_json(&url, cancel).await
    }

    /// Get the release tagged `tag` for `project` (`owner/repo`)
    pub async fn get_release(
        &self,
        project: &str,
        tag: &str,
        cancel: &CancellationToken,
    ) -> Result<Release> {
        let url = format!("{}/repos/{}/releases/tags/{}", self.api_url, project, tag);
        debug!("Fetching release {} from: {}", tag, url);
        self.fetcher.fetch_json(&url, cancel).await
    }
}
