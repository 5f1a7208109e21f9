//! HTTP retrieval of artifacts and API documents

use bytes::Bytes;
use serde::de::DeserializeOwned;
use std::future::Future;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::error::{Error, Result};
use crate::runtime::RuntimeConfig;

/// Authenticated-optional HTTP GET client
///
/// Built once per run from [`RuntimeConfig`] and shared by every task.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: reqwest::Client,
    token: Option<String>,
}

impl Fetcher {
    /// Create a fetcher from runtime settings
    pub fn new(config: &RuntimeConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .build()
            .map_err(|source| Error::Transport {
                url: String::new(),
                source,
            })?;

        Ok(Self {
            client,
            token: config.token.clone(),
        })
    }

    /// Download the full body at `url`
    ///
    /// Resolves to [`Error::Cancelled`] as soon as `cancel` fires, dropping
    /// the in-flight request.
    pub async fn fetch(&self, url: &str, cancel: &CancellationToken) -> Result<Bytes> {
        with_cancellation(cancel, self.get(url)).await
    }

    /// Download and decode a JSON document at `url`
    pub async fn fetch_json<T: DeserializeOwned>(
        &self,
        url: &str,
        cancel: &CancellationToken,
    ) -> Result<T> {
        let body = self.fetch(url, cancel).await?;
        serde_json::from_slice(&body).map_err(|source| Error::Decode {
            url: url.to_string(),
            source,
        })
    }

    async fn get(&self, url: &str) -> Result<Bytes> {
        debug!("GET {}", url);

        let mut request = self.client.get(url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let transport = |source| Error::Transport {
            url: url.to_string(),
            source,
        };

        let response = request.send().await.map_err(transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(transport)?;
        debug!("Fetched {} bytes from {}", body.len(), url);
        Ok(body)
    }
}

/// Run `fut` unless `cancel` fires first
pub async fn with_cancellation<T>(
    cancel: &CancellationToken,
    fut: impl Future<Output = Result<T>>,
) -> Result<T> {
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(Error::Cancelled),
        result = fut => result,
    }
}
