//! Process-wide settings read once from the environment

/// Environment variable holding an optional GitHub API token
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Environment variable overriding the release API base URL
pub const API_URL_ENV: &str = "HACKDEPS_GITHUB_API_URL";

/// Default release API base URL
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Immutable settings shared by every network operation of a run
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Bearer token attached to every request, mitigating API rate limits
    pub token: Option<String>,

    /// Release API base URL without trailing slash
    pub api_url: String,

    /// User-Agent header value
    pub user_agent: String,
}

impl RuntimeConfig {
    /// Read settings from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let token = lookup(TOKEN_ENV).filter(|t| !t.trim().is_empty());
        let api_url = lookup(API_URL_ENV)
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Self {
            token,
            api_url: api_url.trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }

    /// Use a different release API base URL
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Use a bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            token: None,
            api_url: DEFAULT_API_URL.to_string(),
            user_agent: format!("hackdeps/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}
