//! Client configuration sourced from the environment.

/// Production address of The One API.
pub const DEFAULT_BASE_URL: &str = "https://the-one-api.dev";

const BASE_URL_VAR: &str = "LOTR_API_BASE_URL";
const TOKEN_VAR: &str = "LOTR_API_TOKEN";

/// Settings used to build a [`Client`](crate::Client).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL without a trailing slash.
    pub base_url: String,
    /// Bearer token used when a call does not supply its own.
    pub default_token: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            default_token: None,
        }
    }
}

impl ClientConfig {
    /// Reads `LOTR_API_BASE_URL` and `LOTR_API_TOKEN`. Unset or blank
    /// variables fall back to the production URL and no default token.
    pub fn from_env() -> Self {
        Self {
            base_url: env_non_empty(BASE_URL_VAR).unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            default_token: env_non_empty(TOKEN_VAR),
        }
    }

    /// Resolves the token for a single call: the caller's token wins when
    /// it is non-empty, otherwise the configured default is used.
    pub fn resolve_token<'a>(&'a self, token: Option<&'a str>) -> Option<&'a str> {
        match token {
            Some(t) if !t.is_empty() => Some(t),
            _ => self.default_token.as_deref(),
        }
    }
}

fn env_non_empty(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}
