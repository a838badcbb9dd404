//! HTTP client for The One API.

use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    config::ClientConfig,
    query::{Pagination, Query},
    types::{Envelope, Movie, Quote},
    Error,
};

const USER_AGENT: &str = concat!("lotr_api/", env!("CARGO_PKG_VERSION"));

/// HTTP client for The One API.
///
/// Holds one `reqwest::Client` for its whole lifetime, so every call reuses
/// the same connection pool. Calls take `&self` and can run concurrently.
/// Each call is a single GET attempt with the transport's default timeout.
pub struct Client {
    http: reqwest::Client,
    config: ClientConfig,
}

impl Client {
    /// Creates a client configured from `LOTR_API_BASE_URL` and `LOTR_API_TOKEN`.
    pub fn new() -> Result<Self, Error> {
        Self::from_config(ClientConfig::from_env())
    }

    /// Creates a client from an explicit configuration.
    pub fn from_config(config: ClientConfig) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;
        Ok(Self {
            http,
            config: ClientConfig {
                base_url: config.base_url.trim_end_matches('/').to_string(),
                ..config
            },
        })
    }

    /// Creates a client with a custom base URL and no default token. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        Self::from_config(ClientConfig {
            base_url: base_url.to_string(),
            default_token: None,
        })
    }

    /// Replaces the token used when a call does not supply one.
    pub fn with_default_token(mut self, token: impl Into<String>) -> Self {
        self.config.default_token = Some(token.into());
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn get_url(&self, segments: &[&str], query: &impl Query) -> Result<Url, Error> {
        let mut url = Url::parse(&self.config.base_url).map_err(|e| {
            tracing::error!("Invalid base URL {}: {}", self.config.base_url, e);
            Error::RequestFailed
        })?;
        url.path_segments_mut()
            .map_err(|_| {
                tracing::error!("Base URL cannot carry a path: {}", self.config.base_url);
                Error::RequestFailed
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(query.add_to_url(&url))
    }

    /// Builds the request URL, sends one GET with the resolved bearer token,
    /// and decodes the body into an envelope.
    async fn get<T, Q>(
        &self,
        segments: &[&str],
        token: Option<&str>,
        query: &Q,
    ) -> Result<Envelope<T>, Error>
    where
        T: DeserializeOwned,
        Q: Query,
    {
        let url = self.get_url(segments, query)?;
        tracing::debug!("GET {}", url);

        let mut request = self.http.get(url);
        if let Some(token) = self.config.resolve_token(token) {
            request = request.bearer_auth(token);
        }

        let resp = request.send().await.map_err(|e| {
            tracing::error!("Failed to get resource: {}", e);
            Error::RequestFailed
        })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
                body: snippet,
            });
        }

        if body.trim().is_empty() {
            tracing::error!("Empty response body with status {}", status);
            return Err(Error::EmptyResult("response body was empty".to_string()));
        }

        serde_json::from_str::<Envelope<T>>(&body).map_err(|e| {
            tracing::error!("Failed to parse resource: {} | body: {}", e, truncate_body(&body));
            Error::EmptyResult(e.to_string())
        })
    }

    /// Fetches a page of movies.
    pub async fn get_movies(
        &self,
        query: &Pagination,
        token: Option<&str>,
    ) -> Result<Envelope<Movie>, Error> {
        self.get::<Movie, Pagination>(&["v2", "movie"], token, query)
            .await
    }

    /// Fetches a single movie. A well-formed but unknown id yields an
    /// envelope with empty `docs`, not an error.
    pub async fn get_movie(&self, id: &str, token: Option<&str>) -> Result<Envelope<Movie>, Error> {
        self.get::<Movie, Pagination>(&["v2", "movie", id], token, &Pagination::default())
            .await
    }

    /// Fetches a page of quotes for a movie.
    pub async fn get_movie_quotes(
        &self,
        id: &str,
        query: &Pagination,
        token: Option<&str>,
    ) -> Result<Envelope<Quote>, Error> {
        self.get::<Quote, Pagination>(&["v2", "movie", id, "quote"], token, query)
            .await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}
