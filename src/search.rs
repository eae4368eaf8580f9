//! Search adapter over the Bright Data fetch proxy.
//!
//! Wraps one SERP request per query and normalizes the provider's "organic"
//! results. Failures never reach the caller: anything that goes wrong is
//! logged and surfaces as an empty result list.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};
use url::form_urlencoded;

/// User-Agent string identifying this client
const USER_AGENT: &str = concat!("prospecta/", env!("CARGO_PKG_VERSION"));

/// Default timeout for HTTP requests
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const DEFAULT_ENDPOINT: &str = "https://api.brightdata.com/request";

/// Search engines the proxy can drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SearchEngine {
    #[default]
    Google,
    Bing,
}

impl SearchEngine {
    fn base_url(&self) -> &'static str {
        match self {
            SearchEngine::Google => "https://www.google.com/search",
            SearchEngine::Bing => "https://www.bing.com/search",
        }
    }

    /// The `source` label attached to results from this engine.
    pub fn source(&self) -> &'static str {
        match self {
            SearchEngine::Google => "Google",
            SearchEngine::Bing => "Bing",
        }
    }

    /// Parse a config value, defaulting to Google for anything unknown.
    pub fn from_config(value: &str) -> SearchEngine {
        match value.to_ascii_lowercase().as_str() {
            "bing" => SearchEngine::Bing,
            _ => SearchEngine::Google,
        }
    }
}

/// One normalized search hit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: Option<String>,
    pub url: Option<String>,
    pub snippet: Option<String>,
    pub source: String,
}

#[derive(Error, Debug)]
enum SearchError {
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("provider returned status {0}")]
    Status(u16),
}

#[derive(Debug, Serialize)]
struct ProxyPayload<'a> {
    zone: &'a str,
    url: String,
    format: &'static str,
}

/// Provider response: only the organic list matters.
#[derive(Debug, Deserialize, Default)]
struct SerpBody {
    #[serde(default)]
    organic: Vec<OrganicItem>,
}

/// One provider result; the URL may arrive under any of three keys.
#[derive(Debug, Deserialize)]
struct OrganicItem {
    title: Option<String>,
    url: Option<String>,
    link: Option<String>,
    href: Option<String>,
    snippet: Option<String>,
}

impl OrganicItem {
    fn into_result(self, engine: SearchEngine) -> SearchResult {
        SearchResult {
            title: self.title,
            url: self.url.or(self.link).or(self.href),
            snippet: self.snippet,
            source: engine.source().to_string(),
        }
    }
}

/// Client for the fetch-proxy SERP endpoint.
#[derive(Debug, Clone)]
pub struct SearchClient {
    http: reqwest::Client,
    api_key: String,
    endpoint: String,
    zone: String,
}

impl SearchClient {
    pub fn new(api_key: impl Into<String>, zone: impl Into<String>) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            api_key: api_key.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            zone: zone.into(),
        })
    }

    /// Point the client at a different proxy endpoint (tests).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Search the web for `query`.
    ///
    /// Returns the normalized organic results, or an empty Vec on any
    /// network/HTTP/parse failure. Callers must treat the empty Vec as
    /// "no results", not as an error signal.
    pub async fn search(&self, query: &str, engine: SearchEngine) -> Vec<SearchResult> {
        match self.request_results(query, engine).await {
            Ok(results) => {
                info!(count = results.len(), query, "search results fetched");
                results
            }
            Err(e) => {
                warn!(error = %e, query, "web search failed");
                Vec::new()
            }
        }
    }

    async fn request_results(
        &self,
        query: &str,
        engine: SearchEngine,
    ) -> Result<Vec<SearchResult>, SearchError> {
        let payload = ProxyPayload {
            zone: &self.zone,
            url: build_search_url(query, engine),
            format: "raw",
        };

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status(status.as_u16()));
        }

        let body: SerpBody = response.json().await?;
        Ok(body
            .organic
            .into_iter()
            .map(|item| item.into_result(engine))
            .collect())
    }
}

/// Build the engine URL with the query escaped and JSON output requested.
fn build_search_url(query: &str, engine: SearchEngine) -> String {
    let escaped: String = form_urlencoded::byte_serialize(query.as_bytes()).collect();
    format!("{}?q={}&brd_json=1", engine.base_url(), escaped)
}
