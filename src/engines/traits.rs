//! Engine traits and types

use crate::results::RawRecord;
use async_trait::async_trait;
use std::collections::HashMap;

/// Parameters for building a search request
#[derive(Debug, Clone)]
pub struct RequestParams {
    /// Search query string, passed through unvalidated
    pub query: String,
    /// Number of results to ask for
    pub num_results: u32,
}

impl RequestParams {
    /// Create new request parameters
    pub fn new(query: impl Into<String>, num_results: u32) -> Self {
        Self {
            query: query.into(),
            num_results,
        }
    }
}

/// HTTP GET request to be made for an engine
#[derive(Debug, Clone)]
pub struct EngineRequest {
    /// URL to request
    pub url: String,
    /// Request headers
    pub headers: HashMap<String, String>,
    /// Query parameters, sent in insertion order
    pub params: Vec<(String, String)>,
}

impl EngineRequest {
    /// Create a GET request
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: HashMap::new(),
            params: Vec::new(),
        }
    }

    /// Add a header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Add a query parameter
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Full URL including the query string, for diagnostics
    pub fn full_url(&self) -> String {
        match url::Url::parse_with_params(&self.url, &self.params) {
            Ok(url) => url.to_string(),
            Err(_) => self.url.clone(),
        }
    }
}

/// HTTP response from an engine request
#[derive(Debug)]
pub struct EngineResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub text: String,
    /// Response URL (after redirects)
    pub url: String,
}

impl EngineResponse {
    /// Check if response is successful (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A search engine: builds the request and parses the response
pub trait Engine: Send + Sync {
    /// Engine name
    fn name(&self) -> &str;

    /// Build the HTTP request for a search
    fn request(&self, params: &RequestParams) -> anyhow::Result<EngineRequest>;

    /// Parse the HTTP response into raw records, in provider order
    fn response(&self, response: EngineResponse) -> anyhow::Result<Vec<RawRecord>>;
}

/// The search capability consumed by the invocation wrapper.
///
/// `debug` is 0 or 1 and only controls how chatty the gateway is.
#[async_trait]
pub trait SearchGateway: Send + Sync {
    async fn search(
        &self,
        query: &str,
        num_results: u32,
        debug: u8,
    ) -> anyhow::Result<Vec<RawRecord>>;
}
