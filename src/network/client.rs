//! HTTP client for making requests to the search provider

use super::user_agent::{accept_html, accept_language, generate_user_agent};
use crate::config::OutgoingSettings;
use crate::engines::{EngineRequest, EngineResponse};
use anyhow::{Context, Result};
use reqwest::{Client, Response};
use std::collections::HashMap;
use std::time::Duration;

/// HTTP client wrapper with browser-like defaults
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    user_agent: String,
    extra_headers: HashMap<String, String>,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self> {
        Self::with_settings(&OutgoingSettings::default())
    }

    /// Create a new HTTP client with custom settings.
    ///
    /// Fails on an invalid proxy URL, a timeout that is not positive or too
    /// large for a `Duration`, or when the TLS backend cannot be initialised.
    pub fn with_settings(settings: &OutgoingSettings) -> Result<Self> {
        if !settings.request_timeout.is_finite() || settings.request_timeout <= 0.0 {
            anyhow::bail!(
                "request_timeout must be positive, got {}",
                settings.request_timeout
            );
        }

        let timeout = Duration::try_from_secs_f64(settings.request_timeout)
            .context("request_timeout out of range")?;

        let mut builder = Client::builder()
            .timeout(timeout)
            .cookie_store(true)
            .gzip(true)
            .brotli(true);

        // SSL verification
        if !settings.verify_ssl {
            builder = builder.danger_accept_invalid_certs(true);
        }

        // Proxy settings
        if let Some(ref proxy_url) = settings.proxies.all {
            builder = builder.proxy(
                reqwest::Proxy::all(proxy_url).context("invalid proxy URL in proxies.all")?,
            );
        } else {
            if let Some(ref http) = settings.proxies.http {
                builder = builder
                    .proxy(reqwest::Proxy::http(http).context("invalid proxy URL in proxies.http")?);
            }
            if let Some(ref https) = settings.proxies.https {
                builder = builder.proxy(
                    reqwest::Proxy::https(https).context("invalid proxy URL in proxies.https")?,
                );
            }
        }

        let client = builder.build().context("failed to build HTTP client")?;

        Ok(Self {
            client,
            user_agent: settings
                .useragent
                .clone()
                .unwrap_or_else(generate_user_agent),
            extra_headers: settings.extra_headers.clone(),
        })
    }

    /// Execute an engine request
    pub async fn execute(&self, request: EngineRequest) -> Result<EngineResponse> {
        let mut req_builder = self
            .client
            .get(&request.url)
            .header("User-Agent", &self.user_agent)
            .header("Accept", accept_html())
            .header("Accept-Language", accept_language())
            .header("DNT", "1")
            .header("Upgrade-Insecure-Requests", "1");

        for (key, value) in self.extra_headers.iter().chain(request.headers.iter()) {
            req_builder = req_builder.header(key, value);
        }

        if !request.params.is_empty() {
            req_builder = req_builder.query(&request.params);
        }

        let response = req_builder.send().await?;

        Self::parse_response(response).await
    }

    /// Parse response into EngineResponse
    async fn parse_response(response: Response) -> Result<EngineResponse> {
        let status = response.status().as_u16();
        let url = response.url().to_string();
        let text = response.text().await?;

        Ok(EngineResponse { status, text, url })
    }

    /// Get current user agent
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}
