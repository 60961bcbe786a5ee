//! The Baidu search gateway: engine plus HTTP client

use super::baidu::Baidu;
use super::traits::*;
use crate::config::Settings;
use crate::network::HttpClient;
use crate::results::RawRecord;
use anyhow::Result;
use async_trait::async_trait;
use std::fmt;
use tracing::{debug, info};

/// Performs one Baidu search request per call
pub struct BaiduGateway {
    client: HttpClient,
    engine: Baidu,
}

impl BaiduGateway {
    pub fn new(client: HttpClient, engine: Baidu) -> Self {
        Self { client, engine }
    }

    /// Build the gateway from settings. Any failure here means the search
    /// capability is unavailable and no query should be attempted.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let client = HttpClient::with_settings(&settings.outgoing)?;
        let engine = Baidu::with_base_url(&settings.search.base_url);
        Ok(Self::new(client, engine))
    }
}

#[async_trait]
impl SearchGateway for BaiduGateway {
    async fn search(&self, query: &str, num_results: u32, debug: u8) -> Result<Vec<RawRecord>> {
        let params = RequestParams::new(query, num_results);
        let request = self.engine.request(&params)?;

        trace(
            debug,
            format_args!("{} request: {}", self.engine.name(), request.full_url()),
        );

        let response = self.client.execute(request).await?;

        trace(
            debug,
            format_args!(
                "{} response: status {} from {}",
                self.engine.name(),
                response.status,
                response.url
            ),
        );

        let mut records = self.engine.response(response)?;
        let parsed = records.len();
        records.truncate(num_results as usize);

        trace(
            debug,
            format_args!(
                "{} parsed {} records, keeping {}",
                self.engine.name(),
                parsed,
                records.len()
            ),
        );

        Ok(records)
    }
}

/// Gateway diagnostics are promoted to `info` when debug is on
fn trace(debug: u8, message: fmt::Arguments<'_>) {
    if debug > 0 {
        info!("{}", message);
    } else {
        debug!("{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::GatewayError;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn results_page(count: usize) -> String {
        let blocks: String = (1..=count)
            .map(|i| {
                format!(
                    r#"<div class="result c-container" id="{i}">
                         <h3><a href="/link?url={i}">结果 {i}</a></h3>
                         <div class="c-abstract">摘要 {i}</div>
                       </div>"#
                )
            })
            .collect();
        format!(r#"<html><body><div id="content_left">{blocks}</div></body></html>"#)
    }

    async fn gateway_for(server: &MockServer) -> BaiduGateway {
        let mut settings = Settings::default();
        settings.search.base_url = server.uri();
        BaiduGateway::from_settings(&settings).unwrap()
    }

    #[tokio::test]
    async fn test_search_sends_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/s"))
            .and(query_param("wd", "横店 招募"))
            .and(query_param("rn", "10"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw(results_page(2), "text/html; charset=utf-8"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let gateway = gateway_for(&server).await;
        let records = gateway.search("横店 招募", 10, 0).await.unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get_str("title"), Some("结果 1"));
        assert_eq!(records[1].get_str("url"), Some("/link?url=2"));
    }

    #[tokio::test]
    async fn test_search_truncates_to_requested_count() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/s"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw(results_page(5), "text/html; charset=utf-8"),
            )
            .mount(&server)
            .await;

        let gateway = gateway_for(&server).await;
        let records = gateway.search("rust", 3, 1).await.unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[2].get("rank").and_then(|v| v.as_i64()), Some(3));
    }

    #[tokio::test]
    async fn test_search_http_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/s"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let gateway = gateway_for(&server).await;
        let err = gateway.search("rust", 10, 0).await.unwrap_err();

        assert_eq!(
            err.downcast_ref::<GatewayError>(),
            Some(&GatewayError::Http(500))
        );
    }
}
