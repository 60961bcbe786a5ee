//! Baidu web search engine implementation

use super::error::GatewayError;
use super::traits::*;
use crate::results::RawRecord;
use anyhow::Result;
use scraper::{ElementRef, Html, Selector};

/// Selectors for the pieces of a result block that may carry the summary,
/// tried in order. Baidu changes class names between layouts.
const ABSTRACT_SELECTORS: &[&str] = &[
    ".c-abstract",
    "[class*=\"content-right\"]",
    ".c-span-last",
    ".c-color-text",
    ".c-row",
];

/// Markers of the anti-bot verification page
const CAPTCHA_MARKERS: &[&str] = &["wappass.baidu.com", "百度安全验证", "captcha"];

/// Baidu web search engine
pub struct Baidu {
    base_url: String,
}

impl Baidu {
    pub fn new() -> Self {
        Self::with_base_url(crate::BAIDU_ORIGIN)
    }

    /// Point requests at a different host, e.g. a mirror or a test server
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// A real results page always has the result column, even when the
    /// query itself mentions a marker.
    fn is_captcha(response: &EngineResponse) -> bool {
        response.url.contains("wappass.baidu.com")
            || (!response.text.contains("content_left")
                && CAPTCHA_MARKERS.iter().any(|m| response.text.contains(m)))
    }

    fn parse_results(&self, html: &str) -> Result<Vec<RawRecord>> {
        let document = Html::parse_document(html);

        let result_selector =
            selector("#content_left > div.result, #content_left > div.c-container")?;
        let title_selector = selector("h3")?;
        let link_selector = selector("h3 a")?;
        let abstract_selectors = ABSTRACT_SELECTORS
            .iter()
            .map(|css| selector(css))
            .collect::<Result<Vec<_>>>()?;

        let mut records = Vec::new();

        for (index, element) in document.select(&result_selector).enumerate() {
            // Blocks without a heading are widgets, not results
            let Some(heading) = element.select(&title_selector).next() else {
                continue;
            };

            let mut record = RawRecord::new();

            let title = collapse_whitespace(&heading.text().collect::<String>());
            if !title.is_empty() {
                record.insert("title", title);
            }

            if let Some(href) = element
                .select(&link_selector)
                .next()
                .and_then(|a| a.value().attr("href"))
            {
                record.insert("url", href);
            }

            if let Some(summary) = abstract_selectors
                .iter()
                .find_map(|sel| first_text(&element, sel))
            {
                record.insert("abstract", summary);
            }

            // Baidu numbers its result blocks through the id attribute
            let rank = element
                .value()
                .attr("id")
                .and_then(|id| id.parse::<i64>().ok())
                .unwrap_or(index as i64 + 1);
            record.insert("rank", rank);

            records.push(record);
        }

        Ok(records)
    }
}

impl Default for Baidu {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for Baidu {
    fn name(&self) -> &str {
        "baidu"
    }

    fn request(&self, params: &RequestParams) -> Result<EngineRequest> {
        let request = EngineRequest::get(format!("{}/s", self.base_url))
            .param("ie", "utf-8")
            .param("wd", params.query.as_str())
            .param("rn", params.num_results.to_string())
            .param("pn", "0")
            .header("Referer", format!("{}/", self.base_url));

        Ok(request)
    }

    fn response(&self, response: EngineResponse) -> Result<Vec<RawRecord>> {
        if !response.is_success() {
            return Err(GatewayError::Http(response.status).into());
        }

        if Self::is_captcha(&response) {
            return Err(GatewayError::Captcha.into());
        }

        self.parse_results(&response.text)
    }
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css)
        .map_err(|e| GatewayError::Parse(format!("invalid selector {}: {:?}", css, e)).into())
}

/// Text of the first element matching `sel` that has any non-blank text.
/// The text is returned untrimmed.
fn first_text(element: &ElementRef<'_>, sel: &Selector) -> Option<String> {
    element
        .select(sel)
        .map(|e| e.text().collect::<String>())
        .find(|text| !text.trim().is_empty())
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
