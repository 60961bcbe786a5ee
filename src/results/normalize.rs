//! Raw record normalization

use super::types::{RawRecord, SearchResultRecord};
use crate::{BAIDU_ORIGIN, SOURCE_NAME};
use serde_json::Value;

/// Turn a raw engine record into a [`SearchResultRecord`].
///
/// Missing or mistyped keys fall back to `""` / `0`. A `url` that starts with
/// `/` is prefixed with the Baidu origin; every other value is kept as is.
pub fn normalize(raw: &RawRecord) -> SearchResultRecord {
    let title = raw.get_str("title").unwrap_or_default().to_string();

    let abstract_text = raw
        .get_str("abstract")
        .map(|s| s.trim().to_string())
        .unwrap_or_default();

    SearchResultRecord {
        title,
        url: absolutize(raw.get_str("url").unwrap_or_default()),
        abstract_text,
        rank: rank_of(raw.get("rank")),
        source: SOURCE_NAME.to_string(),
    }
}

fn absolutize(url: &str) -> String {
    if url.starts_with('/') {
        format!("{}{}", BAIDU_ORIGIN, url)
    } else {
        url.to_string()
    }
}

fn rank_of(value: Option<&Value>) -> i64 {
    match value {
        Some(Value::Number(n)) => n.as_i64().unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_full_record() {
        let raw = RawRecord::new()
            .with("title", "A")
            .with("url", "/x")
            .with("abstract", "  hi  ")
            .with("rank", 1);

        let record = normalize(&raw);

        assert_eq!(
            record,
            SearchResultRecord {
                title: "A".to_string(),
                url: "https://www.baidu.com/x".to_string(),
                abstract_text: "hi".to_string(),
                rank: 1,
                source: "百度".to_string(),
            }
        );
    }

    #[test]
    fn test_normalize_empty_record() {
        let record = normalize(&RawRecord::new());

        assert_eq!(record.title, "");
        assert_eq!(record.url, "");
        assert_eq!(record.abstract_text, "");
        assert_eq!(record.rank, 0);
        assert_eq!(record.source, "百度");
    }

    #[test]
    fn test_each_missing_key_defaults() {
        let full = RawRecord::new()
            .with("title", "t")
            .with("url", "https://example.com")
            .with("abstract", "a")
            .with("rank", 7);

        for missing in ["title", "url", "abstract", "rank"] {
            let mut raw = RawRecord::new();
            for key in ["title", "url", "abstract", "rank"] {
                if key != missing {
                    raw.insert(key, full.get(key).cloned().unwrap());
                }
            }

            let record = normalize(&raw);
            match missing {
                "title" => assert_eq!(record.title, ""),
                "url" => assert_eq!(record.url, ""),
                "abstract" => assert_eq!(record.abstract_text, ""),
                _ => assert_eq!(record.rank, 0),
            }
        }
    }

    #[test]
    fn test_absolute_urls_untouched() {
        for url in [
            "http://www.baidu.com/link?url=abc",
            "https://example.com/a/b",
            "example.com/relative",
            "",
        ] {
            let record = normalize(&RawRecord::new().with("url", url));
            assert_eq!(record.url, url);
        }
    }

    #[test]
    fn test_relative_urls_prefixed() {
        for url in ["/", "/link?url=abc", "//cdn.example.com/x"] {
            let record = normalize(&RawRecord::new().with("url", url));
            assert_eq!(record.url, format!("https://www.baidu.com{}", url));
        }
    }

    #[test]
    fn test_mistyped_values_degrade() {
        let raw = RawRecord::new()
            .with("title", Value::Null)
            .with("url", 42)
            .with("abstract", Value::Bool(true))
            .with("rank", "3");

        let record = normalize(&raw);

        assert_eq!(record.title, "");
        assert_eq!(record.url, "");
        assert_eq!(record.abstract_text, "");
        assert_eq!(record.rank, 3);
    }

    #[test]
    fn test_abstract_unicode_whitespace_trimmed() {
        let raw = RawRecord::new().with("abstract", "\u{3000}\n 横店 招募\t ");
        assert_eq!(normalize(&raw).abstract_text, "横店 招募");
    }
}
