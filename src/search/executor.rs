//! Search execution

use super::models::SearchOutcome;
use crate::engines::SearchGateway;
use crate::results::{normalize, SearchResultRecord};
use std::time::Instant;
use tracing::debug;

/// Call the gateway once and normalize every returned record.
///
/// Never fails: any gateway error is turned into an outcome with
/// no records and the error text. The query is passed through unvalidated.
pub async fn run_search(
    gateway: &dyn SearchGateway,
    query: &str,
    num_results: u32,
    debug: u8,
) -> SearchOutcome {
    let start = Instant::now();

    match gateway.search(query, num_results, debug).await {
        Ok(raw) => {
            let records: Vec<SearchResultRecord> = raw.iter().map(normalize).collect();
            debug!(
                "Search '{}' returned {} results in {:?}",
                query,
                records.len(),
                start.elapsed()
            );
            SearchOutcome::success(records)
        }
        Err(e) => {
            let message = format!("{:#}", e);
            // The presenter reports the failure to the user
            debug!("Search '{}' failed: {}", query, message);
            SearchOutcome::failure(message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::RawRecord;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Gateway returning canned records and remembering its arguments
    struct StubGateway {
        records: Vec<RawRecord>,
        calls: Mutex<Vec<(String, u32, u8)>>,
    }

    impl StubGateway {
        fn new(records: Vec<RawRecord>) -> Self {
            Self {
                records,
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl SearchGateway for StubGateway {
        async fn search(
            &self,
            query: &str,
            num_results: u32,
            debug: u8,
        ) -> anyhow::Result<Vec<RawRecord>> {
            self.calls
                .lock()
                .unwrap()
                .push((query.to_string(), num_results, debug));
            Ok(self.records.clone())
        }
    }

    struct FailingGateway;

    #[async_trait]
    impl SearchGateway for FailingGateway {
        async fn search(&self, _: &str, _: u32, _: u8) -> anyhow::Result<Vec<RawRecord>> {
            Err(anyhow::anyhow!("connection refused"))
        }
    }

    #[test]
    fn test_normalizes_gateway_records() {
        let gateway = StubGateway::new(vec![RawRecord::new()
            .with("title", "A")
            .with("url", "/x")
            .with("abstract", "  hi  ")
            .with("rank", 1)]);

        let outcome = tokio_test::block_on(run_search(&gateway, "test", 10, 0));

        assert!(!outcome.is_failure());
        assert_eq!(outcome.records.len(), 1);
        let record = &outcome.records[0];
        assert_eq!(record.title, "A");
        assert_eq!(record.url, "https://www.baidu.com/x");
        assert_eq!(record.abstract_text, "hi");
        assert_eq!(record.rank, 1);
        assert_eq!(record.source, "百度");
    }

    #[test]
    fn test_forwards_arguments_unvalidated() {
        let gateway = StubGateway::new(Vec::new());

        let outcome = tokio_test::block_on(run_search(&gateway, "", 500, 1));

        assert!(outcome.is_empty());
        assert!(!outcome.is_failure());
        assert_eq!(
            *gateway.calls.lock().unwrap(),
            vec![(String::new(), 500, 1)]
        );
    }

    #[test]
    fn test_preserves_provider_order() {
        let gateway = StubGateway::new(vec![
            RawRecord::new().with("title", "third").with("rank", 3),
            RawRecord::new().with("title", "first").with("rank", 1),
        ]);

        let outcome = tokio_test::block_on(run_search(&gateway, "q", 10, 0));

        let titles: Vec<_> = outcome.records.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["third", "first"]);
    }

    #[test]
    fn test_gateway_error_becomes_empty_outcome() {
        let outcome = tokio_test::block_on(run_search(&FailingGateway, "test", 10, 0));

        assert!(outcome.is_empty());
        assert_eq!(outcome.error.as_deref(), Some("connection refused"));
    }
}
