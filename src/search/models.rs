//! Search outcome model

use crate::results::SearchResultRecord;

/// What one search invocation produced.
///
/// `records` is empty whenever `error` is set; a failure never carries
/// partial results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Normalized records in provider order
    pub records: Vec<SearchResultRecord>,
    /// Text of the gateway error, when the call failed
    pub error: Option<String>,
}

impl SearchOutcome {
    pub fn success(records: Vec<SearchResultRecord>) -> Self {
        Self {
            records,
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            records: Vec::new(),
            error: Some(error.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn is_failure(&self) -> bool {
        self.error.is_some()
    }
}
