//! baidu-search: query Baidu web search from the command line
//!
//! Issues one search request, normalizes every returned record into a fixed
//! five-field shape and renders the list as text or JSON.

pub mod app;
pub mod config;
pub mod engines;
pub mod network;
pub mod output;
pub mod results;
pub mod search;

pub use app::App;
pub use config::Settings;
pub use engines::{BaiduGateway, SearchGateway};
pub use output::{EmptyResults, OutputFormat, Presenter};
pub use results::{normalize, RawRecord, SearchResultRecord};
pub use search::{run_search, SearchOutcome};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Origin prefixed to relative result links
pub const BAIDU_ORIGIN: &str = "https://www.baidu.com";

/// Provider label stamped on every normalized record
pub const SOURCE_NAME: &str = "百度";

/// Default number of requested results
pub const DEFAULT_NUM_RESULTS: u32 = 10;

/// Characters of an abstract shown in text mode
pub const ABSTRACT_MAX_CHARS: usize = 200;
