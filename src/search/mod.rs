//! Search invocation
//!
//! Runs one gateway call and normalizes whatever comes back.

mod executor;
mod models;

pub use executor::run_search;
pub use models::SearchOutcome;
