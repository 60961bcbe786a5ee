//! Search result types and normalization
//!
//! Raw records come straight from the engine; normalized records are what
//! gets rendered.

mod normalize;
mod types;

pub use normalize::normalize;
pub use types::*;
