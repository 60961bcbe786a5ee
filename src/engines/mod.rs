//! Search engine module
//!
//! Defines the Engine and SearchGateway traits and the Baidu implementation.

mod error;
mod gateway;
mod traits;

pub mod baidu;

pub use baidu::Baidu;
pub use error::GatewayError;
pub use gateway::BaiduGateway;
pub use traits::*;
