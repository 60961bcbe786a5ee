//! Engine error types

use thiserror::Error;

/// Failures an engine reports after the HTTP exchange completed
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GatewayError {
    #[error("HTTP error: {0}")]
    Http(u16),
    #[error("CAPTCHA required")]
    Captcha,
    #[error("failed to parse response: {0}")]
    Parse(String),
}
