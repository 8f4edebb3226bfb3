//! Error types shared across the gateway
//!
//! - `app_error` - request-scoped errors rendered as the JSON error envelope
//! - `config_error` - startup configuration failures

pub mod app_error;
pub mod config_error;
