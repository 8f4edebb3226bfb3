//! HTTP request handlers
//!
//! This module organizes all API handlers into logical groups:
//! - `api` - Health check endpoint
//! - `agents` - Agent CRUD
//! - `calls` - Phone/web call creation, retrieval and listing
//! - `phone_numbers` - Phone number purchase, update and release
//! - `voices` - Voice retrieval and listing
//! - `llms` - Retell LLM configuration CRUD
//!
//! Every resource handler is a thin wrapper over `relay`, which performs the
//! upstream call and shapes the response.

pub mod agents;
pub mod api;
pub mod calls;
pub mod llms;
pub mod phone_numbers;
mod relay;
pub mod voices;
