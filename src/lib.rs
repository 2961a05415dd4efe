//! Healthmock - a mock service exposing a health/info contract
//!
//! Serves one in-memory service record as JSON and accepts total
//! replacements of it, so systems that poll service health can be
//! integration-tested against a controllable target.

pub mod api;
pub mod config;
pub mod error;
pub mod server;
pub mod types;

pub use error::{Error, Result};
