//! # API Shared
//!
//! Shared wire definitions for the donation service APIs.
//!
//! Contains:
//! - JSON request/response types (`wire` module), with OpenAPI schemas
//! - Shared services like `HealthService`
//!
//! Used by `api-rest` and the `donation-run` binary.

pub mod health;
pub mod wire;

pub use health::HealthService;
pub use wire::*;
