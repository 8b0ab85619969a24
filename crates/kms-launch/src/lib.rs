//! `kms-launch` - submits KMS-Tools launch forms to the back-end.
//!
//! Builds on `kms-args` for the form model and adds configuration, logging,
//! text rendering and the HTTP client for `/back-end/Launch` and
//! `/back-end/Exit`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

/// Back-end HTTP client.
pub mod client;
/// Layered configuration.
pub mod config;
/// Client errors.
pub mod error;
/// Tracing subscriber setup.
pub mod logging;
/// Text output for schemas and tokens.
pub mod render;

pub use client::{LaunchClient, LaunchResponse};
pub use config::{AppConfig, ConfigOverrides};
pub use error::ClientError;
