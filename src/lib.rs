//! barista-config - deployment configuration for the Barista kiosk client.
//!
//! One immutable record carries the deployment constants the rest of the
//! application reads at startup: the drinks API base URL, the Auth0 tenant
//! settings, and the active profile. The record is constructed once,
//! validated, and shared by read-only reference with every consumer.

pub mod config;
pub mod telemetry;

pub use config::{ApiConfig, AuthConfig, Config, ConfigError, Profile};
