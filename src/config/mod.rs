//! Configuration loading and management.
//!
//! This module is split into logical submodules:
//! - [`types`]: Core config struct definitions (Config, ApiConfig, Profile)
//! - [`auth`]: Authentication provider settings (AuthConfig)
//! - [`validation`]: Construction-time validation
//! - [`env`]: Environment variable names and overrides

mod auth;
pub mod env;
mod types;
mod validation;

pub use auth::AuthConfig;
pub use types::{ApiConfig, Config, ConfigError, Profile, UnknownProfile};
pub use validation::{ValidationError, validate};
