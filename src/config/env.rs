//! Environment variable names and overrides.
//!
//! One constant per configuration field. Functions take the variable
//! lookup as an argument so tests inject a map instead of mutating the
//! process environment; [`process_lookup`] is the `std::env` backing used
//! at runtime.

use std::str::FromStr;

use super::auth::AuthConfig;
use super::types::{ApiConfig, Config, ConfigError, Profile};

/// Deployment profile name ("development" or "production").
///
/// Read when resolving which profile to load, and by [`Config::from_env`].
/// It is not an overlay variable: the profile is an explicit loader input.
pub const PROFILE: &str = "BARISTA_PROFILE";
/// Base URL of the drinks API.
pub const API_BASE_URL: &str = "BARISTA_API_BASE_URL";
/// Auth0 tenant domain prefix.
pub const AUTH_DOMAIN_PREFIX: &str = "BARISTA_AUTH_DOMAIN_PREFIX";
/// Audience the tenant issues access tokens for.
pub const AUTH_AUDIENCE: &str = "BARISTA_AUTH_AUDIENCE";
/// Client identifier of the kiosk application registration.
pub const AUTH_CLIENT_ID: &str = "BARISTA_AUTH_CLIENT_ID";
/// Redirect target after a completed login.
pub const AUTH_CALLBACK_URL: &str = "BARISTA_AUTH_CALLBACK_URL";

/// Lookup backed by the process environment.
pub fn process_lookup(var: &str) -> Option<String> {
    std::env::var(var).ok()
}

/// Apply whichever value variables are set on top of file-sourced values.
pub fn overlay(config: &mut Config, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(value) = lookup(API_BASE_URL) {
        config.api.base_url = value;
    }
    if let Some(value) = lookup(AUTH_DOMAIN_PREFIX) {
        config.auth.domain_prefix = value;
    }
    if let Some(value) = lookup(AUTH_AUDIENCE) {
        config.auth.audience = value;
    }
    if let Some(value) = lookup(AUTH_CLIENT_ID) {
        config.auth.client_id = value;
    }
    if let Some(value) = lookup(AUTH_CALLBACK_URL) {
        config.auth.callback_url = value;
    }
}

/// Build an unvalidated record from a lookup; every variable is required.
pub(super) fn build(lookup: impl Fn(&str) -> Option<String>) -> Result<Config, ConfigError> {
    let require = |var: &'static str| lookup(var).ok_or(ConfigError::MissingVar(var));

    let profile_name = require(PROFILE)?;
    let profile = Profile::from_str(&profile_name)
        .map_err(|source| ConfigError::InvalidProfileVar { var: PROFILE, source })?;

    Ok(Config {
        profile,
        api: ApiConfig {
            base_url: require(API_BASE_URL)?,
        },
        auth: AuthConfig {
            domain_prefix: require(AUTH_DOMAIN_PREFIX)?,
            audience: require(AUTH_AUDIENCE)?,
            client_id: require(AUTH_CLIENT_ID)?,
            callback_url: require(AUTH_CALLBACK_URL)?,
        },
    })
}
