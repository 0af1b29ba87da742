//! Configuration validation.
//!
//! Runs inside every constructor, so a [`Config`] in consumer hands has
//! already passed it. Collects every failure instead of stopping at the
//! first; each message names the offending field.

use thiserror::Error;
use url::Url;

use super::types::Config;

/// Validation errors for configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("api.base_url is required")]
    MissingApiBaseUrl,
    #[error("api.base_url is not an absolute http(s) URL: '{0}'")]
    InvalidApiBaseUrl(String),
    #[error("auth.domain_prefix is required")]
    MissingAuthDomainPrefix,
    #[error("auth.domain_prefix must be a bare hostname fragment, got '{0}'")]
    InvalidAuthDomainPrefix(String),
    #[error("auth.audience is required")]
    MissingAuthAudience,
    #[error("auth.client_id is required")]
    MissingAuthClientId,
    #[error("auth.callback_url is required")]
    MissingAuthCallbackUrl,
    #[error("auth.callback_url is not an absolute http(s) URL: '{0}'")]
    InvalidAuthCallbackUrl(String),
}

/// Validate a configuration, returning all errors found.
pub fn validate(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.api.base_url.is_empty() {
        errors.push(ValidationError::MissingApiBaseUrl);
    } else if !is_http_url(&config.api.base_url) {
        errors.push(ValidationError::InvalidApiBaseUrl(
            config.api.base_url.clone(),
        ));
    }

    let auth = &config.auth;
    if auth.domain_prefix.is_empty() {
        errors.push(ValidationError::MissingAuthDomainPrefix);
    } else if auth.domain_prefix.contains('/') || auth.domain_prefix.contains(char::is_whitespace) {
        errors.push(ValidationError::InvalidAuthDomainPrefix(
            auth.domain_prefix.clone(),
        ));
    }
    if auth.audience.is_empty() {
        errors.push(ValidationError::MissingAuthAudience);
    }
    if auth.client_id.is_empty() {
        errors.push(ValidationError::MissingAuthClientId);
    }
    if auth.callback_url.is_empty() {
        errors.push(ValidationError::MissingAuthCallbackUrl);
    } else if !is_http_url(&auth.callback_url) {
        errors.push(ValidationError::InvalidAuthCallbackUrl(
            auth.callback_url.clone(),
        ));
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Absolute URL with an http(s) scheme and a host.
fn is_http_url(s: &str) -> bool {
    match Url::parse(s) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.has_host(),
        Err(_) => false,
    }
}
