//! Core configuration types and loading.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::auth::AuthConfig;
use super::env;
use super::validation::{ValidationError, validate};

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),
    #[error("environment variable {var}: {source}")]
    InvalidProfileVar {
        var: &'static str,
        source: UnknownProfile,
    },
    #[error("config file declares profile '{found}' but '{expected}' was requested")]
    ProfileMismatch { expected: Profile, found: Profile },
    #[error("invalid configuration: {}", join_errors(.0))]
    Invalid(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Deployment profile selecting which set of constants is active.
///
/// The profile is an explicit loader input rather than a file-swap
/// convention: [`Config::load_profile`] resolves `<profile>.toml` and
/// refuses a file whose own `profile` field disagrees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Local development against a locally running API.
    #[default]
    Development,
    /// Live deployment.
    Production,
}

impl Profile {
    /// Whether this is the production profile.
    pub fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }

    /// Canonical lowercase name ("development" / "production").
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unrecognized profile name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown profile '{0}' (expected 'development' or 'production')")]
pub struct UnknownProfile(pub String);

impl FromStr for Profile {
    type Err = UnknownProfile;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "development" => Ok(Self::Development),
            "production" => Ok(Self::Production),
            other => Err(UnknownProfile(other.to_string())),
        }
    }
}

/// Backend API configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL prefix for all backend requests (e.g., "http://127.0.0.1:5000").
    pub base_url: String,
}

/// Deployment configuration record.
///
/// Constructed once at startup, validated, then shared by read-only
/// reference. Every constructor runs [`validate`], so a `Config` in
/// consumer hands has already passed it; no mutating API exists after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Active deployment profile.
    pub profile: Profile,
    /// Backend API endpoint.
    pub api: ApiConfig,
    /// Authentication provider settings.
    pub auth: AuthConfig,
}

impl Config {
    /// Load and validate configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Self::read(path)?.validated()
    }

    /// Load `<dir>/<profile>.toml` for an explicitly selected profile.
    ///
    /// Fails if the file's own `profile` field disagrees with the requested
    /// one, so a mislabeled file cannot ship the wrong endpoints.
    pub fn load_profile<P: AsRef<Path>>(dir: P, profile: Profile) -> Result<Self, ConfigError> {
        Self::read(profile_path(dir, profile))?
            .matching(profile)?
            .validated()
    }

    /// Load a profile file, then apply `BARISTA_*` environment overrides.
    ///
    /// The deployment construction path: checked-in profiles carry the
    /// non-secret shape, the environment supplies per-deployment values.
    pub fn load_with_env<P: AsRef<Path>>(dir: P, profile: Profile) -> Result<Self, ConfigError> {
        let mut config = Self::read(profile_path(dir, profile))?.matching(profile)?;
        env::overlay(&mut config, env::process_lookup);
        config.validated()
    }

    /// Construct entirely from `BARISTA_*` environment variables.
    ///
    /// Every variable is required, the profile included.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env::process_lookup)
    }

    /// Construct from an arbitrary variable lookup (see [`env`]).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        env::build(lookup)?.validated()
    }

    /// Whether the production profile is active.
    pub fn is_production(&self) -> bool {
        self.profile.is_production()
    }

    /// Base URL prefix for all backend requests.
    pub fn api_base_url(&self) -> &str {
        &self.api.base_url
    }

    fn read<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    fn matching(self, profile: Profile) -> Result<Self, ConfigError> {
        if self.profile != profile {
            return Err(ConfigError::ProfileMismatch {
                expected: profile,
                found: self.profile,
            });
        }
        Ok(self)
    }

    fn validated(self) -> Result<Self, ConfigError> {
        match validate(&self) {
            Ok(()) => Ok(self),
            Err(errors) => Err(ConfigError::Invalid(errors)),
        }
    }
}

fn profile_path<P: AsRef<Path>>(dir: P, profile: Profile) -> std::path::PathBuf {
    dir.as_ref().join(format!("{}.toml", profile.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEVELOPMENT_TOML: &str = r#"
profile = "development"

[api]
base_url = "http://127.0.0.1:5000"

[auth]
domain_prefix = "websecure.us"
audience = "coffee-shop"
client_id = "RTTH6u6o1IfsiBxRIVKddR1BqTV4iJ85"
callback_url = "http://127.0.0.1:8100"
"#;

    // ========================================================================
    // Profile tests
    // ========================================================================

    #[test]
    fn profile_default_is_development() {
        assert_eq!(Profile::default(), Profile::Development);
        assert!(!Profile::default().is_production());
    }

    #[test]
    fn profile_parses_canonical_names() {
        assert_eq!("development".parse(), Ok(Profile::Development));
        assert_eq!("production".parse(), Ok(Profile::Production));
    }

    #[test]
    fn profile_rejects_unknown_names() {
        let err = "staging".parse::<Profile>().unwrap_err();
        assert_eq!(err, UnknownProfile("staging".to_string()));
        assert!(err.to_string().contains("staging"));
    }

    #[test]
    fn profile_display_matches_parse() {
        assert_eq!(Profile::Development.to_string(), "development");
        assert_eq!(Profile::Production.to_string(), "production");
    }

    // ========================================================================
    // Config tests
    // ========================================================================

    #[test]
    fn config_deserializes_from_toml() {
        let config: Config = toml::from_str(DEVELOPMENT_TOML).unwrap();
        assert_eq!(config.profile, Profile::Development);
        assert!(!config.is_production());
        assert_eq!(config.api_base_url(), "http://127.0.0.1:5000");
        assert_eq!(config.auth.domain_prefix, "websecure.us");
        assert_eq!(config.auth.audience, "coffee-shop");
        assert_eq!(config.auth.client_id, "RTTH6u6o1IfsiBxRIVKddR1BqTV4iJ85");
        assert_eq!(config.auth.callback_url, "http://127.0.0.1:8100");
    }

    #[test]
    fn config_missing_section_is_parse_error() {
        let parse_err = toml::from_str::<Config>("profile = \"development\"").unwrap_err();
        let err = ConfigError::from(parse_err);
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = Config::load("/nonexistent/barista/development.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn invalid_error_message_names_every_field() {
        let mut config: Config = toml::from_str(DEVELOPMENT_TOML).unwrap();
        config.api.base_url.clear();
        config.auth.audience.clear();
        let err = config.validated().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("api.base_url"));
        assert!(message.contains("auth.audience"));
    }
}
