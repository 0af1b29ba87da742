//! barista-cfg - load and validate a Barista deployment configuration.
//!
//! Mirrors the kiosk startup sequence: resolve the profile, initialize
//! tracing, construct the record, report. Exits nonzero when the
//! configuration cannot be constructed.
//!
//! Usage: `barista-cfg [profile] [config-dir]`

use std::str::FromStr;

use barista_config::config::env;
use barista_config::{Config, Profile, telemetry};
use tracing::{error, info};

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let profile_arg = args.next();
    let config_dir = args.next().unwrap_or_else(|| "config".to_string());

    let profile = resolve_profile(profile_arg.as_deref())?;
    telemetry::init(profile);

    let config = Config::load_with_env(&config_dir, profile).map_err(|e| {
        error!(profile = %profile, dir = %config_dir, error = %e, "Failed to load config");
        e
    })?;

    // The client id is a deployment secret and stays out of the logs.
    info!(
        profile = %config.profile,
        api = %config.api.base_url,
        tenant = %config.auth.tenant_domain(),
        audience = %config.auth.audience,
        callback = %config.auth.callback_url,
        "Configuration OK"
    );

    Ok(())
}

/// Profile from argv, then `BARISTA_PROFILE`, then the default.
fn resolve_profile(arg: Option<&str>) -> anyhow::Result<Profile> {
    match arg
        .map(str::to_owned)
        .or_else(|| std::env::var(env::PROFILE).ok())
    {
        Some(name) => Ok(Profile::from_str(&name)?),
        None => Ok(Profile::default()),
    }
}
