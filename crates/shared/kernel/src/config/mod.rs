use claimmap_domain::config::IdentityConfig;
use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Custom error type for config loading.
#[claimmap_derive::claimmap_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Base name of the configuration file used when no path is given.
pub const DEFAULT_CONFIG_PATH: &str = "identity";

/// Prefix of environment variables that override file settings.
pub const ENV_PREFIX: &str = "CLAIMMAP";

/// Loads configuration from a file with environment overrides layered on top.
///
/// 1. **Base File**: the file at `path`, or `identity` in the working directory. The format is
///    inferred from the extension; without one, every supported extension is probed.
/// 2. **Environment Overrides**: variables prefixed with `CLAIMMAP__`, nested with double
///    underscores (e.g. `CLAIMMAP__MAPPING__LOCALE` maps to `mapping.locale`). Environment keys
///    are lowercased, so they only reach snake_case keys.
///
/// # Errors
/// Returns [`ConfigError::Config`] if the file cannot be found or parsed, or if its content
/// does not match the structure of `T`.
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(true))
        .add_source(
            Environment::with_prefix(ENV_PREFIX).separator("__").convert_case(config::Case::Snake),
        );

    info!("Loading config from {}", effective_path.display());

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}

/// Loads the [`IdentityConfig`] holding the claim mapping table.
///
/// # Errors
/// See [`load_config`].
pub fn load_identity_config(path: Option<impl AsRef<Path>>) -> Result<IdentityConfig, ConfigError> {
    let cfg: IdentityConfig = load_config(path)?;
    info!(entries = cfg.mapping.len(), "Claim mapping loaded");
    Ok(cfg)
}
