use carhub_domain::constants::{ENV_PREFIX, ENV_SEPARATOR};
use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

const DEFAULT_CONFIG_FILE: &str = "server";

#[carhub_derive::carhub_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads `T` from a required file overlaid with `CARHUB__*` environment variables.
///
/// The path may omit the extension (`"server"` finds `server.toml`) and
/// defaults to `server` in the working directory. Nested keys use a double
/// underscore, so `CARHUB__SERVER__PORT=8080` overrides `server.port`.
///
/// # Errors
/// Fails when the file is missing or the merged values do not fit `T`.
///
/// # Example
/// ```rust,no_run
/// use carhub_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T>
where
    T: DeserializeOwned,
{
    let path = path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), |p| p.as_ref().to_path_buf());
    info!("Loading config from {}", path.display());

    layered(&path, environment())
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator(ENV_SEPARATOR)
        .separator(ENV_SEPARATOR)
        .try_parsing(true)
}

fn layered<T: DeserializeOwned>(path: &Path, env: Environment) -> Result<T> {
    Config::builder()
        .add_source(File::from(path).required(true))
        .add_source(env)
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")
}
