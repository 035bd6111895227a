//! Page host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 9000;
pub const DEFAULT_STATIC_DIR: &str = "static";
pub const DEFAULT_TEXTURE_DIR: &str = "test_images/textures";
pub const DEFAULT_PKG_DIR: &str = "pkg";
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;
pub const DEFAULT_BACKEND_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable {var}")]
    Missing { var: &'static str },
    #[error("{var} must be an http(s) URL, got {value:?}")]
    InvalidUrl { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Base URL of the processing service, without trailing slash.
    pub backend_url: String,
    pub static_dir: PathBuf,
    pub texture_dir: PathBuf,
    pub pkg_dir: PathBuf,
    pub max_upload_bytes: usize,
    pub backend_timeout: Duration,
}

impl ServerConfig {
    /// Build typed config from environment variables.
    ///
    /// Required:
    /// - `PROCESSING_BACKEND_URL`
    ///
    /// Optional:
    /// - `PORT`: default 9000
    /// - `STATIC_DIR`: default `static`
    /// - `TEXTURE_DIR`: default `test_images/textures`
    /// - `PKG_DIR`: default `pkg`
    /// - `MAX_UPLOAD_BYTES`: default 16 MiB
    /// - `BACKEND_TIMEOUT_SECS`: default 120
    ///
    /// # Errors
    ///
    /// Returns an error if the backend URL is missing or not http(s).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = "PROCESSING_BACKEND_URL";
        let raw = lookup(var).ok_or(ConfigError::Missing { var })?;
        let backend_url = raw.trim().trim_end_matches('/').to_string();
        if !(backend_url.starts_with("http://") || backend_url.starts_with("https://")) {
            return Err(ConfigError::InvalidUrl { var, value: raw });
        }

        let path = |key: &str, default: &str| PathBuf::from(lookup(key).unwrap_or_else(|| default.to_string()));

        Ok(Self {
            port: parse_or(&lookup, "PORT", DEFAULT_PORT),
            backend_url,
            static_dir: path("STATIC_DIR", DEFAULT_STATIC_DIR),
            texture_dir: path("TEXTURE_DIR", DEFAULT_TEXTURE_DIR),
            pkg_dir: path("PKG_DIR", DEFAULT_PKG_DIR),
            max_upload_bytes: parse_or(&lookup, "MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES),
            backend_timeout: Duration::from_secs(parse_or(
                &lookup,
                "BACKEND_TIMEOUT_SECS",
                DEFAULT_BACKEND_TIMEOUT_SECS,
            )),
        })
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: std::str::FromStr,
{
    lookup(key)
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}
