//! Gateway configuration loaded via OrthoConfig.
//!
//! Values come from `GATEWAY_*` environment variables, configuration files
//! or command-line flags, in OrthoConfig's usual precedence.

use std::net::SocketAddr;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Invalid or missing configuration values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// `GATEWAY_UPSTREAM_URL` is not set.
    #[error("GATEWAY_UPSTREAM_URL must be set to the DB Handler base URL")]
    MissingUpstreamUrl,
    /// The upstream URL does not parse or is not http(s).
    #[error("invalid DB Handler URL '{value}': {reason}")]
    InvalidUpstreamUrl {
        /// Configured text.
        value: String,
        /// Why it was rejected.
        reason: String,
    },
    /// The bind address is not `host:port`.
    #[error("invalid bind address '{value}': {reason}")]
    InvalidBindAddr {
        /// Configured text.
        value: String,
        /// Why it was rejected.
        reason: String,
    },
}

/// Configuration values controlling the gateway process.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "GATEWAY")]
pub struct GatewaySettings {
    /// Base URL of the DB Handler API.
    pub upstream_url: Option<String>,
    /// Skip the startup upstream check and log at debug level.
    #[ortho_config(default = false)]
    pub debug: bool,
    /// Log filter directive used when `RUST_LOG` is unset.
    pub log_level: Option<String>,
    /// Socket address to listen on.
    pub bind_addr: Option<String>,
}

impl GatewaySettings {
    /// Return the upstream base URL, normalised to end with `/`.
    ///
    /// # Errors
    /// [`SettingsError`] when the URL is missing, malformed or not http(s).
    pub fn upstream_url(&self) -> Result<Url, SettingsError> {
        let raw = self
            .upstream_url
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or(SettingsError::MissingUpstreamUrl)?;
        let invalid = |reason: String| SettingsError::InvalidUpstreamUrl {
            value: raw.to_owned(),
            reason,
        };
        let mut url = Url::parse(raw).map_err(|err| invalid(err.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
        }
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(url)
    }

    /// Return the listen address, falling back to `0.0.0.0:8080`.
    ///
    /// # Errors
    /// [`SettingsError::InvalidBindAddr`] when the value does not parse.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let raw = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        raw.parse().map_err(|err: std::net::AddrParseError| SettingsError::InvalidBindAddr {
            value: raw.to_owned(),
            reason: err.to_string(),
        })
    }

    /// Return the log filter directive: configured, else `debug` in debug
    /// mode, else `info`.
    pub fn log_level(&self) -> &str {
        match self.log_level.as_deref() {
            Some(level) => level,
            None if self.debug => "debug",
            None => "info",
        }
    }
}
