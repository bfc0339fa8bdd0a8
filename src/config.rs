use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default LND gRPC port.
pub const DEFAULT_PORT: u16 = 10009;

/// Environment variable consulted for the TLS cipher-suite override.
pub const CIPHER_SUITES_ENV: &str = "GRPC_SSL_CIPHER_SUITES";

/// Cipher-suite selection used when neither the config nor the environment names one.
pub const DEFAULT_CIPHER_SUITES: &str = "HIGH+ECDSA";

/// Environment variables read by [`GatewayConfig::from_env`].
pub const HOST_ENV: &str = "LND_HOST";
pub const PORT_ENV: &str = "LND_PORT";
pub const MACAROON_PATH_ENV: &str = "LND_MACAROON_PATH";
pub const TLS_CERT_PATH_ENV: &str = "LND_TLS_CERT_PATH";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing configuration value `{0}`")]
    Missing(&'static str),
    #[error("invalid configuration value `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("unsupported cipher suite selection `{0}`")]
    UnsupportedCipherSuites(String),
}

/// Connection settings for a single LND node.
///
/// Built once and handed to [`crate::Gateway`] (or [`crate::transport::direct::DirectGrpc`]) at
/// construction time; nothing in the crate mutates it afterwards.
///
/// # Examples
///
/// ```
/// use lnd_gateway::config::GatewayConfig;
///
/// let config = GatewayConfig::from_toml_str(
///     r#"
///     host = "127.0.0.1"
///     macaroon_path = "/home/lnd/.lnd/data/chain/bitcoin/regtest/admin.macaroon"
///     tls_cert_path = "/home/lnd/.lnd/tls.cert"
///     "#,
/// )?;
/// assert_eq!(config.endpoint(), "https://127.0.0.1:10009");
/// # Ok::<(), lnd_gateway::config::ConfigError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Hostname or IP address of the node's gRPC listener.
    pub host: String,
    /// gRPC port (LND's `rpclisten`).
    #[serde(default = "default_port")]
    pub port: u16,
    /// Path to the binary macaroon file sent with every call.
    pub macaroon_path: PathBuf,
    /// Path to the node's PEM-encoded `tls.cert`.
    pub tls_cert_path: PathBuf,
    /// Cipher-suite selection; takes precedence over [`CIPHER_SUITES_ENV`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cipher_suites: Option<String>,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

impl GatewayConfig {
    pub fn new(
        host: impl Into<String>,
        port: u16,
        macaroon_path: impl Into<PathBuf>,
        tls_cert_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            host: host.into(),
            port,
            macaroon_path: macaroon_path.into(),
            tls_cert_path: tls_cert_path.into(),
            cipher_suites: None,
        }
    }

    /// Pin the cipher-suite selection instead of consulting the environment.
    #[must_use]
    pub fn with_cipher_suites(mut self, selection: impl Into<String>) -> Self {
        self.cipher_suites = Some(selection.into());
        self
    }

    /// Parse and validate a TOML document.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when the document is malformed or fails validation.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML config file.
    ///
    /// # Errors
    /// Returns [`ConfigError::Io`] when the file cannot be read, otherwise see
    /// [`from_toml_str`](Self::from_toml_str).
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    /// Build a config from `LND_HOST`, `LND_PORT`, `LND_MACAROON_PATH` and `LND_TLS_CERT_PATH`.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when a required variable is unset or a value is invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup(HOST_ENV).ok_or(ConfigError::Missing(HOST_ENV))?;
        let port = match lookup(PORT_ENV) {
            Some(raw) => raw.trim().parse().map_err(|e| ConfigError::Invalid {
                field: PORT_ENV,
                reason: format!("{e}"),
            })?,
            None => DEFAULT_PORT,
        };
        let macaroon_path = lookup(MACAROON_PATH_ENV).ok_or(ConfigError::Missing(MACAROON_PATH_ENV))?;
        let tls_cert_path = lookup(TLS_CERT_PATH_ENV).ok_or(ConfigError::Missing(TLS_CERT_PATH_ENV))?;
        let config = Self::new(host, port, macaroon_path, tls_cert_path);
        config.validate()?;
        Ok(config)
    }

    /// Check the values that can be checked without touching the filesystem or network.
    ///
    /// # Errors
    /// Returns [`ConfigError::Invalid`] for an empty host or path, or a zero port.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "host",
                reason: "must not be empty".into(),
            });
        }
        if self.port == 0 {
            return Err(ConfigError::Invalid {
                field: "port",
                reason: "must be non-zero".into(),
            });
        }
        if self.macaroon_path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid {
                field: "macaroon_path",
                reason: "must not be empty".into(),
            });
        }
        if self.tls_cert_path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid {
                field: "tls_cert_path",
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }

    /// gRPC endpoint URI (`https://host:port`). IPv6 literals are bracketed.
    pub fn endpoint(&self) -> String {
        let host = self.host.trim();
        if host.contains(':') && !host.starts_with('[') {
            format!("https://[{host}]:{}", self.port)
        } else {
            format!("https://{host}:{}", self.port)
        }
    }

    /// Cipher-suite selection in effect: the config value, else [`CIPHER_SUITES_ENV`], else
    /// [`DEFAULT_CIPHER_SUITES`].
    pub fn cipher_suites(&self) -> String {
        self.cipher_suites_with(|key| std::env::var(key).ok())
    }

    pub(crate) fn cipher_suites_with<F>(&self, lookup: F) -> String
    where
        F: Fn(&str) -> Option<String>,
    {
        self.cipher_suites
            .clone()
            .or_else(|| lookup(CIPHER_SUITES_ENV))
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CIPHER_SUITES.to_string())
    }
}
