use std::{
    fmt,
    path::{Path, PathBuf},
};

use rustls::pki_types::{pem::PemObject, CertificateDer};
use thiserror::Error;

use crate::config::GatewayConfig;

/// gRPC metadata key LND reads the macaroon from.
pub const MACAROON_METADATA_KEY: &str = "macaroon";

#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("failed to read {kind} file {path}: {source}")]
    Io {
        kind: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("macaroon is empty")]
    EmptyMacaroon,
    #[error("invalid TLS certificate: {0}")]
    InvalidCertificate(String),
}

/// Bearer credential attached to every call, held in its lowercase hex wire form.
#[derive(Clone, PartialEq, Eq)]
pub struct Macaroon {
    hex: String,
}

impl Macaroon {
    /// Hex-encode raw macaroon bytes (lowercase, two digits per byte).
    ///
    /// ```
    /// use lnd_gateway::credentials::Macaroon;
    ///
    /// let mac = Macaroon::from_bytes(&[0x01, 0xab]).unwrap();
    /// assert_eq!(mac.as_hex(), "01ab");
    /// ```
    ///
    /// # Errors
    /// Returns [`CredentialError::EmptyMacaroon`] for an empty slice.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CredentialError> {
        if bytes.is_empty() {
            return Err(CredentialError::EmptyMacaroon);
        }
        Ok(Self {
            hex: hex::encode(bytes),
        })
    }

    /// Read a binary macaroon file (e.g. `admin.macaroon`).
    ///
    /// # Errors
    /// Returns [`CredentialError::Io`] when the file cannot be read.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CredentialError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| CredentialError::Io {
            kind: "macaroon",
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(&bytes)
    }

    pub fn as_hex(&self) -> &str {
        &self.hex
    }

    /// The `(key, value)` metadata pair sent on each request.
    pub fn metadata(&self) -> (String, String) {
        (MACAROON_METADATA_KEY.to_string(), self.hex.clone())
    }
}

impl fmt::Debug for Macaroon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Macaroon")
            .field("len", &(self.hex.len() / 2))
            .finish_non_exhaustive()
    }
}

/// The node's self-signed TLS certificate(s), parsed from PEM.
#[derive(Clone, Debug)]
pub struct TlsCertificate {
    certs: Vec<CertificateDer<'static>>,
}

impl TlsCertificate {
    /// Parse every `CERTIFICATE` block in a PEM document.
    ///
    /// # Errors
    /// Returns [`CredentialError::InvalidCertificate`] if the PEM is malformed or holds no
    /// certificate.
    pub fn from_pem(pem: &[u8]) -> Result<Self, CredentialError> {
        let certs = CertificateDer::pem_slice_iter(pem)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| CredentialError::InvalidCertificate(e.to_string()))?;
        if certs.is_empty() {
            return Err(CredentialError::InvalidCertificate(
                "no CERTIFICATE block found".into(),
            ));
        }
        Ok(Self { certs })
    }

    /// Read and parse a PEM certificate file (LND's `tls.cert`).
    ///
    /// # Errors
    /// Returns [`CredentialError::Io`] when the file cannot be read, otherwise see
    /// [`from_pem`](Self::from_pem).
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CredentialError> {
        let path = path.as_ref();
        let pem = std::fs::read(path).map_err(|source| CredentialError::Io {
            kind: "TLS certificate",
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_pem(&pem)
    }

    pub fn certificates(&self) -> &[CertificateDer<'static>] {
        &self.certs
    }
}

/// Everything read from disk before a connection is attempted.
#[derive(Clone, Debug)]
pub struct NodeCredentials {
    pub macaroon: Macaroon,
    pub tls_cert: TlsCertificate,
}

impl NodeCredentials {
    /// Load the certificate and macaroon named by `config`.
    ///
    /// The certificate is read first so a missing `tls.cert` is reported even when the macaroon
    /// path is also wrong.
    ///
    /// # Errors
    /// Returns [`CredentialError`] when either file is missing or invalid.
    pub fn load(config: &GatewayConfig) -> Result<Self, CredentialError> {
        let tls_cert = TlsCertificate::from_file(&config.tls_cert_path)?;
        let macaroon = Macaroon::from_file(&config.macaroon_path)?;
        Ok(Self { macaroon, tls_cert })
    }
}
