//! Client TLS setup for LND's self-signed certificate.
//!
//! LND serves a self-signed certificate that is usually marked `CA:TRUE`, which webpki refuses as
//! an end-entity certificate. Instead of chain validation the verifier pins the exact certificate
//! read from `tls.cert` and still checks handshake signatures against it.

use std::sync::Arc;

use rustls::{
    client::danger::{HandshakeSignatureValid, ServerCertVerified, ServerCertVerifier},
    crypto::{verify_tls12_signature, verify_tls13_signature, CryptoProvider, WebPkiSupportedAlgorithms},
    pki_types::{CertificateDer, ServerName, UnixTime},
    CertificateError, DigitallySignedStruct, SignatureScheme, SupportedCipherSuite,
    SupportedProtocolVersion,
};
use tracing::debug;

use super::TransportError;
use crate::{config::ConfigError, credentials::TlsCertificate};

/// The `HIGH+ECDSA` keyword: ECDHE-ECDSA AEAD suites on TLS 1.2 plus every TLS 1.3 suite.
const HIGH_ECDSA: &str = "HIGH+ECDSA";

// Accepted spellings mapped to the names rustls reports. TLS 1.3 suites use their IANA names,
// TLS 1.2 suites their OpenSSL names.
const SUITE_ALIASES: &[(&str, &str)] = &[
    ("TLS_AES_128_GCM_SHA256", "TLS13_AES_128_GCM_SHA256"),
    ("TLS_AES_256_GCM_SHA384", "TLS13_AES_256_GCM_SHA384"),
    ("TLS_CHACHA20_POLY1305_SHA256", "TLS13_CHACHA20_POLY1305_SHA256"),
    (
        "ECDHE-ECDSA-AES128-GCM-SHA256",
        "TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256",
    ),
    (
        "ECDHE-ECDSA-AES256-GCM-SHA384",
        "TLS_ECDHE_ECDSA_WITH_AES_256_GCM_SHA384",
    ),
    (
        "ECDHE-ECDSA-CHACHA20-POLY1305",
        "TLS_ECDHE_ECDSA_WITH_CHACHA20_POLY1305_SHA256",
    ),
    (
        "ECDHE-RSA-AES128-GCM-SHA256",
        "TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256",
    ),
    (
        "ECDHE-RSA-AES256-GCM-SHA384",
        "TLS_ECDHE_RSA_WITH_AES_256_GCM_SHA384",
    ),
    (
        "ECDHE-RSA-CHACHA20-POLY1305",
        "TLS_ECDHE_RSA_WITH_CHACHA20_POLY1305_SHA256",
    ),
];

#[derive(Clone, Debug, PartialEq, Eq)]
enum CipherRule {
    HighEcdsa,
    Named(String),
}

/// Parsed `GRPC_SSL_CIPHER_SUITES`-style selection: `HIGH+ECDSA` and/or a colon-separated list of
/// suite names (IANA or OpenSSL spelling).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CipherSuitePolicy {
    rules: Vec<CipherRule>,
}

impl Default for CipherSuitePolicy {
    fn default() -> Self {
        Self {
            rules: vec![CipherRule::HighEcdsa],
        }
    }
}

impl CipherSuitePolicy {
    /// Parse a selection string.
    ///
    /// # Errors
    /// Returns [`ConfigError::UnsupportedCipherSuites`] when the string is empty or names a suite
    /// the TLS provider does not implement.
    pub fn parse(selection: &str) -> Result<Self, ConfigError> {
        let known: Vec<String> = provider_suites().iter().map(suite_name).collect();
        let mut rules = Vec::new();
        for token in selection.split(':').map(str::trim).filter(|t| !t.is_empty()) {
            if token.eq_ignore_ascii_case(HIGH_ECDSA) {
                rules.push(CipherRule::HighEcdsa);
                continue;
            }
            let name = SUITE_ALIASES
                .iter()
                .find(|(alias, _)| alias.eq_ignore_ascii_case(token))
                .map_or_else(|| token.to_ascii_uppercase(), |(_, name)| (*name).to_string());
            if !known.contains(&name) {
                return Err(ConfigError::UnsupportedCipherSuites(token.to_string()));
            }
            rules.push(CipherRule::Named(name));
        }
        if rules.is_empty() {
            return Err(ConfigError::UnsupportedCipherSuites(selection.to_string()));
        }
        Ok(Self { rules })
    }

    /// Keep the suites from `available` this policy allows, preserving provider preference order.
    pub fn select(&self, available: &[SupportedCipherSuite]) -> Vec<SupportedCipherSuite> {
        available
            .iter()
            .filter(|suite| self.allows(suite))
            .copied()
            .collect()
    }

    fn allows(&self, suite: &SupportedCipherSuite) -> bool {
        let name = suite_name(suite);
        self.rules.iter().any(|rule| match rule {
            CipherRule::HighEcdsa => {
                matches!(suite, SupportedCipherSuite::Tls13(_)) || name.contains("_ECDHE_ECDSA_")
            }
            CipherRule::Named(wanted) => *wanted == name,
        })
    }
}

fn provider_suites() -> Vec<SupportedCipherSuite> {
    rustls::crypto::aws_lc_rs::default_provider().cipher_suites
}

fn suite_name(suite: &SupportedCipherSuite) -> String {
    format!("{:?}", suite.suite())
}

/// Build the rustls client config: pinned node certificate, filtered cipher suites, no client auth.
///
/// # Errors
/// Returns [`TransportError`] when the policy leaves no usable suite or rustls rejects the
/// protocol/suite combination.
pub fn client_config(
    cert: &TlsCertificate,
    policy: &CipherSuitePolicy,
) -> Result<rustls::ClientConfig, TransportError> {
    let mut provider = rustls::crypto::aws_lc_rs::default_provider();
    provider.cipher_suites = policy.select(&provider.cipher_suites);
    if provider.cipher_suites.is_empty() {
        return Err(TransportError::connection_message(
            "cipher suite policy selects no supported suite",
        ));
    }
    let versions = protocol_versions(&provider);
    debug!(
        suites = provider.cipher_suites.len(),
        versions = versions.len(),
        "building pinned TLS client config"
    );

    let verifier = Arc::new(PinnedCertVerifier {
        pinned: cert.certificates().to_vec(),
        algorithms: provider.signature_verification_algorithms,
    });
    let config = rustls::ClientConfig::builder_with_provider(Arc::new(provider))
        .with_protocol_versions(&versions)
        .map_err(TransportError::Tls)?
        .dangerous()
        .with_custom_certificate_verifier(verifier)
        .with_no_client_auth();
    Ok(config)
}

fn protocol_versions(provider: &CryptoProvider) -> Vec<&'static SupportedProtocolVersion> {
    let mut versions = Vec::new();
    if provider
        .cipher_suites
        .iter()
        .any(|s| matches!(s, SupportedCipherSuite::Tls13(_)))
    {
        versions.push(&rustls::version::TLS13);
    }
    if provider
        .cipher_suites
        .iter()
        .any(|s| matches!(s, SupportedCipherSuite::Tls12(_)))
    {
        versions.push(&rustls::version::TLS12);
    }
    versions
}

/// Accepts exactly the certificates read from the node's `tls.cert`.
#[derive(Debug)]
struct PinnedCertVerifier {
    pinned: Vec<CertificateDer<'static>>,
    algorithms: WebPkiSupportedAlgorithms,
}

impl ServerCertVerifier for PinnedCertVerifier {
    fn verify_server_cert(
        &self,
        end_entity: &CertificateDer<'_>,
        _intermediates: &[CertificateDer<'_>],
        _server_name: &ServerName<'_>,
        _ocsp_response: &[u8],
        _now: UnixTime,
    ) -> Result<ServerCertVerified, rustls::Error> {
        if self
            .pinned
            .iter()
            .any(|cert| cert.as_ref() == end_entity.as_ref())
        {
            Ok(ServerCertVerified::assertion())
        } else {
            Err(rustls::Error::InvalidCertificate(
                CertificateError::ApplicationVerificationFailure,
            ))
        }
    }

    fn verify_tls12_signature(
        &self,
        message: &[u8],
        cert: &CertificateDer<'_>,
        dss: &DigitallySignedStruct,
    ) -> Result<HandshakeSignatureValid, rustls::Error> {
        verify_tls12_signature(message, cert, dss, &self.algorithms)
    }

    fn verify_tls13_signature(
        &self,
        message: &[u8],
        cert: &CertificateDer<'_>,
        dss: &DigitallySignedStruct,
    ) -> Result<HandshakeSignatureValid, rustls::Error> {
        verify_tls13_signature(message, cert, dss, &self.algorithms)
    }

    fn supported_verify_schemes(&self) -> Vec<SignatureScheme> {
        self.algorithms.supported_schemes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustls::{
        pki_types::{PrivateKeyDer, PrivatePkcs8KeyDer},
        ClientConnection, Connection, ServerConnection,
    };

    // Self-signed CA:TRUE certificate shaped like the one LND generates.
    struct NodeCert {
        cert: rcgen::Certificate,
        key: rcgen::KeyPair,
    }

    impl NodeCert {
        fn generate() -> Self {
            let mut params =
                rcgen::CertificateParams::new(vec!["localhost".to_string()]).expect("params");
            params.is_ca = rcgen::IsCa::Ca(rcgen::BasicConstraints::Unconstrained);
            let key = rcgen::KeyPair::generate().expect("key");
            let cert = params.self_signed(&key).expect("cert");
            Self { cert, key }
        }

        fn pinned(&self) -> TlsCertificate {
            TlsCertificate::from_pem(self.cert.pem().as_bytes()).expect("pem")
        }

        fn server_config(&self) -> rustls::ServerConfig {
            let key = PrivateKeyDer::Pkcs8(PrivatePkcs8KeyDer::from(self.key.serialize_der()));
            rustls::ServerConfig::builder_with_provider(Arc::new(
                rustls::crypto::aws_lc_rs::default_provider(),
            ))
            .with_safe_default_protocol_versions()
            .expect("versions")
            .with_no_client_auth()
            .with_single_cert(vec![self.cert.der().clone()], key)
            .expect("server config")
        }
    }

    fn pump(from: &mut Connection, to: &mut Connection) -> Result<(), rustls::Error> {
        let mut buf = Vec::new();
        while from.wants_write() {
            from.write_tls(&mut buf).expect("write tls");
        }
        let mut rd = buf.as_slice();
        while !rd.is_empty() {
            to.read_tls(&mut rd).expect("read tls");
            to.process_new_packets()?;
        }
        Ok(())
    }

    fn handshake(
        client: rustls::ClientConfig,
        server: rustls::ServerConfig,
    ) -> Result<(), rustls::Error> {
        let name = ServerName::try_from("localhost").expect("server name");
        let mut client = Connection::Client(ClientConnection::new(Arc::new(client), name)?);
        let mut server = Connection::Server(ServerConnection::new(Arc::new(server))?);
        for _ in 0..10 {
            if !client.is_handshaking() && !server.is_handshaking() {
                return Ok(());
            }
            pump(&mut client, &mut server)?;
            pump(&mut server, &mut client)?;
        }
        panic!("handshake did not finish");
    }

    fn names(policy: &CipherSuitePolicy) -> Vec<String> {
        policy.select(&provider_suites()).iter().map(suite_name).collect()
    }

    #[test]
    fn high_ecdsa_keeps_tls13_and_ecdsa_only() {
        let selected = names(&CipherSuitePolicy::default());
        assert!(!selected.is_empty());
        assert!(selected.iter().any(|n| n.starts_with("TLS13_")));
        assert!(selected.iter().any(|n| n.contains("_ECDHE_ECDSA_")));
        assert!(!selected.iter().any(|n| n.contains("_ECDHE_RSA_")));
    }

    #[test]
    fn parse_accepts_keyword_and_openssl_names() {
        let policy =
            CipherSuitePolicy::parse("high+ecdsa:ECDHE-RSA-AES128-GCM-SHA256").expect("policy");
        let selected = names(&policy);
        assert!(selected.contains(&"TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256".to_string()));
        assert!(!selected.contains(&"TLS_ECDHE_RSA_WITH_AES_256_GCM_SHA384".to_string()));
    }

    #[test]
    fn parse_single_iana_name_is_exact() {
        let policy = CipherSuitePolicy::parse("TLS13_AES_128_GCM_SHA256").expect("policy");
        assert_eq!(names(&policy), vec!["TLS13_AES_128_GCM_SHA256".to_string()]);
    }

    #[test]
    fn parse_accepts_iana_tls13_names() {
        let policy = CipherSuitePolicy::parse(
            "TLS_AES_128_GCM_SHA256:tls_aes_256_gcm_sha384:TLS_CHACHA20_POLY1305_SHA256",
        )
        .expect("policy");
        let mut selected = names(&policy);
        selected.sort();
        assert_eq!(
            selected,
            vec![
                "TLS13_AES_128_GCM_SHA256".to_string(),
                "TLS13_AES_256_GCM_SHA384".to_string(),
                "TLS13_CHACHA20_POLY1305_SHA256".to_string(),
            ]
        );
    }

    #[test]
    fn parse_rejects_unknown_and_empty() {
        assert!(matches!(
            CipherSuitePolicy::parse("RC4-MD5"),
            Err(ConfigError::UnsupportedCipherSuites(s)) if s == "RC4-MD5"
        ));
        assert!(matches!(
            CipherSuitePolicy::parse(" : "),
            Err(ConfigError::UnsupportedCipherSuites(_))
        ));
    }

    #[test]
    fn pinned_certificate_completes_handshake() {
        let node = NodeCert::generate();
        let client = client_config(&node.pinned(), &CipherSuitePolicy::default()).expect("client");
        handshake(client, node.server_config()).expect("handshake");
    }

    #[test]
    fn pinned_certificate_completes_tls12_handshake() {
        let node = NodeCert::generate();
        let policy = CipherSuitePolicy::parse("ECDHE-ECDSA-AES128-GCM-SHA256").expect("policy");
        let client = client_config(&node.pinned(), &policy).expect("client");
        handshake(client, node.server_config()).expect("handshake");
    }

    #[test]
    fn other_certificate_is_rejected() {
        let node = NodeCert::generate();
        let impostor = NodeCert::generate();
        let client = client_config(&node.pinned(), &CipherSuitePolicy::default()).expect("client");
        let err = handshake(client, impostor.server_config()).unwrap_err();
        assert_eq!(
            err,
            rustls::Error::InvalidCertificate(CertificateError::ApplicationVerificationFailure)
        );
    }

    #[test]
    fn tls12_only_selection_limits_protocol_versions() {
        let policy = CipherSuitePolicy::parse("ECDHE-ECDSA-AES128-GCM-SHA256").expect("policy");
        let mut provider = rustls::crypto::aws_lc_rs::default_provider();
        provider.cipher_suites = policy.select(&provider.cipher_suites);
        let versions = protocol_versions(&provider);
        assert_eq!(versions.len(), 1);
        assert_eq!(versions[0].version, rustls::ProtocolVersion::TLSv1_2);
    }
}
