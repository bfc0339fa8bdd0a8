use std::{fmt, sync::Arc};

use async_trait::async_trait;
use http::{uri::Scheme, Uri};
use hyper_rustls::HttpsConnectorBuilder;
use tokio::sync::OnceCell;
use tonic::transport::{Channel, Endpoint};
use tower::{service_fn, Service};
use tracing::debug;

use super::{
    tls::{self, CipherSuitePolicy},
    BoxError, Transport, TransportError,
};
use crate::{
    config::GatewayConfig,
    credentials::{Macaroon, NodeCredentials},
    GatewayError,
};

/// Direct TLS gRPC connection to an LND node.
///
/// Credentials are read and the TLS configuration is built in the constructor, so a missing
/// `tls.cert` or macaroon fails before any network activity. The channel itself is opened lazily
/// on the first call and reused until [`Transport::disconnect`].
pub struct DirectGrpc {
    addr: String,
    macaroon: Macaroon,
    tls: Arc<rustls::ClientConfig>,
    channel: OnceCell<Channel>,
}

impl fmt::Debug for DirectGrpc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectGrpc")
            .field("addr", &self.addr)
            .field("macaroon", &self.macaroon)
            .field("connected", &self.channel.initialized())
            .finish_non_exhaustive()
    }
}

impl DirectGrpc {
    /// Build a transport for `addr` (e.g. `https://127.0.0.1:10009`) from loaded credentials.
    ///
    /// # Errors
    /// Returns [`TransportError`] when the TLS client configuration cannot be built.
    pub fn new(
        addr: impl Into<String>,
        credentials: NodeCredentials,
        policy: &CipherSuitePolicy,
    ) -> Result<Self, TransportError> {
        let tls = tls::client_config(&credentials.tls_cert, policy)?;
        Ok(Self {
            addr: addr.into(),
            macaroon: credentials.macaroon,
            tls: Arc::new(tls),
            channel: OnceCell::new(),
        })
    }

    /// Load credentials and resolve the cipher-suite policy for `config`.
    ///
    /// # Errors
    /// Returns [`GatewayError`] for invalid configuration, unreadable credential files, or an
    /// unusable cipher-suite selection.
    pub fn from_config(config: &GatewayConfig) -> Result<Self, GatewayError> {
        config.validate()?;
        let credentials = NodeCredentials::load(config)?;
        let policy = CipherSuitePolicy::parse(&config.cipher_suites())?;
        Ok(Self::new(config.endpoint(), credentials, &policy)?)
    }

    pub fn addr(&self) -> &str {
        &self.addr
    }

    async fn open_channel(&self) -> Result<Channel, TransportError> {
        // tonic only hands plain-http URIs to a custom connector; the connector restores https.
        let original_uri: Uri = self
            .addr
            .parse()
            .map_err(|e| TransportError::connection("invalid endpoint URI", e))?;
        let mut http_parts = original_uri.into_parts();
        http_parts.scheme = Some(Scheme::HTTP);
        let http_uri = Uri::from_parts(http_parts)
            .map_err(|e| TransportError::connection("invalid http URI", e))?;

        let ep = Endpoint::from_shared(http_uri.to_string())
            .map_err(|e| TransportError::connection("invalid gRPC endpoint", e))?;

        let connector = HttpsConnectorBuilder::new()
            .with_tls_config((*self.tls).clone())
            .https_only()
            .enable_http2()
            .build();
        let svc = service_fn(move |uri: Uri| {
            let mut inner = connector.clone();
            async move {
                let mut parts = uri.into_parts();
                parts.scheme = Some(Scheme::HTTPS);
                let https_target_uri =
                    Uri::from_parts(parts).map_err(|e| -> BoxError { BoxError::from(e) })?;
                inner
                    .call(https_target_uri)
                    .await
                    .map_err(|e| -> BoxError { BoxError::from(e) })
            }
        });

        debug!(addr = %self.addr, "connecting to LND");
        ep.connect_with_connector(svc)
            .await
            .map_err(|e| TransportError::connection("direct transport connect failed", e))
    }
}

#[async_trait]
impl Transport for DirectGrpc {
    type Svc = Channel;

    async fn connect(&mut self) -> Result<(), TransportError> {
        self.service().await.map(|_| ())
    }

    async fn service(&self) -> Result<Self::Svc, TransportError> {
        self.channel
            .get_or_try_init(|| self.open_channel())
            .await
            .cloned()
    }

    async fn disconnect(&mut self) -> Result<(), TransportError> {
        if self.channel.take().is_some() {
            debug!(addr = %self.addr, "dropped LND channel");
        }
        Ok(())
    }

    fn metadata(&self) -> Vec<(String, String)> {
        vec![self.macaroon.metadata()]
    }
}
