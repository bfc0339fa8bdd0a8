use crate::{
    config::{ConfigError, GatewayConfig},
    credentials::CredentialError,
    options::{InvoiceOptions, ListInvoicesOptions, SubscriptionOptions},
    proto::lnrpc::{self, lightning_client::LightningClient},
    subscription::InvoiceStream,
    transport::{direct::DirectGrpc, BoxError, Transport, TransportError},
};
use thiserror::Error;
use tonic::{
    body::BoxBody, service::interceptor::InterceptedService, service::Interceptor as TonicInterceptor,
    Status,
};
use tracing::debug;

/// Library-level error type surfaced by [`Gateway`].
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Credential(#[from] CredentialError),
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error(transparent)]
    GrpcStatus(#[from] Box<Status>),
    #[error("invoice handler failed: {0}")]
    Handler(#[source] BoxError),
}

impl From<Status> for GatewayError {
    fn from(status: Status) -> Self {
        Self::GrpcStatus(Box::new(status))
    }
}

impl GatewayError {
    /// The gRPC status returned by LND, if this error came from the node.
    pub fn status(&self) -> Option<&Status> {
        match self {
            Self::GrpcStatus(status) => Some(status.as_ref()),
            _ => None,
        }
    }
}

/// Result alias that defaults to [`GatewayError`].
pub type Result<T, E = GatewayError> = std::result::Result<T, E>;

// Intercepted service over the transport-provided gRPC service.
type GatewayService<T> = InterceptedService<<T as Transport>::Svc, MetadataInterceptor>;

/// Typed wrappers over the `lnrpc.Lightning` calls this crate exposes.
///
/// Request messages are built from the caller's arguments and responses are returned as LND sent
/// them. Nothing is retried; errors propagate unchanged.
///
/// ```no_run
/// use lnd_gateway::{config::GatewayConfig, Gateway, InvoiceOptions};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = GatewayConfig::new(
///     "127.0.0.1",
///     10009,
///     "/root/.lnd/data/chain/bitcoin/regtest/admin.macaroon",
///     "/root/.lnd/tls.cert",
/// );
/// let gateway = Gateway::from_config(&config)?;
/// let info = gateway.get_node_info().await?;
/// println!("{} ({})", info.alias, info.identity_pubkey);
/// let invoice = gateway
///     .create_invoice(InvoiceOptions::default().value(1_000).memo("coffee"))
///     .await?;
/// println!("{}", invoice.payment_request);
/// # Ok(())
/// # }
/// ```
pub struct Gateway<T: Transport> {
    transport: T,
}

impl Gateway<DirectGrpc> {
    /// Build a gateway over a direct TLS channel described by `config`.
    ///
    /// Credential files are read here; no connection is attempted until the first call.
    ///
    /// # Errors
    /// Returns [`GatewayError`] for invalid configuration or unreadable credentials.
    pub fn from_config(config: &GatewayConfig) -> Result<Self> {
        Ok(Self::new(DirectGrpc::from_config(config)?))
    }
}

impl<T: Transport> Gateway<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Establish the channel now instead of on the first call.
    ///
    /// # Errors
    /// Returns [`GatewayError`] when the transport connection cannot be established.
    pub async fn connect(&mut self) -> Result<()> {
        self.transport.connect().await.map_err(GatewayError::from)
    }

    /// Drop the channel; later calls reconnect.
    ///
    /// # Errors
    /// Returns [`GatewayError`] when the transport reports a disconnect failure.
    pub async fn disconnect(&mut self) -> Result<()> {
        self.transport.disconnect().await.map_err(GatewayError::from)
    }
}

impl<T> Gateway<T>
where
    T: Transport,
    T::Svc: tower::Service<http::Request<BoxBody>, Response = http::Response<BoxBody>>,
    <T::Svc as tower::Service<http::Request<BoxBody>>>::Error:
        Into<Box<dyn std::error::Error + Send + Sync>> + Send + Sync,
{
    /// Construct an lnrpc.Lightning client whose every request carries the transport metadata.
    ///
    /// Useful for calls this crate does not wrap.
    ///
    /// # Errors
    /// Returns [`GatewayError`] when the transport channel cannot be created.
    pub async fn lightning_client(&self) -> Result<LightningClient<GatewayService<T>>> {
        let svc = self.transport.service().await.map_err(GatewayError::from)?;
        let interceptor = MetadataInterceptor::new(self.transport.metadata());
        Ok(LightningClient::new(InterceptedService::new(svc, interceptor)))
    }

    /// `GetInfo`: identity, alias, chains and channel counts of the connected node.
    ///
    /// # Errors
    /// Returns [`GatewayError`] when the channel cannot be created or the call fails.
    pub async fn get_node_info(&self) -> Result<lnrpc::GetInfoResponse> {
        let mut client = self.lightning_client().await?;
        debug!("GetInfo");
        let res = client.get_info(lnrpc::GetInfoRequest {}).await?;
        Ok(res.into_inner())
    }

    /// `GetNodeInfo` for `pubkey` (33-byte compressed key, hex), sent exactly as given.
    ///
    /// LND answers `NotFound` for a peer missing from its graph; that status is returned as is.
    ///
    /// # Errors
    /// Returns [`GatewayError`] when the channel cannot be created or the call fails.
    pub async fn get_peer_info(&self, pubkey: &str) -> Result<lnrpc::NodeInfo> {
        self.node_info(pubkey, false).await
    }

    /// Like [`get_peer_info`](Self::get_peer_info), also listing the peer's known channels.
    ///
    /// # Errors
    /// Returns [`GatewayError`] when the channel cannot be created or the call fails.
    pub async fn get_peer_info_with_channels(&self, pubkey: &str) -> Result<lnrpc::NodeInfo> {
        self.node_info(pubkey, true).await
    }

    async fn node_info(&self, pubkey: &str, include_channels: bool) -> Result<lnrpc::NodeInfo> {
        let mut client = self.lightning_client().await?;
        debug!(pubkey, include_channels, "GetNodeInfo");
        let res = client
            .get_node_info(lnrpc::NodeInfoRequest {
                pub_key: pubkey.to_string(),
                include_channels,
            })
            .await?;
        Ok(res.into_inner())
    }

    /// `AddInvoice` built from `options`; a zero value yields an open-amount invoice.
    ///
    /// # Errors
    /// Returns [`GatewayError`] when the channel cannot be created or the call fails.
    pub async fn create_invoice(&self, options: InvoiceOptions) -> Result<lnrpc::AddInvoiceResponse> {
        let mut client = self.lightning_client().await?;
        debug!(value = options.value, expiry = options.expiry, "AddInvoice");
        let res = client.add_invoice(options.to_request()).await?;
        Ok(res.into_inner())
    }

    /// `ListInvoices`: one page plus the first/last index offsets for further paging.
    ///
    /// # Errors
    /// Returns [`GatewayError`] when the channel cannot be created or the call fails.
    pub async fn list_invoices(
        &self,
        options: ListInvoicesOptions,
    ) -> Result<lnrpc::ListInvoiceResponse> {
        let mut client = self.lightning_client().await?;
        debug!(
            num_max = options.num_max,
            index_offset = options.index_offset,
            pending_only = options.pending_only,
            reversed = options.reversed,
            "ListInvoices"
        );
        let res = client.list_invoices(options.to_request()).await?;
        Ok(res.into_inner())
    }

    /// `DecodePayReq` for `pay_req`, sent exactly as given.
    ///
    /// # Errors
    /// Returns [`GatewayError`] when the channel cannot be created or the call fails.
    pub async fn decode_pay_req(&self, pay_req: &str) -> Result<lnrpc::PayReq> {
        let mut client = self.lightning_client().await?;
        debug!("DecodePayReq");
        let res = client
            .decode_pay_req(lnrpc::PayReqString {
                pay_req: pay_req.to_string(),
            })
            .await?;
        Ok(res.into_inner())
    }

    /// Open a `SubscribeInvoices` stream.
    ///
    /// With default options only new add/settle events arrive; a non-zero `add_index` or
    /// `settle_index` makes LND replay the events past that index first.
    ///
    /// # Errors
    /// Returns [`GatewayError`] when the channel cannot be created or LND rejects the call.
    pub async fn subscribe_invoices(&self, options: SubscriptionOptions) -> Result<InvoiceStream> {
        let mut client = self.lightning_client().await?;
        debug!(
            add_index = options.add_index,
            settle_index = options.settle_index,
            live_only = options.is_live_only(),
            "SubscribeInvoices"
        );
        let res = client.subscribe_invoices(options.to_request()).await?;
        Ok(InvoiceStream::new(res.into_inner()))
    }

    /// Subscribe and hand each event to `handler` in arrival order until the stream ends.
    ///
    /// A handler error closes the subscription and is returned as [`GatewayError::Handler`].
    ///
    /// # Errors
    /// Returns [`GatewayError`] when subscribing fails, the stream terminates with an error, or
    /// the handler fails.
    pub async fn subscribe_invoices_with<F, E>(
        &self,
        options: SubscriptionOptions,
        handler: F,
    ) -> Result<()>
    where
        F: FnMut(lnrpc::Invoice) -> std::result::Result<(), E>,
        E: Into<BoxError>,
    {
        self.subscribe_invoices(options).await?.for_each(handler).await
    }
}

/// Copies the transport metadata (the macaroon) onto every outgoing request.
#[derive(Clone, Debug)]
pub struct MetadataInterceptor {
    md: Vec<(String, String)>,
}

impl MetadataInterceptor {
    pub fn new(md: Vec<(String, String)>) -> Self {
        Self { md }
    }
}

impl TonicInterceptor for MetadataInterceptor {
    fn call(&mut self, mut req: tonic::Request<()>) -> Result<tonic::Request<()>, tonic::Status> {
        for (k, v) in &self.md {
            let val = tonic::metadata::MetadataValue::try_from(v.as_str())
                .map_err(|e| tonic::Status::internal(e.to_string()))?;
            let key = tonic::metadata::AsciiMetadataKey::from_bytes(k.as_bytes())
                .map_err(|_| tonic::Status::internal("invalid metadata key"))?;
            req.metadata_mut().insert(key, val);
        }
        Ok(req)
    }
}
