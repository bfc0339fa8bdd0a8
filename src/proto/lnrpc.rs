#[derive(serde::Serialize, serde::Deserialize)]
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct GetInfoRequest {}
#[derive(serde::Serialize, serde::Deserialize)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetInfoResponse {
    /// The version of the LND software that the node is running.
    #[prost(string, tag = "14")]
    pub version: ::prost::alloc::string::String,
    /// The SHA1 commit hash that the daemon is compiled with.
    #[prost(string, tag = "20")]
    pub commit_hash: ::prost::alloc::string::String,
    /// The identity pubkey of the current node.
    #[prost(string, tag = "1")]
    pub identity_pubkey: ::prost::alloc::string::String,
    /// If applicable, the alias of the current node, e.g. "bob"
    #[prost(string, tag = "2")]
    pub alias: ::prost::alloc::string::String,
    /// The color of the current node in hex code format
    #[prost(string, tag = "17")]
    pub color: ::prost::alloc::string::String,
    /// Number of pending channels
    #[prost(uint32, tag = "3")]
    pub num_pending_channels: u32,
    /// Number of active channels
    #[prost(uint32, tag = "4")]
    pub num_active_channels: u32,
    /// Number of inactive channels
    #[prost(uint32, tag = "15")]
    pub num_inactive_channels: u32,
    /// Number of peers
    #[prost(uint32, tag = "5")]
    pub num_peers: u32,
    /// The node's current view of the height of the best block
    #[prost(uint32, tag = "6")]
    pub block_height: u32,
    /// The node's current view of the hash of the best block
    #[prost(string, tag = "8")]
    pub block_hash: ::prost::alloc::string::String,
    /// Timestamp of the block best known to the wallet
    #[prost(int64, tag = "13")]
    pub best_header_timestamp: i64,
    /// Whether the wallet's view is synced to the main chain
    #[prost(bool, tag = "9")]
    pub synced_to_chain: bool,
    /// Whether we consider ourselves synced with the public channel graph.
    #[prost(bool, tag = "18")]
    pub synced_to_graph: bool,
    /// A list of active chains the node is connected to
    #[prost(message, repeated, tag = "16")]
    pub chains: ::prost::alloc::vec::Vec<Chain>,
    /// The URIs of the current node.
    #[prost(string, repeated, tag = "12")]
    pub uris: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    /// Features that our node has advertised in our init message, node
    /// announcements and invoices.
    #[prost(map = "uint32, message", tag = "19")]
    pub features: ::std::collections::HashMap<u32, Feature>,
    /// Indicates whether the HTLC interceptor API is in always-on mode.
    #[prost(bool, tag = "21")]
    pub require_htlc_interceptor: bool,
    /// Indicates whether final htlc resolutions are stored on disk.
    #[prost(bool, tag = "22")]
    pub store_final_htlc_resolutions: bool,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Chain {
    /// Deprecated. The chain is now always assumed to be bitcoin.
    #[prost(string, tag = "1")]
    pub chain: ::prost::alloc::string::String,
    /// The network the node is on (e.g. regtest, testnet, mainnet)
    #[prost(string, tag = "2")]
    pub network: ::prost::alloc::string::String,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Feature {
    #[prost(string, tag = "2")]
    pub name: ::prost::alloc::string::String,
    #[prost(bool, tag = "3")]
    pub is_required: bool,
    #[prost(bool, tag = "4")]
    pub is_known: bool,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct NodeInfoRequest {
    /// The 33-byte hex-encoded compressed public of the target node
    #[prost(string, tag = "1")]
    pub pub_key: ::prost::alloc::string::String,
    /// If true, will include all known channels associated with the node.
    #[prost(bool, tag = "2")]
    pub include_channels: bool,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct NodeInfo {
    /// An individual vertex/node within the channel graph.
    #[prost(message, optional, tag = "1")]
    pub node: ::core::option::Option<LightningNode>,
    /// The total number of channels for the node.
    #[prost(uint32, tag = "2")]
    pub num_channels: u32,
    /// The sum of all channels capacity for the node, denominated in satoshis.
    #[prost(int64, tag = "3")]
    pub total_capacity: i64,
    /// A list of all public channels for the node.
    #[prost(message, repeated, tag = "4")]
    pub channels: ::prost::alloc::vec::Vec<ChannelEdge>,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LightningNode {
    #[prost(uint32, tag = "1")]
    pub last_update: u32,
    #[prost(string, tag = "2")]
    pub pub_key: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub alias: ::prost::alloc::string::String,
    #[prost(message, repeated, tag = "4")]
    pub addresses: ::prost::alloc::vec::Vec<NodeAddress>,
    #[prost(string, tag = "5")]
    pub color: ::prost::alloc::string::String,
    #[prost(map = "uint32, message", tag = "6")]
    pub features: ::std::collections::HashMap<u32, Feature>,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct NodeAddress {
    #[prost(string, tag = "1")]
    pub network: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub addr: ::prost::alloc::string::String,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct RoutingPolicy {
    #[prost(uint32, tag = "1")]
    pub time_lock_delta: u32,
    #[prost(int64, tag = "2")]
    pub min_htlc: i64,
    #[prost(int64, tag = "3")]
    pub fee_base_msat: i64,
    #[prost(int64, tag = "4")]
    pub fee_rate_milli_msat: i64,
    #[prost(bool, tag = "5")]
    pub disabled: bool,
    #[prost(uint64, tag = "6")]
    pub max_htlc_msat: u64,
    #[prost(uint32, tag = "7")]
    pub last_update: u32,
}
/// A fully authenticated channel along with all its unique attributes.
#[derive(serde::Serialize, serde::Deserialize)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ChannelEdge {
    /// The unique channel ID for the channel.
    #[prost(uint64, tag = "1")]
    pub channel_id: u64,
    #[prost(string, tag = "2")]
    pub chan_point: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub node1_pub: ::prost::alloc::string::String,
    #[prost(string, tag = "5")]
    pub node2_pub: ::prost::alloc::string::String,
    #[prost(int64, tag = "6")]
    pub capacity: i64,
    #[prost(message, optional, tag = "7")]
    pub node1_policy: ::core::option::Option<RoutingPolicy>,
    #[prost(message, optional, tag = "8")]
    pub node2_policy: ::core::option::Option<RoutingPolicy>,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct HopHint {
    /// The public key of the node at the start of the channel.
    #[prost(string, tag = "1")]
    pub node_id: ::prost::alloc::string::String,
    /// The unique identifier of the channel.
    #[prost(uint64, tag = "2")]
    pub chan_id: u64,
    /// The base fee of the channel denominated in millisatoshis.
    #[prost(uint32, tag = "3")]
    pub fee_base_msat: u32,
    /// The fee rate of the channel for sending one satoshi across it denominated
    /// in millionths of a satoshi.
    #[prost(uint32, tag = "4")]
    pub fee_proportional_millionths: u32,
    /// The time-lock delta of the channel.
    #[prost(uint32, tag = "5")]
    pub cltv_expiry_delta: u32,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RouteHint {
    /// A list of hop hints that when chained together can assist in reaching a
    /// specific destination.
    #[prost(message, repeated, tag = "1")]
    pub hop_hints: ::prost::alloc::vec::Vec<HopHint>,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Invoice {
    /// An optional memo to attach along with the invoice. Used for record keeping
    /// purposes for the invoice's creator, and will also be set in the description
    /// field of the encoded payment request if the description_hash field is not
    /// being used.
    #[prost(string, tag = "1")]
    pub memo: ::prost::alloc::string::String,
    /// The hex-encoded preimage (32 byte) which will allow settling an incoming
    /// HTLC payable to this preimage.
    #[prost(bytes = "vec", tag = "3")]
    pub r_preimage: ::prost::alloc::vec::Vec<u8>,
    /// The hash of the preimage.
    #[prost(bytes = "vec", tag = "4")]
    pub r_hash: ::prost::alloc::vec::Vec<u8>,
    /// The value of this invoice in satoshis
    ///
    /// The fields value and value_msat are mutually exclusive.
    #[prost(int64, tag = "5")]
    pub value: i64,
    /// The value of this invoice in millisatoshis
    ///
    /// The fields value and value_msat are mutually exclusive.
    #[prost(int64, tag = "23")]
    pub value_msat: i64,
    /// When this invoice was created.
    #[prost(int64, tag = "7")]
    pub creation_date: i64,
    /// When this invoice was settled.
    #[prost(int64, tag = "8")]
    pub settle_date: i64,
    /// A bare-bones invoice for a payment within the Lightning Network. With the
    /// details of the invoice, the sender has all the data necessary to send a
    /// payment to the recipient.
    #[prost(string, tag = "9")]
    pub payment_request: ::prost::alloc::string::String,
    /// Hash (SHA-256) of a description of the payment. Used if the description of
    /// payment (memo) is too long to naturally fit within the description field
    /// of an encoded payment request.
    #[prost(bytes = "vec", tag = "10")]
    pub description_hash: ::prost::alloc::vec::Vec<u8>,
    /// Payment request expiry time in seconds. Default is 86400 (24 hours).
    #[prost(int64, tag = "11")]
    pub expiry: i64,
    /// Fallback on-chain address.
    #[prost(string, tag = "12")]
    pub fallback_addr: ::prost::alloc::string::String,
    /// Delta to use for the time-lock of the CLTV extended to the final hop.
    #[prost(uint64, tag = "13")]
    pub cltv_expiry: u64,
    /// Route hints that can each be individually used to assist in reaching the
    /// invoice's destination.
    #[prost(message, repeated, tag = "14")]
    pub route_hints: ::prost::alloc::vec::Vec<RouteHint>,
    /// Whether this invoice should include routing hints for private channels.
    #[prost(bool, tag = "15")]
    pub private: bool,
    /// The "add" index of this invoice. Each newly created invoice will increment
    /// this index making it monotonically increasing. Callers to the
    /// SubscribeInvoices call can use this to instantly get notified of all added
    /// invoices with an add_index greater than this one.
    #[prost(uint64, tag = "16")]
    pub add_index: u64,
    /// The "settle" index of this invoice. Each newly settled invoice will
    /// increment this index making it monotonically increasing. Callers to the
    /// SubscribeInvoices call can use this to instantly get notified of all
    /// settled invoices with an settle_index greater than this one.
    #[prost(uint64, tag = "17")]
    pub settle_index: u64,
    /// The amount that was accepted for this invoice, in satoshis. This will ONLY
    /// be set if this invoice has been settled.
    #[prost(int64, tag = "19")]
    pub amt_paid_sat: i64,
    /// The amount that was accepted for this invoice, in millisatoshis. This will
    /// ONLY be set if this invoice has been settled.
    #[prost(int64, tag = "20")]
    pub amt_paid_msat: i64,
    /// The state the invoice is in.
    #[prost(enumeration = "invoice::InvoiceState", tag = "21")]
    pub state: i32,
    /// List of HTLCs paying to this invoice \[EXPERIMENTAL\].
    #[prost(message, repeated, tag = "22")]
    pub htlcs: ::prost::alloc::vec::Vec<InvoiceHtlc>,
    /// List of features advertised on the invoice.
    #[prost(map = "uint32, message", tag = "24")]
    pub features: ::std::collections::HashMap<u32, Feature>,
    /// Indicates if this invoice was a spontaneous payment that arrived via keysend
    /// \[EXPERIMENTAL\].
    #[prost(bool, tag = "25")]
    pub is_keysend: bool,
    /// The payment address of this invoice.
    #[prost(bytes = "vec", tag = "26")]
    pub payment_addr: ::prost::alloc::vec::Vec<u8>,
    /// Signals whether or not this is an AMP invoice.
    #[prost(bool, tag = "27")]
    pub is_amp: bool,
}
/// Nested message and enum types in `Invoice`.
pub mod invoice {
    #[derive(serde::Serialize, serde::Deserialize)]
    #[derive(
        Clone,
        Copy,
        Debug,
        PartialEq,
        Eq,
        Hash,
        PartialOrd,
        Ord,
        ::prost::Enumeration
    )]
    #[repr(i32)]
    pub enum InvoiceState {
        Open = 0,
        Settled = 1,
        Canceled = 2,
        Accepted = 3,
    }
    impl InvoiceState {
        /// String value of the enum field names used in the ProtoBuf definition.
        ///
        /// The values are not transformed in any way and thus are considered stable
        /// (if the ProtoBuf definition does not change) and safe for programmatic use.
        pub fn as_str_name(&self) -> &'static str {
            match self {
                Self::Open => "OPEN",
                Self::Settled => "SETTLED",
                Self::Canceled => "CANCELED",
                Self::Accepted => "ACCEPTED",
            }
        }
        /// Creates an enum from field names used in the ProtoBuf definition.
        pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
            match value {
                "OPEN" => Some(Self::Open),
                "SETTLED" => Some(Self::Settled),
                "CANCELED" => Some(Self::Canceled),
                "ACCEPTED" => Some(Self::Accepted),
                _ => None,
            }
        }
    }
}
/// Details of an HTLC that paid to an invoice
#[derive(serde::Serialize, serde::Deserialize)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct InvoiceHtlc {
    /// Short channel id over which the htlc was received.
    #[prost(uint64, tag = "1")]
    pub chan_id: u64,
    /// Index identifying the htlc on the channel.
    #[prost(uint64, tag = "2")]
    pub htlc_index: u64,
    /// The amount of the htlc in msat.
    #[prost(uint64, tag = "3")]
    pub amt_msat: u64,
    /// Block height at which this htlc was accepted.
    #[prost(int32, tag = "4")]
    pub accept_height: i32,
    /// Time at which this htlc was accepted.
    #[prost(int64, tag = "5")]
    pub accept_time: i64,
    /// Time at which this htlc was settled or canceled.
    #[prost(int64, tag = "6")]
    pub resolve_time: i64,
    /// Block height at which this htlc expires.
    #[prost(int32, tag = "7")]
    pub expiry_height: i32,
    /// Current state the htlc is in.
    #[prost(enumeration = "InvoiceHtlcState", tag = "8")]
    pub state: i32,
    /// Custom tlv records.
    #[prost(map = "uint64, bytes", tag = "9")]
    pub custom_records: ::std::collections::HashMap<u64, ::prost::alloc::vec::Vec<u8>>,
    /// The total amount of the mpp payment in msat.
    #[prost(uint64, tag = "10")]
    pub mpp_total_amt_msat: u64,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AddInvoiceResponse {
    #[prost(bytes = "vec", tag = "1")]
    pub r_hash: ::prost::alloc::vec::Vec<u8>,
    /// A bare-bones invoice for a payment within the Lightning Network. With the
    /// details of the invoice, the sender has all the data necessary to send a
    /// payment to the recipient.
    #[prost(string, tag = "2")]
    pub payment_request: ::prost::alloc::string::String,
    /// The "add" index of this invoice. Each newly created invoice will increment
    /// this index making it monotonically increasing. Callers to the
    /// SubscribeInvoices call can use this to instantly get notified of all added
    /// invoices with an add_index greater than this one.
    #[prost(uint64, tag = "16")]
    pub add_index: u64,
    /// The payment address of the generated invoice.
    #[prost(bytes = "vec", tag = "17")]
    pub payment_addr: ::prost::alloc::vec::Vec<u8>,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct ListInvoiceRequest {
    /// If set, only invoices that are not settled and not canceled will be returned
    /// in the response.
    #[prost(bool, tag = "1")]
    pub pending_only: bool,
    /// The index of an invoice that will be used as either the start or end of a
    /// query to determine which invoices should be returned in the response.
    #[prost(uint64, tag = "4")]
    pub index_offset: u64,
    /// The max number of invoices to return in the response to this query.
    #[prost(uint64, tag = "5")]
    pub num_max_invoices: u64,
    /// If set, the invoices returned will result from seeking backwards from the
    /// specified index offset. This can be used to paginate backwards.
    #[prost(bool, tag = "6")]
    pub reversed: bool,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListInvoiceResponse {
    /// A list of invoices from the time slice of the time series specified in the
    /// request.
    #[prost(message, repeated, tag = "1")]
    pub invoices: ::prost::alloc::vec::Vec<Invoice>,
    /// The index of the last item in the set of returned invoices. This can be used
    /// to seek further, pagination style.
    #[prost(uint64, tag = "2")]
    pub last_index_offset: u64,
    /// The index of the last item in the set of returned invoices. This can be used
    /// to seek backwards, pagination style.
    #[prost(uint64, tag = "3")]
    pub first_index_offset: u64,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct InvoiceSubscription {
    /// If specified (non-zero), then we'll first start by sending out
    /// notifications for all added indexes with an add_index greater than this
    /// value. This allows callers to catch up on any events they missed while they
    /// weren't connected to the streaming RPC.
    #[prost(uint64, tag = "1")]
    pub add_index: u64,
    /// If specified (non-zero), then we'll first start by sending out
    /// notifications for all settled indexes with an settle_index greater than
    /// this value. This allows callers to catch up on any events they missed while
    /// they weren't connected to the streaming RPC.
    #[prost(uint64, tag = "2")]
    pub settle_index: u64,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PayReqString {
    /// The payment request string to be decoded
    #[prost(string, tag = "1")]
    pub pay_req: ::prost::alloc::string::String,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PayReq {
    #[prost(string, tag = "1")]
    pub destination: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub payment_hash: ::prost::alloc::string::String,
    #[prost(int64, tag = "3")]
    pub num_satoshis: i64,
    #[prost(int64, tag = "4")]
    pub timestamp: i64,
    #[prost(int64, tag = "5")]
    pub expiry: i64,
    #[prost(string, tag = "6")]
    pub description: ::prost::alloc::string::String,
    #[prost(string, tag = "7")]
    pub description_hash: ::prost::alloc::string::String,
    #[prost(string, tag = "8")]
    pub fallback_addr: ::prost::alloc::string::String,
    #[prost(int64, tag = "9")]
    pub cltv_expiry: i64,
    #[prost(message, repeated, tag = "10")]
    pub route_hints: ::prost::alloc::vec::Vec<RouteHint>,
    #[prost(bytes = "vec", tag = "11")]
    pub payment_addr: ::prost::alloc::vec::Vec<u8>,
    #[prost(int64, tag = "12")]
    pub num_msat: i64,
    #[prost(map = "uint32, message", tag = "13")]
    pub features: ::std::collections::HashMap<u32, Feature>,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum InvoiceHtlcState {
    Accepted = 0,
    Settled = 1,
    Canceled = 2,
}
impl InvoiceHtlcState {
    /// String value of the enum field names used in the ProtoBuf definition.
    ///
    /// The values are not transformed in any way and thus are considered stable
    /// (if the ProtoBuf definition does not change) and safe for programmatic use.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            Self::Accepted => "ACCEPTED",
            Self::Settled => "SETTLED",
            Self::Canceled => "CANCELED",
        }
    }
    /// Creates an enum from field names used in the ProtoBuf definition.
    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "ACCEPTED" => Some(Self::Accepted),
            "SETTLED" => Some(Self::Settled),
            "CANCELED" => Some(Self::Canceled),
            _ => None,
        }
    }
}
/// Generated client implementations.
pub mod lightning_client {
    #![allow(
        unused_variables,
        dead_code,
        missing_docs,
        clippy::wildcard_imports,
        clippy::let_unit_value,
    )]
    use tonic::codegen::*;
    use tonic::codegen::http::Uri;
    /// Lightning is the main RPC server of the daemon.
    #[derive(Debug, Clone)]
    pub struct LightningClient<T> {
        inner: tonic::client::Grpc<T>,
    }
    impl<T> LightningClient<T>
    where
        T: tonic::client::GrpcService<tonic::body::BoxBody>,
        T::Error: Into<StdError>,
        T::ResponseBody: Body<Data = Bytes> + std::marker::Send + 'static,
        <T::ResponseBody as Body>::Error: Into<StdError> + std::marker::Send,
    {
        pub fn new(inner: T) -> Self {
            let inner = tonic::client::Grpc::new(inner);
            Self { inner }
        }
        pub fn with_origin(inner: T, origin: Uri) -> Self {
            let inner = tonic::client::Grpc::with_origin(inner, origin);
            Self { inner }
        }
        /// Limits the maximum size of a decoded message.
        ///
        /// Default: `4MB`
        #[must_use]
        pub fn max_decoding_message_size(mut self, limit: usize) -> Self {
            self.inner = self.inner.max_decoding_message_size(limit);
            self
        }
        /// GetInfo returns general information concerning the lightning node including
        /// it's identity pubkey, alias, the chains it is connected to, and information
        /// concerning the number of open+pending channels.
        pub async fn get_info(
            &mut self,
            request: impl tonic::IntoRequest<super::GetInfoRequest>,
        ) -> std::result::Result<
            tonic::Response<super::GetInfoResponse>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/lnrpc.Lightning/GetInfo",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("lnrpc.Lightning", "GetInfo"));
            self.inner.unary(req, path, codec).await
        }
        /// GetNodeInfo returns the latest advertised, aggregated, and authenticated
        /// channel information for the specified node identified by its public key.
        pub async fn get_node_info(
            &mut self,
            request: impl tonic::IntoRequest<super::NodeInfoRequest>,
        ) -> std::result::Result<tonic::Response<super::NodeInfo>, tonic::Status> {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/lnrpc.Lightning/GetNodeInfo",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("lnrpc.Lightning", "GetNodeInfo"));
            self.inner.unary(req, path, codec).await
        }
        /// AddInvoice attempts to add a new invoice to the invoice database. Any
        /// duplicated invoices are rejected, therefore all invoices *must* have a
        /// unique payment preimage.
        pub async fn add_invoice(
            &mut self,
            request: impl tonic::IntoRequest<super::Invoice>,
        ) -> std::result::Result<
            tonic::Response<super::AddInvoiceResponse>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/lnrpc.Lightning/AddInvoice",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("lnrpc.Lightning", "AddInvoice"));
            self.inner.unary(req, path, codec).await
        }
        /// ListInvoices returns a list of all the invoices currently stored within the
        /// database. Any active debug invoices are ignored. It has full support for
        /// paginated responses, allowing users to query for specific invoices through
        /// their add_index. This can be done by using either the first_index_offset or
        /// last_index_offset fields included in the response as the index_offset of the
        /// next request. By default, the first 100 invoices created will be returned.
        /// Backwards pagination is also supported through the Reversed flag.
        pub async fn list_invoices(
            &mut self,
            request: impl tonic::IntoRequest<super::ListInvoiceRequest>,
        ) -> std::result::Result<
            tonic::Response<super::ListInvoiceResponse>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/lnrpc.Lightning/ListInvoices",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("lnrpc.Lightning", "ListInvoices"));
            self.inner.unary(req, path, codec).await
        }
        /// SubscribeInvoices returns a uni-directional stream (server -> client) for
        /// notifying the client of newly added/settled invoices. The caller can
        /// optionally specify the add_index and/or the settle_index. If the add_index
        /// is specified, then we'll first start by sending add invoice events for all
        /// invoices with an add_index greater than the specified value. If the
        /// settle_index is specified, then next, we'll send out all settle events for
        /// invoices with a settle_index greater than the specified value. One or both
        /// of these fields can be set. If no fields are set, then we'll only send out
        /// the latest add/settle events.
        pub async fn subscribe_invoices(
            &mut self,
            request: impl tonic::IntoRequest<super::InvoiceSubscription>,
        ) -> std::result::Result<
            tonic::Response<tonic::codec::Streaming<super::Invoice>>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/lnrpc.Lightning/SubscribeInvoices",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("lnrpc.Lightning", "SubscribeInvoices"));
            self.inner.server_streaming(req, path, codec).await
        }
        /// DecodePayReq takes an encoded payment request string and attempts to decode
        /// it, returning a full description of the conditions encoded within the
        /// payment request.
        pub async fn decode_pay_req(
            &mut self,
            request: impl tonic::IntoRequest<super::PayReqString>,
        ) -> std::result::Result<tonic::Response<super::PayReq>, tonic::Status> {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/lnrpc.Lightning/DecodePayReq",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("lnrpc.Lightning", "DecodePayReq"));
            self.inner.unary(req, path, codec).await
        }
    }
}
