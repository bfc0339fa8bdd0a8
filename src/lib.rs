#![deny(unsafe_code)]

//! Typed gRPC gateway to an LND node.
//!
//! Wraps a handful of `lnrpc.Lightning` calls (node info, peer info, invoice creation, listing
//! and subscription, payment request decoding) behind [`Gateway`]. Requests are built from plain
//! arguments or option structs and responses are returned exactly as LND sends them.
//!
//! Every call travels over a TLS channel pinned to the node's `tls.cert` and carries the
//! hex-encoded macaroon as `macaroon` metadata, streaming calls included. The cipher-suite
//! selection follows `GRPC_SSL_CIPHER_SUITES` when set and `HIGH+ECDSA` otherwise.
//!
//! Example
//! ```no_run
//! use lnd_gateway::{config::GatewayConfig, Gateway, SubscriptionOptions};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = GatewayConfig::from_toml_file("lnd-gateway.toml")?;
//! let gateway = Gateway::from_config(&config)?;
//!
//! let mut events = gateway
//!     .subscribe_invoices(SubscriptionOptions::default().add_index(5))
//!     .await?;
//! while let Some(invoice) = events.next().await? {
//!     println!("#{} {:?}", invoice.add_index, invoice.state());
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod credentials;
pub mod options;
pub mod proto;
pub mod subscription;
pub mod transport;

pub use client::{Gateway, GatewayError, MetadataInterceptor, Result};
pub use options::{InvoiceOptions, ListInvoicesOptions, SubscriptionOptions};
pub use proto::lnrpc;
pub use subscription::InvoiceStream;
