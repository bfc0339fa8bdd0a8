use std::{borrow::Cow, error::Error};

use async_trait::async_trait;
use tonic::{body::BoxBody, client::GrpcService};

/// Boxed error used as the source of transport and handler failures.
pub type BoxError = Box<dyn Error + Send + Sync>;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("{context}")]
    Connection {
        context: Cow<'static, str>,
        #[source]
        source: Option<BoxError>,
    },
    #[error("TLS configuration failed: {0}")]
    Tls(#[source] rustls::Error),
}

impl TransportError {
    /// Build a connection error with optional context and source.
    pub fn connection<S, E>(context: S, source: E) -> Self
    where
        S: Into<Cow<'static, str>>,
        E: Error + Send + Sync + 'static,
    {
        Self::Connection {
            context: context.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Build a connection error that only has context (no underlying source).
    pub fn connection_message<S>(context: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        Self::Connection {
            context: context.into(),
            source: None,
        }
    }
}

/// A source of gRPC channels to the node plus the metadata every call must carry.
#[async_trait]
pub trait Transport: Send + Sync {
    /// The underlying gRPC service used by tonic clients.
    type Svc: GrpcService<BoxBody> + Clone + Send + Sync + 'static;

    /// Eagerly establish the channel. Transports that connect lazily may keep the default.
    async fn connect(&mut self) -> Result<(), TransportError> {
        Ok(())
    }

    /// Return a tonic-compatible gRPC service bound to the current transport.
    async fn service(&self) -> Result<Self::Svc, TransportError>;

    /// Drop any cached channel; the next call reconnects.
    async fn disconnect(&mut self) -> Result<(), TransportError> {
        Ok(())
    }

    /// Per-request metadata headers (key, value) to attach.
    fn metadata(&self) -> Vec<(String, String)> {
        Vec::new()
    }
}

pub mod direct;
pub mod tls;
