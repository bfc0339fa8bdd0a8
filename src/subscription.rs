use futures::Stream;
use tokio_util::sync::CancellationToken;
use tonic::codec::Streaming;
use tracing::{debug, trace};

use crate::{proto::lnrpc::Invoice, transport::BoxError, GatewayError, Result};

/// Live `SubscribeInvoices` stream.
///
/// Events come out in the order LND sends them. The stream ends when LND closes it, the
/// transport fails, or it is cancelled through [`cancel`](Self::cancel) or a clone of
/// [`cancellation_token`](Self::cancellation_token). Dropping the stream closes the call.
pub struct InvoiceStream {
    inner: Streaming<Invoice>,
    cancel: CancellationToken,
}

impl InvoiceStream {
    pub(crate) fn new(inner: Streaming<Invoice>) -> Self {
        Self {
            inner,
            cancel: CancellationToken::new(),
        }
    }

    /// Next invoice event, or `None` once the stream has ended or been cancelled.
    ///
    /// # Errors
    /// Returns [`GatewayError::GrpcStatus`] when LND or the transport terminates the call with an
    /// error.
    pub async fn next(&mut self) -> Result<Option<Invoice>> {
        if self.cancel.is_cancelled() {
            return Ok(None);
        }
        tokio::select! {
            biased;
            () = self.cancel.cancelled() => {
                debug!("invoice subscription cancelled");
                Ok(None)
            }
            msg = self.inner.message() => {
                let msg = msg?;
                match &msg {
                    Some(invoice) => trace!(
                        add_index = invoice.add_index,
                        settle_index = invoice.settle_index,
                        state = invoice.state,
                        "invoice event"
                    ),
                    None => debug!("invoice subscription closed by node"),
                }
                Ok(msg)
            }
        }
    }

    /// Stop the stream; pending and later [`next`](Self::next) calls return `None`.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Token that cancels this stream from another task.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Feed every event to `handler` in arrival order until the stream ends.
    ///
    /// A handler error stops consumption, closes the stream and is returned as
    /// [`GatewayError::Handler`].
    ///
    /// # Errors
    /// Returns the handler's error or the stream's terminating status.
    pub async fn for_each<F, E>(mut self, mut handler: F) -> Result<()>
    where
        F: FnMut(Invoice) -> std::result::Result<(), E>,
        E: Into<BoxError>,
    {
        while let Some(invoice) = self.next().await? {
            if let Err(e) = handler(invoice) {
                let err: BoxError = e.into();
                debug!(error = %err, "invoice handler failed; closing subscription");
                return Err(GatewayError::Handler(err));
            }
        }
        Ok(())
    }

    /// Adapt into a [`futures::Stream`]. The stream ends after the first error.
    pub fn into_stream(self) -> impl Stream<Item = Result<Invoice>> + Send + 'static {
        futures::stream::unfold(Some(self), |state| async move {
            let mut stream = state?;
            match stream.next().await {
                Ok(Some(invoice)) => Some((Ok(invoice), Some(stream))),
                Ok(None) => None,
                Err(e) => Some((Err(e), None)),
            }
        })
    }
}

impl std::fmt::Debug for InvoiceStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InvoiceStream")
            .field("cancelled", &self.cancel.is_cancelled())
            .finish_non_exhaustive()
    }
}
