//! Explicit per-call option structs. Every field has a documented default; `Default` yields the
//! request LND receives when the caller sets nothing.

use crate::proto::lnrpc;

/// Page size used by [`ListInvoicesOptions::default`].
pub const DEFAULT_NUM_MAX_INVOICES: u64 = 100;

/// Options for [`crate::Gateway::create_invoice`].
///
/// ```
/// use lnd_gateway::InvoiceOptions;
///
/// let req = InvoiceOptions::default().to_request();
/// assert_eq!(req.value, 0); // open-amount invoice
/// assert!(req.memo.is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InvoiceOptions {
    /// Amount in satoshis. `0` (default) requests an open-amount invoice.
    pub value: i64,
    /// Expiry in seconds. `0` (default) leaves LND's own default in place.
    pub expiry: i64,
    /// Memo placed in the payment request description. Empty by default.
    pub memo: String,
    /// Include route hints for private channels. `false` by default.
    pub private: bool,
}

impl InvoiceOptions {
    #[must_use]
    pub fn value(mut self, sats: i64) -> Self {
        self.value = sats;
        self
    }

    #[must_use]
    pub fn expiry(mut self, secs: i64) -> Self {
        self.expiry = secs;
        self
    }

    #[must_use]
    pub fn memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = memo.into();
        self
    }

    #[must_use]
    pub fn private(mut self, private: bool) -> Self {
        self.private = private;
        self
    }

    pub fn to_request(&self) -> lnrpc::Invoice {
        lnrpc::Invoice {
            memo: self.memo.clone(),
            value: self.value,
            expiry: self.expiry,
            private: self.private,
            ..Default::default()
        }
    }
}

/// Options for [`crate::Gateway::list_invoices`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListInvoicesOptions {
    /// Maximum invoices per page. Default [`DEFAULT_NUM_MAX_INVOICES`].
    pub num_max: u64,
    /// Add index to seek from. Default `0`.
    pub index_offset: u64,
    /// Only return invoices that are neither settled nor canceled. Default `false`.
    pub pending_only: bool,
    /// Seek backwards from `index_offset`. Default `false`.
    pub reversed: bool,
}

impl Default for ListInvoicesOptions {
    fn default() -> Self {
        Self {
            num_max: DEFAULT_NUM_MAX_INVOICES,
            index_offset: 0,
            pending_only: false,
            reversed: false,
        }
    }
}

impl ListInvoicesOptions {
    #[must_use]
    pub fn num_max(mut self, num_max: u64) -> Self {
        self.num_max = num_max;
        self
    }

    #[must_use]
    pub fn index_offset(mut self, index_offset: u64) -> Self {
        self.index_offset = index_offset;
        self
    }

    #[must_use]
    pub fn pending_only(mut self, pending_only: bool) -> Self {
        self.pending_only = pending_only;
        self
    }

    #[must_use]
    pub fn reversed(mut self, reversed: bool) -> Self {
        self.reversed = reversed;
        self
    }

    pub fn to_request(&self) -> lnrpc::ListInvoiceRequest {
        lnrpc::ListInvoiceRequest {
            pending_only: self.pending_only,
            index_offset: self.index_offset,
            num_max_invoices: self.num_max,
            reversed: self.reversed,
        }
    }

    /// Options for the page following `page` in the same direction, or `None` once a page comes
    /// back empty.
    ///
    /// ```
    /// use lnd_gateway::{lnrpc, ListInvoicesOptions};
    ///
    /// let page = lnrpc::ListInvoiceResponse {
    ///     invoices: vec![lnrpc::Invoice::default()],
    ///     first_index_offset: 11,
    ///     last_index_offset: 20,
    /// };
    /// let next = ListInvoicesOptions::default().next_page(&page).unwrap();
    /// assert_eq!(next.index_offset, 20);
    /// ```
    pub fn next_page(&self, page: &lnrpc::ListInvoiceResponse) -> Option<Self> {
        if page.invoices.is_empty() {
            return None;
        }
        let index_offset = if self.reversed {
            page.first_index_offset
        } else {
            page.last_index_offset
        };
        Some(Self {
            index_offset,
            ..*self
        })
    }
}

/// Options for [`crate::Gateway::subscribe_invoices`].
///
/// With both indices at `0` (default) only live add/settle events are delivered. A non-zero
/// index makes LND first replay the events past it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SubscriptionOptions {
    pub add_index: u64,
    pub settle_index: u64,
}

impl SubscriptionOptions {
    #[must_use]
    pub fn add_index(mut self, index: u64) -> Self {
        self.add_index = index;
        self
    }

    #[must_use]
    pub fn settle_index(mut self, index: u64) -> Self {
        self.settle_index = index;
        self
    }

    /// `true` when no replay is requested.
    pub fn is_live_only(&self) -> bool {
        self.add_index == 0 && self.settle_index == 0
    }

    pub fn to_request(&self) -> lnrpc::InvoiceSubscription {
        lnrpc::InvoiceSubscription {
            add_index: self.add_index,
            settle_index: self.settle_index,
        }
    }
}
