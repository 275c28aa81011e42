//! Boundary to external invoicing services.
//!
//! Integrations with concrete invoicing services implement
//! [`InvoicingProvider`]. Listing invoices is offered by order id and by
//! date range; a service implements whichever its API supports and the
//! other keeps the default [`ProviderError::Unsupported`] answer.
//!
//! # Example
//!
//! ```ignore
//! use kwota::provider::*;
//!
//! let invoices = provider
//!     .fetch_invoices_by_order_id("ORD-1", InvoiceDirection::Sales)
//!     .await?;
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{BillingParty, Invoice, InvoiceRequest};

/// Whether an invoice was issued by us or received from a supplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvoiceDirection {
    /// Issued to customers.
    Sales,
    /// Received from suppliers.
    Purchase,
}

/// Error reported by an invoicing provider.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProviderError {
    /// The requested document or party does not exist.
    #[error("{entity} '{id}' not found")]
    NotFound { entity: &'static str, id: String },

    /// The provider does not offer this operation.
    #[error("operation not supported by provider: {0}")]
    Unsupported(&'static str),

    /// The provider refused the request (validation, permissions).
    #[error("request rejected: {0}")]
    Rejected(String),

    /// Network or protocol failure talking to the provider.
    #[error("transport error: {0}")]
    Transport(String),
}

/// Operations an invoicing service exposes to the billing layer.
#[async_trait::async_trait]
pub trait InvoicingProvider: Send + Sync {
    /// Issue a new invoice.
    async fn create_invoice(&self, request: &InvoiceRequest) -> Result<Invoice, ProviderError>;

    async fn fetch_invoice_by_id(
        &self,
        invoice_id: &str,
        direction: InvoiceDirection,
    ) -> Result<Invoice, ProviderError>;

    /// Invoices issued between `from` and `to`, both inclusive.
    async fn fetch_invoices_by_date_range(
        &self,
        _from: NaiveDate,
        _to: NaiveDate,
        _direction: InvoiceDirection,
    ) -> Result<Vec<Invoice>, ProviderError> {
        Err(ProviderError::Unsupported("fetch_invoices_by_date_range"))
    }

    /// Invoices whose order id field lists `order_id`.
    async fn fetch_invoices_by_order_id(
        &self,
        _order_id: &str,
        _direction: InvoiceDirection,
    ) -> Result<Vec<Invoice>, ProviderError> {
        Err(ProviderError::Unsupported("fetch_invoices_by_order_id"))
    }

    /// Rendered PDF document.
    async fn fetch_invoice_pdf(&self, invoice_id: &str) -> Result<Vec<u8>, ProviderError>;

    async fn fetch_cost_center_by_id(
        &self,
        cost_center_id: &str,
    ) -> Result<BillingParty, ProviderError>;

    async fn fetch_billing_party_by_id(
        &self,
        billing_party_id: &str,
    ) -> Result<BillingParty, ProviderError>;

    async fn fetch_billing_party_by_shortcut(
        &self,
        shortcut: &str,
    ) -> Result<BillingParty, ProviderError>;
}
