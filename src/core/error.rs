use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur while constructing prices or invoice requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum KwotaError {
    /// A VAT rate that cannot be used to derive a net amount (zero).
    #[error("invalid VAT rate {0}: cannot derive net amount from gross")]
    InvalidVatRate(Decimal),

    /// An amount left the representable `Decimal` range.
    #[error("arithmetic overflow: {0}")]
    Overflow(String),

    /// Builder encountered invalid or missing configuration.
    #[error("builder error: {0}")]
    Builder(String),
}
