//! # kwota
//!
//! Invoicing core for Polish billing integrations: VAT-aware prices,
//! invoice positions, the split payment mechanism (MPP) and the provider
//! boundary that concrete invoicing services implement.
//!
//! All monetary values use [`rust_decimal::Decimal`] — never floating point —
//! rounded half-up to two decimal places.
//!
//! ## Quick Start
//!
//! ```rust
//! use kwota::core::*;
//! use rust_decimal_macros::dec;
//!
//! let unit = Money::from_net(dec!(100));
//! assert_eq!(unit.gross(), dec!(123.00));
//!
//! let line = LineItem::new("1", "Monitor 27\"", 3, unit);
//! assert_eq!(line.total_price().gross(), dec!(369.00));
//!
//! let buyer = BillingParty::company(
//!     "1", "ACME Sp. z o.o.", "ul. Prosta 1", "00-838", "Warszawa", "PL", "5250001009", None,
//! );
//! assert!(!is_split_payment_required(Some(&buyer), line.total_price().gross(), true));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Money, positions, split payment, invoice and request types |
//! | `provider` | `InvoicingProvider` async trait for invoicing services |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "provider")]
pub mod provider;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
