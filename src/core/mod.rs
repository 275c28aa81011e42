//! Prices, invoice positions, split payment and invoice aggregates.
//!
//! This module provides the value types shared by every invoicing
//! integration: [`Money`] for VAT-aware amounts, [`LineItem`] for invoice
//! positions and the split payment check applied before issuing invoices.

mod error;
mod invoice;
mod money;
mod party;
mod position;
mod request;
mod split_payment;

pub use error::*;
pub use invoice::*;
pub use money::{DEFAULT_CURRENCY, DEFAULT_VAT_RATE, Money, MoneyOptions};
pub use party::*;
pub use position::*;
pub use request::*;
pub use split_payment::*;
