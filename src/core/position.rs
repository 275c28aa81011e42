use serde::{Deserialize, Serialize};

use super::error::KwotaError;
use super::money::Money;

/// A single invoice position: a quantity of some item at a unit price.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineItem {
    /// Position identifier (provider-specific).
    pub id: String,
    /// Display name printed on the invoice.
    pub name: String,
    /// Number of units. Negative quantities cannot be expressed.
    pub quantity: u32,
    /// Price of a single unit.
    pub unit_price: Money,
}

impl LineItem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        quantity: u32,
        unit_price: Money,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            quantity,
            unit_price,
        }
    }

    /// Total price of the position (`unit_price` scaled by `quantity`).
    ///
    /// # Panics
    ///
    /// Panics on `Decimal` overflow, see [`Money::scale`].
    pub fn total_price(&self) -> Money {
        self.unit_price.scale(self.quantity)
    }

    /// Total price of the position, reporting overflow as an error.
    pub fn checked_total_price(&self) -> Result<Money, KwotaError> {
        self.unit_price.checked_scale(self.quantity)
    }
}
