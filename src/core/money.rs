//! VAT-aware monetary value.
//!
//! A [`Money`] carries both sides of a price — net and gross — together with
//! the VAT rate (as a multiplier, `1.23` = 23 %) and the currency code.
//! Amounts are always held at exactly two decimal places, rounded half-up
//! at every construction or scaling step. Intermediate results are never
//! carried across operations unrounded.

use std::fmt;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::error::KwotaError;

/// Standard Polish VAT rate (23 %) in multiplier form.
pub const DEFAULT_VAT_RATE: Decimal = dec!(1.23);

/// Currency used when none is configured.
pub const DEFAULT_CURRENCY: &str = "PLN";

/// Round to 2 decimal places using half-up (commercial rounding) and pad
/// the scale to exactly 2.
pub(crate) fn round2(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

/// Currency and VAT rate applied when building a [`Money`].
///
/// ```
/// use kwota::core::*;
/// use rust_decimal_macros::dec;
///
/// let options = MoneyOptions::default().vat_rate(dec!(1.08)).currency("EUR");
/// let price = Money::from_net_with(dec!(100), &options);
/// assert_eq!(price.gross(), dec!(108.00));
/// assert_eq!(price.currency(), "EUR");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoneyOptions {
    /// ISO 4217 currency code.
    pub currency: String,
    /// VAT rate as a multiplier (gross = net × rate).
    pub vat_rate: Decimal,
}

impl Default for MoneyOptions {
    fn default() -> Self {
        Self {
            currency: DEFAULT_CURRENCY.to_string(),
            vat_rate: DEFAULT_VAT_RATE,
        }
    }
}

impl MoneyOptions {
    pub fn currency(mut self, code: impl Into<String>) -> Self {
        self.currency = code.into();
        self
    }

    pub fn vat_rate(mut self, rate: Decimal) -> Self {
        self.vat_rate = rate;
        self
    }
}

/// Immutable price with net and gross amounts, VAT rate and currency.
///
/// Two values are equal only when all four attributes match; there is no
/// equivalence across currencies or VAT rates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "MoneyFields")]
pub struct Money {
    net: Decimal,
    gross: Decimal,
    vat_rate: Decimal,
    currency: String,
}

/// Wire shape of [`Money`]; converted through the rounding constructor.
#[derive(Deserialize)]
struct MoneyFields {
    net: Decimal,
    gross: Decimal,
    vat_rate: Decimal,
    currency: String,
}

impl From<MoneyFields> for Money {
    fn from(fields: MoneyFields) -> Self {
        Self {
            net: round2(fields.net),
            gross: round2(fields.gross),
            vat_rate: fields.vat_rate,
            currency: fields.currency,
        }
    }
}

impl Money {
    /// Price from a net amount at 23 % VAT in PLN.
    pub fn from_net(net: Decimal) -> Self {
        Self::from_net_with(net, &MoneyOptions::default())
    }

    /// Price from a net amount: the net is rounded first, then
    /// `gross = round2(net × rate)`.
    pub fn from_net_with(net: Decimal, options: &MoneyOptions) -> Self {
        let net = round2(net);
        Self {
            net,
            gross: round2(net * options.vat_rate),
            vat_rate: options.vat_rate,
            currency: options.currency.clone(),
        }
    }

    /// Price from a gross amount at 23 % VAT in PLN.
    pub fn from_gross(gross: Decimal) -> Result<Self, KwotaError> {
        Self::from_gross_with(gross, &MoneyOptions::default())
    }

    /// Price from a gross amount: the gross is rounded first, then
    /// `net = round2(gross ÷ rate)`.
    ///
    /// # Errors
    ///
    /// Returns [`KwotaError::InvalidVatRate`] when the rate is zero or the
    /// division overflows.
    pub fn from_gross_with(gross: Decimal, options: &MoneyOptions) -> Result<Self, KwotaError> {
        let rate = options.vat_rate;
        if rate.is_zero() {
            tracing::warn!(%gross, "rejecting zero VAT rate in gross to net conversion");
            return Err(KwotaError::InvalidVatRate(rate));
        }

        let gross = round2(gross);
        let net = gross
            .checked_div(rate)
            .ok_or(KwotaError::InvalidVatRate(rate))?;

        Ok(Self {
            net: round2(net),
            gross,
            vat_rate: rate,
            currency: options.currency.clone(),
        })
    }

    /// Price from an explicit net/gross pair with default rate and currency.
    pub fn new(net: Decimal, gross: Decimal) -> Self {
        Self::new_with(net, gross, &MoneyOptions::default())
    }

    /// Price from an explicit net/gross pair.
    ///
    /// Both amounts are rounded independently. The pair is stored as given;
    /// it is not checked against the VAT rate.
    pub fn new_with(net: Decimal, gross: Decimal, options: &MoneyOptions) -> Self {
        Self {
            net: round2(net),
            gross: round2(gross),
            vat_rate: options.vat_rate,
            currency: options.currency.clone(),
        }
    }

    /// Multiply net and gross by `quantity`, rounding each side.
    /// VAT rate and currency are carried over unchanged.
    ///
    /// # Panics
    ///
    /// Panics if a scaled amount exceeds the `Decimal` range (about
    /// 7.9e28). Use [`Money::checked_scale`] for untrusted input.
    pub fn scale(&self, quantity: u32) -> Self {
        let qty = Decimal::from(quantity);
        Self {
            net: round2(self.net * qty),
            gross: round2(self.gross * qty),
            vat_rate: self.vat_rate,
            currency: self.currency.clone(),
        }
    }

    /// Like [`Money::scale`], but reports overflow instead of panicking.
    ///
    /// # Errors
    ///
    /// Returns [`KwotaError::Overflow`] when net or gross times `quantity`
    /// leaves the `Decimal` range.
    pub fn checked_scale(&self, quantity: u32) -> Result<Self, KwotaError> {
        let qty = Decimal::from(quantity);
        let overflow = || KwotaError::Overflow(format!("{self} scaled by {quantity}"));
        let net = self.net.checked_mul(qty).ok_or_else(overflow)?;
        let gross = self.gross.checked_mul(qty).ok_or_else(overflow)?;

        Ok(Self {
            net: round2(net),
            gross: round2(gross),
            vat_rate: self.vat_rate,
            currency: self.currency.clone(),
        })
    }

    /// The price with the larger net amount. Ties return `a`; an absent
    /// argument yields the other one.
    pub fn max<'a>(a: Option<&'a Money>, b: Option<&'a Money>) -> Option<&'a Money> {
        match (a, b) {
            (Some(a), Some(b)) => Some(if a.net >= b.net { a } else { b }),
            (a, None) => a,
            (None, b) => b,
        }
    }

    pub fn net(&self) -> Decimal {
        self.net
    }

    pub fn gross(&self) -> Decimal {
        self.gross
    }

    /// VAT rate in multiplier form.
    pub fn vat_rate(&self) -> Decimal {
        self.vat_rate
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// VAT portion of the price (`gross − net`).
    pub fn vat_amount(&self) -> Decimal {
        self.gross - self.net
    }

    /// VAT rate as a whole percentage: `1.23` → `23`, `1.0` → `0`.
    ///
    /// Saturates at the `i32` bounds for rates outside any real tax table.
    pub fn vat_rate_percent(&self) -> i32 {
        let saturated = if self.vat_rate < Decimal::ONE {
            i32::MIN
        } else {
            i32::MAX
        };
        let Some(percent) = self
            .vat_rate
            .checked_sub(Decimal::ONE)
            .and_then(|excess| excess.checked_mul(Decimal::ONE_HUNDRED))
        else {
            return saturated;
        };
        percent
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_i32()
            .unwrap_or(saturated)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} (net {}, VAT {}%)",
            self.gross,
            self.currency,
            self.net,
            self.vat_rate_percent()
        )
    }
}
