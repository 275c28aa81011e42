use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use super::money::Money;
use super::party::BillingParty;
use super::position::LineItem;
use super::split_payment::is_split_payment_required;

/// An invoice as returned by an invoicing provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    /// Provider-side identifier.
    pub id: String,
    /// Invoice number printed on the document.
    pub number: String,
    /// Order id field; may list several comma-separated orders when
    /// orders were split or merged.
    pub order_id: Option<String>,
    /// Invoice total.
    pub amount: Money,
    /// Link to the provider's web view of the document.
    pub view_url: Option<String>,
    /// Document currency as reported by the provider. This is the
    /// authoritative invoice currency; `amount` is stored as given and its
    /// own currency is not reconciled against it.
    pub currency: String,
    /// Exchange rate to PLN reported by the provider (1 for PLN invoices).
    pub exchange_rate: Decimal,
    pub paid: bool,
    pub payment_due: Option<NaiveDate>,
    /// Invoice positions. Never absent: a missing or `null` list is empty.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub positions: Vec<LineItem>,
    pub seller: Option<BillingParty>,
    pub buyer: Option<BillingParty>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Invoice {
    /// Whether this invoice belongs to `order_id`. See [`invoice_matches_order`].
    pub fn has_order_id(&self, order_id: &str) -> bool {
        invoice_matches_order(self.order_id.as_deref(), Some(order_id))
    }

    /// Sum of the gross totals of all positions.
    pub fn positions_gross_total(&self) -> Decimal {
        self.positions
            .iter()
            .map(|p| p.total_price().gross())
            .sum()
    }

    /// Whether split payment applies to this invoice, judged by the buyer
    /// and the gross invoice amount.
    pub fn split_payment_required(&self, split_payments_enabled: bool) -> bool {
        is_split_payment_required(
            self.buyer.as_ref(),
            self.amount.gross(),
            split_payments_enabled,
        )
    }
}

/// Match an invoice's order id field against a single order id.
///
/// The field may hold a comma-separated list. Each entry is trimmed and
/// compared case-insensitively. Absent or blank input never matches.
///
/// ```
/// use kwota::core::invoice_matches_order;
///
/// assert!(invoice_matches_order(Some("A1, B2 ,c3"), Some("b2")));
/// assert!(!invoice_matches_order(Some("A1, B2 ,c3"), Some("d4")));
/// assert!(!invoice_matches_order(Some("  "), Some("a1")));
/// ```
pub fn invoice_matches_order(order_field: Option<&str>, candidate: Option<&str>) -> bool {
    let (Some(field), Some(candidate)) = (order_field, candidate) else {
        return false;
    };
    if field.trim().is_empty() || candidate.trim().is_empty() {
        return false;
    }

    field
        .split(',')
        .map(str::trim)
        .any(|id| eq_ignore_case(id, candidate))
}

/// Char-by-char case-insensitive comparison using single-character case
/// mappings, so `"İ1"` equals `"i1"` and `"ß"` does not equal `"ss"`.
fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars().count() == b.chars().count()
        && a.chars().zip(b.chars()).all(|(x, y)| {
            x == y || simple_upper(x) == simple_upper(y) || simple_lower(x) == simple_lower(y)
        })
}

fn simple_upper(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

fn simple_lower(c: char) -> char {
    // 'İ' lowercases to "i\u{307}"; its single-char mapping is the leading 'i'.
    c.to_lowercase().next().unwrap_or(c)
}

/// Builder for [`Invoice`].
///
/// ```
/// use kwota::core::*;
/// use rust_decimal_macros::dec;
///
/// let invoice = InvoiceBuilder::new("inv-1", "FV/2024/06/001", Money::from_net(dec!(100)))
///     .order_id("ORD-1,ORD-2")
///     .add_position(LineItem::new("1", "Kabel HDMI", 1, Money::from_net(dec!(100))))
///     .build();
///
/// assert!(invoice.has_order_id("ord-2"));
/// assert_eq!(invoice.currency, "PLN");
/// ```
pub struct InvoiceBuilder {
    id: String,
    number: String,
    order_id: Option<String>,
    amount: Money,
    view_url: Option<String>,
    currency: String,
    exchange_rate: Decimal,
    paid: bool,
    payment_due: Option<NaiveDate>,
    positions: Vec<LineItem>,
    seller: Option<BillingParty>,
    buyer: Option<BillingParty>,
}

impl InvoiceBuilder {
    /// Start an invoice. The currency defaults to the amount's currency
    /// and the exchange rate to 1.
    pub fn new(id: impl Into<String>, number: impl Into<String>, amount: Money) -> Self {
        Self {
            id: id.into(),
            number: number.into(),
            order_id: None,
            currency: amount.currency().to_string(),
            amount,
            view_url: None,
            exchange_rate: Decimal::ONE,
            paid: false,
            payment_due: None,
            positions: Vec::new(),
            seller: None,
            buyer: None,
        }
    }

    pub fn order_id(mut self, order_id: impl Into<String>) -> Self {
        self.order_id = Some(order_id.into());
        self
    }

    pub fn view_url(mut self, url: impl Into<String>) -> Self {
        self.view_url = Some(url.into());
        self
    }

    /// Override the document currency. `amount` keeps its own currency.
    pub fn currency(mut self, code: impl Into<String>) -> Self {
        self.currency = code.into();
        self
    }

    pub fn exchange_rate(mut self, rate: Decimal) -> Self {
        self.exchange_rate = rate;
        self
    }

    pub fn paid(mut self, paid: bool) -> Self {
        self.paid = paid;
        self
    }

    pub fn payment_due(mut self, date: NaiveDate) -> Self {
        self.payment_due = Some(date);
        self
    }

    pub fn add_position(mut self, position: LineItem) -> Self {
        self.positions.push(position);
        self
    }

    /// Replace the position list. `None` leaves an empty list.
    pub fn positions(mut self, positions: Option<Vec<LineItem>>) -> Self {
        self.positions = positions.unwrap_or_default();
        self
    }

    pub fn seller(mut self, party: BillingParty) -> Self {
        self.seller = Some(party);
        self
    }

    pub fn buyer(mut self, party: BillingParty) -> Self {
        self.buyer = Some(party);
        self
    }

    pub fn build(self) -> Invoice {
        Invoice {
            id: self.id,
            number: self.number,
            order_id: self.order_id,
            amount: self.amount,
            view_url: self.view_url,
            currency: self.currency,
            exchange_rate: self.exchange_rate,
            paid: self.paid,
            payment_due: self.payment_due,
            positions: self.positions,
            seller: self.seller,
            buyer: self.buyer,
        }
    }
}
