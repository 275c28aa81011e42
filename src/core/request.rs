//! Requests for issuing new invoices.
//!
//! Each invoice kind carries only the fields that make sense for it, so an
//! advance invoice cannot be given positions and a final invoice cannot be
//! given a sell date.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::KwotaError;
use super::party::BillingParty;
use super::position::LineItem;
use super::split_payment::is_split_payment_required;

/// Kind of invoice being requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvoiceKind {
    /// Regular VAT invoice listing the sold positions.
    Standard,
    /// Advance (prepayment) invoice for an amount paid before delivery.
    Advance,
    /// Final invoice settling previously issued advance invoices.
    Final,
}

/// A request to issue an invoice at the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum InvoiceRequest {
    Standard(StandardInvoice),
    Advance(AdvanceInvoice),
    Final(FinalInvoice),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardInvoice {
    pub order_id: String,
    pub sell_date: Option<NaiveDate>,
    pub billing_party: BillingParty,
    pub positions: Vec<LineItem>,
    /// Amount already paid by the buyer.
    pub paid_amount: Decimal,
    pub description: Option<String>,
    /// Payment term in days.
    pub payment_terms: u32,
    pub split_payments_enabled: bool,
    /// Whether the provider should e-mail the document to the buyer.
    pub send: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvanceInvoice {
    pub order_id: String,
    /// Order number in the warehouse management system.
    pub wms_order_no: Option<String>,
    pub sell_date: Option<NaiveDate>,
    pub paid_amount: Decimal,
    pub billing_party: BillingParty,
    pub split_payments_enabled: bool,
    pub send: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalInvoice {
    pub order_id: String,
    pub wms_order_no: Option<String>,
    pub billing_party: BillingParty,
    pub left_to_pay: Decimal,
    /// Numbers of the advance invoices this invoice settles.
    pub invoice_numbers: Vec<String>,
    pub split_payments_enabled: bool,
    pub send: bool,
}

impl InvoiceRequest {
    pub fn standard() -> StandardInvoiceBuilder {
        StandardInvoiceBuilder::default()
    }

    pub fn advance() -> AdvanceInvoiceBuilder {
        AdvanceInvoiceBuilder::default()
    }

    pub fn final_invoice() -> FinalInvoiceBuilder {
        FinalInvoiceBuilder::default()
    }

    pub fn kind(&self) -> InvoiceKind {
        match self {
            Self::Standard(_) => InvoiceKind::Standard,
            Self::Advance(_) => InvoiceKind::Advance,
            Self::Final(_) => InvoiceKind::Final,
        }
    }

    pub fn order_id(&self) -> &str {
        match self {
            Self::Standard(r) => &r.order_id,
            Self::Advance(r) => &r.order_id,
            Self::Final(r) => &r.order_id,
        }
    }

    pub fn billing_party(&self) -> &BillingParty {
        match self {
            Self::Standard(r) => &r.billing_party,
            Self::Advance(r) => &r.billing_party,
            Self::Final(r) => &r.billing_party,
        }
    }

    pub fn split_payments_enabled(&self) -> bool {
        match self {
            Self::Standard(r) => r.split_payments_enabled,
            Self::Advance(r) => r.split_payments_enabled,
            Self::Final(r) => r.split_payments_enabled,
        }
    }

    pub fn send(&self) -> bool {
        match self {
            Self::Standard(r) => r.send,
            Self::Advance(r) => r.send,
            Self::Final(r) => r.send,
        }
    }

    /// Gross amount the split payment threshold is checked against:
    /// the positions' gross total for standard invoices, the paid amount
    /// for advance invoices and the remaining amount for final invoices.
    pub fn gross_basis(&self) -> Decimal {
        match self {
            Self::Standard(r) => r.positions.iter().map(|p| p.total_price().gross()).sum(),
            Self::Advance(r) => r.paid_amount,
            Self::Final(r) => r.left_to_pay,
        }
    }

    /// Whether the issued invoice has to be marked for split payment.
    pub fn split_payment_required(&self) -> bool {
        is_split_payment_required(
            Some(self.billing_party()),
            self.gross_basis(),
            self.split_payments_enabled(),
        )
    }
}

fn required<T>(value: Option<T>, field: &str) -> Result<T, KwotaError> {
    value.ok_or_else(|| KwotaError::Builder(format!("{field} is required")))
}

/// Builder for [`InvoiceRequest::Standard`].
#[derive(Debug, Default)]
pub struct StandardInvoiceBuilder {
    order_id: Option<String>,
    sell_date: Option<NaiveDate>,
    billing_party: Option<BillingParty>,
    positions: Vec<LineItem>,
    paid_amount: Decimal,
    description: Option<String>,
    payment_terms: u32,
    split_payments_enabled: bool,
    send: bool,
}

impl StandardInvoiceBuilder {
    pub fn order_id(mut self, order_id: impl Into<String>) -> Self {
        self.order_id = Some(order_id.into());
        self
    }

    pub fn sell_date(mut self, date: NaiveDate) -> Self {
        self.sell_date = Some(date);
        self
    }

    pub fn billing_party(mut self, party: BillingParty) -> Self {
        self.billing_party = Some(party);
        self
    }

    pub fn add_position(mut self, position: LineItem) -> Self {
        self.positions.push(position);
        self
    }

    pub fn positions(mut self, positions: Vec<LineItem>) -> Self {
        self.positions = positions;
        self
    }

    pub fn paid_amount(mut self, amount: Decimal) -> Self {
        self.paid_amount = amount;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn payment_terms(mut self, days: u32) -> Self {
        self.payment_terms = days;
        self
    }

    pub fn split_payments_enabled(mut self, enabled: bool) -> Self {
        self.split_payments_enabled = enabled;
        self
    }

    pub fn send(mut self, send: bool) -> Self {
        self.send = send;
        self
    }

    pub fn build(self) -> Result<InvoiceRequest, KwotaError> {
        let order_id = required(self.order_id, "order id")?;
        let billing_party = required(self.billing_party, "billing party")?;
        if self.positions.is_empty() {
            return Err(KwotaError::Builder(
                "at least one position is required".into(),
            ));
        }

        Ok(InvoiceRequest::Standard(StandardInvoice {
            order_id,
            sell_date: self.sell_date,
            billing_party,
            positions: self.positions,
            paid_amount: self.paid_amount,
            description: self.description,
            payment_terms: self.payment_terms,
            split_payments_enabled: self.split_payments_enabled,
            send: self.send,
        }))
    }
}

/// Builder for [`InvoiceRequest::Advance`].
#[derive(Debug, Default)]
pub struct AdvanceInvoiceBuilder {
    order_id: Option<String>,
    wms_order_no: Option<String>,
    sell_date: Option<NaiveDate>,
    paid_amount: Decimal,
    billing_party: Option<BillingParty>,
    split_payments_enabled: bool,
    send: bool,
}

impl AdvanceInvoiceBuilder {
    pub fn order_id(mut self, order_id: impl Into<String>) -> Self {
        self.order_id = Some(order_id.into());
        self
    }

    pub fn wms_order_no(mut self, number: impl Into<String>) -> Self {
        self.wms_order_no = Some(number.into());
        self
    }

    pub fn sell_date(mut self, date: NaiveDate) -> Self {
        self.sell_date = Some(date);
        self
    }

    pub fn paid_amount(mut self, amount: Decimal) -> Self {
        self.paid_amount = amount;
        self
    }

    pub fn billing_party(mut self, party: BillingParty) -> Self {
        self.billing_party = Some(party);
        self
    }

    pub fn split_payments_enabled(mut self, enabled: bool) -> Self {
        self.split_payments_enabled = enabled;
        self
    }

    pub fn send(mut self, send: bool) -> Self {
        self.send = send;
        self
    }

    pub fn build(self) -> Result<InvoiceRequest, KwotaError> {
        Ok(InvoiceRequest::Advance(AdvanceInvoice {
            order_id: required(self.order_id, "order id")?,
            wms_order_no: self.wms_order_no,
            sell_date: self.sell_date,
            paid_amount: self.paid_amount,
            billing_party: required(self.billing_party, "billing party")?,
            split_payments_enabled: self.split_payments_enabled,
            send: self.send,
        }))
    }
}

/// Builder for [`InvoiceRequest::Final`].
#[derive(Debug, Default)]
pub struct FinalInvoiceBuilder {
    order_id: Option<String>,
    wms_order_no: Option<String>,
    billing_party: Option<BillingParty>,
    left_to_pay: Decimal,
    invoice_numbers: Vec<String>,
    split_payments_enabled: bool,
    send: bool,
}

impl FinalInvoiceBuilder {
    pub fn order_id(mut self, order_id: impl Into<String>) -> Self {
        self.order_id = Some(order_id.into());
        self
    }

    pub fn wms_order_no(mut self, number: impl Into<String>) -> Self {
        self.wms_order_no = Some(number.into());
        self
    }

    pub fn billing_party(mut self, party: BillingParty) -> Self {
        self.billing_party = Some(party);
        self
    }

    pub fn left_to_pay(mut self, amount: Decimal) -> Self {
        self.left_to_pay = amount;
        self
    }

    pub fn add_invoice_number(mut self, number: impl Into<String>) -> Self {
        self.invoice_numbers.push(number.into());
        self
    }

    pub fn invoice_numbers(mut self, numbers: Vec<String>) -> Self {
        self.invoice_numbers = numbers;
        self
    }

    pub fn split_payments_enabled(mut self, enabled: bool) -> Self {
        self.split_payments_enabled = enabled;
        self
    }

    pub fn send(mut self, send: bool) -> Self {
        self.send = send;
        self
    }

    pub fn build(self) -> Result<InvoiceRequest, KwotaError> {
        Ok(InvoiceRequest::Final(FinalInvoice {
            order_id: required(self.order_id, "order id")?,
            wms_order_no: self.wms_order_no,
            billing_party: required(self.billing_party, "billing party")?,
            left_to_pay: self.left_to_pay,
            invoice_numbers: self.invoice_numbers,
            split_payments_enabled: self.split_payments_enabled,
            send: self.send,
        }))
    }
}
