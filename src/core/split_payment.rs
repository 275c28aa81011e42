//! Split payment mechanism (mechanizm podzielonej płatności, MPP).
//!
//! Invoices issued to a tax-identified buyer whose gross total reaches
//! 15,000 must be paid with the VAT portion transferred to the buyer's
//! restricted VAT account. The amount is compared in the invoice's own
//! currency; no conversion is attempted.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::party::BillingParty;

/// Gross invoice total at which split payment becomes mandatory.
pub const SPLIT_PAYMENT_THRESHOLD: Decimal = dec!(15_000);

/// Decide whether an invoice must be marked for split payment.
///
/// Evaluated in order:
/// 1. no billing party, or a party without a tax id → `false`
/// 2. split payments disabled → `false`
/// 3. otherwise `gross_total >= 15000`
pub fn is_split_payment_required(
    billing_party: Option<&BillingParty>,
    gross_total: Decimal,
    split_payments_enabled: bool,
) -> bool {
    let Some(party) = billing_party.filter(|p| p.has_tax_id()) else {
        tracing::debug!(%gross_total, "split payment not applicable: no tax-identified party");
        return false;
    };

    if !split_payments_enabled {
        tracing::debug!(party = %party.id, %gross_total, "split payment disabled");
        return false;
    }

    let required = gross_total >= SPLIT_PAYMENT_THRESHOLD;
    tracing::debug!(party = %party.id, %gross_total, required, "split payment decision");
    required
}
