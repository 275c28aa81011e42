use std::collections::HashSet;

use chrono::NaiveDate;
use kwota::core::*;
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn seller() -> BillingParty {
    BillingParty::company(
        "1",
        "Sklep Komputerowy Sp. z o.o.",
        "ul. Piotrkowska 100",
        "90-001",
        "Łódź",
        "PL",
        "7250001112",
        Some("SKLEP".into()),
    )
}

fn company_buyer() -> BillingParty {
    BillingParty::company(
        "2",
        "Biuro Rachunkowe S.A.",
        "ul. Floriańska 3",
        "31-019",
        "Kraków",
        "PL",
        "6760001234",
        None,
    )
}

fn private_buyer() -> BillingParty {
    BillingParty::individual(
        "3",
        "Jan",
        "Kowalski",
        "ul. Długa 5",
        "80-831",
        "Gdańsk",
        "PL",
        None,
    )
}

// --- Money ---

#[test]
fn net_gross_round_trip() {
    let from_net = Money::from_net(dec!(100));
    assert_eq!(from_net.gross(), dec!(123.00));

    let back = Money::from_gross(from_net.gross()).unwrap();
    assert_eq!(back.net(), dec!(100.00));
    assert_eq!(back, from_net);
}

#[test]
fn custom_vat_rate_and_currency() {
    let options = MoneyOptions::default().vat_rate(dec!(1.08)).currency("EUR");
    let price = Money::from_net_with(dec!(100), &options);
    assert_eq!(price.gross(), dec!(108.00));
    assert_eq!(price.vat_rate(), dec!(1.08));
    assert_eq!(price.vat_rate_percent(), 8);
    assert_eq!(price.currency(), "EUR");
}

#[test]
fn zero_amounts() {
    let net = Money::from_net(dec!(0));
    assert_eq!(net.net(), dec!(0.00));
    assert_eq!(net.gross(), dec!(0.00));

    let gross = Money::from_gross(dec!(0)).unwrap();
    assert_eq!(gross.net(), dec!(0.00));
    assert_eq!(gross.gross(), dec!(0.00));
}

#[test]
fn zero_vat_rate_is_rejected_from_gross() {
    let options = MoneyOptions::default().vat_rate(dec!(0));
    let err = Money::from_gross_with(dec!(123), &options).unwrap_err();
    assert!(matches!(err, KwotaError::InvalidVatRate(_)));
    assert!(err.to_string().contains("invalid VAT rate"));
}

#[test]
fn zero_percent_vat_is_not_zero_rate() {
    // 0 % VAT is the multiplier 1.0, not 0.
    let options = MoneyOptions::default().vat_rate(dec!(1.0));
    let price = Money::from_gross_with(dec!(250), &options).unwrap();
    assert_eq!(price.net(), dec!(250.00));
    assert_eq!(price.vat_rate_percent(), 0);
}

// --- Equality ---

#[test]
fn equal_values_hash_identically() {
    let a = Money::from_net(dec!(100));
    let b = Money::from_net(dec!(100));
    assert_eq!(a, b);

    let set: HashSet<Money> = [a, b].into_iter().collect();
    assert_eq!(set.len(), 1);
}

#[test]
fn every_attribute_takes_part_in_equality() {
    let base = Money::new(dec!(100), dec!(123));

    assert_ne!(base, Money::new(dec!(200), dec!(123)));
    assert_ne!(base, Money::new(dec!(100), dec!(124)));
    assert_ne!(
        base,
        Money::new_with(dec!(100), dec!(123), &MoneyOptions::default().vat_rate(dec!(1.08)))
    );
    assert_ne!(
        base,
        Money::new_with(dec!(100), dec!(123), &MoneyOptions::default().currency("EUR"))
    );
}

#[test]
fn trailing_zeros_do_not_affect_equality() {
    assert_eq!(
        Money::new(dec!(100), dec!(123)),
        Money::new(dec!(100.00), dec!(123.000))
    );
}

// --- Line items ---

#[test]
fn line_totals() {
    let lines = [
        LineItem::new("1", "Laptop", 2, Money::from_net(dec!(3999.99))),
        LineItem::new("2", "Mysz", 5, Money::from_net(dec!(49.90))),
        LineItem::new("3", "Gratis", 0, Money::from_net(dec!(10))),
    ];

    // 3999.99 * 1.23 = 4919.9877 -> 4919.99
    assert_eq!(lines[0].total_price().net(), dec!(7999.98));
    assert_eq!(lines[0].total_price().gross(), dec!(9839.98));
    // 49.90 * 1.23 = 61.377 -> 61.38
    assert_eq!(lines[1].total_price().gross(), dec!(306.90));
    assert_eq!(lines[2].total_price().gross(), dec!(0.00));
}

// --- Split payment ---

#[test]
fn split_payment_decision_table() {
    let buyer = company_buyer();

    assert!(!is_split_payment_required(None, dec!(20000), true));
    assert!(!is_split_payment_required(Some(&private_buyer()), dec!(20000), true));
    assert!(!is_split_payment_required(Some(&buyer), dec!(20000), false));
    assert!(is_split_payment_required(Some(&buyer), dec!(15000.00), true));
    assert!(!is_split_payment_required(Some(&buyer), dec!(14999.99), true));
    assert_eq!(SPLIT_PAYMENT_THRESHOLD, dec!(15000));
}

#[test]
fn invoice_split_payment_uses_buyer_and_gross_amount() {
    let amount = Money::from_gross(dec!(18450)).unwrap();
    let invoice = InvoiceBuilder::new("inv-9", "FV/2024/06/009", amount)
        .seller(seller())
        .buyer(company_buyer())
        .build();
    assert!(invoice.split_payment_required(true));
    assert!(!invoice.split_payment_required(false));

    let private = InvoiceBuilder::new("inv-10", "FV/2024/06/010", invoice.amount.clone())
        .buyer(private_buyer())
        .build();
    assert!(!private.split_payment_required(true));
}

// --- Invoice aggregate ---

#[test]
fn invoice_matches_merged_orders() {
    let invoice = InvoiceBuilder::new("inv-1", "FV/2024/06/001", Money::from_net(dec!(250)))
        .order_id("A1, B2 ,c3")
        .payment_due(date(2024, 7, 1))
        .build();

    assert!(invoice.has_order_id("b2"));
    assert!(invoice.has_order_id("A1"));
    assert!(!invoice.has_order_id("d4"));
    assert!(!invoice.has_order_id(" "));
}

#[test]
fn invoice_without_order_id_matches_nothing() {
    let invoice = InvoiceBuilder::new("inv-2", "FV/2024/06/002", Money::from_net(dec!(1))).build();
    assert!(!invoice.has_order_id("A1"));
}

#[test]
fn invoice_defaults() {
    let options = MoneyOptions::default().currency("EUR").vat_rate(dec!(1.0));
    let invoice =
        InvoiceBuilder::new("inv-3", "FV/2024/06/003", Money::from_net_with(dec!(100), &options))
            .exchange_rate(dec!(4.3125))
            .paid(true)
            .build();

    assert_eq!(invoice.currency, "EUR");
    assert_eq!(invoice.exchange_rate, dec!(4.3125));
    assert!(invoice.paid);
    assert!(invoice.positions.is_empty());
}

// --- Invoice requests ---

#[test]
fn standard_request() {
    let request = InvoiceRequest::standard()
        .order_id("ORD-100")
        .sell_date(date(2024, 6, 15))
        .billing_party(company_buyer())
        .add_position(LineItem::new("1", "Serwer rack", 1, Money::from_net(dec!(12500))))
        .payment_terms(14)
        .description("Zamówienie ORD-100")
        .split_payments_enabled(true)
        .send(true)
        .build()
        .unwrap();

    assert_eq!(request.kind(), InvoiceKind::Standard);
    assert_eq!(request.order_id(), "ORD-100");
    assert!(request.send());
    // 12500 * 1.23 = 15375.00
    assert_eq!(request.gross_basis(), dec!(15375.00));
    assert!(request.split_payment_required());
}

#[test]
fn advance_and_final_requests() {
    let advance = InvoiceRequest::advance()
        .order_id("ORD-200")
        .wms_order_no("WMS-77")
        .sell_date(date(2024, 6, 1))
        .paid_amount(dec!(5000))
        .billing_party(company_buyer())
        .split_payments_enabled(true)
        .build()
        .unwrap();
    assert_eq!(advance.kind(), InvoiceKind::Advance);
    assert!(!advance.split_payment_required());

    let settled = InvoiceRequest::final_invoice()
        .order_id("ORD-200")
        .wms_order_no("WMS-77")
        .billing_party(company_buyer())
        .left_to_pay(dec!(16000))
        .invoice_numbers(vec!["FZ/2024/06/001".into()])
        .split_payments_enabled(true)
        .build()
        .unwrap();
    assert_eq!(settled.kind(), InvoiceKind::Final);
    assert!(settled.split_payment_required());

    let InvoiceRequest::Final(ref body) = settled else {
        panic!("expected final invoice request");
    };
    assert_eq!(body.invoice_numbers, vec!["FZ/2024/06/001".to_string()]);
}

#[test]
fn request_without_billing_party_fails() {
    let err = InvoiceRequest::standard()
        .order_id("ORD-1")
        .add_position(LineItem::new("1", "X", 1, Money::from_net(dec!(1))))
        .build()
        .unwrap_err();
    assert_eq!(err, KwotaError::Builder("billing party is required".into()));
}
