use kwota::core::*;
use rust_decimal_macros::dec;
use tracing_subscriber::EnvFilter;

fn main() {
    // RUST_LOG=kwota=debug shows each split payment decision
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let buyer = BillingParty::company(
        "2",
        "Biuro Projektowe S.A.",
        "ul. Świętojańska 12",
        "81-368",
        "Gdynia",
        "PL",
        "5860001234",
        Some("BIURO".into()),
    );

    let request = InvoiceRequest::standard()
        .order_id("ORD-2024-0042")
        .billing_party(buyer)
        .add_position(LineItem::new("1", "Stacja robocza", 4, Money::from_net(dec!(2999.00))))
        .add_position(LineItem::new("2", "Monitor 32\"", 4, Money::from_net(dec!(1249.99))))
        .split_payments_enabled(true)
        .payment_terms(14)
        .build()
        .expect("request should be complete");

    let InvoiceRequest::Standard(body) = &request else {
        unreachable!("built as a standard request");
    };

    println!("Order:   {}", request.order_id());
    println!("---");
    for line in &body.positions {
        println!(
            "  {} x {} @ {} = {}",
            line.quantity,
            line.name,
            line.unit_price,
            line.total_price()
        );
    }
    println!("---");
    println!("Gross:   {} PLN", request.gross_basis());
    println!("MPP:     {}", request.split_payment_required());
}
