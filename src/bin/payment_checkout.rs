//! Interfaces: payment methods behind one contract.
//!
//! Run with: cargo run --bin payment_checkout

use anyhow::Result;
use capability_dispatch::config::DemoConfig;
use capability_dispatch::logging;
use capability_dispatch::payment::{
    CheckoutSystem, CreditCardPayment, GiftCardPayment, PayPalPayment, PaymentMethod,
    PaymentReceipt, ShoppingCart, StripePayment,
};
use colored::Colorize;

fn report(receipt: &PaymentReceipt) {
    println!("{}", receipt.message);
    let status = receipt.status().to_string();
    if receipt.approved {
        println!("{}", status.green());
    } else {
        println!("{}", status.red());
    }
}

fn main() -> Result<()> {
    logging::init();
    let config = DemoConfig::load()?;
    let amount = config.checkout_amount;

    // Method chosen per call
    println!("{}", "=== Checkout System ===".bold());
    let checkout = CheckoutSystem;
    report(&checkout.checkout(&CreditCardPayment, amount));
    report(&checkout.checkout(&PayPalPayment, amount));

    // Method injected once, through the dispatcher
    println!("\n{}", "=== Shopping Cart ===".bold());
    let mut stripe_cart = ShoppingCart::new(StripePayment);
    report(&stripe_cart.checkout(amount));

    let mut gift_cart = ShoppingCart::new(GiftCardPayment::new(config.gift_card_balance));
    println!("Gift card balance: {}", gift_cart.gateway().balance());
    report(&gift_cart.checkout(amount));

    // Heterogeneous methods chosen at runtime
    println!("\n{}", "=== Runtime Selection ===".bold());
    let methods: Vec<Box<dyn PaymentMethod>> = vec![
        Box::new(CreditCardPayment),
        Box::new(PayPalPayment),
        Box::new(StripePayment),
    ];
    for method in methods {
        let mut cart = ShoppingCart::new(method);
        report(&cart.checkout(amount));
    }

    Ok(())
}
