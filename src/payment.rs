//! Payment methods behind one contract.
//!
//! `CheckoutSystem` receives the method on every call, `ShoppingCart` gets
//! it once at construction and keeps it for its whole life.

use crate::dispatch::{Capability, Dispatcher};
use crate::money::Amount;
use std::fmt;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentReceipt {
    pub approved: bool,
    pub amount: Amount,
    pub message: String,
}

impl PaymentReceipt {
    pub fn status(&self) -> CheckoutStatus {
        if self.approved {
            CheckoutStatus::Successful
        } else {
            CheckoutStatus::Failed
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutStatus {
    Successful,
    Failed,
}

impl fmt::Display for CheckoutStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckoutStatus::Successful => write!(f, "Payment successful!"),
            CheckoutStatus::Failed => write!(f, "Payment failed."),
        }
    }
}

pub trait PaymentMethod {
    fn label(&self) -> &str;

    /// Success policy of the method. Approves everything unless overridden.
    fn authorize(&self, _amount: Amount) -> bool {
        true
    }

    fn process_payment(&self, amount: Amount) -> PaymentReceipt {
        let approved = self.authorize(amount);
        let message = if approved {
            format!("Processing {} payment of {}", self.label(), amount)
        } else {
            format!("Declined {} payment of {}", self.label(), amount)
        };
        PaymentReceipt {
            approved,
            amount,
            message,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CreditCardPayment;

impl PaymentMethod for CreditCardPayment {
    fn label(&self) -> &str {
        "credit card"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PayPalPayment;

impl PaymentMethod for PayPalPayment {
    fn label(&self) -> &str {
        "PayPal"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StripePayment;

impl PaymentMethod for StripePayment {
    fn label(&self) -> &str {
        "Stripe"
    }
}

/// Declines any payment above the card balance.
#[derive(Debug, Clone, Copy)]
pub struct GiftCardPayment {
    balance: Amount,
}

impl GiftCardPayment {
    pub fn new(balance: Amount) -> Self {
        GiftCardPayment { balance }
    }

    pub fn balance(&self) -> Amount {
        self.balance
    }
}

impl PaymentMethod for GiftCardPayment {
    fn label(&self) -> &str {
        "gift card"
    }

    fn authorize(&self, amount: Amount) -> bool {
        amount <= self.balance
    }
}

macro_rules! payment_capability {
    ($($method:ty),+ $(,)?) => {
        $(
            impl Capability for $method {
                type Input = Amount;
                type Output = PaymentReceipt;

                fn capability_name(&self) -> &str {
                    self.label()
                }

                fn invoke(&mut self, amount: Amount) -> PaymentReceipt {
                    self.process_payment(amount)
                }
            }
        )+
    };
}

payment_capability!(
    CreditCardPayment,
    PayPalPayment,
    StripePayment,
    GiftCardPayment,
    dyn PaymentMethod,
);

/// Takes the payment method on each call.
#[derive(Debug, Default)]
pub struct CheckoutSystem;

impl CheckoutSystem {
    pub fn checkout(&self, method: &dyn PaymentMethod, amount: Amount) -> PaymentReceipt {
        let receipt = method.process_payment(amount);
        debug!(method = method.label(), approved = receipt.approved, "checkout");
        receipt
    }
}

/// Bound to one payment method for its whole life.
pub struct ShoppingCart<P> {
    gateway: Dispatcher<P>,
}

impl<P> ShoppingCart<P>
where
    P: Capability<Input = Amount, Output = PaymentReceipt>,
{
    pub fn new(gateway: P) -> Self {
        ShoppingCart {
            gateway: Dispatcher::bind(gateway),
        }
    }

    pub fn checkout(&mut self, amount: Amount) -> PaymentReceipt {
        self.gateway.invoke(amount)
    }

    pub fn gateway(&self) -> &P {
        self.gateway.capability()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hundred() -> Amount {
        Amount::from_cents(10_000)
    }

    #[test]
    fn test_credit_card_reports_success_and_amount() {
        let mut cart = ShoppingCart::new(CreditCardPayment);
        let receipt = cart.checkout(hundred());

        assert!(receipt.approved);
        assert!(receipt.message.contains("100.00"));
        assert!(receipt.message.contains("credit card"));
        assert_eq!(receipt.status().to_string(), "Payment successful!");
    }

    #[test]
    fn test_paypal_follows_same_flow_with_own_label() {
        let card = ShoppingCart::new(CreditCardPayment).checkout(hundred());
        let paypal = ShoppingCart::new(PayPalPayment).checkout(hundred());

        assert_eq!(card.approved, paypal.approved);
        assert_eq!(card.status(), paypal.status());
        assert_eq!(paypal.message, "Processing PayPal payment of $100.00");
    }

    #[test]
    fn test_dispatch_matches_direct_call() {
        let methods: Vec<Box<dyn PaymentMethod>> = vec![
            Box::new(CreditCardPayment),
            Box::new(PayPalPayment),
            Box::new(StripePayment),
            Box::new(GiftCardPayment::new(Amount::from_cents(50))),
        ];

        for method in methods {
            let direct = method.process_payment(hundred());
            let mut dispatcher = Dispatcher::bind(method);
            assert_eq!(dispatcher.invoke(hundred()), direct);
        }
    }

    #[test]
    fn test_gift_card_declines_above_balance() {
        let mut cart = ShoppingCart::new(GiftCardPayment::new(Amount::from_cents(2_500)));

        let within = cart.checkout(Amount::from_cents(2_500));
        assert_eq!(within.status(), CheckoutStatus::Successful);

        let above = cart.checkout(Amount::from_cents(2_501));
        assert_eq!(above.status(), CheckoutStatus::Failed);
        assert_eq!(above.status().to_string(), "Payment failed.");
        assert_eq!(above.message, "Declined gift card payment of $25.01");
        assert_eq!(cart.gateway().balance(), Amount::from_cents(2_500));
    }

    #[test]
    fn test_checkout_system_accepts_any_method_per_call() {
        let system = CheckoutSystem;
        let stripe = system.checkout(&StripePayment, hundred());
        let card = system.checkout(&CreditCardPayment, hundred());

        assert_eq!(stripe.message, "Processing Stripe payment of $100.00");
        assert_eq!(card.message, "Processing credit card payment of $100.00");
    }

    #[test]
    fn test_cart_with_runtime_selected_method() {
        let method: Box<dyn PaymentMethod> = if hundred() > Amount::ZERO {
            Box::new(StripePayment)
        } else {
            Box::new(PayPalPayment)
        };
        let mut cart = ShoppingCart::new(method);

        assert_eq!(cart.gateway().capability_name(), "Stripe");
        assert!(cart.checkout(hundred()).approved);
    }
}
