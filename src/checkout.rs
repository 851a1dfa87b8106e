//! Checkout form handling.

use crate::cart_actor::CartError;
use crate::clients::CartClient;
use crate::model::{CartSnapshot, Customer};
use crate::routes::Route;
use thiserror::Error;
use tracing::{info, instrument, warn};

pub const ORDER_SUBMITTED: &str = "Order submitted successfully!";

#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Rejected before touching the cart. Carries the names of the offending fields.
    #[error("Please fill in the required fields.")]
    MissingFields(Vec<&'static str>),

    #[error(transparent)]
    Cart(#[from] CartError),
}

/// What the buyer typed into the checkout page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckoutForm {
    pub customer: Customer,
    pub payment_method: String,
}

impl CheckoutForm {
    /// Names of required fields that are blank or malformed.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let blank = |value: &str| value.trim().is_empty();
        let mut missing = Vec::new();
        if blank(&self.customer.name) {
            missing.push("name");
        }
        if blank(&self.customer.email) || !self.customer.email.contains('@') {
            missing.push("email");
        }
        if blank(&self.customer.address) {
            missing.push("address");
        }
        if blank(&self.customer.phone) {
            missing.push("phone");
        }
        if blank(&self.payment_method) {
            missing.push("payment method");
        }
        missing
    }

    pub fn is_valid(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

/// Outcome of an accepted order.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutReceipt {
    pub message: &'static str,
    pub redirect: Route,
    /// The cart as it was submitted, before it was cleared.
    pub items: CartSnapshot,
}

/// Submits the checkout form.
///
/// An invalid form leaves the cart untouched. A valid one empties the cart and sends the buyer
/// back to the catalog.
#[instrument(skip(form, cart), fields(customer = %form.customer.name))]
pub async fn submit_order(
    form: &CheckoutForm,
    cart: &CartClient,
) -> Result<CheckoutReceipt, CheckoutError> {
    let missing = form.missing_fields();
    if !missing.is_empty() {
        warn!(?missing, "Checkout rejected");
        return Err(CheckoutError::MissingFields(missing));
    }

    let items = cart.checkout_cart().await?;
    info!(
        lines = items.len(),
        total = items.total_price(),
        payment = %form.payment_method,
        "Order submitted"
    );

    Ok(CheckoutReceipt {
        message: ORDER_SUBMITTED,
        redirect: Route::Products,
        items,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart_actor::{CartAction, CartActionResult};
    use crate::framework::mock::{create_mock_client, expect_action};
    use crate::model::{LineItem, Product};

    fn valid_form() -> CheckoutForm {
        CheckoutForm {
            customer: Customer {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                address: "1 Loop Rd".to_string(),
                phone: "555-0100".to_string(),
                ..Customer::default()
            },
            payment_method: "Cash".to_string(),
        }
    }

    #[test]
    fn test_validation() {
        assert!(valid_form().is_valid());
        assert!(!CheckoutForm::default().is_valid());

        let mut form = valid_form();
        form.customer.email = "not-an-address".to_string();
        form.payment_method = "  ".to_string();
        assert_eq!(form.missing_fields(), vec!["email", "payment method"]);
    }

    #[test]
    fn test_rejection_message() {
        let err = CheckoutError::MissingFields(vec!["name"]);
        assert_eq!(err.to_string(), "Please fill in the required fields.");
    }

    #[tokio::test]
    async fn test_submit_reads_and_clears_in_one_request() {
        let (client, mut receiver) = create_mock_client(10);
        let cart = CartClient::new(client);

        let submit = tokio::spawn(async move { submit_order(&valid_form(), &cart).await });

        let (action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert!(matches!(action, CartAction::Checkout));

        let held = CartSnapshot::new(vec![LineItem::new(Product::new(1, "Lamp", 10.0, 3), 2)]);
        responder
            .send(Ok(CartActionResult::CheckedOut(held.clone())))
            .unwrap();

        let receipt = submit.await.unwrap().unwrap();
        assert_eq!(receipt.items, held);
        assert_eq!(receipt.message, ORDER_SUBMITTED);
        assert_eq!(receipt.redirect, Route::Products);

        // The task and its client are gone; no second request was sent.
        assert!(receiver.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_invalid_form_sends_nothing() {
        let (client, mut receiver) = create_mock_client(10);
        let cart = CartClient::new(client);

        let result = submit_order(&CheckoutForm::default(), &cart).await;
        assert!(matches!(result, Err(CheckoutError::MissingFields(_))));

        drop(cart);
        assert!(receiver.recv().await.is_none());
    }
}
