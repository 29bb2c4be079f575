use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::cart::{Cart, CartLine};

const ORDER_NUMBER_LEN: usize = 9;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    #[error("cannot check out an empty cart")]
    EmptyCart,

    #[error("delivery detail '{0}' is required")]
    MissingDeliveryField(&'static str),
}

/// Where a mock order should be delivered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryDetails {
    pub address: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
    #[serde(default)]
    pub phone: Option<String>,
}

impl DeliveryDetails {
    /// # Errors
    ///
    /// Returns `CheckoutError::MissingDeliveryField` naming the first blank
    /// required field (address, city, state, pincode).
    pub fn validate(&self) -> Result<(), CheckoutError> {
        let required = [
            ("address", &self.address),
            ("city", &self.city),
            ("state", &self.state),
            ("pincode", &self.pincode),
        ];

        match required.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((field, _)) => Err(CheckoutError::MissingDeliveryField(*field)),
            None => Ok(()),
        }
    }

    /// Short location label, e.g. `"Mumbai, Maharashtra"`.
    #[must_use]
    pub fn location(&self) -> String {
        format!("{}, {}", self.city.trim(), self.state.trim())
    }
}

/// What the shopper bought, captured before the cart is cleared.
#[derive(Debug, Clone, Serialize)]
pub struct OrderReceipt {
    pub order_number: String,
    pub lines: Vec<CartLine>,
    pub item_count: u64,
    pub total: u64,
    pub delivery_location: String,
    pub placed_at: DateTime<Utc>,
}

/// Places a mock order for everything in `cart`, then empties the cart.
///
/// No payment is taken. The cart is cleared only after the receipt has been
/// built; on error it is left exactly as it was.
///
/// # Errors
///
/// Returns `CheckoutError::EmptyCart` for an empty cart, or
/// `CheckoutError::MissingDeliveryField` if the delivery details are incomplete.
pub fn place_order(
    cart: &mut Cart,
    details: &DeliveryDetails,
) -> Result<OrderReceipt, CheckoutError> {
    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }
    details.validate()?;

    let totals = cart.derive();
    let receipt = OrderReceipt {
        order_number: new_order_number(),
        lines: cart.lines().to_vec(),
        item_count: totals.item_count,
        total: totals.total,
        delivery_location: details.location(),
        placed_at: Utc::now(),
    };

    cart.clear();
    tracing::info!(
        order_number = %receipt.order_number,
        items = receipt.item_count,
        total = receipt.total,
        "mock order placed"
    );

    Ok(receipt)
}

fn new_order_number() -> String {
    Uuid::new_v4()
        .simple()
        .to_string()
        .chars()
        .take(ORDER_NUMBER_LEN)
        .collect::<String>()
        .to_uppercase()
}
