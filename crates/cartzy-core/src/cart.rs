//! The shopper's cart: an ordered list of line items with derived totals.
//!
//! A [`Cart`] is a plain owned value. Views read it through `&Cart` and
//! mutate it only through [`Cart::add_item`], [`Cart::update_quantity`],
//! [`Cart::remove_item`], and [`Cart::clear`]. Totals are never stored; they
//! are recomputed from the lines on every read.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use crate::catalog::Catalog;
use crate::products::{Product, ProductId};

/// One product-and-quantity pair, with the product's display fields
/// captured at the moment it was first added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub name: String,
    /// Unit price at add-time, in the smallest currency unit.
    pub price: u64,
    pub image: String,
    pub category: String,
    quantity: u32,
}

impl CartLine {
    fn from_product(product: &Product) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            category: product.category.clone(),
            quantity: 1,
        }
    }

    /// Always at least 1.
    #[must_use]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// `price × quantity` for this line.
    #[must_use]
    pub fn subtotal(&self) -> u64 {
        self.price.saturating_mul(u64::from(self.quantity))
    }
}

/// Summary figures derived from the current lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CartTotals {
    /// Sum of quantities across lines.
    pub item_count: u64,
    /// Sum of `price × quantity` across lines.
    pub total: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit of `product`.
    ///
    /// An existing line for the same id is incremented; otherwise a new line
    /// is appended with quantity 1 and a snapshot of the product's current
    /// name, price, image and category.
    pub fn add_item(&mut self, product: &Product) {
        match self.position(product.id) {
            Some(idx) => {
                let line = &mut self.lines[idx];
                line.quantity = line.quantity.saturating_add(1);
            }
            None => self.lines.push(CartLine::from_product(product)),
        }
    }

    /// Sets the quantity of the line for `product_id`.
    ///
    /// A quantity of zero or less removes the line. Unknown ids are ignored.
    pub fn update_quantity(&mut self, product_id: ProductId, new_quantity: i64) {
        if new_quantity <= 0 {
            self.remove_item(product_id);
            return;
        }

        if let Some(idx) = self.position(product_id) {
            self.lines[idx].quantity = u32::try_from(new_quantity).unwrap_or(u32::MAX);
        }
    }

    /// Removes the line for `product_id`, if there is one.
    pub fn remove_item(&mut self, product_id: ProductId) {
        self.lines.retain(|line| line.product_id != product_id);
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Recomputes item count and total from the current lines.
    #[must_use]
    pub fn derive(&self) -> CartTotals {
        self.lines
            .iter()
            .fold(CartTotals::default(), |acc, line| CartTotals {
                item_count: acc.item_count.saturating_add(u64::from(line.quantity)),
                total: acc.total.saturating_add(line.subtotal()),
            })
    }

    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.derive().item_count
    }

    #[must_use]
    pub fn total(&self) -> u64 {
        self.derive().total
    }

    /// Lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn line(&self, product_id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.product_id == product_id)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct products in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    fn position(&self, product_id: ProductId) -> Option<usize> {
        self.lines
            .iter()
            .position(|line| line.product_id == product_id)
    }
}

/// A single cart mutation in replayable form.
///
/// Textual forms: `add:<id>`, `set:<id>=<qty>`, `remove:<id>`, `clear`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartOp {
    Add(ProductId),
    Update { product_id: ProductId, quantity: i64 },
    Remove(ProductId),
    Clear,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartOpError {
    #[error("invalid cart operation \"{input}\": {reason}")]
    Parse { input: String, reason: String },

    #[error("product {0} is not in the catalog")]
    UnknownProduct(ProductId),
}

impl CartOp {
    /// Applies this operation to `cart`, resolving `Add` ids against `catalog`.
    ///
    /// # Errors
    ///
    /// Returns `CartOpError::UnknownProduct` when an `Add` names an id the
    /// catalog does not have. The cart is left untouched in that case.
    pub fn apply(self, cart: &mut Cart, catalog: &Catalog) -> Result<(), CartOpError> {
        match self {
            CartOp::Add(id) => {
                let product = catalog.get(id).ok_or(CartOpError::UnknownProduct(id))?;
                cart.add_item(product);
            }
            CartOp::Update {
                product_id,
                quantity,
            } => cart.update_quantity(product_id, quantity),
            CartOp::Remove(id) => cart.remove_item(id),
            CartOp::Clear => cart.clear(),
        }
        Ok(())
    }
}

impl FromStr for CartOp {
    type Err = CartOpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let fail = |reason: &str| CartOpError::Parse {
            input: input.to_string(),
            reason: reason.to_string(),
        };
        let parse_id = |raw: &str| {
            raw.trim()
                .parse::<ProductId>()
                .map_err(|_| fail("product id must be a non-negative integer"))
        };

        if input.eq_ignore_ascii_case("clear") {
            return Ok(CartOp::Clear);
        }

        let (verb, rest) = input
            .split_once(':')
            .ok_or_else(|| fail("expected <verb>:<args>"))?;

        match verb.to_ascii_lowercase().as_str() {
            "add" => Ok(CartOp::Add(parse_id(rest)?)),
            "remove" => Ok(CartOp::Remove(parse_id(rest)?)),
            "set" => {
                let (id, qty) = rest
                    .split_once('=')
                    .ok_or_else(|| fail("expected set:<id>=<quantity>"))?;
                let quantity = qty
                    .trim()
                    .parse::<i64>()
                    .map_err(|_| fail("quantity must be an integer"))?;
                Ok(CartOp::Update {
                    product_id: parse_id(id)?,
                    quantity,
                })
            }
            _ => Err(fail("unknown verb; use add, set, remove, or clear")),
        }
    }
}

impl fmt::Display for CartOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CartOp::Add(id) => write!(f, "add:{id}"),
            CartOp::Update {
                product_id,
                quantity,
            } => write!(f, "set:{product_id}={quantity}"),
            CartOp::Remove(id) => write!(f, "remove:{id}"),
            CartOp::Clear => write!(f, "clear"),
        }
    }
}

#[cfg(test)]
#[path = "cart_test.rs"]
mod tests;
