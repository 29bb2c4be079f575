//! Shopper-session commands: replaying cart operations and mock checkout.

use std::time::Duration;

use cartzy_core::{
    place_order, Cart, CartOp, Catalog, CheckoutError, DeliveryDetails, OrderReceipt,
};
use clap::Args;

use crate::browse::format_price;

/// Delivery details collected by the checkout form.
#[derive(Debug, Args)]
pub(crate) struct DeliveryArgs {
    #[arg(long)]
    pub address: String,
    #[arg(long)]
    pub city: String,
    #[arg(long)]
    pub state: String,
    #[arg(long)]
    pub pincode: String,
    #[arg(long)]
    pub phone: Option<String>,
}

impl From<DeliveryArgs> for DeliveryDetails {
    fn from(args: DeliveryArgs) -> Self {
        Self {
            address: args.address,
            city: args.city,
            state: args.state,
            pincode: args.pincode,
            phone: args.phone,
        }
    }
}

/// Applies `ops` in order to a fresh cart.
///
/// # Errors
///
/// Fails on the first `add` that names a product missing from the catalog.
pub(crate) fn replay(catalog: &Catalog, ops: &[CartOp]) -> anyhow::Result<Cart> {
    let mut cart = Cart::new();
    for op in ops {
        op.apply(&mut cart, catalog)?;
        tracing::debug!(%op, lines = cart.len(), total = cart.total(), "applied cart op");
    }
    Ok(cart)
}

pub(crate) fn render_cart(cart: &Cart) -> String {
    if cart.is_empty() {
        return "Your cart is empty\n".to_string();
    }

    let totals = cart.derive();
    let mut out: String = cart
        .lines()
        .iter()
        .map(|line| {
            format!(
                "#{:<4} {:<36} {} x {} = {}\n",
                line.product_id,
                line.name,
                line.quantity(),
                format_price(line.price),
                format_price(line.subtotal())
            )
        })
        .collect();
    out.push_str(&format!(
        "items: {}  total: {}\n",
        totals.item_count,
        format_price(totals.total)
    ));
    out
}

pub(crate) fn render_receipt(receipt: &OrderReceipt) -> String {
    let mut out = format!("Order {} placed\n", receipt.order_number);
    for line in &receipt.lines {
        out.push_str(&format!(
            "  {} x {} = {}\n",
            line.quantity(),
            line.name,
            format_price(line.subtotal())
        ));
    }
    out.push_str(&format!(
        "items: {}  total: {}  deliver to: {}\n",
        receipt.item_count,
        format_price(receipt.total),
        receipt.delivery_location
    ));
    out
}

pub(crate) fn run_cart(catalog: &Catalog, ops: &[CartOp], json: bool) -> anyhow::Result<()> {
    let cart = replay(catalog, ops)?;

    if json {
        let body = serde_json::json!({
            "lines": cart.lines(),
            "totals": cart.derive(),
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else {
        print!("{}", render_cart(&cart));
    }
    Ok(())
}

/// Replays `ops`, waits out the simulated payment delay, then places the order.
pub(crate) async fn run_checkout(
    catalog: &Catalog,
    ops: &[CartOp],
    details: &DeliveryDetails,
    delay_ms: u64,
    json: bool,
) -> anyhow::Result<()> {
    let mut cart = replay(catalog, ops)?;
    anyhow::ensure!(!cart.is_empty(), CheckoutError::EmptyCart);
    details.validate()?;

    tracing::info!(delay_ms, total = cart.total(), "processing mock payment");
    tokio::time::sleep(Duration::from_millis(delay_ms)).await;

    let receipt = place_order(&mut cart, details)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&receipt)?);
    } else {
        print!("{}", render_receipt(&receipt));
    }
    Ok(())
}
