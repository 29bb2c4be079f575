//! Read-only catalog commands: `products`, `product`, `offers` and `deals`.

use cartzy_core::{Catalog, Product, ProductId};

pub(crate) fn format_price(amount: u64) -> String {
    format!("₹{amount}")
}

/// One-line product summary, e.g. `#1  Headphones  ₹6999 (30% off ₹9999)  [Electronics]`.
pub(crate) fn product_line(product: &Product) -> String {
    let discount = match (product.discount_percent(), product.original_price) {
        (Some(discount), Some(original)) => {
            format!(" ({discount}% off {})", format_price(original))
        }
        _ => String::new(),
    };
    format!(
        "#{:<4} {:<36} {}{discount}  [{}]",
        product.id,
        product.name,
        format_price(product.price),
        product.category
    )
}

pub(crate) fn list_products(
    catalog: &Catalog,
    search: Option<&str>,
    category: Option<&str>,
    json: bool,
) -> anyhow::Result<()> {
    let matches = catalog.search(search, category);
    tracing::debug!(?search, ?category, matches = matches.len(), "catalog search");

    if json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
        return Ok(());
    }

    if matches.is_empty() {
        println!("no products match");
        return Ok(());
    }
    for product in matches {
        println!("{}", product_line(product));
    }
    Ok(())
}

pub(crate) fn show_product(catalog: &Catalog, id: ProductId, json: bool) -> anyhow::Result<()> {
    let product = catalog
        .get(id)
        .ok_or_else(|| anyhow::anyhow!("product {id} not found"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(product)?);
        return Ok(());
    }

    println!("{}", product_line(product));
    println!("  {}", product.description);
    if let Some(savings) = product.savings() {
        println!("  you save {}", format_price(savings));
    }
    if !product.tags.is_empty() {
        println!("  tags: {}", product.tags.join(", "));
    }
    println!("  image: {}", product.image);
    Ok(())
}

pub(crate) fn show_offers(catalog: &Catalog, json: bool) -> anyhow::Result<()> {
    let offers = catalog.offers();

    if json {
        println!("{}", serde_json::to_string_pretty(&offers)?);
        return Ok(());
    }

    println!("Flash deals ({}):", offers.flash_deals.len());
    for product in &offers.flash_deals {
        println!("  {}", product_line(product));
    }
    println!("Regular offers ({}):", offers.regular_offers.len());
    for product in &offers.regular_offers {
        println!("  {}", product_line(product));
    }
    Ok(())
}

pub(crate) fn show_deals(catalog: &Catalog, limit: usize, json: bool) -> anyhow::Result<()> {
    let deals = catalog.featured_deals(limit);

    if json {
        println!("{}", serde_json::to_string_pretty(&deals)?);
        return Ok(());
    }

    if deals.is_empty() {
        println!("no deals right now");
        return Ok(());
    }
    for product in deals {
        println!("{}", product_line(product));
    }
    Ok(())
}
