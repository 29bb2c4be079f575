use serde::{Deserialize, Deserializer, Serialize};

pub type ProductId = u32;

/// Discount percentage at or above which a product is billed as a flash deal.
pub const FLASH_DEAL_MIN_DISCOUNT: u8 = 25;

/// A purchasable item as it appears in the JSON catalog.
///
/// Prices are whole integers in the catalog's smallest currency unit; the
/// bundled demo catalog prices in rupees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: u64,
    /// Pre-discount price, shown struck through next to `price`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<u64>,
    /// Discount percentage, e.g. `30` for 30% off.
    #[serde(
        default,
        deserialize_with = "deserialize_discount",
        skip_serializing_if = "Option::is_none"
    )]
    pub discount: Option<u8>,
    /// Display category, e.g. `"Electronics"` or `"Home & Garden"`.
    pub category: String,
    pub image: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Product {
    /// The discount percentage, if it is non-zero.
    #[must_use]
    pub fn discount_percent(&self) -> Option<u8> {
        self.discount.filter(|d| *d > 0)
    }

    #[must_use]
    pub fn is_discounted(&self) -> bool {
        self.discount_percent().is_some()
    }

    #[must_use]
    pub fn is_flash_deal(&self) -> bool {
        self.discount_percent().is_some_and(|d| d >= FLASH_DEAL_MIN_DISCOUNT)
    }

    /// Amount saved against `original_price`, if one is listed.
    #[must_use]
    pub fn savings(&self) -> Option<u64> {
        self.original_price
            .map(|original| original.saturating_sub(self.price))
    }

    /// Case-insensitive substring match against name, description, or any tag.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(needle))
    }
}

/// Reads any JSON number as a whole percentage. Zero or less means no discount.
fn deserialize_discount<'de, D>(deserializer: D) -> Result<Option<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<f64>::deserialize(deserializer)?;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let percent = raw
        .map(|d| d.round().min(100.0))
        .filter(|d| *d >= 1.0)
        .map(|d| d as u8);
    Ok(percent)
}
