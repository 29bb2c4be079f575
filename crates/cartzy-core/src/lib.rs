pub mod app_config;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod i18n;
pub mod products;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use cart::{Cart, CartLine, CartOp, CartOpError, CartTotals};
pub use catalog::{Catalog, CatalogError, Offers, ALL_CATEGORIES, FEATURED_DEALS};
pub use checkout::{place_order, CheckoutError, DeliveryDetails, OrderReceipt};
pub use config::{load_app_config, load_app_config_from_env};
pub use i18n::{category_key, translate, Language, UnknownLanguage};
pub use products::{Product, ProductId};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
