//! Static UI string table keyed by `(language, key)`.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "hi")]
    Hindi,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown language code '{0}'; expected one of: en, hi")]
pub struct UnknownLanguage(pub String);

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::Hindi];

    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hindi => "hi",
        }
    }

    fn table(self) -> &'static Table {
        match self {
            Language::English => EN,
            Language::Hindi => HI,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Language::English),
            "hi" => Ok(Language::Hindi),
            _ => Err(UnknownLanguage(s.to_string())),
        }
    }
}

/// Looks `key` up in `language`, then in English, then returns `key` itself.
#[must_use]
pub fn translate<'a>(language: Language, key: &'a str) -> &'a str {
    resolve(language.table(), key)
}

/// Every key known to the English table, in table order.
pub fn keys() -> impl Iterator<Item = &'static str> {
    EN.iter().map(|(key, _)| *key)
}

/// The full string table for `language`, with English filling any gaps.
#[must_use]
pub fn strings(language: Language) -> BTreeMap<&'static str, &'static str> {
    keys().map(|key| (key, translate(language, key))).collect()
}

/// Translation key for a catalog category, e.g. `"Home & Garden"` → `homeAndGarden`.
#[must_use]
pub fn category_key(category: &str) -> String {
    if category == "Home & Garden" {
        "homeAndGarden".to_string()
    } else {
        category.to_lowercase()
    }
}

type Table = [(&'static str, &'static str)];

fn resolve<'a>(table: &'static Table, key: &'a str) -> &'a str {
    lookup(table, key)
        .or_else(|| lookup(EN, key))
        .unwrap_or(key)
}

fn lookup(table: &'static Table, key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

const EN: &Table = &[
    ("home", "Home"),
    ("cart", "Cart"),
    ("checkout", "Checkout"),
    ("orders", "Orders"),
    ("offers", "Offers"),
    ("login", "Login"),
    ("signup", "Sign Up"),
    ("logout", "Logout"),
    ("search", "Search products..."),
    ("addToCart", "Add to Cart"),
    ("viewDetails", "View Details"),
    ("price", "Price"),
    ("category", "Category"),
    ("quantity", "Quantity"),
    ("total", "Total"),
    ("yourCartIsEmpty", "Your cart is empty"),
    ("continueShopping", "Continue Shopping"),
    ("proceedToCheckout", "Proceed to Checkout"),
    ("clearCart", "Clear Cart"),
    ("orderSummary", "Order Summary"),
    ("paymentInformation", "Payment Information"),
    ("deliveryLocation", "Delivery Location"),
    ("completeOrder", "Complete Order"),
    ("emailAddress", "Email Address"),
    ("password", "Password"),
    ("fullName", "Full Name"),
    ("needHelp", "Need Help?"),
    ("customerSupport", "Customer Support"),
    ("howCanWeHelp", "How can we help you today?"),
    ("sendMessage", "Send Message"),
    ("all", "All"),
    ("electronics", "Electronics"),
    ("clothing", "Clothing"),
    ("beauty", "Beauty"),
    ("homeAndGarden", "Home & Garden"),
    ("books", "Books"),
    ("sports", "Sports"),
];

const HI: &Table = &[
    ("home", "होम"),
    ("cart", "कार्ट"),
    ("checkout", "चेकआउट"),
    ("orders", "ऑर्डर"),
    ("offers", "ऑफर"),
    ("login", "लॉगिन"),
    ("signup", "साइन अप"),
    ("logout", "लॉगआउट"),
    ("search", "उत्पाद खोजें..."),
    ("addToCart", "कार्ट में जोड़ें"),
    ("viewDetails", "विवरण देखें"),
    ("price", "कीमत"),
    ("category", "श्रेणी"),
    ("quantity", "मात्रा"),
    ("total", "कुल"),
    ("yourCartIsEmpty", "आपका कार्ट खाली है"),
    ("continueShopping", "खरीदारी जारी रखें"),
    ("proceedToCheckout", "चेकआउट पर जाएं"),
    ("clearCart", "कार्ट साफ़ करें"),
    ("orderSummary", "ऑर्डर सारांश"),
    ("paymentInformation", "भुगतान जानकारी"),
    ("deliveryLocation", "डिलीवरी स्थान"),
    ("completeOrder", "ऑर्डर पूरा करें"),
    ("emailAddress", "ईमेल पता"),
    ("password", "पासवर्ड"),
    ("fullName", "पूरा नाम"),
    ("needHelp", "सहायता चाहिए?"),
    ("customerSupport", "ग्राहक सहायता"),
    ("howCanWeHelp", "आज हम आपकी कैसे सहायता कर सकते हैं?"),
    ("sendMessage", "संदेश भेजें"),
    ("all", "सभी"),
    ("electronics", "इलेक्ट्रॉनिक्स"),
    ("clothing", "कपड़े"),
    ("beauty", "सौंदर्य"),
    ("homeAndGarden", "घर और बगीचा"),
    ("books", "किताबें"),
    ("sports", "खेल"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translate_english_key() {
        assert_eq!(translate(Language::English, "addToCart"), "Add to Cart");
    }

    #[test]
    fn translate_hindi_key() {
        assert_eq!(translate(Language::Hindi, "cart"), "कार्ट");
    }

    #[test]
    fn missing_key_falls_back_to_english() {
        const PARTIAL: &Table = &[("cart", "कार्ट")];
        assert_eq!(resolve(PARTIAL, "cart"), "कार्ट");
        assert_eq!(resolve(PARTIAL, "checkout"), "Checkout");
        assert_eq!(resolve(PARTIAL, "noSuchKey"), "noSuchKey");
    }

    #[test]
    fn unknown_key_returns_itself() {
        assert_eq!(translate(Language::Hindi, "noSuchKey"), "noSuchKey");
        assert_eq!(translate(Language::English, ""), "");
    }

    #[test]
    fn language_parses_codes_case_insensitively() {
        assert_eq!("en".parse::<Language>(), Ok(Language::English));
        assert_eq!(" HI ".parse::<Language>(), Ok(Language::Hindi));
        assert_eq!(
            "fr".parse::<Language>(),
            Err(UnknownLanguage("fr".to_string()))
        );
    }

    #[test]
    fn language_serializes_as_code() {
        assert_eq!(
            serde_json::to_string(&Language::Hindi).expect("serialize"),
            "\"hi\""
        );
    }

    #[test]
    fn category_key_maps_catalog_categories() {
        assert_eq!(category_key("Home & Garden"), "homeAndGarden");
        assert_eq!(category_key("Electronics"), "electronics");
        assert_eq!(
            translate(Language::Hindi, &category_key("Sports")),
            "खेल"
        );
    }

    #[test]
    fn strings_cover_every_english_key() {
        for language in Language::ALL {
            let table = strings(language);
            assert_eq!(table.len(), keys().count());
            assert!(keys().all(|k| table.contains_key(k)));
        }
        assert_eq!(strings(Language::Hindi)["sports"], "खेल");
    }

    #[test]
    fn hindi_table_matches_english_keys() {
        for (key, _) in HI {
            assert!(lookup(EN, key).is_some(), "Hindi key {key} missing from English");
        }
        for key in keys() {
            assert!(lookup(HI, key).is_some(), "English key {key} has no Hindi string");
        }
    }
}
