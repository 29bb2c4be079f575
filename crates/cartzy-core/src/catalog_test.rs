use std::path::PathBuf;

use super::*;

fn product(id: ProductId, name: &str, category: &str, discount: Option<u8>) -> Product {
    Product {
        id,
        name: name.to_string(),
        description: format!("{name} description"),
        price: 1000,
        original_price: discount.map(|_| 2000),
        discount,
        category: category.to_string(),
        image: format!("/img/{id}.jpg"),
        tags: vec![],
    }
}

fn sample() -> Catalog {
    let mut watch = product(2, "Smart Fitness Watch", "Electronics", Some(25));
    watch.tags = vec!["Wearable".to_string()];
    Catalog::from_products(vec![
        product(1, "Wireless Headphones", "Electronics", Some(30)),
        watch,
        product(3, "Cotton T-Shirt", "Clothing", Some(10)),
        product(4, "Face Serum", "Beauty", None),
        product(5, "Garden Hose", "Home & Garden", Some(24)),
        product(6, "Running Shoes", "Sports", None),
        product(7, "Denim Jacket", "Clothing", None),
    ])
    .expect("valid sample catalog")
}

fn ids(products: &[&Product]) -> Vec<ProductId> {
    products.iter().map(|p| p.id).collect()
}

fn bundled_catalog_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/products.json")
}

#[test]
fn get_finds_by_id() {
    let catalog = sample();
    assert_eq!(catalog.get(3).map(|p| p.name.as_str()), Some("Cotton T-Shirt"));
    assert!(catalog.get(99).is_none());
}

#[test]
fn search_without_filters_returns_everything_in_order() {
    let catalog = sample();
    assert_eq!(ids(&catalog.search(None, None)), vec![1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(ids(&catalog.search(Some("   "), Some("All"))), vec![1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn search_is_case_insensitive_across_name_description_and_tags() {
    let catalog = sample();
    assert_eq!(ids(&catalog.search(Some("WIRELESS"), None)), vec![1]);
    assert_eq!(ids(&catalog.search(Some("serum desc"), None)), vec![4]);
    assert_eq!(ids(&catalog.search(Some("wearable"), None)), vec![2]);
    assert!(catalog.search(Some("laptop"), None).is_empty());
}

#[test]
fn search_filters_by_exact_category() {
    let catalog = sample();
    assert_eq!(ids(&catalog.search(None, Some("Clothing"))), vec![3, 7]);
    assert!(catalog.search(None, Some("clothing")).is_empty());
    assert_eq!(ids(&catalog.search(Some("jacket"), Some("Clothing"))), vec![7]);
    assert!(catalog.search(Some("jacket"), Some("Sports")).is_empty());
}

#[test]
fn categories_start_with_all_then_first_seen_order() {
    let catalog = sample();
    assert_eq!(
        catalog.categories(),
        vec!["All", "Electronics", "Clothing", "Beauty", "Home & Garden", "Sports"]
    );
    assert_eq!(Catalog::default().categories(), vec!["All"]);
}

#[test]
fn offers_split_at_twenty_five_percent() {
    let catalog = sample();
    let offers = catalog.offers();
    assert_eq!(ids(&offers.flash_deals), vec![1, 2]);
    assert_eq!(ids(&offers.regular_offers), vec![3, 5]);
}

#[test]
fn featured_deals_takes_first_discounted() {
    let catalog = sample();
    assert_eq!(ids(&catalog.featured_deals(3)), vec![1, 2, 3]);
    assert_eq!(catalog.featured_deals(10).len(), 4);
}

#[test]
fn rejects_duplicate_ids() {
    let err = Catalog::from_products(vec![
        product(1, "A", "Books", None),
        product(1, "B", "Books", None),
    ])
    .unwrap_err();
    assert!(
        matches!(err, CatalogError::Validation(ref msg) if msg.contains("duplicate product id 1")),
        "got: {err:?}"
    );
}

#[test]
fn rejects_zero_price() {
    let mut free = product(1, "Freebie", "Books", None);
    free.price = 0;
    let err = Catalog::from_products(vec![free]).unwrap_err();
    assert!(matches!(err, CatalogError::Validation(_)), "got: {err:?}");
}

#[test]
fn rejects_blank_name() {
    let err = Catalog::from_products(vec![product(1, "  ", "Books", None)]).unwrap_err();
    assert!(matches!(err, CatalogError::Validation(_)), "got: {err:?}");
}

#[test]
fn zero_discount_loads_as_undiscounted() {
    let catalog = Catalog::from_json(
        r#"[
            {"id": 1, "name": "A", "description": "a", "price": 100,
             "originalPrice": 100, "discount": 0, "category": "Books", "image": "/a.jpg"},
            {"id": 2, "name": "B", "description": "b", "price": 80,
             "originalPrice": 100, "discount": 12.5, "category": "Books", "image": "/b.jpg"}
        ]"#,
    )
    .expect("zero and fractional discounts load");

    assert_eq!(catalog.len(), 2);
    assert_eq!(ids(&catalog.discounted().collect::<Vec<_>>()), vec![2]);
    assert_eq!(catalog.get(2).and_then(|p| p.discount), Some(13));
    assert!(catalog.offers().flash_deals.is_empty());
}

#[test]
fn zero_discount_built_in_code_is_ignored() {
    let catalog = Catalog::from_products(vec![
        product(1, "A", "Books", Some(0)),
        product(2, "B", "Books", Some(40)),
    ])
    .expect("valid catalog");
    assert_eq!(ids(&catalog.featured_deals(FEATURED_DEALS)), vec![2]);
    assert!(catalog.offers().regular_offers.is_empty());
}

#[test]
fn original_price_below_price_is_accepted() {
    let mut p = product(1, "A", "Books", Some(10));
    p.original_price = Some(500);
    let catalog = Catalog::from_products(vec![p]).expect("loads with a warning");
    assert_eq!(catalog.get(1).and_then(Product::savings), Some(0));
}

#[test]
fn from_json_reports_parse_errors() {
    let err = Catalog::from_json("{\"not\": \"an array\"}").unwrap_err();
    assert!(matches!(err, CatalogError::Parse(_)), "got: {err:?}");
}

#[test]
fn load_missing_file_reports_path() {
    let err = Catalog::load(std::path::Path::new("/nonexistent/products.json")).unwrap_err();
    assert!(
        matches!(err, CatalogError::Io { ref path, .. } if path.contains("nonexistent")),
        "got: {err:?}"
    );
}

#[test]
fn bundled_catalog_loads_and_validates() {
    let catalog = Catalog::load(&bundled_catalog_path()).expect("bundled catalog is valid");
    assert!(!catalog.is_empty());
    assert!(catalog.offers().flash_deals.iter().all(|p| p.is_flash_deal()));
    assert_eq!(catalog.categories().first(), Some(&"All"));
}
