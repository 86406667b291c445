//! Catalog and listing queries over the storefront fixture.

use dhingra_commerce::catalog::FEATURED_CATEGORY_LIMIT;
use dhingra_commerce::prelude::*;

const FIXTURE: &str = include_str!("fixtures/catalog.json");

fn catalog() -> Catalog {
    Catalog::from_json(FIXTURE).unwrap()
}

fn ids(products: &[&Product]) -> Vec<u32> {
    products.iter().map(|p| p.id.get()).collect()
}

#[test]
fn test_fixture_loads() {
    let catalog = catalog();
    assert_eq!(catalog.categories().len(), 5);
    assert_eq!(catalog.products().len(), 8);
    assert_eq!(catalog.currency(), Currency::INR);

    let suit = catalog.require_product(ProductId::new(2)).unwrap();
    assert_eq!(suit.name, "Cotton Salwar Suit");
    assert_eq!(suit.effective_price(), Money::from_major(3150, Currency::INR));
    assert_eq!(suit.savings(), Money::from_major(350, Currency::INR));
}

#[test]
fn test_unknown_ids() {
    let catalog = catalog();
    assert!(catalog.product(ProductId::new(99)).is_none());
    assert!(matches!(
        catalog.require_category(CategoryId::new(42)),
        Err(CommerceError::CategoryNotFound(id)) if id == CategoryId::new(42)
    ));
}

#[test]
fn test_category_listing() {
    let catalog = catalog();
    assert_eq!(ids(&catalog.products_in_category(CategoryId::new(1))), [1, 6]);
    assert_eq!(ids(&catalog.products_in_category(CategoryId::new(3))), [3, 8]);
    assert!(catalog.products_in_category(CategoryId::new(9)).is_empty());
}

#[test]
fn test_search_is_case_insensitive() {
    let catalog = catalog();
    assert_eq!(ids(&catalog.search("SAREE")), [1, 6]);
    assert_eq!(ids(&catalog.search("silk")), [1, 5]);
    assert_eq!(ids(&catalog.search("wedding")), [1, 3, 8]);
    assert!(catalog.search("denim").is_empty());
}

#[test]
fn test_featured() {
    let catalog = catalog();
    assert_eq!(ids(&catalog.featured_products()), [1, 3, 6, 7, 8]);

    let names: Vec<_> = catalog
        .featured_categories(FEATURED_CATEGORY_LIMIT)
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(names, ["Sarees", "Suits", "Lehengas", "Kurtas"]);
}

#[test]
fn test_query_price_range_uses_effective_price() {
    let catalog = catalog();
    let query = SearchQuery::new()
        .with_filter(Filter::price_range(
            Some(Money::from_major(3000, Currency::INR)),
            Some(Money::from_major(5000, Currency::INR)),
        ))
        .with_sort(SortOption::PriceAsc);

    let results = catalog.query(&query);
    assert_eq!(ids(&results.items), [2, 4]);
    assert_eq!(results.total(), 2);
}

#[test]
fn test_query_sorts() {
    let catalog = catalog();

    let by_price = catalog.query(&SearchQuery::new().with_sort(SortOption::PriceAsc));
    assert_eq!(ids(&by_price.items), [5, 2, 4, 6, 7, 1, 3, 8]);

    let newest = catalog.query(&SearchQuery::new().with_sort(SortOption::Newest));
    assert_eq!(ids(&newest.items), [8, 7, 6, 5, 4, 3, 2, 1]);

    let featured = catalog.query(&SearchQuery::new());
    assert_eq!(ids(&featured.items), [1, 3, 6, 7, 8, 2, 4, 5]);
}

#[test]
fn test_query_combines_filters_and_paginates() {
    let catalog = catalog();
    let query = SearchQuery::new()
        .with_filter(Filter::categories([CategoryId::new(2), CategoryId::new(3)]))
        .with_sort(SortOption::PriceDesc)
        .with_pagination(2, 3);

    let results = catalog.query(&query);
    assert_eq!(results.total(), 4);
    assert_eq!(ids(&results.items), [2]);
    assert_eq!(results.pagination.total_pages, 2);
    assert!(results.pagination.has_prev);
    assert!(!results.pagination.has_next);
}

#[test]
fn test_query_page_out_of_range() {
    let catalog = catalog();

    let results = catalog.query(&SearchQuery::new().with_pagination(usize::MAX, 24));
    assert!(results.is_empty());
    assert_eq!(results.total(), 8);
    assert_eq!(results.pagination.start_item(), 0);
    assert_eq!(results.pagination.end_item(), 0);

    let past_end = catalog.query(&SearchQuery::new().with_pagination(3, 4));
    assert!(past_end.is_empty());
    assert_eq!(past_end.pagination.end_item(), 0);
}

#[test]
fn test_query_text_and_featured() {
    let catalog = catalog();
    let query = SearchQuery::new()
        .with_query("lehenga")
        .with_filter(Filter::Featured);
    assert_eq!(ids(&catalog.query(&query).items), [3, 8]);
}

#[test]
fn test_rejects_duplicate_ids() {
    let mut doc: CatalogDocument = serde_json::from_str(FIXTURE).unwrap();
    let copy = doc.products[0].clone();
    doc.products.push(copy);

    assert!(matches!(
        Catalog::from_document(doc),
        Err(CommerceError::DuplicateId { kind: "product", id: 1 })
    ));
}

#[test]
fn test_rejects_out_of_range_discount() {
    let mut doc: CatalogDocument = serde_json::from_str(FIXTURE).unwrap();
    doc.products[0].discount = Some(120);
    assert!(matches!(
        Catalog::from_document(doc),
        Err(CommerceError::InvalidDiscount { discount: 120, .. })
    ));
}

#[test]
fn test_variant_check() {
    let catalog = catalog();
    let kurta = catalog.require_product(ProductId::new(4)).unwrap();
    assert!(kurta.check_variant(Some("White"), Some("XXL")).is_ok());
    assert!(kurta.check_variant(None, None).is_ok());

    let err = kurta.check_variant(Some("Black"), None).unwrap_err();
    assert_eq!(err.to_string(), "Color 'Black' is not offered for Men's Kurta Pajama");
}
