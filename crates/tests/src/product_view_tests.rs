use pretty_assertions::assert_eq;
use shared_types::{sample_products, ListCache, Product, ProductStats, StockLevel};

fn live_page() -> ListCache<Product> {
    ListCache::live(sample_products())
}

#[test]
fn saving_an_edit_patches_every_form_field() {
    let mut cache = live_page();
    let target = cache
        .find(|p| p.name == "Premium Ankara Dress")
        .cloned()
        .unwrap();

    cache.update_where(
        |p| p.id == target.id,
        |p| {
            p.name = "Premium Ankara Gown".to_string();
            p.description = "Floor-length ankara gown".to_string();
            p.price = 17_500.0;
            p.category = "Clothing".to_string();
            p.stock = 30;
        },
    );

    let after = cache.find(|p| p.id == target.id).unwrap();
    assert_eq!(after.name, "Premium Ankara Gown");
    assert_eq!(after.price, 17_500.0);
    assert_eq!(after.stock, 30);
    // Fields outside the form are untouched.
    assert_eq!(after.vendor, target.vendor);
    assert_eq!(after.sales, target.sales);
}

#[test]
fn restocking_moves_the_row_between_stock_bands() {
    let mut cache = live_page();
    let target = cache
        .find(|p| p.stock_level() == StockLevel::OutOfStock)
        .cloned()
        .unwrap();

    let before = ProductStats::from_list(cache.items());
    assert_eq!(before.out_of_stock, 1);

    cache.update_where(|p| p.id == target.id, |p| p.stock = 40);

    let after = ProductStats::from_list(cache.items());
    assert_eq!(after.out_of_stock, 0);
    assert_eq!(
        cache.find(|p| p.id == target.id).unwrap().stock_level(),
        StockLevel::InStock
    );
}

#[test]
fn category_and_stock_filters_intersect_with_search() {
    let cache = live_page();
    let hits: Vec<_> = cache
        .items()
        .iter()
        .filter(|p| {
            p.matches_query("crafts")
                && p.matches_category("Accessories")
                && p.matches_stock("low_stock")
        })
        .collect();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Custom Embroidered Cap");
}

#[test]
fn delete_shrinks_list_and_stats_together() {
    let mut cache = live_page();
    let target = cache.items()[0].clone();

    cache.remove_where(|p| p.id == target.id);

    let stats = ProductStats::from_list(cache.items());
    assert_eq!(cache.len(), 6);
    assert_eq!(stats.total, 6);
}

#[test]
fn failed_save_leaves_the_listing_unchanged() {
    let mut cache = live_page();
    let before = cache.clone();
    let target = cache.items()[2].clone();

    let result: Result<(), &str> = Err("validation failed");
    if result.is_ok() {
        cache.update_where(|p| p.id == target.id, |p| p.price = 1.0);
    }

    assert_eq!(cache, before);
}
