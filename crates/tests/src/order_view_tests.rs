use pretty_assertions::assert_eq;
use shared_types::{sample_orders, ListCache, Order, OrderStats, OrderStatus, ORDER_STATUSES};

fn live_page() -> ListCache<Order> {
    ListCache::live(sample_orders())
}

#[test]
fn fallback_page_is_exactly_seven_orders_spanning_all_statuses() {
    let cache = ListCache::from_fetch(Err("connection refused"), sample_orders);
    assert!(cache.is_sample());
    assert_eq!(cache.len(), 7);

    let stats = OrderStats::from_list(cache.items());
    assert!(stats.pending >= 1);
    assert!(stats.processing >= 1);
    assert!(stats.shipped >= 1);
    assert!(stats.completed >= 1);
    assert!(stats.cancelled >= 1);
}

#[test]
fn fallback_order_numbers_are_sequential() {
    let numbers: Vec<String> = sample_orders().iter().map(|o| o.order_number.clone()).collect();
    let expected: Vec<String> = (1234..=1240).map(|n| format!("ORD-{n}")).collect();
    assert_eq!(numbers, expected);
}

#[test]
fn picker_statuses_are_all_legal_transitions() {
    for status in ORDER_STATUSES {
        assert!(OrderStatus::from_str_opt(status).is_some());
    }
}

#[test]
fn status_change_patches_only_the_chosen_order() {
    let mut cache = live_page();
    let target = cache.find(|o| o.status == "pending").cloned().unwrap();

    cache.update_where(
        |o| o.id == target.id,
        |o| o.status = "processing".to_string(),
    );

    let stats = OrderStats::from_list(cache.items());
    assert_eq!(stats.pending, 0);
    assert_eq!(stats.processing, 3);
    assert_eq!(stats.total, 7);
}

#[test]
fn failed_status_change_leaves_the_pipeline_unchanged() {
    let mut cache = live_page();
    let before = OrderStats::from_list(cache.items());
    let target = cache.items()[0].clone();

    let result: Result<(), &str> = Err("order not found");
    if result.is_ok() {
        cache.update_where(|o| o.id == target.id, |o| o.status = "cancelled".to_string());
    }

    assert_eq!(OrderStats::from_list(cache.items()), before);
}

#[test]
fn search_reaches_number_customer_and_vendor() {
    let cache = live_page();

    let by_number = cache.items().iter().filter(|o| o.matches_query("1237")).count();
    assert_eq!(by_number, 1);

    let by_customer = cache.items().iter().filter(|o| o.matches_query("grace")).count();
    assert_eq!(by_customer, 1);

    let by_vendor = cache
        .items()
        .iter()
        .filter(|o| o.matches_query("traditional crafts"))
        .count();
    assert_eq!(by_vendor, 2);
}

#[test]
fn status_filter_combines_with_search() {
    let cache = live_page();
    let hits: Vec<_> = cache
        .items()
        .iter()
        .filter(|o| o.matches_query("afristyle") && o.matches_status("completed"))
        .collect();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].order_number, "ORD-1234");
}
