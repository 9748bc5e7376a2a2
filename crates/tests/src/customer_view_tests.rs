use pretty_assertions::assert_eq;
use shared_types::{
    sample_customers, toggled_status, Customer, CustomerStats, DataSource, ListCache,
};

fn live_page() -> ListCache<Customer> {
    ListCache::live(sample_customers())
}

#[test]
fn failed_fetch_shows_the_sample_page() {
    let cache = ListCache::from_fetch(Err("connection refused"), sample_customers);
    assert_eq!(cache.source(), DataSource::Sample);
    assert_eq!(cache.len(), 5);
}

#[test]
fn query_and_status_filters_intersect() {
    let cache = live_page();
    let hits: Vec<_> = cache
        .items()
        .iter()
        .filter(|c| c.matches_query("mohammed") && c.matches_status("inactive"))
        .collect();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Mohammed Ali");

    // Same query against the other status bucket finds nothing.
    let misses = cache
        .items()
        .iter()
        .filter(|c| c.matches_query("mohammed") && c.matches_status("active"))
        .count();
    assert_eq!(misses, 0);
}

#[test]
fn successful_toggle_patches_cache_and_stats() {
    let mut cache = live_page();
    let target = cache.find(|c| c.status == "inactive").cloned().unwrap();

    // Server call succeeded; reconcile the row locally.
    let new_status = toggled_status(&target.status).to_string();
    cache.update_where(|c| c.id == target.id, |c| c.status = new_status.clone());

    let stats = CustomerStats::from_list(cache.items());
    assert_eq!(stats.total, 5);
    assert_eq!(stats.active, 5);
    assert_eq!(stats.inactive, 0);
}

#[test]
fn failed_toggle_patches_nothing() {
    let mut cache = live_page();
    let before = cache.clone();
    let target = cache.items()[0].clone();

    let result: Result<(), &str> = Err("network down");
    if result.is_ok() {
        let new_status = toggled_status(&target.status).to_string();
        cache.update_where(|c| c.id == target.id, |c| c.status = new_status.clone());
    }

    assert_eq!(cache, before);
}

#[test]
fn delete_removes_the_row_and_shrinks_stats() {
    let mut cache = live_page();
    let target = cache.items()[0].clone();

    cache.remove_where(|c| c.id == target.id);

    assert_eq!(cache.len(), 4);
    assert!(cache.find(|c| c.id == target.id).is_none());
    assert_eq!(CustomerStats::from_list(cache.items()).total, 4);
}

#[test]
fn stats_come_from_the_unfiltered_list() {
    let cache = live_page();
    let filtered: Vec<Customer> = cache
        .items()
        .iter()
        .filter(|c| c.matches_status("inactive"))
        .cloned()
        .collect();

    // The stat cards always describe the whole page, not the filter hits.
    let stats = CustomerStats::from_list(cache.items());
    assert_eq!(filtered.len(), 1);
    assert_eq!(stats.total, 5);
}
