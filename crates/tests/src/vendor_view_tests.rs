use pretty_assertions::assert_eq;
use shared_types::{sample_vendors, ListCache, Vendor, VendorStats};

fn live_page() -> ListCache<Vendor> {
    ListCache::live(sample_vendors())
}

#[test]
fn approving_a_pending_store_moves_the_stat_buckets() {
    let mut cache = live_page();
    let target = cache.find(|v| v.status == "pending").cloned().unwrap();

    cache.update_where(
        |v| v.id == target.id,
        |v| v.status = "approved".to_string(),
    );

    let stats = VendorStats::from_list(cache.items());
    assert_eq!(stats.approved, 4);
    assert_eq!(stats.pending, 1);
    assert_eq!(stats.total, 5);
}

#[test]
fn rejecting_a_store_leaves_verification_untouched() {
    let mut cache = live_page();
    let target = cache
        .find(|v| v.name == "Fashion Hub Nigeria")
        .cloned()
        .unwrap();
    let verification_before = target.verification_status.clone();

    cache.update_where(
        |v| v.id == target.id,
        |v| v.status = "rejected".to_string(),
    );

    let after = cache.find(|v| v.id == target.id).unwrap();
    assert_eq!(after.status, "rejected");
    assert_eq!(after.verification_status, verification_before);
}

#[test]
fn verified_count_is_independent_of_approval_changes() {
    let mut cache = live_page();
    let before = VendorStats::from_list(cache.items()).verified;

    cache.update_where(
        |v| v.status == "pending",
        |v| v.status = "rejected".to_string(),
    );

    assert_eq!(VendorStats::from_list(cache.items()).verified, before);
}

#[test]
fn delete_removes_exactly_one_store() {
    let mut cache = live_page();
    let target = cache.items()[0].clone();

    cache.remove_where(|v| v.id == target.id);

    assert_eq!(cache.len(), 4);
    assert!(cache.find(|v| v.name == target.name).is_none());
}

#[test]
fn status_filter_combines_with_search() {
    let cache = live_page();
    let hits: Vec<_> = cache
        .items()
        .iter()
        .filter(|v| v.matches_query("jos") && v.matches_status("approved"))
        .collect();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Jos Marketplace");
}
