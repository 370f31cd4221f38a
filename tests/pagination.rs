//! Pagination behavior over domain collections.

mod common;

use cloudscan::domain::instance;
use cloudscan::paginate_slice;
use common::numbered_fleet;

#[test]
fn default_page_size_leaves_a_short_second_page() {
    let instances = numbered_fleet(25);

    let first = instance::list(&instances, 20, 1);
    assert_eq!(first.items.len(), 20);
    assert_eq!(first.total_count, 25);
    assert_eq!(first.next_page_token, "2");

    let second = instance::list(&instances, 20, 2);
    assert_eq!(second.items.len(), 5);
    assert_eq!(second.items[0].display_name, "node-020");
    assert_eq!(second.items[4].display_name, "node-024");
    assert_eq!(second.next_page_token, "");
}

#[test]
fn token_chain_walks_the_whole_fleet_without_gaps() {
    let instances = numbered_fleet(23);
    let mut seen = Vec::new();
    let mut page_number = 1;
    loop {
        let page = instance::list(&instances, 5, page_number);
        assert!(page.items.len() <= 5);
        seen.extend(page.items.iter().map(|i| i.display_name.clone()));
        if page.next_page_token.is_empty() {
            break;
        }
        page_number = page.next_page_token.parse().unwrap();
    }
    let expected: Vec<String> = instances.iter().map(|i| i.display_name.clone()).collect();
    assert_eq!(seen, expected);
}

#[test]
fn page_past_the_end_is_an_empty_page() {
    let instances = numbered_fleet(3);
    let page = instance::list(&instances, 2, 9);
    assert!(page.is_empty());
    assert_eq!(page.total_count, 3);
    assert_eq!(page.current_page, 9);
    assert_eq!(page.next_page_token, "");
}

#[test]
fn listing_preserves_snapshot_order_within_a_page() {
    let instances = numbered_fleet(10);
    let page = instance::list(&instances, 4, 2);
    let names: Vec<&str> = page.items.iter().map(|i| i.display_name.as_str()).collect();
    assert_eq!(names, vec!["node-004", "node-005", "node-006", "node-007"]);
}

#[test]
fn search_results_page_like_any_other_collection() {
    let instances = numbered_fleet(12);
    let found = instance::search(&instances, "node").unwrap();
    assert_eq!(found.len(), 12);

    let owned: Vec<_> = found.into_iter().cloned().collect();
    let page = paginate_slice(&owned, 5, 3);
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.next_page_token, "");
}
