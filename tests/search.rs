//! End-to-end search behavior over the instance domain.

mod common;

use cloudscan::domain::instance;
use common::fleet;

#[test]
fn name_prefix_finds_every_frontend_and_nothing_else() {
    let instances = fleet();
    let found = instance::search(&instances, "web").unwrap();
    let names: Vec<&str> = found.iter().map(|i| i.display_name.as_str()).collect();
    assert_eq!(names, vec!["web-frontend-01", "web-frontend-02"]);
}

#[test]
fn full_ocid_returns_only_its_record() {
    let instances = fleet();
    let found = instance::search(&instances, "ocid1.instance.oc1..cccc3333").unwrap();
    let names: Vec<&str> = found.iter().map(|i| i.display_name.as_str()).collect();
    assert_eq!(names, vec!["db-primary-01"]);
}

#[test]
fn ocid_prefix_matches_the_whole_fleet_in_order() {
    let instances = fleet();
    let found = instance::search(&instances, "ocid1.instance").unwrap();
    let names: Vec<&str> = found.iter().map(|i| i.display_name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "web-frontend-01",
            "web-frontend-02",
            "db-primary-01",
            "cache-node-01",
            "batch-worker-01",
        ]
    );
}

#[test]
fn exact_ip_outranks_a_near_miss_ip() {
    let instances = fleet();
    let found = instance::search(&instances, "10.0.1.11").unwrap();
    // 10.0.1.12 is one edit away and still surfaces, but after the exact hit.
    assert_eq!(found[0].display_name, "web-frontend-01");
    assert!(found
        .iter()
        .any(|i| i.display_name == "web-frontend-02"));
}

#[test]
fn ip_fragment_narrows_to_its_subnet() {
    let instances = fleet();
    let found = instance::search(&instances, "10.0.1").unwrap();
    let names: Vec<&str> = found.iter().map(|i| i.display_name.as_str()).collect();
    assert_eq!(names, vec!["web-frontend-01", "web-frontend-02"]);
}

#[test]
fn tag_value_typo_still_finds_the_tagged_record() {
    let instances = fleet();
    let found = instance::search(&instances, "platfrom").unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].display_name, "db-primary-01");
}

#[test]
fn unmatched_pattern_yields_empty_not_error() {
    let instances = fleet();
    let found = instance::search(&instances, "xyzzy-quux").unwrap();
    assert!(found.is_empty());
}

#[test]
fn repeated_searches_return_identical_order() {
    // "prod" prefix-hits the env tag on some records and the VCN name on all
    // of them, so scores differ across the fleet.
    let instances = fleet();
    let first: Vec<String> = instance::search(&instances, "prod")
        .unwrap()
        .iter()
        .map(|i| i.display_name.clone())
        .collect();
    assert!(!first.is_empty());
    for _ in 0..10 {
        let again: Vec<String> = instance::search(&instances, "prod")
            .unwrap()
            .iter()
            .map(|i| i.display_name.clone())
            .collect();
        assert_eq!(again, first);
    }
}

#[test]
fn results_never_repeat_a_record() {
    // "prod" hits both the tag value and the VCN name of the prod records.
    let instances = fleet();
    let found = instance::search(&instances, "prod").unwrap();
    let mut names: Vec<&str> = found.iter().map(|i| i.display_name.as_str()).collect();
    let before = names.len();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), before);
}

#[test]
fn searching_an_empty_fleet_matches_nothing() {
    let found = instance::search(&[], "web").unwrap();
    assert!(found.is_empty());
}
