//! Contract tests for the search surface

use reghive_core::ValueType;
use reghive_search::search;
use reghive_store::Registry;

fn fixture() -> Registry {
    let registry = Registry::with_standard_hives();
    registry
        .set_value("HKEY_CURRENT_USER\\Software", "Version", ValueType::Sz, "1.0.0")
        .unwrap();
    registry
        .set_value("HKEY_LOCAL_MACHINE\\SOFTWARE", "Vendor", ValueType::Sz, "Initech")
        .unwrap();
    registry
}

#[test]
fn results_are_deterministic_across_runs() {
    let registry = fixture();
    let first = search(&registry, "", "ve", true).unwrap();
    let second = search(&registry, "", "ve", true).unwrap();
    assert_eq!(first, second);
    assert!(!first.is_empty());
}

#[test]
fn hit_serializes_with_spans_for_transport() {
    let registry = fixture();
    let hits = search(&registry, "HKEY_CURRENT_USER", "version", true).unwrap();
    assert_eq!(hits.len(), 1);

    let json = serde_json::to_value(&hits[0]).unwrap();
    assert_eq!(json["location"], "HKEY_CURRENT_USER\\Software");
    assert_eq!(json["name"], "Version");
    assert_eq!(json["name_spans"][0]["start"], 0);
    assert_eq!(json["name_spans"][0]["end"], 7);
}

#[test]
fn search_root_scopes_the_traversal() {
    let registry = fixture();
    let hits = search(&registry, "HKEY_LOCAL_MACHINE", "1.0.0", true).unwrap();
    assert!(hits.is_empty());
}
