//! Tests for the model registry.

use modelport::catalog::{normalize, ModelRegistry};
use modelport::client::RawModel;
use pretty_assertions::assert_eq;

fn record(id: &str, source: &str) -> modelport::catalog::ModelRecord {
    normalize(
        &RawModel {
            id: id.to_string(),
            object: "model".to_string(),
        },
        source,
    )
}

#[test]
fn registry_starts_empty() {
    let registry = ModelRegistry::new();
    assert!(registry.is_empty());
    assert_eq!(registry.len(), 0);
}

#[test]
fn add_models_appends_in_batch_order() {
    let registry = ModelRegistry::new();
    registry.add_models(vec![record("a", "s1"), record("b", "s1")]);

    let all = registry.all();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, "s1-a");
    assert_eq!(all[1].id, "s1-b");
}

#[test]
fn duplicate_id_replaces_in_place() {
    let registry = ModelRegistry::new();
    registry.add_models(vec![record("a", "s1"), record("b", "s1")]);
    registry.add_models(vec![record("a", "s1"), record("c", "s1")]);

    let all = registry.all();
    assert_eq!(all.len(), 3);
    // "a" kept its original position, "c" was appended
    assert_eq!(all[0].id, "s1-a");
    assert_eq!(all[1].id, "s1-b");
    assert_eq!(all[2].id, "s1-c");
}

#[test]
fn same_raw_id_from_two_sources_coexists() {
    let registry = ModelRegistry::new();
    registry.add_models(vec![record("a", "s1"), record("a", "s2")]);
    assert_eq!(registry.len(), 2);
}

#[test]
fn remove_source_drops_only_that_source() {
    let registry = ModelRegistry::new();
    registry.add_models(vec![record("a", "s1"), record("b", "s2"), record("c", "s1")]);
    registry.remove_source("s1");

    let all = registry.all();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].source_id, "s2");
}

#[test]
fn for_source_filters_by_provenance() {
    let registry = ModelRegistry::new();
    registry.add_models(vec![record("a", "s1"), record("b", "s2"), record("c", "s1")]);

    let s1 = registry.for_source("s1");
    assert_eq!(s1.len(), 2);
    assert!(s1.iter().all(|m| m.source_id == "s1"));
    assert!(registry.for_source("nope").is_empty());
}

#[test]
fn clones_share_storage() {
    let registry = ModelRegistry::new();
    let view = registry.clone();
    registry.add_models(vec![record("a", "s1")]);
    assert_eq!(view.len(), 1);
}
