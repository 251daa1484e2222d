//! Tests for the JSON-file order store.

use std::fs;

use taxo_model::{OrderDocument, scope_key};
use taxo_store::{JsonFileStore, OrderStore};

fn sample_document() -> OrderDocument {
    let mut document = OrderDocument::new();
    document.sectors = vec!["Healthcare".to_string(), "Finance".to_string()];
    document.countries = vec!["IE".to_string(), "US".to_string()];
    document.sets = vec!["Products".to_string(), "Geography".to_string()];
    document
        .groupings
        .insert("Geography".to_string(), vec!["NAICS".to_string(), "GICS".to_string()]);
    document.lists.insert(
        scope_key("Geography", "GICS"),
        vec!["Europe".to_string(), "Asia".to_string()],
    );
    document
}

#[test]
fn save_then_load_round_trips() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let store = JsonFileStore::new(dir.path().join("orders.json"));

    let document = sample_document();
    store.save(&document).expect("save document");
    let loaded = store.load().expect("load document");
    assert_eq!(loaded, document);
}

#[test]
fn missing_file_loads_the_empty_document() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let store = JsonFileStore::new(dir.path().join("never-saved.json"));
    let loaded = store.load().expect("load");
    assert!(loaded.is_empty());
}

#[test]
fn malformed_json_degrades_to_the_empty_document() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("orders.json");
    fs::write(&path, "{ not json").expect("write garbage");
    let store = JsonFileStore::new(&path);
    let loaded = store.load().expect("load tolerates garbage");
    assert!(loaded.is_empty());
}

#[test]
fn wrong_shape_degrades_to_the_empty_document() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("orders.json");
    // A non-array where an array is expected must not reach the session.
    fs::write(&path, r#"{"level1Order": 42}"#).expect("write wrong shape");
    let store = JsonFileStore::new(&path);
    let loaded = store.load().expect("load tolerates wrong shape");
    assert!(loaded.is_empty());
}

#[test]
fn unknown_fields_are_tolerated() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("orders.json");
    fs::write(
        &path,
        r#"{"level1Order": ["Geography"], "futureField": {"x": 1}}"#,
    )
    .expect("write document");
    let store = JsonFileStore::new(&path);
    let loaded = store.load().expect("load");
    assert_eq!(loaded.sets, ["Geography"]);
}

#[test]
fn save_replaces_the_whole_document() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let store = JsonFileStore::new(dir.path().join("orders.json"));

    store.save(&sample_document()).expect("first save");
    let mut smaller = OrderDocument::new();
    smaller.sets = vec!["Geography".to_string()];
    store.save(&smaller).expect("second save");

    let loaded = store.load().expect("load");
    assert_eq!(loaded, smaller);
    assert!(loaded.groupings.is_empty());
}

#[test]
fn save_creates_missing_parent_directories() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let store = JsonFileStore::new(dir.path().join("nested/deeper/orders.json"));
    store.save(&sample_document()).expect("save into new dirs");
    assert_eq!(store.load().expect("load"), sample_document());
}

#[test]
fn serialized_document_shape_is_stable() {
    let json = serde_json::to_string_pretty(&sample_document()).expect("serialize");
    insta::assert_snapshot!(json);
}
