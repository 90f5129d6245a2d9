//! File-level config reload scenarios: self-healing, pruning, and the
//! reload fixed point.

use std::fs;
use std::path::{Path, PathBuf};

use deathchest_core::DeathChestType;
use deathchest_testkit::temp_path;
use proptest::prelude::*;
use serde_json::Value;
use vanilla_deathchest::{Config, ConfigStore};

fn config_file(tag: &str) -> PathBuf {
    temp_path(tag).join("vanilladeathchest.json")
}

fn cleanup(path: &Path) {
    if let Some(dir) = path.parent() {
        let _ = fs::remove_dir_all(dir);
    }
}

#[test]
fn missing_file_is_created_with_defaults() {
    let path = config_file("missing");
    let store = ConfigStore::new(&path);

    store.reload();

    assert_eq!(*store.get(), Config::default());
    let written: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(written["spawning"]["chest_type"]["value"], "single_or_double");
    assert_eq!(written["protection"]["period"]["value"], 120_000);
    cleanup(&path);
}

#[test]
fn written_file_uses_tab_indentation_and_trailing_newline() {
    let path = config_file("format");
    let store = ConfigStore::new(&path);

    store.reload();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("{\n\t\"misc\""));
    assert!(text.ends_with("}\n"));
    assert!(!text.contains("  \""));
    cleanup(&path);
}

#[test]
fn reload_reaches_a_fixed_point_after_one_pass() {
    let path = config_file("fixed_point");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(
        &path,
        r#"{
            // a comment that will not survive the rewrite
            "misc": {
                "drop_death_chests": {"value": true},
                "unknown": {"value": 1}
            },
            "protection": {"period": {"value": -200}},
            "junk": [1, 2, 3]
        }"#,
    )
    .unwrap();
    let store = ConfigStore::new(&path);

    store.reload();
    let first = fs::read(&path).unwrap();
    let first_config = store.get();

    store.reload();
    let second = fs::read(&path).unwrap();

    assert_eq!(first, second);
    assert_eq!(*first_config, *store.get());
    cleanup(&path);
}

#[test]
fn comments_are_tolerated_on_read() {
    let path = config_file("comments");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(
        &path,
        "{\n// line comment\n\"spawning\": {/* inline */ \"chest_type\": {\"value\": \"shulker_box\"}}\n}",
    )
    .unwrap();
    let store = ConfigStore::new(&path);

    store.reload();

    assert_eq!(store.get().spawning.chest_type, DeathChestType::ShulkerBox);
    // The rewrite is pure JSON again.
    let text = fs::read_to_string(&path).unwrap();
    assert!(!text.contains("//"));
    assert!(!text.contains("/*"));
    cleanup(&path);
}

#[test]
fn malformed_file_falls_back_to_defaults_and_heals() {
    let path = config_file("malformed");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "{{{ not json").unwrap();
    let store = ConfigStore::new(&path);

    store.reload();

    assert_eq!(*store.get(), Config::default());
    // The broken file was replaced by the canonical document.
    let written: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert!(written.is_object());
    cleanup(&path);
}

#[test]
fn non_object_document_falls_back_to_defaults() {
    let path = config_file("non_object");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "[1, 2, 3]").unwrap();
    let store = ConfigStore::new(&path);

    store.reload();

    assert_eq!(*store.get(), Config::default());
    cleanup(&path);
}

#[test]
fn out_of_range_integers_are_clamped_in_file_and_memory() {
    let path = config_file("clamp");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(
        &path,
        r#"{
            "protection": {"period": {"value": -5}},
            "spawning": {"location_search_radius": {"value": 9999}}
        }"#,
    )
    .unwrap();
    let store = ConfigStore::new(&path);

    store.reload();

    let config = store.get();
    assert_eq!(config.protection.period, 0);
    assert_eq!(config.spawning.location_search_radius, 64);

    let written: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(written["protection"]["period"]["value"], 0);
    assert_eq!(written["spawning"]["location_search_radius"]["value"], 64);
    cleanup(&path);
}

#[test]
fn unknown_keys_are_pruned_at_both_levels() {
    let path = config_file("prune");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(
        &path,
        r#"{
            "stray_category": {"description": ["x"], "value": true},
            "misc": {"stray_property": {"value": 3}}
        }"#,
    )
    .unwrap();
    let store = ConfigStore::new(&path);

    store.reload();

    let written: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let object = written.as_object().unwrap();
    assert!(!object.contains_key("stray_category"));
    assert!(!written["misc"].as_object().unwrap().contains_key("stray_property"));
    // Every schema category is present.
    for key in ["misc", "protection", "spawning"] {
        assert!(object.contains_key(key), "{key} missing");
    }
    cleanup(&path);
}

#[test]
fn stale_descriptions_are_rewritten() {
    let path = config_file("descriptions");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(
        &path,
        r#"{"misc": {"description": ["stale"], "drop_death_chests": {"description": ["old"], "value": true}}}"#,
    )
    .unwrap();
    let store = ConfigStore::new(&path);

    store.reload();

    let written: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(
        written["misc"]["description"][0],
        "Options that don't fit into any other categories."
    );
    assert_eq!(
        written["misc"]["drop_death_chests"]["description"][0],
        "Whether death chests should be dropped when broken."
    );
    // The valid stored value still survives the description rewrite.
    assert!(store.get().misc.drop_death_chests);
    cleanup(&path);
}

#[test]
fn enum_values_are_matched_case_sensitively() {
    let path = config_file("enum_case");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(
        &path,
        r#"{"spawning": {"chest_type": {"value": "SHULKER_BOX"}}}"#,
    )
    .unwrap();
    let store = ConfigStore::new(&path);

    store.reload();

    assert_eq!(
        store.get().spawning.chest_type,
        DeathChestType::SingleOrDouble
    );
    cleanup(&path);
}

#[test]
fn property_node_missing_value_key_gets_the_default() {
    let path = config_file("missing_value");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(
        &path,
        r#"{"protection": {"enabled": {"description": ["no value here"]}}}"#,
    )
    .unwrap();
    let store = ConfigStore::new(&path);

    store.reload();

    assert!(store.get().protection.enabled);
    let written: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(written["protection"]["enabled"]["value"], true);
    cleanup(&path);
}

// Arbitrary JSON documents, two levels deep — enough to hit every resolve
// branch with valid, invalid, and missing shapes.
fn arb_json(depth: u32) -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        "[a-z_%d ]{0,24}".prop_map(Value::String),
        Just(Value::String("single_only".to_string())),
        Just(Value::String("shulker_box".to_string())),
    ];
    leaf.prop_recursive(depth, 64, 8, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-z_]{1,32}", inner, 0..6).prop_map(|map| {
                Value::Object(map.into_iter().collect())
            }),
        ]
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn reload_is_idempotent_for_arbitrary_input(document in arb_json(3)) {
        let path = config_file("proptest");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, serde_json::to_string(&document).unwrap()).unwrap();
        let store = ConfigStore::new(&path);

        store.reload();
        let first = fs::read(&path).unwrap();
        store.reload();
        let second = fs::read(&path).unwrap();

        prop_assert_eq!(first, second);

        // Whatever the input, the adopted values satisfy their predicates.
        let config = store.get();
        prop_assert!((1..=64).contains(&config.spawning.location_search_radius));
        cleanup(&path);
    }
}
