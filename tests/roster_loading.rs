//! Integration tests for loading rosters from disk

use std::fs;

use merc_collection::collection::CollectionStore;
use merc_collection::roster::{load_roster, load_roster_dir, load_roster_file};

#[test]
fn test_load_roster_directory() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path();
    fs::write(
        dir.join("anya.toml"),
        r#"
name = "Anya"

[abilities.Stealth]
tiers = [1, 2, 3]

[equipment.Blade]
tiers = [1, 2]
"#,
    )
    .unwrap();
    fs::write(
        dir.join("korr.json"),
        r#"{ "abilities": { "Rally": { "tiers": [1, 2, 3, 4, 5] } } }"#,
    )
    .unwrap();
    fs::write(dir.join("README.md"), "not a roster").unwrap();

    let roster = load_roster_dir(dir).unwrap();
    assert_eq!(roster.len(), 2);
    assert_eq!(roster["Anya"].ability_tier_count("Stealth"), Some(3));
    assert_eq!(roster["korr"].ability_tier_count("Rally"), Some(5));

    let mut store = CollectionStore::new();
    store.set_mercenaries(load_roster(dir).unwrap());
    assert_eq!(
        store.increment_ability("Anya", "Stealth").unwrap().tier(),
        Some(4)
    );
}

#[test]
fn test_load_roster_single_file() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("roster.json");
    fs::write(
        &path,
        r#"{ "Anya": { "equipment": { "Blade": { "tiers": [1, 2] } } } }"#,
    )
    .unwrap();

    let roster = load_roster_file(&path).unwrap();
    assert_eq!(roster["Anya"].item_tier_count("Blade"), Some(2));
    assert_eq!(load_roster(&path).unwrap(), roster);
}

#[test]
fn test_missing_roster_is_io_error() {
    let tmp = tempfile::tempdir().unwrap();
    assert!(load_roster(&tmp.path().join("nope.toml")).is_err());
}

#[test]
fn test_duplicate_names_in_directory_keep_last_file() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path();
    fs::write(
        dir.join("a_anya.toml"),
        "name = \"Anya\"\n[abilities.Stealth]\ntiers = [1]\n",
    )
    .unwrap();
    fs::write(
        dir.join("b_anya.json"),
        r#"{ "name": "Anya", "abilities": { "Stealth": { "tiers": [1, 2, 3] } } }"#,
    )
    .unwrap();

    let roster = load_roster_dir(dir).unwrap();
    assert_eq!(roster.len(), 1);
    assert_eq!(roster["Anya"].ability_tier_count("Stealth"), Some(3));
}
