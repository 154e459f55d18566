//! Persistence tests: pantry, user dictionary and config survive a
//! save → load cycle, and the pantry accumulates across sessions.

use std::sync::Arc;

use reizoko::config::ReizokoConfig;
use reizoko::dictionary::MemoryDictionary;
use reizoko::extract::{Extractor, Lexicon};
use reizoko::pantry::{ConsumeOutcome, Pantry};
use reizoko::paths::ReizokoPaths;

fn extractor() -> Extractor {
    Extractor::new(Arc::new(Lexicon::default_japanese()))
}

#[test]
fn pantry_accumulates_across_sessions() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("pantry.json");
    let ex = extractor();

    // First session: store two items.
    {
        let mut pantry = Pantry::load(&path).unwrap();
        assert!(pantry.is_empty());
        pantry.upsert_all(&ex.extract("卵4個、鶏肉2枚").ingredients).unwrap();
        pantry.save(&path).unwrap();
    }

    // Second session: more eggs merge, a new unit stays separate.
    {
        let mut pantry = Pantry::load(&path).unwrap();
        assert_eq!(pantry.len(), 2);
        pantry.upsert_all(&ex.extract("卵2個、鶏肉300g").ingredients).unwrap();
        pantry.save(&path).unwrap();
    }

    let pantry = Pantry::load(&path).unwrap();
    assert_eq!(pantry.len(), 3);
    assert_eq!(pantry.get("卵", "個").unwrap().quantity, 6.0);
    assert_eq!(pantry.get("鶏肉", "枚").unwrap().quantity, 2.0);
    assert_eq!(pantry.get("鶏肉", "g").unwrap().quantity, 300.0);
}

#[test]
fn consumption_persists() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("data").join("pantry.json");

    let mut pantry = Pantry::new();
    pantry.upsert_all(&extractor().extract("トマト3個").ingredients).unwrap();
    pantry.save(&path).unwrap();

    let mut pantry = Pantry::load(&path).unwrap();
    assert_eq!(pantry.consume("トマト", None, 3.0).unwrap(), ConsumeOutcome::Removed);
    pantry.save(&path).unwrap();

    let reloaded = Pantry::load(&path).unwrap();
    assert!(reloaded.is_empty());
    assert_eq!(reloaded, pantry);
}

#[test]
fn corrupt_pantry_is_an_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("pantry.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(Pantry::load(&path).is_err());
}

#[test]
fn dictionary_survives_restart() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("dictionary.toml");

    let mut dict = MemoryDictionary::load(&path).unwrap();
    assert!(dict.is_empty());
    dict.insert("卵", "卵・乳製品");
    dict.insert("おでん鍋セット", "加工食品");
    dict.save(&path).unwrap();

    let reloaded = MemoryDictionary::load(&path).unwrap();
    assert_eq!(reloaded, dict);
    assert_eq!(reloaded.get("卵"), Some("卵・乳製品"));
}

#[test]
fn configured_paths_drive_the_extractor() {
    let dir = tempfile::TempDir::new().unwrap();
    let paths = ReizokoPaths::rooted_at(dir.path());
    paths.ensure_dirs().unwrap();

    let lexicon_path = dir.path().join("lexicon.toml");
    std::fs::write(
        &lexicon_path,
        "[[foods]]\nname = \"おでん鍋セット\"\ncategory = \"加工食品\"\n",
    )
    .unwrap();
    let dict_path = dir.path().join("custom").join("dict.toml");
    let mut dict = MemoryDictionary::new();
    dict.insert("卵", "卵");
    dict.save(&dict_path).unwrap();

    let cfg = ReizokoConfig {
        lexicon_path: Some(lexicon_path),
        dictionary_path: Some(dict_path),
        ..Default::default()
    };
    cfg.save(&paths.config_file()).unwrap();

    let cfg = ReizokoConfig::load_or_default(&paths.config_file()).unwrap();
    let ex = cfg.build_extractor(&paths).unwrap();
    let result = ex.extract("おでん鍋セット、卵");
    assert_eq!(result.ingredients[0].category, "加工食品");
    assert_eq!(result.ingredients[1].category, "卵");
}

#[test]
fn missing_lexicon_file_is_reported() {
    let dir = tempfile::TempDir::new().unwrap();
    let paths = ReizokoPaths::rooted_at(dir.path());
    let cfg = ReizokoConfig {
        lexicon_path: Some(dir.path().join("absent.toml")),
        ..Default::default()
    };
    assert!(cfg.build_extractor(&paths).is_err());
}
