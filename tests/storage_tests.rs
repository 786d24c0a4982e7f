// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use serde_json::{Value, json};
use tally::models::Settings;
use tally::storage::{self, LoadOutcome};
use tempfile::tempdir;

#[test]
fn missing_file_yields_default() {
    let dir = tempdir().unwrap();
    let out = storage::load(&dir.path().join("nope.json"), vec![1, 2, 3]);
    assert_eq!(out, LoadOutcome::Missing(vec![1, 2, 3]));
}

#[test]
fn corrupt_file_is_distinguished_from_missing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("records.json");
    std::fs::write(&path, "{ not json").unwrap();

    let out = storage::load(&path, Settings::default());
    match &out {
        LoadOutcome::Corrupt { data, reason } => {
            assert_eq!(data, &Settings::default());
            assert!(!reason.is_empty());
        }
        other => panic!("expected corrupt outcome, got {:?}", other),
    }
    assert!(!out.is_loaded());
    assert_eq!(out.into_inner(), Settings::default());
}

#[test]
fn save_writes_four_space_indented_json() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.json");
    storage::save(&path, &json!({"monthly_budget": 500.0, "categories": ["Food"]})).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("\n    \"categories\": [\n        \"Food\"\n    ]"));
    assert!(!dir.path().join("nested").join("settings.json.tmp").exists());

    let back: LoadOutcome<Value> = storage::load(&path, Value::Null);
    assert!(back.is_loaded());
    assert_eq!(back.into_inner()["monthly_budget"], json!(500.0));
}

#[test]
fn save_replaces_whole_document() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("records.json");
    storage::save(&path, &vec![1, 2, 3]).unwrap();
    storage::save(&path, &vec![9]).unwrap();
    let back: Vec<i32> = storage::load(&path, Vec::new()).into_inner();
    assert_eq!(back, vec![9]);
}
