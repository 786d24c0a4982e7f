// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{NewRecord, Record, RecordType};
use crate::storage;
use anyhow::Result;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::path::PathBuf;

/// 1 for an empty collection, otherwise one past the largest id.
pub fn next_id(records: &[Record]) -> i64 {
    records.iter().map(|r| r.id).max().map_or(1, |m| m + 1)
}

// On-disk shape before backfill: older files may lack ids.
#[derive(Deserialize)]
struct StoredRecord {
    id: Option<i64>,
    r#type: RecordType,
    category: String,
    #[serde(default)]
    description: String,
    #[serde(with = "rust_decimal::serde::float")]
    value: Decimal,
    date: NaiveDate,
}

/// Assigns ids to stored records that lack one, continuing after the largest
/// id in the file. Returns the records and whether anything was assigned.
fn backfill(stored: Vec<StoredRecord>) -> (Vec<Record>, bool) {
    let mut out = Vec::with_capacity(stored.len());
    let mut changed = false;
    let mut issued = stored.iter().filter_map(|s| s.id).max().unwrap_or(0);
    for s in stored {
        let id = match s.id {
            Some(id) => id,
            None => {
                changed = true;
                issued += 1;
                issued
            }
        };
        out.push(Record {
            id,
            r#type: s.r#type,
            category: s.category,
            description: s.description,
            value: s.value,
            date: s.date,
        });
    }
    (out, changed)
}

/// In-memory record collection written through to a single JSON file.
#[derive(Debug)]
pub struct RecordStore {
    path: PathBuf,
    records: Vec<Record>,
}

impl RecordStore {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let outcome = storage::load::<Vec<StoredRecord>>(&path, Vec::new());
        let (records, changed) = backfill(outcome.into_inner());
        let store = Self { path, records };
        if changed {
            tracing::info!(path = %store.path.display(), "backfilled missing record ids");
            store.persist()?;
        }
        Ok(store)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn next_id(&self) -> i64 {
        next_id(&self.records)
    }

    pub fn get(&self, id: i64) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Appends a record with a fresh id and rewrites the file. No validation
    /// happens here; pages check amounts and categories first.
    pub fn add(&mut self, new: NewRecord) -> Result<Record> {
        let record = new.into_record(self.next_id());
        self.records.push(record.clone());
        self.persist()?;
        tracing::info!(id = record.id, kind = %record.r#type, "record added");
        Ok(record)
    }

    /// Removes every record with `id` and returns how many went. 0 means not found.
    pub fn delete_by_id(&mut self, id: i64) -> Result<usize> {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        self.persist()?;
        let removed = before - self.records.len();
        tracing::info!(id, removed, "delete by id");
        Ok(removed)
    }

    pub fn to_table(&self) -> RecordTable {
        RecordTable {
            rows: self.records.clone(),
        }
    }

    fn persist(&self) -> Result<()> {
        storage::save(&self.path, &self.records)
    }
}

/// Tabular snapshot of the records used by views, aggregation and export.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordTable {
    rows: Vec<Record>,
}

impl RecordTable {
    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Newest first; entries on the same day keep insertion order.
    pub fn sorted_by_date_desc(mut self) -> Self {
        self.rows.sort_by(|a, b| b.date.cmp(&a.date));
        self
    }
}
