// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_CATEGORIES: [&str; 8] = [
    "Housing",
    "Food",
    "Transportation",
    "Entertainment",
    "Medical",
    "Subscriptions",
    "Miscellaneous",
    "Savings",
];

pub const INCOME_SOURCES: [&str; 4] = ["Salary", "Business", "Gift", "Other"];

pub const DEFAULT_MONTHLY_BUDGET: i64 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordType {
    Expense,
    Income,
}

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::Expense => "expense",
            RecordType::Income => "income",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One income or expense entry as kept in the record file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: i64,
    pub r#type: RecordType,
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub value: Decimal,
    pub date: NaiveDate,
}

/// Everything needed to create a record except its id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRecord {
    pub r#type: RecordType,
    pub category: String,
    pub description: String,
    pub value: Decimal,
    pub date: NaiveDate,
}

impl NewRecord {
    pub fn into_record(self, id: i64) -> Record {
        Record {
            id,
            r#type: self.r#type,
            category: self.category,
            description: self.description,
            value: self.value,
            date: self.date,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    #[serde(with = "rust_decimal::serde::float")]
    pub monthly_budget: Decimal,
    pub categories: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            monthly_budget: Decimal::from(DEFAULT_MONTHLY_BUDGET),
            categories: DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect(),
        }
    }
}
