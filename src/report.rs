// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Totals and groupings derived from the record collection. Every function
//! treats an empty slice as zero / no groups.

use crate::models::{Record, RecordType};
use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// Sum that stops at the `Decimal` bounds instead of overflowing.
pub fn sum_values<I: IntoIterator<Item = Decimal>>(values: I) -> Decimal {
    values
        .into_iter()
        .fold(Decimal::ZERO, |acc, v| acc.saturating_add(v))
}

pub fn total_by_type(records: &[Record], kind: RecordType) -> Decimal {
    sum_values(
        records
            .iter()
            .filter(|r| r.r#type == kind)
            .map(|r| r.value),
    )
}

/// Income minus expenses. May be negative; saturates at the `Decimal` bounds.
pub fn remaining_balance(records: &[Record]) -> Decimal {
    total_by_type(records, RecordType::Income)
        .saturating_sub(total_by_type(records, RecordType::Expense))
}

/// Expenses dated in the same calendar month and year as `today`.
pub fn month_expense_total(records: &[Record], today: NaiveDate) -> Decimal {
    sum_values(
        records
            .iter()
            .filter(|r| r.r#type == RecordType::Expense)
            .filter(|r| r.date.year() == today.year() && r.date.month() == today.month())
            .map(|r| r.value),
    )
}

/// Expense sums per category, largest first. Equal sums are ordered by name.
pub fn category_breakdown(records: &[Record]) -> Vec<(String, Decimal)> {
    let mut agg: HashMap<&str, Decimal> = HashMap::new();
    for r in records.iter().filter(|r| r.r#type == RecordType::Expense) {
        let sum = agg.entry(r.category.as_str()).or_insert(Decimal::ZERO);
        *sum = sum.saturating_add(r.value);
    }
    let mut items: Vec<(String, Decimal)> =
        agg.into_iter().map(|(c, v)| (c.to_string(), v)).collect();
    items.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    items
}

/// Expense sums per day, oldest first.
pub fn daily_series(records: &[Record]) -> Vec<(NaiveDate, Decimal)> {
    let mut map: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
    for r in records.iter().filter(|r| r.r#type == RecordType::Expense) {
        let sum = map.entry(r.date).or_insert(Decimal::ZERO);
        *sum = sum.saturating_add(r.value);
    }
    map.into_iter().collect()
}

/// The four headline numbers shown on the overview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total_expense: Decimal,
    pub total_income: Decimal,
    pub month_expense: Decimal,
    pub remaining_balance: Decimal,
}

impl Summary {
    pub fn compute(records: &[Record], today: NaiveDate) -> Self {
        let total_expense = total_by_type(records, RecordType::Expense);
        let total_income = total_by_type(records, RecordType::Income);
        Self {
            total_expense,
            total_income,
            month_expense: month_expense_total(records, today),
            remaining_balance: total_income.saturating_sub(total_expense),
        }
    }
}
