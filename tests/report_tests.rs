// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;
use tally::models::{Record, RecordType};
use tally::report::{
    Summary, category_breakdown, daily_series, month_expense_total, remaining_balance,
    sum_values, total_by_type,
};

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn rec(id: i64, kind: RecordType, category: &str, value: &str, date: NaiveDate) -> Record {
    Record {
        id,
        r#type: kind,
        category: category.into(),
        description: String::new(),
        value: dec(value),
        date,
    }
}

#[test]
fn empty_collection_aggregates_to_zero() {
    assert_eq!(total_by_type(&[], RecordType::Expense), Decimal::ZERO);
    assert_eq!(total_by_type(&[], RecordType::Income), Decimal::ZERO);
    assert_eq!(remaining_balance(&[]), Decimal::ZERO);
    assert_eq!(month_expense_total(&[], day(2025, 5, 1)), Decimal::ZERO);
    assert!(category_breakdown(&[]).is_empty());
    assert!(daily_series(&[]).is_empty());
}

#[test]
fn breakdown_merges_and_sorts_descending() {
    let d = day(2025, 4, 2);
    let records = vec![
        rec(1, RecordType::Expense, "A", "30", d),
        rec(2, RecordType::Expense, "B", "50", d),
        rec(3, RecordType::Expense, "A", "20", d),
        rec(4, RecordType::Income, "Salary", "999", d),
        rec(5, RecordType::Expense, "C", "70", d),
    ];
    assert_eq!(
        category_breakdown(&records),
        vec![
            ("C".to_string(), dec("70")),
            ("A".to_string(), dec("50")),
            ("B".to_string(), dec("50")),
        ]
    );
}

#[test]
fn monthly_total_excludes_other_months() {
    let today = day(2025, 6, 18);
    let records = vec![
        rec(1, RecordType::Expense, "Food", "10", day(2025, 6, 1)),
        rec(2, RecordType::Expense, "Food", "15.25", day(2025, 6, 30)),
        rec(3, RecordType::Expense, "Food", "100", day(2025, 5, 31)),
        rec(4, RecordType::Expense, "Food", "200", day(2024, 6, 10)),
        rec(5, RecordType::Income, "Salary", "500", day(2025, 6, 2)),
    ];
    assert_eq!(month_expense_total(&records, today), dec("25.25"));
    assert_eq!(total_by_type(&records, RecordType::Expense), dec("325.25"));
}

#[test]
fn balance_can_go_negative() {
    let d = day(2025, 1, 1);
    let records = vec![
        rec(1, RecordType::Income, "Gift", "100", d),
        rec(2, RecordType::Expense, "Housing", "250.50", d),
    ];
    assert_eq!(remaining_balance(&records), dec("-150.50"));

    let s = Summary::compute(&records, d);
    assert_eq!(s.total_income, dec("100"));
    assert_eq!(s.total_expense, dec("250.5"));
    assert_eq!(s.month_expense, dec("250.5"));
    assert_eq!(s.remaining_balance, dec("-150.5"));
}

#[test]
fn daily_series_groups_by_day_ascending() {
    let records = vec![
        rec(1, RecordType::Expense, "Food", "5", day(2025, 2, 3)),
        rec(2, RecordType::Expense, "Food", "7", day(2025, 1, 9)),
        rec(3, RecordType::Expense, "Medical", "3", day(2025, 2, 3)),
        rec(4, RecordType::Income, "Salary", "40", day(2025, 1, 1)),
    ];
    assert_eq!(
        daily_series(&records),
        vec![(day(2025, 1, 9), dec("7")), (day(2025, 2, 3), dec("8"))]
    );
}

#[test]
fn oversized_totals_saturate_instead_of_panicking() {
    let d = day(2025, 6, 1);
    let big = "50000000000000000000000000000";
    let records = vec![
        rec(1, RecordType::Expense, "Food", big, d),
        rec(2, RecordType::Expense, "Food", big, d),
        rec(3, RecordType::Income, "Salary", big, d),
    ];
    let s = Summary::compute(&records, d);
    assert_eq!(s.total_expense, Decimal::MAX);
    assert_eq!(s.month_expense, Decimal::MAX);
    assert_eq!(s.remaining_balance, dec(big) - Decimal::MAX);
    assert_eq!(remaining_balance(&records), s.remaining_balance);
    assert_eq!(category_breakdown(&records), vec![("Food".to_string(), Decimal::MAX)]);
    assert_eq!(daily_series(&records), vec![(d, Decimal::MAX)]);
    assert_eq!(sum_values([Decimal::MIN, Decimal::MIN]), Decimal::MIN);
}
