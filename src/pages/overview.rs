// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{Flash, Page, heading, with_flash};
use crate::app::App;
use crate::export::export_csv;
use crate::records::RecordTable;
use crate::report::Summary;
use crate::utils::{fmt_money, pretty_table};
use anyhow::Result;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

pub const EMPTY_MESSAGE: &str =
    "No expenses added yet. Go to 'Add Expense' to add your first entry.";

pub fn handle(app: &mut App, sub: &clap::ArgMatches, today: NaiveDate) -> Result<String> {
    let mut flashes = Vec::new();
    if let Some(id) = sub.get_one::<i64>("delete") {
        flashes.push(delete(app, *id)?);
    }

    let table = app.records.to_table().sorted_by_date_desc();
    if let Some(out) = sub.get_one::<PathBuf>("export") {
        flashes.push(export(&table, out)?);
    }

    let body = if sub.get_flag("json") {
        serde_json::to_string_pretty(table.rows())?
    } else {
        render(app, today)
    };
    Ok(flashes
        .iter()
        .rev()
        .fold(body, |acc, f| with_flash(f, acc)))
}

pub fn delete(app: &mut App, id: i64) -> Result<Flash> {
    let removed = app.records.delete_by_id(id)?;
    Ok(if removed > 0 {
        Flash::Success("Deleted entry.".into())
    } else {
        Flash::Error("Could not delete entry.".into())
    })
}

fn export(table: &RecordTable, out: &Path) -> Result<Flash> {
    if table.is_empty() {
        return Ok(Flash::Info("Nothing to export.".into()));
    }
    export_csv(table, out)?;
    Ok(Flash::Success(format!(
        "Exported {} entries to {}",
        table.len(),
        out.display()
    )))
}

pub fn render(app: &App, today: NaiveDate) -> String {
    let mut out = heading(Page::Overview);
    let table = app.records.to_table().sorted_by_date_desc();
    if table.is_empty() {
        out.push_str(&Flash::Info(EMPTY_MESSAGE.into()).to_string());
        return out;
    }

    let s = Summary::compute(table.rows(), today);
    let metrics = pretty_table(
        &[
            "Total Expenses",
            "Total Income",
            "Monthly Expenses",
            "Remaining Balance",
        ],
        vec![vec![
            fmt_money(s.total_expense),
            fmt_money(s.total_income),
            fmt_money(s.month_expense),
            fmt_money(s.remaining_balance),
        ]],
    );
    out.push_str(&format!("{}\n\nExpense History\n", metrics));

    let rows = table
        .rows()
        .iter()
        .map(|r| {
            vec![
                r.id.to_string(),
                fmt_money(r.value),
                r.r#type.to_string(),
                r.category.clone(),
                r.description.clone(),
                r.date.format("%Y-%m-%d").to_string(),
            ]
        })
        .collect();
    out.push_str(
        &pretty_table(
            &["Id", "Amount", "Type", "Category", "Description", "Date"],
            rows,
        )
        .to_string(),
    );
    out
}
