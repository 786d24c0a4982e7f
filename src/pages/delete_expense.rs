// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{Flash, Page, heading, with_flash};
use crate::app::App;
use crate::models::Record;
use crate::utils::fmt_money;
use anyhow::Result;

pub const EMPTY_MESSAGE: &str = "No expenses to delete.";

pub fn handle(app: &mut App, sub: &clap::ArgMatches) -> Result<String> {
    match sub.get_one::<i64>("id") {
        Some(id) => {
            let flash = delete(app, *id)?;
            Ok(with_flash(&flash, render(app)))
        }
        None => Ok(render(app)),
    }
}

pub fn delete(app: &mut App, id: i64) -> Result<Flash> {
    let removed = app.records.delete_by_id(id)?;
    Ok(if removed > 0 {
        Flash::Success("Deleted selected expense.".into())
    } else {
        Flash::Error("Could not delete the selected expense.".into())
    })
}

/// `"7 | 2025-03-02 - Food - ₹120.00"`
pub fn option_label(r: &Record) -> String {
    format!(
        "{} | {} - {} - {}",
        r.id,
        r.date.format("%Y-%m-%d"),
        r.category,
        fmt_money(r.value)
    )
}

/// Selectable entries, newest first.
pub fn options(app: &App) -> Vec<String> {
    app.records
        .to_table()
        .sorted_by_date_desc()
        .rows()
        .iter()
        .map(option_label)
        .collect()
}

pub fn render(app: &App) -> String {
    let mut out = heading(Page::DeleteExpense);
    let options = options(app);
    if options.is_empty() {
        out.push_str(&Flash::Info(EMPTY_MESSAGE.into()).to_string());
        return out;
    }
    for o in options {
        out.push_str(&o);
        out.push('\n');
    }
    out.push_str("\nUsage: tally delete-expense <ID>");
    out
}
