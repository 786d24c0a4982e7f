// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{EntryForm, Flash, Page, heading, overview, with_flash};
use crate::app::App;
use crate::errors::TrackerError;
use crate::models::{NewRecord, RecordType};
use anyhow::Result;
use chrono::NaiveDate;
use rust_decimal::Decimal;

pub fn handle(app: &mut App, sub: &clap::ArgMatches, today: NaiveDate) -> Result<String> {
    let form = EntryForm::from_matches(sub, "category");
    if form.is_blank() {
        return Ok(render(app));
    }
    let flash = submit(app, &form, today)?;
    let body = if flash.is_success() {
        overview::render(app, today)
    } else {
        render(app)
    };
    Ok(with_flash(&flash, body))
}

/// Validates the form and stores the expense. Validation problems come back
/// as an error flash with nothing written.
pub fn submit(app: &mut App, form: &EntryForm, today: NaiveDate) -> Result<Flash> {
    let new = match validate(app.settings.categories(), form, today) {
        Ok(new) => new,
        Err(e) => return Ok(e.into()),
    };
    app.records.add(new)?;
    Ok(Flash::Success("Expense added.".into()))
}

fn validate(
    categories: &[String],
    form: &EntryForm,
    today: NaiveDate,
) -> Result<NewRecord, TrackerError> {
    // Like the select box, an omitted category means the first configured one.
    // Matching ignores case; the configured spelling is what gets stored.
    let wanted = match form.category.as_deref() {
        Some(c) => c.trim(),
        None => categories.first().map(String::as_str).unwrap_or_default(),
    };
    let Some(category) = categories
        .iter()
        .find(|c| c.eq_ignore_ascii_case(wanted))
        .cloned()
    else {
        return Err(TrackerError::UnknownCategory(wanted.to_string()));
    };
    let value = form.amount()?;
    if value <= Decimal::ZERO {
        return Err(TrackerError::NonPositiveAmount);
    }
    let date = form.date_or(today)?;
    Ok(NewRecord {
        r#type: RecordType::Expense,
        category,
        description: form.description.clone().unwrap_or_default(),
        value,
        date,
    })
}

pub fn render(app: &App) -> String {
    let mut out = heading(Page::AddExpense);
    out.push_str("Categories:\n");
    for c in app.settings.categories() {
        out.push_str(&format!("  - {}\n", c));
    }
    out.push_str(
        "\nUsage: tally add-expense --category <CATEGORY> --amount <AMOUNT> \
         [--description <TEXT>] [--date YYYY-MM-DD]",
    );
    out
}
