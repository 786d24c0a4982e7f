// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{EntryForm, Flash, Page, heading, overview, with_flash};
use crate::app::App;
use crate::errors::TrackerError;
use crate::models::{INCOME_SOURCES, NewRecord, RecordType};
use anyhow::Result;
use chrono::NaiveDate;
use rust_decimal::Decimal;

pub fn handle(app: &mut App, sub: &clap::ArgMatches, today: NaiveDate) -> Result<String> {
    let form = EntryForm::from_matches(sub, "source");
    if form.is_blank() {
        return Ok(render());
    }
    let flash = submit(app, &form, today)?;
    let body = if flash.is_success() {
        overview::render(app, today)
    } else {
        render()
    };
    Ok(with_flash(&flash, body))
}

/// Stores an income entry. Zero is accepted, negative amounts are not.
pub fn submit(app: &mut App, form: &EntryForm, today: NaiveDate) -> Result<Flash> {
    let new = match validate(form, today) {
        Ok(new) => new,
        Err(e) => return Ok(e.into()),
    };
    app.records.add(new)?;
    Ok(Flash::Success("Income added successfully!".into()))
}

fn validate(form: &EntryForm, today: NaiveDate) -> Result<NewRecord, TrackerError> {
    let source = form
        .category
        .as_deref()
        .map(str::trim)
        .unwrap_or(INCOME_SOURCES[0]);
    let Some(source) = INCOME_SOURCES
        .iter()
        .find(|s| s.eq_ignore_ascii_case(source))
    else {
        return Err(TrackerError::UnknownIncomeSource(
            source.to_string(),
            INCOME_SOURCES.join(", "),
        ));
    };
    let value = form.amount()?;
    if value < Decimal::ZERO {
        return Err(TrackerError::NegativeAmount);
    }
    Ok(NewRecord {
        r#type: RecordType::Income,
        category: source.to_string(),
        description: form.description.clone().unwrap_or_default(),
        value,
        date: form.date_or(today)?,
    })
}

pub fn render() -> String {
    let mut out = heading(Page::AddIncome);
    out.push_str(&format!("Income sources: {}\n", INCOME_SOURCES.join(", ")));
    out.push_str(
        "\nUsage: tally add-income --source <SOURCE> --amount <AMOUNT> \
         [--description <TEXT>] [--date YYYY-MM-DD]",
    );
    out
}
