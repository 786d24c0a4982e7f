// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{Flash, Page, heading, with_flash};
use crate::app::App;
use crate::errors::TrackerError;
use crate::settings::parse_category_text;
use crate::utils::{fmt_money, parse_amount};
use anyhow::Result;
use rust_decimal::Decimal;
use std::path::PathBuf;

pub fn handle(app: &mut App, sub: &clap::ArgMatches) -> Result<String> {
    let mut flashes = Vec::new();
    if let Some(budget) = sub.get_one::<String>("budget") {
        flashes.push(save_budget(app, budget)?);
    }
    if let Some(text) = sub.get_one::<String>("categories") {
        flashes.push(save_categories(app, text)?);
    }
    if let Some(path) = sub.get_one::<PathBuf>("categories-file") {
        let flash = match std::fs::read_to_string(path) {
            Ok(text) => save_categories(app, &text)?,
            Err(e) => Flash::Error(format!("Could not read {}: {}", path.display(), e)),
        };
        flashes.push(flash);
    }
    Ok(flashes
        .iter()
        .rev()
        .fold(render(app), |acc, f| with_flash(f, acc)))
}

pub fn save_budget(app: &mut App, input: &str) -> Result<Flash> {
    let budget = match parse_amount(input) {
        Ok(b) if b < Decimal::ZERO => return Ok(TrackerError::NegativeAmount.into()),
        Ok(b) => b,
        Err(e) => return Ok(e.into()),
    };
    app.settings.set_monthly_budget(budget);
    app.settings.save()?;
    Ok(Flash::Success("Budget saved.".into()))
}

/// Replaces the category list from one-per-line text. Text with no
/// non-blank line is rejected and the saved list stays as it was.
pub fn save_categories(app: &mut App, text: &str) -> Result<Flash> {
    let categories = parse_category_text(text);
    if categories.is_empty() {
        return Ok(TrackerError::EmptyCategories.into());
    }
    app.settings.set_categories(categories);
    app.settings.save()?;
    Ok(Flash::Success("Categories saved.".into()))
}

pub fn render(app: &App) -> String {
    let mut out = heading(Page::Settings);
    out.push_str(&format!(
        "Monthly budget: {}\n\nCategories (one per line)\n",
        fmt_money(app.settings.monthly_budget())
    ));
    for c in app.settings.categories() {
        out.push_str(c);
        out.push('\n');
    }
    out
}
