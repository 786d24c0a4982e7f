// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::Settings;
use crate::storage;
use anyhow::Result;
use rust_decimal::Decimal;
use std::path::PathBuf;

/// Splits free text into categories: one per line, trimmed, blanks dropped.
pub fn parse_category_text(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug)]
pub struct SettingsStore {
    path: PathBuf,
    settings: Settings,
}

impl SettingsStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let settings = storage::load(&path, Settings::default()).into_inner();
        Self { path, settings }
    }

    pub fn monthly_budget(&self) -> Decimal {
        self.settings.monthly_budget
    }

    pub fn categories(&self) -> &[String] {
        &self.settings.categories
    }

    pub fn set_monthly_budget(&mut self, budget: Decimal) {
        self.settings.monthly_budget = budget;
    }

    /// Replaces the list wholesale. Duplicates and empty lists are the
    /// caller's concern.
    pub fn set_categories(&mut self, categories: Vec<String>) {
        self.settings.categories = categories;
    }

    pub fn save(&self) -> Result<()> {
        storage::save(&self.path, &self.settings)?;
        tracing::info!(path = %self.path.display(), "settings saved");
        Ok(())
    }
}
