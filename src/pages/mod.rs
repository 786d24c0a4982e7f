// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! One module per view. Choosing a page is the only navigation; each handler
//! applies at most one action and returns the rendered text.

pub mod add_expense;
pub mod add_income;
pub mod delete_expense;
pub mod overview;
pub mod receipt_scanner;
pub mod settings;
pub mod visualization;

use crate::app::App;
use crate::errors::TrackerError;
use crate::utils::parse_amount;
use anyhow::Result;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Overview,
    AddExpense,
    AddIncome,
    Visualization,
    ReceiptScanner,
    Settings,
    DeleteExpense,
}

impl Page {
    pub const ALL: [Page; 7] = [
        Page::Overview,
        Page::AddExpense,
        Page::AddIncome,
        Page::Visualization,
        Page::ReceiptScanner,
        Page::Settings,
        Page::DeleteExpense,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            Page::Overview => "overview",
            Page::AddExpense => "add-expense",
            Page::AddIncome => "add-income",
            Page::Visualization => "visualization",
            Page::ReceiptScanner => "receipt-scanner",
            Page::Settings => "settings",
            Page::DeleteExpense => "delete-expense",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Overview => "Overview",
            Page::AddExpense => "Add Expense",
            Page::AddIncome => "Add Income",
            Page::Visualization => "Visualization",
            Page::ReceiptScanner => "Receipt Scanner",
            Page::Settings => "Settings",
            Page::DeleteExpense => "Delete Expense",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Page {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::ALL
            .into_iter()
            .find(|p| p.slug() == s)
            .ok_or_else(|| format!("unknown page '{}'", s))
    }
}

/// One-line message shown above a page after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flash {
    Success(String),
    Error(String),
    Info(String),
}

impl Flash {
    pub fn is_success(&self) -> bool {
        matches!(self, Flash::Success(_))
    }
}

impl From<TrackerError> for Flash {
    fn from(e: TrackerError) -> Self {
        Flash::Error(e.to_string())
    }
}

impl fmt::Display for Flash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Flash::Success(m) => write!(f, "✅ {}", m),
            Flash::Error(m) => write!(f, "❌ {}", m),
            Flash::Info(m) => write!(f, "ℹ️  {}", m),
        }
    }
}

/// Raw values from the add-expense / add-income forms, validated on submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryForm {
    pub category: Option<String>,
    pub amount: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
}

impl EntryForm {
    pub fn from_matches(sub: &clap::ArgMatches, category_arg: &str) -> Self {
        let get = |name: &str| sub.get_one::<String>(name).cloned();
        Self {
            category: get(category_arg),
            amount: get("amount"),
            description: get("description"),
            date: get("date"),
        }
    }

    pub fn is_blank(&self) -> bool {
        self == &EntryForm::default()
    }

    fn amount(&self) -> Result<Decimal, TrackerError> {
        match self.amount.as_deref().map(str::trim) {
            None | Some("") => Err(TrackerError::MissingAmount),
            Some(s) => parse_amount(s),
        }
    }

    fn date_or(&self, today: NaiveDate) -> Result<NaiveDate, TrackerError> {
        match self.date.as_deref() {
            Some(s) => crate::utils::parse_date(s),
            None => Ok(today),
        }
    }
}

fn heading(page: Page) -> String {
    format!("== {} ==\n", page.title())
}

fn with_flash(flash: &Flash, body: String) -> String {
    format!("{}\n\n{}", flash, body)
}

/// Runs `page` with the options of its subcommand against `app`.
pub fn dispatch(
    app: &mut App,
    page: Page,
    sub: &clap::ArgMatches,
    today: NaiveDate,
) -> Result<String> {
    match page {
        Page::Overview => overview::handle(app, sub, today),
        Page::AddExpense => add_expense::handle(app, sub, today),
        Page::AddIncome => add_income::handle(app, sub, today),
        Page::Visualization => Ok(visualization::render(app, today)),
        Page::ReceiptScanner => receipt_scanner::handle(app, sub),
        Page::Settings => settings::handle(app, sub),
        Page::DeleteExpense => delete_expense::handle(app, sub),
    }
}
