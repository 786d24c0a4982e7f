// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{Flash, Page, heading};
use crate::app::App;
use crate::models::RecordType;
use crate::report::{category_breakdown, daily_series, sum_values, total_by_type};
use crate::utils::{BAR_WIDTH, fmt_money, percent, pretty_table, text_bar};
use chrono::NaiveDate;
use rust_decimal::Decimal;

pub const EMPTY_MESSAGE: &str = "No expenses to visualize.";

pub fn render(app: &App, today: NaiveDate) -> String {
    let mut out = heading(Page::Visualization);
    let records = app.records.records();
    if records.is_empty() {
        out.push_str(&Flash::Info(EMPTY_MESSAGE.into()).to_string());
        return out;
    }

    let breakdown = category_breakdown(records);
    if !breakdown.is_empty() {
        let total = sum_values(breakdown.iter().map(|(_, v)| *v));
        let max = breakdown[0].1;
        let rows = breakdown
            .iter()
            .map(|(cat, v)| {
                vec![
                    cat.clone(),
                    fmt_money(*v),
                    percent(*v, total),
                    text_bar(*v, max, BAR_WIDTH),
                ]
            })
            .collect();
        out.push_str("Expense Distribution by Category\n");
        out.push_str(&pretty_table(&["Category", "Amount", "Share", ""], rows).to_string());
        out.push_str("\n\n");
    }

    let daily = daily_series(records);
    let daily_total = sum_values(daily.iter().map(|(_, v)| *v));
    out.push_str(&format!(
        "Daily Expenses (Month total: {})\n",
        fmt_money(daily_total)
    ));
    if daily.is_empty() {
        out.push_str("(no expense entries)\n");
    } else {
        let max = daily.iter().map(|(_, v)| *v).max().unwrap_or(Decimal::ZERO);
        let rows = daily
            .iter()
            .map(|(d, v)| {
                vec![
                    d.format("%Y-%m-%d").to_string(),
                    fmt_money(*v),
                    text_bar(*v, max, BAR_WIDTH),
                ]
            })
            .collect();
        out.push_str(&pretty_table(&["Date", "Amount", ""], rows).to_string());
        out.push('\n');
    }

    let balance = total_by_type(records, RecordType::Income).saturating_sub(daily_total);
    out.push_str("\nMonthly Remaining Balance\n");
    out.push_str(
        &pretty_table(
            &["Month", "Balance"],
            vec![vec![today.format("%B").to_string(), fmt_money(balance)]],
        )
        .to_string(),
    );
    out
}
