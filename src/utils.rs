// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::errors::TrackerError;
use anyhow::Result;
use chrono::NaiveDate;
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::sync::Once;
use std::time::Duration;

pub const CURRENCY_SYMBOL: &str = "₹";
pub const BAR_WIDTH: usize = 30;

const UA: &str = concat!("tally/", env!("CARGO_PKG_VERSION"));

static TRACING_INIT: Once = Once::new();

/// Installs the stderr tracing subscriber. `RUST_LOG` overrides the default
/// `tally=warn` filter.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{EnvFilter, fmt};

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tally=warn"));
        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    });
}

pub fn http_client(timeout: Duration) -> Result<reqwest::blocking::Client> {
    let c = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .user_agent(UA)
        .build()?;
    Ok(c)
}

pub fn parse_date(s: &str) -> Result<NaiveDate, TrackerError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| TrackerError::InvalidDate(s.to_string()))
}

pub fn parse_decimal(s: &str) -> Result<Decimal, TrackerError> {
    s.trim()
        .parse::<Decimal>()
        .map_err(|_| TrackerError::InvalidAmount(s.to_string()))
}

/// Largest amount a form accepts. Amounts are stored as JSON numbers, and
/// 15 significant digits is what an f64 carries back unchanged.
pub fn max_amount() -> Decimal {
    Decimal::new(999_999_999_999_999, 2)
}

pub const AMOUNT_DECIMALS: u32 = 2;

/// Parses a form amount: at most two decimal places and no larger in
/// magnitude than [`max_amount`].
pub fn parse_amount(s: &str) -> Result<Decimal, TrackerError> {
    let d = parse_decimal(s)?;
    if d.normalize().scale() > AMOUNT_DECIMALS || d.abs() > max_amount() {
        return Err(TrackerError::InvalidAmount(s.trim().to_string()));
    }
    Ok(d)
}

/// `₹1,234.50` style: two decimals, comma thousands separators.
pub fn fmt_money(d: Decimal) -> String {
    let s = format!("{:.2}", d.round_dp(2));
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", s.as_str()),
    };
    let (int_part, frac) = digits.split_once('.').unwrap_or((digits, "00"));
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{}{}{}.{}", CURRENCY_SYMBOL, sign, grouped, frac)
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

/// Horizontal bar scaled so `max` fills `width` cells.
pub fn text_bar(value: Decimal, max: Decimal, width: usize) -> String {
    if max <= Decimal::ZERO || value <= Decimal::ZERO {
        return String::new();
    }
    let cells = (value / max * Decimal::from(width))
        .round()
        .to_usize()
        .unwrap_or(0)
        .clamp(1, width);
    "█".repeat(cells)
}

/// Share of `part` in `total` as a percentage with one decimal.
pub fn percent(part: Decimal, total: Decimal) -> String {
    if total.is_zero() {
        return "0.0%".to_string();
    }
    format!("{:.1}%", (part / total * Decimal::ONE_HUNDRED).round_dp(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn money_groups_thousands() {
        assert_eq!(fmt_money(Decimal::from_str("1234567.5").unwrap()), "₹1,234,567.50");
        assert_eq!(fmt_money(Decimal::from_str("999").unwrap()), "₹999.00");
        assert_eq!(fmt_money(Decimal::from_str("-1234").unwrap()), "₹-1,234.00");
        assert_eq!(fmt_money(Decimal::ZERO), "₹0.00");
    }

    #[test]
    fn amounts_are_limited_to_cents_and_max() {
        assert_eq!(parse_amount(" 12.50 ").unwrap(), Decimal::new(1250, 2));
        assert_eq!(parse_amount("12.500").unwrap(), Decimal::new(1250, 2));
        assert_eq!(parse_amount("9999999999999.99").unwrap(), max_amount());
        assert_eq!(parse_amount("-3").unwrap(), Decimal::from(-3));
        for bad in ["1.234", "10000000000000", "79228162514264337593543950335", "-10000000000000"] {
            assert_eq!(parse_amount(bad), Err(TrackerError::InvalidAmount(bad.to_string())));
        }
    }

    #[test]
    fn bars_scale_to_max() {
        let max = Decimal::from(50);
        assert_eq!(text_bar(max, max, 10).chars().count(), 10);
        assert_eq!(text_bar(Decimal::from(25), max, 10).chars().count(), 5);
        assert_eq!(text_bar(Decimal::ZERO, max, 10), "");
    }

    #[test]
    fn percent_handles_zero_total() {
        assert_eq!(percent(Decimal::from(1), Decimal::ZERO), "0.0%");
        assert_eq!(percent(Decimal::from(1), Decimal::from(4)), "25.0%");
    }
}
