// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// Domain failures surfaced to the user as a one-line message.
///
/// None of these are fatal: pages turn them into an error flash and leave
/// the stores untouched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TrackerError {
    #[error("Please enter an amount.")]
    MissingAmount,

    #[error("Amount must be greater than 0.")]
    NonPositiveAmount,

    #[error("Amount cannot be negative.")]
    NegativeAmount,

    #[error("Invalid amount '{0}'")]
    InvalidAmount(String),

    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Unknown category '{0}'. Add it under Settings first.")]
    UnknownCategory(String),

    #[error("Unknown income source '{0}'. Choose one of: {1}")]
    UnknownIncomeSource(String, String),

    #[error("Please provide at least one category.")]
    EmptyCategories,

    #[error("Unsupported receipt type '{0}' (use jpg, jpeg, png or pdf)")]
    UnsupportedReceipt(String),

    #[error("Could not read receipt {0}: {1}")]
    UnreadableReceipt(String, String),
}
