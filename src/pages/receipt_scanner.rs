// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{Flash, Page, heading, with_flash};
use crate::app::App;
use crate::errors::TrackerError;
use crate::ocr::{OcrOutcome, RECEIPT_EXTENSIONS};
use anyhow::Result;
use std::path::{Path, PathBuf};

pub fn handle(app: &mut App, sub: &clap::ArgMatches) -> Result<String> {
    let Some(path) = sub.get_one::<PathBuf>("image") else {
        return Ok(render_prompt());
    };
    Ok(match extract(app, path) {
        Ok(outcome) => render_outcome(path, &outcome),
        Err(e) => with_flash(&Flash::from(e), render_prompt()),
    })
}

/// Reads the receipt and runs it through the configured OCR backend.
pub fn extract(app: &App, path: &Path) -> Result<OcrOutcome, TrackerError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();
    if !RECEIPT_EXTENSIONS.contains(&ext.as_str()) {
        return Err(TrackerError::UnsupportedReceipt(path.display().to_string()));
    }
    let bytes = std::fs::read(path)
        .map_err(|e| TrackerError::UnreadableReceipt(path.display().to_string(), e.to_string()))?;
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("receipt")
        .to_string();
    Ok(app.extractor().extract_text(&file_name, bytes))
}

pub fn render_outcome(path: &Path, outcome: &OcrOutcome) -> String {
    let mut out = heading(Page::ReceiptScanner);
    out.push_str(&format!("Uploaded Receipt: {}\n\n", path.display()));
    out.push_str("Extracted Text\n--------------\n");
    out.push_str(outcome.display_text());
    out
}

fn render_prompt() -> String {
    let mut out = heading(Page::ReceiptScanner);
    out.push_str(&format!(
        "Usage: tally receipt-scanner <IMAGE>  ({})",
        RECEIPT_EXTENSIONS.join(", ")
    ));
    out
}
