// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::records::RecordTable;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

pub const CSV_HEADER: [&str; 6] = ["id", "type", "category", "description", "value", "date"];

/// Writes the table as CSV in its current row order.
pub fn write_csv<W: Write>(table: &RecordTable, out: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(out);
    wtr.write_record(CSV_HEADER)?;
    for r in table.rows() {
        wtr.write_record([
            r.id.to_string(),
            r.r#type.to_string(),
            r.category.clone(),
            r.description.clone(),
            r.value.normalize().to_string(),
            r.date.format("%Y-%m-%d").to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn csv_bytes(table: &RecordTable) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    write_csv(table, &mut buf)?;
    Ok(buf)
}

pub fn export_csv(table: &RecordTable, out: &Path) -> Result<()> {
    let bytes = csv_bytes(table)?;
    std::fs::write(out, bytes).with_context(|| format!("Write CSV to {}", out.display()))?;
    tracing::info!(path = %out.display(), rows = table.len(), "exported csv");
    Ok(())
}
