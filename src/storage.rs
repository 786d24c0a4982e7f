// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::path::Path;

const INDENT: &[u8] = b"    ";

/// Result of reading a JSON document that falls back to a default.
///
/// `Missing` and `Corrupt` both carry the default; callers that only want the
/// data use [`LoadOutcome::into_inner`].
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome<T> {
    Loaded(T),
    Missing(T),
    Corrupt { data: T, reason: String },
}

impl<T> LoadOutcome<T> {
    pub fn into_inner(self) -> T {
        match self {
            LoadOutcome::Loaded(d) | LoadOutcome::Missing(d) => d,
            LoadOutcome::Corrupt { data, .. } => data,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadOutcome::Loaded(_))
    }
}

pub fn load<T: DeserializeOwned>(path: &Path, default: T) -> LoadOutcome<T> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no file, using defaults");
        return LoadOutcome::Missing(default);
    }
    let parsed = fs::read_to_string(path)
        .map_err(|e| e.to_string())
        .and_then(|s| serde_json::from_str::<T>(&s).map_err(|e| e.to_string()));
    match parsed {
        Ok(data) => LoadOutcome::Loaded(data),
        Err(reason) => {
            tracing::warn!(path = %path.display(), %reason, "unreadable file, using defaults");
            LoadOutcome::Corrupt {
                data: default,
                reason,
            }
        }
    }
}

/// Replaces the whole document at `path`.
pub fn save<T: Serialize + ?Sized>(path: &Path, data: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }
    let mut buf = Vec::new();
    let mut ser =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    data.serialize(&mut ser)
        .with_context(|| format!("Serialize {}", path.display()))?;

    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, &buf).with_context(|| format!("Write {}", tmp.display()))?;
    fs::rename(&tmp, path).with_context(|| format!("Replace {}", path.display()))?;
    tracing::debug!(path = %path.display(), bytes = buf.len(), "saved");
    Ok(())
}
