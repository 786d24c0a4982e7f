// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use std::fs;
use std::path::PathBuf;

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("com.alphavelocity", "Tally", "tally"));

pub const RECORDS_FILE: &str = "records.json";
pub const SETTINGS_FILE: &str = "settings.json";

pub const OCR_ENDPOINT: &str = "https://api.ocr.space/parse/image";
// Public demo key of OCR.space; pass --ocr-api-key or OCR_SPACE_API_KEY for a real one.
pub const OCR_DEMO_KEY: &str = "helloworld";
pub const OCR_LANGUAGE: &str = "eng";
pub const OCR_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OcrConfig {
    pub endpoint: String,
    pub api_key: String,
    pub language: String,
    pub timeout_secs: u64,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            endpoint: OCR_ENDPOINT.to_string(),
            api_key: OCR_DEMO_KEY.to_string(),
            language: OCR_LANGUAGE.to_string(),
            timeout_secs: OCR_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub ocr: OcrConfig,
}

impl AppConfig {
    /// Config rooted at `data_dir` with default OCR settings.
    pub fn in_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ocr: OcrConfig::default(),
        }
    }

    /// Builds the config from the global CLI flags, falling back to the
    /// platform data directory.
    pub fn from_matches(m: &clap::ArgMatches) -> Result<Self> {
        let data_dir = match m.get_one::<PathBuf>("data-dir") {
            Some(dir) => dir.clone(),
            None => default_data_dir()?,
        };
        fs::create_dir_all(&data_dir)
            .with_context(|| format!("Failed to create data dir {}", data_dir.display()))?;
        let mut ocr = OcrConfig::default();
        if let Some(key) = m.get_one::<String>("ocr-api-key") {
            ocr.api_key = key.clone();
        }
        Ok(Self { data_dir, ocr })
    }

    pub fn records_path(&self) -> PathBuf {
        self.data_dir.join(RECORDS_FILE)
    }

    pub fn settings_path(&self) -> PathBuf {
        self.data_dir.join(SETTINGS_FILE)
    }
}

pub fn default_data_dir() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    Ok(proj.data_dir().to_path_buf())
}
