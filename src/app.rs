// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::AppConfig;
use crate::ocr::{OcrSpaceClient, TextExtractor};
use crate::records::RecordStore;
use crate::settings::SettingsStore;
use anyhow::Result;

/// Everything a page needs: both stores and the OCR backend. Built once per
/// process and handed to the page handlers.
pub struct App {
    pub records: RecordStore,
    pub settings: SettingsStore,
    extractor: Box<dyn TextExtractor>,
}

impl App {
    pub fn open(config: &AppConfig) -> Result<Self> {
        let extractor = OcrSpaceClient::new(&config.ocr)?;
        Self::with_extractor(config, Box::new(extractor))
    }

    pub fn with_extractor(config: &AppConfig, extractor: Box<dyn TextExtractor>) -> Result<Self> {
        let records = RecordStore::open(config.records_path())?;
        let settings = SettingsStore::open(config.settings_path());
        tracing::debug!(
            records = records.len(),
            data_dir = %config.data_dir.display(),
            "app state loaded"
        );
        Ok(Self {
            records,
            settings,
            extractor,
        })
    }

    pub fn extractor(&self) -> &dyn TextExtractor {
        self.extractor.as_ref()
    }
}
