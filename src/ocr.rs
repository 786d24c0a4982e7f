// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::OcrConfig;
use crate::utils::http_client;
use anyhow::Result;
use reqwest::blocking::multipart::{Form, Part};
use serde_json::Value;
use std::time::Duration;

/// Shown in place of extracted text whenever OCR does not produce any.
pub const OCR_FAILED_MESSAGE: &str = "❌ OCR failed. Try a clearer image.";

pub const RECEIPT_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "pdf"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OcrOutcome {
    Text(String),
    Failed(String),
}

impl OcrOutcome {
    /// What the receipt page shows: the text, or the fixed failure message.
    pub fn display_text(&self) -> &str {
        match self {
            OcrOutcome::Text(t) => t,
            OcrOutcome::Failed(_) => OCR_FAILED_MESSAGE,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, OcrOutcome::Text(_))
    }
}

/// Turns receipt images into text. Implementations never error; failures
/// come back as [`OcrOutcome::Failed`].
pub trait TextExtractor {
    fn extract_text(&self, file_name: &str, image: Vec<u8>) -> OcrOutcome;
}

/// Reads `ParsedResults[0].ParsedText` from an OCR.space response body.
pub fn parse_response(body: &Value) -> OcrOutcome {
    match body
        .get("ParsedResults")
        .and_then(|r| r.get(0))
        .and_then(|r| r.get("ParsedText"))
        .and_then(Value::as_str)
    {
        Some(text) => OcrOutcome::Text(text.to_string()),
        None => {
            let reason = body
                .get("ErrorMessage")
                .map(|m| match m {
                    Value::String(s) => s.clone(),
                    Value::Array(items) => items
                        .iter()
                        .filter_map(Value::as_str)
                        .collect::<Vec<_>>()
                        .join("; "),
                    other => other.to_string(),
                })
                .unwrap_or_else(|| "response has no ParsedResults[0].ParsedText".to_string());
            OcrOutcome::Failed(reason)
        }
    }
}

/// Blocking client for the OCR.space `parse/image` endpoint.
pub struct OcrSpaceClient {
    client: reqwest::blocking::Client,
    endpoint: String,
    api_key: String,
    language: String,
}

impl OcrSpaceClient {
    pub fn new(config: &OcrConfig) -> Result<Self> {
        Ok(Self {
            client: http_client(Duration::from_secs(config.timeout_secs))?,
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
            language: config.language.clone(),
        })
    }

    fn post(&self, file_name: &str, image: Vec<u8>) -> Result<Value> {
        let part = Part::bytes(image).file_name(file_name.to_string());
        let form = Form::new()
            .text("apikey", self.api_key.clone())
            .text("language", self.language.clone())
            .part("file", part);
        let body = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()?
            .json::<Value>()?;
        Ok(body)
    }
}

impl TextExtractor for OcrSpaceClient {
    fn extract_text(&self, file_name: &str, image: Vec<u8>) -> OcrOutcome {
        tracing::debug!(file_name, bytes = image.len(), endpoint = %self.endpoint, "ocr request");
        match self.post(file_name, image) {
            Ok(body) => {
                let outcome = parse_response(&body);
                if let OcrOutcome::Failed(reason) = &outcome {
                    tracing::warn!(%reason, "ocr returned no text");
                }
                outcome
            }
            Err(e) => {
                tracing::warn!(error = %e, "ocr request failed");
                OcrOutcome::Failed(e.to_string())
            }
        }
    }
}
