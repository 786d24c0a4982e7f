// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use serde_json::json;
use std::cell::RefCell;
use std::rc::Rc;
use tally::app::App;
use tally::config::AppConfig;
use tally::errors::TrackerError;
use tally::ocr::{OCR_FAILED_MESSAGE, OcrOutcome, TextExtractor, parse_response};
use tally::pages::receipt_scanner;
use tempfile::tempdir;

type Seen = Rc<RefCell<Vec<(String, usize)>>>;

struct Canned {
    outcome: OcrOutcome,
    seen: Seen,
}

impl TextExtractor for Canned {
    fn extract_text(&self, file_name: &str, image: Vec<u8>) -> OcrOutcome {
        self.seen.borrow_mut().push((file_name.to_string(), image.len()));
        self.outcome.clone()
    }
}

fn app_with(outcome: OcrOutcome) -> (tempfile::TempDir, App, Seen) {
    let dir = tempdir().unwrap();
    let seen = Seen::default();
    let canned = Canned {
        outcome,
        seen: seen.clone(),
    };
    let app = App::with_extractor(&AppConfig::in_dir(dir.path()), Box::new(canned)).unwrap();
    (dir, app, seen)
}

#[test]
fn parsed_text_is_extracted() {
    let body = json!({
        "ParsedResults": [{"ParsedText": "TOTAL 249.50\r\n", "FileParseExitCode": 1}],
        "IsErroredOnProcessing": false
    });
    assert_eq!(
        parse_response(&body),
        OcrOutcome::Text("TOTAL 249.50\r\n".into())
    );
}

#[test]
fn malformed_responses_fail_with_reason() {
    let errored = json!({
        "IsErroredOnProcessing": true,
        "ErrorMessage": ["File failed validation", "Unable to recognize the file type"]
    });
    match parse_response(&errored) {
        OcrOutcome::Failed(reason) => {
            assert_eq!(reason, "File failed validation; Unable to recognize the file type")
        }
        other => panic!("unexpected {:?}", other),
    }

    for body in [json!({}), json!({"ParsedResults": []}), json!({"ParsedResults": [{"ParsedText": 3}]})] {
        let out = parse_response(&body);
        assert!(!out.is_text());
        assert_eq!(out.display_text(), OCR_FAILED_MESSAGE);
    }
}

#[test]
fn scanner_shows_sentinel_on_failure() {
    let (dir, app, seen) = app_with(OcrOutcome::Failed("timeout".into()));
    let img = dir.path().join("receipt.PNG");
    std::fs::write(&img, [0u8, 1, 2, 3]).unwrap();

    let outcome = receipt_scanner::extract(&app, &img).unwrap();
    let page = receipt_scanner::render_outcome(&img, &outcome);
    assert!(page.contains("Extracted Text"));
    assert!(page.contains(OCR_FAILED_MESSAGE));
    assert!(!page.contains("timeout"));
    assert_eq!(seen.borrow().as_slice(), &[("receipt.PNG".to_string(), 4)]);
}

#[test]
fn scanner_passes_text_through() {
    let (dir, app, _) = app_with(OcrOutcome::Text("Coffee 3.20".into()));
    let img = dir.path().join("r.jpg");
    std::fs::write(&img, b"jpeg").unwrap();
    let outcome = receipt_scanner::extract(&app, &img).unwrap();
    assert!(receipt_scanner::render_outcome(&img, &outcome).ends_with("Coffee 3.20"));
}

#[test]
fn scanner_rejects_unsupported_and_missing_files() {
    let (dir, app, seen) = app_with(OcrOutcome::Text(String::new()));
    let gif = dir.path().join("r.gif");
    std::fs::write(&gif, b"gif").unwrap();
    assert!(matches!(
        receipt_scanner::extract(&app, &gif),
        Err(TrackerError::UnsupportedReceipt(_))
    ));
    assert!(matches!(
        receipt_scanner::extract(&app, &dir.path().join("absent.png")),
        Err(TrackerError::UnreadableReceipt(_, _))
    ));
    assert!(seen.borrow().is_empty());
}
