// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod app;
pub mod cli;
pub mod config;
pub mod errors;
pub mod export;
pub mod models;
pub mod ocr;
pub mod pages;
pub mod records;
pub mod report;
pub mod settings;
pub mod storage;
pub mod utils;
