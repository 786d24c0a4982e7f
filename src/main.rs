// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use std::str::FromStr;

use tally::{app::App, cli, config::AppConfig, pages, utils};

fn main() -> Result<()> {
    utils::init_tracing();
    let matches = cli::build_cli().get_matches();

    let config = AppConfig::from_matches(&matches)?;
    let mut app = App::open(&config)?;
    let today = chrono::Local::now().date_naive();

    let out = match matches.subcommand() {
        Some((name, sub)) => match pages::Page::from_str(name) {
            Ok(page) => pages::dispatch(&mut app, page, sub, today)?,
            Err(e) => anyhow::bail!(e),
        },
        None => pages::overview::render(&app, today),
    };
    println!("{}", out);
    Ok(())
}
