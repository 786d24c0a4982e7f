// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};
use std::path::PathBuf;

fn entry_args(cmd: Command, source_arg: &'static str, source_help: &'static str) -> Command {
    cmd.arg(
        Arg::new(source_arg)
            .long(source_arg)
            .short('c')
            .help(source_help),
    )
    .arg(
        Arg::new("amount")
            .long("amount")
            .short('a')
            .allow_hyphen_values(true)
            .help("Amount, e.g. 249.50"),
    )
    .arg(
        Arg::new("description")
            .long("description")
            .short('d')
            .help("Optional description"),
    )
    .arg(
        Arg::new("date")
            .long("date")
            .help("Date as YYYY-MM-DD (default: today)"),
    )
}

pub fn build_cli() -> Command {
    Command::new("tally")
        .about("Personal expense and income tracker")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Directory holding records.json and settings.json"),
        )
        .arg(
            Arg::new("ocr-api-key")
                .long("ocr-api-key")
                .global(true)
                .env("OCR_SPACE_API_KEY")
                .hide_env_values(true)
                .help("OCR.space API key used by the receipt scanner"),
        )
        .subcommand(
            Command::new("overview")
                .about("Totals and expense history")
                .arg(
                    Arg::new("delete")
                        .long("delete")
                        .value_parser(value_parser!(i64))
                        .help("Delete the entry with this id"),
                )
                .arg(
                    Arg::new("export")
                        .long("export")
                        .value_parser(value_parser!(PathBuf))
                        .help("Write the history as CSV to this path"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Print entries as JSON"),
                ),
        )
        .subcommand(entry_args(
            Command::new("add-expense").about("Record an expense"),
            "category",
            "Expense category (see `tally settings`)",
        ))
        .subcommand(entry_args(
            Command::new("add-income").about("Record income"),
            "source",
            "Income source: Salary, Business, Gift or Other",
        ))
        .subcommand(
            Command::new("visualization")
                .visible_alias("visualize")
                .about("Category and daily expense charts"),
        )
        .subcommand(
            Command::new("receipt-scanner")
                .visible_alias("scan")
                .about("Extract text from a receipt image via OCR")
                .arg(
                    Arg::new("image")
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("Receipt image (jpg, jpeg, png or pdf)"),
                ),
        )
        .subcommand(
            Command::new("settings")
                .about("Show or change the monthly budget and categories")
                .arg(
                    Arg::new("budget")
                        .long("budget")
                        .allow_hyphen_values(true)
                        .help("New monthly budget"),
                )
                .arg(
                    Arg::new("categories")
                        .long("categories")
                        .conflicts_with("categories-file")
                        .help("Categories, one per line"),
                )
                .arg(
                    Arg::new("categories-file")
                        .long("categories-file")
                        .value_parser(value_parser!(PathBuf))
                        .help("Read categories from a file, one per line"),
                ),
        )
        .subcommand(
            Command::new("delete-expense")
                .visible_alias("delete")
                .about("List entries or delete one by id")
                .arg(
                    Arg::new("id")
                        .value_parser(value_parser!(i64))
                        .help("Id of the entry to delete"),
                ),
        )
}
