//! `seed-*` commands: parse an export and post it to the POS API

mod handler;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Args;

pub use handler::{handle_seed_item, handle_seed_purchase, handle_seed_sales};

#[derive(Args, Debug)]
pub struct SeedCommands {
    /// Spreadsheet file (.xlsx, .xls, .xlsb, .ods)
    pub file: PathBuf,

    /// Parse and report what would be posted, without calling the API
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Args, Debug)]
pub struct SalesSeedCommands {
    #[command(flatten)]
    pub seed: SeedCommands,

    /// Transaction date sent with every receipt, YYYY-MM-DD (default: today)
    #[arg(long)]
    pub date: Option<NaiveDate>,
}
