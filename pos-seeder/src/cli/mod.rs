//! Command-line interface

pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use commands::parse::ParseCommands;
use commands::seed::{SalesSeedCommands, SeedCommands};

#[derive(Parser, Debug)]
#[command(
    name = "pos-seeder",
    version,
    about = "Import legacy POS spreadsheet exports into the POS API"
)]
pub struct Cli {
    /// Config file (default: <config dir>/pos-seeder/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log debug output (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse an export and print it as JSON
    Parse(ParseCommands),
    /// Create catalog items from an item master export
    SeedItem(SeedCommands),
    /// Post purchase invoices from a purchase report export
    SeedPurchase(SeedCommands),
    /// Post sales receipts from a sales report export
    SeedSales(SalesSeedCommands),
}
