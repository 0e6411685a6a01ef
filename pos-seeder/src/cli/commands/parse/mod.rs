//! `parse` command: dump an export as JSON without touching the API

mod handler;

use std::path::PathBuf;

use clap::{Args, ValueEnum};

pub use handler::handle_parse_command;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportKind {
    Items,
    Purchases,
    Sales,
}

#[derive(Args, Debug)]
pub struct ParseCommands {
    /// Kind of export in the file
    #[arg(value_enum)]
    pub kind: ExportKind,

    /// Spreadsheet file (.xlsx, .xls, .xlsb, .ods)
    pub file: PathBuf,

    /// Write JSON to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Single-line JSON
    #[arg(long)]
    pub compact: bool,
}
