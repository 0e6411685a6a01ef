//! Row role classification for purchase and sales exports

use once_cell::sync::Lazy;
use regex::Regex;

use super::values::cell;

static LINE_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").expect("valid regex"));
static SALES_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^SL[0-9]+$").expect("valid regex"));

/// What a single grid row represents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowRole {
    /// Starts a new transaction
    Header,
    /// One purchased/sold line
    Item,
    /// Totals, discount and notes for the current transaction
    Summary,
    Noise,
}

impl std::fmt::Display for RowRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RowRole::Header => write!(f, "header"),
            RowRole::Item => write!(f, "item"),
            RowRole::Summary => write!(f, "summary"),
            RowRole::Noise => write!(f, "noise"),
        }
    }
}

/// True when some cell equals `token` exactly (surrounding whitespace ignored)
pub fn has_cell(row: &[String], token: &str) -> bool {
    row.iter().any(|c| c.trim() == token)
}

/// True when every token appears as a cell somewhere in the row
pub fn has_all(row: &[String], tokens: &[&str]) -> bool {
    tokens.iter().all(|t| has_cell(row, t))
}

/// First cell is a run of digits (the row's declared line number)
pub fn is_item_row(row: &[String]) -> bool {
    LINE_NUMBER.is_match(cell(row, 0).trim())
}

pub fn is_purchase_header(row: &[String]) -> bool {
    has_cell(row, "Nomor") && has_cell(row, ":") && has_all(row, &["No", "Kode", "Nama"])
}

pub fn is_purchase_summary(row: &[String]) -> bool {
    has_all(row, &["Keterangan", "Total"])
}

pub fn is_sales_header(row: &[String]) -> bool {
    SALES_NUMBER.is_match(cell(row, 0).trim())
        && has_all(row, &["No", "Kode", "Nama", "Kts", "Sat"])
}

pub fn is_sales_summary(row: &[String]) -> bool {
    cell(row, 0).trim() == "Sub Total" && has_cell(row, "Total")
}

/// Header is checked first, then summary, then item
pub fn classify_purchase_row(row: &[String]) -> RowRole {
    if is_purchase_header(row) {
        RowRole::Header
    } else if is_purchase_summary(row) {
        RowRole::Summary
    } else if is_item_row(row) {
        RowRole::Item
    } else {
        RowRole::Noise
    }
}

pub fn classify_sales_row(row: &[String]) -> RowRole {
    if is_sales_header(row) {
        RowRole::Header
    } else if is_sales_summary(row) {
        RowRole::Summary
    } else if is_item_row(row) {
        RowRole::Item
    } else {
        RowRole::Noise
    }
}
