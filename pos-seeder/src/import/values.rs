//! Cell value parsing: locale-aware numbers, dates and text defaults

use calamine::Data;
use once_cell::sync::Lazy;
use regex::Regex;

static GROUPED_COMMA: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{1,3}(,[0-9]{3})+$").expect("valid regex"));
static GROUPED_DOT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{1,3}(\.[0-9]{3})+$").expect("valid regex"));
static DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{1,2})[/-]([0-9]{1,2})[/-]([0-9]{4})$").expect("valid regex")
});

/// Parse free-form numeric text whose separator convention is unknown.
///
/// With both `,` and `.` present the one that appears last is the decimal
/// separator. With only one of them present, a strict thousands grouping
/// (`1,234`, `12.345.678`) marks it as a thousands separator; otherwise a
/// lone comma is a decimal comma and a lone dot stays a decimal point.
///
/// Returns `None` for empty or malformed input, never zero.
pub fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    let compact: String = trimmed.chars().filter(|c| !c.is_whitespace()).collect();

    let normalized = match (compact.rfind(','), compact.rfind('.')) {
        (Some(comma), Some(dot)) if comma > dot => compact.replace('.', "").replace(',', "."),
        (Some(_), Some(_)) => compact.replace(',', ""),
        (Some(_), None) if GROUPED_COMMA.is_match(&compact) => compact.replace(',', ""),
        (Some(_), None) => compact.replace(',', "."),
        (None, Some(_)) if GROUPED_DOT.is_match(&compact) => compact.replace('.', ""),
        _ => compact,
    };

    normalized
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Parse a typed calamine cell: finite numbers pass through, text goes
/// through [`parse_number`], anything else is absent.
pub fn parse_cell(cell: &Data) -> Option<f64> {
    match cell {
        Data::Int(i) => Some(*i as f64),
        Data::Float(f) if f.is_finite() => Some(*f),
        Data::String(s) => parse_number(s),
        _ => None,
    }
}

/// Parse `dd/mm/yyyy` or `dd-mm-yyyy` into `yyyy-mm-dd`.
///
/// Only the day (1-31) and month (1-12) ranges are checked.
pub fn parse_date(text: &str) -> Option<String> {
    let caps = DATE.captures(text.trim())?;
    let day: u32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let year = &caps[3];

    if !(1..=31).contains(&day) || !(1..=12).contains(&month) {
        return None;
    }

    Some(format!("{}-{:02}-{:02}", year, month, day))
}

/// Trimmed cell text, or `None` when the cell is blank
pub fn non_empty(cell: &str) -> Option<String> {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Cell at `col` as text, `""` when the row is shorter
pub fn cell(row: &[String], col: usize) -> &str {
    row.get(col).map(|s| s.as_str()).unwrap_or("")
}
