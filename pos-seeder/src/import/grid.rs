//! Cell grid loading: first sheet of a workbook as rectangular display text

use std::path::Path;

use anyhow::{Context, Result};
use calamine::{Data, Reader, open_workbook_auto};

use super::values::parse_cell;

/// Rows of text cells, anchored at A1. Blank cells are `""`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CellGrid {
    rows: Vec<Vec<String>>,
}

impl CellGrid {
    /// Build a grid from rows of text, padding short rows to the widest one
    pub fn from_rows<R, C>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        let mut rows: Vec<Vec<String>> = rows
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect();

        let width = rows.iter().map(|r| r.len()).max().unwrap_or(0);
        for row in &mut rows {
            row.resize(width, String::new());
        }

        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&[String]> {
        self.rows.get(index).map(|r| r.as_slice())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

/// True when every cell in the row is blank
pub fn is_blank_row(row: &[String]) -> bool {
    row.iter().all(|c| c.trim().is_empty())
}

/// Open a workbook and read its first sheet as display text
pub fn load_grid<P: AsRef<Path>>(path: P) -> Result<CellGrid> {
    let path = path.as_ref();
    let mut workbook = open_workbook_auto(path)
        .with_context(|| format!("Failed to open spreadsheet: {}", path.display()))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .context("Spreadsheet has no sheets")?
        .clone();

    let range = workbook
        .worksheet_range(&sheet_name)
        .with_context(|| format!("Failed to read sheet: {}", sheet_name))?;

    // The used range may start below/right of A1; keep sheet positions.
    let (start_row, start_col) = range.start().unwrap_or((0, 0));
    let leading_cols = start_col as usize;

    let mut rows: Vec<Vec<String>> = vec![Vec::new(); start_row as usize];
    for row in range.rows() {
        let mut cells = vec![String::new(); leading_cols];
        cells.extend(row.iter().map(cell_text));
        rows.push(cells);
    }

    let grid = CellGrid::from_rows(rows);
    log::debug!(
        "Loaded {} rows from sheet '{}' of {}",
        grid.len(),
        sheet_name,
        path.display()
    );

    Ok(grid)
}

/// Render a cell the way the spreadsheet displays it, without coercion
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(_) | Data::Float(_) => parse_cell(cell).map(number_text).unwrap_or_default(),
        Data::Bool(b) => (if *b { "TRUE" } else { "FALSE" }).to_string(),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(ndt) => ndt.format("%d/%m/%Y").to_string(),
            None => dt.to_string(),
        },
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
    }
}

/// Integral values without a trailing `.0`
fn number_text(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_xlsxwriter::Workbook;

    fn temp_xlsx(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("pos-seeder-{}-{}.xlsx", name, std::process::id()))
    }

    #[test]
    fn test_from_rows_pads_to_rectangle() {
        let grid = CellGrid::from_rows(vec![vec!["a", "b", "c"], vec!["d"]]);
        assert_eq!(grid.len(), 2);
        assert_eq!(grid.row(1).unwrap(), &["d", "", ""]);
    }

    #[test]
    fn test_is_blank_row() {
        assert!(is_blank_row(&["".to_string(), "  ".to_string()]));
        assert!(is_blank_row(&[]));
        assert!(!is_blank_row(&["".to_string(), "x".to_string()]));
    }

    #[test]
    fn test_cell_text() {
        assert_eq!(cell_text(&Data::Float(20000.0)), "20000");
        assert_eq!(cell_text(&Data::Float(12.5)), "12.5");
        assert_eq!(cell_text(&Data::Int(3)), "3");
        assert_eq!(cell_text(&Data::Float(f64::NAN)), "");
        assert_eq!(cell_text(&Data::String("1.384,92".to_string())), "1.384,92");
        assert_eq!(cell_text(&Data::Bool(false)), "FALSE");
        assert_eq!(cell_text(&Data::Empty), "");
    }

    #[test]
    fn test_load_grid_reads_first_sheet_as_text() {
        let path = temp_xlsx("load");
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, 0, "Laporan Pembelian").unwrap();
        sheet.write_string(2, 0, "1").unwrap();
        sheet.write_string(2, 1, "SKU1").unwrap();
        sheet.write_number(2, 3, 2.0).unwrap();
        sheet.write_string(2, 5, "10.000").unwrap();
        workbook.add_worksheet().write_string(0, 0, "second sheet").unwrap();
        workbook.save(&path).unwrap();

        let grid = load_grid(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(grid.len(), 3);
        assert_eq!(grid.row(0).unwrap()[0], "Laporan Pembelian");
        assert!(is_blank_row(grid.row(1).unwrap()));
        let row = grid.row(2).unwrap();
        assert_eq!(row[1], "SKU1");
        assert_eq!(row[2], "");
        assert_eq!(row[3], "2");
        assert_eq!(row[5], "10.000");
    }

    #[test]
    fn test_load_grid_keeps_offset_of_used_range() {
        let path = temp_xlsx("offset");
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(1, 2, "x").unwrap();
        workbook.save(&path).unwrap();

        let grid = load_grid(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(grid.len(), 2);
        assert_eq!(grid.row(1).unwrap(), &["", "", "x"]);
    }

    #[test]
    fn test_load_grid_missing_file() {
        let err = load_grid("/nonexistent/pos-seeder.xlsx").unwrap_err();
        assert!(err.to_string().contains("Failed to open spreadsheet"));
    }
}
