//! Item master export: column-header row followed by one item per row

use std::collections::HashMap;
use std::path::Path;

use super::grid::{CellGrid, is_blank_row, load_grid};
use super::types::{ItemColumn, ItemRecord};
use super::values::{non_empty, parse_number};

/// Fatal item import error
#[derive(Debug, Clone, PartialEq)]
pub enum ImportError {
    /// A mandatory field is blank. `row` is 1-based as shown in the spreadsheet.
    MissingField {
        row: usize,
        field: &'static str,
        code: Option<String>,
    },
}

impl std::fmt::Display for ImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImportError::MissingField {
                row,
                field,
                code: Some(code),
            } => write!(
                f,
                "Row {}: {} is required (kodeItem '{}')",
                row,
                field,
                code
            ),
            ImportError::MissingField {
                row,
                field,
                code: None,
            } => write!(f, "Row {}: {} is required", row, field),
        }
    }
}

impl std::error::Error for ImportError {}

/// Read item records from a grid whose first row names the columns
pub fn parse_item_grid(grid: &CellGrid) -> Result<Vec<ItemRecord>, ImportError> {
    let Some(header) = grid.row(0) else {
        return Ok(Vec::new());
    };

    let columns: HashMap<usize, ItemColumn> = header
        .iter()
        .enumerate()
        .filter_map(|(idx, name)| ItemColumn::from_header(name).map(|c| (idx, c)))
        .collect();

    let mut items = Vec::new();
    for (row_idx, row) in grid.rows().iter().enumerate().skip(1) {
        if is_blank_row(row) {
            continue;
        }
        let row_num = row_idx + 1;

        let mut record = ItemRecord::default();
        for (col, column) in &columns {
            if let Some(value) = row.get(*col) {
                apply_column(&mut record, *column, value);
            }
        }

        if record.kode_item.is_empty() {
            return Err(ImportError::MissingField {
                row: row_num,
                field: ItemColumn::KodeItem.field_name(),
                code: None,
            });
        }
        if record.nama_item.is_empty() {
            return Err(ImportError::MissingField {
                row: row_num,
                field: ItemColumn::NamaItem.field_name(),
                code: Some(record.kode_item),
            });
        }

        items.push(record);
    }

    log::debug!(
        "Item export: {} items, {} mapped columns",
        items.len(),
        columns.len()
    );
    Ok(items)
}

fn apply_column(record: &mut ItemRecord, column: ItemColumn, value: &str) {
    let text = || non_empty(value).unwrap_or_default();
    let number = || parse_number(value);

    match column {
        ItemColumn::KodeItem => record.kode_item = text(),
        ItemColumn::NamaItem => record.nama_item = text(),
        ItemColumn::KodeJenis => record.kode_jenis = text(),
        ItemColumn::KodePemasok => record.kode_pemasok = text(),
        ItemColumn::HargaBeli => record.harga_beli = number(),
        ItemColumn::HargaPokok => record.harga_pokok = number(),
        ItemColumn::Satuan1 => record.satuan1 = text(),
        ItemColumn::Satuan2 => record.satuan2 = non_empty(value),
        ItemColumn::Kuantitas1 => record.kuantitas1 = number(),
        ItemColumn::Kuantitas2 => record.kuantitas2 = number(),
        ItemColumn::HargaJual1 => record.harga_jual1 = number(),
        ItemColumn::HargaJual2 => record.harga_jual2 = number(),
        ItemColumn::HargaJual3 => record.harga_jual3 = number(),
        ItemColumn::HargaJual4 => record.harga_jual4 = number(),
        ItemColumn::Stok => record.stok = number(),
        ItemColumn::Upload => record.upload = text(),
        ItemColumn::Tipe => record.tipe = text(),
    }
}

/// Load an item master export
pub fn read_items_excel<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<ItemRecord>> {
    let path = path.as_ref();
    let grid = load_grid(path)?;
    let items = parse_item_grid(&grid)?;
    log::info!("Read {} items from {}", items.len(), path.display());
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &[&str] = &[
        "KodeItem",
        "NamaItem",
        "Satuan1",
        "Satuan2",
        "HargaBeli",
        "HargaJual1",
        "Stok",
        "Catatan",
    ];

    fn grid(rows: &[&[&str]]) -> CellGrid {
        CellGrid::from_rows(rows.iter().map(|r| r.to_vec()))
    }

    #[test]
    fn test_items_are_mapped_by_header() {
        let items = parse_item_grid(&grid(&[
            HEADER,
            &[
                "SKU1", "Item One", "PCS", "DUS", "10.000", "12.500", "40", "ignored",
            ],
            &["", "", "", "", "", "", "", ""],
            &["SKU2", " Item Two ", "KG", "", "1.384,92", "", "", ""],
        ]))
        .unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].kode_item, "SKU1");
        assert_eq!(items[0].satuan2.as_deref(), Some("DUS"));
        assert_eq!(items[0].harga_beli, Some(10000.0));
        assert_eq!(items[0].harga_jual1, Some(12500.0));
        assert_eq!(items[0].stok, Some(40.0));

        assert_eq!(items[1].nama_item, "Item Two");
        assert_eq!(items[1].satuan2, None);
        assert_eq!(items[1].harga_beli, Some(1384.92));
        assert_eq!(items[1].harga_jual1, None);
        // Unmapped columns default
        assert_eq!(items[1].kode_jenis, "");
        assert_eq!(items[1].tipe, "");
    }

    #[test]
    fn test_missing_code_reports_row() {
        let err = parse_item_grid(&grid(&[
            HEADER,
            &["SKU1", "Item One", "", "", "", "", "", ""],
            &["  ", "Nameless code", "", "", "", "", "", ""],
        ]))
        .unwrap_err();

        assert_eq!(
            err,
            ImportError::MissingField {
                row: 3,
                field: "kodeItem",
                code: None
            }
        );
        assert_eq!(err.to_string(), "Row 3: kodeItem is required");
    }

    #[test]
    fn test_missing_name_reports_code() {
        let err = parse_item_grid(&grid(&[HEADER, &["SKU9", "", "", "", "", "", "", ""]]))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Row 2: namaItem is required (kodeItem 'SKU9')"
        );
    }

    #[test]
    fn test_sheet_without_code_column_fails_on_first_row() {
        let err = parse_item_grid(&grid(&[&["NamaItem"], &["Item One"]])).unwrap_err();
        assert!(matches!(err, ImportError::MissingField { row: 2, .. }));
    }

    #[test]
    fn test_empty_sheet() {
        assert!(parse_item_grid(&CellGrid::default()).unwrap().is_empty());
        assert!(parse_item_grid(&grid(&[HEADER])).unwrap().is_empty());
    }
}
