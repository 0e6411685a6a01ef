//! Sales receipt export: fixed-layout items and summary

use std::path::Path;

use anyhow::Result;

use super::classify::{RowRole, classify_sales_row};
use super::grid::{CellGrid, load_grid};
use super::reducer::{DocumentSchema, reduce};
use super::types::{SalesDocument, SalesHeader, SalesItem, SalesSummary};
use super::values::{cell, non_empty, parse_number};

/// Sales item columns
mod cols {
    pub const NO: usize = 0;
    pub const KODE: usize = 1;
    pub const NAMA: usize = 2;
    pub const KUANTITAS: usize = 3;
    pub const SATUAN: usize = 4;
    pub const HARGA: usize = 5;
    pub const DISKON: usize = 6;
    pub const JUMLAH: usize = 7;
}

/// Summary rows read `Sub Total | value | Diskon | value | Total | value`
mod summary_cols {
    pub const SUB_TOTAL: usize = 1;
    pub const DISKON: usize = 3;
    pub const TOTAL: usize = 5;
}

pub struct SalesSchema;

impl DocumentSchema for SalesSchema {
    type Header = SalesHeader;
    type Item = SalesItem;
    type Summary = SalesSummary;

    const KIND: &'static str = "sales";

    fn classify(row: &[String]) -> RowRole {
        classify_sales_row(row)
    }

    fn header(row: &[String]) -> SalesHeader {
        SalesHeader {
            nomor: cell(row, 0).trim().to_string(),
        }
    }

    fn item(row: &[String]) -> SalesItem {
        SalesItem {
            no: cell(row, cols::NO).trim().parse().ok(),
            kode: non_empty(cell(row, cols::KODE)),
            nama: non_empty(cell(row, cols::NAMA)),
            kuantitas: parse_number(cell(row, cols::KUANTITAS)),
            satuan: non_empty(cell(row, cols::SATUAN)),
            harga: parse_number(cell(row, cols::HARGA)),
            diskon: parse_number(cell(row, cols::DISKON)),
            jumlah: parse_number(cell(row, cols::JUMLAH)),
        }
    }

    fn summary(row: &[String]) -> SalesSummary {
        SalesSummary {
            sub_total: parse_number(cell(row, summary_cols::SUB_TOTAL)),
            diskon: parse_number(cell(row, summary_cols::DISKON)),
            total: parse_number(cell(row, summary_cols::TOTAL)),
        }
    }
}

pub fn parse_sales_grid(grid: &CellGrid) -> SalesDocument {
    reduce::<SalesSchema>(grid)
}

/// Load a sales export and rebuild its receipts
pub fn read_sales_excel<P: AsRef<Path>>(path: P) -> Result<SalesDocument> {
    let grid = load_grid(path)?;
    Ok(parse_sales_grid(&grid))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sales_grid() -> CellGrid {
        CellGrid::from_rows(vec![
            vec!["TOKO MAJU", "Jl. Pasar 3", "08123"],
            vec![
                "SL2601000001",
                "",
                "No",
                "Kode",
                "Nama",
                "Kts",
                "Sat",
                "Harga",
            ],
            vec!["1", "SKU1", "Item One", "2", "pcs", "10.000", "0", "20.000"],
            vec!["2", "SKU2", "Item Two", "1,5", "KG", "8.000", "", "12.000"],
            vec!["Sub Total", "32.000", "Diskon", "0", "Total", "32.000"],
            vec!["SL2601000002", "", "No", "Kode", "Nama", "Kts", "Sat"],
            vec![
                "1",
                "SKU3",
                "Item Three",
                "1",
                "DUS",
                "1,384.92",
                "",
                "1,384.92",
            ],
        ])
    }

    #[test]
    fn test_sales_receipts() {
        let doc = parse_sales_grid(&sales_grid());
        assert_eq!(doc.entries.len(), 2);

        let first = &doc.entries[0];
        assert_eq!(first.header.nomor, "SL2601000001");
        assert_eq!(first.items.len(), 2);
        assert_eq!(first.items[0].satuan.as_deref(), Some("pcs"));
        assert_eq!(first.items[0].harga, Some(10000.0));
        assert_eq!(first.items[1].kuantitas, Some(1.5));
        assert_eq!(first.items[1].diskon, None);

        let summary = first.summary.as_ref().unwrap();
        assert_eq!(summary.sub_total, Some(32000.0));
        assert_eq!(summary.diskon, Some(0.0));
        assert_eq!(summary.total, Some(32000.0));

        let second = &doc.entries[1];
        assert_eq!(second.header.nomor, "SL2601000002");
        assert_eq!(second.items[0].harga, Some(1384.92));
        assert!(second.summary.is_none());
    }

    #[test]
    fn test_summary_before_header_is_discarded() {
        let grid = CellGrid::from_rows(vec![
            vec![""],
            vec!["Sub Total", "32.000", "Diskon", "0", "Total", "32.000"],
            vec!["1", "SKU1", "Item One", "2"],
        ]);
        let doc = parse_sales_grid(&grid);
        assert!(doc.entries.is_empty());
    }
}
