//! Purchase invoice export: header, item and summary field extraction

use std::path::Path;

use anyhow::Result;

use super::classify::{RowRole, classify_purchase_row};
use super::grid::{CellGrid, load_grid};
use super::reducer::{DocumentSchema, reduce};
use super::types::{PurchaseDocument, PurchaseHeader, PurchaseItem, PurchaseSummary};
use super::values::{cell, non_empty, parse_date, parse_number};

const HEADER_LABELS: &[&str] = &["Nomor", "Admin", "Tanggal", "Pemasok", "Jatuh Tempo"];

/// Purchase item columns
mod cols {
    pub const NO: usize = 0;
    pub const KODE: usize = 1;
    pub const NAMA: usize = 2;
    pub const KUANTITAS: usize = 3;
    pub const SATUAN: usize = 4;
    pub const HARGA_BELI: usize = 5;
    // Column 6 holds a separator glyph in the export
    pub const DISKON: usize = 7;
    pub const JUMLAH: usize = 8;
}

pub struct PurchaseSchema;

impl DocumentSchema for PurchaseSchema {
    type Header = PurchaseHeader;
    type Item = PurchaseItem;
    type Summary = PurchaseSummary;

    const KIND: &'static str = "purchase";

    fn classify(row: &[String]) -> RowRole {
        classify_purchase_row(row)
    }

    fn header(row: &[String]) -> PurchaseHeader {
        PurchaseHeader {
            nomor: labeled_value(row, "Nomor"),
            admin: labeled_value(row, "Admin"),
            tanggal: labeled_value(row, "Tanggal").and_then(|d| parse_date(&d)),
            pemasok: labeled_value(row, "Pemasok"),
            jatuh_tempo: labeled_value(row, "Jatuh Tempo").and_then(|d| parse_date(&d)),
            lokasi: location(row),
        }
    }

    fn item(row: &[String]) -> PurchaseItem {
        PurchaseItem {
            no: cell(row, cols::NO).trim().parse().ok(),
            kode: non_empty(cell(row, cols::KODE)),
            nama: non_empty(cell(row, cols::NAMA)),
            kuantitas: parse_number(cell(row, cols::KUANTITAS)),
            satuan: non_empty(cell(row, cols::SATUAN)),
            harga_beli: parse_number(cell(row, cols::HARGA_BELI)),
            diskon: parse_number(cell(row, cols::DISKON)),
            jumlah: parse_number(cell(row, cols::JUMLAH)),
        }
    }

    fn summary(row: &[String]) -> PurchaseSummary {
        PurchaseSummary {
            keterangan: labeled_value(row, "Keterangan"),
            sub_total: labeled_value(row, "Sub Total").and_then(|v| parse_number(&v)),
            diskon: labeled_value(row, "Diskon").and_then(|v| parse_number(&v)),
            total: labeled_value(row, "Total").and_then(|v| parse_number(&v)),
        }
    }
}

/// Value of a `Label : value` triple. The label only counts when the next
/// cell is a lone colon; the first such occurrence wins. Blank values are
/// absent.
pub fn labeled_value(row: &[String], label: &str) -> Option<String> {
    row.iter().enumerate().find_map(|(i, c)| {
        if c.trim() == label && cell(row, i + 1).trim() == ":" {
            Some(non_empty(cell(row, i + 2)))
        } else {
            None
        }
    })?
}

/// The cell right before the `No` column label, unless it is blank, a colon
/// or one of the header labels
fn location(row: &[String]) -> Option<String> {
    let no_idx = row.iter().position(|c| c.trim() == "No")?;
    let candidate = row.get(no_idx.checked_sub(1)?)?.trim();

    if candidate.is_empty() || candidate == ":" || HEADER_LABELS.contains(&candidate) {
        None
    } else {
        Some(candidate.to_string())
    }
}

pub fn parse_purchase_grid(grid: &CellGrid) -> PurchaseDocument {
    reduce::<PurchaseSchema>(grid)
}

/// Load a purchase export and rebuild its invoices
pub fn read_purchase_excel<P: AsRef<Path>>(path: P) -> Result<PurchaseDocument> {
    let grid = load_grid(path)?;
    Ok(parse_purchase_grid(&grid))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_end_to_end_invoice() {
        let grid = CellGrid::from_rows(vec![
            vec!["LAPORAN PEMBELIAN", "Jl. Merdeka 1", "0211234567"],
            vec![
                "Nomor",
                ":",
                "BL2601000002",
                "Admin",
                ":",
                "Budi",
                "No",
                "Kode",
                "Nama",
            ],
            vec![
                "1", "SKU1", "Item One", "2", "PCS", "10000", ".", "0", "20000",
            ],
            vec![
                "Keterangan",
                ":",
                "",
                "Sub Total",
                ":",
                "20000",
                "Diskon",
                ":",
                "0",
                "Total",
                ":",
                "20000",
            ],
        ]);

        let doc = parse_purchase_grid(&grid);
        assert_eq!(doc.entries.len(), 1);

        let entry = &doc.entries[0];
        assert_eq!(entry.header.nomor.as_deref(), Some("BL2601000002"));
        assert_eq!(entry.header.admin.as_deref(), Some("Budi"));

        assert_eq!(entry.items.len(), 1);
        let item = &entry.items[0];
        assert_eq!(item.no, Some(1));
        assert_eq!(item.kode.as_deref(), Some("SKU1"));
        assert_eq!(item.nama.as_deref(), Some("Item One"));
        assert_eq!(item.kuantitas, Some(2.0));
        assert_eq!(item.satuan.as_deref(), Some("PCS"));
        assert_eq!(item.harga_beli, Some(10000.0));
        assert_eq!(item.diskon, Some(0.0));
        assert_eq!(item.jumlah, Some(20000.0));

        let summary = entry.summary.as_ref().unwrap();
        assert_eq!(summary.total, Some(20000.0));
        assert_eq!(summary.sub_total, Some(20000.0));
        assert_eq!(summary.diskon, Some(0.0));
        assert_eq!(summary.keterangan, None);

        assert_eq!(doc.meta.unwrap().phone.as_deref(), Some("0211234567"));
    }

    #[test]
    fn test_header_fields_and_dates() {
        let header = PurchaseSchema::header(&row(&[
            "Nomor",
            ":",
            "BL2601000003",
            "Tanggal",
            ":",
            "05/01/2026",
            "Pemasok",
            ":",
            "PT Sumber",
            "Jatuh Tempo",
            ":",
            "04-02-2026",
            "Gudang Utama",
            "No",
            "Kode",
            "Nama",
        ]));
        assert_eq!(header.nomor.as_deref(), Some("BL2601000003"));
        assert_eq!(header.tanggal.as_deref(), Some("2026-01-05"));
        assert_eq!(header.pemasok.as_deref(), Some("PT Sumber"));
        assert_eq!(header.jatuh_tempo.as_deref(), Some("2026-02-04"));
        assert_eq!(header.lokasi.as_deref(), Some("Gudang Utama"));
        assert_eq!(header.admin, None);
    }

    #[test]
    fn test_label_without_colon_is_ignored() {
        let r = row(&[
            "Pemasok",
            "PT Sumber",
            "Nomor",
            ":",
            "BL1",
            "No",
            "Kode",
            "Nama",
        ]);
        let header = PurchaseSchema::header(&r);
        assert_eq!(header.pemasok, None);
        assert_eq!(header.nomor.as_deref(), Some("BL1"));
    }

    #[test]
    fn test_invalid_date_is_absent() {
        let header = PurchaseSchema::header(&row(&["Tanggal", ":", "45/01/2026"]));
        assert_eq!(header.tanggal, None);
    }

    #[test]
    fn test_location_guards() {
        assert_eq!(location(&row(&["No", "Kode"])), None);
        assert_eq!(location(&row(&["Nomor", ":", "", "No"])), None);
        assert_eq!(location(&row(&["x", ":", "No"])), None);
        assert_eq!(location(&row(&["Tanggal", "No"])), None);
        assert_eq!(location(&row(&["Kode", "Nama"])), None);
        assert_eq!(
            location(&row(&["Toko 2", "No"])),
            Some("Toko 2".to_string())
        );
    }

    #[test]
    fn test_summary_with_note_and_european_numbers() {
        let summary = PurchaseSchema::summary(&row(&[
            "Keterangan",
            ":",
            "Retur sebagian",
            "Sub Total",
            ":",
            "1.384,92",
            "Diskon",
            ":",
            "",
            "Total",
            ":",
            "1.384,92",
        ]));
        assert_eq!(summary.keterangan.as_deref(), Some("Retur sebagian"));
        assert_eq!(summary.sub_total, Some(1384.92));
        assert_eq!(summary.diskon, None);
        assert_eq!(summary.total, Some(1384.92));
    }

    #[test]
    fn test_item_rows_without_identity_are_dropped() {
        let grid = CellGrid::from_rows(vec![
            vec![""],
            vec!["Nomor", ":", "BL1", "No", "Kode", "Nama"],
            vec!["1", "SKU1", "One", "1", "PCS", "500", ".", "0", "500"],
            vec!["2", "", "", "1", "PCS", "500", ".", "0", "500"],
            vec!["3", "", "Three", "1", "PCS", "700", ".", "0", "700"],
        ]);
        let doc = parse_purchase_grid(&grid);
        assert_eq!(doc.entries[0].items.len(), 2);
        assert_eq!(doc.entries[0].items[1].nama.as_deref(), Some("Three"));
        assert!(doc.entries[0].summary.is_none());
    }

    #[test]
    fn test_multiple_invoices_and_leading_orphans() {
        let grid = CellGrid::from_rows(vec![
            vec![""],
            vec!["1", "ORPHAN", "Before header"],
            vec!["Nomor", ":", "BL1", "No", "Kode", "Nama"],
            vec!["1", "A", "Alpha", "1"],
            vec!["Dicetak: 05/01/2026"],
            vec!["Nomor", ":", "BL2", "No", "Kode", "Nama"],
            vec!["1", "B", "Beta", "3"],
            vec!["2", "C", "Gamma", "4"],
        ]);
        let doc = parse_purchase_grid(&grid);
        let numbers: Vec<_> = doc
            .entries
            .iter()
            .map(|e| e.header.nomor.clone().unwrap())
            .collect();
        assert_eq!(numbers, vec!["BL1", "BL2"]);
        assert_eq!(doc.entries[0].items.len(), 1);
        assert_eq!(doc.entries[1].items.len(), 2);
    }
}
