//! Transaction document trees for purchase and sales exports

use serde::Serialize;

/// Report-level metadata read from the first row of an export
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DocumentMeta {
    pub title: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
}

/// Root output of one parse pass: metadata plus entries in sheet order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionDocument<H, I, S> {
    pub meta: Option<DocumentMeta>,
    pub entries: Vec<TransactionEntry<H, I, S>>,
}

impl<H, I, S> Default for TransactionDocument<H, I, S> {
    fn default() -> Self {
        Self {
            meta: None,
            entries: Vec::new(),
        }
    }
}

/// One business transaction assembled from a header row and the rows after it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionEntry<H, I, S> {
    pub header: H,
    pub items: Vec<I>,
    pub summary: Option<S>,
}

impl<H, I, S> TransactionEntry<H, I, S> {
    /// Start an entry with no items and no summary yet
    pub fn new(header: H) -> Self {
        Self {
            header,
            items: Vec::new(),
            summary: None,
        }
    }
}

/// Identity fields shared by purchase and sales line items
pub trait LineItem {
    fn code(&self) -> Option<&str>;
    fn name(&self) -> Option<&str>;

    /// An item row without code and name is structurally not an item
    fn is_structural(&self) -> bool {
        self.code().is_some() || self.name().is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseHeader {
    pub nomor: Option<String>,
    pub admin: Option<String>,
    /// Normalized to `yyyy-mm-dd`
    pub tanggal: Option<String>,
    pub pemasok: Option<String>,
    /// Normalized to `yyyy-mm-dd`
    pub jatuh_tempo: Option<String>,
    pub lokasi: Option<String>,
}

/// Purchase line. `diskon` is carried as read; how it relates to `jumlah`
/// is not derivable from the export, so nothing recomputes it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseItem {
    pub no: Option<u32>,
    pub kode: Option<String>,
    pub nama: Option<String>,
    pub kuantitas: Option<f64>,
    pub satuan: Option<String>,
    pub harga_beli: Option<f64>,
    pub diskon: Option<f64>,
    pub jumlah: Option<f64>,
}

impl LineItem for PurchaseItem {
    fn code(&self) -> Option<&str> {
        self.kode.as_deref()
    }

    fn name(&self) -> Option<&str> {
        self.nama.as_deref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseSummary {
    pub keterangan: Option<String>,
    pub sub_total: Option<f64>,
    pub diskon: Option<f64>,
    pub total: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesHeader {
    pub nomor: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesItem {
    pub no: Option<u32>,
    pub kode: Option<String>,
    pub nama: Option<String>,
    pub kuantitas: Option<f64>,
    pub satuan: Option<String>,
    pub harga: Option<f64>,
    pub diskon: Option<f64>,
    pub jumlah: Option<f64>,
}

impl LineItem for SalesItem {
    fn code(&self) -> Option<&str> {
        self.kode.as_deref()
    }

    fn name(&self) -> Option<&str> {
        self.nama.as_deref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesSummary {
    pub sub_total: Option<f64>,
    pub diskon: Option<f64>,
    pub total: Option<f64>,
}

pub type PurchaseEntry = TransactionEntry<PurchaseHeader, PurchaseItem, PurchaseSummary>;
pub type PurchaseDocument = TransactionDocument<PurchaseHeader, PurchaseItem, PurchaseSummary>;
pub type SalesEntry = TransactionEntry<SalesHeader, SalesItem, SalesSummary>;
pub type SalesDocument = TransactionDocument<SalesHeader, SalesItem, SalesSummary>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_item_needs_code_or_name() {
        let mut item = PurchaseItem::default();
        assert!(!item.is_structural());

        item.nama = Some("Item One".to_string());
        assert!(item.is_structural());

        let sales = SalesItem {
            kode: Some("SKU1".to_string()),
            ..Default::default()
        };
        assert!(sales.is_structural());
    }

    #[test]
    fn test_absent_numbers_serialize_as_null() {
        let item = PurchaseItem {
            kode: Some("SKU1".to_string()),
            harga_beli: Some(10000.0),
            ..Default::default()
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["kode"], "SKU1");
        assert_eq!(json["hargaBeli"], 10000.0);
        assert!(json["diskon"].is_null());
    }
}
