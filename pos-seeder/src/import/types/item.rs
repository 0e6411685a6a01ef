//! Catalog item records from the item master export

use serde::Serialize;

/// Fields an item-export column can feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemColumn {
    KodeItem,
    NamaItem,
    KodeJenis,
    KodePemasok,
    HargaBeli,
    HargaPokok,
    Satuan1,
    Satuan2,
    Kuantitas1,
    Kuantitas2,
    HargaJual1,
    HargaJual2,
    HargaJual3,
    HargaJual4,
    Stok,
    Upload,
    Tipe,
}

/// Spreadsheet header text -> field. Columns not listed here are ignored.
pub const ITEM_COLUMNS: &[(&str, ItemColumn)] = &[
    ("KodeItem", ItemColumn::KodeItem),
    ("NamaItem", ItemColumn::NamaItem),
    ("KodeJenis", ItemColumn::KodeJenis),
    ("KodePemasok", ItemColumn::KodePemasok),
    ("HargaBeli", ItemColumn::HargaBeli),
    ("HargaPokok", ItemColumn::HargaPokok),
    ("Satuan1", ItemColumn::Satuan1),
    ("Satuan2", ItemColumn::Satuan2),
    ("Kuantitas1", ItemColumn::Kuantitas1),
    ("Kuantitas2", ItemColumn::Kuantitas2),
    ("HargaJual1", ItemColumn::HargaJual1),
    ("HargaJual2", ItemColumn::HargaJual2),
    ("HargaJual3", ItemColumn::HargaJual3),
    ("HargaJual4", ItemColumn::HargaJual4),
    ("Stok", ItemColumn::Stok),
    ("Upload", ItemColumn::Upload),
    ("Tipe", ItemColumn::Tipe),
];

impl ItemColumn {
    /// Look up a header cell in the column table (exact match after trimming)
    pub fn from_header(header: &str) -> Option<Self> {
        let header = header.trim();
        ITEM_COLUMNS
            .iter()
            .find(|(name, _)| *name == header)
            .map(|(_, column)| *column)
    }

    /// Field name used in the API payload
    pub fn field_name(&self) -> &'static str {
        match self {
            ItemColumn::KodeItem => "kodeItem",
            ItemColumn::NamaItem => "namaItem",
            ItemColumn::KodeJenis => "kodeJenis",
            ItemColumn::KodePemasok => "kodePemasok",
            ItemColumn::HargaBeli => "hargaBeli",
            ItemColumn::HargaPokok => "hargaPokok",
            ItemColumn::Satuan1 => "satuan1",
            ItemColumn::Satuan2 => "satuan2",
            ItemColumn::Kuantitas1 => "kuantitas1",
            ItemColumn::Kuantitas2 => "kuantitas2",
            ItemColumn::HargaJual1 => "hargaJual1",
            ItemColumn::HargaJual2 => "hargaJual2",
            ItemColumn::HargaJual3 => "hargaJual3",
            ItemColumn::HargaJual4 => "hargaJual4",
            ItemColumn::Stok => "stok",
            ItemColumn::Upload => "upload",
            ItemColumn::Tipe => "tipe",
        }
    }
}

/// One catalog item. Text fields default to empty, except `satuan2` where
/// "no secondary unit" is kept apart from an empty unit name.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRecord {
    pub kode_item: String,
    pub nama_item: String,
    pub kode_jenis: String,
    pub kode_pemasok: String,
    pub harga_beli: Option<f64>,
    pub harga_pokok: Option<f64>,
    pub satuan1: String,
    pub satuan2: Option<String>,
    pub kuantitas1: Option<f64>,
    pub kuantitas2: Option<f64>,
    pub harga_jual1: Option<f64>,
    pub harga_jual2: Option<f64>,
    pub harga_jual3: Option<f64>,
    pub harga_jual4: Option<f64>,
    pub stok: Option<f64>,
    pub upload: String,
    pub tipe: String,
}
