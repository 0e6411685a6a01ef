//! Request and response shapes of the POS REST API

use serde::{Deserialize, Serialize};

use crate::import::{PurchaseEntry, SalesHeader};

/// Record identifier; the API uses numeric ids on some resources and
/// string ids on others
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Int(i64),
    Text(String),
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordId::Int(i) => write!(f, "{}", i),
            RecordId::Text(s) => write!(f, "{}", s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    pub id: RecordId,
    #[serde(default, alias = "nama")]
    pub name: String,
}

/// Catalog item with its sellable unit variants
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub id: RecordId,
    #[serde(alias = "kode")]
    pub kode_item: String,
    #[serde(default, alias = "nama")]
    pub nama_item: String,
    #[serde(default)]
    pub variants: Vec<ItemVariant>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemVariant {
    pub id: RecordId,
    #[serde(alias = "satuan")]
    pub unit: String,
    #[serde(default, alias = "hargaJual")]
    pub price: Option<f64>,
}

/// List endpoints answer with a bare array or wrap it in `rows`/`data`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum Listing<T> {
    Bare(Vec<T>),
    Rows { rows: Vec<T> },
    Data { data: Vec<T> },
    Nested { data: Box<Listing<T>> },
}

impl<T> Listing<T> {
    pub(crate) fn into_vec(self) -> Vec<T> {
        match self {
            Listing::Bare(v) | Listing::Rows { rows: v } | Listing::Data { data: v } => v,
            Listing::Nested { data } => data.into_vec(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Pull the bearer token out of a login response
pub(crate) fn extract_token(body: &serde_json::Value) -> Option<String> {
    ["token", "accessToken", "access_token"]
        .iter()
        .find_map(|key| body.get(*key).and_then(|v| v.as_str()))
        .map(str::to_string)
        .or_else(|| body.get("data").and_then(extract_token))
}

/// Purchase invoice as posted to the API
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchasePayload<'a> {
    pub branch_id: &'a RecordId,
    #[serde(flatten)]
    pub entry: &'a PurchaseEntry,
}

/// Sales receipt as posted to the API. Totals come from catalog prices.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesPayload {
    pub branch_id: RecordId,
    pub nomor: String,
    pub tanggal: String,
    pub items: Vec<SalesLinePayload>,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesLinePayload {
    pub item_id: RecordId,
    pub variant_id: RecordId,
    pub quantity: f64,
    pub price: f64,
    pub subtotal: f64,
}

impl SalesPayload {
    pub fn new(branch_id: RecordId, header: &SalesHeader, tanggal: String) -> Self {
        Self {
            branch_id,
            nomor: header.nomor.clone(),
            tanggal,
            items: Vec::new(),
            total: 0.0,
        }
    }
}
