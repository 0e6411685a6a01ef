//! Matching sales lines against the live item catalog

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::api::{CatalogItem, ItemVariant, RecordId, SalesLinePayload, SalesPayload};
use crate::import::{SalesEntry, SalesItem};

/// Catalog indexed by exact item code
pub struct Catalog<'a> {
    by_code: HashMap<&'a str, &'a CatalogItem>,
}

impl<'a> Catalog<'a> {
    pub fn new(items: &'a [CatalogItem]) -> Self {
        let mut by_code: HashMap<&'a str, &'a CatalogItem> = HashMap::with_capacity(items.len());
        for item in items {
            match by_code.entry(item.kode_item.as_str()) {
                Entry::Vacant(slot) => {
                    slot.insert(item);
                }
                Entry::Occupied(_) => log::warn!(
                    "Duplicate catalog code {} ({}); keeping the first one",
                    item.kode_item,
                    item.nama_item
                ),
            }
        }
        Self { by_code }
    }

    pub fn find(&self, code: &str) -> Option<&'a CatalogItem> {
        self.by_code.get(code).copied()
    }

    pub fn len(&self) -> usize {
        self.by_code.len()
    }
}

/// Pick the variant whose unit matches `unit` ignoring case. An item with a
/// single variant matches whatever unit the sheet names.
pub fn resolve_variant<'a>(item: &'a CatalogItem, unit: Option<&str>) -> Option<&'a ItemVariant> {
    let by_unit = unit.and_then(|unit| {
        item.variants
            .iter()
            .find(|v| v.unit.trim().eq_ignore_ascii_case(unit.trim()))
    });

    match (by_unit, item.variants.as_slice()) {
        (Some(variant), _) => Some(variant),
        (None, [only]) => Some(only),
        (None, _) => None,
    }
}

/// Why a sales line was left out of the posted receipt
#[derive(Debug, Clone, PartialEq)]
pub enum LineSkip {
    NoCode,
    UnknownItem(String),
    UnknownVariant { code: String, unit: Option<String> },
    NoPrice { code: String, unit: String },
    NoQuantity(String),
}

impl std::fmt::Display for LineSkip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LineSkip::NoCode => write!(f, "line has no item code"),
            LineSkip::UnknownItem(code) => write!(f, "item {} not found in catalog", code),
            LineSkip::UnknownVariant { code, unit } => write!(
                f,
                "item {} has no variant for unit {}",
                code,
                unit.as_deref().unwrap_or("(none)")
            ),
            LineSkip::NoPrice { code, unit } => {
                write!(f, "item {} unit {} has no selling price", code, unit)
            }
            LineSkip::NoQuantity(code) => write!(f, "item {} has no positive quantity", code),
        }
    }
}

/// Resolve one sales line to a catalog variant priced from the catalog
pub fn resolve_line(catalog: &Catalog<'_>, line: &SalesItem) -> Result<SalesLinePayload, LineSkip> {
    let code = line.kode.as_deref().ok_or(LineSkip::NoCode)?;
    let item = catalog
        .find(code)
        .ok_or_else(|| LineSkip::UnknownItem(code.to_string()))?;

    let variant = resolve_variant(item, line.satuan.as_deref()).ok_or_else(|| {
        LineSkip::UnknownVariant {
            code: code.to_string(),
            unit: line.satuan.clone(),
        }
    })?;

    let quantity = line
        .kuantitas
        .filter(|q| *q > 0.0)
        .ok_or_else(|| LineSkip::NoQuantity(code.to_string()))?;

    let price = variant.price.ok_or_else(|| LineSkip::NoPrice {
        code: code.to_string(),
        unit: variant.unit.clone(),
    })?;

    Ok(SalesLinePayload {
        item_id: item.id.clone(),
        variant_id: variant.id.clone(),
        quantity,
        price,
        subtotal: price * quantity,
    })
}

/// Build the receipt to post for a sales entry.
///
/// Unresolvable lines are skipped with a warning. Returns `None` when no
/// line resolves. The total is recomputed from catalog prices; the sheet's
/// own totals and the per-line discounts are not sent.
pub fn build_sales_payload(
    catalog: &Catalog<'_>,
    entry: &SalesEntry,
    branch_id: &RecordId,
    tanggal: &str,
) -> Option<SalesPayload> {
    let mut payload = SalesPayload::new(branch_id.clone(), &entry.header, tanggal.to_string());

    for line in &entry.items {
        match resolve_line(catalog, line) {
            Ok(resolved) => payload.items.push(resolved),
            Err(skip) => log::warn!("{}: skipping line {}", entry.header.nomor, skip),
        }
    }

    if payload.items.is_empty() {
        return None;
    }

    payload.total = payload.items.iter().map(|l| l.subtotal).sum();
    Some(payload)
}
