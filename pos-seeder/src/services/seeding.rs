//! Posting imported records to the POS API, one call per record

use crate::api::{Branch, CatalogItem, PosApi, PurchasePayload};
use crate::import::{ItemRecord, PurchaseDocument, SalesDocument};

use super::catalog::{Catalog, build_sales_payload};

/// Outcome counts of one seeding run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub succeeded: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl SeedReport {
    pub fn total(&self) -> usize {
        self.succeeded + self.failed + self.skipped
    }
}

impl std::fmt::Display for SeedReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} succeeded, {} failed, {} skipped",
            self.succeeded, self.failed, self.skipped
        )
    }
}

pub async fn seed_items(api: &dyn PosApi, items: &[ItemRecord]) -> SeedReport {
    let mut report = SeedReport::default();

    for item in items {
        match api.create_item(item).await {
            Ok(()) => {
                log::debug!("Created item {}", item.kode_item);
                report.succeeded += 1;
            }
            Err(e) => {
                log::error!("Item {} failed: {}", item.kode_item, e);
                report.failed += 1;
            }
        }
    }

    report
}

pub async fn seed_purchases(
    api: &dyn PosApi,
    branch: &Branch,
    document: &PurchaseDocument,
) -> SeedReport {
    let mut report = SeedReport::default();

    for entry in &document.entries {
        let nomor = entry.header.nomor.as_deref().unwrap_or("(no number)");
        if entry.items.is_empty() {
            log::warn!("Purchase {} has no items; skipping", nomor);
            report.skipped += 1;
            continue;
        }

        let payload = PurchasePayload {
            branch_id: &branch.id,
            entry,
        };
        match api.create_purchase(&payload).await {
            Ok(()) => {
                log::info!("Posted purchase {} ({} items)", nomor, entry.items.len());
                report.succeeded += 1;
            }
            Err(e) => {
                log::error!("Purchase {} failed: {}", nomor, e);
                report.failed += 1;
            }
        }
    }

    report
}

/// Post every sales receipt that has at least one line matching the catalog
pub async fn seed_sales(
    api: &dyn PosApi,
    branch: &Branch,
    catalog_items: &[CatalogItem],
    document: &SalesDocument,
    tanggal: &str,
) -> SeedReport {
    let catalog = Catalog::new(catalog_items);
    log::debug!("Catalog indexed {} item codes", catalog.len());
    let mut report = SeedReport::default();

    for entry in &document.entries {
        let Some(payload) = build_sales_payload(&catalog, entry, &branch.id, tanggal) else {
            log::warn!(
                "Sales {}: no line matched the catalog; skipping",
                entry.header.nomor
            );
            report.skipped += 1;
            continue;
        };

        match api.create_sales(&payload).await {
            Ok(()) => {
                log::info!(
                    "Posted sales {} ({} lines, total {})",
                    payload.nomor,
                    payload.items.len(),
                    payload.total
                );
                report.succeeded += 1;
            }
            Err(e) => {
                log::error!("Sales {} failed: {}", payload.nomor, e);
                report.failed += 1;
            }
        }
    }

    report
}
