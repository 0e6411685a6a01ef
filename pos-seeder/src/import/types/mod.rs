//! Typed records produced by the spreadsheet importers

mod document;
mod item;

pub use document::{
    DocumentMeta, LineItem, PurchaseDocument, PurchaseEntry, PurchaseHeader, PurchaseItem,
    PurchaseSummary, SalesDocument, SalesEntry, SalesHeader, SalesItem, SalesSummary,
    TransactionDocument, TransactionEntry,
};
pub use item::{ItemColumn, ItemRecord};
