//! Spreadsheet import for legacy POS exports
//!
//! Three export kinds are supported:
//! - item master lists (one item per row under a column-header row)
//! - purchase invoice reports (header / item / summary row blocks)
//! - sales receipt reports (header / item / summary row blocks)
//!
//! Every sheet is first loaded as a grid of display text; numbers and dates
//! are parsed from that text so long codes never lose precision.

pub mod classify;
pub mod grid;
pub mod items;
pub mod purchase;
pub mod reducer;
pub mod sales;
pub mod types;
pub mod values;

pub use items::read_items_excel;
pub use purchase::read_purchase_excel;
pub use sales::read_sales_excel;
pub use types::*;
