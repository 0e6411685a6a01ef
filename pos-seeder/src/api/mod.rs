//! POS REST API adapter
//!
//! Everything that knows about the backend's URLs, authentication and
//! response envelopes lives here; the importers never see it.

pub mod client;
pub mod error;
pub mod models;
pub mod resilience;

pub use client::{PosApi, PosClient};
pub use error::ApiError;
pub use models::{
    Branch, CatalogItem, ItemVariant, PurchasePayload, RecordId, SalesLinePayload, SalesPayload,
};
pub use resilience::RetryConfig;
