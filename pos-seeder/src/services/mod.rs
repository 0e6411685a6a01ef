// Business logic services layer
//
// Catalog matching and seeding run on parsed documents and talk to the
// backend only through the `PosApi` trait.

pub mod catalog;
pub mod seeding;

pub use seeding::{SeedReport, seed_items, seed_purchases, seed_sales};
