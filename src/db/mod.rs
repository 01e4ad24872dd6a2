//! Database module: models and schema for the offer snapshot.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows and conversions
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::{AttributeRow, ImageRow, OfferRow};
pub use schema::SQLITE_INIT;
pub use sqlite::{OfferStorage, PopulateSummary, SqlitePool};
