//! SQL DDL for initializing the offer snapshot database.
//! SQLite-first design; can be adapted for other RDBMS.

/// SQLite schema with:
/// - `offers.id` supplied by the upstream catalog (plain primary key)
/// - `attributes.id` / `images.id` INTEGER PRIMARY KEY AUTOINCREMENT
/// - `ON DELETE CASCADE` on both child tables: an offer owns its rows
/// - `images.offer_id` UNIQUE (at most one image per offer)
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS offers (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    brand TEXT NOT NULL,
    category TEXT NOT NULL,
    merchant TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS attributes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    value TEXT NOT NULL,
    offer_id INTEGER NOT NULL REFERENCES offers(id) ON DELETE CASCADE
);

CREATE TABLE IF NOT EXISTS images (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    width INTEGER NOT NULL,
    height INTEGER NOT NULL,
    url TEXT NOT NULL,
    offer_id INTEGER NOT NULL UNIQUE REFERENCES offers(id) ON DELETE CASCADE
);

-- Non-unique index for the per-offer attribute lookups used in verification.
CREATE INDEX IF NOT EXISTS idx_attributes_offer_id ON attributes(offer_id);
"#;
