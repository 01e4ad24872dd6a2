use crate::db::models::{AttributeRow, ImageRow, OfferRow};
use crate::db::schema::SQLITE_INIT;
use crate::error::PullError;
use crate::types::offers::OfferRecord;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::path::Path;
use tracing::debug;

pub type SqlitePool = Pool<Sqlite>;

/// Owns the SQLite pool and every write issued during a run.
#[derive(Clone)]
pub struct OfferStorage {
    pool: SqlitePool,
}

/// Row counts produced by one `populate` pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PopulateSummary {
    pub offers: u64,
    pub attributes: u64,
    pub images: u64,
}

impl OfferStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (or create) the snapshot database file at `path`.
    pub async fn open(path: &Path) -> Result<Self, PullError> {
        let connect_opts = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .foreign_keys(true);
        let pool = SqlitePoolOptions::new().connect_with(connect_opts).await?;
        Ok(Self::new(pool))
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), PullError> {
        // execute multiple statements safely (SQLite supports multi-commands but sqlx::query doesn't)
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Insert every offer with its attributes and image, in input order.
    /// One transaction for the whole batch; the first failure rolls it all back.
    pub async fn populate(&self, offers: &[OfferRecord]) -> Result<PopulateSummary, PullError> {
        let mut tx = self.pool.begin().await?;
        let mut summary = PopulateSummary::default();

        for offer in offers {
            sqlx::query(
                "INSERT INTO offers (id, name, brand, category, merchant) VALUES (?, ?, ?, ?, ?)",
            )
            .bind(offer.id)
            .bind(&offer.name)
            .bind(&offer.brand)
            .bind(&offer.category)
            .bind(&offer.merchant)
            .execute(&mut *tx)
            .await?;
            summary.offers += 1;

            for attr in &offer.attributes {
                sqlx::query("INSERT INTO attributes (name, value, offer_id) VALUES (?, ?, ?)")
                    .bind(&attr.name)
                    .bind(&attr.value)
                    .bind(offer.id)
                    .execute(&mut *tx)
                    .await?;
                summary.attributes += 1;
            }

            sqlx::query("INSERT INTO images (width, height, url, offer_id) VALUES (?, ?, ?, ?)")
                .bind(offer.image.width)
                .bind(offer.image.height)
                .bind(&offer.image.url)
                .bind(offer.id)
                .execute(&mut *tx)
                .await?;
            summary.images += 1;

            debug!(
                offer_id = offer.id,
                attributes = offer.attributes.len(),
                "offer staged"
            );
        }

        tx.commit().await?;
        Ok(summary)
    }

    pub async fn offer(&self, id: i64) -> Result<OfferRow, PullError> {
        let row: OfferRow =
            sqlx::query_as("SELECT id, name, brand, category, merchant FROM offers WHERE id = ?")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;
        Ok(row)
    }

    /// Attributes owned by one offer, in insertion order.
    pub async fn attributes_for(&self, offer_id: i64) -> Result<Vec<AttributeRow>, PullError> {
        let rows: Vec<AttributeRow> = sqlx::query_as(
            "SELECT id, name, value, offer_id FROM attributes WHERE offer_id = ? ORDER BY id",
        )
        .bind(offer_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn image_for(&self, offer_id: i64) -> Result<Option<ImageRow>, PullError> {
        let row: Option<ImageRow> = sqlx::query_as(
            "SELECT id, width, height, url, offer_id FROM images WHERE offer_id = ?",
        )
        .bind(offer_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// (offers, attributes, images) row totals, used to verify a pass.
    pub async fn table_counts(&self) -> Result<(i64, i64, i64), PullError> {
        let offers: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM offers")
            .fetch_one(&self.pool)
            .await?;
        let attributes: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM attributes")
            .fetch_one(&self.pool)
            .await?;
        let images: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM images")
            .fetch_one(&self.pool)
            .await?;
        Ok((offers.0, attributes.0, images.0))
    }

    /// Drain the pool so every connection has released the file before the
    /// one-shot process exits.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
