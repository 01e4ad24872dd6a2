use crate::types::offers::OfferRecord;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Offer row as persisted; the id comes from the upstream catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct OfferRow {
    pub id: i64,
    pub name: String,
    pub brand: String,
    pub category: String,
    pub merchant: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct AttributeRow {
    pub id: i64,
    pub name: String,
    pub value: String,
    pub offer_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct ImageRow {
    pub id: i64,
    pub width: i64,
    pub height: i64,
    pub url: String,
    pub offer_id: i64,
}

impl From<&OfferRecord> for OfferRow {
    fn from(rec: &OfferRecord) -> Self {
        Self {
            id: rec.id,
            name: rec.name.clone(),
            brand: rec.brand.clone(),
            category: rec.category.clone(),
            merchant: rec.merchant.clone(),
        }
    }
}
