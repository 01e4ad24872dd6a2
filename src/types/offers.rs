use serde::Deserialize;

/// Envelope wrapper: the upstream returns `{"offers": [...]}`.
#[derive(Debug, Deserialize)]
pub struct OffersEnvelope {
    pub offers: Vec<OfferRecord>,
}

/// One product listing as served by the offers API.
///
/// `attributes` and `image` are required: a record without them is malformed
/// and fails the whole decode rather than being skipped silently.
#[derive(Debug, Clone, Deserialize)]
pub struct OfferRecord {
    pub id: i64,
    pub name: String,
    pub brand: String,
    pub category: String,
    pub merchant: String,
    pub attributes: Vec<AttributeRecord>,
    pub image: ImageRecord,
}

/// Named key/value property belonging to one offer.
#[derive(Debug, Clone, Deserialize)]
pub struct AttributeRecord {
    pub name: String,
    pub value: String,
}

/// Single image descriptor (dimensions + URL) belonging to one offer.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageRecord {
    pub width: i64,
    pub height: i64,
    pub url: String,
}

/// Parse a raw API body into offer records.
pub fn offers_from_slice(body: &[u8]) -> Result<Vec<OfferRecord>, serde_json::Error> {
    let envelope: OffersEnvelope = serde_json::from_slice(body)?;
    Ok(envelope.offers)
}
