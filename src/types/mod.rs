pub mod offers;

pub use offers::{AttributeRecord, ImageRecord, OfferRecord, OffersEnvelope};
