pub mod offers_api;

pub use offers_api::OffersApi;
