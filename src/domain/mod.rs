pub mod format;
pub mod listing;

pub use listing::{ImageRef, Listing, ListingStatus, ListingsEnvelope, Price};
