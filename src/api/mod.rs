mod client;
mod fetch_error;

pub use client::ListingsApi;
pub use fetch_error::FetchError;
