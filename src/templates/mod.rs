pub mod components;
pub mod fragments;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use components::html_error_response;
pub use layouts::site_layout;

/// Path of a listing's detail page, with the identifier as one encoded segment.
pub fn listing_path(id: &str) -> String {
    format!("/apartment/{}", urlencoding::encode(id))
}
