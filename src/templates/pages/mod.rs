pub mod catalog;
pub mod detail;

pub use catalog::catalog_page;
pub use detail::{detail_error_page, detail_page, DetailVm};
