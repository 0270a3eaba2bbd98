mod catalog_tests;
mod contact_tests;
mod detail_tests;
mod fragment_tests;
