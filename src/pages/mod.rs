//! Page components for Card Catalog.

mod catalog;

pub use catalog::Catalog;
