// Service exports
pub mod catalog;

pub use catalog::{CatalogDiagnostic, CatalogError, LenderCatalog};
