pub mod builtin;
pub mod catalog;
pub mod loader;
pub mod validator;

pub use catalog::{build_catalog, CatalogError};
