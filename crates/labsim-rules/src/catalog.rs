use labsim_core::catalog::LabCatalog;
use labsim_core::item::ItemTable;
use labsim_core::practice::Practice;
use thiserror::Error;

use crate::loader::{load_all_items, load_all_practices, LoadError};
use crate::validator::{validate_items, validate_practices, ValidationError};

/// Failure to assemble a usable catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("Invalid lab content ({} problem(s)): {}", .0.len(), summarize(.0))]
    InvalidContent(Vec<ValidationError>),
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Validate items and practices together and produce the catalog.
/// Every violation is reported at once; nothing partial is returned.
pub fn build_catalog(items: ItemTable, practices: Vec<Practice>) -> Result<LabCatalog, CatalogError> {
    let mut errors = Vec::new();
    if let Err(mut item_errors) = validate_items(&items) {
        errors.append(&mut item_errors);
    }
    if let Err(mut practice_errors) = validate_practices(&practices, &items) {
        errors.append(&mut practice_errors);
    }
    if !errors.is_empty() {
        log::warn!("Rejected lab content with {} problem(s)", errors.len());
        return Err(CatalogError::InvalidContent(errors));
    }

    log::info!(
        "Loaded lab catalog: {} items ({} chemicals), {} practices",
        items.len(),
        items.iter().filter(|item| item.is_chemical()).count(),
        practices.len()
    );
    Ok(LabCatalog { items, practices })
}

/// Parse RON sources and build a validated catalog.
pub fn load_catalog(item_sources: &[&str], practice_sources: &[&str]) -> Result<LabCatalog, CatalogError> {
    let items = load_all_items(item_sources)?;
    let practices = load_all_practices(practice_sources)?;
    build_catalog(items, practices)
}
