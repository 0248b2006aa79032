//! The content pack shipped in `data/`, embedded at compile time.

use labsim_core::catalog::LabCatalog;

use crate::catalog::{load_catalog, CatalogError};

pub const ITEMS: &str = include_str!("../../../data/items.ron");

/// Practice sources in catalog order.
pub const PRACTICES: &[&str] = &[
    include_str!("../../../data/practices/reaksi_eksoterm.ron"),
    include_str!("../../../data/practices/reaksi_endoterm.ron"),
    include_str!("../../../data/practices/reaksi_pengendapan.ron"),
    include_str!("../../../data/practices/titrasi_asam_basa.ron"),
];

/// Id of the reference exothermic practice.
pub const EXOTHERM_PRACTICE_ID: &str = "reaksi-eksoterm";

/// Load and validate the embedded catalog.
pub fn catalog() -> Result<LabCatalog, CatalogError> {
    load_catalog(&[ITEMS], PRACTICES)
}
