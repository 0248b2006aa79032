use crate::item::ItemTable;
use crate::practice::Practice;

/// Immutable reference data for a lab: every item plus every practice.
///
/// Build through `labsim_rules::catalog::build_catalog` so the content is
/// validated before a session ever reads it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabCatalog {
    pub items: ItemTable,
    pub practices: Vec<Practice>,
}

impl LabCatalog {
    pub fn practice(&self, id: &str) -> Option<&Practice> {
        self.practices.iter().find(|p| p.id == id)
    }

    pub fn practice_ids(&self) -> impl Iterator<Item = &str> {
        self.practices.iter().map(|p| p.id.as_str())
    }
}
