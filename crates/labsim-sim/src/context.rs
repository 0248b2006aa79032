use labsim_core::config::SimConfig;
use labsim_core::item::ItemTable;
use labsim_core::practice::Practice;

/// Read-only inputs every transition is parameterized by.
#[derive(Debug, Clone, Copy)]
pub struct SimContext<'a> {
    pub items: &'a ItemTable,
    pub practice: &'a Practice,
    pub config: &'a SimConfig,
}

impl<'a> SimContext<'a> {
    pub fn new(items: &'a ItemTable, practice: &'a Practice, config: &'a SimConfig) -> Self {
        Self {
            items,
            practice,
            config,
        }
    }
}
