use serde::{Deserialize, Serialize};

/// Whether an item is equipment or a reagent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    Tool,
    Chemical,
}

/// Physical phase of a chemical item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Solution,
    Solid,
    Liquid,
    Gas,
}

/// A single catalog entry loaded from RON data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabItem {
    /// Stable item key, referenced everywhere else by value.
    pub id: String,
    /// Display name. Lowercased, it doubles as a step-gate match token.
    pub name: String,
    pub kind: ItemKind,
    /// Only meaningful for chemicals.
    #[serde(default)]
    pub phase: Option<Phase>,
    /// Display color (CSS hex). New vessel contents start with this color.
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl LabItem {
    pub fn is_chemical(&self) -> bool {
        self.kind == ItemKind::Chemical
    }
}

/// Collection of item definitions, looked up by id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemTable {
    pub items: Vec<LabItem>,
}

impl ItemTable {
    /// Look up an item by id. Returns None if not found.
    pub fn get(&self, id: &str) -> Option<&LabItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Whether an item with this id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LabItem> {
        self.items.iter()
    }
}
