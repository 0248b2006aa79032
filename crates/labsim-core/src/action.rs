use serde::{Deserialize, Serialize};

/// Action vocabulary shared by performed actions and step requirements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionType {
    Pour,
    AddDrops,
    Stir,
    Heat,
    MeasureTemp,
    Titrate,
}

impl ActionType {
    /// Keyword the fuzzy step gate looks for in action descriptions.
    /// Each keyword appears in the description generated for its own type.
    pub fn gate_keyword(self) -> &'static str {
        match self {
            ActionType::Pour => "menuang",
            ActionType::AddDrops => "meneteskan",
            ActionType::Stir => "aduk",
            ActionType::MeasureTemp => "suhu",
            ActionType::Heat => "panas",
            ActionType::Titrate => "titrasi",
        }
    }
}

/// A typed user action on the lab bench.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LabAction {
    Pour {
        from_item_id: String,
        to_vessel_id: String,
        volume_ml: f64,
    },
    AddDrops {
        item_id: String,
        to_vessel_id: String,
        drops: u32,
    },
    Stir {
        vessel_id: String,
    },
    Heat {
        vessel_id: String,
    },
    MeasureTemp {
        vessel_id: String,
    },
    Titrate {
        from_vessel_id: String,
        to_vessel_id: String,
    },
}

impl LabAction {
    pub fn action_type(&self) -> ActionType {
        match self {
            LabAction::Pour { .. } => ActionType::Pour,
            LabAction::AddDrops { .. } => ActionType::AddDrops,
            LabAction::Stir { .. } => ActionType::Stir,
            LabAction::Heat { .. } => ActionType::Heat,
            LabAction::MeasureTemp { .. } => ActionType::MeasureTemp,
            LabAction::Titrate { .. } => ActionType::Titrate,
        }
    }

    /// Catalog item the action introduces into a vessel, if any.
    pub fn item_id(&self) -> Option<&str> {
        match self {
            LabAction::Pour { from_item_id, .. } => Some(from_item_id),
            LabAction::AddDrops { item_id, .. } => Some(item_id),
            _ => None,
        }
    }

    /// The vessel whose state the action reads or mutates.
    pub fn target_vessel_id(&self) -> &str {
        match self {
            LabAction::Pour { to_vessel_id, .. }
            | LabAction::AddDrops { to_vessel_id, .. }
            | LabAction::Titrate { to_vessel_id, .. } => to_vessel_id,
            LabAction::Stir { vessel_id }
            | LabAction::Heat { vessel_id }
            | LabAction::MeasureTemp { vessel_id } => vessel_id,
        }
    }
}
