use serde::{Deserialize, Serialize};

use crate::action::ActionType;
use crate::rule::ReactionRule;
use crate::vessel::VesselState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// How the UI should render a step input field. Not validated by the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputType {
    Text,
    Number,
}

/// A data-capture field attached to a step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepInput {
    /// Key into the session input map. Keys are shared across steps.
    pub key: String,
    pub label: String,
    pub input_type: InputType,
    #[serde(default)]
    pub unit: Option<String>,
}

/// An action a step expects before it may be exited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequiredAction {
    pub action_type: ActionType,
    #[serde(default)]
    pub item_id: Option<String>,
    #[serde(default)]
    pub vessel_id: Option<String>,
    pub description: String,
}

/// One stage of a guided practice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PracticeStep {
    pub id: String,
    pub title: String,
    pub instruction: String,
    /// Item ids shown in the tool tray during this step.
    #[serde(default)]
    pub available_items: Vec<String>,
    #[serde(default)]
    pub required_actions: Vec<RequiredAction>,
    #[serde(default)]
    pub input: Option<StepInput>,
    #[serde(default)]
    pub hint: Option<String>,
    /// Satisfiable without any action or input.
    #[serde(default)]
    pub auto_complete: bool,
}

/// A complete guided experiment: vessel template, steps and rulebook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Practice {
    pub id: String,
    pub name: String,
    pub description: String,
    pub difficulty: Difficulty,
    /// Free-form duration label, e.g. "15 menit".
    pub estimated_time: String,
    pub initial_vessels: Vec<VesselState>,
    pub steps: Vec<PracticeStep>,
    #[serde(default)]
    pub reactions: Vec<ReactionRule>,
}

impl Practice {
    pub fn step(&self, index: usize) -> Option<&PracticeStep> {
        self.steps.get(index)
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Index of the final step. None for a practice without steps.
    pub fn last_step_index(&self) -> Option<usize> {
        self.steps.len().checked_sub(1)
    }

    pub fn vessel_template(&self, id: &str) -> Option<&VesselState> {
        self.initial_vessels.iter().find(|v| v.id == id)
    }

    /// Fresh working copy of the vessel template.
    pub fn clone_vessels(&self) -> Vec<VesselState> {
        self.initial_vessels.clone()
    }
}
