use std::collections::BTreeMap;

use labsim_core::action::ActionType;
use labsim_core::practice::{Practice, PracticeStep};
use labsim_core::vessel::VesselState;
use serde::{Deserialize, Serialize};

/// Structured identity of a performed action, kept alongside the
/// human-readable log for the structured step gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub action_type: ActionType,
    pub item_id: Option<String>,
    pub vessel_id: String,
}

/// The whole mutable session aggregate.
///
/// Transitions never edit a state in place; they return a new value, so a
/// reader holding the previous snapshot never sees a half-applied action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationState {
    pub practice_id: String,
    /// 0-based. Pinned at the last step once `is_complete` is set.
    pub current_step_index: usize,
    /// Working copy of the practice vessel template.
    pub vessels: Vec<VesselState>,
    /// Action descriptions for the current step only.
    pub completed_actions: Vec<String>,
    /// Structured counterpart of `completed_actions`, cleared with it.
    pub step_actions: Vec<ActionRecord>,
    /// Session-wide, append-only until reset.
    pub observations: Vec<String>,
    /// Captured step inputs by key. Persist across steps.
    pub inputs: BTreeMap<String, String>,
    pub selected_item_id: Option<String>,
    pub is_complete: bool,
}

impl SimulationState {
    /// Fresh state at step 0 with a deep copy of the vessel template.
    pub fn new(practice: &Practice) -> Self {
        Self {
            practice_id: practice.id.clone(),
            current_step_index: 0,
            vessels: practice.clone_vessels(),
            completed_actions: Vec::new(),
            step_actions: Vec::new(),
            observations: Vec::new(),
            inputs: BTreeMap::new(),
            selected_item_id: None,
            is_complete: false,
        }
    }

    pub fn current_step<'p>(&self, practice: &'p Practice) -> Option<&'p PracticeStep> {
        practice.step(self.current_step_index)
    }

    /// Percentage of steps reached, counting the current one.
    pub fn progress(&self, practice: &Practice) -> f64 {
        let total = practice.step_count();
        if total == 0 {
            return 0.0;
        }
        (self.current_step_index + 1) as f64 / total as f64 * 100.0
    }

    pub fn vessel(&self, id: &str) -> Option<&VesselState> {
        labsim_core::vessel::find_vessel(&self.vessels, id)
    }

    /// Drop the per-step action logs. Called on every step transition.
    pub(crate) fn clear_step_log(&mut self) {
        self.completed_actions.clear();
        self.step_actions.clear();
    }
}
