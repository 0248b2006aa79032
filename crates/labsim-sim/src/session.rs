use labsim_core::catalog::LabCatalog;
use labsim_core::config::SimConfig;
use labsim_core::item::{ItemTable, LabItem};
use labsim_core::practice::{Practice, PracticeStep};
use labsim_core::LabError;
use serde::Serialize;

use crate::context::SimContext;
use crate::gate;
use crate::machine::{transition, Intent, TransitionOutcome};
use crate::state::SimulationState;

/// Read-only view handed to the UI after every dispatch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub state: SimulationState,
    pub current_step_id: Option<String>,
    pub progress: f64,
    pub can_proceed: bool,
}

/// A running practice: borrowed reference data plus the current state.
pub struct Session<'a> {
    ctx: SimContext<'a>,
    state: SimulationState,
}

impl<'a> Session<'a> {
    /// Start a session on a catalog practice.
    pub fn new(catalog: &'a LabCatalog, practice_id: &str, config: &'a SimConfig) -> Result<Self, LabError> {
        let practice = catalog
            .practice(practice_id)
            .ok_or_else(|| LabError::UnknownPractice(practice_id.to_string()))?;
        Self::from_practice(&catalog.items, practice, config)
    }

    pub fn from_practice(items: &'a ItemTable, practice: &'a Practice, config: &'a SimConfig) -> Result<Self, LabError> {
        if practice.steps.is_empty() {
            return Err(LabError::NoSteps(practice.id.clone()));
        }
        log::info!("Starting practice '{}' ({} steps)", practice.name, practice.step_count());
        Ok(Self {
            ctx: SimContext::new(items, practice, config),
            state: SimulationState::new(practice),
        })
    }

    /// Apply one intent and replace the state wholesale.
    pub fn dispatch(&mut self, intent: &Intent) -> TransitionOutcome {
        let (next, outcome) = transition(&self.state, &self.ctx, intent);
        self.state = next;
        outcome
    }

    /// Reset, then apply `intents` in order.
    pub fn replay(&mut self, intents: &[Intent]) -> Vec<TransitionOutcome> {
        self.state = SimulationState::new(self.ctx.practice);
        intents.iter().map(|intent| self.dispatch(intent)).collect()
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn practice(&self) -> &'a Practice {
        self.ctx.practice
    }

    pub fn current_step(&self) -> Option<&'a PracticeStep> {
        self.state.current_step(self.ctx.practice)
    }

    pub fn progress(&self) -> f64 {
        self.state.progress(self.ctx.practice)
    }

    pub fn can_proceed(&self) -> bool {
        gate::evaluate(self.ctx.config.gate_mode, self.current_step(), &self.state, self.ctx.items)
    }

    /// Catalog items in the current step's tool tray. Unknown ids are skipped.
    pub fn available_items(&self) -> Vec<&'a LabItem> {
        let items = self.ctx.items;
        self.current_step()
            .map(|step| {
                step.available_items
                    .iter()
                    .filter_map(|id| items.get(id))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            state: self.state.clone(),
            current_step_id: self.current_step().map(|s| s.id.clone()),
            progress: self.progress(),
            can_proceed: self.can_proceed(),
        }
    }
}
