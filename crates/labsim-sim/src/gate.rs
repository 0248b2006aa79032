use std::collections::BTreeMap;

use labsim_core::config::GateMode;
use labsim_core::item::ItemTable;
use labsim_core::practice::{PracticeStep, RequiredAction};

use crate::state::{ActionRecord, SimulationState};

/// Checks shared by both gate modes, in precedence order. `None` means the
/// decision falls through to required-action matching.
fn precheck(step: Option<&PracticeStep>, inputs: &BTreeMap<String, String>) -> Option<bool> {
    let Some(step) = step else {
        return Some(false);
    };
    if step.auto_complete {
        return Some(true);
    }
    if let Some(input) = &step.input {
        let captured = inputs.get(&input.key).map(|v| !v.is_empty()).unwrap_or(false);
        if !captured {
            return Some(false);
        }
    }
    if step.required_actions.is_empty() {
        return Some(true);
    }
    None
}

/// Fuzzy match of one requirement against the lowercased action log.
///
/// Satisfied by the type keyword anywhere in any description, or by the
/// lowercased catalog name of the required item. Incidental substring
/// overlap counts as a match.
fn fuzzy_satisfied(required: &RequiredAction, log: &[String], items: &ItemTable) -> bool {
    let keyword = required.action_type.gate_keyword();
    let item_name = required
        .item_id
        .as_deref()
        .and_then(|id| items.get(id))
        .map(|item| item.name.to_lowercase());

    log.iter().any(|line| {
        line.contains(keyword)
            || item_name
                .as_deref()
                .map(|name| line.contains(name))
                .unwrap_or(false)
    })
}

/// Step gate over the human-readable action log.
pub fn can_proceed(
    step: Option<&PracticeStep>,
    completed_actions: &[String],
    inputs: &BTreeMap<String, String>,
    items: &ItemTable,
) -> bool {
    if let Some(decision) = precheck(step, inputs) {
        return decision;
    }
    let Some(step) = step else {
        return false;
    };

    let log: Vec<String> = completed_actions.iter().map(|a| a.to_lowercase()).collect();
    let satisfied = step
        .required_actions
        .iter()
        .filter(|required| fuzzy_satisfied(required, &log, items))
        .count();
    satisfied >= step.required_actions.len()
}

fn structured_satisfied(required: &RequiredAction, records: &[ActionRecord]) -> bool {
    records.iter().any(|record| {
        record.action_type == required.action_type
            && required
                .item_id
                .as_deref()
                .map_or(true, |id| record.item_id.as_deref() == Some(id))
            && required
                .vessel_id
                .as_deref()
                .map_or(true, |id| record.vessel_id == id)
    })
}

/// Step gate over recorded action identity: type, and item and vessel
/// when the requirement names them.
pub fn can_proceed_structured(
    step: Option<&PracticeStep>,
    records: &[ActionRecord],
    inputs: &BTreeMap<String, String>,
) -> bool {
    if let Some(decision) = precheck(step, inputs) {
        return decision;
    }
    let Some(step) = step else {
        return false;
    };
    step.required_actions
        .iter()
        .all(|required| structured_satisfied(required, records))
}

/// Evaluate the gate for the state's current step.
pub fn evaluate(mode: GateMode, step: Option<&PracticeStep>, state: &SimulationState, items: &ItemTable) -> bool {
    match mode {
        GateMode::Fuzzy => can_proceed(step, &state.completed_actions, &state.inputs, items),
        GateMode::Structured => can_proceed_structured(step, &state.step_actions, &state.inputs),
    }
}
