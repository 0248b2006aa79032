use labsim_core::action::LabAction;
use labsim_core::config::TitrantPolicy;
use labsim_core::constants::STIR_OBSERVATION;
use labsim_core::item::LabItem;
use labsim_core::vessel::VesselState;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::context::SimContext;
use crate::reactions;
use crate::state::ActionRecord;

/// Why an action changed nothing.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum IgnoreReason {
    #[error("unknown vessel '{0}'")]
    UnknownVessel(String),
    #[error("unknown item '{0}'")]
    UnknownItem(String),
    #[error("unknown source vessel '{0}'")]
    UnknownSourceVessel(String),
    /// Added volume must be finite and not negative.
    #[error("invalid volume {0} mL")]
    InvalidVolume(f64),
}

/// Everything a successfully applied action produced.
#[derive(Debug, Clone, PartialEq)]
pub struct AppliedAction {
    /// Full vessel list after the action.
    pub vessels: Vec<VesselState>,
    pub observation: Option<String>,
    /// Indonesian log line the fuzzy step gate matches against.
    pub description: String,
    pub record: ActionRecord,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome {
    Applied(AppliedAction),
    /// Nothing changed: a bad reference or an unusable volume.
    Ignored(IgnoreReason),
}

/// Log line for an action, keyed by action type. Contains the type's gate
/// keyword and, for pour/addDrops, the item display name.
pub fn describe(action: &LabAction, item: Option<&LabItem>, vessel: &VesselState, source: Option<&VesselState>) -> String {
    let item_name = item.map(|i| i.name.as_str()).unwrap_or_default();
    match action {
        LabAction::Pour { volume_ml, .. } => {
            format!("Menuang {} mL {} ke {}", volume_ml, item_name, vessel.name)
        }
        LabAction::AddDrops { drops, .. } => {
            format!("Meneteskan {} tetes {} ke {}", drops, item_name, vessel.name)
        }
        LabAction::Stir { .. } => format!("Mengaduk isi {}", vessel.name),
        LabAction::Heat { .. } => format!("Memberi panas pada {}", vessel.name),
        LabAction::MeasureTemp { .. } => format!("Mengukur suhu {}", vessel.name),
        LabAction::Titrate { .. } => {
            let source_name = source.map(|s| s.name.as_str()).unwrap_or_default();
            format!("Melakukan titrasi dari {} ke {}", source_name, vessel.name)
        }
    }
}

fn vessel_index(vessels: &[VesselState], id: &str) -> Option<usize> {
    vessels.iter().position(|v| v.id == id)
}

fn replace_vessel(vessels: &[VesselState], index: usize, vessel: VesselState) -> Vec<VesselState> {
    let mut next = vessels.to_vec();
    next[index] = vessel;
    next
}

fn record(action: &LabAction) -> ActionRecord {
    ActionRecord {
        action_type: action.action_type(),
        item_id: action.item_id().map(str::to_string),
        vessel_id: action.target_vessel_id().to_string(),
    }
}

/// Add an item to a vessel: reaction first, then the content update.
fn add_item(
    vessels: &[VesselState],
    ctx: &SimContext,
    action: &LabAction,
    item_id: &str,
    vessel_id: &str,
    volume_ml: f64,
) -> ActionOutcome {
    let Some(index) = vessel_index(vessels, vessel_id) else {
        return ActionOutcome::Ignored(IgnoreReason::UnknownVessel(vessel_id.to_string()));
    };
    let Some(item) = ctx.items.get(item_id) else {
        return ActionOutcome::Ignored(IgnoreReason::UnknownItem(item_id.to_string()));
    };
    if !(volume_ml.is_finite() && volume_ml >= 0.0) {
        return ActionOutcome::Ignored(IgnoreReason::InvalidVolume(volume_ml));
    }

    let target = &vessels[index];
    let reaction = reactions::evaluate(ctx.practice, target, item_id);
    let mut vessel = reaction.vessel;
    vessel.add_content(item_id, volume_ml, item.color.clone());

    if vessel.is_overflowing() {
        log::warn!(
            "Vessel '{}' holds {} mL, over its {} mL capacity",
            vessel.id,
            vessel.total_volume(),
            vessel.max_volume
        );
    }

    ActionOutcome::Applied(AppliedAction {
        description: describe(action, Some(item), target, None),
        vessels: replace_vessel(vessels, index, vessel),
        observation: reaction.observation,
        record: record(action),
    })
}

/// Single dispatch point for every lab action.
///
/// Returns the complete new vessel list plus at most one observation.
/// Unknown references yield [`ActionOutcome::Ignored`] and no mutation.
pub fn apply_action(vessels: &[VesselState], ctx: &SimContext, action: &LabAction) -> ActionOutcome {
    match action {
        LabAction::Pour {
            from_item_id,
            to_vessel_id,
            volume_ml,
        } => add_item(vessels, ctx, action, from_item_id, to_vessel_id, *volume_ml),
        LabAction::AddDrops {
            item_id,
            to_vessel_id,
            drops,
        } => {
            let volume_ml = f64::from(*drops) * ctx.config.ml_per_drop;
            add_item(vessels, ctx, action, item_id, to_vessel_id, volume_ml)
        }
        LabAction::Stir { vessel_id } => {
            let Some(index) = vessel_index(vessels, vessel_id) else {
                return ActionOutcome::Ignored(IgnoreReason::UnknownVessel(vessel_id.clone()));
            };
            ActionOutcome::Applied(AppliedAction {
                vessels: vessels.to_vec(),
                observation: Some(STIR_OBSERVATION.to_string()),
                description: describe(action, None, &vessels[index], None),
                record: record(action),
            })
        }
        LabAction::Heat { vessel_id } => {
            let Some(index) = vessel_index(vessels, vessel_id) else {
                return ActionOutcome::Ignored(IgnoreReason::UnknownVessel(vessel_id.clone()));
            };
            let mut vessel = vessels[index].clone();
            vessel.temperature += ctx.config.heat_step;
            let observation = format!("Larutan dipanaskan. Suhu naik menjadi {}°C", vessel.temperature);
            ActionOutcome::Applied(AppliedAction {
                description: describe(action, None, &vessel, None),
                vessels: replace_vessel(vessels, index, vessel),
                observation: Some(observation),
                record: record(action),
            })
        }
        LabAction::MeasureTemp { vessel_id } => {
            let Some(index) = vessel_index(vessels, vessel_id) else {
                return ActionOutcome::Ignored(IgnoreReason::UnknownVessel(vessel_id.clone()));
            };
            let vessel = &vessels[index];
            ActionOutcome::Applied(AppliedAction {
                vessels: vessels.to_vec(),
                observation: Some(format!("Suhu terukur: {}°C", vessel.temperature)),
                description: describe(action, None, vessel, None),
                record: record(action),
            })
        }
        LabAction::Titrate {
            from_vessel_id,
            to_vessel_id,
        } => {
            let Some(index) = vessel_index(vessels, to_vessel_id) else {
                return ActionOutcome::Ignored(IgnoreReason::UnknownVessel(to_vessel_id.clone()));
            };
            let Some(source) = vessels.iter().find(|v| &v.id == from_vessel_id) else {
                return ActionOutcome::Ignored(IgnoreReason::UnknownSourceVessel(from_vessel_id.clone()));
            };
            let titrant_ids: Vec<&str> = match &ctx.config.titrant {
                TitrantPolicy::SourceVessel => source.content_ids().collect(),
                TitrantPolicy::Fixed(id) => vec![id.as_str()],
            };

            let target = &vessels[index];
            let reaction = reactions::evaluate_endpoint(ctx.practice, target, &titrant_ids);
            if reaction.rule_id.is_none() {
                log::debug!("Titration into '{}' has not reached an endpoint", target.id);
            }
            ActionOutcome::Applied(AppliedAction {
                description: describe(action, None, target, Some(source)),
                vessels: replace_vessel(vessels, index, reaction.vessel),
                observation: reaction.observation,
                record: record(action),
            })
        }
    }
}
