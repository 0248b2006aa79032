use std::collections::BTreeSet;

use labsim_core::practice::Practice;
use labsim_core::rule::{ReactionResult, ReactionRule};
use labsim_core::vessel::VesselState;

/// Result of evaluating the rulebook against a vessel.
#[derive(Debug, Clone, PartialEq)]
pub struct ReactionOutcome {
    /// Clone of the input vessel with the fired rule's effects applied.
    pub vessel: VesselState,
    /// Id of the rule that fired, if any.
    pub rule_id: Option<String>,
    pub observation: Option<String>,
}

/// First rule in declaration order whose reactants are all in `present`.
pub fn first_match<'a>(
    rules: impl IntoIterator<Item = &'a ReactionRule>,
    present: &BTreeSet<&str>,
) -> Option<&'a ReactionRule> {
    rules.into_iter().find(|rule| rule.is_satisfied_by(present))
}

/// Apply a rule result to a vessel in place.
///
/// A color recolors every content already in the vessel, not only the
/// incoming one. A precipitate takes `precipitate_color`, else `color`.
pub fn apply_result(vessel: &mut VesselState, result: &ReactionResult) {
    if let Some(color) = &result.color {
        vessel.recolor(color);
    }
    if let Some(delta) = result.temp_change {
        vessel.temperature += delta;
    }
    if let Some(precipitate) = result.precipitate {
        vessel.has_precipitate = precipitate;
        vessel.precipitate_color = if precipitate {
            result
                .precipitate_color
                .clone()
                .or_else(|| result.color.clone())
        } else {
            None
        };
    }
    if let Some(bubbles) = result.bubbles {
        vessel.has_bubbles = bubbles;
    }
}

fn fire(vessel: &VesselState, rule: Option<&ReactionRule>) -> ReactionOutcome {
    let mut mutated = vessel.clone();
    match rule {
        Some(rule) => {
            apply_result(&mut mutated, &rule.result);
            log::debug!("Reaction '{}' fired in vessel '{}'", rule.id, vessel.id);
            ReactionOutcome {
                vessel: mutated,
                rule_id: Some(rule.id.clone()),
                observation: Some(rule.result.observation.clone()),
            }
        }
        None => ReactionOutcome {
            vessel: mutated,
            rule_id: None,
            observation: None,
        },
    }
}

/// Evaluate the practice rulebook for `incoming_item_id` entering `vessel`.
///
/// The incoming item is only counted as present; the caller adds it to
/// the content list afterwards. At most one rule fires.
pub fn evaluate(practice: &Practice, vessel: &VesselState, incoming_item_id: &str) -> ReactionOutcome {
    let mut present: BTreeSet<&str> = vessel.content_ids().collect();
    present.insert(incoming_item_id);
    fire(vessel, first_match(&practice.reactions, &present))
}

/// Evaluate only titration endpoint rules, with `titrant_ids` counted as
/// present alongside the target's contents.
pub fn evaluate_endpoint(practice: &Practice, target: &VesselState, titrant_ids: &[&str]) -> ReactionOutcome {
    let mut present: BTreeSet<&str> = target.content_ids().collect();
    present.extend(titrant_ids.iter().copied());
    let endpoint_rules = practice.reactions.iter().filter(|r| r.is_endpoint());
    fire(target, first_match(endpoint_rules, &present))
}
