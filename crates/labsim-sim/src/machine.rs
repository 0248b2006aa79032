//! Session reducer.
//!
//! `transition` is the only place a `SimulationState` changes. It takes the
//! current state by reference and returns a fresh one, so callers swap
//! whole snapshots.

use labsim_core::action::LabAction;
use serde::{Deserialize, Serialize};

use crate::actions::{apply_action, ActionOutcome, IgnoreReason};
use crate::context::SimContext;
use crate::state::SimulationState;

/// Intent vocabulary the UI dispatches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Intent {
    SelectItem(Option<String>),
    PerformAction(LabAction),
    SetInput { key: String, value: String },
    NextStep,
    PrevStep,
    Reset,
}

/// What a transition did.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TransitionOutcome {
    ItemSelected(Option<String>),
    ActionApplied {
        description: String,
        observation: Option<String>,
    },
    /// The state was returned unchanged.
    ActionIgnored(IgnoreReason),
    InputSet { key: String },
    StepChanged { from: usize, to: usize },
    /// Navigation had nowhere to go; only the step log was cleared.
    StepUnchanged(usize),
    Completed,
    Reopened,
    Reset,
}

/// Apply `intent` to `state` and return `(new_state, outcome)`.
/// The input state is never mutated; a clone is made first.
pub fn transition(
    state: &SimulationState,
    ctx: &SimContext,
    intent: &Intent,
) -> (SimulationState, TransitionOutcome) {
    let mut next = state.clone();

    let outcome = match intent {
        Intent::SelectItem(item_id) => {
            next.selected_item_id = item_id.clone();
            TransitionOutcome::ItemSelected(item_id.clone())
        }
        Intent::PerformAction(action) => match apply_action(&state.vessels, ctx, action) {
            ActionOutcome::Applied(applied) => {
                next.vessels = applied.vessels;
                next.completed_actions.push(applied.description.clone());
                next.step_actions.push(applied.record);
                if let Some(observation) = &applied.observation {
                    next.observations.push(observation.clone());
                }
                next.selected_item_id = None;
                TransitionOutcome::ActionApplied {
                    description: applied.description,
                    observation: applied.observation,
                }
            }
            ActionOutcome::Ignored(reason) => {
                log::warn!("Ignored {:?} action: {}", action.action_type(), reason);
                return (next, TransitionOutcome::ActionIgnored(reason));
            }
        },
        Intent::SetInput { key, value } => {
            next.inputs.insert(key.clone(), value.clone());
            TransitionOutcome::InputSet { key: key.clone() }
        }
        Intent::NextStep => {
            let from = state.current_step_index;
            next.clear_step_log();
            match ctx.practice.last_step_index() {
                Some(last) if from < last => {
                    next.current_step_index = from + 1;
                    TransitionOutcome::StepChanged { from, to: from + 1 }
                }
                _ => {
                    next.is_complete = true;
                    TransitionOutcome::Completed
                }
            }
        }
        Intent::PrevStep => {
            let from = state.current_step_index;
            next.clear_step_log();
            if state.is_complete {
                // back out of the completion screen onto the last step
                next.is_complete = false;
                TransitionOutcome::Reopened
            } else if from > 0 {
                next.current_step_index = from - 1;
                TransitionOutcome::StepChanged { from, to: from - 1 }
            } else {
                TransitionOutcome::StepUnchanged(from)
            }
        }
        Intent::Reset => {
            next = SimulationState::new(ctx.practice);
            TransitionOutcome::Reset
        }
    };

    log::debug!(
        "Step {} of '{}': {:?}",
        next.current_step_index + 1,
        next.practice_id,
        outcome
    );
    (next, outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gate;
    use crate::test_harness::{exotherm_catalog, items, practice};
    use labsim_core::config::SimConfig;

    fn run(state: &SimulationState, ctx: &SimContext, intents: &[Intent]) -> SimulationState {
        intents
            .iter()
            .fold(state.clone(), |s, intent| transition(&s, ctx, intent).0)
    }

    fn pour(item: &str, vessel: &str, volume_ml: f64) -> Intent {
        Intent::PerformAction(LabAction::Pour {
            from_item_id: item.into(),
            to_vessel_id: vessel.into(),
            volume_ml,
        })
    }

    fn measure(vessel: &str) -> Intent {
        Intent::PerformAction(LabAction::MeasureTemp {
            vessel_id: vessel.into(),
        })
    }

    #[test]
    fn test_select_item_only_sets_selection() {
        let (items, p, config) = (items(), practice(), SimConfig::default());
        let ctx = SimContext::new(&items, &p, &config);
        let state = SimulationState::new(&p);
        let (next, outcome) = transition(&state, &ctx, &Intent::SelectItem(Some("zn".into())));
        assert_eq!(next.selected_item_id.as_deref(), Some("zn"));
        assert_eq!(outcome, TransitionOutcome::ItemSelected(Some("zn".into())));
        let cleared = SimulationState {
            selected_item_id: None,
            ..next
        };
        assert_eq!(cleared, state);
    }

    #[test]
    fn test_perform_action_logs_and_clears_selection() {
        let (items, p, config) = (items(), practice(), SimConfig::default());
        let ctx = SimContext::new(&items, &p, &config);
        let state = run(
            &SimulationState::new(&p),
            &ctx,
            &[Intent::SelectItem(Some("zn".into())), pour("zn", "beaker", 1.0)],
        );
        assert_eq!(state.selected_item_id, None);
        assert_eq!(state.completed_actions.len(), 1);
        assert_eq!(state.step_actions.len(), 1);
        assert_eq!(state.observations, vec!["first".to_string()]);
    }

    #[test]
    fn test_ignored_action_returns_identical_state() {
        let (items, p, config) = (items(), practice(), SimConfig::default());
        let ctx = SimContext::new(&items, &p, &config);
        let state = run(
            &SimulationState::new(&p),
            &ctx,
            &[Intent::SelectItem(Some("zn".into()))],
        );
        let (next, outcome) = transition(&state, &ctx, &pour("zn", "missing", 1.0));
        assert_eq!(next, state);
        assert_eq!(
            outcome,
            TransitionOutcome::ActionIgnored(IgnoreReason::UnknownVessel("missing".into()))
        );
    }

    #[test]
    fn test_negative_pour_leaves_vessels_untouched() {
        let (items, p, config) = (items(), practice(), SimConfig::default());
        let ctx = SimContext::new(&items, &p, &config);
        let state = SimulationState::new(&p);
        let (next, outcome) = transition(&state, &ctx, &pour("hcl", "beaker", -80.0));
        assert_eq!(next, state);
        assert_eq!(next.vessel("beaker").and_then(|v| v.content("hcl")).map(|c| c.volume_ml), Some(50.0));
        assert_eq!(
            outcome,
            TransitionOutcome::ActionIgnored(IgnoreReason::InvalidVolume(-80.0))
        );
    }

    #[test]
    fn test_set_input_upserts_and_persists() {
        let (items, p, config) = (items(), practice(), SimConfig::default());
        let ctx = SimContext::new(&items, &p, &config);
        let input = |v: &str| Intent::SetInput {
            key: "suhu_awal".into(),
            value: v.into(),
        };
        let state = run(
            &SimulationState::new(&p),
            &ctx,
            &[input("24"), input("not a number"), Intent::NextStep],
        );
        assert_eq!(state.inputs.get("suhu_awal").map(String::as_str), Some("not a number"));
        assert_eq!(state.inputs.len(), 1);
    }

    #[test]
    fn test_step_transitions_clear_step_log() {
        let (items, p, config) = (items(), practice(), SimConfig::default());
        let ctx = SimContext::new(&items, &p, &config);
        let base = run(&SimulationState::new(&p), &ctx, &[Intent::NextStep, measure("beaker")]);
        assert_eq!(base.completed_actions.len(), 1);

        for intent in [Intent::NextStep, Intent::PrevStep] {
            let (next, _) = transition(&base, &ctx, &intent);
            assert!(next.completed_actions.is_empty(), "{:?} kept the log", intent);
            assert!(next.step_actions.is_empty());
            assert_eq!(next.observations, base.observations);
            assert_eq!(next.vessels, base.vessels);
        }
    }

    #[test]
    fn test_prev_step_floors_at_zero() {
        let (items, p, config) = (items(), practice(), SimConfig::default());
        let ctx = SimContext::new(&items, &p, &config);
        let state = SimulationState::new(&p);
        let (next, outcome) = transition(&state, &ctx, &Intent::PrevStep);
        assert_eq!(next.current_step_index, 0);
        assert_eq!(outcome, TransitionOutcome::StepUnchanged(0));
    }

    #[test]
    fn test_prev_step_keeps_vessel_effects() {
        let (items, p, config) = (items(), practice(), SimConfig::default());
        let ctx = SimContext::new(&items, &p, &config);
        let state = run(
            &SimulationState::new(&p),
            &ctx,
            &[Intent::NextStep, Intent::NextStep, pour("zn", "beaker", 1.0), Intent::PrevStep],
        );
        assert_eq!(state.current_step_index, 1);
        assert_eq!(state.vessel("beaker").map(|v| v.temperature), Some(40.0));
    }

    #[test]
    fn test_terminal_pinning() {
        let (items, p, config) = (items(), practice(), SimConfig::default());
        let ctx = SimContext::new(&items, &p, &config);
        let last = run(&SimulationState::new(&p), &ctx, &[Intent::NextStep, Intent::NextStep]);
        assert_eq!(last.current_step_index, 2);
        assert!(!last.is_complete);

        let (done, outcome) = transition(&last, &ctx, &Intent::NextStep);
        assert!(done.is_complete);
        assert_eq!(done.current_step_index, 2);
        assert_eq!(outcome, TransitionOutcome::Completed);

        let (again, _) = transition(&done, &ctx, &Intent::NextStep);
        assert!(again.is_complete);
        assert_eq!(again.current_step_index, 2);
    }

    #[test]
    fn test_prev_step_reopens_completed_session() {
        let (items, p, config) = (items(), practice(), SimConfig::default());
        let ctx = SimContext::new(&items, &p, &config);
        let done = run(
            &SimulationState::new(&p),
            &ctx,
            &[Intent::NextStep, Intent::NextStep, Intent::NextStep],
        );
        let (reopened, outcome) = transition(&done, &ctx, &Intent::PrevStep);
        assert_eq!(outcome, TransitionOutcome::Reopened);
        assert!(!reopened.is_complete);
        assert_eq!(reopened.current_step_index, 2);
    }

    #[test]
    fn test_observations_only_grow_until_reset() {
        let (items, p, config) = (items(), practice(), SimConfig::default());
        let ctx = SimContext::new(&items, &p, &config);
        let intents = [
            measure("beaker"),
            Intent::NextStep,
            pour("zn", "beaker", 1.0),
            Intent::PrevStep,
            pour("nothing", "beaker", 1.0),
            Intent::SetInput {
                key: "k".into(),
                value: "v".into(),
            },
            Intent::NextStep,
            measure("beaker"),
        ];
        let mut state = SimulationState::new(&p);
        let mut last_len = 0;
        for intent in &intents {
            state = transition(&state, &ctx, intent).0;
            assert!(state.observations.len() >= last_len);
            last_len = state.observations.len();
        }
        assert_eq!(last_len, 3);
        let (reset, _) = transition(&state, &ctx, &Intent::Reset);
        assert!(reset.observations.is_empty());
    }

    #[test]
    fn test_deterministic_replay() {
        let (items, p, config) = (items(), practice(), SimConfig::default());
        let ctx = SimContext::new(&items, &p, &config);
        let intents = vec![
            Intent::NextStep,
            measure("beaker"),
            pour("zn", "beaker", 3.0),
            pour("zn", "beaker", 2.0),
            Intent::NextStep,
        ];
        let a = run(&SimulationState::new(&p), &ctx, &intents);
        let b = run(&SimulationState::new(&p), &ctx, &intents);
        assert_eq!(a, b);
    }

    // Scenarios on the embedded "Reaksi Eksoterm" practice.

    fn exotherm_ctx_parts() -> (labsim_core::catalog::LabCatalog, SimConfig) {
        (exotherm_catalog(), SimConfig::default())
    }

    #[test]
    fn test_exotherm_measure_initial_temperature() {
        let (catalog, config) = exotherm_ctx_parts();
        let p = catalog.practice("reaksi-eksoterm").expect("practice");
        let ctx = SimContext::new(&catalog.items, p, &config);
        let state = SimulationState::new(p);
        let beaker = state.vessel("beaker-vessel").expect("beaker");
        assert_eq!(beaker.contents[0].item_id, "hcl");
        assert_eq!(beaker.contents[0].volume_ml, 50.0);

        let (next, _) = transition(&state, &ctx, &measure("beaker-vessel"));
        assert_eq!(next.observations, vec!["Suhu terukur: 25°C".to_string()]);
        assert_eq!(next.vessel("beaker-vessel").map(|v| v.temperature), Some(25.0));
    }

    #[test]
    fn test_exotherm_zinc_reaction_and_gate() {
        let (catalog, config) = exotherm_ctx_parts();
        let p = catalog.practice("reaksi-eksoterm").expect("practice");
        let ctx = SimContext::new(&catalog.items, p, &config);

        let at_measure = run(&SimulationState::new(p), &ctx, &[Intent::NextStep, measure("beaker-vessel")]);
        let measured = run(
            &at_measure,
            &ctx,
            &[Intent::SetInput {
                key: "suhu_awal".into(),
                value: "25".into(),
            }],
        );
        assert!(gate::evaluate(config.gate_mode, measured.current_step(p), &measured, &catalog.items));

        let (at_zinc, _) = transition(&measured, &ctx, &Intent::NextStep);
        assert_eq!(at_zinc.current_step_index, 2);
        assert!(at_zinc.completed_actions.is_empty());
        let step = at_zinc.current_step(p).expect("step");
        assert_eq!(step.title, "Tambahkan Serbuk Zn");
        assert!(!gate::evaluate(config.gate_mode, Some(step), &at_zinc, &catalog.items));

        let (reacted, outcome) = transition(&at_zinc, &ctx, &pour("zn", "beaker-vessel", 2.0));
        let rule = p
            .reactions
            .iter()
            .find(|r| r.id == "zn-hcl-reaction")
            .expect("rule");
        assert_eq!(
            outcome,
            TransitionOutcome::ActionApplied {
                description: "Menuang 2 mL Zn (serbuk) ke Gelas Kimia 100 mL".into(),
                observation: Some(rule.result.observation.clone()),
            }
        );
        let beaker = reacted.vessel("beaker-vessel").expect("beaker");
        assert_eq!(beaker.temperature, 40.0);
        assert!(beaker.has_bubbles);
        assert_eq!(beaker.content("hcl").and_then(|c| c.color.as_deref()), Some("#D1D5DB"));
        assert_eq!(reacted.observations.last(), Some(&rule.result.observation));
        assert!(gate::evaluate(config.gate_mode, Some(step), &reacted, &catalog.items));
    }

    #[test]
    fn test_exotherm_reset_matches_fresh_state() {
        let (catalog, config) = exotherm_ctx_parts();
        let p = catalog.practice("reaksi-eksoterm").expect("practice");
        let ctx = SimContext::new(&catalog.items, p, &config);
        let fresh = SimulationState::new(p);
        let played = run(
            &fresh,
            &ctx,
            &[
                Intent::NextStep,
                measure("beaker-vessel"),
                Intent::SetInput {
                    key: "suhu_awal".into(),
                    value: "25".into(),
                },
                Intent::NextStep,
                Intent::SelectItem(Some("zn".into())),
                pour("zn", "beaker-vessel", 1.0),
                Intent::SelectItem(Some("termometer".into())),
            ],
        );
        assert_ne!(played, fresh);
        let (reset, outcome) = transition(&played, &ctx, &Intent::Reset);
        assert_eq!(outcome, TransitionOutcome::Reset);
        assert_eq!(reset, fresh);
    }

    #[test]
    fn test_exotherm_unknown_vessel_is_noop() {
        let (catalog, config) = exotherm_ctx_parts();
        let p = catalog.practice("reaksi-eksoterm").expect("practice");
        let ctx = SimContext::new(&catalog.items, p, &config);
        let state = SimulationState::new(p);
        let (next, _) = transition(&state, &ctx, &pour("zn", "erlenmeyer-vessel", 5.0));
        assert_eq!(next, state);
        assert!(next.observations.is_empty());
    }
}
