//! Shared fixtures for module tests.
//!
//! `practice()` is a small hand-built practice whose rulebook overlaps on
//! purpose: two rules both match {zn, hcl}. `exotherm_catalog()` loads the
//! embedded content pack.

use labsim_core::action::ActionType;
use labsim_core::catalog::LabCatalog;
use labsim_core::item::{ItemKind, ItemTable, LabItem, Phase};
use labsim_core::practice::{Difficulty, InputType, Practice, PracticeStep, RequiredAction, StepInput};
use labsim_core::rule::{ReactionResult, ReactionRule};
use labsim_core::vessel::{VesselState, VesselType};

fn chemical(id: &str, name: &str, phase: Phase, color: &str) -> LabItem {
    LabItem {
        id: id.into(),
        name: name.into(),
        kind: ItemKind::Chemical,
        phase: Some(phase),
        color: Some(color.into()),
        description: None,
    }
}

pub fn items() -> ItemTable {
    ItemTable {
        items: vec![
            chemical("hcl", "HCl 1 M", Phase::Solution, "#F3F4F6"),
            chemical("zn", "Zn (serbuk)", Phase::Solid, "#9CA3AF"),
            chemical("naoh", "NaOH 0,1 M", Phase::Solution, "#F9FAFB"),
            chemical("pp", "Fenolftalein", Phase::Solution, "#FFFFFF"),
            chemical("agno3", "AgNO3", Phase::Solution, "#F8FAFC"),
            LabItem {
                id: "termometer".into(),
                name: "Termometer".into(),
                kind: ItemKind::Tool,
                phase: None,
                color: None,
                description: None,
            },
        ],
    }
}

pub fn rule(id: &str, reactants: &[&str], result: ReactionResult) -> ReactionRule {
    ReactionRule {
        id: id.into(),
        reactants: reactants.iter().map(|r| r.to_string()).collect(),
        vessel_type: None,
        result,
    }
}

pub fn observation_only(text: &str) -> ReactionResult {
    ReactionResult {
        color: None,
        temp_change: None,
        observation: text.into(),
        precipitate: None,
        precipitate_color: None,
        bubbles: None,
    }
}

pub fn step(id: &str) -> PracticeStep {
    PracticeStep {
        id: id.into(),
        title: id.into(),
        instruction: String::new(),
        available_items: vec![],
        required_actions: vec![],
        input: None,
        hint: None,
        auto_complete: false,
    }
}

pub fn required(action_type: ActionType, item_id: Option<&str>, vessel_id: Option<&str>) -> RequiredAction {
    RequiredAction {
        action_type,
        item_id: item_id.map(str::to_string),
        vessel_id: vessel_id.map(str::to_string),
        description: String::new(),
    }
}

pub fn number_input(key: &str) -> StepInput {
    StepInput {
        key: key.into(),
        label: key.into(),
        input_type: InputType::Number,
        unit: Some("°C".into()),
    }
}

/// Beaker with 50 mL HCl, buret with NaOH, flask with HCl, three steps.
pub fn practice() -> Practice {
    let mut beaker = VesselState::new("beaker", VesselType::Beaker, "Gelas Kimia", 100.0);
    beaker.add_content("hcl", 50.0, Some("#F3F4F6".into()));
    let mut buret = VesselState::new("buret", VesselType::Buret, "Buret", 50.0);
    buret.add_content("naoh", 50.0, Some("#F9FAFB".into()));
    let mut flask = VesselState::new("flask", VesselType::Erlenmeyer, "Erlenmeyer", 250.0);
    flask.add_content("hcl", 25.0, Some("#F3F4F6".into()));

    let mut intro = step("intro");
    intro.auto_complete = true;
    let mut measure = step("measure");
    measure.required_actions = vec![required(ActionType::MeasureTemp, None, Some("beaker"))];
    measure.input = Some(number_input("suhu_awal"));
    let mut pour = step("pour");
    pour.required_actions = vec![required(ActionType::Pour, Some("zn"), Some("beaker"))];

    Practice {
        id: "fixture".into(),
        name: "Fixture".into(),
        description: String::new(),
        difficulty: Difficulty::Easy,
        estimated_time: "5 menit".into(),
        initial_vessels: vec![beaker, buret, flask],
        steps: vec![intro, measure, pour],
        reactions: vec![
            rule(
                "zn-hcl-first",
                &["zn", "hcl"],
                ReactionResult {
                    color: Some("#D1D5DB".into()),
                    temp_change: Some(15.0),
                    observation: "first".into(),
                    precipitate: None,
                    precipitate_color: None,
                    bubbles: Some(true),
                },
            ),
            rule(
                "zn-hcl-second",
                &["hcl", "zn"],
                ReactionResult {
                    color: Some("#000000".into()),
                    temp_change: Some(-50.0),
                    observation: "second".into(),
                    precipitate: Some(true),
                    precipitate_color: None,
                    bubbles: None,
                },
            ),
            rule(
                "pp-naoh-endpoint",
                &["pp", "naoh", "hcl"],
                ReactionResult {
                    color: Some("#F9A8D4".into()),
                    ..observation_only("Titik akhir tercapai.")
                },
            ),
        ],
    }
}

pub fn exotherm_catalog() -> LabCatalog {
    labsim_rules::builtin::catalog().expect("embedded catalog must validate")
}
