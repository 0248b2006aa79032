use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::constants::ENDPOINT_MARKER;
use crate::vessel::VesselType;

/// Effects applied to a vessel when a rule fires.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReactionResult {
    /// New color for every content in the vessel.
    #[serde(default)]
    pub color: Option<String>,
    /// Added to the vessel temperature (°C, may be negative).
    #[serde(default)]
    pub temp_change: Option<f64>,
    /// Text appended to the session observation log.
    pub observation: String,
    #[serde(default)]
    pub precipitate: Option<bool>,
    /// Precipitate display color. Falls back to `color` when absent.
    #[serde(default)]
    pub precipitate_color: Option<String>,
    #[serde(default)]
    pub bubbles: Option<bool>,
}

/// A declarative reaction: when every reactant is present, apply `result`.
///
/// Rules are evaluated in declaration order and the first satisfied rule
/// wins. Only one rule fires per action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReactionRule {
    pub id: String,
    /// Item ids that must all be present.
    pub reactants: Vec<String>,
    /// Informational only; matching ignores it.
    #[serde(default)]
    pub vessel_type: Option<VesselType>,
    pub result: ReactionResult,
}

impl ReactionRule {
    /// Whether every reactant is in `present`.
    pub fn is_satisfied_by(&self, present: &BTreeSet<&str>) -> bool {
        self.reactants.iter().all(|r| present.contains(r.as_str()))
    }

    /// Titration endpoint rules are marked by their id.
    pub fn is_endpoint(&self) -> bool {
        self.id.contains(ENDPOINT_MARKER)
    }
}
