use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_TITRANT_ID, HEAT_STEP_C, ML_PER_DROP};

/// How the step gate decides that a required action was performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GateMode {
    /// Substring match of keywords and item names against action descriptions.
    #[default]
    Fuzzy,
    /// Exact match on recorded action type, item id and vessel id.
    Structured,
}

/// Where `titrate` takes its titrant item ids from.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TitrantPolicy {
    /// The items currently held by the source vessel.
    #[default]
    SourceVessel,
    /// A single item treated as always present.
    Fixed(String),
}

impl TitrantPolicy {
    pub fn legacy() -> Self {
        TitrantPolicy::Fixed(DEFAULT_TITRANT_ID.to_string())
    }
}

/// Runtime tunables for a simulation session, loadable from RON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub ml_per_drop: f64,
    /// Temperature increase per heat action, °C.
    pub heat_step: f64,
    pub gate_mode: GateMode,
    pub titrant: TitrantPolicy,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            ml_per_drop: ML_PER_DROP,
            heat_step: HEAT_STEP_C,
            gate_mode: GateMode::default(),
            titrant: TitrantPolicy::default(),
        }
    }
}
