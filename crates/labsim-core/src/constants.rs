//! Single source of truth for shared simulation constants.
//! Runtime-tunable counterparts live in [`crate::config::SimConfig`] and
//! default to these values.

/// Ambient lab temperature in °C. Every vessel template starts here unless
/// it specifies its own temperature.
pub const AMBIENT_TEMP_C: f64 = 25.0;

/// Volume contributed by a single drop in `addDrops`.
pub const ML_PER_DROP: f64 = 0.05;

/// Temperature increase applied by one `heat` action.
pub const HEAT_STEP_C: f64 = 20.0;

/// Substring that marks a reaction rule as a titration endpoint.
pub const ENDPOINT_MARKER: &str = "endpoint";

/// Titrant assumed present by the fixed titrant policy.
pub const DEFAULT_TITRANT_ID: &str = "naoh";

/// Observation emitted by every `stir` action.
pub const STIR_OBSERVATION: &str = "Campuran diaduk hingga homogen.";
