pub mod actions;
pub mod context;
pub mod gate;
pub mod machine;
pub mod reactions;
pub mod session;
pub mod state;

pub use context::SimContext;
pub use machine::{transition, Intent, TransitionOutcome};
pub use session::{Session, Snapshot};
pub use state::SimulationState;

#[cfg(test)]
mod test_harness;
