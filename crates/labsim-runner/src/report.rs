use std::path::Path;

use labsim_core::catalog::LabCatalog;
use labsim_sim::{Snapshot, TransitionOutcome};
use serde::Serialize;

/// Everything a scripted run produced.
#[derive(Debug, Clone, Serialize)]
pub struct Transcript {
    pub practice_id: String,
    pub outcomes: Vec<TransitionOutcome>,
    pub snapshot: Snapshot,
}

/// One-line summary of an outcome for the log.
pub fn describe_outcome(outcome: &TransitionOutcome) -> String {
    match outcome {
        TransitionOutcome::ItemSelected(Some(id)) => format!("selected {}", id),
        TransitionOutcome::ItemSelected(None) => "selection cleared".to_string(),
        TransitionOutcome::ActionApplied {
            description,
            observation: Some(observation),
        } => format!("{} -> {}", description, observation),
        TransitionOutcome::ActionApplied { description, .. } => description.clone(),
        TransitionOutcome::ActionIgnored(reason) => format!("ignored: {}", reason),
        TransitionOutcome::InputSet { key } => format!("input '{}' set", key),
        TransitionOutcome::StepChanged { from, to } => format!("step {} -> {}", from + 1, to + 1),
        TransitionOutcome::StepUnchanged(index) => format!("stayed on step {}", index + 1),
        TransitionOutcome::Completed => "practice complete".to_string(),
        TransitionOutcome::Reopened => "practice reopened".to_string(),
        TransitionOutcome::Reset => "session reset".to_string(),
    }
}

/// Markdown table of the practices in a catalog.
pub fn format_catalog(catalog: &LabCatalog) -> String {
    let mut out = String::new();
    out.push_str("| Id | Name | Difficulty | Steps | Time |\n");
    out.push_str("|----|------|------------|-------|------|\n");
    for p in &catalog.practices {
        out.push_str(&format!(
            "| {} | {} | {:?} | {} | {} |\n",
            p.id,
            p.name,
            p.difficulty,
            p.step_count(),
            p.estimated_time
        ));
    }
    out
}

pub fn save_transcript(path: &Path, transcript: &Transcript) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(transcript).map_err(std::io::Error::other)?;
    std::fs::write(path, json)
}
