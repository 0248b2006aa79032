use thiserror::Error;

/// Errors raised when a session cannot be constructed from the catalog.
///
/// Reference problems inside a running session are never errors; they are
/// reported as ignored action outcomes instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LabError {
    #[error("Practice '{0}' not found in catalog")]
    UnknownPractice(String),

    #[error("Practice '{0}' has no steps")]
    NoSteps(String),
}
