//! Intent scripts: RON lists of `Intent` replayed against a session.

use std::path::{Path, PathBuf};

use labsim_core::config::SimConfig;
use labsim_rules::loader::{load_config_from_str, LoadError};
use labsim_sim::Intent;
use ron::extensions::Extensions;
use thiserror::Error;

/// Walkthrough of the exothermic practice shipped with the content pack.
pub const EXOTHERM_SCRIPT: &str = include_str!("../../../data/scripts/reaksi_eksoterm.ron");

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse script RON: {0}")]
    Parse(String),
    #[error(transparent)]
    Config(#[from] LoadError),
}

fn read(path: &Path) -> Result<String, ScriptError> {
    std::fs::read_to_string(path).map_err(|source| ScriptError::Io {
        path: path.to_path_buf(),
        source,
    })
}

pub fn parse_script(ron_str: &str) -> Result<Vec<Intent>, ScriptError> {
    ron::Options::default()
        .with_default_extension(Extensions::IMPLICIT_SOME)
        .from_str(ron_str)
        .map_err(|e| ScriptError::Parse(e.to_string()))
}

pub fn load_script(path: &Path) -> Result<Vec<Intent>, ScriptError> {
    parse_script(&read(path)?)
}

pub fn load_config(path: &Path) -> Result<SimConfig, ScriptError> {
    Ok(load_config_from_str(&read(path)?)?)
}
