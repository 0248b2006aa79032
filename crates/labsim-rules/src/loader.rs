use labsim_core::config::SimConfig;
use labsim_core::item::{ItemTable, LabItem};
use labsim_core::practice::Practice;
use ron::extensions::Extensions;
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to parse items RON: {0}")]
    ItemParseError(String),
    #[error("Failed to parse practice RON: {0}")]
    PracticeParseError(String),
    #[error("Failed to parse config RON: {0}")]
    ConfigParseError(String),
}

/// Content files write optional fields without `Some(..)`.
fn options() -> ron::Options {
    ron::Options::default().with_default_extension(Extensions::IMPLICIT_SOME)
}

fn parse<T: DeserializeOwned>(ron_str: &str) -> Result<T, String> {
    options().from_str(ron_str).map_err(|e| e.to_string())
}

/// Parse a single items RON string into an ItemTable.
pub fn load_items_from_str(ron_str: &str) -> Result<ItemTable, LoadError> {
    let items: Vec<LabItem> = parse(ron_str).map_err(LoadError::ItemParseError)?;
    Ok(ItemTable { items })
}

/// Parse a single practice RON string.
pub fn load_practice_from_str(ron_str: &str) -> Result<Practice, LoadError> {
    parse(ron_str).map_err(LoadError::PracticeParseError)
}

/// Load and merge multiple item sources into a single ItemTable.
pub fn load_all_items(sources: &[&str]) -> Result<ItemTable, LoadError> {
    let mut all_items = Vec::new();
    for source in sources {
        let table = load_items_from_str(source)?;
        all_items.extend(table.items);
    }
    Ok(ItemTable { items: all_items })
}

/// Load several practice sources, preserving source order.
pub fn load_all_practices(sources: &[&str]) -> Result<Vec<Practice>, LoadError> {
    sources.iter().map(|s| load_practice_from_str(s)).collect()
}

/// Parse session tunables. Missing fields take their defaults.
pub fn load_config_from_str(ron_str: &str) -> Result<SimConfig, LoadError> {
    parse(ron_str).map_err(LoadError::ConfigParseError)
}
