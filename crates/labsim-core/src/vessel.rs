use serde::{Deserialize, Serialize};

use crate::constants::AMBIENT_TEMP_C;

/// Kind of lab container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VesselType {
    Beaker,
    Erlenmeyer,
    Buret,
    TestTube,
    MeasuringCylinder,
}

/// One chemical present inside a vessel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VesselContent {
    pub item_id: String,
    /// Accumulated volume in mL. Repeated additions of the same item add up here.
    pub volume_ml: f64,
    /// Current display color. Reactions overwrite it for every content at once.
    #[serde(default)]
    pub color: Option<String>,
}

fn ambient() -> f64 {
    AMBIENT_TEMP_C
}

/// A simulated container: contents, temperature and derived-effect flags.
///
/// Practice templates are deserialized into this type; sessions work on
/// clones, so a template is never written through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VesselState {
    pub id: String,
    pub vessel_type: VesselType,
    pub name: String,
    /// Nominal capacity in mL. Not enforced; see [`VesselState::is_overflowing`].
    pub max_volume: f64,
    /// Temperature in °C.
    #[serde(default = "ambient")]
    pub temperature: f64,
    #[serde(default)]
    pub contents: Vec<VesselContent>,
    #[serde(default)]
    pub has_precipitate: bool,
    #[serde(default)]
    pub precipitate_color: Option<String>,
    #[serde(default)]
    pub has_bubbles: bool,
}

impl VesselState {
    /// Empty vessel at ambient temperature.
    pub fn new(id: &str, vessel_type: VesselType, name: &str, max_volume: f64) -> Self {
        Self {
            id: id.to_string(),
            vessel_type,
            name: name.to_string(),
            max_volume,
            temperature: AMBIENT_TEMP_C,
            contents: Vec::new(),
            has_precipitate: false,
            precipitate_color: None,
            has_bubbles: false,
        }
    }

    /// Whether any content references this item.
    pub fn contains(&self, item_id: &str) -> bool {
        self.contents.iter().any(|c| c.item_id == item_id)
    }

    /// Item ids of the current contents, in insertion order.
    pub fn content_ids(&self) -> impl Iterator<Item = &str> {
        self.contents.iter().map(|c| c.item_id.as_str())
    }

    pub fn content(&self, item_id: &str) -> Option<&VesselContent> {
        self.contents.iter().find(|c| c.item_id == item_id)
    }

    pub fn content_mut(&mut self, item_id: &str) -> Option<&mut VesselContent> {
        self.contents.iter_mut().find(|c| c.item_id == item_id)
    }

    /// Sum of all content volumes in mL.
    pub fn total_volume(&self) -> f64 {
        self.contents.iter().map(|c| c.volume_ml).sum()
    }

    /// Whether the contents exceed the nominal capacity.
    pub fn is_overflowing(&self) -> bool {
        self.total_volume() > self.max_volume
    }

    /// Add `volume_ml` of an item: accumulate onto an existing content of the
    /// same item, or append a new content with `color`.
    pub fn add_content(&mut self, item_id: &str, volume_ml: f64, color: Option<String>) {
        match self.content_mut(item_id) {
            Some(existing) => existing.volume_ml += volume_ml,
            None => self.contents.push(VesselContent {
                item_id: item_id.to_string(),
                volume_ml,
                color,
            }),
        }
    }

    /// Overwrite the display color of every content.
    pub fn recolor(&mut self, color: &str) {
        for content in &mut self.contents {
            content.color = Some(color.to_string());
        }
    }
}

/// Find a vessel by id in a vessel list.
pub fn find_vessel<'a>(vessels: &'a [VesselState], id: &str) -> Option<&'a VesselState> {
    vessels.iter().find(|v| v.id == id)
}
