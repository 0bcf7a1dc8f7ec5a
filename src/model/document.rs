//! Document roots for the two mission file kinds.

use crate::error::MissionError;

use super::config::MissionConfig;
use super::folder::{TemplateFolder, WaylineFolder};

/// Root of a `template.kml` file: authoring metadata, mission configuration
/// and the folder sequence.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TemplateDocument {
    pub author: Option<String>,
    /// Creation time, epoch milliseconds.
    pub create_time: Option<i64>,
    /// Last-update time, epoch milliseconds.
    pub update_time: Option<i64>,
    /// Serialization fails with `MissingMissionConfig` while this is `None`.
    pub mission_config: Option<MissionConfig>,
    pub folders: Vec<TemplateFolder>,
}

impl TemplateDocument {
    /// Serializes to the vendor XML vocabulary.
    pub fn to_xml(&self) -> Result<String, MissionError> {
        crate::xml::write_template(self)
    }

    /// Parses a serialized template document back into the tree model.
    pub fn from_xml(xml: &str) -> Result<Self, MissionError> {
        crate::xml::parse_template(xml)
    }
}

/// Root of a `waylines.wpml` file. Carries no authorship metadata; the
/// mission configuration is required by construction because only the
/// deriver produces these.
#[derive(Debug, Clone, PartialEq)]
pub struct WaylineDocument {
    pub mission_config: MissionConfig,
    pub folders: Vec<WaylineFolder>,
}

impl WaylineDocument {
    /// Serializes to the vendor XML vocabulary.
    pub fn to_xml(&self) -> Result<String, MissionError> {
        crate::xml::write_wayline(self)
    }

    /// Parses a serialized wayline document back into the tree model.
    pub fn from_xml(xml: &str) -> Result<Self, MissionError> {
        crate::xml::parse_wayline(xml)
    }
}
