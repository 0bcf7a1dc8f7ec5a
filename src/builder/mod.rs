//! Template authoring builder.
//!
//! [`TemplateBuilder`] assembles a template document step by step: mission
//! configuration, then one folder per flight pattern, then placemarks within
//! each folder. Every call consumes and returns the builder value, so chains
//! compose without shared mutable receivers; [`FolderBuilder`] temporarily
//! owns the parent builder until [`FolderBuilder::done`] hands it back.

pub mod profile;

use chrono::Utc;
use tracing::debug;

use crate::error::MissionError;
use crate::model::config::MissionConfig;
use crate::model::document::TemplateDocument;
use crate::model::folder::{TemplateFolder, TemplateType};
use crate::model::placemark::TemplatePlacemark;

use profile::PatternProfile;

/// Incrementally builds a [`TemplateDocument`].
#[derive(Debug)]
pub struct TemplateBuilder {
    doc: TemplateDocument,
}

impl TemplateBuilder {
    /// A fresh document authored by `author`, with creation and update
    /// timestamps both set to the current time (epoch milliseconds).
    pub fn new(author: impl Into<String>) -> Self {
        let now = Utc::now().timestamp_millis();
        TemplateBuilder {
            doc: TemplateDocument {
                author: Some(author.into()),
                create_time: Some(now),
                update_time: Some(now),
                mission_config: None,
                folders: Vec::new(),
            },
        }
    }

    /// Sets the mission configuration. Last write wins.
    pub fn mission_config(mut self, config: MissionConfig) -> Self {
        self.doc.mission_config = Some(config);
        self
    }

    /// Appends a new folder pre-populated with the builtin defaults for
    /// `template_type` and returns a handle bound to it.
    pub fn folder(self, template_type: TemplateType, template_id: u32) -> FolderBuilder {
        let folder =
            PatternProfile::builtin(template_type).new_folder(template_type, template_id);
        debug!(?template_type, template_id, "folder opened");
        FolderBuilder {
            builder: self,
            folder,
        }
    }

    /// The completed document.
    pub fn build(self) -> TemplateDocument {
        self.doc
    }

    /// Serializes the document to `template.kml` bytes.
    ///
    /// Fails with [`MissionError::MissingMissionConfig`] if no configuration
    /// was set.
    pub fn generate(&self) -> Result<Vec<u8>, MissionError> {
        self.doc.to_xml().map(String::into_bytes)
    }
}

/// Handle bound to the folder currently being authored.
#[derive(Debug)]
pub struct FolderBuilder {
    builder: TemplateBuilder,
    folder: TemplateFolder,
}

impl FolderBuilder {
    /// Appends a fully-specified placemark.
    ///
    /// The placemark's index is overwritten with the current length of the
    /// folder's sequence before the append, keeping indices zero-based and
    /// contiguous in insertion order.
    pub fn placemark(mut self, mut placemark: TemplatePlacemark) -> Self {
        placemark.index = self.folder.placemarks.len() as u32;
        self.folder.placemarks.push(placemark);
        self
    }

    /// Appends a default placemark at `(lng, lat)`: every inherit-capable
    /// attribute defers to the folder default and the risk flag is clear.
    pub fn placemark_at(self, longitude: f64, latitude: f64) -> Self {
        self.placemark(TemplatePlacemark::at(longitude, latitude))
    }

    /// Closes the folder, appends it to the document and returns the owning
    /// builder for further chaining.
    pub fn done(mut self) -> TemplateBuilder {
        debug!(
            placemarks = self.folder.placemarks.len(),
            "folder closed"
        );
        self.builder.doc.folders.push(self.folder);
        self.builder
    }
}
