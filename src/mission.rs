//! Two-step mission build facade.
//!
//! Author a template with [`TemplateBuilder`](crate::TemplateBuilder), hand
//! the finished document to [`Mission::from_template`] (which derives the
//! wayline), then serialize or package. The facade retains both documents;
//! the packager needs the pair.

use std::path::Path;

use crate::deriver;
use crate::error::MissionError;
use crate::model::document::{TemplateDocument, WaylineDocument};
use crate::package;

/// A fully-derived mission: the authored template plus its executable
/// wayline, ready for serialization and packaging.
#[derive(Debug, Clone)]
pub struct Mission {
    template: TemplateDocument,
    wayline: WaylineDocument,
}

impl Mission {
    /// Derives the wayline document from `template` and retains both.
    ///
    /// Fails with [`MissionError::InvalidTemplate`] when the template is
    /// structurally unfit for derivation.
    pub fn from_template(template: TemplateDocument) -> Result<Self, MissionError> {
        let wayline = deriver::derive_wayline(&template)?;
        Ok(Mission { template, wayline })
    }

    /// The authored template document, unchanged by derivation.
    pub fn template(&self) -> &TemplateDocument {
        &self.template
    }

    /// The derived wayline document.
    pub fn wayline(&self) -> &WaylineDocument {
        &self.wayline
    }

    /// Serializes the template document to `template.kml` markup.
    pub fn template_xml(&self) -> Result<String, MissionError> {
        self.template.to_xml()
    }

    /// Serializes the wayline document to `waylines.wpml` markup.
    pub fn wayline_xml(&self) -> Result<String, MissionError> {
        self.wayline.to_xml()
    }

    /// Serializes both documents and writes the `.kmz` archive to `path`.
    pub fn write_kmz(&self, path: &Path) -> Result<(), MissionError> {
        let template_xml = self.template_xml()?;
        let wayline_xml = self.wayline_xml()?;
        package::write_kmz(path, template_xml.as_bytes(), wayline_xml.as_bytes())
    }
}
