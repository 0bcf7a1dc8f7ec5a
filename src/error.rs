//! Error type shared by the document model, the wayline deriver and the
//! KMZ packager.
//!
//! All three failure classes are terminal for the mission-build request that
//! raised them: there is no partial success and no retry inside this crate.
//! Callers that want a retry re-invoke the whole build with corrected input.

/// Top-level error for a single mission-build request.
#[derive(Debug, thiserror::Error)]
pub enum MissionError {
    /// The document has no usable mission configuration at serialization
    /// time. The template builder never produces this on its own; it guards
    /// against callers serializing a half-built document.
    #[error("document has no mission config")]
    MissingMissionConfig,

    /// The wayline deriver hit an inherit marker with no corresponding
    /// folder default, or a structurally malformed template.
    #[error("invalid template: {0}")]
    InvalidTemplate(String),

    /// The XML serializer itself failed. Distinct from
    /// [`MissionError::MissingMissionConfig`], which is a document-state
    /// check performed before any bytes are produced.
    #[error("xml serialization failed: {0}")]
    Xml(#[from] quick_xml::SeError),

    /// A serialized document could not be parsed back into the tree model.
    #[error("malformed mission document: {0}")]
    MalformedDocument(String),

    /// Creating or writing the `.kmz` archive failed. The packager removes
    /// its temp file before surfacing this, so no truncated artifact is left
    /// at the destination path.
    #[error("failed to package mission archive: {0}")]
    Packaging(String),
}

impl From<quick_xml::DeError> for MissionError {
    fn from(e: quick_xml::DeError) -> Self {
        Self::MalformedDocument(e.to_string())
    }
}
