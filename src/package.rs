//! KMZ container packaging.
//!
//! # Layout
//! The archive holds exactly two deflate-compressed entries under one stored
//! directory entry:
//!
//! ```text
//! wpmz/
//! wpmz/template.kml    (template document XML)
//! wpmz/waylines.wpml   (wayline document XML)
//! ```
//!
//! # Atomicity
//! The archive is written to `<path>.tmp` in the same directory (same
//! filesystem as the final path), then renamed over `path`. On any failure
//! the temp file is deleted and nothing appears at the destination.

use std::io::Write;
use std::path::Path;

use tracing::info;
use zip::write::SimpleFileOptions;
use zip::CompressionMethod;

use crate::error::MissionError;

/// Archive path of the serialized template document.
pub const TEMPLATE_ENTRY: &str = "wpmz/template.kml";
/// Archive path of the serialized wayline document.
pub const WAYLINE_ENTRY: &str = "wpmz/waylines.wpml";

const WPMZ_DIR: &str = "wpmz/";

/// Writes the mission archive to `path` using an atomic write.
pub fn write_kmz(
    path: &Path,
    template_xml: &[u8],
    wayline_xml: &[u8],
) -> Result<(), MissionError> {
    let file_name = path
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .into_owned();
    let tmp_path = path.with_file_name(format!("{file_name}.tmp"));

    if let Err(e) = write_archive(&tmp_path, template_xml, wayline_xml) {
        let _ = std::fs::remove_file(&tmp_path);
        return Err(e);
    }

    std::fs::rename(&tmp_path, path).map_err(|e| {
        let _ = std::fs::remove_file(&tmp_path);
        MissionError::Packaging(format!("rename to final path failed: {e}"))
    })?;

    info!(path = %path.display(), "mission archive written");
    Ok(())
}

/// Writes the archive to `path` (the temp file location). Cleanup on error
/// is handled entirely by the caller.
fn write_archive(
    path: &Path,
    template_xml: &[u8],
    wayline_xml: &[u8],
) -> Result<(), MissionError> {
    let file = std::fs::File::create(path)
        .map_err(|e| MissionError::Packaging(format!("cannot create temp file: {e}")))?;

    let mut zip = zip::ZipWriter::new(file);
    let deflated = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    let stored = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);

    zip.add_directory(WPMZ_DIR, stored)
        .map_err(|e| MissionError::Packaging(format!("cannot create {WPMZ_DIR} entry: {e}")))?;

    for (entry, bytes) in [(TEMPLATE_ENTRY, template_xml), (WAYLINE_ENTRY, wayline_xml)] {
        zip.start_file(entry, deflated)
            .map_err(|e| MissionError::Packaging(format!("cannot create {entry} entry: {e}")))?;
        zip.write_all(bytes)
            .map_err(|e| MissionError::Packaging(format!("cannot write {entry}: {e}")))?;
    }

    zip.finish()
        .map_err(|e| MissionError::Packaging(format!("cannot finalize archive: {e}")))?;

    Ok(())
}
