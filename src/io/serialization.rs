// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Annotation export.
//!
//! This module writes every image's annotations as one JSON array,
//! replacing the whole file on each export.

use crate::error::SessionError;
use crate::models::session::ImageAnnotationSet;
use std::path::Path;

/// File name of the export inside the output directory.
pub const EXPORT_FILE_NAME: &str = "annotations.json";

/// Export annotation sets to JSON format.
///
/// The containing directory must already exist; nothing is written if it
/// does not.
pub fn export_json(sets: &[ImageAnnotationSet], path: &Path) -> Result<(), SessionError> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() && !dir.is_dir() {
            return Err(SessionError::ExportDirectoryMissing(dir.to_path_buf()));
        }
    }

    let json = serde_json::to_string_pretty(sets)?;
    std::fs::write(path, json)?;
    Ok(())
}
