// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Image folder listing and image decoding.
//!
//! This module lists the entries of an image folder and decodes image
//! files into RGBA pixels suitable for display in egui.

use crate::error::SessionError;
use std::path::Path;

/// File extensions recognized as images, lowercase.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "tiff"];

/// A decoded image.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedImage {
    pub width: u32,
    pub height: u32,
    /// RGBA8, row-major
    pub pixels: Vec<u8>,
}

/// Check by extension, ignoring case, whether a file name is an image.
pub fn is_image_file(file_name: &str) -> bool {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// List the entry names of `folder`, sorted, without recursing.
///
/// Non-image entries are kept; they are skipped when displayed.
pub fn list_folder(folder: &Path) -> Result<Vec<String>, SessionError> {
    let read_err = |source| SessionError::FolderRead {
        path: folder.to_path_buf(),
        source,
    };

    let mut names = Vec::new();
    for entry in std::fs::read_dir(folder).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    names.sort();
    Ok(names)
}

/// Decode an image file to RGBA8.
pub fn load_image(path: &Path) -> Result<LoadedImage, SessionError> {
    let img = image::open(path).map_err(|source| SessionError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();

    log::debug!("Decoded {} ({}x{})", path.display(), width, height);

    Ok(LoadedImage {
        width,
        height,
        pixels: rgba.into_raw(),
    })
}
