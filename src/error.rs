// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Errors reported back to the user by session commands.

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong while handling a user command.
///
/// None of these are fatal: the app logs them and shows them in the
/// status line, then keeps running.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("no image folder selected")]
    NoFolderSelected,

    #[error("not an image file: {0}")]
    UnsupportedFileType(String),

    #[error("no region selected, drag a box over the image first")]
    NoPendingSelection,

    #[error("export directory does not exist: {}", .0.display())]
    ExportDirectoryMissing(PathBuf),

    #[error("failed to read folder {}: {source}", .path.display())]
    FolderRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode image {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to write annotations: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize annotations: {0}")]
    Json(#[from] serde_json::Error),
}
