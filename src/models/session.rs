// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Session state management.
//!
//! This module tracks the browsed folder, which image is displayed, the
//! label being typed, the pending drag rectangle and every annotation made
//! during the run.

use super::annotation::{Annotation, Selection};
use crate::error::SessionError;
use crate::io::media::is_image_file;
use serde::Serialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// All annotations for one image, in the order they were saved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageAnnotationSet {
    pub image: String,
    pub annotations: Vec<Annotation>,
}

impl ImageAnnotationSet {
    pub fn new(image: String) -> Self {
        Self {
            image,
            annotations: Vec::new(),
        }
    }
}

/// State for one run of the tool.
#[derive(Debug, Default)]
pub struct SessionState {
    image_folder: Option<PathBuf>,
    image_files: Vec<String>,
    current_index: usize,
    pending_selection: Option<Selection>,
    current_label: String,
    /// Whether the label field has been edited at all.
    label_edited: bool,

    /// Annotation sets in first-visit order.
    sets: Vec<ImageAnnotationSet>,
    /// File name -> position in `sets`.
    set_index: HashMap<String, usize>,
    /// Set of the image on screen; `None` when nothing is displayed.
    current_set: Option<usize>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn image_folder(&self) -> Option<&Path> {
        self.image_folder.as_deref()
    }

    pub fn image_files(&self) -> &[String] {
        &self.image_files
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_file(&self) -> Option<&str> {
        self.image_files.get(self.current_index).map(String::as_str)
    }

    pub fn pending_selection(&self) -> Option<&Selection> {
        self.pending_selection.as_ref()
    }

    /// Every annotation set, ready for export.
    pub fn annotation_sets(&self) -> &[ImageAnnotationSet] {
        &self.sets
    }

    /// Name of the image on screen, `None` when the current entry is not
    /// an image or no folder is selected.
    pub fn displayed_image(&self) -> Option<&str> {
        self.current_set.map(|idx| self.sets[idx].image.as_str())
    }

    /// Annotations of the displayed image, or none if nothing is displayed.
    pub fn current_annotations(&self) -> &[Annotation] {
        self.current_set
            .map(|idx| self.sets[idx].annotations.as_slice())
            .unwrap_or(&[])
    }

    /// Caption mirroring the label field, with a hint until the first edit.
    pub fn caption(&self) -> String {
        if self.label_edited {
            format!("Input: {}", self.current_label)
        } else {
            "Text will be displayed here".to_string()
        }
    }

    /// Switch to a new folder listing and move to its first entry.
    ///
    /// Returns the path to decode, `Ok(None)` if the folder is empty. The
    /// entry only counts as displayed once [`Self::image_displayed`] is called.
    pub fn select_folder(
        &mut self,
        folder: PathBuf,
        files: Vec<String>,
    ) -> Result<Option<PathBuf>, SessionError> {
        log::info!("Selected folder {} ({} entries)", folder.display(), files.len());
        self.image_folder = Some(folder);
        self.image_files = files;
        self.current_index = 0;
        self.current_set = None;
        self.pending_selection = None;

        if self.image_files.is_empty() {
            return Ok(None);
        }
        self.locate_current().map(Some)
    }

    /// Advance to the next entry, wrapping after the last one.
    ///
    /// The index moves even when the new entry is not an image; in that case
    /// the error names the skipped file and nothing is displayed.
    pub fn next_image(&mut self) -> Result<Option<PathBuf>, SessionError> {
        if self.image_folder.is_none() {
            return Err(SessionError::NoFolderSelected);
        }
        if self.image_files.is_empty() {
            return Ok(None);
        }

        self.current_index = (self.current_index + 1) % self.image_files.len();
        self.locate_current().map(Some)
    }

    /// Resolve the entry at `current_index` to a path to decode.
    ///
    /// Nothing is displayed until the image decodes, so the previous image's
    /// set and any pending drag are released here.
    fn locate_current(&mut self) -> Result<PathBuf, SessionError> {
        let folder = self
            .image_folder
            .as_ref()
            .ok_or(SessionError::NoFolderSelected)?;
        let file = self.image_files[self.current_index].clone();

        self.current_set = None;
        self.pending_selection = None;

        if !is_image_file(&file) {
            log::debug!("Skipping non-image entry {}", file);
            return Err(SessionError::UnsupportedFileType(file));
        }

        Ok(folder.join(file))
    }

    /// Mark the entry at `current_index` as on screen.
    ///
    /// A revisited image gets its existing set back; a new one gets an empty
    /// set appended after all previously visited images. Entries that never
    /// decode never get a set.
    pub fn image_displayed(&mut self) {
        let Some(file) = self.current_file().map(str::to_string) else {
            return;
        };
        if !is_image_file(&file) {
            return;
        }

        let idx = match self.set_index.get(&file) {
            Some(&idx) => idx,
            None => {
                self.sets.push(ImageAnnotationSet::new(file.clone()));
                let idx = self.sets.len() - 1;
                self.set_index.insert(file, idx);
                idx
            }
        };
        self.current_set = Some(idx);

        log::info!(
            "Showing image {}/{}: {} ({} annotations)",
            self.current_index + 1,
            self.image_files.len(),
            self.sets[idx].image,
            self.sets[idx].annotations.len()
        );
    }

    /// Record the latest completed drag, replacing any earlier one.
    pub fn set_selection(&mut self, selection: Selection) {
        log::debug!(
            "Selected region: ({:.2}, {:.2}) to ({:.2}, {:.2})",
            selection.x1,
            selection.y1,
            selection.x2,
            selection.y2
        );
        self.pending_selection = Some(selection);
    }

    /// Mirror the label text field.
    pub fn set_label(&mut self, label: String) {
        self.current_label = label;
        self.label_edited = true;
    }

    /// Turn the pending selection and label into an annotation on the
    /// displayed image.
    ///
    /// The selection stays pending, so saving again adds a duplicate box.
    pub fn save_annotation(&mut self) -> Result<Annotation, SessionError> {
        if self.image_folder.is_none() {
            return Err(SessionError::NoFolderSelected);
        }
        let idx = match self.current_set {
            Some(idx) => idx,
            None => {
                let file = self.current_file().unwrap_or_default().to_string();
                return Err(SessionError::UnsupportedFileType(file));
            }
        };
        let selection = self
            .pending_selection
            .as_ref()
            .ok_or(SessionError::NoPendingSelection)?;

        let annotation = Annotation::from_selection(selection, &self.current_label);
        self.sets[idx].annotations.push(annotation.clone());
        log::info!(
            "Saved annotation '{}' on {}, total: {}",
            annotation.label,
            self.sets[idx].image,
            self.sets[idx].annotations.len()
        );
        Ok(annotation)
    }
}
