// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Label entry and command buttons.
//!
//! This module provides the bottom bar: the label text field followed by
//! the Save, Select Folder, Next Image and Write JSON buttons.

use crate::command::{Command, CommandQueue};
use std::path::Path;

/// Display the label entry and buttons, enqueueing whatever the user did.
///
/// Every edit of the text field is forwarded as its own `SetLabel`.
pub fn show(ui: &mut egui::Ui, label_input: &mut String, initial_dir: &Path, queue: &mut CommandQueue) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let entry = ui.add(
            egui::TextEdit::singleline(label_input)
                .hint_text("Label")
                .desired_width(320.0),
        );
        if entry.changed() {
            queue.push(Command::SetLabel(label_input.clone()));
        }

        if ui.button("Save").clicked() {
            queue.push(Command::Save);
        }

        if ui.button("Select Folder").clicked() {
            queue.push(pick_folder(initial_dir));
        }

        if ui.button("Next Image").clicked() {
            queue.push(Command::NextImage);
        }

        if ui.button("Write JSON").clicked() {
            queue.push(Command::WriteJson);
        }
    });
}

/// Open the native folder picker.
pub fn pick_folder(initial_dir: &Path) -> Command {
    let mut dialog = rfd::FileDialog::new().set_title("Select image folder");
    if initial_dir.is_dir() {
        dialog = dialog.set_directory(initial_dir);
    }
    Command::SelectFolder(dialog.pick_folder())
}
