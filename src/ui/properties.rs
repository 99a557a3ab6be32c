// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Annotation properties panel.
//!
//! This module lists the current image and the boxes saved on it.

use crate::models::session::SessionState;

/// Display the current image's position and its saved annotations.
pub fn show(ui: &mut egui::Ui, session: &SessionState) {
    ui.heading("Image");

    match session.current_file() {
        Some(file) => {
            ui.label(format!(
                "{}/{}: {}",
                session.current_index() + 1,
                session.image_files().len(),
                file
            ));
        }
        None => {
            ui.label(egui::RichText::new("No image").weak());
        }
    }

    ui.separator();
    ui.heading("Annotations");

    let annotations = session.current_annotations();
    if annotations.is_empty() {
        ui.label(egui::RichText::new("None saved").weak());
        return;
    }

    egui::ScrollArea::vertical().show(ui, |ui| {
        for (i, annotation) in annotations.iter().enumerate() {
            let c = &annotation.coordinates;
            let label = if annotation.label.is_empty() {
                "(no label)"
            } else {
                annotation.label.as_str()
            };
            ui.label(egui::RichText::new(format!("{}. {}", i + 1, label)).strong());
            ui.label(
                egui::RichText::new(format!(
                    "center ({:.2}, {:.2}), {:.2} x {:.2}",
                    c.x, c.y, c.width, c.height
                ))
                .monospace()
                .weak(),
            );
        }
    });

    ui.separator();
    ui.label(format!(
        "{} images visited this session",
        session.annotation_sets().len()
    ));
}
