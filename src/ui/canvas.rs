// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Drawing canvas for image display and box selection.
//!
//! This module provides the main canvas area where users view the current
//! image and drag rectangles over regions of interest.

use crate::models::annotation::{Annotation, Coordinates, Selection};
use crate::util::geometry::{exceeds_min_span, fit_image_rect, image_to_screen, screen_to_image};

/// Result of canvas interaction.
pub enum CanvasAction {
    None,
    /// A drag finished with a rectangle large enough to count.
    Select(Selection),
}

/// What the canvas needs to draw.
pub struct CanvasView<'a> {
    pub texture: Option<&'a egui::TextureHandle>,
    pub image_size: Option<(u32, u32)>,
    pub annotations: &'a [Annotation],
    pub pending: Option<&'a Selection>,
    pub has_folder: bool,
    pub min_span: f32,
}

/// Display the main canvas area and handle mouse interactions.
///
/// `drag_start` holds the screen position where an in-progress drag began;
/// it lives in the app so it survives between frames.
pub fn show(
    ui: &mut egui::Ui,
    view: &CanvasView<'_>,
    drag_start: &mut Option<egui::Pos2>,
) -> CanvasAction {
    let mut action = CanvasAction::None;
    // Set background color
    ui.style_mut().visuals.extreme_bg_color = egui::Color32::from_gray(40);

    let available_size = ui.available_size();

    // Create a frame for the canvas
    egui::Frame::canvas(ui.style()).show(ui, |ui| {
        ui.set_min_size(available_size);

        let (Some(texture), Some((img_width, img_height))) = (view.texture, view.image_size) else {
            *drag_start = None;
            show_placeholder(ui, view.has_folder);
            return;
        };

        let image_rect = fit_image_rect(ui.max_rect(), img_width, img_height);

        // Draw the image, no axes or frame
        ui.painter().image(
            texture.id(),
            image_rect,
            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            egui::Color32::WHITE,
        );

        let response = ui.allocate_rect(image_rect, egui::Sense::drag());
        let pointer = response
            .interact_pointer_pos()
            .or_else(|| ui.ctx().input(|i| i.pointer.latest_pos()))
            .map(|pos| image_rect.clamp(pos));

        if response.drag_started_by(egui::PointerButton::Primary) {
            *drag_start = ui
                .ctx()
                .input(|i| i.pointer.press_origin())
                .map(|pos| image_rect.clamp(pos))
                .or(pointer);
        }

        let to_image = |pos: egui::Pos2| screen_to_image(pos, image_rect, img_width, img_height);

        if response.drag_stopped() {
            if let (Some(start), Some(end)) = (drag_start.take(), pointer) {
                if exceeds_min_span(start, end, view.min_span) {
                    let (x1, y1) = to_image(start);
                    let (x2, y2) = to_image(end);
                    action = CanvasAction::Select(Selection::new(x1, y1, x2, y2));
                } else {
                    log::debug!("Ignoring drag smaller than {} px", view.min_span);
                }
            }
        }

        let painter = ui.painter_at(image_rect);
        let to_screen = |x: f64, y: f64| image_to_screen(x, y, image_rect, img_width, img_height);

        // Draw saved boxes on top of the image
        for annotation in view.annotations {
            draw_box(
                &painter,
                &annotation.coordinates,
                &annotation.label,
                &to_screen,
                egui::Color32::YELLOW,
            );
        }

        // Draw the selection waiting to be saved
        if let Some(selection) = view.pending {
            let rect = egui::Rect::from_two_pos(
                to_screen(selection.x1, selection.y1),
                to_screen(selection.x2, selection.y2),
            );
            painter.rect_filled(rect, 0.0, egui::Color32::from_rgba_unmultiplied(120, 180, 255, 40));
            painter.rect_stroke(rect, 0.0, egui::Stroke::new(2.0, egui::Color32::LIGHT_BLUE));
        }

        // Preview the drag in progress
        if let (Some(start), Some(current)) = (*drag_start, pointer) {
            painter.rect_stroke(
                egui::Rect::from_two_pos(start, current),
                0.0,
                egui::Stroke::new(1.0, egui::Color32::WHITE),
            );
        }
    });

    action
}

/// Draw a saved box with its label above the top-left corner.
fn draw_box(
    painter: &egui::Painter,
    coordinates: &Coordinates,
    label: &str,
    to_screen: &impl Fn(f64, f64) -> egui::Pos2,
    color: egui::Color32,
) {
    let ((left, top), (right, bottom)) = coordinates.corners();
    let rect = egui::Rect::from_min_max(to_screen(left, top), to_screen(right, bottom));
    painter.rect_stroke(rect, 0.0, egui::Stroke::new(2.0, color));

    if !label.is_empty() {
        painter.text(
            rect.left_top(),
            egui::Align2::LEFT_BOTTOM,
            label,
            egui::FontId::proportional(14.0),
            color,
        );
    }
}

fn show_placeholder(ui: &mut egui::Ui, has_folder: bool) {
    let message = if has_folder {
        "Nothing to show for this entry, press Next Image"
    } else {
        "Select a folder of images to begin annotating"
    };

    ui.centered_and_justified(|ui| {
        ui.label(
            egui::RichText::new(message)
                .color(egui::Color32::from_gray(180)),
        );
    });
}
