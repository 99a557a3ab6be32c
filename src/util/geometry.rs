// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric utility functions.
//!
//! This module provides utilities for fitting an image into the canvas and
//! converting between screen positions and image-pixel coordinates.

/// Round to two decimal places, ties to even.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Largest rectangle with the image's aspect ratio that fits in `available`,
/// centered in it.
pub fn fit_image_rect(available: egui::Rect, image_width: u32, image_height: u32) -> egui::Rect {
    let img_aspect = image_width as f32 / image_height as f32;
    let available_aspect = available.width() / available.height();

    let (display_width, display_height) = if img_aspect > available_aspect {
        // Image is wider - fit to width
        let width = available.width();
        (width, width / img_aspect)
    } else {
        // Image is taller - fit to height
        let height = available.height();
        (height * img_aspect, height)
    };

    egui::Rect::from_center_size(available.center(), egui::vec2(display_width, display_height))
}

/// Convert a screen position over `image_rect` to image-pixel coordinates.
pub fn screen_to_image(
    pos: egui::Pos2,
    image_rect: egui::Rect,
    image_width: u32,
    image_height: u32,
) -> (f64, f64) {
    let rel_x = (pos.x - image_rect.min.x) / image_rect.width();
    let rel_y = (pos.y - image_rect.min.y) / image_rect.height();
    (
        rel_x as f64 * image_width as f64,
        rel_y as f64 * image_height as f64,
    )
}

/// Convert image-pixel coordinates to a screen position over `image_rect`.
pub fn image_to_screen(
    x: f64,
    y: f64,
    image_rect: egui::Rect,
    image_width: u32,
    image_height: u32,
) -> egui::Pos2 {
    egui::pos2(
        image_rect.min.x + (x / image_width as f64) as f32 * image_rect.width(),
        image_rect.min.y + (y / image_height as f64) as f32 * image_rect.height(),
    )
}

/// Whether a drag from `start` to `end` spans at least `min_span` screen
/// pixels along both axes.
pub fn exceeds_min_span(start: egui::Pos2, end: egui::Pos2, min_span: f32) -> bool {
    (end.x - start.x).abs() >= min_span && (end.y - start.y).abs() >= min_span
}
