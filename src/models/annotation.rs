// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Annotation data structures.
//!
//! This module defines the labeled bounding box stored per image and the
//! raw drag rectangle it is computed from.

use crate::util::geometry::round2;
use serde::Serialize;

/// Two corner points of a completed drag, in image-pixel coordinates.
///
/// The corners may come in any order; a drag up and to the left is as
/// valid as one down and to the right.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Selection {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }
}

/// Box geometry: `x`/`y` are the center of the box, not its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Coordinates {
    /// Top-left and bottom-right corners, for drawing.
    pub fn corners(&self) -> ((f64, f64), (f64, f64)) {
        let half_w = self.width / 2.0;
        let half_h = self.height / 2.0;
        (
            (self.x - half_w, self.y - half_h),
            (self.x + half_w, self.y + half_h),
        )
    }
}

/// One labeled bounding box on one image.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Annotation {
    pub coordinates: Coordinates,
    pub label: String,
}

impl Annotation {
    /// Build an annotation from a drag rectangle and the current label text.
    ///
    /// Center and size are rounded to two decimals. The label is copied
    /// verbatim, empty or not.
    pub fn from_selection(selection: &Selection, label: &str) -> Self {
        let Selection { x1, y1, x2, y2 } = *selection;
        Self {
            coordinates: Coordinates {
                x: round2((x1 + x2) / 2.0),
                y: round2((y1 + y2) / 2.0),
                width: round2((x2 - x1).abs()),
                height: round2((y2 - y1).abs()),
            },
            label: label.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_to_annotation() {
        let selection = Selection::new(10.4, 20.6, 50.1, 80.9);
        let annotation = Annotation::from_selection(&selection, "cat");

        assert_eq!(annotation.label, "cat");
        assert_eq!(annotation.coordinates.x, 30.25);
        assert_eq!(annotation.coordinates.y, 50.75);
        assert_eq!(annotation.coordinates.width, 39.7);
        assert_eq!(annotation.coordinates.height, 60.3);
    }

    #[test]
    fn test_half_hundredths_round_to_even() {
        let annotation = Annotation::from_selection(&Selection::new(0.0, 0.0, 0.25, 0.25), "");
        assert_eq!(annotation.coordinates.x, 0.12);
        assert_eq!(annotation.coordinates.y, 0.12);
        assert_eq!(annotation.coordinates.width, 0.25);

        let annotation =
            Annotation::from_selection(&Selection::new(-0.25, -0.25, 0.0, 0.0), "");
        assert_eq!(annotation.coordinates.x, -0.12);
        assert_eq!(annotation.coordinates.y, -0.12);

        let annotation =
            Annotation::from_selection(&Selection::new(100.0, 0.0, 100.375, 0.375), "");
        assert_eq!(annotation.coordinates.x, 100.19);
        assert_eq!(annotation.coordinates.width, 0.38);
    }

    #[test]
    fn test_corner_order_does_not_matter() {
        let points = [
            (0.0, 0.0, 100.0, 50.0),
            (12.345, 99.999, 3.141, 2.718),
            (-4.5, 7.25, 640.125, 480.875),
            (1.005, 1.005, 1.005, 1.005),
        ];

        for (x1, y1, x2, y2) in points {
            let forward = Annotation::from_selection(&Selection::new(x1, y1, x2, y2), "a");
            let backward = Annotation::from_selection(&Selection::new(x2, y2, x1, y1), "a");
            let mixed = Annotation::from_selection(&Selection::new(x1, y2, x2, y1), "a");
            assert_eq!(forward, backward);
            assert_eq!(forward, mixed);
        }
    }

    #[test]
    fn test_size_is_never_negative() {
        let annotation =
            Annotation::from_selection(&Selection::new(200.0, 150.0, 120.0, 90.0), "");
        assert_eq!(annotation.coordinates.width, 80.0);
        assert_eq!(annotation.coordinates.height, 60.0);
        assert_eq!(annotation.coordinates.x, 160.0);
        assert_eq!(annotation.coordinates.y, 120.0);
        assert!(annotation.label.is_empty());
    }

    #[test]
    fn test_corners_recover_the_box() {
        let annotation = Annotation::from_selection(&Selection::new(10.0, 20.0, 50.0, 80.0), "");
        let (top_left, bottom_right) = annotation.coordinates.corners();
        assert_eq!(top_left, (10.0, 20.0));
        assert_eq!(bottom_right, (50.0, 80.0));
    }

    #[test]
    fn test_json_field_names() {
        let annotation = Annotation::from_selection(&Selection::new(0.0, 0.0, 4.0, 2.0), "dog");
        let value = serde_json::to_value(&annotation).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "coordinates": {"x": 2.0, "y": 1.0, "width": 4.0, "height": 2.0},
                "label": "dog"
            })
        );
    }
}
