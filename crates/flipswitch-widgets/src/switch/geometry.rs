//! Pixel layout of the track, knob and side zones.

use flipswitch_core::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Inset of the knob from the top and bottom edges of the track.
pub const BUTTON_INSET: i32 = 1;

/// Interactive zone under the pointer.
///
/// Hover and press state are each an `Option<Zone>`, so at most one zone
/// can be hot at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    /// The draggable knob
    Button,
    /// Track area left of the knob
    LeftSide,
    /// Track area right of the knob
    RightSide,
}

/// Track and knob dimensions in whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwitchGeometry {
    track_width: i32,
    button_width: i32,
    height: i32,
}

impl SwitchGeometry {
    /// Derive geometry from the widget size. The knob is a square
    /// `height - 2` pixels wide.
    #[must_use]
    pub fn from_size(width: i32, height: i32) -> Self {
        let height = height.max(0);
        Self {
            track_width: width.max(0),
            button_width: (height - 2 * BUTTON_INSET).max(0),
            height,
        }
    }

    /// Derive geometry from a floating-point host size.
    #[must_use]
    pub fn from_host_size(width: f32, height: f32) -> Self {
        Self::from_size(width.round() as i32, height.round() as i32)
    }

    /// Full track width.
    #[must_use]
    pub const fn track_width(&self) -> i32 {
        self.track_width
    }

    /// Knob width (and height).
    #[must_use]
    pub const fn button_width(&self) -> i32 {
        self.button_width
    }

    /// Widget height.
    #[must_use]
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// Distance the knob can slide. Zero when the track is no wider than
    /// the knob.
    #[must_use]
    pub const fn travel(&self) -> i32 {
        if self.track_width <= self.button_width {
            0
        } else {
            self.track_width - self.button_width
        }
    }

    /// Clamp a knob offset onto the rail.
    #[must_use]
    pub fn clamp(&self, value: i32) -> i32 {
        value.clamp(0, self.travel())
    }

    /// Rail end for a given state.
    #[must_use]
    pub const fn rest_position(&self, checked: bool) -> i32 {
        if checked {
            self.travel()
        } else {
            0
        }
    }

    /// Whole track.
    #[must_use]
    pub fn track_rect(&self) -> Rect {
        Rect::from_px(0, 0, self.track_width, self.height)
    }

    /// Knob rectangle at offset `value`.
    #[must_use]
    pub fn button_rect(&self, value: i32) -> Rect {
        Rect::from_px(value, BUTTON_INSET, self.button_width, self.button_width)
    }

    /// Track area left of the knob.
    #[must_use]
    pub fn left_side_rect(&self, value: i32) -> Rect {
        Rect::from_px(0, 0, value, self.height)
    }

    /// Track area right of the knob.
    #[must_use]
    pub fn right_side_rect(&self, value: i32) -> Rect {
        let left = value + self.button_width;
        Rect::from_px(left, 0, self.track_width - left, self.height)
    }

    /// Classify a widget-local point against a knob at offset `value`.
    ///
    /// Points outside the track, or directly above or below the knob, fall
    /// in no zone.
    #[must_use]
    pub fn zone_at(&self, point: Point, value: i32) -> Option<Zone> {
        if !self.track_rect().contains_point(&point) {
            return None;
        }
        if self.button_rect(value).contains_point(&point) {
            return Some(Zone::Button);
        }
        if point.x < value as f32 {
            Some(Zone::LeftSide)
        } else if point.x >= (value + self.button_width) as f32 {
            Some(Zone::RightSide)
        } else {
            None
        }
    }
}

impl Default for SwitchGeometry {
    fn default() -> Self {
        Self::from_size(50, 21)
    }
}
