//! Input events delivered by the host toolkit.
//!
//! Positions are in widget-local coordinates.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Input event types.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// Pointer button pressed
    PointerDown {
        /// Position of the press
        position: Point,
        /// Button pressed
        button: MouseButton,
    },
    /// Pointer moved, with or without a button held
    PointerMove {
        /// New position
        position: Point,
    },
    /// Pointer button released
    PointerUp {
        /// Position of the release
        position: Point,
        /// Button released
        button: MouseButton,
    },
    /// Pointer left the widget bounds
    PointerLeave,
    /// Widget resized
    Resize {
        /// New width
        width: f32,
        /// New height
        height: f32,
    },
}

impl Event {
    /// Shorthand for a primary-button press.
    #[must_use]
    pub const fn down(x: f32, y: f32) -> Self {
        Self::PointerDown {
            position: Point::new(x, y),
            button: MouseButton::Left,
        }
    }

    /// Shorthand for a pointer move.
    #[must_use]
    pub const fn moved(x: f32, y: f32) -> Self {
        Self::PointerMove {
            position: Point::new(x, y),
        }
    }

    /// Shorthand for a primary-button release.
    #[must_use]
    pub const fn up(x: f32, y: f32) -> Self {
        Self::PointerUp {
            position: Point::new(x, y),
            button: MouseButton::Left,
        }
    }
}

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum MouseButton {
    /// Left (primary) button
    #[default]
    Left,
    /// Right (secondary) button
    Right,
    /// Middle button
    Middle,
}
