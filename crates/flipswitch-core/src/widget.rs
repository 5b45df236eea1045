//! Widget trait and related types.
//!
//! Widgets live on the host's UI thread and follow a layout-event-paint
//! cycle:
//!
//! 1. **Layout**: accept the bounds allocated by the host
//! 2. **Event**: react to pointer input and resize notifications
//! 3. **Paint**: emit draw commands through a [`Canvas`]
//!
//! # Examples
//!
//! ```
//! use flipswitch_core::{Canvas, Color, Rect, RecordingCanvas};
//!
//! let mut canvas = RecordingCanvas::new();
//! canvas.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::WHITE);
//! assert_eq!(canvas.command_count(), 1);
//! ```

use crate::event::Event;
use crate::geometry::{Point, Rect, Size};
use crate::Color;
use serde::{Deserialize, Serialize};
use std::any::Any;

/// Result of laying out a widget.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LayoutResult {
    /// Computed size after layout
    pub size: Size,
}

/// Core widget trait implemented by interactive controls.
///
/// Widgets are not required to be `Send`; they are owned by the UI thread
/// and all callbacks arrive on that thread.
pub trait Widget {
    /// Position the widget within allocated bounds.
    fn layout(&mut self, bounds: Rect) -> LayoutResult;

    /// Generate draw commands for rendering.
    fn paint(&self, canvas: &mut dyn Canvas);

    /// Handle input events. Returns a message when the event produced one.
    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>>;

    /// Check if this widget is interactive (can receive events).
    fn is_interactive(&self) -> bool {
        false
    }

    /// Get the accessible role.
    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Generic
    }

    /// Get the current bounds of this widget.
    fn bounds(&self) -> Rect {
        Rect::default()
    }
}

/// Canvas trait for paint operations.
///
/// This is a minimal abstraction over the rendering backend.
pub trait Canvas {
    /// Fill a rectangle with a solid color.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Fill a rectangle with uniformly rounded corners.
    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color);

    /// Fill a circle.
    fn fill_circle(&mut self, center: Point, radius: f32, color: Color);

    /// Stroke a circle outline.
    fn stroke_circle(&mut self, center: Point, radius: f32, color: Color, width: f32);
}

/// Accessible role for screen readers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AccessibleRole {
    /// Generic element
    #[default]
    Generic,
    /// Button
    Button,
    /// Checkbox
    Checkbox,
    /// On/off switch
    Switch,
}
