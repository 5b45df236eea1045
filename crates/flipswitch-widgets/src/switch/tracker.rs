//! Pointer tracking: zone hover/press flags and knob drag offsets.
//!
//! The tracker only records what the pointer is doing. Whether an event is
//! allowed to reach it (user changes disabled, animation in flight) is the
//! facade's call.

use super::geometry::{SwitchGeometry, Zone};
use flipswitch_core::Point;

/// An in-progress knob drag.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Drag {
    /// Pointer x at the moment the knob was grabbed.
    x_offset: f32,
    /// Knob offset at the moment the knob was grabbed.
    saved_value: i32,
    /// Pointer x at the latest press or move of this drag.
    pointer_x: f32,
}

/// What a pointer release completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerRelease {
    /// A knob drag ended; carries the offset captured at drag start.
    Drag {
        /// Knob offset when the drag began.
        saved_value: i32,
    },
    /// A press on one of the side zones ended.
    Side(Zone),
    /// Nothing was pressed.
    Nothing,
}

/// Hover, press and drag state for one switch.
#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    hover: Option<Zone>,
    pressed: Option<Zone>,
    drag: Option<Drag>,
    last_position: Option<Point>,
}

impl PointerTracker {
    /// Create an idle tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Zone currently under the pointer.
    #[must_use]
    pub const fn hover(&self) -> Option<Zone> {
        self.hover
    }

    /// Zone currently held down.
    #[must_use]
    pub const fn pressed(&self) -> Option<Zone> {
        self.pressed
    }

    /// Whether the knob is being dragged.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Last pointer position seen inside the widget.
    #[must_use]
    pub const fn last_position(&self) -> Option<Point> {
        self.last_position
    }

    /// Remember the pointer position without touching any flags.
    pub fn remember(&mut self, position: Point) {
        self.last_position = Some(position);
    }

    /// Forget the pointer position.
    pub fn forget(&mut self) {
        self.last_position = None;
    }

    /// Handle a press. Returns `true` if the press grabbed the knob.
    pub fn press(&mut self, position: Point, geometry: &SwitchGeometry, value: i32) -> bool {
        self.remember(position);
        if self.drag.is_some() {
            return false;
        }

        let zone = geometry.zone_at(position, value);
        self.pressed = zone;
        self.hover = zone;
        if zone == Some(Zone::Button) {
            self.drag = Some(Drag {
                x_offset: position.x,
                saved_value: value,
                pointer_x: position.x,
            });
            return true;
        }
        false
    }

    /// Follow the pointer during a drag. Returns the new knob offset, or
    /// `None` when no drag is in progress.
    pub fn drag_to(&mut self, position: Point, geometry: &SwitchGeometry) -> Option<i32> {
        self.remember(position);
        let drag = self.drag.as_mut()?;
        drag.pointer_x = position.x;
        let delta = (position.x - drag.x_offset).round() as i32;
        Some(geometry.clamp(drag.saved_value.saturating_add(delta)))
    }

    /// Carry a drag across a rail change. The start offset is clamped to
    /// the new rail and the last pointer x is re-anchored at `value`, the
    /// knob's clamped offset.
    pub fn rebase(&mut self, geometry: &SwitchGeometry, value: i32) {
        if let Some(drag) = self.drag.as_mut() {
            drag.saved_value = geometry.clamp(drag.saved_value);
            drag.x_offset = drag.pointer_x - value.saturating_sub(drag.saved_value) as f32;
        }
    }

    /// Recompute the hover zone. Returns `true` if it changed.
    pub fn hover_at(&mut self, position: Point, geometry: &SwitchGeometry, value: i32) -> bool {
        self.remember(position);
        let zone = geometry.zone_at(position, value);
        let changed = zone != self.hover;
        self.hover = zone;
        changed
    }

    /// Handle a release. Press flags are always cleared.
    pub fn release(&mut self, position: Point) -> PointerRelease {
        self.remember(position);
        let pressed = self.pressed.take();
        if let Some(drag) = self.drag.take() {
            return PointerRelease::Drag {
                saved_value: drag.saved_value,
            };
        }
        match pressed {
            Some(zone @ (Zone::LeftSide | Zone::RightSide)) => PointerRelease::Side(zone),
            Some(Zone::Button) | None => PointerRelease::Nothing,
        }
    }

    /// Abandon a drag without deciding anything. Returns the offset the
    /// knob had when the drag began.
    pub fn cancel_drag(&mut self) -> Option<i32> {
        self.pressed = None;
        self.drag.take().map(|d| d.saved_value)
    }

    /// Pointer left the widget.
    pub fn leave(&mut self) {
        self.hover = None;
        self.pressed = None;
        self.last_position = None;
    }

    /// Drop drag, hover and press state; keeps the last pointer position.
    pub fn clear_flags(&mut self) {
        self.hover = None;
        self.pressed = None;
        self.drag = None;
    }
}
