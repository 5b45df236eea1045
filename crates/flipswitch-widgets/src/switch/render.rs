//! Render snapshot and the pluggable renderer seam.
//!
//! The switch never draws by itself. It hands a [`SwitchVisual`] to a
//! [`SwitchRenderer`], which turns it into canvas calls.

use super::config::SwitchPalette;
use super::geometry::Zone;
use super::Mode;
use flipswitch_core::{Canvas, Color, Point, Rect};

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct SwitchVisual {
    /// Widget origin in host coordinates; all rects below are local.
    pub origin: Point,
    /// Committed state.
    pub checked: bool,
    /// Interaction mode.
    pub mode: Mode,
    /// Knob offset from the left edge.
    pub button_value: i32,
    /// Whole track.
    pub track_rect: Rect,
    /// Knob.
    pub button_rect: Rect,
    /// Track left of the knob.
    pub left_side_rect: Rect,
    /// Track right of the knob.
    pub right_side_rect: Rect,
    /// Zone under the pointer.
    pub hover: Option<Zone>,
    /// Zone held down.
    pub pressed: Option<Zone>,
    /// Whether pointer input is accepted.
    pub enabled: bool,
    /// Colors.
    pub palette: SwitchPalette,
}

/// Draws a [`SwitchVisual`].
pub trait SwitchRenderer {
    /// Paint one frame.
    fn render(&self, visual: &SwitchVisual, canvas: &mut dyn Canvas);
}

/// Pill-shaped track, overlay up to the knob, outlined round knob. A switch
/// that ignores user input is drawn faded toward the track color.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultRenderer;

/// How far disabled colors blend toward the track color.
const DISABLED_FADE: f32 = 0.5;

impl DefaultRenderer {
    fn side_color(visual: &SwitchVisual, zone: Zone) -> Option<Color> {
        if visual.pressed == Some(zone) {
            Some(visual.palette.side_pressed_color)
        } else if visual.hover == Some(zone) {
            Some(visual.palette.side_hover_color)
        } else {
            None
        }
    }

    fn shade(visual: &SwitchVisual, color: Color) -> Color {
        if visual.enabled {
            color
        } else {
            color.lerp(&visual.palette.back_color, DISABLED_FADE)
        }
    }
}

impl SwitchRenderer for DefaultRenderer {
    fn render(&self, visual: &SwitchVisual, canvas: &mut dyn Canvas) {
        let origin = visual.origin;
        let track = visual.track_rect.offset(origin);
        if track.is_empty() {
            return;
        }
        let radius = track.height / 2.0;
        canvas.fill_rounded_rect(track, radius, visual.palette.back_color);

        // Overlay grows with the knob so a half-dragged knob shows half the
        // "on" color.
        let covered = visual.left_side_rect.width + visual.button_rect.width / 2.0;
        if covered > 0.0 && visual.button_value > 0 {
            let overlay = Rect::new(track.x, track.y, covered.min(track.width), track.height);
            let color = Self::shade(visual, visual.palette.overlay_color);
            canvas.fill_rounded_rect(overlay, radius, color);
        }

        for (zone, rect) in [
            (Zone::LeftSide, visual.left_side_rect),
            (Zone::RightSide, visual.right_side_rect),
        ] {
            if let Some(color) = Self::side_color(visual, zone) {
                if !rect.is_empty() {
                    canvas.fill_rect(rect.offset(origin), color);
                }
            }
        }

        let button = visual.button_rect.offset(origin);
        if button.is_empty() {
            return;
        }
        let color = if visual.pressed == Some(Zone::Button) {
            visual.palette.button_pressed_color
        } else if visual.hover == Some(Zone::Button) {
            visual.palette.button_hover_color
        } else {
            visual.palette.button_color
        };
        canvas.fill_circle(button.center(), button.width / 2.0, Self::shade(visual, color));

        // Keep the 1px outline inside the knob bounds.
        let ring = button.inset(0.5);
        let border = Self::shade(visual, visual.palette.button_border_color);
        canvas.stroke_circle(ring.center(), ring.width / 2.0, border, 1.0);
    }
}
