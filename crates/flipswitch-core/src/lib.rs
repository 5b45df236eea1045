//! Core types and traits for flipswitch widgets.
//!
//! This crate provides foundational types used by the widget crate:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`]
//! - Color representation: [`Color`]
//! - Host input: [`Event`], [`MouseButton`]
//! - Cooperative timers: [`Timer`]
//! - Painting: [`Canvas`], [`DrawCommand`], [`RecordingCanvas`]

pub mod canvas;
mod color;
pub mod draw;
mod event;
mod geometry;
mod timer;
pub mod widget;

pub use canvas::RecordingCanvas;
pub use color::{Color, ColorParseError};
pub use draw::{BoxStyle, DrawCommand, StrokeStyle};
pub use event::{Event, MouseButton};
pub use geometry::{Point, Rect, Size};
pub use timer::Timer;
pub use widget::{AccessibleRole, Canvas, LayoutResult, Widget};
