//! Draggable toggle switch for flipswitch hosts.

pub mod error;
pub mod switch;

pub use error::{Result, SwitchError};
pub use switch::config::{SwitchConfig, SwitchPalette};
pub use switch::decision::{decide, percent_of_travel, Release};
pub use switch::engine::{Animation, AnimationEngine, TickOutcome};
pub use switch::geometry::{SwitchGeometry, Zone};
pub use switch::render::{DefaultRenderer, SwitchRenderer, SwitchVisual};
pub use switch::tracker::{PointerRelease, PointerTracker};
pub use switch::{CheckedChanged, Mode, Switch};
