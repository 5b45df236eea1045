//! Switch behavior settings and color palette.
//!
//! Settings can be built in code or loaded from TOML:
//!
//! ```
//! use flipswitch_widgets::SwitchConfig;
//!
//! let config = SwitchConfig::from_toml_str(
//!     r#"
//!     threshold_percentage = 30
//!     use_animation = false
//!     "#,
//! )
//! .unwrap();
//! assert_eq!(config.threshold_percentage, 30);
//! assert!(config.toggle_on_side_click);
//! ```

use crate::error::{Result, SwitchError};
use flipswitch_core::Color;
use serde::{Deserialize, Serialize};

/// Behavior settings for a [`Switch`](super::Switch).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwitchConfig {
    /// Accept pointer input at all.
    pub allow_user_change: bool,
    /// A stationary click on the knob toggles the state.
    pub toggle_on_button_click: bool,
    /// A click on the track beside the knob moves it to that side.
    pub toggle_on_side_click: bool,
    /// Percent of travel a released drag must cover to flip, 0 to 100.
    pub threshold_percentage: i32,
    /// Animate the knob; when off, state changes land immediately.
    pub use_animation: bool,
    /// Milliseconds between animation ticks, greater than zero.
    pub animation_interval_ms: i32,
    /// Pixels moved per animation tick, greater than zero.
    pub animation_step: i32,
}

impl Default for SwitchConfig {
    fn default() -> Self {
        Self {
            allow_user_change: true,
            toggle_on_button_click: true,
            toggle_on_side_click: true,
            threshold_percentage: 50,
            use_animation: true,
            animation_interval_ms: 1,
            animation_step: 10,
        }
    }
}

impl SwitchConfig {
    /// Parse settings from a TOML document. Missing keys take their
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SwitchError::Config`] for malformed TOML and
    /// [`SwitchError::InvalidArgument`] for out-of-range values.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(source).map_err(|e| SwitchError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check every numeric setting.
    ///
    /// # Errors
    ///
    /// Returns the first [`SwitchError::InvalidArgument`] found.
    pub fn validate(&self) -> Result<()> {
        validate_threshold(self.threshold_percentage)?;
        validate_interval(self.animation_interval_ms)?;
        validate_step(self.animation_step)?;
        Ok(())
    }
}

pub(crate) fn validate_step(px: i32) -> Result<i32> {
    if px <= 0 {
        return Err(SwitchError::InvalidArgument {
            name: "animation_step",
            value: i64::from(px),
            reason: "must be greater than zero",
        });
    }
    Ok(px)
}

pub(crate) fn validate_interval(ms: i32) -> Result<u32> {
    u32::try_from(ms)
        .ok()
        .filter(|&ms| ms > 0)
        .ok_or(SwitchError::InvalidArgument {
            name: "animation_interval_ms",
            value: i64::from(ms),
            reason: "must be greater than zero",
        })
}

pub(crate) fn validate_threshold(percent: i32) -> Result<i32> {
    if !(0..=100).contains(&percent) {
        return Err(SwitchError::InvalidArgument {
            name: "threshold_percentage",
            value: i64::from(percent),
            reason: "must be between 0 and 100",
        });
    }
    Ok(percent)
}

/// Colors handed to the renderer. Each color is written as a hex string.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwitchPalette {
    /// Track background.
    pub back_color: Color,
    /// Fill over the part of the track the knob has covered.
    pub overlay_color: Color,
    /// Knob at rest.
    pub button_color: Color,
    /// Knob under the pointer.
    pub button_hover_color: Color,
    /// Knob held down.
    pub button_pressed_color: Color,
    /// Knob outline.
    pub button_border_color: Color,
    /// Side zone under the pointer.
    pub side_hover_color: Color,
    /// Side zone held down.
    pub side_pressed_color: Color,
}

impl SwitchPalette {
    /// Parse a palette from a TOML document of hex colors. Missing keys
    /// take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SwitchError::Config`] for malformed TOML or colors.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| SwitchError::Config(e.to_string()))
    }
}

impl Default for SwitchPalette {
    fn default() -> Self {
        Self {
            back_color: Color::from_rgb8(0xdd, 0xdd, 0xdd),
            overlay_color: Color::from_rgb8(0x33, 0x99, 0xff),
            button_color: Color::WHITE,
            button_hover_color: Color::from_rgb8(0xf2, 0xf2, 0xf2),
            button_pressed_color: Color::from_rgb8(0xd0, 0xd0, 0xd0),
            button_border_color: Color::from_rgb8(0xb4, 0xb4, 0xb4),
            side_hover_color: Color::from_rgba8(0, 0, 0, 0x10),
            side_pressed_color: Color::from_rgba8(0, 0, 0, 0x20),
        }
    }
}
