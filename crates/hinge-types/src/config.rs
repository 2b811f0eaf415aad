//! Backend configuration.
//!
//! Tunables for the input translators. Defaults match the hardware: a
//! 320x240 touch panel sitting below a 400x240 top screen, unified into one
//! 400x480 logical canvas, and a stick whose raw deflection saturates at
//! +/-156 units.

use serde::{Deserialize, Serialize};

use crate::error::{HingeError, Result};

/// Translator tunables and display geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Logical canvas width in pixels.
    pub display_width: f32,
    /// Logical canvas height in pixels (both screens stacked).
    pub display_height: f32,
    /// Per-axis framebuffer scale.
    pub scale_x: f32,
    pub scale_y: f32,

    /// Additive offset mapping touch-panel space into canvas space.
    pub touch_offset_x: f32,
    pub touch_offset_y: f32,

    /// Where the pointer parks while nothing touches the panel. Must lie
    /// outside the canvas so hover-sensitive UI does not latch onto the
    /// last touched pixel.
    pub pointer_park_x: f32,
    pub pointer_park_y: f32,

    /// Normalized stick deflection below which a direction has not started.
    pub stick_deadzone: f32,
    /// Normalized stick deflection at which a direction saturates.
    pub stick_full: f32,
    /// Intensity above which an analog direction counts as held down.
    pub analog_press_threshold: f32,

    /// Byte capacity of the software keyboard's output buffer.
    pub keyboard_max_bytes: usize,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            display_width: 400.0,
            display_height: 480.0,
            scale_x: 1.0,
            scale_y: 1.0,
            touch_offset_x: 40.0,
            touch_offset_y: 240.0,
            pointer_park_x: -10.0,
            pointer_park_y: -10.0,
            stick_deadzone: 0.3,
            stick_full: 0.9,
            analog_press_threshold: 0.1,
            keyboard_max_bytes: 32,
        }
    }
}

impl BackendConfig {
    /// Parse a config from TOML and validate it.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Check internal consistency.
    pub fn validate(&self) -> Result<()> {
        if self.display_width <= 0.0 || self.display_height <= 0.0 {
            return Err(HingeError::Config("display size must be positive".into()));
        }
        let park_inside = (0.0..=self.display_width).contains(&self.pointer_park_x)
            && (0.0..=self.display_height).contains(&self.pointer_park_y);
        if park_inside {
            return Err(HingeError::Config(format!(
                "pointer park position ({}, {}) lies inside the {}x{} canvas",
                self.pointer_park_x, self.pointer_park_y, self.display_width, self.display_height,
            )));
        }
        if !(0.0..1.0).contains(&self.stick_deadzone)
            || self.stick_full <= self.stick_deadzone
            || self.stick_full > 1.0
        {
            return Err(HingeError::Config(format!(
                "stick thresholds must satisfy 0 <= deadzone < full <= 1, got {} and {}",
                self.stick_deadzone, self.stick_full,
            )));
        }
        if self.analog_press_threshold < 0.0 || self.analog_press_threshold >= 1.0 {
            return Err(HingeError::Config(
                "analog press threshold must be in [0, 1)".into(),
            ));
        }
        if self.keyboard_max_bytes == 0 {
            return Err(HingeError::Config(
                "keyboard buffer capacity must be nonzero".into(),
            ));
        }
        Ok(())
    }
}
