//! Engine configuration supplied by the host page as JSON.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{MENU_ITEM_HEIGHT_PX, MENU_WIDTH_PX, PASTE_OFFSET_X, PASTE_OFFSET_Y};
use crate::error::ConfigError;

/// Tunables for the clipboard engine and selection menu.
///
/// Every field is optional in the JSON document; missing fields take the
/// built-in defaults. The paste offset is in canvas units and does not scale
/// with zoom.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Horizontal offset between the copied selection and each paste.
    pub paste_offset_x: f64,
    /// Vertical offset between the copied selection and each paste.
    pub paste_offset_y: f64,
    /// Selection menu width in CSS pixels.
    pub menu_width: f64,
    /// Height of a single selection menu entry in CSS pixels.
    pub menu_item_height: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            paste_offset_x: PASTE_OFFSET_X,
            paste_offset_y: PASTE_OFFSET_Y,
            menu_width: MENU_WIDTH_PX,
            menu_item_height: MENU_ITEM_HEIGHT_PX,
        }
    }
}

impl EngineConfig {
    /// Parse and validate a configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::Invalid`] for non-finite offsets or non-positive menu sizes.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that offsets are finite and menu sizes positive.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [("paste_offset_x", self.paste_offset_x), ("paste_offset_y", self.paste_offset_y)] {
            if !value.is_finite() {
                return Err(ConfigError::Invalid { field, reason: format!("{value} is not finite") });
            }
        }
        for (field, value) in [("menu_width", self.menu_width), ("menu_item_height", self.menu_item_height)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid { field, reason: format!("{value} must be positive") });
            }
        }
        Ok(())
    }
}
