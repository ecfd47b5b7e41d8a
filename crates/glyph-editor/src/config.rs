//! Editor configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest accepted tab size.
pub const MAX_TAB_SIZE: usize = 32;

/// Errors produced while loading an [`EditorConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse editor config: {0}")]
    /// The YAML document could not be parsed.
    Yaml(#[from] serde_yaml::Error),

    #[error("tab size {0} is out of range (0..={max})", max = MAX_TAB_SIZE)]
    /// `tab_size` is larger than [`MAX_TAB_SIZE`].
    TabSize(usize),
}

/// Runtime settings of an [`Editor`](crate::Editor).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Visual width of a tab stop. `0` makes a tab one column wide.
    pub tab_size: usize,
    /// Reject every mutation.
    pub read_only: bool,
    /// Color glyphs by syntax class.
    pub colorizer_enabled: bool,
    /// Draw markers for tabs and spaces.
    pub show_whitespaces: bool,
    /// Typed characters replace the character under the cursor.
    pub overwrite: bool,
    /// Let [`Editor::handle_key`](crate::Editor::handle_key) act on key presses.
    pub handle_keyboard_inputs: bool,
    /// Let [`Editor::handle_mouse`](crate::Editor::handle_mouse) act on mouse input.
    pub handle_mouse_inputs: bool,
    /// Line height multiplier.
    pub line_spacing: f32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            tab_size: 4,
            read_only: false,
            colorizer_enabled: true,
            show_whitespaces: true,
            overwrite: false,
            handle_keyboard_inputs: true,
            handle_mouse_inputs: true,
            line_spacing: 1.0,
        }
    }
}

impl EditorConfig {
    /// Parse a YAML document. Missing fields take their defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tab_size > MAX_TAB_SIZE {
            return Err(ConfigError::TabSize(self.tab_size));
        }
        Ok(())
    }
}
