//! Engine settings loaded from a JSON file.
//!
//! Every key is optional; missing keys fall back to the defaults in
//! [`crate::constants`]. The default location is
//! `<config_dir>/splitboard/settings.json`.

use crate::constants::{MIN_BOX_SIZE, SETTINGS_DIR_NAME, SETTINGS_FILE_NAME};
use crate::error::{SettingsError, SettingsResult};
use crate::ids::IdStrategy;
use crate::palette::{ColorStrategy, Palette};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Tunables of the box engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Minimum width and height of a committed box
    pub min_box_size: f64,
    /// Colours a new box may be given
    pub palette: Palette,
    /// How a new box picks its colour
    pub color_strategy: ColorStrategy,
    /// How root box ids are generated
    pub id_strategy: IdStrategy,
    /// Swallow the click that immediately follows a drag which moved its box
    pub suppress_click_after_drag: bool,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            min_box_size: MIN_BOX_SIZE,
            palette: Palette::default(),
            color_strategy: ColorStrategy::default(),
            id_strategy: IdStrategy::default(),
            suppress_click_after_drag: false,
        }
    }
}

impl EngineSettings {
    /// Parse and validate settings from a JSON string.
    pub fn from_json(json: &str) -> SettingsResult<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load and validate settings from `path`.
    pub fn load_from(path: &Path) -> SettingsResult<Self> {
        let json = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        debug!(path = %path.display(), min_box_size = settings.min_box_size, "Loaded settings");
        Ok(settings)
    }

    /// Load from the default location, falling back to defaults when the
    /// file is missing or invalid.
    pub fn load() -> Self {
        let Some(path) = default_settings_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Failed to load settings from {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> SettingsResult<()> {
        if !self.min_box_size.is_finite() || self.min_box_size <= 0.0 {
            return Err(SettingsError::InvalidMinSize(self.min_box_size));
        }
        Ok(())
    }

    /// Builder-style override of the minimum box size
    pub fn with_min_box_size(mut self, min_box_size: f64) -> Self {
        self.min_box_size = min_box_size;
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_color_strategy(mut self, strategy: ColorStrategy) -> Self {
        self.color_strategy = strategy;
        self
    }

    pub fn with_id_strategy(mut self, strategy: IdStrategy) -> Self {
        self.id_strategy = strategy;
        self
    }

    pub fn with_click_after_drag_suppressed(mut self, suppress: bool) -> Self {
        self.suppress_click_after_drag = suppress;
        self
    }
}

/// Default settings file path, if the platform has a config dir.
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(SETTINGS_DIR_NAME).join(SETTINGS_FILE_NAME))
}
