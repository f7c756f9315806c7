//! Editor configuration.
//!
//! Every field has a default, so a host can pass `{}` or only the keys it
//! wants to change.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::background::BorderMatteConfig;
use crate::encode::EXPORT_FILE_NAME;

/// Slack for float slider values that arrive as e.g. `0.30000001`.
const RANGE_EPSILON: f32 = 1e-4;

/// Errors raised while loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid editor config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid editor config: {0}")]
    Invalid(String),
}

/// Bounds, step and starting value of one slider control.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderRange {
    pub min: f32,
    pub max: f32,
    pub step: f32,
    pub default: f32,
}

impl SliderRange {
    pub const fn new(min: f32, max: f32, step: f32, default: f32) -> Self {
        Self {
            min,
            max,
            step,
            default,
        }
    }

    /// Whether `value` is finite and within the slider bounds.
    pub fn contains(&self, value: f32) -> bool {
        value.is_finite() && value >= self.min - RANGE_EPSILON && value <= self.max + RANGE_EPSILON
    }

    fn validate(&self, name: &str) -> Result<(), ConfigError> {
        let ordered = self.min <= self.default && self.default <= self.max;
        if !ordered || self.step.is_nan() || self.step <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "{name} slider needs min <= default <= max and a positive step"
            )));
        }
        Ok(())
    }
}

/// Settings for an [`Editor`](crate::editor::Editor).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Brightness factor slider.
    pub brightness: SliderRange,
    /// Contrast factor slider.
    pub contrast: SliderRange,
    /// Blur radius slider (whole pixels).
    pub blur: SliderRange,
    /// File name offered for the exported PNG.
    pub export_file_name: String,
    /// Tuning for the built-in background model.
    pub background: BorderMatteConfig,
    /// `tracing` filter directive, e.g. `"info"` or `"retouch_core=debug"`.
    pub log_level: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            brightness: SliderRange::new(0.1, 2.0, 0.1, 1.0),
            contrast: SliderRange::new(0.1, 2.0, 0.1, 1.0),
            blur: SliderRange::new(0.0, 10.0, 1.0, 0.0),
            export_file_name: EXPORT_FILE_NAME.to_string(),
            background: BorderMatteConfig::default(),
            log_level: "info".to_string(),
        }
    }
}

impl EditorConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the slider bounds and export name make sense.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.brightness.validate("brightness")?;
        self.contrast.validate("contrast")?;
        self.blur.validate("blur")?;
        if self.brightness.min <= 0.0 || self.contrast.min <= 0.0 {
            return Err(ConfigError::Invalid(
                "brightness and contrast factors must stay above 0".to_string(),
            ));
        }
        if self.blur.min < 0.0 {
            return Err(ConfigError::Invalid("blur radius cannot be negative".to_string()));
        }
        if self.export_file_name.trim().is_empty() {
            return Err(ConfigError::Invalid("export_file_name is empty".to_string()));
        }
        Ok(())
    }
}
