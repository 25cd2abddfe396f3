//! Threshold configuration for extraction and synthesis.
//!
//! All values are read-only for the duration of a run; `Config::default()`
//! carries the built-in thresholds and a TOML file can override any subset.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DtxError, Result};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub colors: ColorThresholds,
    pub detection: DetectionThresholds,
    pub sampling: SampleGates,
}

/// Thresholds driving color dedup and categorization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorThresholds {
    /// Perceptual distance below which two colors are duplicates, as a ratio
    /// of the 0-100 delta-E scale.
    pub dedup_ratio: f32,
    /// Minimum HSL saturation for a color to qualify as an accent.
    pub accent_saturation: f32,
    /// Maximum HSL saturation for a color to qualify as a neutral.
    pub neutral_saturation: f32,
    /// Neutrals must sit at a luminance extreme: above the high bound or
    /// below the low bound.
    pub neutral_luminance_high: f32,
    pub neutral_luminance_low: f32,
}

impl Default for ColorThresholds {
    fn default() -> Self {
        Self {
            dedup_ratio: 0.15,
            accent_saturation: 0.5,
            neutral_saturation: 0.15,
            neutral_luminance_high: 0.7,
            neutral_luminance_low: 0.3,
        }
    }
}

impl ColorThresholds {
    /// Dedup threshold on the 0-100 delta-E scale.
    pub fn dedup_threshold(&self) -> f32 {
        self.dedup_ratio * 100.0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionThresholds {
    /// A framework counts as detected strictly above this confidence percent.
    pub framework_confidence_cutoff: u8,
    /// Occurrence weight for font families found in web-font-service links.
    pub font_service_weight: u32,
}

impl Default for DetectionThresholds {
    fn default() -> Self {
        Self {
            framework_confidence_cutoff: 30,
            font_service_weight: 10,
        }
    }
}

/// Minimum sample sizes before observed values replace the default scales.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SampleGates {
    pub min_font_size_samples: u32,
    pub min_line_height_samples: u32,
}

impl Default for SampleGates {
    fn default() -> Self {
        Self {
            min_font_size_samples: 5,
            min_line_height_samples: 3,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file and validate it.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&text).map_err(|e| {
            DtxError::config(format!("Failed to parse config {}: {}", path.display(), e))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let ratio_bounds = 0.0..=1.0;
        if !ratio_bounds.contains(&self.colors.dedup_ratio) {
            return Err(DtxError::config(format!(
                "colors.dedup_ratio must be within 0.0..=1.0, got {}",
                self.colors.dedup_ratio
            )));
        }
        for (name, value) in [
            ("colors.accent_saturation", self.colors.accent_saturation),
            ("colors.neutral_saturation", self.colors.neutral_saturation),
            (
                "colors.neutral_luminance_high",
                self.colors.neutral_luminance_high,
            ),
            (
                "colors.neutral_luminance_low",
                self.colors.neutral_luminance_low,
            ),
        ] {
            if !ratio_bounds.contains(&value) {
                return Err(DtxError::config(format!(
                    "{name} must be within 0.0..=1.0, got {value}"
                )));
            }
        }
        if self.colors.neutral_luminance_low > self.colors.neutral_luminance_high {
            return Err(DtxError::config(
                "colors.neutral_luminance_low must not exceed colors.neutral_luminance_high",
            ));
        }
        if self.detection.framework_confidence_cutoff > 100 {
            return Err(DtxError::config(format!(
                "detection.framework_confidence_cutoff must be within 0..=100, got {}",
                self.detection.framework_confidence_cutoff
            )));
        }
        if self.detection.font_service_weight == 0 {
            return Err(DtxError::config(
                "detection.font_service_weight must be at least 1",
            ));
        }
        Ok(())
    }
}
