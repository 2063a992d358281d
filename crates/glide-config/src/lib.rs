//! Glide configuration system
//!
//! This crate provides centralized configuration management for glide,
//! loading motion settings from `glide.toml` so hosts can tune slide timing
//! without recompiling.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use glide_motion::{EasingFunction, SlideSpec};

/// Configuration loading failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Main configuration structure for glide.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GlideConfig {
    /// Slide transition settings.
    pub motion: MotionConfig,
}

/// Slide transition configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Slide duration in milliseconds.
    pub duration_ms: f32,
    /// Margin past the duration before completion is forced.
    pub fallback_margin_ms: f32,
    /// Timing curve for slides.
    pub easing: EasingFunction,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            duration_ms: 300.0,
            fallback_margin_ms: 50.0,
            easing: EasingFunction::EaseOut,
        }
    }
}

impl MotionConfig {
    /// The slide spec these settings describe.
    pub fn slide_spec(&self) -> SlideSpec {
        SlideSpec::default()
            .with_duration(self.duration_ms)
            .with_fallback_margin(self.fallback_margin_ms)
            .with_easing(self.easing)
    }
}

impl GlideConfig {
    /// Load configuration from a TOML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Load configuration, falling back to defaults when the file does not
    /// exist. A file that exists but fails to parse is still an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GlideConfig::default();
        assert_eq!(config.motion.duration_ms, 300.0);
        assert_eq!(config.motion.fallback_margin_ms, 50.0);
        assert_eq!(config.motion.easing, EasingFunction::EaseOut);
    }

    #[test]
    fn test_parse_partial_file() {
        let config: GlideConfig = toml::from_str(
            r#"
            [motion]
            duration_ms = 200.0
            "#,
        )
        .unwrap();

        assert_eq!(config.motion.duration_ms, 200.0);
        // Unset fields keep their defaults.
        assert_eq!(config.motion.fallback_margin_ms, 50.0);
        assert_eq!(config.motion.easing, EasingFunction::EaseOut);
    }

    #[test]
    fn test_parse_easing_variants() {
        let config: GlideConfig = toml::from_str(
            r#"
            [motion]
            easing = { type = "ease_in_out" }
            "#,
        )
        .unwrap();
        assert_eq!(config.motion.easing, EasingFunction::EaseInOut);

        let config: GlideConfig = toml::from_str(
            r#"
            [motion]
            easing = { type = "cubic_bezier", x1 = 0.4, y1 = 0.0, x2 = 0.2, y2 = 1.0 }
            "#,
        )
        .unwrap();
        assert_eq!(
            config.motion.easing,
            EasingFunction::CubicBezier {
                x1: 0.4,
                y1: 0.0,
                x2: 0.2,
                y2: 1.0
            }
        );
    }

    #[test]
    fn test_slide_spec_mapping() {
        let motion = MotionConfig {
            duration_ms: 250.0,
            fallback_margin_ms: 40.0,
            easing: EasingFunction::Linear,
        };

        let spec = motion.slide_spec();
        assert_eq!(spec.duration_ms, 250.0);
        assert_eq!(spec.fallback_deadline_ms(), 290.0);
        assert_eq!(spec.easing, EasingFunction::Linear);
    }

    #[test]
    fn test_missing_file_falls_back_to_default() {
        let config = GlideConfig::load_or_default("does-not-exist/glide.toml").unwrap();
        assert_eq!(config.motion.duration_ms, 300.0);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let result: Result<GlideConfig, _> = toml::from_str("motion = \"fast\"");
        assert!(result.is_err());
    }
}
