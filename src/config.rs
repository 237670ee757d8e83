//! Session configuration
//!
//! Loaded from JSON; every field has a default so a config file only needs
//! the values it changes.

use std::fs;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{PaintError, Result};
use crate::grid::{DrawStyle, DEFAULT_BRUSH_SIZE, MAX_BRUSH, MIN_BRUSH};
use crate::history::{DEFAULT_REPLAY_CAPACITY, DEFAULT_REPLAY_INTERVAL, DEFAULT_UNDO_CAPACITY};
use crate::layers::Color;

/// Settings for a paint session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Grid width in cells
    pub grid_width: usize,
    /// Grid height in cells
    pub grid_height: usize,
    /// Store variant used by every cell
    pub draw_style: DrawStyle,
    /// Colour layers are applied on top of
    pub background: Color,
    /// Time between replay steps
    pub replay_interval: f64,
    /// Maximum actions kept for undo/redo
    pub undo_capacity: usize,
    /// Maximum entries kept for replay
    pub replay_capacity: usize,
    /// Initial brush radius
    pub brush_size: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            grid_width: 32,
            grid_height: 32,
            draw_style: DrawStyle::Set,
            background: Color::WHITE,
            replay_interval: DEFAULT_REPLAY_INTERVAL,
            undo_capacity: DEFAULT_UNDO_CAPACITY,
            replay_capacity: DEFAULT_REPLAY_CAPACITY,
            brush_size: DEFAULT_BRUSH_SIZE,
        }
    }
}

impl SessionConfig {
    /// Load and validate a JSON config file
    pub fn load(path: &Path) -> Result<Self> {
        info!("Loading config: {}", path.display());

        let content = fs::read_to_string(path).map_err(|e| PaintError::ConfigRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: SessionConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every value is usable
    pub fn validate(&self) -> Result<()> {
        if self.grid_width == 0 || self.grid_height == 0 {
            return Err(PaintError::InvalidDimensions {
                width: self.grid_width,
                height: self.grid_height,
            });
        }
        if !self.replay_interval.is_finite() || self.replay_interval <= 0.0 {
            return Err(PaintError::InvalidConfig {
                reason: format!(
                    "replay_interval must be a positive number, got {}",
                    self.replay_interval
                ),
            });
        }
        if self.undo_capacity == 0 || self.replay_capacity == 0 {
            return Err(PaintError::InvalidConfig {
                reason: "history capacities must be at least 1".to_string(),
            });
        }
        if !(MIN_BRUSH..=MAX_BRUSH).contains(&self.brush_size) {
            return Err(PaintError::InvalidConfig {
                reason: format!(
                    "brush_size must be within [{}, {}], got {}",
                    MIN_BRUSH, MAX_BRUSH, self.brush_size
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(json: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = SessionConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.grid_width, 32);
        assert_eq!(config.undo_capacity, 10_000);
        assert_eq!(config.brush_size, 2);
    }

    #[test]
    fn test_load_partial_file() {
        let file = write_config(r#"{ "grid_width": 8, "draw_style": "sequence", "background": [0, 0, 0] }"#);
        let config = SessionConfig::load(file.path()).unwrap();

        assert_eq!(config.grid_width, 8);
        assert_eq!(config.grid_height, 32);
        assert_eq!(config.draw_style, DrawStyle::Sequence);
        assert_eq!(config.background, Color::BLACK);
    }

    #[test]
    fn test_unknown_style_is_fatal() {
        let file = write_config(r#"{ "draw_style": "GLITTER" }"#);
        let err = SessionConfig::load(file.path()).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
        assert!(err.to_string().contains("GLITTER"));
    }

    #[test]
    fn test_validation_failures() {
        let mut config = SessionConfig {
            grid_height: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(PaintError::InvalidDimensions { .. })
        ));

        config.grid_height = 4;
        config.replay_interval = 0.0;
        assert!(matches!(config.validate(), Err(PaintError::InvalidConfig { .. })));

        config.replay_interval = 0.1;
        config.brush_size = 6;
        assert!(matches!(config.validate(), Err(PaintError::InvalidConfig { .. })));
    }

    #[test]
    fn test_missing_file() {
        let err = SessionConfig::load(Path::new("/nonexistent/layerpaint.json")).unwrap_err();
        assert!(matches!(err, PaintError::ConfigRead { .. }));
    }

    #[test]
    fn test_round_trip_through_json() {
        let config = SessionConfig {
            draw_style: DrawStyle::Additive,
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"ADD\""));
        let back: SessionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
