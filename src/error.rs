//! Error handling for Layerpaint
//!
//! Expected canvas conditions (empty history, duplicate layers, full stores)
//! are reported through `bool`/`Option` returns on the core types. This enum
//! covers construction, configuration, lookups and session gating.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for Layerpaint operations
pub type Result<T> = std::result::Result<T, PaintError>;

/// Main error type for Layerpaint operations
#[derive(Error, Debug)]
pub enum PaintError {
    // Configuration Errors
    #[error("Unknown draw style: {name} (expected SET, ADD or SEQUENCE)")]
    UnknownDrawStyle { name: String },

    #[error("Invalid grid dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("Failed to read config file: {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Layer Errors
    #[error("Unknown layer: {key}")]
    UnknownLayer { key: String },

    #[error("Duplicate layer index in registry: {index}")]
    DuplicateLayerIndex { index: usize },

    // Action Errors
    #[error("A draw action needs at least one step")]
    EmptyDrawAction,

    #[error("Position ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    // Session Errors
    #[error("Replay in progress")]
    ReplayInProgress,

    // Serialization Errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl PaintError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            PaintError::UnknownDrawStyle { .. } => "UNKNOWN_DRAW_STYLE",
            PaintError::InvalidDimensions { .. } => "INVALID_DIMENSIONS",
            PaintError::InvalidConfig { .. } => "INVALID_CONFIG",
            PaintError::ConfigRead { .. } => "CONFIG_READ",
            PaintError::UnknownLayer { .. } => "UNKNOWN_LAYER",
            PaintError::DuplicateLayerIndex { .. } => "DUPLICATE_LAYER_INDEX",
            PaintError::EmptyDrawAction => "EMPTY_DRAW_ACTION",
            PaintError::OutOfBounds { .. } => "OUT_OF_BOUNDS",
            PaintError::ReplayInProgress => "REPLAY_IN_PROGRESS",
            PaintError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Check if this error is recoverable
    ///
    /// Configuration errors are fatal at startup; the rest only reject the
    /// call that produced them.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            PaintError::UnknownLayer { .. }
                | PaintError::OutOfBounds { .. }
                | PaintError::ReplayInProgress
                | PaintError::EmptyDrawAction
        )
    }

    /// Returns a user-friendly recovery suggestion.
    pub fn recovery_suggestion(&self) -> Option<&'static str> {
        match self {
            PaintError::UnknownDrawStyle { .. } => Some("Use one of SET, ADD or SEQUENCE."),
            PaintError::InvalidDimensions { .. } => {
                Some("Grid width and height must both be at least 1.")
            }
            PaintError::UnknownLayer { .. } => {
                Some("Run 'layerpaint-cli layers' to list the available layers.")
            }
            PaintError::OutOfBounds { .. } => Some("Paint inside the grid."),
            PaintError::ReplayInProgress => Some("Wait for the replay to finish."),
            PaintError::ConfigRead { .. } => Some("Check the config file path and try again."),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = PaintError::UnknownDrawStyle {
            name: "SPRAY".to_string(),
        };
        assert_eq!(err.error_code(), "UNKNOWN_DRAW_STYLE");
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_recovery_suggestions() {
        let err = PaintError::ReplayInProgress;
        assert!(err.recovery_suggestion().is_some());
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_config_read_keeps_io_source() {
        use std::error::Error as _;

        let err = PaintError::ConfigRead {
            path: PathBuf::from("missing.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(err.error_code(), "CONFIG_READ");
        assert_eq!(err.source().unwrap().to_string(), "no such file");
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn test_display_includes_position() {
        let err = PaintError::OutOfBounds {
            x: 40,
            y: 2,
            width: 32,
            height: 32,
        };
        assert_eq!(
            err.to_string(),
            "Position (40, 2) is outside the 32x32 grid"
        );
    }
}
