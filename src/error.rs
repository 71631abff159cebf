use std::path::PathBuf;

/// Errors returned by the rules engine for invalid caller input.
///
/// Full columns and finished games are not errors; they come back as
/// [`crate::game::RejectReason`] inside a [`crate::game::PlacementResult`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("invalid board dimensions {height}x{width} (both must be > 0)")]
    InvalidDimensions { height: usize, width: usize },

    #[error("column {column} out of range (board has {width} columns)")]
    ColumnOutOfRange { column: usize, width: usize },

    #[error("illegal placement at row {row}, column {column}")]
    IllegalPlacement { row: usize, column: usize },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_dimensions_display() {
        let err = GameError::InvalidDimensions {
            height: 0,
            width: 4,
        };
        assert_eq!(
            err.to_string(),
            "invalid board dimensions 0x4 (both must be > 0)"
        );
    }

    #[test]
    fn test_column_out_of_range_display() {
        let err = GameError::ColumnOutOfRange { column: 9, width: 6 };
        assert_eq!(
            err.to_string(),
            "column 9 out of range (board has 6 columns)"
        );
    }

    #[test]
    fn test_illegal_placement_display() {
        let err = GameError::IllegalPlacement { row: 3, column: 1 };
        assert_eq!(err.to_string(), "illegal placement at row 3, column 1");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("game.height must be > 0".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: game.height must be > 0"
        );
    }
}
