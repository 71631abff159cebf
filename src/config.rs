use std::path::Path;

use crate::error::ConfigError;

/// Board size presets offered on the setup screen.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum BoardSize {
    Small,
    Medium,
    #[default]
    Large,
}

impl BoardSize {
    pub const ALL: [BoardSize; 3] = [BoardSize::Small, BoardSize::Medium, BoardSize::Large];

    /// (height, width) of the preset
    pub fn dimensions(self) -> (usize, usize) {
        match self {
            BoardSize::Small => (4, 4),
            BoardSize::Medium => (6, 6),
            BoardSize::Large => (8, 8),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BoardSize::Small => "Small",
            BoardSize::Medium => "Medium",
            BoardSize::Large => "Large",
        }
    }

    /// Parse a preset name. Anything unrecognised is treated as `Large`.
    pub fn from_name(name: &str) -> BoardSize {
        match name.trim().to_ascii_lowercase().as_str() {
            "small" => BoardSize::Small,
            "medium" => BoardSize::Medium,
            _ => BoardSize::Large,
        }
    }
}

impl From<String> for BoardSize {
    fn from(name: String) -> Self {
        BoardSize::from_name(&name)
    }
}

/// Game settings. Explicit `height`/`width` override the preset.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub size: BoardSize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<usize>,
}

/// Logging settings, used when the binary is started with `--log-file`.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            filter: "connect_four=info".to_string(),
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub log: LogConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match (self.game.height, self.game.width) {
            (Some(0), _) => {
                return Err(ConfigError::Validation("game.height must be > 0".into()));
            }
            (_, Some(0)) => {
                return Err(ConfigError::Validation("game.width must be > 0".into()));
            }
            (Some(_), None) | (None, Some(_)) => {
                return Err(ConfigError::Validation(
                    "game.height and game.width must be set together".into(),
                ));
            }
            _ => {}
        }

        if let Err(e) = tracing_subscriber::EnvFilter::try_new(&self.log.filter) {
            return Err(ConfigError::Validation(format!(
                "log.filter is not a valid filter: {e}"
            )));
        }

        Ok(())
    }

    /// Explicit dimensions if both are configured.
    pub fn custom_dimensions(&self) -> Option<(usize, usize)> {
        self.game.height.zip(self.game.width)
    }

    /// (height, width) of the board a new game should use.
    pub fn dimensions(&self) -> (usize, usize) {
        self.custom_dimensions()
            .unwrap_or_else(|| self.game.size.dimensions())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
