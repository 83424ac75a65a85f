//! Engine configuration
//!
//! All runtime knobs live in [`EngineConfig`], which serializes to TOML or
//! RON through the [`Config`] trait so games can ship a config file next to
//! the binary and fall back to defaults when it is absent.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),
}

/// Load/save support for configuration types
///
/// The format is chosen by file extension; `.toml` and `.ron` are
/// supported.
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from a file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Load configuration from a file, or fall back to defaults when the
    /// file does not exist
    fn load_or_default(path: &str) -> Result<Self, ConfigError> {
        if std::path::Path::new(path).exists() {
            Self::load_from_file(path)
        } else {
            log::info!("Config file '{path}' not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Save configuration to a file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Top-level engine configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EngineConfig {
    /// Window configuration
    pub window: WindowConfig,

    /// Frame timing configuration
    pub timing: TimingConfig,

    /// Audio configuration
    pub audio: AudioConfig,
}

impl Config for EngineConfig {}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,

    /// Window width in pixels
    pub width: u32,

    /// Window height in pixels
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Micro Engine Game".to_string(),
            width: 800,
            height: 600,
        }
    }
}

/// Frame timing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Minimum inter-frame interval in milliseconds
    ///
    /// Keeps the elapsed time passed to object updates from becoming small
    /// enough to cause numeric problems in movement code.
    pub min_frame_interval_ms: u64,

    /// Ceiling on the elapsed time reported for one frame, in milliseconds
    ///
    /// `None` disables clamping; a stalled frame then produces one large
    /// catch-up step.
    pub max_frame_delta_ms: Option<u64>,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            min_frame_interval_ms: 10,
            max_frame_delta_ms: Some(250),
        }
    }
}

/// Audio configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    /// Whether to open an output device at all
    pub enabled: bool,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.window.width, 800);
        assert_eq!(config.window.height, 600);
        assert_eq!(config.timing.min_frame_interval_ms, 10);
        assert_eq!(config.timing.max_frame_delta_ms, Some(250));
        assert!(config.audio.enabled);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: EngineConfig = toml::from_str(
            r#"
            [window]
            title = "Pong"
            width = 1024
            "#,
        )
        .unwrap();
        assert_eq!(config.window.title, "Pong");
        assert_eq!(config.window.width, 1024);
        assert_eq!(config.window.height, 600);
        assert_eq!(config.timing.min_frame_interval_ms, 10);
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = EngineConfig::default();
        config.timing.max_frame_delta_ms = Some(500);
        config.window.title = "Round Trip".to_string();
        let text = toml::to_string(&config).unwrap();
        let back: EngineConfig = toml::from_str(&text).unwrap();
        assert_eq!(back.timing.max_frame_delta_ms, Some(500));
        assert_eq!(back.window.title, "Round Trip");
    }

    #[test]
    fn test_unsupported_extension_is_rejected() {
        let result = EngineConfig::load_from_file("engine.yaml");
        assert!(matches!(
            result,
            Err(ConfigError::UnsupportedFormat(_) | ConfigError::Io(_))
        ));
    }

    #[test]
    fn test_load_or_default_on_missing_file() {
        let config = EngineConfig::load_or_default("no/such/config.toml").unwrap();
        assert_eq!(config.window.width, 800);
    }
}
