//! Game configuration
//!
//! Uses RON (Rusty Object Notation) for a small, human-editable tuning file
//! at `assets/config.ron`. Every field is optional; anything missing falls
//! back to the defaults below. The file is read through macroquad's async
//! loader so the same code path works natively and in the browser.

use macroquad::logging::{info, warn};
use serde::{Deserialize, Serialize};
use crate::characters::Character;

/// Where the tuning file lives, relative to the working dir / web root
pub const CONFIG_PATH: &str = "assets/config.ron";

/// Tunables for the whole game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Player walking speed in pixels per second
    pub player_speed: f32,
    /// How long a tap keeps the player walking (seconds)
    pub tap_move_duration: f32,
    /// Title screen flash / delay before leaving (seconds)
    pub flash_duration: f32,
    /// Character used when the town is entered without a selection
    pub default_character: Character,
    /// Start with the debug overlay visible
    pub show_debug: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_speed: 200.0,
            tap_move_duration: 0.5,
            flash_duration: 0.25,
            default_character: Character::Jaxon,
            show_debug: false,
        }
    }
}

/// Error type for config loading
#[derive(Debug)]
pub enum ConfigError {
    ParseError(ron::error::SpannedError),
    ValidationError(String),
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::ParseError(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
            ConfigError::ValidationError(e) => write!(f, "Validation error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl GameConfig {
    /// Parse and validate RON text
    pub fn from_ron_str(s: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = ron::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.player_speed.is_finite() || self.player_speed <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "player_speed must be a positive number (got {})",
                self.player_speed
            )));
        }
        for (name, value) in [
            ("tap_move_duration", self.tap_move_duration),
            ("flash_duration", self.flash_duration),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "{} must be zero or more seconds (got {})",
                    name, value
                )));
            }
        }
        Ok(())
    }

    /// Load `assets/config.ron`, falling back to defaults if it is missing
    /// or broken
    pub async fn load() -> Self {
        match macroquad::file::load_string(CONFIG_PATH).await {
            Ok(text) => match Self::from_ron_str(&text) {
                Ok(config) => {
                    info!("Loaded {}", CONFIG_PATH);
                    config
                }
                Err(e) => {
                    warn!("Ignoring {}: {}", CONFIG_PATH, e);
                    Self::default()
                }
            },
            Err(e) => {
                info!("No {} ({}), using defaults", CONFIG_PATH, e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_struct_gives_defaults() {
        let config = GameConfig::from_ron_str("()").unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = GameConfig::from_ron_str(
            "(player_speed: 320.0, default_character: Vinny, show_debug: true)",
        )
        .unwrap();
        assert_eq!(config.player_speed, 320.0);
        assert_eq!(config.default_character, Character::Vinny);
        assert!(config.show_debug);
        assert_eq!(config.tap_move_duration, 0.5);
    }

    #[test]
    fn test_parse_error() {
        let err = GameConfig::from_ron_str("(player_speed: fast)").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_rejects_bad_values() {
        let err = GameConfig::from_ron_str("(player_speed: 0.0)").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
        assert!(err.to_string().contains("player_speed"));

        let err = GameConfig::from_ron_str("(flash_duration: -1.0)").unwrap_err();
        assert!(err.to_string().contains("flash_duration"));
    }

    #[test]
    fn test_round_trip_through_ron() {
        let original = GameConfig { tap_move_duration: 0.75, ..GameConfig::default() };
        let text = ron::ser::to_string_pretty(&original, ron::ser::PrettyConfig::new()).unwrap();
        assert_eq!(GameConfig::from_ron_str(&text).unwrap(), original);
    }

    #[test]
    fn test_shipped_config_matches_defaults() {
        let shipped = GameConfig::from_ron_str(include_str!("../assets/config.ron")).unwrap();
        assert_eq!(shipped, GameConfig::default());
    }
}
