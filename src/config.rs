// Runtime game configuration loaded from `assets/game.toml`
//
// Every field defaults to the matching constant in `constants.rs`, so the
// TOML file only needs the values being tuned.

use crate::constants::*;
use log::info;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Tunable gameplay configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // Screen
    pub screen_width: f32,
    pub screen_height: f32,
    pub points_per_meter: f32,

    // Difficulty
    pub initial_gravity: f32,
    pub gravity_step: f32,
    pub level_up_every: u32,

    // Countdown
    pub countdown_start: u32,
    pub countdown_interval: f32,

    // Rocket
    pub rocket_size: f32,
    pub bank_angle_degrees: f32,
    pub bank_duration: f32,
    pub move_duration: f32,
    pub upright_duration: f32,

    // Asteroid
    pub asteroid_size: f32,
    pub spawn_min_x: f32,
    pub asteroid_revolution: f32,

    /// Directory holding `textures/`
    pub asset_dir: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            points_per_meter: POINTS_PER_METER,
            initial_gravity: INITIAL_GRAVITY,
            gravity_step: GRAVITY_STEP,
            level_up_every: LEVEL_UP_EVERY,
            countdown_start: COUNTDOWN_START,
            countdown_interval: COUNTDOWN_INTERVAL_SECS,
            rocket_size: ROCKET_SIZE,
            bank_angle_degrees: BANK_ANGLE_DEGREES,
            bank_duration: BANK_DURATION_SECS,
            move_duration: MOVE_DURATION_SECS,
            upright_duration: UPRIGHT_DURATION_SECS,
            asteroid_size: ASTEROID_SIZE,
            spawn_min_x: SPAWN_MIN_X,
            asteroid_revolution: ASTEROID_REVOLUTION_SECS,
            asset_dir: PathBuf::from(ASSET_DIR),
        }
    }
}

impl GameConfig {
    /// Parse a configuration from TOML text and validate it
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load the configuration file, falling back to defaults when it is absent
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            info!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Reject values the game cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
            ConfigError::Invalid {
                field,
                reason: reason.into(),
            }
        }

        if self.screen_width <= 0.0 || self.screen_height <= 0.0 {
            return Err(invalid("screen_width", "screen must have a positive size"));
        }
        if self.points_per_meter <= 0.0 {
            return Err(invalid("points_per_meter", "must be positive"));
        }
        if self.initial_gravity >= 0.0 {
            return Err(invalid("initial_gravity", "gravity must pull down (negative)"));
        }
        if self.gravity_step < 0.0 {
            return Err(invalid("gravity_step", "must not be negative"));
        }
        if self.level_up_every == 0 {
            return Err(invalid("level_up_every", "must be at least 1"));
        }
        if self.countdown_start == 0 {
            return Err(invalid("countdown_start", "must be at least 1"));
        }
        if self.countdown_interval <= 0.0 {
            return Err(invalid("countdown_interval", "must be positive"));
        }
        if self.rocket_size <= 0.0 || self.asteroid_size <= 0.0 {
            return Err(invalid("rocket_size", "sprite sizes must be positive"));
        }
        if self.asteroid_revolution <= 0.0 {
            return Err(invalid("asteroid_revolution", "must be positive"));
        }
        if self.spawn_min_x > self.screen_width - self.asteroid_size {
            return Err(invalid(
                "spawn_min_x",
                format!(
                    "spawn range [{}, {}] is empty",
                    self.spawn_min_x,
                    self.screen_width - self.asteroid_size
                ),
            ));
        }
        Ok(())
    }

    /// Full path of the configuration file inside an asset directory
    pub fn default_path() -> PathBuf {
        Path::new(ASSET_DIR).join(CONFIG_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let config = GameConfig::default();
        assert_eq!(config.initial_gravity, -3.0);
        assert_eq!(config.gravity_step, 0.5);
        assert_eq!(config.level_up_every, 5);
        assert_eq!(config.countdown_start, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_override() {
        let config = GameConfig::from_toml_str("gravity_step = 1.0\nlevel_up_every = 3\n").unwrap();
        assert_eq!(config.gravity_step, 1.0);
        assert_eq!(config.level_up_every, 3);
        // Untouched fields keep their defaults
        assert_eq!(config.rocket_size, ROCKET_SIZE);
        assert_eq!(config.asset_dir, PathBuf::from(ASSET_DIR));
    }

    #[test]
    fn test_rejects_zero_cadence() {
        let err = GameConfig::from_toml_str("level_up_every = 0").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "level_up_every",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_upward_gravity() {
        assert!(GameConfig::from_toml_str("initial_gravity = 2.0").is_err());
    }

    #[test]
    fn test_rejects_empty_spawn_range() {
        let err = GameConfig::from_toml_str("screen_width = 100.0").unwrap_err();
        assert!(err.to_string().contains("spawn_min_x"));
    }

    #[test]
    fn test_parse_error() {
        let err = GameConfig::from_toml_str("gravity_step = \"fast\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = GameConfig::load_or_default("does/not/exist/game.toml").unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_bundled_file_matches_defaults() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(GameConfig::default_path());
        let config = GameConfig::load_or_default(path).unwrap();
        assert_eq!(config, GameConfig::default());
    }
}
