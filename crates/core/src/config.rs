//! Game configuration.
//!
//! Values come from [`GameConfig::default`] or from environment variables via
//! [`GameConfig::from_env`]:
//!
//! - `TETRIS_SIM_WIDTH`: board width (default 10)
//! - `TETRIS_SIM_HEIGHT`: board height (default 20)
//! - `TETRIS_SIM_DROP_MS`: automatic descent interval in ms (default 1000)
//! - `TETRIS_SIM_SEED`: piece RNG seed (default: random)

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::error::ConfigError;
use crate::board::dimensions_in_range;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, DEFAULT_DROP_MS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub width: u8,
    pub height: u8,
    pub drop_interval_ms: u64,
    /// `None` seeds the piece generator from entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            drop_interval_ms: DEFAULT_DROP_MS,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Standard board with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Read overrides from the environment, then validate.
    ///
    /// Unset or empty variables keep their defaults; unparsable values are
    /// rejected rather than silently replaced.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let config = Self {
            width: env_or("TETRIS_SIM_WIDTH", defaults.width)?,
            height: env_or("TETRIS_SIM_HEIGHT", defaults.height)?,
            drop_interval_ms: env_or("TETRIS_SIM_DROP_MS", defaults.drop_interval_ms)?,
            seed: env_opt("TETRIS_SIM_SEED")?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !dimensions_in_range(self.width, self.height) {
            return Err(ConfigError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.drop_interval_ms == 0 {
            return Err(ConfigError::ZeroDropInterval);
        }
        Ok(())
    }

    pub fn drop_interval(&self) -> Duration {
        Duration::from_millis(self.drop_interval_ms)
    }
}

fn env_opt<T: FromStr>(var: &'static str) -> Result<Option<T>, ConfigError> {
    let Ok(raw) = env::var(var) else {
        return Ok(None);
    };
    let value = raw.trim();
    if value.is_empty() {
        return Ok(None);
    }
    value.parse().map(Some).map_err(|_| ConfigError::InvalidEnv {
        var,
        value: value.to_string(),
    })
}

fn env_or<T: FromStr>(var: &'static str, default: T) -> Result<T, ConfigError> {
    Ok(env_opt(var)?.unwrap_or(default))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MAX_DIMENSION;

    #[test]
    fn default_is_standard_board() {
        let config = GameConfig::default();
        assert_eq!((config.width, config.height), (10, 20));
        assert_eq!(config.drop_interval(), Duration::from_millis(1000));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_zero_width() {
        let config = GameConfig {
            width: 0,
            ..GameConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidDimensions { width: 0, height: 20 })
        );
    }

    #[test]
    fn rejects_width_too_narrow_for_i_spawn() {
        let config = GameConfig {
            width: 4,
            ..GameConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidDimensions { width: 4, height: 20 })
        );
        let config = GameConfig {
            width: 5,
            height: 4,
            ..GameConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_oversized_height() {
        let config = GameConfig {
            height: MAX_DIMENSION + 1,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_zero_interval() {
        let config = GameConfig {
            drop_interval_ms: 0,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroDropInterval));
    }

    #[test]
    fn env_parsing() {
        // Variable names unique to this test so parallel tests don't interfere.
        env::set_var("TETRIS_SIM_TEST_GOOD", " 42 ");
        env::set_var("TETRIS_SIM_TEST_BAD", "forty-two");
        env::set_var("TETRIS_SIM_TEST_EMPTY", "");

        assert_eq!(env_opt::<u64>("TETRIS_SIM_TEST_GOOD"), Ok(Some(42)));
        assert_eq!(env_or::<u8>("TETRIS_SIM_TEST_EMPTY", 7), Ok(7));
        assert_eq!(env_or::<u8>("TETRIS_SIM_TEST_UNSET", 9), Ok(9));
        assert!(matches!(
            env_opt::<u64>("TETRIS_SIM_TEST_BAD"),
            Err(ConfigError::InvalidEnv { var: "TETRIS_SIM_TEST_BAD", .. })
        ));
    }
}
