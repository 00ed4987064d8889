use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::action::Direction;
use super::error::SnakeConfigError;

/// Configuration for a snake session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnakeConfig {
    /// Width of the game grid
    pub grid_width: usize,
    /// Height of the game grid
    pub grid_height: usize,
    /// Initial length of the snake
    pub initial_snake_length: usize,
    /// Direction the snake starts moving in
    pub initial_direction: Direction,
    /// Milliseconds between simulation ticks
    pub tick_ms: u64,
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self {
            grid_width: 20,
            grid_height: 20,
            initial_snake_length: 1,
            initial_direction: Direction::Up,
            tick_ms: 200,
        }
    }
}

impl SnakeConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// Total number of cells on the board
    pub fn cell_count(&self) -> usize {
        self.grid_width * self.grid_height
    }

    /// Longest snake that fits behind the centre head in the initial direction
    pub fn max_initial_length(&self) -> usize {
        let (width, height) = (self.grid_width, self.grid_height);
        match self.initial_direction {
            Direction::Up => height - height / 2,
            Direction::Down => height / 2 + 1,
            Direction::Left => width - width / 2,
            Direction::Right => width / 2 + 1,
        }
    }

    /// Reject settings the simulation or its timer cannot run with
    pub fn validate(&self) -> Result<(), SnakeConfigError> {
        if self.tick_ms == 0 {
            return Err(SnakeConfigError::ZeroTick);
        }
        if self.grid_width == 0 || self.grid_height == 0 {
            return Err(SnakeConfigError::EmptyGrid {
                width: self.grid_width,
                height: self.grid_height,
            });
        }
        let max = self.max_initial_length();
        if self.initial_snake_length == 0 || self.initial_snake_length > max {
            return Err(SnakeConfigError::InitialLength {
                length: self.initial_snake_length,
                max,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SnakeConfig::default();
        assert_eq!(config.grid_width, 20);
        assert_eq!(config.grid_height, 20);
        assert_eq!(config.initial_snake_length, 1);
        assert_eq!(config.initial_direction, Direction::Up);
        assert_eq!(config.tick_interval(), Duration::from_millis(200));
        assert_eq!(config.cell_count(), 400);
    }

    #[test]
    fn test_custom_config() {
        let config = SnakeConfig::new(15, 12);
        assert_eq!(config.grid_width, 15);
        assert_eq!(config.grid_height, 12);
        assert_eq!(config.tick_ms, 200);
    }

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(SnakeConfig::default().validate(), Ok(()));
        assert_eq!(SnakeConfig::small().validate(), Ok(()));
    }

    #[test]
    fn test_zero_tick_rejected() {
        let config = SnakeConfig {
            tick_ms: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(SnakeConfigError::ZeroTick));
    }

    #[test]
    fn test_empty_grid_rejected() {
        assert_eq!(
            SnakeConfig::new(0, 20).validate(),
            Err(SnakeConfigError::EmptyGrid {
                width: 0,
                height: 20
            })
        );
        assert!(SnakeConfig::new(20, 0).validate().is_err());
    }

    #[test]
    fn test_initial_length_must_fit() {
        // Heading up from (10, 10) the body can reach down to row 19
        let mut config = SnakeConfig {
            initial_snake_length: 10,
            ..Default::default()
        };
        assert_eq!(config.validate(), Ok(()));

        config.initial_snake_length = 11;
        assert_eq!(
            config.validate(),
            Err(SnakeConfigError::InitialLength { length: 11, max: 10 })
        );

        config.initial_snake_length = 0;
        assert!(config.validate().is_err());

        // Heading right the body trails towards column 0
        config.initial_direction = Direction::Right;
        config.initial_snake_length = 11;
        assert_eq!(config.validate(), Ok(()));
    }
}
