//! Snake simulation.
//!
//! Pure game logic without any I/O or rendering dependencies; the host owns
//! the tick timer and feeds direction requests in between ticks.

pub mod action;
pub mod config;
pub mod engine;
pub mod error;
pub mod state;

// Re-export commonly used types
pub use action::{Axis, Direction};
pub use config::SnakeConfig;
pub use engine::{GameEngine, StepInfo, StepResult};
pub use error::SnakeConfigError;
pub use state::{CollisionType, GameState, Phase, Position, Snake};
