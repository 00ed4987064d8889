pub mod matching;
pub mod snake;
pub mod terminal;
pub mod ticker;

pub use matching::MatchingMode;
pub use snake::SnakeMode;
pub use ticker::TickTimer;
