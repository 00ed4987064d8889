//! Round-based matching games.
//!
//! Letter, number and colour games share one state machine: show a target and
//! four options, honour a single pick per round, and report the tally after a
//! fixed number of rounds or on early exit.

pub mod choice;
pub mod config;
pub mod engine;
pub mod error;
pub mod value;

pub use choice::RoundChoice;
pub use config::{OPTIONS_PER_ROUND, RoundConfig};
pub use engine::{Advance, RoundEngine, RoundState, finalize};
pub use error::RoundError;
pub use value::{COLOR_SWATCHES, ColorSwatch, Letter, Number, RoundValue};
