use serde::{Deserialize, Serialize};

use super::error::{Result, RoundError};

/// Options shown per round: the target plus three distractors
pub const OPTIONS_PER_ROUND: usize = 4;

/// Configuration for a matching mini-game session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundConfig {
    /// Rounds played before the session finishes on its own
    pub rounds_per_session: u32,
    /// Share of correct answers needed for the success cue
    pub success_threshold: f64,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            rounds_per_session: 5,
            success_threshold: 0.7,
        }
    }
}

impl RoundConfig {
    pub fn with_rounds(rounds_per_session: u32) -> Self {
        Self {
            rounds_per_session,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.rounds_per_session == 0 {
            return Err(RoundError::NoRounds);
        }
        if !(0.0..=1.0).contains(&self.success_threshold) {
            return Err(RoundError::InvalidThreshold(self.success_threshold));
        }
        Ok(())
    }
}
