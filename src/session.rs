//! Types shared by every mini-game session and the host that consumes them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which mini-game a session belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Letters,
    Numbers,
    Colors,
    Snake,
}

impl ActivityKind {
    /// Human readable activity name used in the progress log
    pub fn title(&self) -> &'static str {
        match self {
            ActivityKind::Letters => "ABC Fun Game",
            ActivityKind::Numbers => "123 Adventure Game",
            ActivityKind::Colors => "Color Match Game",
            ActivityKind::Snake => "Snake Game",
        }
    }

    /// Badge awarded for a perfect session
    pub fn badge(&self) -> &'static str {
        match self {
            ActivityKind::Letters => "Alphabet Explorer",
            ActivityKind::Numbers => "Number Ninja",
            ActivityKind::Colors => "Color Champion",
            ActivityKind::Snake => "Snake Master",
        }
    }

    pub fn xp_per_point(&self) -> u32 {
        match self {
            ActivityKind::Snake => 2,
            _ => 5,
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Short feedback signal the host turns into sound, animation or a banner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackCue {
    /// Right answer, or the snake ate food
    Correct,
    /// Wrong answer
    Wrong,
    /// Session ended at or above the success threshold
    SessionSuccess,
    /// Session ended below the threshold, or the snake crashed
    SessionFail,
}

impl FeedbackCue {
    pub fn for_answer(correct: bool) -> Self {
        if correct {
            FeedbackCue::Correct
        } else {
            FeedbackCue::Wrong
        }
    }
}

/// Aggregate performance of one session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionResult {
    pub score: u32,
    pub total: u32,
    pub kind: ActivityKind,
}

impl SessionResult {
    pub fn new(kind: ActivityKind, score: u32, total: u32) -> Self {
        Self { score, total, kind }
    }

    pub fn is_perfect(&self) -> bool {
        self.total > 0 && self.score == self.total
    }
}

/// A finished session plus the terminal cue to play, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionReport {
    pub result: SessionResult,
    pub cue: Option<FeedbackCue>,
}

/// Receiver of completed sessions. Called exactly once per session.
pub trait SessionSink {
    fn on_session_complete(&mut self, result: SessionResult);
}

impl SessionSink for Vec<SessionResult> {
    fn on_session_complete(&mut self, result: SessionResult) {
        self.push(result);
    }
}
