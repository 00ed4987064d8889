use log::{debug, info};
use rand::{Rng, SeedableRng, rngs::StdRng};

use super::choice::RoundChoice;
use super::config::RoundConfig;
use super::error::{Result, RoundError};
use super::value::RoundValue;
use crate::session::{ActivityKind, FeedbackCue, SessionReport, SessionResult};

/// Progress through a matching session
#[derive(Debug, Clone, PartialEq)]
pub struct RoundState<V> {
    /// 0-based index of the round on screen
    pub round_index: u32,
    pub total_rounds: u32,
    pub correct: u32,
    pub selected: Option<V>,
    /// Set by the first selection of a round, cleared by the next round
    pub resolved: bool,
}

impl<V> RoundState<V> {
    fn new(total_rounds: u32) -> Self {
        Self {
            round_index: 0,
            total_rounds,
            correct: 0,
            selected: None,
            resolved: false,
        }
    }

    pub fn is_last_round(&self) -> bool {
        self.round_index + 1 >= self.total_rounds
    }
}

/// What `advance` did
#[derive(Debug, Clone, PartialEq)]
pub enum Advance {
    /// A new round with this index is on screen
    NextRound(u32),
    /// The last round was played and the session is over
    Finished(SessionReport),
}

/// Score a session: the success flag picks the terminal cue.
pub fn finalize(
    kind: ActivityKind,
    correct: u32,
    rounds_played: u32,
    success_threshold: f64,
) -> SessionReport {
    let played = rounds_played.max(1);
    let success = f64::from(correct) / f64::from(played) >= success_threshold;
    let cue = if success {
        FeedbackCue::SessionSuccess
    } else {
        FeedbackCue::SessionFail
    };

    SessionReport {
        result: SessionResult::new(kind, correct, played),
        cue: Some(cue),
    }
}

/// "Pick the matching option" game over any value kind
pub struct RoundEngine<V: RoundValue, R: Rng = StdRng> {
    pool: Vec<V>,
    config: RoundConfig,
    rng: R,
    state: RoundState<V>,
    choice: RoundChoice<V>,
    finished: bool,
}

impl<V: RoundValue> RoundEngine<V, StdRng> {
    pub fn new(pool: Vec<V>, config: RoundConfig) -> Result<Self> {
        Self::with_rng(pool, config, StdRng::from_entropy())
    }

    /// Session over the value kind's built-in pool
    pub fn with_default_pool(config: RoundConfig) -> Result<Self> {
        Self::new(V::default_pool(), config)
    }
}

impl<V: RoundValue, R: Rng> RoundEngine<V, R> {
    /// Validate the session inputs and put the first round on screen
    pub fn with_rng(pool: Vec<V>, config: RoundConfig, mut rng: R) -> Result<Self> {
        config.validate()?;
        let choice = RoundChoice::generate(&pool, &mut rng)?;
        info!(
            "{} session started with {} rounds",
            V::KIND,
            config.rounds_per_session
        );
        debug!("round 1 target {}", choice.target.label());

        Ok(Self {
            state: RoundState::new(config.rounds_per_session),
            pool,
            config,
            rng,
            choice,
            finished: false,
        })
    }

    pub fn kind(&self) -> ActivityKind {
        V::KIND
    }

    pub fn choice(&self) -> &RoundChoice<V> {
        &self.choice
    }

    pub fn state(&self) -> &RoundState<V> {
        &self.state
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Draw a new target and options and clear the selection
    pub fn start_round(&mut self) -> Result<&RoundChoice<V>> {
        if self.finished {
            return Err(RoundError::SessionFinished);
        }
        self.choice = RoundChoice::generate(&self.pool, &mut self.rng)?;
        self.state.selected = None;
        self.state.resolved = false;
        debug!(
            "round {} target {}",
            self.state.round_index + 1,
            self.choice.target.label()
        );
        Ok(&self.choice)
    }

    /// Record the answer for the current round.
    ///
    /// Returns whether it matched the target, or `None` when the round was
    /// already answered (or the session is over) and the call was ignored.
    pub fn select_option(&mut self, option: &V) -> Option<bool> {
        if self.finished || self.state.resolved {
            return None;
        }
        let correct = self.choice.is_target(option);
        self.state.selected = Some(option.clone());
        self.state.resolved = true;
        if correct {
            self.state.correct += 1;
        }
        debug!("picked {} ({})", option.label(), if correct { "correct" } else { "wrong" });
        Some(correct)
    }

    /// Select by position in the option list
    pub fn select_index(&mut self, index: usize) -> Option<bool> {
        let option = self.choice.options.get(index)?.clone();
        self.select_option(&option)
    }

    /// Move to the next round, or finish after the last one
    pub fn advance(&mut self) -> Result<Advance> {
        if self.finished {
            return Err(RoundError::SessionFinished);
        }
        if self.state.is_last_round() {
            let report = self.finish(self.state.total_rounds);
            return Ok(Advance::Finished(report));
        }
        self.state.round_index += 1;
        self.start_round()?;
        Ok(Advance::NextRound(self.state.round_index))
    }

    /// Leave mid-session. The round on screen counts as played.
    pub fn exit_early(&mut self) -> Result<SessionReport> {
        if self.finished {
            return Err(RoundError::SessionFinished);
        }
        Ok(self.finish(self.state.round_index + 1))
    }

    fn finish(&mut self, rounds_played: u32) -> SessionReport {
        self.finished = true;
        let report = finalize(
            V::KIND,
            self.state.correct,
            rounds_played,
            self.config.success_threshold,
        );
        info!(
            "{} session finished: {}/{}",
            V::KIND,
            report.result.score,
            report.result.total
        );
        report
    }
}
