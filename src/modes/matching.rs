use anyhow::{Context, Result};
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use rand::{Rng, rngs::StdRng};
use std::time::Duration;
use tokio::time::interval;

use super::terminal::{Tui, cleanup_terminal, setup_terminal};
use crate::input::{InputHandler, KeyAction};
use crate::render::{Presentable, Renderer};
use crate::rounds::{Advance, RoundConfig, RoundEngine};
use crate::session::{FeedbackCue, SessionReport, SessionSink};

/// Letter, number or colour matching game in the terminal
pub struct MatchingMode<V: Presentable, R: Rng = StdRng> {
    engine: RoundEngine<V, R>,
    renderer: Renderer,
    input_handler: InputHandler,
    banner: Option<FeedbackCue>,
    summary: Option<SessionReport>,
    should_quit: bool,
}

impl<V: Presentable> MatchingMode<V, StdRng> {
    pub fn new(config: RoundConfig) -> Result<Self> {
        let engine = RoundEngine::with_default_pool(config)
            .context("Failed to start matching game")?;
        Ok(Self::with_engine(engine))
    }
}

impl<V: Presentable, R: Rng> MatchingMode<V, R> {
    pub fn with_engine(engine: RoundEngine<V, R>) -> Self {
        Self {
            engine,
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            banner: None,
            summary: None,
            should_quit: false,
        }
    }

    pub async fn run<S: SessionSink>(&mut self, sink: &mut S) -> Result<()> {
        let mut terminal = setup_terminal()?;

        let result = self.run_game_loop(&mut terminal, sink).await;

        // Ctrl+C or a draw error still ends the session with partial credit
        self.leave(sink);
        cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop<S: SessionSink>(
        &mut self,
        terminal: &mut Tui,
        sink: &mut S,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();
        let mut render_timer = interval(Duration::from_millis(33));

        loop {
            tokio::select! {
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event, sink)?;
                    }
                }

                _ = render_timer.tick() => {
                    terminal.draw(|frame| {
                        self.renderer.render_round(
                            frame,
                            &self.engine,
                            self.banner,
                            self.summary.as_ref(),
                        );
                    }).context("Failed to draw frame")?;
                }

                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event<S: SessionSink>(&mut self, event: Event, sink: &mut S) -> Result<()> {
        let Event::Key(key) = event else {
            return Ok(());
        };
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        let action = self.input_handler.handle_key_event(key);

        // Any key leaves the summary screen
        if self.summary.is_some() {
            self.should_quit = true;
            return Ok(());
        }

        match action {
            KeyAction::Choose(index) => self.choose(index),
            KeyAction::Next => self.next_round(sink)?,
            KeyAction::Back | KeyAction::Quit => {
                self.leave(sink);
                self.should_quit = true;
            }
            KeyAction::Steer(_) | KeyAction::Restart | KeyAction::None => {}
        }

        Ok(())
    }

    fn choose(&mut self, index: usize) {
        if let Some(correct) = self.engine.select_index(index) {
            self.banner = Some(FeedbackCue::for_answer(correct));
        }
    }

    /// Only an answered round can be moved past
    fn next_round<S: SessionSink>(&mut self, sink: &mut S) -> Result<()> {
        if !self.engine.state().resolved {
            return Ok(());
        }
        match self.engine.advance().context("Failed to advance round")? {
            Advance::NextRound(_) => self.banner = None,
            Advance::Finished(report) => self.finish(report, sink),
        }
        Ok(())
    }

    fn finish<S: SessionSink>(&mut self, report: SessionReport, sink: &mut S) {
        self.banner = report.cue;
        self.summary = Some(report);
        sink.on_session_complete(report.result);
    }

    /// Report partial credit if the session is still open
    fn leave<S: SessionSink>(&mut self, sink: &mut S) {
        if self.engine.is_finished() {
            return;
        }
        if let Ok(report) = self.engine.exit_early() {
            self.finish(report, sink);
        }
    }
}
