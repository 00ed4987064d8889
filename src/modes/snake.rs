use anyhow::{Context, Result};
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use log::debug;
use std::time::Duration;
use tokio::time::interval;

use super::terminal::{Tui, cleanup_terminal, setup_terminal};
use super::ticker::TickTimer;
use crate::game::{GameEngine, GameState, SnakeConfig};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::SessionMetrics;
use crate::render::Renderer;
use crate::session::{FeedbackCue, SessionReport, SessionSink};

pub struct SnakeMode {
    engine: GameEngine,
    state: GameState,
    metrics: SessionMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    ticker: TickTimer,
    banner: Option<FeedbackCue>,
    should_quit: bool,
}

impl SnakeMode {
    pub fn new(config: SnakeConfig) -> Result<Self> {
        config.validate().context("Failed to start snake game")?;
        let mut engine = GameEngine::new(config);
        let state = engine.reset();

        Ok(Self {
            engine,
            state,
            metrics: SessionMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            ticker: TickTimer::disarmed(),
            banner: None,
            should_quit: false,
        })
    }

    pub async fn run<S: SessionSink>(&mut self, sink: &mut S) -> Result<()> {
        let mut terminal = setup_terminal()?;

        let result = self.run_game_loop(&mut terminal, sink).await;

        // The timer must not outlive the session, whatever ended it
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

        // Render at 30 FPS (33ms per frame)
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        self.start_session();

        loop {
            tokio::select! {
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event, sink);
                    }
                }

                _ = self.ticker.tick() => {
                    self.update_game(sink);
                }

                _ = render_timer.tick() => {
                    self.metrics.update();
                    terminal.draw(|frame| {
                        self.renderer.render_snake(frame, &self.state, &self.metrics, self.banner);
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

    fn handle_event<S: SessionSink>(&mut self, event: Event, sink: &mut S) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            match self.input_handler.handle_key_event(key) {
                KeyAction::Steer(direction) => {
                    if !self.engine.request_direction(&mut self.state, direction) {
                        debug!("ignored steer {:?}", direction);
                    }
                }
                KeyAction::Restart => {
                    self.reset_game(sink);
                }
                KeyAction::Back | KeyAction::Quit => {
                    self.leave(sink);
                    self.should_quit = true;
                }
                KeyAction::Choose(_) | KeyAction::Next | KeyAction::None => {}
            }
        }
    }

    fn start_session(&mut self) {
        if self.engine.start(&mut self.state) {
            self.ticker.arm(self.engine.config().tick_interval());
            self.metrics.on_session_start();
        }
    }

    fn update_game<S: SessionSink>(&mut self, sink: &mut S) {
        let result = self.engine.step(&mut self.state);

        if let Some(cue) = result.cue {
            self.banner = Some(cue);
        }
        if let Some(report) = result.report {
            self.finish(report, sink);
        }
    }

    fn finish<S: SessionSink>(&mut self, report: SessionReport, sink: &mut S) {
        self.ticker.disarm();
        if report.cue.is_some() {
            self.banner = report.cue;
        }
        self.metrics.on_session_complete(&report.result);
        sink.on_session_complete(report.result);
    }

    /// Stop the timer and report the running session, if any
    fn leave<S: SessionSink>(&mut self, sink: &mut S) {
        self.ticker.disarm();
        if let Some(report) = self.engine.end_session(&mut self.state) {
            self.finish(report, sink);
        }
    }

    fn reset_game<S: SessionSink>(&mut self, sink: &mut S) {
        // An unfinished session still counts before the board is replaced
        self.leave(sink);
        self.state = self.engine.reset();
        self.banner = None;
        self.start_session();
    }
}
