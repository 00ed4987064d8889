use log::{debug, info, warn};
use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};

use super::{
    action::Direction,
    config::SnakeConfig,
    state::{CollisionType, GameState, Phase, Position, Snake},
};
use crate::session::{ActivityKind, FeedbackCue, SessionReport, SessionResult};

/// Random draws tried before food placement falls back to enumerating free cells
const MAX_FOOD_SAMPLES: usize = 64;

/// Information about a step
#[derive(Debug, Clone, PartialEq)]
pub struct StepInfo {
    /// Whether the snake ate food this step
    pub ate_food: bool,
    /// Type of collision if one occurred
    pub collision_type: Option<CollisionType>,
}

/// Result of a game step
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Whether the session has ended
    pub terminated: bool,
    /// In-game feedback (eating food)
    pub cue: Option<FeedbackCue>,
    /// Additional information about the step
    pub info: StepInfo,
    /// Present on the tick that ends the session
    pub report: Option<SessionReport>,
}

impl StepResult {
    fn idle(terminated: bool) -> Self {
        Self {
            terminated,
            cue: None,
            info: StepInfo {
                ate_food: false,
                collision_type: None,
            },
            report: None,
        }
    }
}

/// The game engine that handles all snake logic
pub struct GameEngine<R: Rng = StdRng> {
    config: SnakeConfig,
    rng: R,
}

impl GameEngine<StdRng> {
    /// Create a new game engine with the given configuration
    pub fn new(config: SnakeConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }
}

impl<R: Rng> GameEngine<R> {
    /// Create an engine drawing food positions from `rng`
    pub fn with_rng(config: SnakeConfig, rng: R) -> Self {
        Self { config, rng }
    }

    pub fn config(&self) -> &SnakeConfig {
        &self.config
    }

    /// Reset the game to its initial state: one snake at the grid centre,
    /// initial direction, fresh food, score zero.
    pub fn reset(&mut self) -> GameState {
        let center_x = (self.config.grid_width / 2) as i32;
        let center_y = (self.config.grid_height / 2) as i32;

        let snake = Snake::new(
            Position::new(center_x, center_y),
            self.config.initial_direction,
            self.config.initial_snake_length,
        );

        let food = self.spawn_food_avoid_snake(&snake);
        let mut state = GameState::new(snake, food, self.config.grid_width, self.config.grid_height);
        if state.food.is_none() {
            state.phase = Phase::BoardFull;
        }
        state
    }

    /// Move a fresh board into the running phase. Returns false if it was not `Ready`.
    pub fn start(&self, state: &mut GameState) -> bool {
        if state.phase != Phase::Ready {
            return false;
        }
        state.phase = Phase::Running;
        info!(
            "snake session started on {}x{} grid",
            state.grid_width, state.grid_height
        );
        true
    }

    /// Buffer a direction change for the next tick.
    ///
    /// Only directions perpendicular to the current movement are kept; the most
    /// recent accepted request wins. Returns whether the request was accepted.
    pub fn request_direction(&self, state: &mut GameState, direction: Direction) -> bool {
        if state.phase.is_terminal() || state.reported {
            return false;
        }
        if direction.is_parallel(state.snake.direction) {
            return false;
        }
        state.pending_direction = direction;
        true
    }

    /// Execute one tick of the simulation
    pub fn step(&mut self, state: &mut GameState) -> StepResult {
        if !state.is_running() || state.reported {
            return StepResult::idle(state.phase.is_terminal());
        }

        let direction = state.pending_direction;
        let new_head = state.snake.head().moved_in_direction(direction);

        if let Some(collision_type) = self.check_collision(state, new_head) {
            state.phase = Phase::GameOver(collision_type);
            state.steps += 1;
            info!(
                "snake crashed ({:?}) after {} steps with score {}",
                collision_type, state.steps, state.score
            );

            return StepResult {
                terminated: true,
                cue: None,
                info: StepInfo {
                    ate_food: false,
                    collision_type: Some(collision_type),
                },
                report: self.report(state, Some(FeedbackCue::SessionFail)),
            };
        }

        let ate_food = state.food == Some(new_head);
        state.snake.advance(direction, ate_food);
        state.steps += 1;

        if !ate_food {
            return StepResult::idle(false);
        }

        state.score += 1;
        state.food = self.spawn_food_avoid_snake(&state.snake);
        debug!("food eaten, score {} next food {:?}", state.score, state.food);

        let mut result = StepResult {
            terminated: false,
            cue: Some(FeedbackCue::Correct),
            info: StepInfo {
                ate_food: true,
                collision_type: None,
            },
            report: None,
        };

        if state.food.is_none() {
            state.phase = Phase::BoardFull;
            info!("snake filled the board with score {}", state.score);
            result.terminated = true;
            result.report = self.report(state, Some(FeedbackCue::SessionSuccess));
        }

        result
    }

    /// End the session on user request, before it finished on its own.
    ///
    /// Returns `None` if the result was already reported (for example the
    /// snake crashed and the player is now leaving the game-over screen).
    pub fn end_session(&self, state: &mut GameState) -> Option<SessionReport> {
        if state.phase.is_terminal() {
            return None;
        }
        info!("snake session exited early with score {}", state.score);
        self.report(state, None)
    }

    fn report(&self, state: &mut GameState, cue: Option<FeedbackCue>) -> Option<SessionReport> {
        if state.reported {
            return None;
        }
        state.reported = true;
        Some(SessionReport {
            result: SessionResult::new(ActivityKind::Snake, state.score, 1),
            cue,
        })
    }

    /// Check if the new head position causes a collision
    fn check_collision(&self, state: &GameState, pos: Position) -> Option<CollisionType> {
        if !state.is_in_bounds(pos) {
            return Some(CollisionType::Wall);
        }

        if state.is_occupied_by_snake(pos) {
            return Some(CollisionType::SelfCollision);
        }

        None
    }

    /// Spawn food at a random empty position, or `None` if the snake covers the board
    fn spawn_food_avoid_snake(&mut self, snake: &Snake) -> Option<Position> {
        let (width, height) = (self.config.grid_width, self.config.grid_height);
        if snake.len() >= self.config.cell_count() {
            return None;
        }

        for _ in 0..MAX_FOOD_SAMPLES {
            let x = self.rng.gen_range(0..width) as i32;
            let y = self.rng.gen_range(0..height) as i32;
            let pos = Position::new(x, y);

            if !snake.occupies(pos) {
                return Some(pos);
            }
        }

        let free: Vec<Position> = (0..height as i32)
            .flat_map(|y| (0..width as i32).map(move |x| Position::new(x, y)))
            .filter(|pos| !snake.occupies(*pos))
            .collect();
        warn!(
            "food sampling missed {} times, choosing from {} free cells",
            MAX_FOOD_SAMPLES,
            free.len()
        );
        free.choose(&mut self.rng).copied()
    }
}
