use std::collections::VecDeque;

use super::action::Direction;

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }

    /// Manhattan distance to another position
    pub fn distance(&self, other: Position) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at the front
    pub body: VecDeque<Position>,
    /// Direction used by the most recent tick
    pub direction: Direction,
}

impl Snake {
    /// Create a new snake with given starting position and direction.
    /// Extra segments trail behind the head.
    pub fn new(head: Position, direction: Direction, length: usize) -> Self {
        let (dx, dy) = direction.delta();
        let body = (0..length.max(1) as i32)
            .map(|i| head.moved_by(-dx * i, -dy * i))
            .collect();

        Self { body, direction }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Check if position is occupied by any segment, head and tail included
    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Move the head one cell in `direction`, keeping the tail when growing
    pub fn advance(&mut self, direction: Direction, should_grow: bool) {
        let new_head = self.head().moved_in_direction(direction);
        self.direction = direction;
        self.body.push_front(new_head);

        if !should_grow {
            self.body.pop_back();
        }
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }
}

/// Type of collision that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake hit a wall
    Wall,
    /// Snake hit itself
    SelfCollision,
}

/// Lifecycle of a snake session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Fresh board, timer not yet armed
    Ready,
    /// Ticking
    Running,
    /// Crashed into a wall or itself
    GameOver(CollisionType),
    /// Snake covers every cell; no room left for food
    BoardFull,
}

impl Phase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::GameOver(_) | Phase::BoardFull)
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    /// Next direction, written by input and read by the tick
    pub pending_direction: Direction,
    /// `None` only once the board is full
    pub food: Option<Position>,
    pub grid_width: usize,
    pub grid_height: usize,
    pub score: u32,
    pub steps: u32,
    pub phase: Phase,
    /// Set once the session result has been handed to the host
    pub reported: bool,
}

impl GameState {
    /// Create a new game state
    pub fn new(
        snake: Snake,
        food: impl Into<Option<Position>>,
        grid_width: usize,
        grid_height: usize,
    ) -> Self {
        Self {
            pending_direction: snake.direction,
            snake,
            food: food.into(),
            grid_width,
            grid_height,
            score: 0,
            steps: 0,
            phase: Phase::Ready,
            reported: false,
        }
    }

    /// Check if a position is within the grid bounds
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0
            && pos.x < self.grid_width as i32
            && pos.y >= 0
            && pos.y < self.grid_height as i32
    }

    /// Check if a position is occupied by the snake
    pub fn is_occupied_by_snake(&self, pos: Position) -> bool {
        self.snake.occupies(pos)
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }
}
