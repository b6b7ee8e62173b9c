use std::time::Instant;

use super::grid::{Direction, Position};

/// The player: an ordered body with the head at index 0.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub body: Vec<Position>,
    pub direction: Direction,
}

impl Player {
    pub fn new(start: Position, direction: Direction) -> Self {
        Self {
            body: vec![start],
            direction,
        }
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Body segments excluding the head.
    pub fn trailing_segments(&self) -> &[Position] {
        &self.body[1..]
    }

    /// Advance one cell in the current direction; the body grows when a gem
    /// was consumed this tick, otherwise the tail is dropped.
    pub fn advance(&mut self, grew: bool) {
        let new_head = self.head().stepped(self.direction);
        self.body.insert(0, new_head);
        if !grew {
            self.body.pop();
        }
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// A patrolling enemy that bounces off the window edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Enemy {
    pub position: Position,
    pub direction: Direction,
}

/// The gem; always present on the board, reassigned once consumed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gem {
    pub position: Position,
    pub needs_respawn: bool,
}

/// The power-up item plus its effect timer.
///
/// `position` is `None` between consumption and the next item phase;
/// `needs_spawn` asks the engine to place it (set at session start too).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerUp {
    pub position: Option<Position>,
    pub needs_spawn: bool,
    pub active: bool,
    pub active_until: Option<Instant>,
}

impl PowerUp {
    pub fn unspawned() -> Self {
        Self {
            position: None,
            needs_spawn: true,
            active: false,
            active_until: None,
        }
    }
}

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The player head left the window; fatal regardless of remaining lives.
    WallCollision,
    /// Lives reached zero.
    LivesExhausted,
}

/// All mutable state for one playthrough, owned and mutated only by the
/// engine's tick function.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSession {
    pub player: Player,
    pub gem: Gem,
    pub power_up: PowerUp,
    pub obstacles: Vec<Position>,
    pub obstacles_hidden: bool,
    pub obstacles_hidden_until: Option<Instant>,
    pub enemies: Vec<Enemy>,
    pub score: u32,
    pub lives: u32,
    pub window_width: i32,
    pub window_height: i32,
    pub ended: Option<SessionEnd>,
}

impl GameSession {
    pub fn is_over(&self) -> bool {
        self.ended.is_some()
    }
}
