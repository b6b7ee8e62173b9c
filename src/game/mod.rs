//! Core game logic.
//!
//! Everything in here is free of I/O and rendering dependencies: the engine
//! is a per-tick state-transition function that consumes a direction batch
//! and a clock reading, and produces draw requests plus audio cues for the
//! shell to apply.

pub mod config;
pub mod engine;
pub mod grid;
pub mod output;
pub mod state;

// Re-export commonly used types
pub use config::{Difficulty, GameConfig};
pub use engine::GameEngine;
pub use grid::{Direction, Position, CELL};
pub use output::{AudioCue, CellClass, RenderFrame, TickResult};
pub use state::{Enemy, GameSession, Gem, Player, PowerUp, SessionEnd};
