//! Gem Chase - a terminal arcade game
//!
//! This library provides:
//! - Core game logic (game module): a pure per-tick state transition
//! - Input mapping (input module)
//! - TUI rendering of the core's draw requests (render module)
//! - Score ledger persistence (scores module)
//! - Cross-session stats (metrics module)
//! - The interactive game loop (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
pub mod scores;
