use super::grid::Position;
use super::state::SessionEnd;

/// Color class for one grid cell; the renderer decides the pixel mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellClass {
    Player,
    Gem,
    PowerUp,
    Obstacle,
    Enemy,
}

/// Everything the renderer needs to draw one tick's worth of game state.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub cells: Vec<(Position, CellClass)>,
    pub score: u32,
    pub lives: u32,
}

/// Named sound events; the shell (or an external audio collaborator)
/// decides playback, and failures never roll back game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCue {
    GemCollected,
    PowerUpCollected,
    LifeLost,
}

/// Result of one tick of the game.
#[derive(Debug, Clone, PartialEq)]
pub struct TickResult {
    pub frame: RenderFrame,
    pub audio: Vec<AudioCue>,
    pub ended: Option<SessionEnd>,
}
