use std::time::{Duration, Instant};

use rand::Rng;

use super::config::GameConfig;
use super::grid::{is_out_of_bounds, resolve_direction, spawn_position, Direction, Position, CELL};
use super::output::{AudioCue, CellClass, RenderFrame, TickResult};
use super::state::{Enemy, GameSession, Gem, Player, PowerUp, SessionEnd};

/// The game engine: owns the configuration and RNG, and drives one session
/// tick at a time. All timers are explicit deadlines compared against the
/// `now` passed into [`GameEngine::tick`], so tests never sleep.
pub struct GameEngine {
    config: GameConfig,
    power_up_duration: Duration,
    rng: rand::rngs::ThreadRng,
}

impl GameEngine {
    pub fn new(config: GameConfig) -> Self {
        let power_up_duration = Duration::from_secs_f64(config.power_up_duration);
        Self {
            config,
            power_up_duration,
            rng: rand::thread_rng(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Build a fresh session from the configuration.
    pub fn reset(&mut self) -> GameSession {
        let (width, height) = (self.config.window_width, self.config.window_height);

        let start = Position::new(width / 2 / CELL * CELL, height / 2 / CELL * CELL);
        let player = Player::new(start, Direction::Right);

        let gem = Gem {
            position: spawn_position(&mut self.rng, width, height),
            needs_respawn: false,
        };

        // Spawns do not avoid each other; overlapping entities are allowed.
        let obstacles = (0..self.config.num_obstacles)
            .map(|_| spawn_position(&mut self.rng, width, height))
            .collect();

        let enemies = (0..self.config.num_enemies)
            .map(|_| Enemy {
                position: spawn_position(&mut self.rng, width, height),
                direction: self.random_direction(),
            })
            .collect();

        GameSession {
            player,
            gem,
            power_up: PowerUp::unspawned(),
            obstacles,
            obstacles_hidden: false,
            obstacles_hidden_until: None,
            enemies,
            score: 0,
            lives: self.config.initial_lives,
            window_width: width,
            window_height: height,
            ended: None,
        }
    }

    /// Run one tick of the game.
    ///
    /// `input` is this tick's batch of directional key-downs in arrival
    /// order; the last one wins. Ticking an ended session is a no-op that
    /// returns the terminal result again.
    pub fn tick(
        &mut self,
        session: &mut GameSession,
        input: &[Direction],
        now: Instant,
    ) -> TickResult {
        if session.is_over() {
            return TickResult {
                frame: Self::render_frame(session),
                audio: Vec::new(),
                ended: session.ended,
            };
        }

        let mut audio = Vec::new();

        // Input resolution: reversals keep the current direction.
        if let Some(&requested) = input.last() {
            session.player.direction = resolve_direction(requested, session.player.direction);
        }

        // Player movement; a gem on the new head cell grows the body.
        let new_head = session.player.head().stepped(session.player.direction);
        let ate_gem = new_head == session.gem.position;
        session.player.advance(ate_gem);
        if ate_gem {
            session.score += 10;
            session.gem.needs_respawn = true;
            audio.push(AudioCue::GemCollected);
        }

        self.run_item_phase(session, now, &mut audio);
        self.advance_enemies(session);
        let ended = Self::resolve_collisions(session, &mut audio);
        session.ended = ended;

        TickResult {
            frame: Self::render_frame(session),
            audio,
            ended,
        }
    }

    /// Item respawns, power-up pickup, and timer expiry.
    fn run_item_phase(&mut self, session: &mut GameSession, now: Instant, audio: &mut Vec<AudioCue>) {
        let (width, height) = (session.window_width, session.window_height);

        if session.gem.needs_respawn {
            session.gem.position = spawn_position(&mut self.rng, width, height);
            session.gem.needs_respawn = false;
        }

        if session.power_up.needs_spawn {
            session.power_up.position = Some(spawn_position(&mut self.rng, width, height));
            session.power_up.needs_spawn = false;
        }

        if session.power_up.position == Some(session.player.head()) {
            // Both windows get the same deadline, so they lapse together.
            let until = now + self.power_up_duration;
            session.power_up.active = true;
            session.power_up.active_until = Some(until);
            session.power_up.needs_spawn = true;
            session.power_up.position = None;
            session.obstacles_hidden = true;
            session.obstacles_hidden_until = Some(until);
            audio.push(AudioCue::PowerUpCollected);
        }

        // Level-triggered expiry, evaluated independently for each flag.
        if session.power_up.active && session.power_up.active_until.is_some_and(|t| now > t) {
            session.power_up.active = false;
            session.power_up.active_until = None;
        }
        if session.obstacles_hidden && session.obstacles_hidden_until.is_some_and(|t| now > t) {
            session.obstacles_hidden = false;
            session.obstacles_hidden_until = None;
        }
    }

    /// Move every enemy one cell; leaving the window mirrors its direction
    /// for the next tick, so the position may sit out of bounds for one tick.
    fn advance_enemies(&mut self, session: &mut GameSession) {
        let (width, height) = (session.window_width, session.window_height);
        for enemy in &mut session.enemies {
            enemy.position = enemy.position.stepped(enemy.direction);
            let (dx, dy) = enemy.direction.delta();
            let out_horizontal =
                dx != 0 && (enemy.position.x < 0 || enemy.position.x > width - CELL);
            let out_vertical =
                dy != 0 && (enemy.position.y < 0 || enemy.position.y > height - CELL);
            if out_horizontal || out_vertical {
                enemy.direction = enemy.direction.opposite();
            }
        }
    }

    /// Fixed-order collision resolution: obstacles, enemies, wall, self.
    ///
    /// Every matching entity decrements one life and fires one cue; a tick
    /// with several hits loses several lives. A wall hit ends the session
    /// outright, regardless of remaining lives.
    fn resolve_collisions(session: &mut GameSession, audio: &mut Vec<AudioCue>) -> Option<SessionEnd> {
        let head = session.player.head();
        let mut ended = None;

        if !session.obstacles_hidden {
            for &obstacle in &session.obstacles {
                if obstacle == head {
                    session.lives = session.lives.saturating_sub(1);
                    audio.push(AudioCue::LifeLost);
                }
            }
        }

        for enemy in &session.enemies {
            if enemy.position == head {
                session.lives = session.lives.saturating_sub(1);
                audio.push(AudioCue::LifeLost);
            }
        }

        if is_out_of_bounds(head, session.window_width, session.window_height) {
            audio.push(AudioCue::LifeLost);
            ended = Some(SessionEnd::WallCollision);
        }

        for &segment in session.player.trailing_segments() {
            if segment == head {
                session.lives = session.lives.saturating_sub(1);
                audio.push(AudioCue::LifeLost);
            }
        }

        if ended.is_none() && session.lives == 0 {
            ended = Some(SessionEnd::LivesExhausted);
        }
        ended
    }

    /// Draw requests for the current state: body cells, gem, power-up if
    /// spawned, obstacles if visible, enemies, plus score and lives.
    pub fn render_frame(session: &GameSession) -> RenderFrame {
        let mut cells = Vec::new();
        for &segment in &session.player.body {
            cells.push((segment, CellClass::Player));
        }
        cells.push((session.gem.position, CellClass::Gem));
        if let Some(pos) = session.power_up.position {
            cells.push((pos, CellClass::PowerUp));
        }
        if !session.obstacles_hidden {
            for &obstacle in &session.obstacles {
                cells.push((obstacle, CellClass::Obstacle));
            }
        }
        for enemy in &session.enemies {
            cells.push((enemy.position, CellClass::Enemy));
        }

        RenderFrame {
            cells,
            score: session.score,
            lives: session.lives,
        }
    }

    fn random_direction(&mut self) -> Direction {
        match self.rng.gen_range(0..4) {
            0 => Direction::Up,
            1 => Direction::Down,
            2 => Direction::Left,
            _ => Direction::Right,
        }
    }
}
