use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stderr, Stderr};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tokio::time::interval;
use tracing::{debug, info};

use crate::game::{Direction, GameConfig, GameEngine, GameSession, RenderFrame};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::SessionStats;
use crate::render::{GameOverInfo, Renderer};
use crate::scores;

/// Interactive play: one tokio task multiplexing key events, game ticks at
/// the configured player speed, and a 30 fps render clock.
pub struct HumanMode {
    engine: GameEngine,
    session: GameSession,
    stats: SessionStats,
    renderer: Renderer,
    input_handler: InputHandler,
    scores_path: PathBuf,
    /// This tick's directional key-downs, in arrival order.
    input_batch: Vec<Direction>,
    latest_frame: RenderFrame,
    game_over: Option<GameOverInfo>,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig, scores_path: PathBuf) -> Self {
        let renderer = Renderer::new(config.window_width, config.window_height);
        let mut engine = GameEngine::new(config);
        let session = engine.reset();
        let latest_frame = GameEngine::render_frame(&session);

        Self {
            engine,
            session,
            stats: SessionStats::new(),
            renderer,
            input_handler: InputHandler::new(),
            scores_path,
            input_batch: Vec::new(),
            latest_frame,
            game_over: None,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        let result = self.run_game_loop(&mut terminal).await;

        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        // The configured player speed is the game's clock rate.
        let tick_period = Duration::from_secs_f64(1.0 / self.engine.config().player_speed as f64);
        let mut tick_timer = interval(tick_period);

        // Render at 30 FPS (33ms per frame)
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event)?;
                    }
                }

                // Game logic tick
                _ = tick_timer.tick() => {
                    self.update_game()?;
                }

                // Render frame
                _ = render_timer.tick() => {
                    if self.game_over.is_none() {
                        self.stats.update();
                    }
                    terminal.draw(|frame| {
                        self.renderer.render(
                            frame,
                            &self.latest_frame,
                            &self.stats,
                            self.game_over.as_ref(),
                        );
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
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

    fn handle_event(&mut self, event: Event) -> Result<()> {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return Ok(());
            }

            match self.input_handler.handle_key_event(key) {
                KeyAction::Steer(direction) => {
                    self.input_batch.push(direction);
                }
                KeyAction::Restart => {
                    self.reset_game();
                }
                KeyAction::Quit => {
                    self.should_quit = true;
                }
                KeyAction::None => {}
            }
        }

        Ok(())
    }

    fn update_game(&mut self) -> Result<()> {
        if self.session.is_over() {
            self.input_batch.clear();
            return Ok(());
        }

        let batch = std::mem::take(&mut self.input_batch);
        let result = self.engine.tick(&mut self.session, &batch, Instant::now());
        self.latest_frame = result.frame;

        // Audio playback is an external collaborator; the cues only get
        // traced here.
        for cue in &result.audio {
            debug!(?cue, "audio cue");
        }

        if let Some(end) = result.ended {
            let final_score = self.session.score;
            let player_name = scores::random_player_name();
            scores::append_score(&self.scores_path, player_name, final_score)?;
            self.stats.on_session_over(final_score);
            info!(?end, final_score, player_name, "session over");

            self.game_over = Some(GameOverInfo {
                end,
                final_score,
                player_name,
            });
        }

        Ok(())
    }

    fn reset_game(&mut self) {
        self.session = self.engine.reset();
        self.latest_frame = GameEngine::render_frame(&self.session);
        self.stats.on_session_start();
        self.input_batch.clear();
        self.game_over = None;
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
