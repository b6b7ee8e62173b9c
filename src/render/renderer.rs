use std::collections::HashMap;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::game::{CellClass, Position, RenderFrame, SessionEnd, CELL};
use crate::metrics::SessionStats;

/// What the game-over panel shows once a session ends.
pub struct GameOverInfo {
    pub end: SessionEnd,
    pub final_score: u32,
    pub player_name: &'static str,
}

/// Draws the core's render directives onto the terminal, one glyph per
/// 10x10 game cell.
pub struct Renderer {
    grid_cols: i32,
    grid_rows: i32,
}

impl Renderer {
    pub fn new(window_width: i32, window_height: i32) -> Self {
        Self {
            grid_cols: window_width / CELL,
            grid_rows: window_height / CELL,
        }
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        directives: &RenderFrame,
        stats: &SessionStats,
        game_over: Option<&GameOverInfo>,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let stats_line = self.render_stats(chunks[0], directives, stats);
        frame.render_widget(stats_line, chunks[0]);

        // Center the game grid horizontally
        let game_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        if let Some(info) = game_over {
            let panel = self.render_game_over(game_area, info);
            frame.render_widget(panel, game_area);
        } else {
            let grid = self.render_grid(game_area, directives);
            frame.render_widget(grid, game_area);
        }

        let controls = self.render_controls(chunks[2]);
        frame.render_widget(controls, chunks[2]);
    }

    fn render_grid(&self, _area: Rect, directives: &RenderFrame) -> Paragraph<'_> {
        // Later directives draw over earlier ones, same as the draw order.
        let mut occupied: HashMap<Position, CellClass> = HashMap::new();
        for &(pos, class) in &directives.cells {
            occupied.insert(pos, class);
        }

        let mut lines = Vec::new();
        for row in 0..self.grid_rows {
            let mut spans = Vec::new();
            for col in 0..self.grid_cols {
                let pos = Position::new(col * CELL, row * CELL);
                let cell = match occupied.get(&pos) {
                    Some(CellClass::Player) => Span::styled(
                        "■ ",
                        Style::default()
                            .fg(Color::Green)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Some(CellClass::Gem) => Span::styled(
                        "◆ ",
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Some(CellClass::PowerUp) => Span::styled(
                        "★ ",
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Some(CellClass::Obstacle) => {
                        Span::styled("▒ ", Style::default().fg(Color::Red))
                    }
                    Some(CellClass::Enemy) => Span::styled(
                        "● ",
                        Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
                    ),
                    None => Span::styled(". ", Style::default().fg(Color::DarkGray)),
                };
                spans.push(cell);
            }
            lines.push(Line::from(spans));
        }

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Gem Chase "),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(
        &self,
        _area: Rect,
        directives: &RenderFrame,
        stats: &SessionStats,
    ) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                directives.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Lives: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                directives.lives.to_string(),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("High: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                stats.high_score.to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(stats.format_time(), Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_game_over(&self, _area: Rect, info: &GameOverInfo) -> Paragraph<'_> {
        let reason = match info.end {
            SessionEnd::WallCollision => "You hit the wall!",
            SessionEnd::LivesExhausted => "Out of lives!",
        };

        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![Span::styled(
                reason,
                Style::default().fg(Color::Gray),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    info.final_score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::styled("Saved for: ", Style::default().fg(Color::Yellow)),
                Span::styled(info.player_name, Style::default().fg(Color::White)),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "R",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to restart or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self, _area: Rect) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" to restart | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}
