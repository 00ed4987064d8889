use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::cue_message;
use crate::game::{CollisionType, GameState, Phase, Position};
use crate::metrics::SessionMetrics;
use crate::session::FeedbackCue;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render_snake(
        &self,
        frame: &mut Frame,
        state: &GameState,
        metrics: &SessionMetrics,
        banner: Option<FeedbackCue>,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        // Header: score, records and the latest cue
        let stats = self.render_stats(chunks[0], state, metrics, banner);
        frame.render_widget(stats, chunks[0]);

        // Center the game grid horizontally
        let game_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        // Grid while playing, result screen once the session is over
        if state.phase.is_terminal() {
            let game_over = self.render_game_over(game_area, state);
            frame.render_widget(game_over, game_area);
        } else {
            let grid = self.render_grid(game_area, state);
            frame.render_widget(grid, game_area);
        }

        // Footer with controls
        let controls = self.render_controls(chunks[2]);
        frame.render_widget(controls, chunks[2]);
    }

    fn render_grid(&self, _area: Rect, state: &GameState) -> Paragraph<'_> {
        let mut lines = Vec::new();

        for y in 0..state.grid_height {
            let mut spans = Vec::new();

            for x in 0..state.grid_width {
                let pos = Position::new(x as i32, y as i32);

                let cell = if pos == state.snake.head() {
                    // Snake head - distinct color
                    Span::styled(
                        "■ ",
                        Style::default()
                            .fg(Color::LightGreen)
                            .add_modifier(Modifier::BOLD),
                    )
                } else if state.snake.occupies(pos) {
                    // Snake body
                    Span::styled("□ ", Style::default().fg(Color::Green))
                } else if state.food == Some(pos) {
                    // Food
                    Span::styled(
                        "● ",
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    )
                } else {
                    // Empty cell
                    Span::styled(". ", Style::default().fg(Color::DarkGray))
                };

                spans.push(cell);
            }

            lines.push(Line::from(spans));
        }

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::Magenta))
                    .title(" Snake Game! "),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(
        &self,
        _area: Rect,
        state: &GameState,
        metrics: &SessionMetrics,
        banner: Option<FeedbackCue>,
    ) -> Paragraph<'_> {
        let mut spans = vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                state.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Best: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                metrics.best_snake_score.to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Games: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                metrics.sessions_played.to_string(),
                Style::default().fg(Color::White),
            ),
        ];
        if let Some(cue) = banner {
            spans.push(Span::raw("    "));
            spans.push(Span::styled(cue_message(cue), Style::default().fg(Color::Cyan)));
        }

        Paragraph::new(vec![Line::from(spans)]).alignment(Alignment::Center)
    }

    fn render_game_over(&self, _area: Rect, state: &GameState) -> Paragraph<'_> {
        let (title, color) = match state.phase {
            Phase::BoardFull => ("BOARD FULL - YOU WIN!", Color::Green),
            Phase::GameOver(CollisionType::Wall) => ("GAME OVER - bumped the wall", Color::Red),
            _ => ("GAME OVER - bumped into yourself", Color::Red),
        };

        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                title,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Your final score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    state.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
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
                Span::styled(" to play again or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to go back", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        )
    }

    fn render_controls(&self, _area: Rect) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" back to games"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
