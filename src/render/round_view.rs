use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::{Renderer, cue_message};
use crate::rounds::{ColorSwatch, Letter, Number, RoundEngine, RoundValue};
use crate::session::{FeedbackCue, SessionReport};

/// How a value kind is drawn on the round screen
pub trait Presentable: RoundValue {
    /// Question shown above the target
    fn prompt(&self) -> String;

    /// Large rendering of the target
    fn showcase(&self) -> Line<'static>;

    /// Content of an option button
    fn option_span(&self) -> Span<'static> {
        Span::raw(self.label())
    }
}

impl Presentable for Letter {
    fn prompt(&self) -> String {
        format!("Find the letter: {}", self.0)
    }

    fn showcase(&self) -> Line<'static> {
        Line::styled(
            format!("[ {} ]", self.0),
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::BOLD),
        )
    }
}

impl Presentable for Number {
    fn prompt(&self) -> String {
        "Count the stars and choose the number!".to_string()
    }

    fn showcase(&self) -> Line<'static> {
        Line::styled(self.stars(), Style::default().fg(Color::Yellow))
    }
}

impl Presentable for ColorSwatch {
    fn prompt(&self) -> String {
        format!("What color is this? {}", self.name)
    }

    fn showcase(&self) -> Line<'static> {
        Line::styled("████████", Style::default().fg(swatch_color(self)))
    }

    fn option_span(&self) -> Span<'static> {
        Span::styled(
            format!("■ {}", self.name),
            Style::default().fg(swatch_color(self)),
        )
    }
}

fn swatch_color(swatch: &ColorSwatch) -> Color {
    swatch
        .rgb()
        .map(|(r, g, b)| Color::Rgb(r, g, b))
        .unwrap_or(Color::White)
}

impl Renderer {
    pub fn render_round<V: Presentable, R: Rng>(
        &self,
        frame: &mut Frame,
        engine: &RoundEngine<V, R>,
        banner: Option<FeedbackCue>,
        summary: Option<&SessionReport>,
    ) {
        let area = frame.area();
        let outer = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Magenta))
            .title(format!(" {} ", engine.kind()));
        let inner = outer.inner(area);
        frame.render_widget(outer, area);

        if let Some(report) = summary {
            frame.render_widget(self.render_summary(report), inner);
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Prompt and target
                Constraint::Min(6),    // Options
                Constraint::Length(2), // Feedback and round counter
                Constraint::Length(1), // Controls
            ])
            .split(inner);

        let choice = engine.choice();
        let header = Paragraph::new(vec![
            Line::styled(
                choice.target.prompt(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::from(""),
            choice.target.showcase(),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(header, chunks[0]);

        let state = engine.state();
        let options: Vec<Line> = choice
            .options
            .iter()
            .enumerate()
            .map(|(index, option)| {
                let is_target = choice.is_target(option);
                let is_selected = state
                    .selected
                    .as_ref()
                    .is_some_and(|selected| selected.key() == option.key());
                let marker_style = if !state.resolved {
                    Style::default().fg(Color::LightBlue)
                } else if is_target {
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD)
                } else if is_selected {
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::DarkGray)
                };
                let mark = match (state.resolved, is_target, is_selected) {
                    (true, true, _) => " ✔",
                    (true, false, true) => " ✘",
                    _ => "",
                };
                Line::from(vec![
                    Span::styled(format!("[{}] ", index + 1), marker_style),
                    option.option_span(),
                    Span::styled(mark, marker_style),
                ])
            })
            .collect();
        frame.render_widget(
            Paragraph::new(options).alignment(Alignment::Center),
            chunks[1],
        );

        let mut status = vec![Line::from(format!(
            "Round {} / {} | Correct: {}",
            state.round_index + 1,
            state.total_rounds,
            state.correct
        ))];
        if let Some(cue) = banner {
            status.insert(0, Line::styled(cue_message(cue), Style::default().fg(Color::Cyan)));
        }
        frame.render_widget(Paragraph::new(status).alignment(Alignment::Center), chunks[2]);

        let next_label = if state.is_last_round() {
            " finish game | "
        } else {
            " next | "
        };
        let mut controls = vec![
            Span::styled("1-4", Style::default().fg(Color::Cyan)),
            Span::raw(" choose | "),
        ];
        if state.resolved {
            controls.push(Span::styled("Enter", Style::default().fg(Color::Cyan)));
            controls.push(Span::raw(next_label));
        }
        controls.push(Span::styled("Q", Style::default().fg(Color::Red)));
        controls.push(Span::raw(" back to games"));
        frame.render_widget(
            Paragraph::new(Line::from(controls)).alignment(Alignment::Center),
            chunks[3],
        );
    }

    fn render_summary(&self, report: &SessionReport) -> Paragraph<'static> {
        let mut text = vec![
            Line::from(""),
            Line::styled(
                "All done!",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::from(""),
            Line::from(format!(
                "You got {} out of {} right.",
                report.result.score, report.result.total
            )),
        ];
        if let Some(cue) = report.cue {
            text.push(Line::from(""));
            text.push(Line::styled(cue_message(cue), Style::default().fg(Color::Cyan)));
        }
        text.push(Line::from(""));
        text.push(Line::styled(
            "Press any key to go back",
            Style::default().fg(Color::Gray),
        ));

        Paragraph::new(text).alignment(Alignment::Center)
    }
}
