//! Stats screen implementation
//!
//! Session summary: questions seen, correct answers, accuracy and score.

use super::key_help;
use crate::models::SessionStats;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Row, Table},
    Frame,
};

#[derive(Debug, Default)]
pub struct StatsScreen;

impl StatsScreen {
    pub fn new() -> Self {
        Self
    }

    /// Render the stats screen
    pub fn render(&self, f: &mut Frame, stats: &SessionStats) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(6),    // Stats table
                Constraint::Length(3), // Help text
            ])
            .split(f.size());

        let title = Paragraph::new("Your Stats")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            );
        f.render_widget(title, chunks[0]);

        let total = stats.total_questions.to_string();
        let correct = stats.correct_answers.to_string();
        let accuracy = format!("{}%", stats.accuracy);
        let score = stats.score.to_string();

        let rows = vec![
            Row::new(vec!["  Questions:", total.as_str()]),
            Row::new(vec!["  Correct answers:", correct.as_str()]),
            Row::new(vec!["  Accuracy:", accuracy.as_str()]),
            Row::new(vec!["  Total score:", score.as_str()])
                .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
        ];

        let table = Table::new(rows, [Constraint::Length(20), Constraint::Min(10)])
            .block(Block::default().borders(Borders::ALL).title("Session"));
        f.render_widget(table, chunks[1]);

        let help = Paragraph::new(key_help(&[("Enter", "Play again"), ("Q", "Quit")]))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            );
        f.render_widget(help, chunks[2]);
    }
}
