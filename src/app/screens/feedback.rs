//! Feedback screen implementation
//!
//! Shows whether the last answer was right, the server's message and, only
//! after a wrong answer, the correct value.

use super::key_help;
use crate::app::state::GameState;
use crate::models::Verdict;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

#[derive(Debug, Default)]
pub struct FeedbackScreen;

impl FeedbackScreen {
    pub fn new() -> Self {
        Self
    }

    /// Render the feedback screen
    pub fn render(&self, f: &mut Frame, state: &GameState) {
        let Some(verdict) = state.feedback() else {
            return;
        };

        let mut constraints = vec![
            Constraint::Length(3), // Icon and title
            Constraint::Min(3),    // Message
        ];
        if !verdict.correct {
            constraints.push(Constraint::Length(3)); // Correct answer
        }
        constraints.push(Constraint::Length(3)); // Help

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(f.size());

        self.render_title(f, chunks[0], verdict);

        let message = Paragraph::new(verdict.message.clone())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(message, chunks[1]);

        if !verdict.correct {
            let answer = Paragraph::new(format!("The correct answer was: {}", verdict.correct_answer))
                .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).title("Correct answer"));
            f.render_widget(answer, chunks[2]);
        }

        let help = Paragraph::new(key_help(&[("Enter", "Continue"), ("Q", "Quit")]))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            );
        f.render_widget(help, chunks[chunks.len() - 1]);
    }

    fn render_title(&self, f: &mut Frame, area: Rect, verdict: &Verdict) {
        let (icon, title, color) = if verdict.correct {
            ("✅", "🎉 Correct! 🎉", Color::Green)
        } else {
            ("❌", "🤔 Not quite 🤔", Color::Red)
        };
        let paragraph = Paragraph::new(Line::from(format!("{}  {}", icon, title)))
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            );
        f.render_widget(paragraph, area);
    }
}
