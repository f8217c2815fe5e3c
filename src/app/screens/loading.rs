//! Loading splash shown while the app starts

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const SPINNER: [&str; 4] = ["◐", "◓", "◑", "◒"];

#[derive(Debug, Default)]
pub struct LoadingScreen;

impl LoadingScreen {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, f: &mut Frame, frame: u64) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(40),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(f.size());

        let spinner = SPINNER[(frame as usize / 2) % SPINNER.len()];
        let text = vec![
            Line::from(Span::styled(
                "🍌 Banana Count 🍌",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(format!("{} Loading...", spinner)),
        ];
        f.render_widget(Paragraph::new(text).alignment(Alignment::Center), chunks[1]);
    }
}
