//! Game screen implementation
//!
//! Shows the question counter, score, prompt, the bananas to count and the
//! answer options. Options are dimmed while an answer is being checked.

use super::key_help;
use crate::app::state::{GameState, Pending};
use crate::models::{Question, QuestionId};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const BANANA: &str = "🍌 ";
const BANANA_GAP: &str = "   ";
/// Frames per full bob of one banana
const BOB_PERIOD: u64 = 8;
/// Bananas drawn individually; larger counts are shown as a number
const MAX_DRAWN: usize = 120;

/// Bananas for the current question, each with its own bob phase
#[derive(Debug, Default)]
pub struct BananaField {
    question_id: Option<QuestionId>,
    count: u32,
    phases: Vec<u64>,
}

impl BananaField {
    /// Regenerate phases when the question changes
    pub fn sync(&mut self, question: &Question) {
        if self.question_id.as_ref() == Some(&question.id) && self.count == question.correct_count {
            return;
        }
        let drawn = (question.correct_count as usize).min(MAX_DRAWN);
        let mut rng = SmallRng::from_entropy();
        self.phases = (0..drawn).map(|_| rng.gen_range(0..BOB_PERIOD)).collect();
        self.count = question.correct_count;
        self.question_id = Some(question.id.clone());
    }

    /// Number of bananas in the question
    pub fn len(&self) -> usize {
        self.count as usize
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Whether banana `index` is raised on `frame`
    pub fn is_raised(&self, index: usize, frame: u64) -> bool {
        self.phases
            .get(index)
            .map_or(false, |phase| (frame + phase) % BOB_PERIOD < BOB_PERIOD / 2)
    }

    /// Whether every banana gets its own glyph in a `width` x `height` area
    pub fn fits(&self, width: u16, height: u16) -> bool {
        let per_row = (width as usize / BANANA_GAP.len()).max(1);
        let rows = self.len().div_ceil(per_row);
        self.len() <= self.phases.len() && rows * 2 <= height as usize
    }

    /// Two text lines per row of bananas, raised ones on the upper line.
    /// Falls back to a single counted line when the bananas do not fit.
    pub fn lines(&self, width: u16, height: u16, frame: u64) -> Vec<Line<'static>> {
        if !self.fits(width, height) {
            return vec![Line::from(format!("{}× {}", BANANA, self.count))];
        }

        let per_row = (width as usize / BANANA_GAP.len()).max(1);
        let mut lines = Vec::new();
        for row_start in (0..self.phases.len()).step_by(per_row) {
            let row_end = (row_start + per_row).min(self.phases.len());
            let mut upper = Vec::with_capacity(row_end - row_start);
            let mut lower = Vec::with_capacity(row_end - row_start);
            for index in row_start..row_end {
                if self.is_raised(index, frame) {
                    upper.push(Span::raw(BANANA));
                    lower.push(Span::raw(BANANA_GAP));
                } else {
                    upper.push(Span::raw(BANANA_GAP));
                    lower.push(Span::raw(BANANA));
                }
            }
            lines.push(Line::from(upper));
            lines.push(Line::from(lower));
        }
        lines
    }
}

/// Game screen component
#[derive(Debug, Default)]
pub struct GameScreen {
    bananas: BananaField,
}

impl GameScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the game screen
    pub fn render(&mut self, f: &mut Frame, state: &GameState, frame: u64) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Counter and score
                Constraint::Length(3), // Prompt
                Constraint::Min(4),    // Bananas
                Constraint::Length(3), // Options
                Constraint::Length(3), // Status and help
            ])
            .split(f.size());

        self.render_header(f, chunks[0], state);

        match state.question() {
            Some(question) => {
                self.bananas.sync(question);
                let prompt = Paragraph::new(question.prompt.clone())
                    .style(Style::default().add_modifier(Modifier::BOLD))
                    .alignment(Alignment::Center)
                    .wrap(Wrap { trim: true })
                    .block(Block::default().borders(Borders::ALL));
                f.render_widget(prompt, chunks[1]);
                self.render_bananas(f, chunks[2], frame);
                self.render_options(f, chunks[3], state, question);
            }
            None => {
                let waiting = Paragraph::new("Waiting for a question...")
                    .alignment(Alignment::Center)
                    .block(Block::default().borders(Borders::ALL));
                f.render_widget(waiting, chunks[1]);
            }
        }

        self.render_status(f, chunks[4], state);
    }

    fn render_header(&self, f: &mut Frame, area: Rect, state: &GameState) {
        let session = state.session();
        let header = Line::from(vec![
            Span::styled(
                format!("Question {}", session.question_number),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled(
                format!("Score: {}", session.score),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        let paragraph = Paragraph::new(header).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Banana Count")
                .border_style(Style::default().fg(Color::Yellow)),
        );
        f.render_widget(paragraph, area);
    }

    fn render_bananas(&self, f: &mut Frame, area: Rect, frame: u64) {
        let inner = Block::default().borders(Borders::ALL).inner(area);
        let bananas = Paragraph::new(self.bananas.lines(inner.width, inner.height, frame))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(bananas, area);
    }

    fn render_options(&self, f: &mut Frame, area: Rect, state: &GameState, question: &Question) {
        let locked = state.answer_locked();
        let mut spans = Vec::with_capacity(question.options.len() * 2);
        for (index, value) in question.options.iter().enumerate() {
            let style = if locked {
                Style::default().fg(Color::DarkGray)
            } else if index == state.selected() {
                Style::default()
                    .bg(Color::Yellow)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            spans.push(Span::styled(format!(" {}: {} ", index + 1, value), style));
            spans.push(Span::raw("  "));
        }

        let options = Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Your answer"));
        f.render_widget(options, area);
    }

    fn render_status(&self, f: &mut Frame, area: Rect, state: &GameState) {
        let line = match state.pending() {
            Some(Pending::Question) => Line::from("Loading question..."),
            Some(Pending::Answer) => Line::from("Checking your answer..."),
            None if state.can_retry_fetch() => {
                key_help(&[("R", "Try again"), ("Q", "Quit")])
            }
            None => key_help(&[
                ("←→", "Choose"),
                ("Enter", "Answer"),
                ("1-9", "Pick"),
                ("?", "Hint"),
                ("Q", "Quit"),
            ]),
        };

        let status = Paragraph::new(line).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        );
        f.render_widget(status, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: u64, count: u32) -> Question {
        Question {
            id: QuestionId::from(id),
            prompt: "?".into(),
            correct_count: count,
            options: vec![count],
        }
    }

    #[test]
    fn test_field_has_one_banana_per_count() {
        let mut field = BananaField::default();
        assert!(field.is_empty());
        field.sync(&question(1, 7));
        assert_eq!(field.len(), 7);
    }

    #[test]
    fn test_field_keeps_phases_for_same_question() {
        let mut field = BananaField::default();
        field.sync(&question(1, 6));
        let phases = field.phases.clone();
        field.sync(&question(1, 6));
        assert_eq!(field.phases, phases);
        field.sync(&question(2, 3));
        assert_eq!(field.len(), 3);
    }

    #[test]
    fn test_each_banana_appears_once_per_row_pair() {
        let mut field = BananaField::default();
        field.sync(&question(1, 10));
        for frame in 0..BOB_PERIOD {
            let lines = field.lines(12, 6, frame);
            // 4 per row at width 12: rows of 4, 4, 2
            assert_eq!(lines.len(), 6);
            let count: usize = lines
                .iter()
                .flat_map(|line| line.spans.iter())
                .filter(|span| span.content == BANANA)
                .count();
            assert_eq!(count, 10);
        }
    }

    #[test]
    fn test_bob_alternates() {
        let field = BananaField {
            question_id: None,
            count: 1,
            phases: vec![0],
        };
        assert!(field.is_raised(0, 0));
        assert!(!field.is_raised(0, BOB_PERIOD / 2));
        assert!(field.is_raised(0, BOB_PERIOD));
        assert!(!field.is_raised(1, 0));
    }

    fn text(line: &Line) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn test_huge_count_is_capped() {
        let mut field = BananaField::default();
        field.sync(&question(1, u32::MAX));
        assert_eq!(field.len(), u32::MAX as usize);
        assert_eq!(field.phases.len(), MAX_DRAWN);

        let lines = field.lines(78, 10, 0);
        assert_eq!(lines.len(), 1);
        assert_eq!(text(&lines[0]), format!("{}× {}", BANANA, u32::MAX));
    }

    #[test]
    fn test_small_area_shows_count_instead_of_clipping() {
        let mut field = BananaField::default();
        field.sync(&question(1, 10));
        // Width 12 holds 4 per row; 10 bananas need 3 row pairs
        assert!(field.fits(12, 6));
        assert!(!field.fits(12, 4));

        let lines = field.lines(12, 4, 0);
        assert_eq!(lines.len(), 1);
        assert!(text(&lines[0]).contains("× 10"));
    }

    #[test]
    fn test_count_change_resyncs_same_id() {
        let mut field = BananaField::default();
        field.sync(&question(1, 4));
        field.sync(&question(1, 2));
        assert_eq!(field.len(), 2);
        assert_eq!(field.phases.len(), 2);
    }
}
