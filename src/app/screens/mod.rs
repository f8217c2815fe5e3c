//! TUI screen components
//!
//! Contains one component per [`Screen`] plus the overlays drawn on top.

pub mod feedback;
pub mod game;
pub mod home;
pub mod loading;
pub mod overlay;
pub mod stats;

pub use feedback::FeedbackScreen;
pub use game::{BananaField, GameScreen};
pub use home::HomeScreen;
pub use loading::LoadingScreen;
pub use stats::StatsScreen;

use crate::app::state::{GameState, Screen};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

/// All screen components, drawn one at a time
#[derive(Debug, Default)]
pub struct Screens {
    loading: LoadingScreen,
    home: HomeScreen,
    game: GameScreen,
    feedback: FeedbackScreen,
    stats: StatsScreen,
    frame_count: u64,
}

impl Screens {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw the active screen, then any open overlay
    pub fn render(&mut self, f: &mut Frame, state: &GameState) {
        self.frame_count = self.frame_count.wrapping_add(1);
        let frame = self.frame_count;

        match state.screen() {
            Screen::Loading => self.loading.render(f, frame),
            Screen::Home => self.home.render(f),
            Screen::Game => self.game.render(f, state, frame),
            Screen::Feedback => self.feedback.render(f, state),
            Screen::Stats => self.stats.render(f, &state.stats()),
        }

        if state.hint_visible() {
            overlay::render_hint(f);
        }
        if let Some(message) = state.notice() {
            overlay::render_notice(f, message);
        }
    }
}

/// Help line built from (key, description) pairs
pub(crate) fn key_help(keys: &[(&str, &str)]) -> Line<'static> {
    let mut spans = Vec::with_capacity(keys.len() * 2);
    for (key, description) in keys {
        spans.push(Span::styled(
            key.to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(format!(" {}  ", description)));
    }
    Line::from(spans)
}
