//! Application state management
//!
//! Owns the game state and the screen flow. Transitions are synchronous and
//! never perform I/O: player actions go through [`GameState::dispatch`],
//! which may hand back an [`Effect`] for the runtime to execute. The result
//! of that effect returns through [`GameState::complete`].

use crate::config::QuizConfig;
use crate::models::{AnswerSubmission, Question, SessionState, SessionStats, Verdict};
use crate::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;

/// Application screens; exactly one is active at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Splash shown while the app starts
    Loading,
    /// Welcome screen with the start button
    Home,
    /// Bananas, prompt and answer options
    Game,
    /// Result of the last answer
    Feedback,
    /// Session summary every few questions
    Stats,
}

impl Screen {
    pub const ALL: [Screen; 5] = [
        Screen::Loading,
        Screen::Home,
        Screen::Game,
        Screen::Feedback,
        Screen::Stats,
    ];
}

impl Default for Screen {
    fn default() -> Self {
        Self::Loading
    }
}

/// Discrete player actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Leave the home screen and begin playing
    Start,
    /// Move the option cursor left
    SelectPrevious,
    /// Move the option cursor right
    SelectNext,
    /// Answer with the option at this display position
    Answer(usize),
    /// Answer with the option under the cursor
    SubmitSelected,
    ShowHint,
    CloseHint,
    /// Fetch again after a failed question request
    RetryFetch,
    /// Leave the feedback screen
    Continue,
    /// Leave the stats screen for another round
    PlayAgain,
    /// Close the blocking notice
    DismissNotice,
    Quit,
}

/// Action identifiers used as dispatch table keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Start,
    SelectPrevious,
    SelectNext,
    Answer,
    SubmitSelected,
    ShowHint,
    CloseHint,
    RetryFetch,
    Continue,
    PlayAgain,
    DismissNotice,
    Quit,
}

impl Action {
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::Start => ActionKind::Start,
            Action::SelectPrevious => ActionKind::SelectPrevious,
            Action::SelectNext => ActionKind::SelectNext,
            Action::Answer(_) => ActionKind::Answer,
            Action::SubmitSelected => ActionKind::SubmitSelected,
            Action::ShowHint => ActionKind::ShowHint,
            Action::CloseHint => ActionKind::CloseHint,
            Action::RetryFetch => ActionKind::RetryFetch,
            Action::Continue => ActionKind::Continue,
            Action::PlayAgain => ActionKind::PlayAgain,
            Action::DismissNotice => ActionKind::DismissNotice,
            Action::Quit => ActionKind::Quit,
        }
    }
}

/// I/O requested by a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Sleep, then report [`Completion::LoadingElapsed`]
    Wait(Duration),
    /// Request a new question from the service
    FetchQuestion,
    /// Ask the service to check an answer
    VerifyAnswer(AnswerSubmission),
}

/// Result of an [`Effect`], fed back into the state machine
#[derive(Debug)]
pub enum Completion {
    LoadingElapsed,
    QuestionFetched(Result<Question>),
    AnswerVerified(Result<Verdict>),
}

/// Request currently in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pending {
    Question,
    Answer,
}

/// Scoring and pacing rules for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    pub points_per_correct: u32,
    pub stats_interval: u32,
    pub loading_delay: Duration,
}

impl Default for Rules {
    fn default() -> Self {
        Rules::from(&QuizConfig::default())
    }
}

impl From<&QuizConfig> for Rules {
    fn from(config: &QuizConfig) -> Self {
        Self {
            points_per_correct: config.points_per_correct,
            stats_interval: config.stats_interval,
            loading_delay: config.loading_delay,
        }
    }
}

type Handler = fn(&mut GameState, &Action) -> Option<Effect>;

/// Which handler runs for an action on a given screen.
/// Pairs missing from the table are ignored.
const DISPATCH: &[(Screen, ActionKind, Handler)] = &[
    (Screen::Home, ActionKind::Start, GameState::on_start),
    (Screen::Game, ActionKind::SelectPrevious, GameState::on_select_previous),
    (Screen::Game, ActionKind::SelectNext, GameState::on_select_next),
    (Screen::Game, ActionKind::Answer, GameState::on_answer),
    (Screen::Game, ActionKind::SubmitSelected, GameState::on_submit_selected),
    (Screen::Game, ActionKind::ShowHint, GameState::on_show_hint),
    (Screen::Game, ActionKind::CloseHint, GameState::on_close_hint),
    (Screen::Game, ActionKind::RetryFetch, GameState::on_retry_fetch),
    (Screen::Feedback, ActionKind::Continue, GameState::on_continue),
    (Screen::Stats, ActionKind::PlayAgain, GameState::on_play_again),
];

fn handler_for(screen: Screen, kind: ActionKind) -> Option<Handler> {
    DISPATCH
        .iter()
        .find(|(s, k, _)| *s == screen && *k == kind)
        .map(|(_, _, handler)| *handler)
}

/// Complete game state for one session
#[derive(Debug, Clone)]
pub struct GameState {
    screen: Screen,
    session: SessionState,
    question: Option<Question>,
    selected: usize,
    answer_locked: bool,
    pending: Option<Pending>,
    feedback: Option<Verdict>,
    hint_visible: bool,
    notice: Option<String>,
    should_quit: bool,
    rules: Rules,
}

impl GameState {
    /// Create a new state on the loading screen
    pub fn new(rules: Rules) -> Self {
        Self {
            screen: Screen::Loading,
            session: SessionState::new(),
            question: None,
            selected: 0,
            answer_locked: false,
            pending: None,
            feedback: None,
            hint_visible: false,
            notice: None,
            should_quit: false,
            rules,
        }
    }

    /// Effect that ends the loading splash
    pub fn boot(&self) -> Effect {
        Effect::Wait(self.rules.loading_delay)
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn stats(&self) -> SessionStats {
        self.session.stats()
    }

    pub fn question(&self) -> Option<&Question> {
        self.question.as_ref()
    }

    /// Option index under the cursor
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Whether the answer options refuse input
    pub fn answer_locked(&self) -> bool {
        self.answer_locked || self.question.is_none()
    }

    pub fn pending(&self) -> Option<Pending> {
        self.pending
    }

    pub fn feedback(&self) -> Option<&Verdict> {
        self.feedback.as_ref()
    }

    pub fn hint_visible(&self) -> bool {
        self.hint_visible
    }

    /// Message of the blocking notice, if one is open
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Whether a manual retry of the question fetch is offered
    pub fn can_retry_fetch(&self) -> bool {
        self.screen == Screen::Game
            && self.pending.is_none()
            && (self.question.is_none() || self.answer_locked)
    }

    /// Apply a player action, returning any I/O it requires
    pub fn dispatch(&mut self, action: Action) -> Option<Effect> {
        match action {
            Action::Quit => {
                self.should_quit = true;
                return None;
            }
            Action::DismissNotice => {
                self.notice = None;
                return None;
            }
            _ => {}
        }

        // The notice blocks everything else until dismissed
        if self.notice.is_some() {
            return None;
        }
        if self.hint_visible && action != Action::CloseHint {
            return None;
        }

        match handler_for(self.screen, action.kind()) {
            Some(handler) => handler(self, &action),
            None => {
                tracing::trace!(screen = ?self.screen, ?action, "action ignored");
                None
            }
        }
    }

    /// Feed back the outcome of an effect
    pub fn complete(&mut self, completion: Completion) {
        match completion {
            Completion::LoadingElapsed => {
                if self.screen == Screen::Loading {
                    self.show(Screen::Home);
                }
            }
            Completion::QuestionFetched(Ok(question)) => {
                self.pending = None;
                self.session.record_question_shown();
                tracing::info!(
                    number = self.session.question_number,
                    id = %question.id,
                    "question displayed"
                );
                self.question = Some(question);
                self.selected = 0;
                self.answer_locked = false;
            }
            Completion::QuestionFetched(Err(err)) => {
                self.pending = None;
                tracing::warn!(error = %err, "question fetch failed");
                self.notice = Some(err.user_message());
            }
            Completion::AnswerVerified(Ok(verdict)) => {
                self.pending = None;
                if verdict.correct {
                    self.session.record_correct(self.rules.points_per_correct);
                }
                tracing::info!(
                    correct = verdict.correct,
                    score = self.session.score,
                    "answer checked"
                );
                self.feedback = Some(verdict);
                self.hint_visible = false;
                self.show(Screen::Feedback);
            }
            Completion::AnswerVerified(Err(err)) => {
                self.pending = None;
                self.answer_locked = false;
                tracing::warn!(error = %err, "answer verification failed");
                self.notice = Some(err.user_message());
            }
        }
    }

    fn show(&mut self, screen: Screen) {
        if screen != self.screen {
            tracing::debug!(from = ?self.screen, to = ?screen, "screen transition");
            self.screen = screen;
        }
    }

    fn request_question(&mut self) -> Option<Effect> {
        if self.pending.is_some() {
            return None;
        }
        self.pending = Some(Pending::Question);
        Some(Effect::FetchQuestion)
    }

    fn submit_option(&mut self, index: usize) -> Option<Effect> {
        if self.answer_locked || self.pending.is_some() {
            return None;
        }
        let question = self.question.as_ref()?;
        let value = question.option(index)?;
        let submission = question.submission(value);

        self.selected = index;
        self.answer_locked = true;
        self.pending = Some(Pending::Answer);
        Some(Effect::VerifyAnswer(submission))
    }

    fn on_start(&mut self, _: &Action) -> Option<Effect> {
        self.show(Screen::Game);
        self.request_question()
    }

    fn on_select_previous(&mut self, _: &Action) -> Option<Effect> {
        let count = self.option_count();
        if self.answer_locked() || count == 0 {
            return None;
        }
        self.selected = if self.selected > 0 {
            self.selected - 1
        } else {
            count - 1
        };
        None
    }

    fn on_select_next(&mut self, _: &Action) -> Option<Effect> {
        let count = self.option_count();
        if self.answer_locked() || count == 0 {
            return None;
        }
        self.selected = (self.selected + 1) % count;
        None
    }

    fn on_answer(&mut self, action: &Action) -> Option<Effect> {
        match action {
            Action::Answer(index) => self.submit_option(*index),
            _ => None,
        }
    }

    fn on_submit_selected(&mut self, _: &Action) -> Option<Effect> {
        self.submit_option(self.selected)
    }

    fn on_show_hint(&mut self, _: &Action) -> Option<Effect> {
        self.hint_visible = true;
        None
    }

    fn on_close_hint(&mut self, _: &Action) -> Option<Effect> {
        self.hint_visible = false;
        None
    }

    fn on_retry_fetch(&mut self, _: &Action) -> Option<Effect> {
        if !self.can_retry_fetch() {
            return None;
        }
        self.request_question()
    }

    fn on_continue(&mut self, _: &Action) -> Option<Effect> {
        if self.session.at_checkpoint(self.rules.stats_interval) {
            self.show(Screen::Stats);
            None
        } else {
            self.show(Screen::Game);
            self.request_question()
        }
    }

    fn on_play_again(&mut self, _: &Action) -> Option<Effect> {
        self.show(Screen::Game);
        self.request_question()
    }

    fn option_count(&self) -> usize {
        self.question.as_ref().map_or(0, |q| q.options.len())
    }

    /// Convert a keyboard event to an action for the current screen
    pub fn key_to_action(&self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => return Some(Action::Quit),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Some(Action::Quit)
            }
            _ => {}
        }

        if self.notice.is_some() {
            return match key.code {
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => Some(Action::DismissNotice),
                _ => None,
            };
        }

        if self.hint_visible {
            return match key.code {
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char('?') => Some(Action::CloseHint),
                _ => None,
            };
        }

        match (self.screen, key.code) {
            (Screen::Home, KeyCode::Enter | KeyCode::Char(' ')) => Some(Action::Start),

            (Screen::Game, KeyCode::Left | KeyCode::Up | KeyCode::Char('h') | KeyCode::Char('k')) => {
                Some(Action::SelectPrevious)
            }
            (Screen::Game, KeyCode::Right | KeyCode::Down | KeyCode::Char('l') | KeyCode::Char('j')) => {
                Some(Action::SelectNext)
            }
            (Screen::Game, KeyCode::Enter | KeyCode::Char(' ')) => Some(Action::SubmitSelected),
            (Screen::Game, KeyCode::Char(c @ '1'..='9')) => {
                c.to_digit(10).map(|d| Action::Answer(d as usize - 1))
            }
            (Screen::Game, KeyCode::Char('?')) => Some(Action::ShowHint),
            (Screen::Game, KeyCode::Char('r') | KeyCode::Char('R')) => Some(Action::RetryFetch),

            (Screen::Feedback, KeyCode::Enter | KeyCode::Char(' ')) => Some(Action::Continue),

            (Screen::Stats, KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('p')) => {
                Some(Action::PlayAgain)
            }

            _ => None,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Rules::default())
    }
}
