//! Main application controller
//!
//! Owns the game state, runs the draw/input loop and executes effects on
//! the tokio runtime. Completions come back over a channel and are applied
//! on the loop, so the state only ever has one writer.

use crate::{
    app::{
        effects,
        render::Renderer,
        state::{Completion, Effect, GameState, Rules},
        tui::Tui,
    },
    config::QuizConfig,
    service::{HttpQuestionService, QuestionService},
    Result,
};
use std::sync::Arc;
use tokio::sync::mpsc;

/// TUI application controller
pub struct App {
    /// Terminal UI handler
    tui: Tui,
    /// Game state and screen flow
    state: GameState,
    /// Question Service client
    service: Arc<dyn QuestionService>,
    completion_tx: mpsc::UnboundedSender<Completion>,
    completion_rx: mpsc::UnboundedReceiver<Completion>,
}

impl App {
    /// Create an application talking HTTP to the configured service
    pub fn new(config: &QuizConfig) -> Result<Self> {
        let service = Arc::new(HttpQuestionService::new(config)?);
        Self::with_service(config, service)
    }

    /// Create an application around any question service
    pub fn with_service(config: &QuizConfig, service: Arc<dyn QuestionService>) -> Result<Self> {
        let (completion_tx, completion_rx) = mpsc::unbounded_channel();
        Ok(Self {
            tui: Tui::new(config.tick_rate)?,
            state: GameState::new(Rules::from(config)),
            service,
            completion_tx,
            completion_rx,
        })
    }

    /// Initialize the terminal and start the loading splash
    pub fn init(&mut self) -> Result<()> {
        self.tui.init()?;
        let boot = self.state.boot();
        self.execute(boot);
        Ok(())
    }

    /// Run the main application loop until the player quits
    pub async fn run(&mut self) -> Result<()> {
        while !self.state.should_quit() {
            while let Ok(completion) = self.completion_rx.try_recv() {
                self.state.complete(completion);
            }
            self.tui.draw(&self.state)?;
            self.handle_events()?;
            // Let spawned requests make progress on current-thread runtimes
            tokio::task::yield_now().await;
        }
        tracing::info!(score = self.state.session().score, "quitting");
        self.tui.restore()
    }

    fn handle_events(&mut self) -> Result<()> {
        if let Some(key) = self.tui.next_key()? {
            if let Some(action) = self.state.key_to_action(key) {
                tracing::trace!(?action, "key action");
                if let Some(effect) = self.state.dispatch(action) {
                    self.execute(effect);
                }
            }
        }
        Ok(())
    }

    fn execute(&self, effect: Effect) {
        tracing::debug!(?effect, "executing effect");
        effects::spawn(self.service.clone(), effect, self.completion_tx.clone());
    }
}
