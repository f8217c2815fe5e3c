//! Rendering seam
//!
//! The state machine never touches the terminal. Anything that can draw a
//! [`GameState`] implements [`Renderer`].

use crate::app::screens::Screens;
use crate::app::state::GameState;
use crate::Result;
use ratatui::{backend::Backend, Terminal};

/// Draws the full UI for a state
pub trait Renderer {
    fn draw(&mut self, state: &GameState) -> Result<()>;
}

/// Renderer backed by a ratatui terminal
pub struct FrameRenderer<B: Backend> {
    terminal: Terminal<B>,
    screens: Screens,
}

impl<B: Backend> FrameRenderer<B> {
    pub fn new(backend: B) -> Result<Self> {
        Ok(Self {
            terminal: Terminal::new(backend)?,
            screens: Screens::new(),
        })
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }
}

impl<B: Backend> Renderer for FrameRenderer<B> {
    fn draw(&mut self, state: &GameState) -> Result<()> {
        let screens = &mut self.screens;
        self.terminal.draw(|f| screens.render(f, state))?;
        Ok(())
    }
}
