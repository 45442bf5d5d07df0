use crate::core::game::{GameRenderer, TerminalGame};
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::DefaultTerminal;
use std::marker::PhantomData;
use std::time::Duration;
use tracing::info;

/// How long to block waiting for a key before redrawing
const POLL_INTERVAL: Duration = Duration::from_millis(16);

/// Synchronous draw/poll/apply loop. Owns the game state; every accepted
/// action is applied to completion before the next key is read.
pub struct Engine<G: TerminalGame, R: GameRenderer<G::State>> {
    state: G::State,
    _renderer: PhantomData<R>,
}

impl<G: TerminalGame, R: GameRenderer<G::State>> Engine<G, R> {
    pub fn new() -> Self {
        Self {
            state: G::new_game(),
            _renderer: PhantomData,
        }
    }

    pub fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        info!(game = G::NAME, "engine started");

        loop {
            terminal.draw(|f| R::render(f, &self.state))?;

            // INPUT (blocks at most one poll interval)
            if event::poll(POLL_INTERVAL)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if key.code == KeyCode::Esc {
                        break;
                    }
                    if let Some(action) = G::parse_key(key) {
                        G::apply(&mut self.state, action);
                    }
                }
            }
        }

        info!(game = G::NAME, "engine stopped");
        Ok(())
    }
}

impl<G: TerminalGame, R: GameRenderer<G::State>> Default for Engine<G, R> {
    fn default() -> Self {
        Self::new()
    }
}
