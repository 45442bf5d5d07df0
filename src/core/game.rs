/// Core game interface for single-player terminal games
use crossterm::event::KeyEvent;

/// Main game trait that all games must implement
/// This provides a standard interface for keyboard-driven games using Ratatui
pub trait TerminalGame {
    /// Game state owned by the engine and handed to the renderer read-only
    type State;

    /// Discrete action produced from a key press
    type Action;

    // Metadata directly in game - no factory needed!
    const NAME: &'static str;
    const DESCRIPTION: &'static str;

    /// Initialize the game state
    fn new_game() -> Self::State;

    /// Map a key press to a game action, if it means anything to this game
    fn parse_key(key: KeyEvent) -> Option<Self::Action>;

    /// Apply an action to the state
    fn apply(state: &mut Self::State, action: Self::Action);
}

/// Renderer trait for drawing game state using Ratatui
pub trait GameRenderer<S> {
    /// Render the current state into the Ratatui Frame
    fn render(frame: &mut ratatui::Frame, state: &S);
}
