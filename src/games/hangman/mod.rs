/// Hangman game module - clean and simple!
pub mod game;
pub mod renderer;
pub mod words;

// Clean exports - game controls its own input parsing!
pub use game::{GameStatus, HangmanAction, HangmanGame, HangmanState, LetterOutcome, ALPHABET, MAX_WRONG};
pub use renderer::HangmanRenderer;
