use std::collections::BTreeSet;

use crossterm::event::{KeyCode, KeyEvent};
use tracing::info;

use crate::core::game::TerminalGame;
use crate::games::hangman::words;

/// Wrong guesses allowed before the game is lost
pub const MAX_WRONG: u8 = 6;

/// The recognized guessable alphabet
pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// How a single keyboard letter relates to the current game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterOutcome {
    Unguessed,
    Correct,
    Incorrect,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HangmanAction {
    Guess(char),
    Restart,
}

/// One round of hangman: the secret word, every letter guessed so far,
/// and the wrong-guess count. Mutated only through [`HangmanState::guess`];
/// a restart replaces the whole state rather than patching it.
#[derive(Debug, Clone)]
pub struct HangmanState {
    word: String,
    guessed: BTreeSet<char>,
    wrong: u8,
    status: GameStatus,
}

impl HangmanState {
    pub fn new(word: impl Into<String>) -> Self {
        let word = word.into().to_ascii_lowercase();
        debug_assert!(!word.is_empty() && word.chars().all(|c| c.is_ascii_lowercase()));

        Self {
            word,
            guessed: BTreeSet::new(),
            wrong: 0,
            status: GameStatus::InProgress,
        }
    }

    /// Guess a single letter. Inert once the game is over, for letters
    /// already guessed, and for anything outside a-z; uppercase input is
    /// normalized rather than rejected.
    pub fn guess(&mut self, letter: char) {
        if self.status != GameStatus::InProgress {
            return;
        }

        let letter = letter.to_ascii_lowercase();
        if !letter.is_ascii_lowercase() {
            return;
        }
        if !self.guessed.insert(letter) {
            return;
        }

        if self.word.contains(letter) {
            if self.word.chars().all(|c| self.guessed.contains(&c)) {
                self.status = GameStatus::Won;
            }
        } else {
            self.wrong += 1;
            if self.wrong >= MAX_WRONG {
                self.status = GameStatus::Lost;
            }
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    pub fn wrong_count(&self) -> u8 {
        self.wrong
    }

    pub fn remaining_wrong(&self) -> u8 {
        MAX_WRONG - self.wrong
    }

    pub fn guessed_count(&self) -> usize {
        self.guessed.len()
    }

    /// Whether a word position holding this letter shows it or stays blank.
    /// Everything is revealed once the game is over.
    pub fn is_revealed(&self, letter: char) -> bool {
        self.is_over() || self.guessed.contains(&letter)
    }

    /// Drives keyboard-key styling
    pub fn letter_outcome(&self, letter: char) -> LetterOutcome {
        if !self.guessed.contains(&letter) {
            LetterOutcome::Unguessed
        } else if self.word.contains(letter) {
            LetterOutcome::Correct
        } else {
            LetterOutcome::Incorrect
        }
    }
}

/// Pure game implementation - no UI or terminal concerns
pub struct HangmanGame;

impl TerminalGame for HangmanGame {
    type State = HangmanState;
    type Action = HangmanAction;

    const NAME: &'static str = "Hangman";
    const DESCRIPTION: &'static str = "Guess the word before the figure is complete";

    fn new_game() -> Self::State {
        let mut rng = rand::rng();
        HangmanState::new(words::pick_word(&mut rng))
    }

    fn parse_key(key: KeyEvent) -> Option<Self::Action> {
        match key.code {
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                Some(HangmanAction::Guess(c.to_ascii_lowercase()))
            }
            KeyCode::Enter => Some(HangmanAction::Restart),
            _ => None,
        }
    }

    fn apply(state: &mut Self::State, action: Self::Action) {
        match action {
            HangmanAction::Guess(letter) => {
                state.guess(letter);
                info!(
                    letter = %letter,
                    outcome = ?state.letter_outcome(letter),
                    wrong = state.wrong_count(),
                    status = ?state.status(),
                    "guess"
                );
            }
            HangmanAction::Restart => {
                *state = Self::new_game();
                info!("new game started");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn fresh_game_is_blank() {
        let state = HangmanState::new("state");
        assert_eq!(state.status(), GameStatus::InProgress);
        assert_eq!(state.wrong_count(), 0);
        assert_eq!(state.guessed_count(), 0);
        assert_eq!(state.remaining_wrong(), MAX_WRONG);
        assert!(!state.is_revealed('s'));
    }

    #[test]
    fn covering_every_letter_wins_without_spending_tries() {
        let mut state = HangmanState::new("state");
        for letter in ['s', 't', 'a', 'e'] {
            assert_eq!(state.status(), GameStatus::InProgress);
            state.guess(letter);
        }
        assert_eq!(state.status(), GameStatus::Won);
        assert_eq!(state.wrong_count(), 0);
        assert_eq!(state.remaining_wrong(), MAX_WRONG);
    }

    #[test]
    fn guess_order_does_not_matter() {
        let mut state = HangmanState::new("state");
        for letter in ['e', 'a', 't', 's'] {
            state.guess(letter);
        }
        assert_eq!(state.status(), GameStatus::Won);
    }

    #[test]
    fn six_misses_lose_and_reveal_the_word() {
        let mut state = HangmanState::new("props");
        for (i, letter) in ['x', 'y', 'z', 'q', 'w', 'u'].into_iter().enumerate() {
            state.guess(letter);
            assert_eq!(state.wrong_count() as usize, i + 1);
        }
        assert_eq!(state.status(), GameStatus::Lost);
        assert_eq!(state.remaining_wrong(), 0);
        assert_eq!(state.word(), "props");
        // loss reveals every position, guessed or not
        assert!(state.is_revealed('p'));
        assert!(state.is_revealed('r'));
    }

    #[test]
    fn miss_at_the_threshold_loses_immediately() {
        let mut state = HangmanState::new("props");
        for letter in ['x', 'y', 'z', 'q', 'w'] {
            state.guess(letter);
        }
        assert_eq!(state.status(), GameStatus::InProgress);
        assert_eq!(state.remaining_wrong(), 1);
        state.guess('u');
        assert_eq!(state.status(), GameStatus::Lost);
    }

    #[test]
    fn repeating_a_guess_changes_nothing() {
        let mut state = HangmanState::new("state");
        state.guess('x');
        let (wrong, guessed) = (state.wrong_count(), state.guessed_count());
        state.guess('x');
        assert_eq!(state.wrong_count(), wrong);
        assert_eq!(state.guessed_count(), guessed);
        assert_eq!(state.status(), GameStatus::InProgress);

        state.guess('s');
        let guessed = state.guessed_count();
        state.guess('s');
        assert_eq!(state.guessed_count(), guessed);
        assert_eq!(state.wrong_count(), wrong);
    }

    #[test]
    fn guesses_after_the_end_are_inert() {
        let mut state = HangmanState::new("props");
        for letter in ['x', 'y', 'z', 'q', 'w', 'u'] {
            state.guess(letter);
        }
        assert_eq!(state.status(), GameStatus::Lost);

        state.guess('p');
        assert_eq!(state.status(), GameStatus::Lost);
        assert_eq!(state.wrong_count(), MAX_WRONG);
        assert_eq!(state.guessed_count(), 6);

        let mut won = HangmanState::new("at");
        won.guess('a');
        won.guess('t');
        assert_eq!(won.status(), GameStatus::Won);
        won.guess('x');
        assert_eq!(won.status(), GameStatus::Won);
        assert_eq!(won.wrong_count(), 0);
    }

    #[test]
    fn non_letter_input_is_inert_and_uppercase_is_normalized() {
        let mut state = HangmanState::new("state");
        state.guess('1');
        state.guess('!');
        state.guess(' ');
        assert_eq!(state.guessed_count(), 0);
        assert_eq!(state.wrong_count(), 0);

        state.guess('S');
        assert!(state.is_revealed('s'));
        assert_eq!(state.guessed_count(), 1);
    }

    #[test]
    fn wrong_guesses_do_not_reveal_positions() {
        let mut state = HangmanState::new("state");
        state.guess('x');
        assert!(!state.is_revealed('s'));
        state.guess('t');
        assert!(state.is_revealed('t'));
        assert!(!state.is_revealed('a'));
    }

    #[test]
    fn letter_outcomes_track_guesses() {
        let mut state = HangmanState::new("state");
        assert_eq!(state.letter_outcome('s'), LetterOutcome::Unguessed);
        state.guess('s');
        state.guess('x');
        assert_eq!(state.letter_outcome('s'), LetterOutcome::Correct);
        assert_eq!(state.letter_outcome('x'), LetterOutcome::Incorrect);
        assert_eq!(state.letter_outcome('z'), LetterOutcome::Unguessed);
    }

    #[test]
    fn mixed_game_counts_only_misses() {
        let mut state = HangmanState::new("state");
        state.guess('s');
        state.guess('x');
        state.guess('t');
        state.guess('y');
        assert_eq!(state.wrong_count(), 2);
        assert_eq!(state.remaining_wrong(), MAX_WRONG - 2);
        assert_eq!(state.status(), GameStatus::InProgress);
        state.guess('a');
        state.guess('e');
        assert_eq!(state.status(), GameStatus::Won);
        assert_eq!(state.wrong_count(), 2);
    }

    #[test]
    fn new_game_draws_from_the_word_list() {
        let state = HangmanGame::new_game();
        assert!(words::WORDS.contains(&state.word()));
        assert_eq!(state.status(), GameStatus::InProgress);
        assert_eq!(state.wrong_count(), 0);
        assert_eq!(state.guessed_count(), 0);
    }

    #[test]
    fn restart_replaces_a_finished_game() {
        let mut state = HangmanState::new("props");
        for letter in ['x', 'y', 'z', 'q', 'w', 'u'] {
            state.guess(letter);
        }
        assert_eq!(state.status(), GameStatus::Lost);

        HangmanGame::apply(&mut state, HangmanAction::Restart);
        assert_eq!(state.status(), GameStatus::InProgress);
        assert_eq!(state.wrong_count(), 0);
        assert_eq!(state.guessed_count(), 0);
        assert!(words::WORDS.contains(&state.word()));
    }

    #[test]
    fn keys_map_to_actions() {
        assert_eq!(
            HangmanGame::parse_key(key(KeyCode::Char('a'))),
            Some(HangmanAction::Guess('a'))
        );
        assert_eq!(
            HangmanGame::parse_key(key(KeyCode::Char('A'))),
            Some(HangmanAction::Guess('a'))
        );
        assert_eq!(
            HangmanGame::parse_key(key(KeyCode::Enter)),
            Some(HangmanAction::Restart)
        );
        assert_eq!(HangmanGame::parse_key(key(KeyCode::Char('3'))), None);
        assert_eq!(HangmanGame::parse_key(key(KeyCode::Tab)), None);
    }

    #[test]
    fn repeated_letters_in_the_word_reveal_together() {
        let mut state = HangmanState::new("props");
        state.guess('p');
        assert!(state.is_revealed('p'));
        state.guess('r');
        state.guess('o');
        state.guess('s');
        assert_eq!(state.status(), GameStatus::Won);
    }
}
