/// Hangman presentation layer - a pure projection of the game state
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::core::game::{GameRenderer, TerminalGame};
use crate::games::hangman::game::{GameStatus, HangmanGame, HangmanState, LetterOutcome, ALPHABET, MAX_WRONG};

/// Cumulative gallows frames, one per wrong-guess count (0..=6).
/// Frame n shows the figure parts of every stage up to n:
/// head, body, left arm, right arm, left leg, right leg.
const GALLOWS: [&str; MAX_WRONG as usize + 1] = [
    r#"
  +---+
  |   |
      |
      |
      |
      |
========="#,
    r#"
  +---+
  |   |
  O   |
      |
      |
      |
========="#,
    r#"
  +---+
  |   |
  O   |
  |   |
      |
      |
========="#,
    r#"
  +---+
  |   |
  O   |
 /|   |
      |
      |
========="#,
    r#"
  +---+
  |   |
  O   |
 /|\  |
      |
      |
========="#,
    r#"
  +---+
  |   |
  O   |
 /|\  |
 /    |
      |
========="#,
    r#"
  +---+
  |   |
  O   |
 /|\  |
 / \  |
      |
========="#,
];

pub struct HangmanRenderer;

impl GameRenderer<HangmanState> for HangmanRenderer {
    fn render(frame: &mut Frame, state: &HangmanState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3),  // title
                Constraint::Length(9),  // gallows
                Constraint::Length(1),  // counter
                Constraint::Length(2),  // word
                Constraint::Length(3),  // keyboard
                Constraint::Length(2),  // message
                Constraint::Min(1),     // help
            ])
            .split(frame.area());

        frame.render_widget(
            Paragraph::new(HangmanGame::DESCRIPTION)
                .block(
                    Block::default()
                        .title(format!(" {} ", HangmanGame::NAME.to_uppercase()))
                        .borders(Borders::ALL),
                )
                .alignment(Alignment::Center),
            chunks[0],
        );

        frame.render_widget(
            Paragraph::new(GALLOWS[state.wrong_count() as usize]).alignment(Alignment::Center),
            chunks[1],
        );

        frame.render_widget(
            Paragraph::new(counter_line(state)).alignment(Alignment::Center),
            chunks[2],
        );

        frame.render_widget(
            Paragraph::new(word_line(state)).alignment(Alignment::Center),
            chunks[3],
        );

        let (top, bottom) = ALPHABET.split_at(13);
        let keyboard = vec![keyboard_line(state, top), keyboard_line(state, bottom)];
        frame.render_widget(
            Paragraph::new(keyboard).alignment(Alignment::Center),
            chunks[4],
        );

        frame.render_widget(
            Paragraph::new(message_line(state)).alignment(Alignment::Center),
            chunks[5],
        );

        frame.render_widget(
            Paragraph::new("[a-z] Guess  [Enter] Restart  [Esc] Quit")
                .style(Style::default().add_modifier(Modifier::DIM))
                .alignment(Alignment::Center),
            chunks[6],
        );
    }
}

/// "Wrong guesses: n / 6", with the count turning red past the halfway mark
fn counter_line(state: &HangmanState) -> Line<'static> {
    let wrong = state.wrong_count();
    let count_color = if wrong > 3 { Color::Red } else { Color::Yellow };
    Line::from(vec![
        Span::raw("Wrong guesses: "),
        Span::styled(
            wrong.to_string(),
            Style::default().fg(count_color).add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(" / {}", MAX_WRONG)),
        Span::styled(
            format!("  {}", "♥".repeat(state.remaining_wrong() as usize)),
            Style::default().fg(Color::Red),
        ),
    ])
}

/// One cell per word position: the letter if revealed, a blank otherwise.
/// Repeated letters reveal together since they share a revealed status.
fn word_line(state: &HangmanState) -> Line<'static> {
    let letter_style = if state.status() == GameStatus::Won {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let spans = state
        .word()
        .chars()
        .map(|c| {
            if state.is_revealed(c) {
                Span::styled(format!("{} ", c), letter_style)
            } else {
                Span::styled("_ ".to_string(), Style::default().add_modifier(Modifier::DIM))
            }
        })
        .collect::<Vec<_>>();
    Line::from(spans)
}

/// One keyboard row, each key styled by its outcome and dimmed once it is
/// no longer selectable
fn keyboard_line(state: &HangmanState, letters: &str) -> Line<'static> {
    let spans = letters
        .chars()
        .map(|letter| {
            let style = match state.letter_outcome(letter) {
                LetterOutcome::Correct => Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::DIM),
                LetterOutcome::Incorrect => Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::DIM | Modifier::CROSSED_OUT),
                LetterOutcome::Unguessed if state.is_over() => {
                    Style::default().add_modifier(Modifier::DIM)
                }
                LetterOutcome::Unguessed => Style::default().add_modifier(Modifier::BOLD),
            };
            Span::styled(format!("{} ", letter), style)
        })
        .collect::<Vec<_>>();
    Line::from(spans)
}

fn message_line(state: &HangmanState) -> Line<'static> {
    match state.status() {
        GameStatus::InProgress => Line::raw(""),
        GameStatus::Won => Line::from(Span::styled(
            "🎉 Congratulations! You won!".to_string(),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        GameStatus::Lost => Line::from(Span::styled(
            format!("💀 Game Over! The word was \"{}\".", state.word()),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
    }
}
