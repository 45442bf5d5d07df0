use anyhow::Result;
use hangterm::core::engine::Engine;
use hangterm::games::hangman::{HangmanGame, HangmanRenderer};
use tracing::info;

const LOG_FILE: &str = "hangterm.log";

fn main() -> Result<()> {
    // The TUI owns stdout, so logs go to a file
    let log_file = std::fs::File::create(LOG_FILE)?;
    tracing_subscriber::fmt()
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false)
        .init();
    info!("hangterm starting");

    let terminal = ratatui::init();
    let result = Engine::<HangmanGame, HangmanRenderer>::new().run(terminal);
    ratatui::restore();

    info!("hangterm exited");
    result
}
