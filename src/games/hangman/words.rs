use rand::Rng;

/// Built-in candidate words, all lowercase a-z
pub const WORDS: &[&str] = &[
    "terminal", "keyboard", "gallows", "letter", "widget", "cursor", "buffer",
    "random", "state", "props", "render", "alphabet", "hangman",
];

/// Pick a secret word uniformly from the built-in list.
///
/// Generic over the random source so tests can pass a seeded one.
pub fn pick_word<R: Rng>(rng: &mut R) -> &'static str {
    WORDS[rng.random_range(0..WORDS.len())]
}
