//! Input tokenization for the REPL.

/// Splits a raw input line into lowercase words.
///
/// Leading, trailing, and repeated whitespace all collapse; an all-blank
/// line yields no words.
pub fn clean_input(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
