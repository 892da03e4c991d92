//! Parsing of the actions a seated player may type during a game.

/// Outcome of parsing one line of player input.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// Draw a card.
    Hit,
    /// End the turn without drawing.
    Stand,
    /// Show the table summary.
    Status,
    /// Leave the table (q or quit).
    Quit,
    /// Anything else, with a message for the player.
    Invalid(String),
}

/// Parses user input into a table action (case-insensitive).
///
/// Accepted forms: `h`/`hit`, `s`/`stand`, `status`, `q`/`quit`.
pub fn parse_table_action(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    match input.as_str() {
        "" => ParseResult::Invalid("Empty input".to_string()),
        "h" | "hit" => ParseResult::Hit,
        "s" | "stand" => ParseResult::Stand,
        "status" => ParseResult::Status,
        "q" | "quit" => ParseResult::Quit,
        other => ParseResult::Invalid(format!(
            "Unrecognized action: '{}' (try hit, stand, status, quit)",
            other
        )),
    }
}
