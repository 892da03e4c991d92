//! # Play Command
//!
//! Hotseat 21: two players share one terminal, typing actions in turn.
//! The command is the same thin collaborator a chat front end would be: it
//! seats both players through the registry, starts the game, relays each
//! action to the engine, advances the turn after every completed move, and
//! renders the engine's summary when the table resolves.

use std::io::{BufRead, Write};

use ventuno_engine::game::JoinOutcome;
use ventuno_engine::registry::{lock_table, GameRegistry};

use crate::config;
use crate::error::CliError;
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{parse_table_action, ParseResult};

/// The hotseat terminal is a single room.
const ROOM_ID: i64 = 1;
const FIRST_SEAT: i64 = 1;
const SECOND_SEAT: i64 = 2;

/// Handle the play command: interactive hotseat 21.
///
/// # Arguments
///
/// * `seed` - RNG seed for a reproducible shuffle (default: random)
/// * `p1`, `p2` - Seat names (default: from configuration)
/// * `out` - Output stream for game display
/// * `err` - Error stream for warnings and rejected actions
/// * `stdin` - Input stream for player actions
pub fn handle_play_command(
    seed: Option<u64>,
    p1: Option<String>,
    p2: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let cfg = config::load().map_err(|e| CliError::Config(e.to_string()))?;
    let p1 = p1.unwrap_or(cfg.player_one);
    let p2 = p2.unwrap_or(cfg.player_two);
    if p1 == p2 {
        return Err(CliError::InvalidInput(
            "seat names must differ".to_string(),
        ));
    }

    let seed = seed.unwrap_or_else(rand::random);
    writeln!(out, "play: seed={}", seed)?;

    let registry = GameRegistry::new();
    let table = registry.create_with_seed(ROOM_ID, seed)?;
    {
        let mut game = lock_table(&table);
        game.add_player(FIRST_SEAT, &p1)?;
        if game.add_player(SECOND_SEAT, &p2)? == JoinOutcome::ReadyToStart {
            game.start_game()?;
        }
    }
    writeln!(out, "{} and {} are seated. Two cards each.", p1, p2)?;

    loop {
        let mut game = lock_table(&table);
        if game.is_finished() {
            break;
        }
        let Some(current_id) = game.current_player_id() else {
            break;
        };
        let (name, score, cards) = match game.player(current_id) {
            Some(p) => (p.display_name().to_string(), p.score(), p.cards_display()),
            None => break,
        };
        writeln!(out, "{}: {} = {}", name, cards, score)?;
        write!(out, "{} - hit/stand/status/quit: ", name)?;
        out.flush()?;

        let Some(line) = read_stdin_line(stdin) else {
            writeln!(out, "Input closed, leaving the table.")?;
            registry.remove(ROOM_ID)?;
            return Ok(());
        };
        match parse_table_action(&line) {
            ParseResult::Hit => match game.hit(current_id) {
                Ok(card) => {
                    writeln!(out, "{} draws [{}]", name, card)?;
                    if game.player(current_id).is_some_and(|p| p.is_busted()) {
                        writeln!(out, "{} busts!", name)?;
                    }
                    game.next_turn();
                }
                Err(e) => ui::write_error(err, &e.to_string())?,
            },
            ParseResult::Stand => match game.stand(current_id) {
                Ok(()) => {
                    writeln!(out, "{} stands at {}.", name, score)?;
                    game.next_turn();
                }
                Err(e) => ui::write_error(err, &e.to_string())?,
            },
            ParseResult::Status => writeln!(out, "{}", game.summary())?,
            ParseResult::Quit => {
                writeln!(out, "Leaving the table.")?;
                drop(game);
                registry.remove(ROOM_ID)?;
                return Ok(());
            }
            ParseResult::Invalid(msg) => ui::write_error(err, &msg)?,
        }
    }

    let game = lock_table(&table);
    writeln!(out, "{}", game.summary())?;
    Ok(())
}
