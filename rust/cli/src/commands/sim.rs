//! # Sim Command
//!
//! Plays scripted games back to back and appends one [`GameRecord`] per
//! game to a JSONL file. Both seats follow the same fixed script (draw
//! below 17, stand otherwise), which makes this a record generator for the
//! stats command rather than any kind of opponent.

use std::io::Write;
use std::path::PathBuf;

use ventuno_engine::game::Game;
use ventuno_engine::logger::{GameRecord, MatchLogger};

use crate::config::{self, Config};
use crate::error::CliError;
use crate::ui;

/// Scripted seats draw while below this score.
const HIT_BELOW: u32 = 17;

pub fn handle_sim_command(
    games: u32,
    seed: Option<u64>,
    output: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if games == 0 {
        return Err(CliError::InvalidInput("games must be >= 1".to_string()));
    }
    let cfg = config::load().map_err(|e| CliError::Config(e.to_string()))?;
    let base_seed = seed.unwrap_or_else(rand::random);
    let path: PathBuf = match output {
        Some(p) => PathBuf::from(p),
        None => PathBuf::from(&cfg.data_dir).join("games.jsonl"),
    };
    if path.exists() {
        ui::display_warning(err, &format!("overwriting {}", path.display()))?;
    }
    let mut logger = MatchLogger::create(&path)?;
    writeln!(
        out,
        "sim: games={} seed={} output={}",
        games,
        base_seed,
        path.display()
    )?;

    let mut draws = 0u32;
    for i in 0..games {
        let game_seed = base_seed.wrapping_add(u64::from(i));
        let record = run_scripted_game(i64::from(i) + 1, game_seed, &cfg, &mut logger)?;
        if record.is_draw {
            draws += 1;
        }
        logger.write(&record)?;
    }
    writeln!(out, "games played: {} (draws: {})", games, draws)?;
    Ok(())
}

fn run_scripted_game(
    room_id: i64,
    seed: u64,
    cfg: &Config,
    logger: &mut MatchLogger,
) -> Result<GameRecord, CliError> {
    let mut game = Game::with_seed(seed);
    game.add_player(1, &cfg.player_one)?;
    game.add_player(2, &cfg.player_two)?;
    game.start_game()?;
    while !game.is_finished() {
        let Some(current) = game.current_player_id() else {
            break;
        };
        let score = game.player(current).map(|p| p.score()).unwrap_or(0);
        if score < HIT_BELOW {
            game.hit(current)?;
        } else {
            game.stand(current)?;
        }
        game.next_turn();
    }
    Ok(GameRecord::from_game(logger.next_id(), room_id, &game))
}
