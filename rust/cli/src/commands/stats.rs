//! # Stats Command
//!
//! Aggregates a JSONL record file: total games, draws, and wins by player
//! name. Lines that fail to parse are skipped with a warning rather than
//! aborting the whole report.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;

use ventuno_engine::logger::GameRecord;

use crate::error::CliError;
use crate::ui;

pub fn handle_stats_command(
    input: &str,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let content = fs::read_to_string(input)
        .map_err(|e| CliError::InvalidInput(format!("cannot read {}: {}", input, e)))?;

    let mut games = 0u32;
    let mut draws = 0u32;
    let mut skipped = 0u32;
    let mut wins: BTreeMap<String, u32> = BTreeMap::new();

    for (lineno, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let record: GameRecord = match serde_json::from_str(line) {
            Ok(r) => r,
            Err(e) => {
                skipped += 1;
                ui::display_warning(err, &format!("line {}: skipping bad record: {}", lineno + 1, e))?;
                continue;
            }
        };
        games += 1;
        if record.is_draw {
            draws += 1;
        } else if let Some(winner_id) = record.winner_id {
            if let Some(p) = record.players.iter().find(|p| p.user_id == winner_id) {
                *wins.entry(p.name.clone()).or_insert(0) += 1;
            }
        }
    }

    writeln!(out, "games: {}", games)?;
    writeln!(out, "draws: {}", draws)?;
    for (name, count) in &wins {
        writeln!(out, "wins {}: {}", name, count)?;
    }
    if skipped > 0 {
        writeln!(out, "skipped: {}", skipped)?;
    }
    Ok(())
}
