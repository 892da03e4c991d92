use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::game::Game;
use crate::player::Player;

/// One seat as captured in a [`GameRecord`].
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub user_id: i64,
    pub name: String,
    /// Hand in dealt order.
    pub cards: Vec<Card>,
    pub score: u32,
    pub stopped: bool,
    pub busted: bool,
}

impl PlayerRecord {
    pub fn from_player(player: &Player) -> Self {
        Self {
            user_id: player.user_id(),
            name: player.display_name().to_string(),
            cards: player.cards().to_vec(),
            score: player.score(),
            stopped: player.is_stopped(),
            busted: player.is_busted(),
        }
    }
}

/// Complete record of one game, serialized as a single JSONL line.
///
/// This is observability output for histories and statistics; games are
/// never reconstructed from it.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Record identifier (format: YYYYMMDD-NNNNNN)
    pub game_id: String,
    /// Room the game was played in.
    pub room_id: i64,
    /// Shuffle seed, enabling a deterministic replay of the deal.
    pub seed: u64,
    /// Seats in join order.
    pub players: Vec<PlayerRecord>,
    /// Winner, absent on a draw (or an unfinished snapshot).
    pub winner_id: Option<i64>,
    pub is_draw: bool,
    /// Timestamp when the game was recorded (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

impl GameRecord {
    /// Snapshots a game, typically once it is finished.
    pub fn from_game(game_id: String, room_id: i64, game: &Game) -> Self {
        Self {
            game_id,
            room_id,
            seed: game.seed(),
            players: game.players().iter().map(PlayerRecord::from_player).collect(),
            winner_id: game.winner_id(),
            is_draw: game.is_draw(),
            ts: None,
        }
    }
}

pub fn format_game_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Appends [`GameRecord`]s to a JSONL file, one line per finished game.
pub struct MatchLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl MatchLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                let _ = create_dir_all(parent);
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    /// Id generation without a backing file.
    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_game_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &GameRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}
