//! Command-line definition for the `ventuno` binary.

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "ventuno", version, about = "Two-player 21 at the terminal")]
pub struct VentunoCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Play a hotseat game: both players share one terminal
    Play {
        /// RNG seed for a reproducible shuffle
        #[arg(long)]
        seed: Option<u64>,
        /// Display name for the first seat
        #[arg(long)]
        p1: Option<String>,
        /// Display name for the second seat
        #[arg(long)]
        p2: Option<String>,
    },
    /// Run scripted games and append their records to a JSONL file
    Sim {
        /// Number of games to play
        #[arg(long, default_value_t = 1)]
        games: u32,
        /// Seed of the first game; game N uses seed + N
        #[arg(long)]
        seed: Option<u64>,
        /// Output JSONL file (defaults to <data_dir>/games.jsonl)
        #[arg(long)]
        output: Option<String>,
    },
    /// Summarize a JSONL record file produced by sim
    Stats {
        /// Path to the records file
        #[arg(long)]
        input: String,
    },
    /// Show the resolved configuration
    Cfg,
}
