//! # Ventuno CLI Library
//!
//! Command-line interface for the ventuno game engine. It exposes
//! subcommands for playing hotseat games, generating record files, and
//! summarizing them.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses
//! command-line arguments and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["ventuno", "cfg"];
//! let code = ventuno_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Hotseat 21 for two players at one terminal
//! - `sim`: Run scripted games and write JSONL records
//! - `stats`: Aggregate statistics from a JSONL record file
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod io_utils;
pub mod ui;
pub mod validation;

use cli::{Commands, VentunoCli};
use commands::{
    handle_cfg_command, handle_play_command, handle_sim_command, handle_stats_command,
};
pub use error::CliError;

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate
/// subcommand handler.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let parsed = VentunoCli::try_parse_from(&argv);
    let cli = match parsed {
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version print to stdout and exit 0
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return 2;
                    }
                    0
                }
                _ => {
                    if writeln!(err, "{}", e).is_err() {
                        return 2;
                    }
                    2
                }
            };
        }
        Ok(cli) => cli,
    };

    let result = match cli.cmd {
        Commands::Play { seed, p1, p2 } => {
            // real stdin here; tests drive the handler with a cursor
            let stdin = std::io::stdin();
            let mut stdin_lock = stdin.lock();
            handle_play_command(seed, p1, p2, out, err, &mut stdin_lock)
        }
        Commands::Sim {
            games,
            seed,
            output,
        } => handle_sim_command(games, seed, output, out, err),
        Commands::Stats { input } => handle_stats_command(&input, out, err),
        Commands::Cfg => handle_cfg_command(out),
    };
    match result {
        Ok(()) => 0,
        Err(e) => {
            if writeln!(err, "Error: {}", e).is_err() {
                return 2;
            }
            2
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cfg_command_dispatches() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(vec!["ventuno", "cfg"], &mut out, &mut err);
        assert_eq!(code, 0);
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Configuration"));
    }

    #[test]
    fn help_prints_to_stdout_and_exits_zero() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(vec!["ventuno", "--help"], &mut out, &mut err);
        assert_eq!(code, 0);
        assert!(!out.is_empty());
        assert!(err.is_empty());
    }

    #[test]
    fn unknown_subcommand_exits_two() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(vec!["ventuno", "shuffle"], &mut out, &mut err);
        assert_eq!(code, 2);
        assert!(!err.is_empty());
    }

    #[test]
    fn sim_and_stats_round_trip_through_dispatch() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("games.jsonl");
        let path_str = path.to_string_lossy().into_owned();

        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(
            vec![
                "ventuno", "sim", "--games", "2", "--seed", "42", "--output", &path_str,
            ],
            &mut out,
            &mut err,
        );
        assert_eq!(code, 0, "sim should succeed");

        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(
            vec!["ventuno", "stats", "--input", &path_str],
            &mut out,
            &mut err,
        );
        assert_eq!(code, 0);
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("games: 2"));
    }

    #[test]
    fn stats_with_missing_file_exits_two() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(
            vec!["ventuno", "stats", "--input", "nonexistent.jsonl"],
            &mut out,
            &mut err,
        );
        assert_eq!(code, 2);
        let errors = String::from_utf8(err).unwrap();
        assert!(errors.contains("Error:"));
    }

    #[test]
    fn all_subcommands_parse() {
        for args in [
            vec!["ventuno", "play", "--seed", "1"],
            vec!["ventuno", "sim", "--games", "2"],
            vec!["ventuno", "stats", "--input", "x.jsonl"],
            vec!["ventuno", "cfg"],
        ] {
            assert!(
                cli::VentunoCli::try_parse_from(&args).is_ok(),
                "failed to parse: {:?}",
                args
            );
        }
    }
}
