//! # Cfg Command
//!
//! Prints the resolved configuration with the source of every value.

use std::io::Write;

use crate::config;
use crate::error::CliError;

pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let resolved = config::load_with_sources().map_err(|e| CliError::Config(e.to_string()))?;
    writeln!(out, "Configuration:")?;
    writeln!(
        out,
        "  player_one = {:?} ({})",
        resolved.config.player_one,
        resolved.sources.player_one.as_str()
    )?;
    writeln!(
        out,
        "  player_two = {:?} ({})",
        resolved.config.player_two,
        resolved.sources.player_two.as_str()
    )?;
    writeln!(
        out,
        "  data_dir = {:?} ({})",
        resolved.config.data_dir,
        resolved.sources.data_dir.as_str()
    )?;
    Ok(())
}
