//! Error type for the command-line harness

use dv_core::world::OptionsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to load options: {0}")]
    Options(#[from] OptionsError),

    #[error("unknown spell: {0} (try --list)")]
    UnknownSpell(String),

    #[error("unknown monster: {0}")]
    UnknownRace(String),

    #[error("unknown player class: {0}")]
    UnknownClass(String),

    #[error("nothing to do: pass --spell or --quake")]
    NothingToDo,
}
