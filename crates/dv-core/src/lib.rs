//! dv-core: Core game logic for Delve
//!
//! This crate contains the monster-spell resolution engine and the floor,
//! player and monster state it acts on. It has no terminal I/O: player-facing
//! text and animation requests are queued on [`GameState`] for a front end to
//! drain.
//!
//! The externally callable entry points are
//! [`spell::monspell_to_player`], [`spell::monspell_to_monster`] (dispatch
//! wrapped with spell learning), the raw tables [`spell::cast_at_player`] /
//! [`spell::cast_at_monster`], and [`dungeon::earthquake`].

pub mod combat;
pub mod dungeon;
pub mod monster;
pub mod player;
pub mod spell;
pub mod world;

mod consts;
mod rng;

pub use consts::*;
pub use rng::GameRng;
pub use world::GameState;
