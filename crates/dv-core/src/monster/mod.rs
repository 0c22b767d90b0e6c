//! Monsters
//!
//! Static race definitions, monster instances on the floor, and the
//! resistance memory a caster builds up about the player.

mod monst;
mod race;
mod smart;

pub use monst::{Monster, MonsterId, MonsterTimers};
pub use race::{RACES, RaceDef, RaceFlags, RaceId, race_by_name, races};
pub use smart::SmartFlags;
