//! Dungeon floor
//!
//! Contains the level structure, map cells, positions and the earthquake
//! primitive that reshapes them.

mod cell;
mod earthquake;
mod level;
mod position;

pub use cell::{Cell, CellFlags, CellType};
pub use earthquake::earthquake;
pub use level::{Corpse, Level, LevelFlags, Trap, TrapKind};
pub use position::{DIRECTIONS, Position};
