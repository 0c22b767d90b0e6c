//! Damage kinds, resistances and saving throws
//!
//! Everything here is shared between the two target kinds: a fire ball
//! aimed at the player and one aimed at a monster go through exactly the
//! same reduction formula and draw the same random numbers.

mod damage_kind;
mod resist;

pub use damage_kind::DamageKind;
pub use resist::{ResistProfile, Resistances, reduce_damage, saving_throw};
