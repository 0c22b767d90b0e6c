//! Player state
//!
//! Only the parts of the character that monster spells read or change.

mod class;
mod you;

pub use class::PlayerClass;
pub use you::{PlayerTimers, You};
