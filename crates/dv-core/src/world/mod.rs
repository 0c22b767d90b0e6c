//! Shared game state and the collaborators spells talk to

mod errors;
mod feedback;
mod options;
mod state;
mod vision;

pub use errors::OptionsError;
pub use feedback::VisualEffect;
pub use options::EngineOptions;
pub use state::GameState;
pub use vision::{player_can_see_monster, player_can_see_pos};
