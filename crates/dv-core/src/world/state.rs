//! Game state shared by every spell resolution

use serde::{Deserialize, Serialize};

use super::{EngineOptions, VisualEffect};
use crate::dungeon::{Level, Position};
use crate::player::You;
use crate::rng::GameRng;

/// Everything a spell may read or mutate
///
/// Passed as `&mut GameState` into each dispatch call, which gives the call
/// exclusive access to the player, the floor and the generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Player character
    pub player: You,

    /// Current level
    pub current_level: Level,

    /// Random number generator
    pub rng: GameRng,

    /// Engine options
    #[serde(default)]
    pub options: EngineOptions,

    /// Remaining turns of stopped time, consumed by the scheduler
    pub time_stop: u8,

    /// Messages for the current turn
    #[serde(skip)]
    pub messages: Vec<String>,

    /// Animation requests for the current turn
    #[serde(skip)]
    pub visuals: Vec<VisualEffect>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameRng::from_entropy())
    }
}

impl GameState {
    /// Create a state with the player in the middle of an empty arena
    pub fn new(rng: GameRng) -> Self {
        let mut player = You::default();
        player.pos = Position::new(40, 12);
        Self::with_level(player, Level::arena(1), rng)
    }

    pub fn with_level(player: You, level: Level, rng: GameRng) -> Self {
        Self {
            player,
            current_level: level,
            rng,
            options: EngineOptions::default(),
            time_stop: 0,
            messages: Vec::new(),
            visuals: Vec::new(),
        }
    }

    /// Add a message to display
    pub fn message(&mut self, msg: impl Into<String>) {
        self.messages.push(msg.into());
    }

    /// Queue a visual effect
    pub fn visual(&mut self, effect: VisualEffect) {
        self.visuals.push(effect);
    }

    /// Clear messages
    pub fn clear_messages(&mut self) {
        self.messages.clear();
    }

    /// Hand the queued animations to the front end
    pub fn take_visuals(&mut self) -> Vec<VisualEffect> {
        std::mem::take(&mut self.visuals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = GameState::new(GameRng::new(1));
        assert!(state.current_level.is_passable(state.player.pos));
        assert!(state.messages.is_empty());
        assert_eq!(state.time_stop, 0);
    }

    #[test]
    fn test_message_queue() {
        let mut state = GameState::new(GameRng::new(1));
        state.message("one");
        state.message(String::from("two"));
        assert_eq!(state.messages, vec!["one", "two"]);
        state.clear_messages();
        assert!(state.messages.is_empty());
    }

    #[test]
    fn test_take_visuals_drains() {
        let mut state = GameState::new(GameRng::new(1));
        state.visual(VisualEffect::Summon {
            at: Position::new(3, 3),
        });
        assert_eq!(state.take_visuals().len(), 1);
        assert!(state.visuals.is_empty());
    }
}
