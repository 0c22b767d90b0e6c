//! What the player can currently perceive

use super::GameState;
use crate::MAX_SIGHT;
use crate::dungeon::Position;
use crate::monster::MonsterId;

/// Whether the player can see the given tile
pub fn player_can_see_pos(state: &GameState, pos: Position) -> bool {
    let you = &state.player;
    !you.is_blind()
        && state.current_level.is_valid_pos(pos)
        && you.pos.distance(&pos) <= MAX_SIGHT
        && state.current_level.has_line_of_sight(you.pos, pos)
}

/// Whether the player can currently perceive the given monster
pub fn player_can_see_monster(state: &GameState, id: MonsterId) -> bool {
    let Some(monster) = state.current_level.monster(id) else {
        return false;
    };
    if monster.is_invisible() && !state.player.see_invisible {
        return false;
    }
    player_can_see_pos(state, monster.pos)
}
