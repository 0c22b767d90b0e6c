//! Earthquakes
//!
//! Shakes the floor around an origin: tiles in the radius lose their room,
//! light and memory flags, a random subset collapses, and anything standing
//! on a collapsing tile is shoved aside or buried.

use hashbrown::HashSet;

use super::{CellFlags, CellType, Position};
use crate::monster::{MonsterId, RaceFlags};
use crate::world::{GameState, VisualEffect};
use crate::{MAX_QUAKE_RADIUS, QUAKE_CRUSH_DAMAGE, QUAKE_SPARE_CHANCE};

/// Shake the floor around `origin`.
///
/// `instigator` is the monster responsible, if any; it is named as the
/// cause of death. Returns false, without touching anything, on protected
/// floors.
pub fn earthquake(
    state: &mut GameState,
    origin: Position,
    radius: i32,
    instigator: Option<MonsterId>,
) -> bool {
    if state.current_level.is_protected() {
        tracing::debug!(depth = state.current_level.depth, "earthquake refused on protected floor");
        return false;
    }

    let radius = radius.clamp(0, MAX_QUAKE_RADIUS);
    let cause = instigator
        .and_then(|id| state.current_level.monster(id))
        .map(|m| m.the_name())
        .unwrap_or_else(|| "an earthquake".to_string());
    tracing::debug!(%origin, radius, ?instigator, "earthquake");

    // Tiles inside the radius, in scan order
    let area: Vec<Position> = (-radius..=radius)
        .flat_map(|dy| (-radius..=radius).map(move |dx| (dx, dy)))
        .filter_map(|(dx, dy)| origin.offset(dx, dy))
        .filter(|pos| state.current_level.in_bounds(*pos) && pos.distance(&origin) <= radius)
        .collect();

    let mut marked: HashSet<Position> = HashSet::new();
    for &pos in &area {
        state
            .current_level
            .cell_mut(pos)
            .flags
            .remove(CellFlags::ROOM | CellFlags::LIT | CellFlags::MARK);

        // Never mark the epicenter
        if pos == origin {
            continue;
        }
        if state.rng.rn2(100) < QUAKE_SPARE_CHANCE {
            continue;
        }
        marked.insert(pos);
    }

    shake_player(state, origin, &marked, &cause);
    shake_monsters(state, &area, &mut marked);
    collapse_tiles(state, &area, &marked);

    state.current_level.view_dirty = true;
    state.visual(VisualEffect::Quake {
        center: origin,
        radius,
    });
    tracing::debug!(collapsed = marked.len(), "earthquake finished");
    true
}

/// Pick a random free neighbour of `pos` that is not collapsing
fn safe_neighbor(
    state: &mut GameState,
    pos: Position,
    marked: &HashSet<Position>,
) -> Option<Position> {
    let player = state.player.pos;
    let mut count = 0;
    let mut chosen = None;
    for n in pos.neighbors() {
        if !state.current_level.is_empty(n, player) || marked.contains(&n) {
            continue;
        }
        count += 1;
        if state.rng.one_in(count) {
            chosen = Some(n);
        }
    }
    chosen
}

fn shake_player(state: &mut GameState, origin: Position, marked: &HashSet<Position>, cause: &str) {
    let pos = state.player.pos;
    if state.player.pass_wall || !(pos == origin || marked.contains(&pos)) {
        return;
    }

    let Some(safe) = safe_neighbor(state, pos, marked) else {
        state.message("You are severely crushed!");
        state.player.take_hit(QUAKE_CRUSH_DAMAGE, cause);
        return;
    };

    let damage = match state.rng.rnd(3) {
        1 => {
            state.message("You nimbly dodge the blast!");
            0
        }
        2 => {
            state.message("You are bashed by rubble!");
            let stun = state.rng.rnd(50) as u16;
            state.player.timers.stunned = state.player.timers.stunned.saturating_add(stun);
            state.rng.dice(10, 4) as i32
        }
        _ => {
            state.message("You are crushed between the floor and ceiling!");
            let stun = state.rng.rnd(50) as u16;
            state.player.timers.stunned = state.player.timers.stunned.saturating_add(stun);
            state.rng.dice(10, 4) as i32
        }
    };
    state.player.pos = safe;
    state.player.take_hit(damage, cause);
}

fn shake_monsters(state: &mut GameState, area: &[Position], marked: &mut HashSet<Position>) {
    for &pos in area {
        if !marked.contains(&pos) {
            continue;
        }
        let Some(monster) = state.current_level.monster_at(pos) else {
            continue;
        };
        let id = monster.id;
        let name = monster.cap_name();

        if monster.has(RaceFlags::QUESTOR)
            || monster.has(RaceFlags::PASS_WALL)
            || monster.has(RaceFlags::KILL_WALL)
        {
            marked.remove(&pos);
            continue;
        }

        let safe = if monster.has(RaceFlags::NEVER_MOVE) {
            None
        } else {
            safe_neighbor(state, pos, marked)
        };

        let damage = match safe {
            Some(_) => {
                state.message(format!("{} wails out in pain!", name));
                state.rng.dice(4, 8) as i32
            }
            None => {
                state.message(format!("{} is embedded in the rock!", name));
                state.current_level.monster(id).map_or(0, |m| m.hp + 1)
            }
        };

        let died = state
            .current_level
            .monster_mut(id)
            .is_some_and(|m| m.take_damage(damage));
        if died {
            tracing::debug!(monster = id.0, "crushed by earthquake");
            state.current_level.remove_monster(id);
        } else if let Some(safe) = safe {
            state.current_level.move_monster(id, safe);
        }
    }
}

fn collapse_tiles(state: &mut GameState, area: &[Position], marked: &HashSet<Position>) {
    let player = state.player.pos;
    for &pos in area {
        if !marked.contains(&pos) || pos == player {
            continue;
        }
        let level = &mut state.current_level;
        if level.monster_at(pos).is_some() || level.cell(pos).typ.is_permanent() {
            continue;
        }

        let typ = if level.cell(pos).typ.is_passable() {
            match state.rng.rn2(100) {
                0..20 => CellType::Granite,
                20..70 => CellType::MineralVein,
                _ => CellType::Rubble,
            }
        } else {
            CellType::Floor
        };
        let level = &mut state.current_level;
        level.set_terrain(pos, typ);
        level.clear_tile_contents(pos);
    }
}
