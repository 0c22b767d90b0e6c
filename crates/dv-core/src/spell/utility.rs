//! Movement and battlefield spells, and the player-only effects

use super::effect::{PlayerOnlyEffect, UtilityKind};
use super::target::{monster_message, monster_name, target_pos, target_profile, target_save};
use super::{CastContext, SpellOutcome, TargetRef};
use crate::combat::{Resistances, saving_throw};
use crate::dungeon::{Position, TrapKind};
use crate::monster::{Monster, MonsterId, RaceFlags};
use crate::world::{GameState, VisualEffect};
use crate::{
    BLINK_DISTANCE, DARKNESS_RADIUS, MAX_SIGHT, RAISE_DEAD_RADIUS, TELEPORT_AWAY_DISTANCE,
    TELEPORT_DISTANCE,
};

pub(super) fn utility(state: &mut GameState, ctx: &CastContext, kind: UtilityKind) -> SpellOutcome {
    let learnable = kind.is_learnable();
    let teleports = matches!(
        kind,
        UtilityKind::Blink
            | UtilityKind::Teleport
            | UtilityKind::TeleportTo
            | UtilityKind::TeleportAway
            | UtilityKind::TeleportLevel
    );
    if teleports && state.current_level.flags.no_teleport {
        return SpellOutcome::Invalid;
    }
    if target_pos(state, ctx.target).is_none() {
        return SpellOutcome::Invalid;
    }

    let done = match kind {
        UtilityKind::Shriek => shriek(state, ctx),
        UtilityKind::Blink => teleport_monster(state, ctx.caster.id, 1, BLINK_DISTANCE),
        UtilityKind::Teleport => teleport_monster(state, ctx.caster.id, MAX_SIGHT / 2, TELEPORT_DISTANCE),
        UtilityKind::TeleportTo => teleport_to(state, ctx),
        UtilityKind::TeleportAway => teleport_away(state, ctx),
        UtilityKind::TeleportLevel => teleport_level(state, ctx),
        // Unlights the area around the victim, not the caster
        UtilityKind::Darkness => {
            state.current_level.darken(ctx.target_pos, DARKNESS_RADIUS);
            monster_message(
                state,
                ctx.caster.id,
                format!("{} gestures in shadow.", ctx.caster.cap_name()),
            );
            true
        }
        UtilityKind::RaiseDead => return raise_dead(state, ctx),
    };

    if done {
        SpellOutcome::applied(learnable)
    } else {
        SpellOutcome::Invalid
    }
}

fn shriek(state: &mut GameState, ctx: &CastContext) -> bool {
    for m in &mut state.current_level.monsters {
        m.timers.asleep = 0;
    }
    state.message(format!("{} makes a high-pitched shriek.", ctx.caster.cap_name()));
    true
}

/// Random empty tile whose distance from `center` lies in `min..=max`,
/// falling back to any closer tile
fn random_destination(state: &mut GameState, center: Position, min: i32, max: i32) -> Option<Position> {
    let player = state.player.pos;
    let mut tiles = state.current_level.empty_tiles_within(center, min, max, player);
    if tiles.is_empty() && min > 1 {
        tiles = state.current_level.empty_tiles_within(center, 1, max, player);
    }
    state.rng.choose(&tiles).copied()
}

/// Move a monster to a random tile near where it stands
fn teleport_monster(state: &mut GameState, id: MonsterId, min: i32, max: i32) -> bool {
    let Some(from) = state.current_level.monster(id).map(|m| m.pos) else {
        return false;
    };
    let Some(to) = random_destination(state, from, min, max) else {
        return false;
    };
    state.current_level.move_monster(id, to);
    state.visual(VisualEffect::Teleport { from, to });
    true
}

fn move_target(state: &mut GameState, target: TargetRef, to: Position) {
    let from = match target {
        TargetRef::Player => {
            let from = state.player.pos;
            state.player.pos = to;
            from
        }
        TargetRef::Monster(id) => {
            let from = state.current_level.monster(id).map_or(to, |m| m.pos);
            state.current_level.move_monster(id, to);
            from
        }
    };
    state.visual(VisualEffect::Teleport { from, to });
}

/// The target is summoned next to the caster
fn teleport_to(state: &mut GameState, ctx: &CastContext) -> bool {
    let Some(to) = random_destination(state, ctx.caster.pos, 1, 3) else {
        return false;
    };
    move_target(state, ctx.target, to);
    match ctx.target {
        TargetRef::Player => {
            state.message(format!("{} commands you to return.", ctx.caster.cap_name()))
        }
        TargetRef::Monster(id) => {
            let name = state
                .current_level
                .monster(id)
                .map(Monster::the_name)
                .unwrap_or_default();
            monster_message(
                state,
                ctx.caster.id,
                format!("{} commands {} to return.", ctx.caster.cap_name(), name),
            );
        }
    }
    true
}

/// The target is flung far across the floor
fn teleport_away(state: &mut GameState, ctx: &CastContext) -> bool {
    let Some(from) = target_pos(state, ctx.target) else {
        return false;
    };
    if let TargetRef::Monster(id) = ctx.target {
        if state
            .current_level
            .monster(id)
            .is_some_and(|m| m.has(RaceFlags::QUESTOR))
        {
            return false;
        }
    }
    let Some(to) = random_destination(state, from, MAX_SIGHT / 2, TELEPORT_AWAY_DISTANCE) else {
        return false;
    };
    move_target(state, ctx.target, to);
    if ctx.target == TargetRef::Player {
        state.message(format!("{} teleports you away.", ctx.caster.cap_name()));
    }
    true
}

/// The target leaves the floor: nexus resistance or a save prevents it
fn teleport_level(state: &mut GameState, ctx: &CastContext) -> bool {
    let (Some(profile), Some(save)) = (
        target_profile(state, ctx.target),
        target_save(state, ctx.target),
    ) else {
        return false;
    };
    let resisted = profile.has(Resistances::RES_NEXUS)
        || saving_throw(save, ctx.caster.rlev(), &mut state.rng);

    match ctx.target {
        TargetRef::Player => {
            if resisted {
                state.message("You resist the effects!");
            } else {
                state.message("You rise up through the ceiling.");
                state.player.pending_level_teleport = true;
            }
        }
        TargetRef::Monster(id) => {
            let name = monster_name(state, ctx.target).unwrap_or_default();
            let questor = state
                .current_level
                .monster(id)
                .is_some_and(|m| m.has(RaceFlags::QUESTOR));
            if resisted || questor {
                monster_message(state, id, format!("{} is unaffected!", name));
            } else {
                monster_message(state, id, format!("{} disappears!", name));
                tracing::debug!(monster = id.0, "level teleported");
                state.current_level.remove_monster(id);
            }
        }
    }
    true
}

fn raise_dead(state: &mut GameState, ctx: &CastContext) -> SpellOutcome {
    let corpses = state
        .current_level
        .take_corpses_within(ctx.caster.pos, RAISE_DEAD_RADIUS);
    let mut raised = 0;
    for corpse in corpses {
        let pos = if state.current_level.is_empty(corpse.pos, state.player.pos) {
            Some(corpse.pos)
        } else {
            random_destination(state, corpse.pos, 1, 2)
        };
        let Some(pos) = pos else {
            // Nowhere to stand; the corpse stays put
            state.current_level.add_corpse(corpse.pos, corpse.race);
            continue;
        };
        let mut monster = Monster::new(corpse.race, pos);
        monster.pet = ctx.caster.pet;
        state.current_level.add_monster(monster);
        raised += 1;
    }
    if raised == 0 {
        return SpellOutcome::Invalid;
    }
    monster_message(
        state,
        ctx.caster.id,
        format!("{} mumbles, and the dead rise!", ctx.caster.cap_name()),
    );
    SpellOutcome::damaged(raised, false)
}

// ============================================================================
// Player-only effects
// ============================================================================

pub(super) fn player_only(
    state: &mut GameState,
    ctx: &CastContext,
    effect: PlayerOnlyEffect,
) -> SpellOutcome {
    match effect {
        PlayerOnlyEffect::WorldStop => {
            if state.time_stop > 0 {
                return SpellOutcome::Invalid;
            }
            state.time_stop = state.rng.rnd(2) as u8 + 2;
            state.message(format!("{} shouts, 'The World!'", ctx.caster.cap_name()));
            state.message("Time has stopped!");
            SpellOutcome::applied(false)
        }
        PlayerOnlyEffect::Forget => {
            if saving_throw(state.player.save_skill, ctx.caster.rlev(), &mut state.rng) {
                state.message("You resist the effects!");
            } else {
                state.message("Your memories fade away.");
                state.current_level.forget_map();
            }
            SpellOutcome::applied(true)
        }
        PlayerOnlyEffect::Traps => {
            const KINDS: [TrapKind; 6] = [
                TrapKind::TrapDoor,
                TrapKind::Pit,
                TrapKind::PoisonDart,
                TrapKind::FireRune,
                TrapKind::TeleportRune,
                TrapKind::SummonRune,
            ];
            let mut laid = 0;
            for pos in ctx.target_pos.neighbors() {
                if state.current_level.monster_at(pos).is_some() {
                    continue;
                }
                let Some(&kind) = state.rng.choose(&KINDS) else {
                    continue;
                };
                if state.current_level.add_trap(pos, kind) {
                    laid += 1;
                }
            }
            if laid == 0 {
                return SpellOutcome::Invalid;
            }
            state.message(format!("{} cackles evilly.", ctx.caster.cap_name()));
            SpellOutcome::applied(false)
        }
    }
}
