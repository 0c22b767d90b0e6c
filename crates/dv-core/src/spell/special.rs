//! Caster-specific scripted specials
//!
//! A closed set of behaviours keyed on the caster's identity. Casters
//! without a scripted behaviour get `Invalid`.

use super::summon::place_monster;
use super::target::{damage_target, monster_message, target_pos};
use super::{CastContext, SpellOutcome, TargetRef};
use crate::combat::DamageKind;
use crate::dungeon::{Position, earthquake};
use crate::monster::{Monster, RaceFlags, races};
use crate::world::{GameState, VisualEffect};
use crate::{EARTHSHAKER_QUAKE_RADIUS, TELEPORT_DISTANCE};

pub(super) fn special(state: &mut GameState, ctx: &CastContext) -> SpellOutcome {
    match ctx.caster.race {
        races::BANOR_RUPART => split(state, ctx),
        races::BANOR | races::RUPART => merge(state, ctx),
        races::ROLENTO => grenades(state, ctx),
        races::EARTHSHAKER => {
            monster_message(
                state,
                ctx.caster.id,
                format!("{} pounds the ground.", ctx.caster.cap_name()),
            );
            if earthquake(state, ctx.target_pos, EARTHSHAKER_QUAKE_RADIUS, Some(ctx.caster.id)) {
                SpellOutcome::applied(false)
            } else {
                SpellOutcome::Invalid
            }
        }
        _ if ctx.caster.symbol == 'B' && ctx.caster.flags.contains(RaceFlags::FLYING) => {
            seize_and_drop(state, ctx)
        }
        _ => SpellOutcome::Invalid,
    }
}

/// Split a full-strength Banor=Rupart into its two halves
fn split(state: &mut GameState, ctx: &CastContext) -> SpellOutcome {
    let Some(original) = state.current_level.monster(ctx.caster.id) else {
        return SpellOutcome::Invalid;
    };
    if !original.is_undamaged() {
        return SpellOutcome::Invalid;
    }
    let (pos, hp, hp_max, pet) = (original.pos, original.hp, original.hp_max, original.pet);

    // Rupart needs a tile of his own
    let player = state.player.pos;
    let tiles = state.current_level.empty_tiles_within(pos, 1, 2, player);
    let Some(&rupart_pos) = state.rng.choose(&tiles) else {
        return SpellOutcome::Invalid;
    };

    state.current_level.remove_monster(ctx.caster.id);

    let mut banor = Monster::new(races::BANOR, pos);
    banor.hp = (hp + 1) / 2;
    banor.hp_max = (hp_max + 1) / 2;
    banor.pet = pet;
    let mut rupart = Monster::new(races::RUPART, rupart_pos);
    rupart.hp = hp / 2;
    rupart.hp_max = hp_max / 2;
    rupart.pet = pet;

    let banor = state.current_level.add_monster(banor);
    let rupart = state.current_level.add_monster(rupart);
    tracing::debug!(banor = banor.0, rupart = rupart.0, "split");
    monster_message(state, banor, "Banor=Rupart splits in two!");
    SpellOutcome::applied(false)
}

/// Rejoin Banor and Rupart when both are unhurt
fn merge(state: &mut GameState, ctx: &CastContext) -> SpellOutcome {
    let partner_race = if ctx.caster.race == races::BANOR {
        races::RUPART
    } else {
        races::BANOR
    };
    let level = &state.current_level;
    let (Some(me), Some(partner)) = (
        level.monster(ctx.caster.id),
        level.monsters.iter().find(|m| m.race == partner_race),
    ) else {
        return SpellOutcome::Invalid;
    };
    if !me.is_undamaged() || !partner.is_undamaged() {
        return SpellOutcome::Invalid;
    }

    let partner_id = partner.id;
    let mut whole = Monster::new(races::BANOR_RUPART, me.pos);
    whole.hp = me.hp + partner.hp;
    whole.hp_max = me.hp_max + partner.hp_max;
    whole.pet = me.pet;

    state.current_level.remove_monster(ctx.caster.id);
    state.current_level.remove_monster(partner_id);
    let id = state.current_level.add_monster(whole);
    tracing::debug!(monster = id.0, "merged");
    monster_message(state, id, "Banor and Rupart combine into one!");
    SpellOutcome::applied(false)
}

/// Rolento scatters live grenades around the target
fn grenades(state: &mut GameState, ctx: &CastContext) -> SpellOutcome {
    if state.current_level.flags.no_summon {
        return SpellOutcome::Invalid;
    }
    let count = state.rng.rnd(3) + 1;
    let mut placed = 0;
    for _ in 0..count {
        if !place_monster(state, races::GRENADE, ctx.target_pos, ctx.caster.pet) {
            break;
        }
        placed += 1;
    }
    if placed == 0 {
        return SpellOutcome::Invalid;
    }
    monster_message(
        state,
        ctx.caster.id,
        format!("{} throws some hand grenades.", ctx.caster.cap_name()),
    );
    SpellOutcome::damaged(placed, false)
}

/// A great bird snatches the target, flies off with it and lets go
fn seize_and_drop(state: &mut GameState, ctx: &CastContext) -> SpellOutcome {
    if state.current_level.flags.no_teleport {
        return SpellOutcome::Invalid;
    }
    let Some(from) = target_pos(state, ctx.target) else {
        return SpellOutcome::Invalid;
    };
    let (flies, pinned) = match ctx.target {
        TargetRef::Player => (state.player.flying, false),
        TargetRef::Monster(id) => state.current_level.monster(id).map_or((false, true), |m| {
            (
                m.has(RaceFlags::FLYING),
                m.has(RaceFlags::NEVER_MOVE) || m.has(RaceFlags::QUESTOR),
            )
        }),
    };
    if pinned {
        return SpellOutcome::Invalid;
    }

    let Some((drop, perch)) = landing_site(state, from) else {
        return SpellOutcome::Invalid;
    };

    match ctx.target {
        TargetRef::Player => {
            state.message(format!(
                "{} snatches you, soars into the sky, and drops you.",
                ctx.caster.cap_name()
            ));
            state.player.pos = drop;
        }
        TargetRef::Monster(id) => {
            state.current_level.move_monster(id, drop);
        }
    }
    state.current_level.move_monster(ctx.caster.id, perch);
    state.visual(VisualEffect::Teleport { from, to: drop });

    let dam = if flies {
        if ctx.target == TargetRef::Player {
            state.message("You float gently down to the ground.");
        }
        0
    } else {
        state.rng.dice(4, 8) as i32
    };
    damage_target(state, &ctx.caster, ctx.target, dam, DamageKind::Force);
    SpellOutcome::damaged(dam, false)
}

/// A free tile for the victim with a free neighbour for the bird
fn landing_site(state: &mut GameState, from: Position) -> Option<(Position, Position)> {
    let player = state.player.pos;
    let mut tiles = state
        .current_level
        .empty_tiles_within(from, 2, TELEPORT_DISTANCE, player);
    state.rng.shuffle(&mut tiles);
    tiles.into_iter().find_map(|drop| {
        drop.neighbors()
            .find(|n| state.current_level.is_empty(*n, player))
            .map(|perch| (drop, perch))
    })
}
