//! Bolts, balls and breaths

use super::damage::spell_damage;
use super::target::{damage_target, target_pos, target_profile};
use super::{CastContext, SpellOutcome, TargetRef};
use crate::combat::{DamageKind, Resistances, reduce_damage};
use crate::dungeon::Position;
use crate::world::{GameState, VisualEffect};

const BREATH_RADIUS: i32 = 2;
const POWERFUL_BREATH_RADIUS: i32 = 3;

/// Single-target bolt
pub(super) fn bolt(state: &mut GameState, ctx: &CastContext, kind: DamageKind) -> SpellOutcome {
    let Some(profile) = target_profile(state, ctx.target) else {
        return SpellOutcome::Invalid;
    };
    let to = target_pos(state, ctx.target).unwrap_or(ctx.target_pos);
    let learnable = kind.is_resistible() || kind.is_reflectable();

    let raw = spell_damage(ctx.spell, &ctx.caster, &mut state.rng);
    state.visual(VisualEffect::Bolt {
        from: ctx.caster.pos,
        to,
        kind,
    });

    if kind.is_reflectable() && profile.has(Resistances::REFLECT) {
        match ctx.target {
            TargetRef::Player => state.message("The attack bounces!"),
            TargetRef::Monster(id) => super::target::monster_message(
                state,
                id,
                format!("The {} bounces off.", kind.noun()),
            ),
        }
        return SpellOutcome::damaged(0, learnable);
    }

    let dam = reduce_damage(kind, raw, &profile, &mut state.rng);
    damage_target(state, &ctx.caster, ctx.target, dam, kind);
    SpellOutcome::damaged(dam, learnable)
}

/// Ball centred on the target point
pub(super) fn ball(
    state: &mut GameState,
    ctx: &CastContext,
    kind: DamageKind,
    radius: i32,
) -> SpellOutcome {
    let Some(profile) = target_profile(state, ctx.target) else {
        return SpellOutcome::Invalid;
    };
    let raw = spell_damage(ctx.spell, &ctx.caster, &mut state.rng);
    state.visual(VisualEffect::Ball {
        center: ctx.target_pos,
        radius,
        kind,
    });
    let dam = explode(state, ctx, kind, raw, radius, &profile);
    SpellOutcome::damaged(dam, kind.is_resistible())
}

/// Breath cone; wider for powerful breathers
pub(super) fn breath(state: &mut GameState, ctx: &CastContext, kind: DamageKind) -> SpellOutcome {
    let Some(profile) = target_profile(state, ctx.target) else {
        return SpellOutcome::Invalid;
    };
    let radius = if ctx.caster.is_powerful() {
        POWERFUL_BREATH_RADIUS
    } else {
        BREATH_RADIUS
    };
    let raw = spell_damage(ctx.spell, &ctx.caster, &mut state.rng);
    state.visual(VisualEffect::Breath {
        from: ctx.caster.pos,
        to: ctx.target_pos,
        radius,
        kind,
    });
    let dam = explode(state, ctx, kind, raw, radius, &profile);
    SpellOutcome::damaged(dam, kind.is_resistible())
}

/// Damage falloff at distance `d` from the centre
fn splash(raw: i32, d: i32) -> i32 {
    (raw + d) / (d + 1)
}

/// Falloff damage to everything in the radius that the centre can see,
/// except the caster. Returns the primary target's damage, 0 when the blast
/// does not reach it.
fn explode(
    state: &mut GameState,
    ctx: &CastContext,
    kind: DamageKind,
    raw: i32,
    radius: i32,
    profile: &crate::combat::ResistProfile,
) -> i32 {
    let center = ctx.target_pos;

    // Collateral victims are chosen before anyone is hurt
    let bystanders: Vec<(TargetRef, Position)> = state
        .current_level
        .monsters
        .iter()
        .filter(|m| m.id != ctx.caster.id && TargetRef::Monster(m.id) != ctx.target)
        .map(|m| (TargetRef::Monster(m.id), m.pos))
        .collect();

    let primary_pos = target_pos(state, ctx.target).unwrap_or(center);
    let dam = match blast_distance(state, center, primary_pos, radius) {
        Some(d) => {
            let dam = reduce_damage(kind, splash(raw, d), profile, &mut state.rng);
            damage_target(state, &ctx.caster, ctx.target, dam, kind);
            dam
        }
        None => 0,
    };

    for (victim, pos) in bystanders {
        hit_bystander(state, ctx, victim, pos, center, kind, raw, radius);
    }
    if ctx.target != TargetRef::Player {
        let pos = state.player.pos;
        hit_bystander(state, ctx, TargetRef::Player, pos, center, kind, raw, radius);
    }
    dam
}

/// Distance from the centre, if the blast reaches `pos`
fn blast_distance(state: &GameState, center: Position, pos: Position, radius: i32) -> Option<i32> {
    let d = pos.distance(&center);
    (d <= radius && state.current_level.has_line_of_sight(center, pos)).then_some(d)
}

#[allow(clippy::too_many_arguments)]
fn hit_bystander(
    state: &mut GameState,
    ctx: &CastContext,
    victim: TargetRef,
    pos: Position,
    center: Position,
    kind: DamageKind,
    raw: i32,
    radius: i32,
) {
    let Some(d) = blast_distance(state, center, pos, radius) else {
        return;
    };
    // The victim may have died to an earlier splash
    let Some(profile) = target_profile(state, victim) else {
        return;
    };
    let dam = reduce_damage(kind, splash(raw, d), &profile, &mut state.rng);
    damage_target(state, &ctx.caster, victim, dam, kind);
}
