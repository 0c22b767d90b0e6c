//! Top-level dispatch
//!
//! Both directions read the same descriptor table and feed the same
//! executor; only the [`TargetRef`] differs. Effects that make no sense
//! against a monster resolve to `Invalid` there.

use super::effect::Effect;
use super::{attack, curse, special, status, summon, support, utility};
use super::{CastContext, CasterSnapshot, MonsterSpell, SpellId, SpellOutcome, TargetRef};
use crate::dungeon::Position;
use crate::monster::MonsterId;
use crate::world::GameState;

/// A monster casts `id` at the player
pub fn cast_at_player(
    state: &mut GameState,
    id: SpellId,
    target_pos: Position,
    caster: MonsterId,
) -> SpellOutcome {
    dispatch(state, id, target_pos, caster, TargetRef::Player, false)
}

/// A monster casts `id` at another monster
///
/// `is_special_context` marks a cast made on the player's behalf (a pet or
/// commanded monster): its summons are pets and come in smaller groups.
pub fn cast_at_monster(
    state: &mut GameState,
    id: SpellId,
    target_pos: Position,
    caster: MonsterId,
    target: MonsterId,
    is_special_context: bool,
) -> SpellOutcome {
    dispatch(
        state,
        id,
        target_pos,
        caster,
        TargetRef::Monster(target),
        is_special_context,
    )
}

fn dispatch(
    state: &mut GameState,
    id: SpellId,
    target_pos: Position,
    caster: MonsterId,
    target: TargetRef,
    special: bool,
) -> SpellOutcome {
    let Some(spell) = MonsterSpell::from_id(id) else {
        tracing::warn!(spell = %id, caster = caster.0, "unknown spell id");
        return SpellOutcome::Invalid;
    };
    let Some(caster) = state.current_level.monster(caster).map(CasterSnapshot::from_monster) else {
        tracing::warn!(%spell, caster = caster.0, "caster not on this level");
        return SpellOutcome::Invalid;
    };
    if let TargetRef::Monster(target_id) = target {
        if target_id == caster.id || state.current_level.monster(target_id).is_none() {
            tracing::warn!(%spell, target = target_id.0, "no such target");
            return SpellOutcome::Invalid;
        }
    }
    if !state.current_level.is_valid_pos(target_pos) {
        tracing::warn!(%spell, %target_pos, "target position off the map");
        return SpellOutcome::Invalid;
    }

    tracing::debug!(%spell, caster = caster.id.0, ?target, "cast");
    let ctx = CastContext {
        spell,
        caster,
        target,
        target_pos,
        special,
    };
    resolve(state, &ctx)
}

/// Run the primitive the descriptor table names for this spell
pub fn resolve(state: &mut GameState, ctx: &CastContext) -> SpellOutcome {
    match ctx.spell.effect() {
        Effect::Bolt(kind) => attack::bolt(state, ctx, kind),
        Effect::Ball { kind, radius } => attack::ball(state, ctx, kind, radius),
        Effect::Breath(kind) => attack::breath(state, ctx, kind),
        Effect::Curse(kind) => curse::curse(state, ctx, kind),
        Effect::Status(kind) => status::status(state, ctx, kind),
        Effect::Support(kind) => support::support(state, ctx, kind),
        Effect::Utility(kind) => utility::utility(state, ctx, kind),
        Effect::PlayerOnly(effect) => match ctx.target {
            TargetRef::Player => utility::player_only(state, ctx, effect),
            TargetRef::Monster(_) => SpellOutcome::Invalid,
        },
        Effect::Summon(kind) => summon::summon(state, ctx, kind),
        Effect::Scripted => special::special(state, ctx),
    }
}
