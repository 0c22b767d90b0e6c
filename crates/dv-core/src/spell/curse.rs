//! Curses: mana drain, mind attacks, wound curses and the hand of doom
//!
//! Curses are not projected. A saving throw negates them entirely, which
//! is what makes them worth learning about.

use super::damage::{hand_of_doom_damage, spell_damage};
use super::target::{damage_target, monster_message, monster_name, target_profile, target_save};
use super::{CastContext, SpellOutcome, TargetRef};
use crate::combat::{DamageKind, Resistances, saving_throw};
use crate::monster::RaceFlags;
use crate::world::GameState;

pub(super) fn curse(state: &mut GameState, ctx: &CastContext, kind: DamageKind) -> SpellOutcome {
    let (Some(save), Some(profile)) = (
        target_save(state, ctx.target),
        target_profile(state, ctx.target),
    ) else {
        return SpellOutcome::Invalid;
    };

    if kind == DamageKind::DrainMana {
        return drain_mana(state, ctx);
    }

    let resisted = match kind {
        // Uniques shrug the hand of doom off
        DamageKind::HandOfDoom => {
            matches!(ctx.target, TargetRef::Monster(id)
                if state.current_level.monster(id).is_some_and(|m| m.has(RaceFlags::UNIQUE)))
                || saving_throw(save, ctx.caster.rlev(), &mut state.rng)
        }
        _ => saving_throw(save, ctx.caster.rlev(), &mut state.rng),
    };
    if resisted {
        match ctx.target {
            TargetRef::Player => state.message("You resist the effects!"),
            TargetRef::Monster(id) => {
                let name = monster_name(state, ctx.target).unwrap_or_default();
                monster_message(state, id, format!("{} resists!", name));
            }
        }
        return SpellOutcome::damaged(0, true);
    }

    let dam = match kind {
        DamageKind::HandOfDoom => {
            let hp = match ctx.target {
                TargetRef::Player => state.player.hp,
                TargetRef::Monster(id) => state.current_level.monster(id).map_or(0, |m| m.hp),
            };
            hand_of_doom_damage(hp, &mut state.rng)
        }
        _ => spell_damage(ctx.spell, &ctx.caster, &mut state.rng),
    };
    damage_target(state, &ctx.caster, ctx.target, dam, kind);

    // Mind attacks scramble the victim
    let confuses = matches!(kind, DamageKind::MindBlast | DamageKind::BrainSmash)
        && !profile.has(Resistances::RES_CONF);
    let slows = kind == DamageKind::BrainSmash && !profile.has(Resistances::FREE_ACTION);
    if confuses || slows {
        let turns = state.rng.rnd(4) as u16 + 4;
        match ctx.target {
            TargetRef::Player => {
                if confuses {
                    state.player.timers.confused = state.player.timers.confused.saturating_add(turns);
                }
                if slows {
                    state.player.timers.slow = state.player.timers.slow.saturating_add(turns);
                }
            }
            TargetRef::Monster(id) => {
                if let Some(m) = state.current_level.monster_mut(id) {
                    if confuses {
                        m.timers.confused = m.timers.confused.saturating_add(turns);
                    }
                    if slows {
                        m.timers.slow = m.timers.slow.saturating_add(turns);
                    }
                }
            }
        }
    }

    SpellOutcome::damaged(dam, true)
}

/// Drain the target's mana to heal the caster
fn drain_mana(state: &mut GameState, ctx: &CastContext) -> SpellOutcome {
    let amount = spell_damage(ctx.spell, &ctx.caster, &mut state.rng);
    let drained = match ctx.target {
        TargetRef::Player => {
            let lost = state.player.drain_mana(amount);
            if lost > 0 {
                state.message("Your mind is drained!");
            }
            lost
        }
        // Monsters have no mana pool; the caster still feeds
        TargetRef::Monster(_) => amount,
    };

    if drained > 0 {
        if let Some(caster) = state.current_level.monster_mut(ctx.caster.id) {
            caster.heal(drained * 6);
        }
        monster_message(
            state,
            ctx.caster.id,
            format!("{} appears healthier.", ctx.caster.cap_name()),
        );
    }
    SpellOutcome::damaged(drained, true)
}
