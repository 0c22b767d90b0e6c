//! Spell learning
//!
//! Wraps dispatch with the two things a cast can teach: the player may copy
//! the spell, and the caster may note which of the player's resistances
//! it ran into.

use super::effect::{Effect, PlayerOnlyEffect, UtilityKind};
use super::{MonsterSpell, SpellId, SpellOutcome, TargetRef, cast_at_monster, cast_at_player};
use crate::combat::Resistances;
use crate::dungeon::Position;
use crate::monster::{MonsterId, RaceFlags, SmartFlags};
use crate::world::{GameState, player_can_see_monster};

/// Save skill at which casters note the player as hard to affect
const GOOD_SAVE_SKILL: i32 = 75;

/// A monster casts at the player, with learning
pub fn monspell_to_player(
    state: &mut GameState,
    id: SpellId,
    target_pos: Position,
    caster: MonsterId,
) -> SpellOutcome {
    let could_observe = player_can_see_monster(state, caster);
    let outcome = cast_at_player(state, id, target_pos, caster);
    after_cast(state, id, caster, TargetRef::Player, could_observe, outcome)
}

/// A monster casts at another monster, with learning
pub fn monspell_to_monster(
    state: &mut GameState,
    id: SpellId,
    target_pos: Position,
    caster: MonsterId,
    target: MonsterId,
    is_special_context: bool,
) -> SpellOutcome {
    let could_observe = player_can_see_monster(state, caster);
    let outcome = cast_at_monster(state, id, target_pos, caster, target, is_special_context);
    after_cast(
        state,
        id,
        caster,
        TargetRef::Monster(target),
        could_observe,
        outcome,
    )
}

fn after_cast(
    state: &mut GameState,
    id: SpellId,
    caster: MonsterId,
    target: TargetRef,
    could_observe: bool,
    outcome: SpellOutcome,
) -> SpellOutcome {
    let outcome = if could_observe {
        outcome
    } else {
        outcome.unlearnable()
    };
    if !outcome.is_learnable() {
        return outcome;
    }
    let Some(spell) = MonsterSpell::from_id(id) else {
        return outcome;
    };

    learn_spell(state, spell);
    if target == TargetRef::Player {
        update_smart_learn(state, caster, spell);
    }
    outcome
}

/// Let an imitating player copy a spell they just saw; true if learned
pub fn learn_spell(state: &mut GameState, spell: MonsterSpell) -> bool {
    let you = &state.player;
    if !you.class.can_imitate()
        || (state.options.learn_needs_stance && !you.learning)
        || !you.can_concentrate()
        || you.level < spell.info().level as i32
        || you.knows_spell(spell)
    {
        return false;
    }

    state.player.known_spells.insert(spell);
    state.message(format!("You have learned the spell of {}!", spell.name()));
    tracing::info!(%spell, known = state.player.known_spells.len(), "spell learned");
    true
}

/// Resistances whose presence changes how this spell plays out
pub fn relevant_resistances(spell: MonsterSpell) -> Resistances {
    let mut res = Resistances::empty();
    match spell.effect() {
        Effect::Bolt(kind) | Effect::Ball { kind, .. } | Effect::Breath(kind) | Effect::Curse(kind) => {
            if let Some(flag) = kind.resistance() {
                res |= flag;
            }
            if let Some(flag) = kind.immunity() {
                res |= flag;
            }
            if matches!(spell.effect(), Effect::Bolt(_)) && kind.is_reflectable() {
                res |= Resistances::REFLECT;
            }
        }
        Effect::Status(kind) => {
            if let Some(flag) = kind.blocked_by() {
                res |= flag;
            }
        }
        Effect::Utility(UtilityKind::TeleportLevel) => res |= Resistances::RES_NEXUS,
        _ => {}
    }
    res
}

/// Whether the player's saving throw is what decides this spell
fn save_matters(spell: MonsterSpell) -> bool {
    matches!(
        spell.effect(),
        Effect::Curse(_)
            | Effect::Status(_)
            | Effect::Utility(UtilityKind::TeleportLevel)
            | Effect::PlayerOnly(PlayerOnlyEffect::Forget)
    )
}

/// Record the player's displayed resistances in the caster's memory.
///
/// Returns true if the caster paid attention this time.
pub fn update_smart_learn(state: &mut GameState, caster: MonsterId, spell: MonsterSpell) -> bool {
    if !state.options.smart_learn || state.options.smart_cheat {
        return false;
    }
    let Some(flags) = state.current_level.monster(caster).map(|m| m.def().flags) else {
        return false;
    };
    if flags.contains(RaceFlags::STUPID) {
        return false;
    }
    if !flags.contains(RaceFlags::SMART) && state.rng.one_in(2) {
        return false;
    }

    let shown = state.player.displayed_resistances() & relevant_resistances(spell);
    let mut learned = SmartFlags::from_resistances(shown);
    if save_matters(spell) && state.player.save_skill >= GOOD_SAVE_SKILL {
        learned |= SmartFlags::GOOD_SAVE;
    }

    if let Some(m) = state.current_level.monster_mut(caster) {
        m.smart |= learned;
        tracing::trace!(monster = caster.0, %spell, ?learned, "smart learn");
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relevant_resistances() {
        assert_eq!(
            relevant_resistances(MonsterSpell::BoltFire),
            Resistances::RES_FIRE | Resistances::IM_FIRE | Resistances::REFLECT
        );
        assert_eq!(
            relevant_resistances(MonsterSpell::BreathFire),
            Resistances::RES_FIRE | Resistances::IM_FIRE
        );
        assert_eq!(relevant_resistances(MonsterSpell::Hold), Resistances::FREE_ACTION);
        assert_eq!(relevant_resistances(MonsterSpell::BoltMana), Resistances::REFLECT);
        assert!(relevant_resistances(MonsterSpell::Haste).is_empty());
    }
}
