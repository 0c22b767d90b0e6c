//! Property tests for spell resolution
//!
//! Run with: cargo test -p dv-core --test spell_properties

use dv_core::combat::Resistances;
use dv_core::dungeon::{Level, Position};
use dv_core::monster::{Monster, MonsterId, RACES, RaceId, races};
use dv_core::player::{PlayerClass, You};
use dv_core::spell::{Effect, MonsterSpell, SpellId, monspell_to_monster, monspell_to_player};
use dv_core::{GameRng, GameState};
use proptest::prelude::*;
use strum::IntoEnumIterator;

// ============================================================================
// Helpers
// ============================================================================

fn setup(seed: u64, caster_race: RaceId, caster_pos: Position) -> (GameState, MonsterId, MonsterId) {
    let mut player = You::new(PlayerClass::BlueMage, 50);
    player.pos = Position::new(10, 10);
    player.learning = true;
    let mut state = GameState::with_level(player, Level::arena(10), GameRng::new(seed));
    let caster = state
        .current_level
        .add_monster(Monster::new(caster_race, caster_pos));
    let target = state
        .current_level
        .add_monster(Monster::new(races::CYBERDEMON, Position::new(12, 14)));
    (state, caster, target)
}

fn damaging_spells() -> Vec<MonsterSpell> {
    MonsterSpell::iter()
        .filter(|s| {
            matches!(
                s.effect(),
                Effect::Bolt(_) | Effect::Ball { .. } | Effect::Breath(_)
            )
        })
        .collect()
}

/// Everything that cuts down damage of this spell's kind
fn protection_for(spell: MonsterSpell) -> Resistances {
    let kind = match spell.effect() {
        Effect::Bolt(k) | Effect::Breath(k) | Effect::Ball { kind: k, .. } => k,
        _ => return Resistances::empty(),
    };
    kind.resistance().unwrap_or(Resistances::empty()) | kind.immunity().unwrap_or(Resistances::empty())
}

// ============================================================================
// Outcome consistency
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// A spell can only teach something if it actually happened
    #[test]
    fn prop_learnable_implies_valid(
        seed in any::<u64>(),
        raw_id in any::<u8>(),
        race_idx in 0usize..RACES.len(),
        at_player in any::<bool>(),
    ) {
        let (mut state, caster, target) = setup(seed, RaceId(race_idx as u16), Position::new(14, 10));
        let pos = if at_player { state.player.pos } else { Position::new(12, 14) };
        let outcome = if at_player {
            monspell_to_player(&mut state, SpellId(raw_id), pos, caster)
        } else {
            monspell_to_monster(&mut state, SpellId(raw_id), pos, caster, target, false)
        };
        prop_assert!(!outcome.is_learnable() || outcome.is_valid());
        if MonsterSpell::from_id(SpellId(raw_id)).is_none() {
            prop_assert!(!outcome.is_valid());
        }
    }

    /// Casts the player cannot see never add to the spellbook
    #[test]
    fn prop_unobserved_casts_teach_nothing(
        seed in any::<u64>(),
        raw_id in 0u8..96,
        at_player in any::<bool>(),
    ) {
        // Well beyond sight range
        let (mut state, caster, target) = setup(seed, races::LICH, Position::new(70, 10));
        let outcome = if at_player {
            let pos = state.player.pos;
            monspell_to_player(&mut state, SpellId(raw_id), pos, caster)
        } else {
            monspell_to_monster(&mut state, SpellId(raw_id), Position::new(12, 14), caster, target, false)
        };
        prop_assert!(!outcome.is_learnable());
        prop_assert!(state.player.known_spells.is_empty());
    }
}

// ============================================================================
// Resistance monotonicity
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Gaining protection never increases damage taken by the player
    #[test]
    fn prop_player_protection_never_hurts_more(
        seed in any::<u64>(),
        pick in any::<prop::sample::Index>(),
    ) {
        let spells = damaging_spells();
        let spell = spells[pick.index(spells.len())];

        let (mut bare, caster, _) = setup(seed, races::LICH, Position::new(14, 10));
        let pos = bare.player.pos;
        let unprotected = monspell_to_player(&mut bare, spell.id(), pos, caster);

        let (mut armoured, caster, _) = setup(seed, races::LICH, Position::new(14, 10));
        armoured.player.innate = protection_for(spell);
        let protected = monspell_to_player(&mut armoured, spell.id(), pos, caster);

        let worse = unprotected.damage().unwrap_or(0);
        let better = protected.damage().unwrap_or(0);
        prop_assert!(better <= worse, "{spell}: {better} > {worse}");
        prop_assert!(armoured.player.hp >= bare.player.hp);
    }

    /// Fire-immune monsters shrug off every fire spell the same roll
    /// would have landed on an unprotected one
    #[test]
    fn prop_monster_immunity_zeroes_damage(
        seed in any::<u64>(),
        spell in prop::sample::select(vec![
            MonsterSpell::BoltFire,
            MonsterSpell::BallFire,
            MonsterSpell::BreathFire,
        ]),
    ) {
        let target_pos = Position::new(12, 13);
        let cast = |race: RaceId| {
            let (mut state, caster, _) = setup(seed, races::LICH, Position::new(14, 10));
            let target = state
                .current_level
                .add_monster(Monster::new(race, target_pos));
            monspell_to_monster(&mut state, spell.id(), target_pos, caster, target, false)
        };

        let unprotected = cast(races::DARK_ELVEN_PRIEST).damage().unwrap_or(0);
        let protected = cast(races::FIRE_HOUND).damage().unwrap_or(0);
        prop_assert!(unprotected > 0, "{spell} did no damage");
        prop_assert_eq!(protected, 0);
    }

    /// Reduction is monotone in the resistance set for every kind
    #[test]
    fn prop_reduction_is_monotone(
        seed in any::<u64>(),
        dam in 0i32..2000,
        weak_bits in any::<u32>(),
        extra_bits in any::<u32>(),
    ) {
        use dv_core::combat::{DamageKind, ResistProfile, reduce_damage};

        let weak = Resistances::from_bits_truncate(weak_bits);
        let strong = weak | Resistances::from_bits_truncate(extra_bits);
        for kind in DamageKind::iter() {
            let a = reduce_damage(kind, dam, &ResistProfile::innate(weak), &mut GameRng::new(seed));
            let b = reduce_damage(kind, dam, &ResistProfile::innate(strong), &mut GameRng::new(seed));
            prop_assert!(b <= a, "{kind}: {b} > {a}");
            prop_assert!(a <= dam);
        }
    }
}
