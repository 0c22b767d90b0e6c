//! Spell scenarios
//!
//! End-to-end casts on a small arena, checking what the player sees and
//! what is left on the floor afterwards.

use dv_core::combat::Resistances;
use dv_core::dungeon::{CellType, Level, Position};
use dv_core::monster::{Monster, MonsterId, RaceId, races};
use dv_core::player::{PlayerClass, You};
use dv_core::spell::{
    MonsterSpell, SpellOutcome, cast_at_monster, cast_at_player, monspell_to_monster, monspell_to_player,
};
use dv_core::{GameRng, GameState};

// ============================================================================
// Helpers
// ============================================================================

const PLAYER_POS: Position = Position::new(10, 10);

fn blue_mage(seed: u64) -> GameState {
    let mut player = You::new(PlayerClass::BlueMage, 50);
    player.pos = PLAYER_POS;
    player.learning = true;
    GameState::with_level(player, Level::arena(15), GameRng::new(seed))
}

fn spawn(state: &mut GameState, race: RaceId, x: i8, y: i8) -> MonsterId {
    state
        .current_level
        .add_monster(Monster::new(race, Position::new(x, y)))
}

fn count_race(state: &GameState, race: RaceId) -> usize {
    state
        .current_level
        .monsters
        .iter()
        .filter(|m| m.race == race)
        .count()
}

// ============================================================================
// Test 1: Visibility and learning
// ============================================================================

#[test]
fn test_unseen_bolt_still_hurts_but_teaches_nothing() {
    let mut state = blue_mage(11);
    let caster = spawn(&mut state, races::DARK_ELVEN_PRIEST, 20, 10);
    state
        .current_level
        .set_terrain(Position::new(15, 10), CellType::Granite);

    let hp_before = state.player.hp;
    let outcome = monspell_to_player(&mut state, MonsterSpell::BoltFire.id(), PLAYER_POS, caster);

    assert!(outcome.is_valid());
    assert!(!outcome.is_learnable(), "an unseen cast must not be learnable");
    let damage = outcome.damage().unwrap_or(0);
    assert!(damage > 0, "fire bolt should hurt an unprotected player");
    assert_eq!(hp_before - state.player.hp, damage);
    assert!(state.player.known_spells.is_empty());
}

#[test]
fn test_seen_bolt_is_learned() {
    let mut state = blue_mage(11);
    let caster = spawn(&mut state, races::DARK_ELVEN_PRIEST, 20, 10);

    let outcome = monspell_to_player(&mut state, MonsterSpell::BoltFire.id(), PLAYER_POS, caster);

    assert!(outcome.is_learnable());
    assert!(state.player.knows_spell(MonsterSpell::BoltFire));
    assert!(
        state
            .messages
            .iter()
            .any(|m| m == "You have learned the spell of fire bolt!"),
        "messages: {:?}",
        state.messages
    );
}

#[test]
fn test_reflected_bolt_does_nothing_but_is_still_learnable() {
    let mut state = blue_mage(3);
    state.player.innate = Resistances::REFLECT;
    let caster = spawn(&mut state, races::LICH, 14, 10);
    let hp_before = state.player.hp;

    let outcome = cast_at_player(&mut state, MonsterSpell::BoltMana.id(), PLAYER_POS, caster);

    assert_eq!(outcome, SpellOutcome::damaged(0, true));
    assert_eq!(state.player.hp, hp_before);
    assert!(state.messages.iter().any(|m| m == "The attack bounces!"));
}

// ============================================================================
// Test 2: Banor=Rupart
// ============================================================================

#[test]
fn test_split_conserves_hit_points() {
    let mut state = blue_mage(7);
    let whole = spawn(&mut state, races::BANOR_RUPART, 20, 12);
    let (hp, hp_max) = {
        let m = state.current_level.monster(whole).expect("spawned");
        (m.hp, m.hp_max)
    };

    let outcome = cast_at_player(&mut state, MonsterSpell::Special.id(), PLAYER_POS, whole);

    assert!(outcome.is_valid());
    assert!(state.current_level.monster(whole).is_none(), "original should be gone");
    assert_eq!(count_race(&state, races::BANOR_RUPART), 0);
    assert_eq!(count_race(&state, races::BANOR), 1);
    assert_eq!(count_race(&state, races::RUPART), 1);

    let halves: Vec<&Monster> = state.current_level.monsters.iter().collect();
    assert_eq!(halves.iter().map(|m| m.hp).sum::<i32>(), hp);
    assert_eq!(halves.iter().map(|m| m.hp_max).sum::<i32>(), hp_max);
    let banor = halves.iter().find(|m| m.race == races::BANOR).expect("banor");
    assert_eq!(banor.pos, Position::new(20, 12));
}

#[test]
fn test_wounded_banor_rupart_does_not_split() {
    let mut state = blue_mage(7);
    let whole = spawn(&mut state, races::BANOR_RUPART, 20, 12);
    state.current_level.monster_mut(whole).expect("spawned").hp -= 1;
    let before = state.current_level.clone();

    let outcome = cast_at_player(&mut state, MonsterSpell::Special.id(), PLAYER_POS, whole);

    assert_eq!(outcome, SpellOutcome::Invalid);
    assert_eq!(state.current_level, before);
}

#[test]
fn test_split_then_merge_restores_whole() {
    let mut state = blue_mage(9);
    let whole = spawn(&mut state, races::BANOR_RUPART, 20, 12);
    assert!(cast_at_player(&mut state, MonsterSpell::Special.id(), PLAYER_POS, whole).is_valid());

    let rupart = state
        .current_level
        .monsters
        .iter()
        .find(|m| m.race == races::RUPART)
        .map(|m| m.id)
        .expect("rupart");
    let outcome = cast_at_player(&mut state, MonsterSpell::Special.id(), PLAYER_POS, rupart);

    assert!(outcome.is_valid());
    assert_eq!(count_race(&state, races::BANOR), 0);
    assert_eq!(count_race(&state, races::RUPART), 0);
    assert_eq!(count_race(&state, races::BANOR_RUPART), 1);
    let merged = &state.current_level.monsters[0];
    assert_eq!(merged.hp, races::BANOR_RUPART.def().hp);
    assert!(merged.is_undamaged());
}

#[test]
fn test_merge_needs_both_halves_unhurt() {
    let mut state = blue_mage(9);
    let banor = spawn(&mut state, races::BANOR, 20, 12);
    let rupart = spawn(&mut state, races::RUPART, 22, 12);
    state.current_level.monster_mut(rupart).expect("spawned").hp -= 5;

    let outcome = cast_at_player(&mut state, MonsterSpell::Special.id(), PLAYER_POS, banor);

    assert_eq!(outcome, SpellOutcome::Invalid);
    assert_eq!(state.current_level.monsters.len(), 2);
}

// ============================================================================
// Test 3: Other specials
// ============================================================================

#[test]
fn test_rolento_throws_grenades() {
    let mut state = blue_mage(21);
    let rolento = spawn(&mut state, races::ROLENTO, 16, 10);

    let outcome = cast_at_player(&mut state, MonsterSpell::Special.id(), PLAYER_POS, rolento);

    let thrown = count_race(&state, races::GRENADE);
    assert!((2..=4).contains(&thrown), "threw {thrown}");
    assert_eq!(outcome.damage(), Some(thrown as i32));
}

#[test]
fn test_great_eagle_drops_the_player() {
    let mut state = blue_mage(4);
    let eagle = spawn(&mut state, races::GREAT_EAGLE, 11, 10);
    let hp_before = state.player.hp;

    let outcome = cast_at_player(&mut state, MonsterSpell::Special.id(), PLAYER_POS, eagle);

    let damage = outcome.damage().expect("seize reports damage");
    assert!((4..=32).contains(&damage));
    assert_eq!(hp_before - state.player.hp, damage);
    assert!(state.player.pos.distance(&PLAYER_POS) >= 2);
    let perch = state.current_level.monster(eagle).expect("eagle").pos;
    assert!(perch.is_adjacent(&state.player.pos));
}

#[test]
fn test_flying_player_lands_softly() {
    let mut state = blue_mage(4);
    state.player.flying = true;
    let eagle = spawn(&mut state, races::GREAT_EAGLE, 11, 10);
    let hp_before = state.player.hp;

    let outcome = cast_at_player(&mut state, MonsterSpell::Special.id(), PLAYER_POS, eagle);

    assert_eq!(outcome.damage(), Some(0));
    assert_eq!(state.player.hp, hp_before);
}

#[test]
fn test_special_without_script_is_invalid() {
    let mut state = blue_mage(4);
    let kobold = spawn(&mut state, races::KOBOLD_SHAMAN, 12, 10);
    assert_eq!(
        cast_at_player(&mut state, MonsterSpell::Special.id(), PLAYER_POS, kobold),
        SpellOutcome::Invalid
    );
}

// ============================================================================
// Test 4: Summons and teleports
// ============================================================================

#[test]
fn test_summons_blocked_on_no_summon_floor() {
    let mut state = blue_mage(2);
    state.current_level.flags.no_summon = true;
    let lich = spawn(&mut state, races::LICH, 14, 10);

    for spell in [MonsterSpell::SummonUndead, MonsterSpell::SummonMonsters] {
        assert_eq!(
            cast_at_player(&mut state, spell.id(), PLAYER_POS, lich),
            SpellOutcome::Invalid
        );
    }
    assert_eq!(state.current_level.monsters.len(), 1);
}

#[test]
fn test_pet_summons_come_in_small_friendly_groups() {
    let mut state = blue_mage(2);
    let lich = spawn(&mut state, races::LICH, 14, 10);
    let foe = spawn(&mut state, races::CYBERDEMON, 30, 10);

    let outcome = monspell_to_monster(
        &mut state,
        MonsterSpell::SummonMonsters.id(),
        Position::new(30, 10),
        lich,
        foe,
        true,
    );

    let summoned: Vec<&Monster> = state
        .current_level
        .monsters
        .iter()
        .filter(|m| m.id != lich && m.id != foe)
        .collect();
    assert_eq!(outcome.damage(), Some(summoned.len() as i32));
    assert!(!summoned.is_empty() && summoned.len() <= 2);
    assert!(summoned.iter().all(|m| m.pet));
    assert!(!outcome.is_learnable());
}

#[test]
fn test_level_teleport_queues_for_the_game_loop() {
    // Even a hopeless save succeeds one time in twenty
    let mut lifted = 0;
    for seed in 0..10 {
        let mut state = blue_mage(seed);
        state.player.save_skill = -100;
        let lich = spawn(&mut state, races::LICH, 14, 10);

        let outcome = cast_at_player(&mut state, MonsterSpell::TeleportLevel.id(), PLAYER_POS, lich);

        assert!(outcome.is_learnable());
        if state.player.pending_level_teleport {
            lifted += 1;
        }
    }
    assert!(lifted >= 5, "only {lifted} of 10 casts took effect");
}

#[test]
fn test_nexus_resistance_blocks_level_teleport() {
    let mut state = blue_mage(2);
    state.player.innate = Resistances::RES_NEXUS;
    let lich = spawn(&mut state, races::LICH, 14, 10);

    let outcome = cast_at_player(&mut state, MonsterSpell::TeleportLevel.id(), PLAYER_POS, lich);

    assert!(outcome.is_valid());
    assert!(!state.player.pending_level_teleport);
    assert!(state.messages.iter().any(|m| m == "You resist the effects!"));
}

#[test]
fn test_world_stop_only_once() {
    let mut state = blue_mage(2);
    let dio = spawn(&mut state, races::DIO, 14, 10);

    assert!(cast_at_player(&mut state, MonsterSpell::WorldStop.id(), PLAYER_POS, dio).is_valid());
    assert!((3..=4).contains(&state.time_stop));
    assert_eq!(
        cast_at_player(&mut state, MonsterSpell::WorldStop.id(), PLAYER_POS, dio),
        SpellOutcome::Invalid
    );
}

// ============================================================================
// Test 5: Area effects
// ============================================================================

fn fire_ball_at_player(seed: u64, center: Position) -> (GameState, i32) {
    let mut state = blue_mage(seed);
    state.player.innate = Resistances::empty();
    let lich = spawn(&mut state, races::LICH, 14, 10);
    let outcome = cast_at_player(&mut state, MonsterSpell::BallFire.id(), center, lich);
    assert!(outcome.is_valid());
    let damage = outcome.damage().unwrap_or(-1);
    (state, damage)
}

#[test]
fn test_distant_ball_misses_the_player() {
    let (state, damage) = fire_ball_at_player(5, Position::new(60, 20));
    assert_eq!(damage, 0);
    assert_eq!(state.player.hp, state.player.hp_max);
}

#[test]
fn test_off_centre_ball_falls_off_for_the_player() {
    for seed in 0..10 {
        let (_, full) = fire_ball_at_player(seed, PLAYER_POS);
        let (state, near) = fire_ball_at_player(seed, Position::new(11, 10));
        assert!(full > 0);
        assert_eq!(near, (full + 1) / 2, "seed {seed}");
        assert_eq!(state.player.hp_max - state.player.hp, near);
    }
}

#[test]
fn test_off_centre_ball_falls_off_for_a_monster() {
    let cast = |seed: u64, center: Position| {
        let mut state = blue_mage(seed);
        let lich = spawn(&mut state, races::LICH, 26, 10);
        let priest = spawn(&mut state, races::DARK_ELVEN_PRIEST, 30, 10);
        let outcome = cast_at_monster(&mut state, MonsterSpell::BallFire.id(), center, lich, priest, false);
        (state, priest, outcome.damage().unwrap_or(-1))
    };
    for seed in 0..10 {
        let (_, _, full) = cast(seed, Position::new(30, 10));
        let (_, _, near) = cast(seed, Position::new(30, 12));
        assert!(full > 0);
        assert_eq!(near, (full + 2) / 3, "seed {seed}");
    }

    let (state, priest, far) = cast(1, Position::new(40, 10));
    assert_eq!(far, 0);
    let priest = state.current_level.monster(priest).expect("priest untouched");
    assert!(priest.is_undamaged());
}

#[test]
fn test_ball_splashes_bystanders_in_sight() {
    let mut state = blue_mage(8);
    let lich = spawn(&mut state, races::LICH, 26, 10);
    let target = spawn(&mut state, races::DARK_ELVEN_PRIEST, 30, 10);
    let near = spawn(&mut state, races::DARK_ELVEN_PRIEST, 30, 11);
    let far = spawn(&mut state, races::DARK_ELVEN_PRIEST, 30, 15);
    let shielded = spawn(&mut state, races::DARK_ELVEN_PRIEST, 32, 10);
    state
        .current_level
        .set_terrain(Position::new(31, 10), CellType::Granite);

    let outcome = cast_at_monster(&mut state, MonsterSpell::BallFire.id(), Position::new(30, 10), lich, target, false);
    assert!(outcome.damage().unwrap_or(0) > 0);

    let hurt = |id: MonsterId| state.current_level.monster(id).is_none_or(|m| !m.is_undamaged());
    assert!(hurt(near), "adjacent bystander should be splashed");
    assert!(!hurt(far), "bystander outside the radius was hit");
    assert!(!hurt(shielded), "wall should shield the bystander");
    assert!(!hurt(lich), "caster hit by its own ball");
}

#[test]
fn test_player_is_collateral_of_ball_at_monster() {
    let mut state = blue_mage(4);
    state.player.innate = Resistances::empty();
    let lich = spawn(&mut state, races::LICH, 14, 10);
    let priest = spawn(&mut state, races::DARK_ELVEN_PRIEST, 11, 10);

    let outcome = cast_at_monster(&mut state, MonsterSpell::BallFire.id(), Position::new(11, 10), lich, priest, false);

    assert!(outcome.damage().unwrap_or(0) > 0);
    assert!(state.player.hp < state.player.hp_max);
    assert!(state.messages.iter().any(|m| m == "You are hit by fire!"), "messages: {:?}", state.messages);
}

#[test]
fn test_player_outside_ball_at_monster_is_spared() {
    let mut state = blue_mage(4);
    let lich = spawn(&mut state, races::LICH, 26, 10);
    let priest = spawn(&mut state, races::DARK_ELVEN_PRIEST, 30, 10);

    cast_at_monster(&mut state, MonsterSpell::BallFire.id(), Position::new(30, 10), lich, priest, false);

    assert_eq!(state.player.hp, state.player.hp_max);
}

// ============================================================================
// Test 6: Long-running timers
// ============================================================================

#[test]
fn test_mind_blast_confusion_saturates() {
    let mut maxed = 0;
    for seed in 0..20 {
        let mut state = blue_mage(seed);
        state.player.save_skill = 0;
        state.player.timers.confused = u16::MAX - 1;
        let lich = spawn(&mut state, races::LICH, 14, 10);

        assert!(cast_at_player(&mut state, MonsterSpell::MindBlast.id(), PLAYER_POS, lich).is_valid());
        assert!(state.player.timers.confused >= u16::MAX - 1);
        if state.player.timers.confused == u16::MAX {
            maxed += 1;
        }
    }
    assert!(maxed > 0);
}

#[test]
fn test_brain_smash_on_monster_saturates() {
    let mut maxed = 0;
    for seed in 0..40 {
        let mut state = blue_mage(seed);
        let lich = spawn(&mut state, races::LICH, 26, 10);
        let victim = spawn(&mut state, races::CYBERDEMON, 30, 10);
        if let Some(m) = state.current_level.monster_mut(victim) {
            m.timers.confused = u16::MAX - 1;
            m.timers.slow = u16::MAX - 1;
        }

        cast_at_monster(&mut state, MonsterSpell::BrainSmash.id(), Position::new(30, 10), lich, victim, false);
        let Some(m) = state.current_level.monster(victim) else {
            continue;
        };
        assert!(m.timers.confused >= u16::MAX - 1);
        assert!(m.timers.slow >= u16::MAX - 1);
        if m.timers.slow == u16::MAX {
            maxed += 1;
        }
    }
    assert!(maxed > 0);
}

// ============================================================================
// Test 7: Darkness
// ============================================================================

#[test]
fn test_darkness_falls_on_the_victim() {
    let mut state = blue_mage(6);
    let priest = spawn(&mut state, races::DARK_ELVEN_PRIEST, 20, 10);

    let outcome = cast_at_player(&mut state, MonsterSpell::Darkness.id(), PLAYER_POS, priest);

    assert!(outcome.is_valid());
    let level = &state.current_level;
    assert!(!level.cell(PLAYER_POS).is_lit());
    assert!(!level.cell(Position::new(13, 10)).is_lit());
    assert!(level.cell(Position::new(20, 10)).is_lit(), "caster's tile went dark");
    assert!(level.view_dirty);
}
