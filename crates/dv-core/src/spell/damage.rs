//! Damage formulas
//!
//! All rolls depend only on the caster, so a spell aimed at the player and
//! the same spell aimed at a monster draw identical numbers.

use super::{CasterSnapshot, MonsterSpell};
use crate::rng::GameRng;

/// Breath damage: a share of the caster's current hit points, capped
fn breath(caster: &CasterSnapshot, divisor: i32, cap: i32) -> i32 {
    (caster.hp / divisor).clamp(0, cap)
}

/// Base damage of a spell before resistances
///
/// Spells that deal no direct damage return 0.
pub fn spell_damage(spell: MonsterSpell, caster: &CasterSnapshot, rng: &mut GameRng) -> i32 {
    use MonsterSpell as S;

    let rlev = caster.rlev();
    let powerful = caster.is_powerful();
    let rnd = |rng: &mut GameRng, n: i32| rng.rnd(n.max(0) as u32) as i32;
    let dice = |rng: &mut GameRng, n: u32, m: u32| rng.dice(n, m) as i32;
    // Divisor of the level bonus on the stronger bolts
    let div = if powerful { 2 } else { 3 };

    match spell {
        S::Rocket => (caster.hp / 4).clamp(0, 800),
        S::Shoot => dice(rng, 1 + rlev as u32 / 5, 6),

        S::BreathAcid | S::BreathElec | S::BreathFire | S::BreathCold => breath(caster, 3, 1600),
        S::BreathPoison | S::BreathNuke => breath(caster, 3, 800),
        S::BreathNexus | S::BreathMana => breath(caster, 3, 250),
        S::BreathTime => breath(caster, 3, 150),
        S::BreathGravity => breath(caster, 3, 200),
        S::BreathNether => breath(caster, 6, 550),
        S::BreathLight | S::BreathDark | S::BreathConfusion => breath(caster, 6, 400),
        S::BreathSound | S::BreathDisenchant | S::BreathShards => breath(caster, 6, 500),
        S::BreathChaos => breath(caster, 6, 600),
        S::BreathInertia | S::BreathForce => breath(caster, 6, 200),
        S::BreathPlasma | S::BreathDisintegrate => breath(caster, 6, 150),

        S::BallNuke => rlev + dice(rng, 10, 6),
        S::BallChaos => rlev * 2 + dice(rng, 10, 10),
        S::BallAcid => rnd(rng, rlev * 3) + 15,
        S::BallElec => rnd(rng, rlev * 3 / 2) + 8,
        S::BallFire => rnd(rng, rlev * 7 / 2) + 10,
        S::BallCold => rnd(rng, rlev * 3 / 2) + 10,
        S::BallPoison => dice(rng, 12, 2),
        S::BallNether => 50 + dice(rng, 10, 10) + rlev,
        S::BallWater => rnd(rng, rlev * 5 / 2) + 50,
        S::BallMana | S::BallDark | S::BallLight => rlev * 4 + dice(rng, 10, 10),

        S::DrainMana => rnd(rng, rlev) / 2 + 1,
        S::MindBlast => dice(rng, 7, 8),
        S::BrainSmash => dice(rng, 12, 15),
        S::CauseLight => dice(rng, 3, 8),
        S::CauseSerious => dice(rng, 8, 8),
        S::CauseCritical => dice(rng, 10, 15),
        S::CauseMortal => dice(rng, 15, 15),

        S::BoltAcid => dice(rng, 7, 8) + rlev / 3,
        S::BoltElec => dice(rng, 4, 8) + rlev / 3,
        S::BoltFire => dice(rng, 9, 8) + rlev / 3,
        S::BoltCold => dice(rng, 6, 8) + rlev / 3,
        S::BoltNether => 30 + dice(rng, 5, 5) + rlev * 4 / div,
        S::BoltWater => dice(rng, 10, 10) + rlev * 3 / div,
        S::BoltMana => rnd(rng, rlev * 7 / 2) + 50,
        S::BoltPlasma => 10 + dice(rng, 8, 7) + rlev,
        S::BoltIce => dice(rng, 6, 6) + rlev * 3 / div,
        S::Missile => dice(rng, 2, 6) + rlev / 3,

        S::PsySpear => {
            if powerful {
                rnd(rng, rlev * 2) + 150
            } else {
                rnd(rng, rlev * 3 / 2) + 100
            }
        }

        _ => 0,
    }
}

/// Hand of doom: a fraction of the target's current hit points
pub fn hand_of_doom_damage(target_hp: i32, rng: &mut GameRng) -> i32 {
    (40 + rng.rnd(20) as i32) * target_hp.max(0) / 100
}

/// Hit points a caster restores on itself
pub fn heal_amount(caster: &CasterSnapshot) -> i32 {
    if caster.is_powerful() {
        caster.rlev() * 6
    } else {
        caster.rlev() * 4
    }
}
