//! Effect descriptors
//!
//! One row per assigned spell id: which primitive resolves it and with what
//! fixed parameters. Both target directions read this same table.

use strum::{Display, EnumIter};

use super::MonsterSpell;
use crate::combat::{DamageKind, Resistances};

/// Status afflictions aimed at the target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum StatusKind {
    Scare,
    Blind,
    Confuse,
    Slow,
    Hold,
    /// Strip temporary buffs
    Dispel,
}

impl StatusKind {
    /// Resistance that blocks this affliction outright
    pub const fn blocked_by(&self) -> Option<Resistances> {
        match self {
            StatusKind::Scare => Some(Resistances::RES_FEAR),
            StatusKind::Blind => Some(Resistances::RES_BLIND),
            StatusKind::Confuse => Some(Resistances::RES_CONF),
            StatusKind::Slow | StatusKind::Hold => Some(Resistances::FREE_ACTION),
            StatusKind::Dispel => None,
        }
    }
}

/// Buffs a caster applies to itself
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum SupportKind {
    Haste,
    Heal,
    Invulnerability,
}

/// Movement and battlefield effects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum UtilityKind {
    Shriek,
    Blink,
    Teleport,
    TeleportTo,
    TeleportAway,
    TeleportLevel,
    Darkness,
    RaiseDead,
}

impl UtilityKind {
    /// Whether the target gets a chance to notice and resist the effect
    pub const fn is_learnable(&self) -> bool {
        matches!(
            self,
            UtilityKind::TeleportTo | UtilityKind::TeleportAway | UtilityKind::TeleportLevel
        )
    }
}

/// Effects that only make sense against the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum PlayerOnlyEffect {
    WorldStop,
    Forget,
    Traps,
}

/// Creature categories for summoning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum SummonKind {
    Kin,
    Cyber,
    Monster,
    Monsters,
    Ant,
    Spider,
    Hound,
    Hydra,
    Angel,
    Demon,
    Undead,
    Dragon,
    HiUndead,
    HiDragon,
    Amberites,
    Uniques,
}

impl SummonKind {
    /// Number of creatures requested
    pub const fn group_size(&self) -> u32 {
        match self {
            SummonKind::Kin => 4,
            SummonKind::Monsters | SummonKind::Ant | SummonKind::Spider => 6,
            SummonKind::Hound
            | SummonKind::Hydra
            | SummonKind::HiUndead
            | SummonKind::HiDragon
            | SummonKind::Amberites
            | SummonKind::Uniques => 4,
            SummonKind::Cyber
            | SummonKind::Monster
            | SummonKind::Angel
            | SummonKind::Demon
            | SummonKind::Undead
            | SummonKind::Dragon => 1,
        }
    }

    /// Group size when the caster acts for the player
    pub const fn pet_group_size(&self) -> u32 {
        match self.group_size() {
            6 => 2,
            4 => 1,
            n => n,
        }
    }

    /// Whether unique creatures may answer
    pub const fn allows_uniques(&self) -> bool {
        matches!(self, SummonKind::Amberites | SummonKind::Uniques)
    }
}

/// What a spell does, with its fixed parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Bolt(DamageKind),
    Ball { kind: DamageKind, radius: i32 },
    Breath(DamageKind),
    Curse(DamageKind),
    Status(StatusKind),
    Support(SupportKind),
    Utility(UtilityKind),
    PlayerOnly(PlayerOnlyEffect),
    Summon(SummonKind),
    /// Caster-specific behaviour
    Scripted,
}

const BALL_RADIUS: i32 = 2;
const STORM_RADIUS: i32 = 4;

impl MonsterSpell {
    /// The descriptor table
    pub const fn effect(self) -> Effect {
        use DamageKind as D;
        use Effect::*;
        use MonsterSpell as S;

        match self {
            S::Shriek => Utility(UtilityKind::Shriek),
            S::Dispel => Status(StatusKind::Dispel),
            S::Rocket => Ball {
                kind: D::Rocket,
                radius: BALL_RADIUS,
            },
            S::Shoot => Bolt(D::Arrow),

            S::BreathAcid => Breath(D::Acid),
            S::BreathElec => Breath(D::Electricity),
            S::BreathFire => Breath(D::Fire),
            S::BreathCold => Breath(D::Cold),
            S::BreathPoison => Breath(D::Poison),
            S::BreathNether => Breath(D::Nether),
            S::BreathLight => Breath(D::Light),
            S::BreathDark => Breath(D::Dark),
            S::BreathConfusion => Breath(D::Confusion),
            S::BreathSound => Breath(D::Sound),
            S::BreathChaos => Breath(D::Chaos),
            S::BreathDisenchant => Breath(D::Disenchantment),
            S::BreathNexus => Breath(D::Nexus),
            S::BreathTime => Breath(D::Time),
            S::BreathInertia => Breath(D::Inertia),
            S::BreathGravity => Breath(D::Gravity),
            S::BreathShards => Breath(D::Shards),
            S::BreathPlasma => Breath(D::Plasma),
            S::BreathForce => Breath(D::Force),
            S::BreathMana => Breath(D::Mana),
            S::BallNuke => Ball {
                kind: D::Nuke,
                radius: BALL_RADIUS,
            },
            S::BreathNuke => Breath(D::Nuke),
            S::BallChaos => Ball {
                kind: D::Chaos,
                radius: STORM_RADIUS,
            },
            S::BreathDisintegrate => Breath(D::Disintegration),

            S::BallAcid => Ball {
                kind: D::Acid,
                radius: BALL_RADIUS,
            },
            S::BallElec => Ball {
                kind: D::Electricity,
                radius: BALL_RADIUS,
            },
            S::BallFire => Ball {
                kind: D::Fire,
                radius: BALL_RADIUS,
            },
            S::BallCold => Ball {
                kind: D::Cold,
                radius: BALL_RADIUS,
            },
            S::BallPoison => Ball {
                kind: D::Poison,
                radius: BALL_RADIUS,
            },
            S::BallNether => Ball {
                kind: D::Nether,
                radius: BALL_RADIUS,
            },
            S::BallWater => Ball {
                kind: D::Water,
                radius: STORM_RADIUS,
            },
            S::BallMana => Ball {
                kind: D::Mana,
                radius: STORM_RADIUS,
            },
            S::BallDark => Ball {
                kind: D::Dark,
                radius: STORM_RADIUS,
            },
            S::DrainMana => Curse(D::DrainMana),
            S::MindBlast => Curse(D::MindBlast),
            S::BrainSmash => Curse(D::BrainSmash),
            S::CauseLight | S::CauseSerious | S::CauseCritical | S::CauseMortal => {
                Curse(D::CauseWounds)
            }
            S::BoltAcid => Bolt(D::Acid),
            S::BoltElec => Bolt(D::Electricity),
            S::BoltFire => Bolt(D::Fire),
            S::BoltCold => Bolt(D::Cold),
            S::BallLight => Ball {
                kind: D::Light,
                radius: STORM_RADIUS,
            },
            S::BoltNether => Bolt(D::Nether),
            S::BoltWater => Bolt(D::Water),
            S::BoltMana => Bolt(D::Mana),
            S::BoltPlasma => Bolt(D::Plasma),
            S::BoltIce => Bolt(D::Ice),
            S::Missile => Bolt(D::Missile),
            S::Scare => Status(StatusKind::Scare),
            S::Blind => Status(StatusKind::Blind),
            S::Confuse => Status(StatusKind::Confuse),
            S::Slow => Status(StatusKind::Slow),
            S::Hold => Status(StatusKind::Hold),

            S::Haste => Support(SupportKind::Haste),
            S::HandOfDoom => Curse(D::HandOfDoom),
            S::Heal => Support(SupportKind::Heal),
            S::Invulnerability => Support(SupportKind::Invulnerability),
            S::Blink => Utility(UtilityKind::Blink),
            S::Teleport => Utility(UtilityKind::Teleport),
            S::WorldStop => PlayerOnly(PlayerOnlyEffect::WorldStop),
            S::Special => Scripted,
            S::TeleportTo => Utility(UtilityKind::TeleportTo),
            S::TeleportAway => Utility(UtilityKind::TeleportAway),
            S::TeleportLevel => Utility(UtilityKind::TeleportLevel),
            S::PsySpear => Bolt(D::PsySpear),
            S::Darkness => Utility(UtilityKind::Darkness),
            S::Traps => PlayerOnly(PlayerOnlyEffect::Traps),
            S::Forget => PlayerOnly(PlayerOnlyEffect::Forget),
            S::RaiseDead => Utility(UtilityKind::RaiseDead),
            S::SummonKin => Summon(SummonKind::Kin),
            S::SummonCyber => Summon(SummonKind::Cyber),
            S::SummonMonster => Summon(SummonKind::Monster),
            S::SummonMonsters => Summon(SummonKind::Monsters),
            S::SummonAnt => Summon(SummonKind::Ant),
            S::SummonSpider => Summon(SummonKind::Spider),
            S::SummonHound => Summon(SummonKind::Hound),
            S::SummonHydra => Summon(SummonKind::Hydra),
            S::SummonAngel => Summon(SummonKind::Angel),
            S::SummonDemon => Summon(SummonKind::Demon),
            S::SummonUndead => Summon(SummonKind::Undead),
            S::SummonDragon => Summon(SummonKind::Dragon),
            S::SummonHiUndead => Summon(SummonKind::HiUndead),
            S::SummonHiDragon => Summon(SummonKind::HiDragon),
            S::SummonAmberites => Summon(SummonKind::Amberites),
            S::SummonUnique => Summon(SummonKind::Uniques),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_player_only_effects() {
        let player_only: Vec<_> = MonsterSpell::iter()
            .filter(|s| matches!(s.effect(), Effect::PlayerOnly(_)))
            .collect();
        assert_eq!(
            player_only,
            vec![MonsterSpell::WorldStop, MonsterSpell::Traps, MonsterSpell::Forget]
        );
    }

    #[test]
    fn test_storm_radius() {
        assert_eq!(
            MonsterSpell::BallMana.effect(),
            Effect::Ball {
                kind: DamageKind::Mana,
                radius: 4
            }
        );
        assert_eq!(
            MonsterSpell::BallFire.effect(),
            Effect::Ball {
                kind: DamageKind::Fire,
                radius: 2
            }
        );
    }

    #[test]
    fn test_every_breath_spell_is_a_breath() {
        for spell in MonsterSpell::iter() {
            if spell.name().starts_with("breathe") {
                assert!(matches!(spell.effect(), Effect::Breath(_)), "{spell}");
            }
        }
    }

    #[test]
    fn test_pet_group_sizes() {
        assert_eq!(SummonKind::Monsters.pet_group_size(), 2);
        assert_eq!(SummonKind::Kin.pet_group_size(), 1);
        assert_eq!(SummonKind::Angel.pet_group_size(), 1);
    }

    #[test]
    fn test_status_blocks() {
        assert_eq!(StatusKind::Hold.blocked_by(), Some(Resistances::FREE_ACTION));
        assert_eq!(StatusKind::Dispel.blocked_by(), None);
    }
}
