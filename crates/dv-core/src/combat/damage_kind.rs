//! Damage kinds carried by monster spells
//!
//! These define WHAT kind of damage a bolt, ball or breath deals.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use super::Resistances;

/// Damage kind of a monster spell
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum DamageKind {
    Acid = 0,
    Electricity = 1,
    Fire = 2,
    Cold = 3,
    Poison = 4,
    Nether = 5,
    Light = 6,
    Dark = 7,
    Confusion = 8,
    Sound = 9,
    Chaos = 10,
    Disenchantment = 11,
    Nexus = 12,
    Time = 13,
    Inertia = 14,
    Gravity = 15,
    Shards = 16,
    Plasma = 17,
    Force = 18,
    Mana = 19,
    Nuke = 20,
    Rocket = 21,
    Disintegration = 22,
    Water = 23,
    Ice = 24,
    Missile = 25,
    Arrow = 26,
    PsySpear = 27,

    // Curses: no projection, resolved against a saving throw
    DrainMana = 32,
    MindBlast = 33,
    BrainSmash = 34,
    CauseWounds = 35,
    HandOfDoom = 36,
}

impl DamageKind {
    /// Resistance flag that reduces this kind, if any
    pub const fn resistance(&self) -> Option<Resistances> {
        match self {
            DamageKind::Acid => Some(Resistances::RES_ACID),
            DamageKind::Electricity => Some(Resistances::RES_ELEC),
            DamageKind::Fire => Some(Resistances::RES_FIRE),
            DamageKind::Cold | DamageKind::Ice => Some(Resistances::RES_COLD),
            DamageKind::Poison | DamageKind::Nuke => Some(Resistances::RES_POIS),
            DamageKind::Nether => Some(Resistances::RES_NETHER),
            DamageKind::Light => Some(Resistances::RES_LIGHT),
            DamageKind::Dark => Some(Resistances::RES_DARK),
            DamageKind::Confusion => Some(Resistances::RES_CONF),
            DamageKind::Sound => Some(Resistances::RES_SOUND),
            DamageKind::Chaos => Some(Resistances::RES_CHAOS),
            DamageKind::Disenchantment => Some(Resistances::RES_DISEN),
            DamageKind::Nexus => Some(Resistances::RES_NEXUS),
            DamageKind::Time => Some(Resistances::RES_TIME),
            DamageKind::Shards | DamageKind::Rocket => Some(Resistances::RES_SHARDS),
            DamageKind::Water => Some(Resistances::RES_WATER),
            _ => None,
        }
    }

    /// Immunity flag that negates this kind entirely, if any
    pub const fn immunity(&self) -> Option<Resistances> {
        match self {
            DamageKind::Acid => Some(Resistances::IM_ACID),
            DamageKind::Electricity => Some(Resistances::IM_ELEC),
            DamageKind::Fire => Some(Resistances::IM_FIRE),
            DamageKind::Cold | DamageKind::Ice => Some(Resistances::IM_COLD),
            _ => None,
        }
    }

    /// Whether some property of the target can change the damage taken
    pub const fn is_resistible(&self) -> bool {
        self.resistance().is_some() || self.is_curse()
    }

    /// Whether a reflecting target bounces a bolt of this kind
    pub const fn is_reflectable(&self) -> bool {
        !matches!(self, DamageKind::PsySpear) && !self.is_curse()
    }

    /// Curses are resolved by a saving throw instead of a projection
    pub const fn is_curse(&self) -> bool {
        (*self as u8) >= 32
    }

    /// Short noun used in hit messages
    pub const fn noun(&self) -> &'static str {
        match self {
            DamageKind::Acid => "acid",
            DamageKind::Electricity => "lightning",
            DamageKind::Fire => "fire",
            DamageKind::Cold => "frost",
            DamageKind::Poison => "poison gas",
            DamageKind::Nether => "nether",
            DamageKind::Light => "light",
            DamageKind::Dark => "darkness",
            DamageKind::Confusion => "confusion",
            DamageKind::Sound => "sound",
            DamageKind::Chaos => "chaos",
            DamageKind::Disenchantment => "disenchantment",
            DamageKind::Nexus => "nexus",
            DamageKind::Time => "time",
            DamageKind::Inertia => "inertia",
            DamageKind::Gravity => "gravity",
            DamageKind::Shards => "shards",
            DamageKind::Plasma => "plasma",
            DamageKind::Force => "force",
            DamageKind::Mana => "raw mana",
            DamageKind::Nuke => "toxic waste",
            DamageKind::Rocket => "a rocket",
            DamageKind::Disintegration => "disintegration",
            DamageKind::Water => "water",
            DamageKind::Ice => "ice",
            DamageKind::Missile => "a magic missile",
            DamageKind::Arrow => "an arrow",
            DamageKind::PsySpear => "a psycho-spear",
            DamageKind::DrainMana => "mana drain",
            DamageKind::MindBlast => "a mind blast",
            DamageKind::BrainSmash => "a brain smash",
            DamageKind::CauseWounds => "a curse",
            DamageKind::HandOfDoom => "the hand of doom",
        }
    }
}
