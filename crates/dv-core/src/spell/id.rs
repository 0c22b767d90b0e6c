//! Spell identifiers
//!
//! Identifiers are persisted through the player's known-spell set, so the
//! numeric value of every assigned id is fixed. New spells may only take a
//! reserved slot or extend a band.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

use crate::SPELL_BAND_WIDTH;

/// Raw spell identifier as chosen by the AI or read back from a save
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SpellId(pub u8);

impl std::fmt::Display for SpellId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The three 32-wide identifier bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum SpellBand {
    /// Innate ranged attacks and breaths
    Innate,
    /// Balls, bolts, curses and status afflictions
    Sorcery,
    /// Support, movement, battlefield and summoning
    Utility,
}

/// Display name and imitation level of a spell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpellInfo {
    pub name: &'static str,
    /// Player level needed to cast the imitated spell
    pub level: u8,
}

/// Every assigned monster spell
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
)]
#[repr(u8)]
pub enum MonsterSpell {
    // Innate band
    Shriek = 0,
    Dispel = 2,
    Rocket = 3,
    Shoot = 4,
    BreathAcid = 8,
    BreathElec = 9,
    BreathFire = 10,
    BreathCold = 11,
    BreathPoison = 12,
    BreathNether = 13,
    BreathLight = 14,
    BreathDark = 15,
    BreathConfusion = 16,
    BreathSound = 17,
    BreathChaos = 18,
    BreathDisenchant = 19,
    BreathNexus = 20,
    BreathTime = 21,
    BreathInertia = 22,
    BreathGravity = 23,
    BreathShards = 24,
    BreathPlasma = 25,
    BreathForce = 26,
    BreathMana = 27,
    BallNuke = 28,
    BreathNuke = 29,
    BallChaos = 30,
    BreathDisintegrate = 31,

    // Sorcery band
    BallAcid = 32,
    BallElec = 33,
    BallFire = 34,
    BallCold = 35,
    BallPoison = 36,
    BallNether = 37,
    BallWater = 38,
    BallMana = 39,
    BallDark = 40,
    DrainMana = 41,
    MindBlast = 42,
    BrainSmash = 43,
    CauseLight = 44,
    CauseSerious = 45,
    CauseCritical = 46,
    CauseMortal = 47,
    BoltAcid = 48,
    BoltElec = 49,
    BoltFire = 50,
    BoltCold = 51,
    BallLight = 52,
    BoltNether = 53,
    BoltWater = 54,
    BoltMana = 55,
    BoltPlasma = 56,
    BoltIce = 57,
    Missile = 58,
    Scare = 59,
    Blind = 60,
    Confuse = 61,
    Slow = 62,
    Hold = 63,

    // Utility band
    Haste = 64,
    HandOfDoom = 65,
    Heal = 66,
    Invulnerability = 67,
    Blink = 68,
    Teleport = 69,
    WorldStop = 70,
    Special = 71,
    TeleportTo = 72,
    TeleportAway = 73,
    TeleportLevel = 74,
    PsySpear = 75,
    Darkness = 76,
    Traps = 77,
    Forget = 78,
    RaiseDead = 79,
    SummonKin = 80,
    SummonCyber = 81,
    SummonMonster = 82,
    SummonMonsters = 83,
    SummonAnt = 84,
    SummonSpider = 85,
    SummonHound = 86,
    SummonHydra = 87,
    SummonAngel = 88,
    SummonDemon = 89,
    SummonUndead = 90,
    SummonDragon = 91,
    SummonHiUndead = 92,
    SummonHiDragon = 93,
    SummonAmberites = 94,
    SummonUnique = 95,
}

impl MonsterSpell {
    /// Resolve a raw identifier; reserved and out-of-range ids yield None
    pub fn from_id(id: SpellId) -> Option<MonsterSpell> {
        MonsterSpell::iter().find(|s| *s as u8 == id.0)
    }

    pub const fn id(self) -> SpellId {
        SpellId(self as u8)
    }

    pub const fn band(self) -> SpellBand {
        match (self as u8) / SPELL_BAND_WIDTH {
            0 => SpellBand::Innate,
            1 => SpellBand::Sorcery,
            _ => SpellBand::Utility,
        }
    }

    pub const fn name(self) -> &'static str {
        self.info().name
    }

    pub const fn info(self) -> SpellInfo {
        use MonsterSpell::*;
        let (name, level) = match self {
            Shriek => ("shriek", 1),
            Dispel => ("dispel magic", 25),
            Rocket => ("rocket", 35),
            Shoot => ("arrow", 2),
            BreathAcid => ("breathe acid", 20),
            BreathElec => ("breathe lightning", 20),
            BreathFire => ("breathe fire", 20),
            BreathCold => ("breathe frost", 20),
            BreathPoison => ("breathe poison", 20),
            BreathNether => ("breathe nether", 30),
            BreathLight => ("breathe light", 20),
            BreathDark => ("breathe darkness", 20),
            BreathConfusion => ("breathe confusion", 25),
            BreathSound => ("breathe sound", 25),
            BreathChaos => ("breathe chaos", 30),
            BreathDisenchant => ("breathe disenchantment", 30),
            BreathNexus => ("breathe nexus", 30),
            BreathTime => ("breathe time", 40),
            BreathInertia => ("breathe inertia", 35),
            BreathGravity => ("breathe gravity", 35),
            BreathShards => ("breathe shards", 25),
            BreathPlasma => ("breathe plasma", 35),
            BreathForce => ("breathe force", 35),
            BreathMana => ("breathe mana", 40),
            BallNuke => ("nuclear ball", 35),
            BreathNuke => ("breathe toxic waste", 35),
            BallChaos => ("raw logrus", 40),
            BreathDisintegrate => ("breathe disintegration", 45),
            BallAcid => ("acid ball", 18),
            BallElec => ("lightning ball", 14),
            BallFire => ("fire ball", 16),
            BallCold => ("frost ball", 16),
            BallPoison => ("stinking cloud", 3),
            BallNether => ("nether ball", 28),
            BallWater => ("water ball", 32),
            BallMana => ("mana storm", 44),
            BallDark => ("darkness storm", 40),
            DrainMana => ("drain mana", 10),
            MindBlast => ("mind blast", 5),
            BrainSmash => ("brain smash", 15),
            CauseLight => ("cause light wounds", 1),
            CauseSerious => ("cause serious wounds", 7),
            CauseCritical => ("cause critical wounds", 15),
            CauseMortal => ("cause mortal wounds", 30),
            BoltAcid => ("acid bolt", 8),
            BoltElec => ("lightning bolt", 6),
            BoltFire => ("fire bolt", 10),
            BoltCold => ("frost bolt", 8),
            BallLight => ("star burst", 40),
            BoltNether => ("nether bolt", 20),
            BoltWater => ("water bolt", 24),
            BoltMana => ("mana bolt", 30),
            BoltPlasma => ("plasma bolt", 35),
            BoltIce => ("ice bolt", 30),
            Missile => ("magic missile", 1),
            Scare => ("scare", 5),
            Blind => ("blind", 10),
            Confuse => ("confusion", 7),
            Slow => ("slow", 10),
            Hold => ("hold person", 12),
            Haste => ("haste self", 20),
            HandOfDoom => ("hand of doom", 45),
            Heal => ("heal self", 15),
            Invulnerability => ("globe of invulnerability", 45),
            Blink => ("blink", 5),
            Teleport => ("teleport", 15),
            WorldStop => ("the world", 50),
            Special => ("something", 1),
            TeleportTo => ("teleport to", 25),
            TeleportAway => ("teleport away", 20),
            TeleportLevel => ("teleport level", 35),
            PsySpear => ("psycho-spear", 35),
            Darkness => ("darkness", 5),
            Traps => ("create traps", 15),
            Forget => ("amnesia", 15),
            RaiseDead => ("raise dead", 30),
            SummonKin => ("summon kin", 25),
            SummonCyber => ("summon cyberdemons", 45),
            SummonMonster => ("summon a monster", 20),
            SummonMonsters => ("summon monsters", 30),
            SummonAnt => ("summon ants", 20),
            SummonSpider => ("summon spiders", 20),
            SummonHound => ("summon hounds", 25),
            SummonHydra => ("summon hydras", 30),
            SummonAngel => ("summon an angel", 35),
            SummonDemon => ("summon a demon", 35),
            SummonUndead => ("summon an undead", 35),
            SummonDragon => ("summon a dragon", 35),
            SummonHiUndead => ("summon greater undead", 45),
            SummonHiDragon => ("summon ancient dragons", 45),
            SummonAmberites => ("summon amberites", 50),
            SummonUnique => ("summon uniques", 50),
        };
        SpellInfo { name, level }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SPELL_ID_COUNT;

    #[test]
    fn test_reserved_ids_are_unassigned() {
        for raw in [1u8, 5, 6, 7] {
            assert_eq!(MonsterSpell::from_id(SpellId(raw)), None);
        }
        assert_eq!(MonsterSpell::from_id(SpellId(SPELL_ID_COUNT)), None);
        assert_eq!(MonsterSpell::from_id(SpellId(255)), None);
    }

    #[test]
    fn test_id_roundtrip() {
        for spell in MonsterSpell::iter() {
            assert_eq!(MonsterSpell::from_id(spell.id()), Some(spell));
        }
        assert_eq!(MonsterSpell::iter().count(), SPELL_ID_COUNT as usize - 4);
    }

    #[test]
    fn test_fixed_numbering() {
        assert_eq!(MonsterSpell::Shriek.id(), SpellId(0));
        assert_eq!(MonsterSpell::BreathAcid.id(), SpellId(8));
        assert_eq!(MonsterSpell::BallAcid.id(), SpellId(32));
        assert_eq!(MonsterSpell::Hold.id(), SpellId(63));
        assert_eq!(MonsterSpell::Haste.id(), SpellId(64));
        assert_eq!(MonsterSpell::SummonUnique.id(), SpellId(95));
    }

    #[test]
    fn test_bands() {
        assert_eq!(MonsterSpell::BreathDisintegrate.band(), SpellBand::Innate);
        assert_eq!(MonsterSpell::BallAcid.band(), SpellBand::Sorcery);
        assert_eq!(MonsterSpell::Haste.band(), SpellBand::Utility);
    }
}
