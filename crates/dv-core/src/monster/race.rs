//! Monster race templates

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::combat::Resistances;
use crate::spell::MonsterSpell;

/// Index into [`RACES`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RaceId(pub u16);

impl RaceId {
    /// Static definition of this race
    ///
    /// Unknown ids fall back to the first entry so lookups never fail.
    pub fn def(self) -> &'static RaceDef {
        RACES.get(self.0 as usize).unwrap_or(&RACES[0])
    }
}

bitflags! {
    /// Race flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct RaceFlags: u32 {
        const UNIQUE = 0x0000_0001;
        /// Quest target; never displaced or killed by terrain
        const QUESTOR = 0x0000_0002;
        const SMART = 0x0000_0004;
        const STUPID = 0x0000_0008;
        const PASS_WALL = 0x0000_0010;
        const KILL_WALL = 0x0000_0020;
        const NEVER_MOVE = 0x0000_0040;
        const FLYING = 0x0000_0080;
        /// Casts and breathes with extra force
        const POWERFUL = 0x0000_0100;
        const INVISIBLE = 0x0000_0200;

        const UNDEAD = 0x0001_0000;
        const DEMON = 0x0002_0000;
        const DRAGON = 0x0004_0000;
        const ANGEL = 0x0008_0000;
        const AMBERITE = 0x0010_0000;
        const HOUND = 0x0020_0000;
        const HYDRA = 0x0040_0000;
        const SPIDER = 0x0080_0000;
        const ANT = 0x0100_0000;
        const CYBER = 0x0200_0000;
    }
}

// Manual serde impl for RaceFlags
impl Serialize for RaceFlags {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.bits().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for RaceFlags {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = u32::deserialize(deserializer)?;
        Ok(RaceFlags::from_bits_truncate(bits))
    }
}

/// Static monster race definition
#[derive(Debug, Clone, Copy)]
pub struct RaceDef {
    pub name: &'static str,
    pub symbol: char,
    pub level: u8,
    /// Hit points of a freshly placed monster
    pub hp: i32,
    pub speed: i8,
    pub flags: RaceFlags,
    pub resists: Resistances,
    pub spells: &'static [MonsterSpell],
}

impl RaceDef {
    pub const fn has(&self, flag: RaceFlags) -> bool {
        self.flags.contains(flag)
    }

    pub const fn is_unique(&self) -> bool {
        self.has(RaceFlags::UNIQUE)
    }

    pub fn can_cast(&self, spell: MonsterSpell) -> bool {
        self.spells.contains(&spell)
    }
}

/// Named indices into [`RACES`]
pub mod races {
    use super::RaceId;

    pub const KOBOLD_SHAMAN: RaceId = RaceId(0);
    pub const CAVE_SPIDER: RaceId = RaceId(1);
    pub const GIANT_BLACK_ANT: RaceId = RaceId(2);
    pub const FIRE_HOUND: RaceId = RaceId(3);
    pub const YOUNG_BLUE_DRAGON: RaceId = RaceId(4);
    pub const ANCIENT_RED_DRAGON: RaceId = RaceId(5);
    pub const SKELETON_ORC: RaceId = RaceId(6);
    pub const LICH: RaceId = RaceId(7);
    pub const IMP: RaceId = RaceId(8);
    pub const ARCHON: RaceId = RaceId(9);
    pub const FIVE_HEADED_HYDRA: RaceId = RaceId(10);
    pub const CYBERDEMON: RaceId = RaceId(11);
    pub const DARK_ELVEN_PRIEST: RaceId = RaceId(12);
    pub const GREAT_EAGLE: RaceId = RaceId(13);
    pub const BANOR_RUPART: RaceId = RaceId(14);
    pub const BANOR: RaceId = RaceId(15);
    pub const RUPART: RaceId = RaceId(16);
    pub const ROLENTO: RaceId = RaceId(17);
    pub const GRENADE: RaceId = RaceId(18);
    pub const DIO: RaceId = RaceId(19);
    pub const CORWIN: RaceId = RaceId(20);
    pub const GRIP: RaceId = RaceId(21);
    pub const DREAD: RaceId = RaceId(22);
    pub const EARTHSHAKER: RaceId = RaceId(23);
    pub const DISENCHANTER_MOLD: RaceId = RaceId(24);
    pub const OBERON: RaceId = RaceId(25);
    pub const GHOST: RaceId = RaceId(26);
}

use MonsterSpell as Spell;

const NO_RES: Resistances = Resistances::empty();

pub static RACES: &[RaceDef] = &[
    RaceDef {
        name: "kobold shaman",
        symbol: 'k',
        level: 4,
        hp: 11,
        speed: 0,
        flags: RaceFlags::empty(),
        resists: NO_RES,
        spells: &[Spell::Missile, Spell::Confuse, Spell::CauseLight],
    },
    RaceDef {
        name: "cave spider",
        symbol: 'S',
        level: 2,
        hp: 5,
        speed: 20,
        flags: RaceFlags::SPIDER,
        resists: NO_RES,
        spells: &[],
    },
    RaceDef {
        name: "giant black ant",
        symbol: 'a',
        level: 8,
        hp: 18,
        speed: 0,
        flags: RaceFlags::ANT,
        resists: NO_RES,
        spells: &[],
    },
    RaceDef {
        name: "fire hound",
        symbol: 'Z',
        level: 10,
        hp: 25,
        speed: 10,
        flags: RaceFlags::HOUND,
        resists: Resistances::IM_FIRE.union(Resistances::RES_FIRE),
        spells: &[Spell::BreathFire],
    },
    RaceDef {
        name: "young blue dragon",
        symbol: 'd',
        level: 29,
        hp: 150,
        speed: 0,
        flags: RaceFlags::DRAGON,
        resists: Resistances::IM_ELEC.union(Resistances::RES_ELEC),
        spells: &[Spell::BreathElec, Spell::Scare],
    },
    RaceDef {
        name: "ancient red dragon",
        symbol: 'D',
        level: 40,
        hp: 880,
        speed: 20,
        flags: RaceFlags::DRAGON.union(RaceFlags::POWERFUL).union(RaceFlags::SMART),
        resists: Resistances::IM_FIRE.union(Resistances::RES_FIRE),
        spells: &[Spell::BreathFire, Spell::Scare, Spell::Confuse, Spell::BallFire],
    },
    RaceDef {
        name: "skeleton orc",
        symbol: 's',
        level: 10,
        hp: 26,
        speed: 0,
        flags: RaceFlags::UNDEAD.union(RaceFlags::STUPID),
        resists: Resistances::RES_POIS,
        spells: &[],
    },
    RaceDef {
        name: "lich",
        symbol: 'L',
        level: 34,
        hp: 210,
        speed: 10,
        flags: RaceFlags::UNDEAD.union(RaceFlags::SMART),
        resists: Resistances::RES_COLD
            .union(Resistances::RES_POIS)
            .union(Resistances::RES_NETHER)
            .union(Resistances::RES_BLIND)
            .union(Resistances::FREE_ACTION),
        spells: &[
            Spell::Blink,
            Spell::TeleportTo,
            Spell::Blind,
            Spell::Hold,
            Spell::Slow,
            Spell::Scare,
            Spell::CauseCritical,
            Spell::DrainMana,
            Spell::BrainSmash,
            Spell::RaiseDead,
        ],
    },
    RaceDef {
        name: "imp",
        symbol: 'u',
        level: 17,
        hp: 27,
        speed: 10,
        flags: RaceFlags::DEMON.union(RaceFlags::INVISIBLE),
        resists: Resistances::IM_FIRE.union(Resistances::RES_FIRE).union(Resistances::RES_POIS),
        spells: &[Spell::BoltFire, Spell::Blink, Spell::Teleport, Spell::TeleportLevel],
    },
    RaceDef {
        name: "archon",
        symbol: 'A',
        level: 45,
        hp: 500,
        speed: 20,
        flags: RaceFlags::ANGEL.union(RaceFlags::SMART).union(RaceFlags::POWERFUL),
        resists: Resistances::RES_BASE
            .union(Resistances::RES_POIS)
            .union(Resistances::RES_LIGHT)
            .union(Resistances::RES_BLIND)
            .union(Resistances::RES_FEAR)
            .union(Resistances::FREE_ACTION),
        spells: &[Spell::BallLight, Spell::Heal, Spell::Haste, Spell::SummonAngel],
    },
    RaceDef {
        name: "5-headed hydra",
        symbol: 'M',
        level: 28,
        hp: 350,
        speed: 10,
        flags: RaceFlags::HYDRA,
        resists: Resistances::RES_POIS,
        spells: &[Spell::BreathPoison, Spell::Scare],
    },
    RaceDef {
        name: "cyberdemon",
        symbol: 'U',
        level: 50,
        hp: 1200,
        speed: 10,
        flags: RaceFlags::DEMON.union(RaceFlags::CYBER),
        resists: Resistances::IM_FIRE
            .union(Resistances::RES_FIRE)
            .union(Resistances::RES_POIS)
            .union(Resistances::RES_SHARDS),
        spells: &[Spell::Rocket],
    },
    RaceDef {
        name: "dark elven priest",
        symbol: 'h',
        level: 9,
        hp: 32,
        speed: 10,
        flags: RaceFlags::SMART,
        resists: NO_RES,
        spells: &[Spell::Blind, Spell::Confuse, Spell::CauseSerious, Spell::Darkness, Spell::SummonMonster],
    },
    RaceDef {
        name: "great eagle",
        symbol: 'B',
        level: 12,
        hp: 40,
        speed: 20,
        flags: RaceFlags::FLYING,
        resists: NO_RES,
        spells: &[Spell::Special],
    },
    RaceDef {
        name: "Banor=Rupart",
        symbol: 'p',
        level: 50,
        hp: 2000,
        speed: 20,
        flags: RaceFlags::UNIQUE.union(RaceFlags::SMART),
        resists: Resistances::RES_POIS.union(Resistances::RES_DARK),
        spells: &[Spell::Special, Spell::BallNether, Spell::BoltNether],
    },
    RaceDef {
        name: "Banor",
        symbol: 'p',
        level: 48,
        hp: 1000,
        speed: 20,
        flags: RaceFlags::UNIQUE.union(RaceFlags::SMART),
        resists: Resistances::RES_POIS.union(Resistances::RES_DARK),
        spells: &[Spell::Special, Spell::BoltNether],
    },
    RaceDef {
        name: "Rupart",
        symbol: 'p',
        level: 48,
        hp: 1000,
        speed: 20,
        flags: RaceFlags::UNIQUE.union(RaceFlags::SMART),
        resists: Resistances::RES_POIS.union(Resistances::RES_DARK),
        spells: &[Spell::Special, Spell::BallNether],
    },
    RaceDef {
        name: "Rolento",
        symbol: 'p',
        level: 34,
        hp: 600,
        speed: 10,
        flags: RaceFlags::UNIQUE,
        resists: NO_RES,
        spells: &[Spell::Special, Spell::Blink],
    },
    RaceDef {
        name: "grenade",
        symbol: '*',
        level: 1,
        hp: 1,
        speed: 10,
        flags: RaceFlags::NEVER_MOVE.union(RaceFlags::STUPID),
        resists: Resistances::RES_POIS,
        spells: &[],
    },
    RaceDef {
        name: "Dio",
        symbol: 'p',
        level: 50,
        hp: 1800,
        speed: 20,
        flags: RaceFlags::UNIQUE.union(RaceFlags::SMART).union(RaceFlags::POWERFUL),
        resists: Resistances::RES_BASE.union(Resistances::RES_TIME),
        spells: &[Spell::WorldStop, Spell::HandOfDoom, Spell::BoltMana],
    },
    RaceDef {
        name: "Corwin",
        symbol: 'p',
        level: 60,
        hp: 3000,
        speed: 20,
        flags: RaceFlags::UNIQUE
            .union(RaceFlags::AMBERITE)
            .union(RaceFlags::SMART)
            .union(RaceFlags::POWERFUL),
        resists: Resistances::RES_BASE.union(Resistances::RES_POIS),
        spells: &[Spell::SummonAmberites, Spell::BallMana, Spell::Forget],
    },
    RaceDef {
        name: "Grip, Farmer Maggot's Dog",
        symbol: 'C',
        level: 2,
        hp: 15,
        speed: 20,
        flags: RaceFlags::UNIQUE,
        resists: NO_RES,
        spells: &[],
    },
    RaceDef {
        name: "dread",
        symbol: 'G',
        level: 40,
        hp: 250,
        speed: 20,
        flags: RaceFlags::UNDEAD
            .union(RaceFlags::PASS_WALL)
            .union(RaceFlags::FLYING)
            .union(RaceFlags::INVISIBLE),
        resists: Resistances::RES_NETHER
            .union(Resistances::RES_POIS)
            .union(Resistances::RES_BLIND)
            .union(Resistances::RES_CONF),
        spells: &[Spell::BoltNether, Spell::Blind, Spell::Hold, Spell::DrainMana],
    },
    RaceDef {
        name: "the Earthshaker",
        symbol: 'X',
        level: 40,
        hp: 900,
        speed: 10,
        flags: RaceFlags::UNIQUE.union(RaceFlags::KILL_WALL),
        resists: Resistances::RES_SHARDS,
        spells: &[Spell::Special],
    },
    RaceDef {
        name: "disenchanter mold",
        symbol: 'm',
        level: 16,
        hp: 70,
        speed: 0,
        flags: RaceFlags::NEVER_MOVE.union(RaceFlags::STUPID),
        resists: Resistances::RES_DISEN.union(Resistances::RES_POIS),
        spells: &[Spell::DrainMana],
    },
    RaceDef {
        name: "Oberon",
        symbol: 'p',
        level: 70,
        hp: 4000,
        speed: 20,
        flags: RaceFlags::UNIQUE
            .union(RaceFlags::QUESTOR)
            .union(RaceFlags::AMBERITE)
            .union(RaceFlags::SMART),
        resists: Resistances::RES_BASE.union(Resistances::RES_POIS),
        spells: &[Spell::TeleportAway, Spell::SummonAmberites, Spell::BallMana],
    },
    RaceDef {
        name: "poltergeist",
        symbol: 'G',
        level: 3,
        hp: 8,
        speed: 30,
        flags: RaceFlags::UNDEAD
            .union(RaceFlags::PASS_WALL)
            .union(RaceFlags::FLYING)
            .union(RaceFlags::INVISIBLE),
        resists: Resistances::RES_POIS,
        spells: &[Spell::Blink],
    },
];

/// Look a race up by (case-insensitive) name
pub fn race_by_name(name: &str) -> Option<RaceId> {
    RACES
        .iter()
        .position(|r| r.name.eq_ignore_ascii_case(name))
        .map(|i| RaceId(i as u16))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_ids_match_table() {
        assert_eq!(races::KOBOLD_SHAMAN.def().name, "kobold shaman");
        assert_eq!(races::BANOR_RUPART.def().name, "Banor=Rupart");
        assert_eq!(races::EARTHSHAKER.def().symbol, 'X');
        assert_eq!(races::GHOST.def().name, "poltergeist");
    }

    #[test]
    fn test_race_by_name() {
        assert_eq!(race_by_name("LICH"), Some(races::LICH));
        assert_eq!(race_by_name("nobody"), None);
    }

    #[test]
    fn test_smart_and_stupid_are_exclusive() {
        for race in RACES {
            assert!(
                !(race.has(RaceFlags::SMART) && race.has(RaceFlags::STUPID)),
                "{} is both smart and stupid",
                race.name
            );
        }
    }

    #[test]
    fn test_unknown_id_falls_back() {
        assert_eq!(RaceId(9999).def().name, RACES[0].name);
    }
}
