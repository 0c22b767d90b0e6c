//! What a caster has learned about the player's defences

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::combat::Resistances;

bitflags! {
    /// Resistance memory of a spellcaster
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct SmartFlags: u32 {
        const RES_ACID = 0x0000_0001;
        const RES_ELEC = 0x0000_0002;
        const RES_FIRE = 0x0000_0004;
        const RES_COLD = 0x0000_0008;
        const RES_POIS = 0x0000_0010;
        const RES_NETH = 0x0000_0020;
        const RES_LITE = 0x0000_0040;
        const RES_DARK = 0x0000_0080;
        const RES_FEAR = 0x0000_0100;
        const RES_CONF = 0x0000_0200;
        const RES_CHAOS = 0x0000_0400;
        const RES_DISEN = 0x0000_0800;
        const RES_BLIND = 0x0000_1000;
        const RES_NEXUS = 0x0000_2000;
        const RES_SOUND = 0x0000_4000;
        const RES_SHARD = 0x0000_8000;
        const RES_TIME = 0x0001_0000;
        const RES_WATER = 0x0002_0000;
        const IM_ACID = 0x0010_0000;
        const IM_ELEC = 0x0020_0000;
        const IM_FIRE = 0x0040_0000;
        const IM_COLD = 0x0080_0000;
        const FREE_ACTION = 0x0100_0000;
        const REFLECT = 0x0200_0000;
        /// Player has shown a strong saving throw
        const GOOD_SAVE = 0x0400_0000;
    }
}

// Manual serde impl for SmartFlags
impl Serialize for SmartFlags {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.bits().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SmartFlags {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = u32::deserialize(deserializer)?;
        Ok(SmartFlags::from_bits_truncate(bits))
    }
}

const RESIST_MAP: [(Resistances, SmartFlags); 24] = [
    (Resistances::RES_ACID, SmartFlags::RES_ACID),
    (Resistances::RES_ELEC, SmartFlags::RES_ELEC),
    (Resistances::RES_FIRE, SmartFlags::RES_FIRE),
    (Resistances::RES_COLD, SmartFlags::RES_COLD),
    (Resistances::RES_POIS, SmartFlags::RES_POIS),
    (Resistances::RES_NETHER, SmartFlags::RES_NETH),
    (Resistances::RES_LIGHT, SmartFlags::RES_LITE),
    (Resistances::RES_DARK, SmartFlags::RES_DARK),
    (Resistances::RES_FEAR, SmartFlags::RES_FEAR),
    (Resistances::RES_CONF, SmartFlags::RES_CONF),
    (Resistances::RES_CHAOS, SmartFlags::RES_CHAOS),
    (Resistances::RES_DISEN, SmartFlags::RES_DISEN),
    (Resistances::RES_BLIND, SmartFlags::RES_BLIND),
    (Resistances::RES_NEXUS, SmartFlags::RES_NEXUS),
    (Resistances::RES_SOUND, SmartFlags::RES_SOUND),
    (Resistances::RES_SHARDS, SmartFlags::RES_SHARD),
    (Resistances::RES_TIME, SmartFlags::RES_TIME),
    (Resistances::RES_WATER, SmartFlags::RES_WATER),
    (Resistances::IM_ACID, SmartFlags::IM_ACID),
    (Resistances::IM_ELEC, SmartFlags::IM_ELEC),
    (Resistances::IM_FIRE, SmartFlags::IM_FIRE),
    (Resistances::IM_COLD, SmartFlags::IM_COLD),
    (Resistances::FREE_ACTION, SmartFlags::FREE_ACTION),
    (Resistances::REFLECT, SmartFlags::REFLECT),
];

impl SmartFlags {
    /// Memory bits corresponding to a set of resistances
    pub fn from_resistances(res: Resistances) -> Self {
        RESIST_MAP
            .iter()
            .filter(|(r, _)| res.contains(*r))
            .fold(SmartFlags::empty(), |acc, (_, s)| acc | *s)
    }
}
