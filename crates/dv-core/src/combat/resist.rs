//! Resistance flags, damage reduction and saving throws

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use super::DamageKind;
use crate::rng::GameRng;

bitflags! {
    /// Resistances and immunities, shared by the player and monster races
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Resistances: u32 {
        const RES_ACID = 0x0000_0001;
        const RES_ELEC = 0x0000_0002;
        const RES_FIRE = 0x0000_0004;
        const RES_COLD = 0x0000_0008;
        const RES_POIS = 0x0000_0010;
        const RES_NETHER = 0x0000_0020;
        const RES_LIGHT = 0x0000_0040;
        const RES_DARK = 0x0000_0080;
        const RES_CONF = 0x0000_0100;
        const RES_SOUND = 0x0000_0200;
        const RES_CHAOS = 0x0000_0400;
        const RES_DISEN = 0x0000_0800;
        const RES_NEXUS = 0x0000_1000;
        const RES_SHARDS = 0x0000_2000;
        const RES_TIME = 0x0000_4000;
        const RES_WATER = 0x0000_8000;
        const RES_FEAR = 0x0001_0000;
        const RES_BLIND = 0x0002_0000;
        const FREE_ACTION = 0x0004_0000;
        const REFLECT = 0x0008_0000;

        const IM_ACID = 0x0100_0000;
        const IM_ELEC = 0x0200_0000;
        const IM_FIRE = 0x0400_0000;
        const IM_COLD = 0x0800_0000;

        /// The four base elements
        const RES_BASE = Self::RES_ACID.bits()
            | Self::RES_ELEC.bits()
            | Self::RES_FIRE.bits()
            | Self::RES_COLD.bits();
    }
}

// Manual serde impl for Resistances
impl Serialize for Resistances {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.bits().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Resistances {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = u32::deserialize(deserializer)?;
        Ok(Resistances::from_bits_truncate(bits))
    }
}

/// Resistances a target currently has
///
/// `innate` comes from race or intrinsics, `temporary` from timed effects.
/// Monsters only ever have an innate set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResistProfile {
    pub innate: Resistances,
    pub temporary: Resistances,
}

impl ResistProfile {
    pub const fn innate(innate: Resistances) -> Self {
        Self {
            innate,
            temporary: Resistances::empty(),
        }
    }

    /// Combined view of innate and temporary resistances
    pub fn all(&self) -> Resistances {
        self.innate | self.temporary
    }

    pub fn has(&self, flag: Resistances) -> bool {
        self.all().contains(flag)
    }
}

/// Reduce `dam` of the given kind by the target's resistances.
///
/// This is the only damage-reduction routine: player and monster targets
/// both go through it. A random draw happens only for the kinds whose
/// reduction is randomised, and only when the target resists.
pub fn reduce_damage(kind: DamageKind, dam: i32, profile: &ResistProfile, rng: &mut GameRng) -> i32 {
    if dam <= 0 {
        return 0;
    }
    if let Some(immunity) = kind.immunity() {
        if profile.has(immunity) {
            return 0;
        }
    }
    let Some(flag) = kind.resistance() else {
        return dam;
    };

    match kind {
        DamageKind::Acid
        | DamageKind::Electricity
        | DamageKind::Fire
        | DamageKind::Cold
        | DamageKind::Ice
        | DamageKind::Poison => {
            let mut dam = dam;
            if profile.innate.contains(flag) {
                dam = (dam + 2) / 3;
            }
            if profile.temporary.contains(flag) {
                dam = (dam + 2) / 3;
            }
            dam
        }
        DamageKind::Nuke => {
            if profile.has(flag) {
                (dam * 2 + 2) / 5
            } else {
                dam
            }
        }
        DamageKind::Rocket => {
            if profile.has(flag) {
                dam / 2
            } else {
                dam
            }
        }
        DamageKind::Light | DamageKind::Dark => {
            if profile.has(flag) {
                dam * 4 / (rng.rnd(4) as i32 + 7)
            } else {
                dam
            }
        }
        _ => {
            if profile.has(flag) {
                dam * 6 / (rng.rnd(4) as i32 + 7)
            } else {
                dam
            }
        }
    }
}

/// Saving throw of a target against a caster of the given level.
///
/// Returns true when the target shrugs the effect off. Always draws exactly
/// one number so both target kinds consume the generator identically.
pub fn saving_throw(save_skill: i32, caster_level: i32, rng: &mut GameRng) -> bool {
    let chance = (save_skill - caster_level / 2).clamp(5, 95);
    (rng.rn2(100) as i32) < chance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_immunity_negates() {
        let mut rng = GameRng::new(1);
        let profile = ResistProfile::innate(Resistances::IM_FIRE);
        assert_eq!(reduce_damage(DamageKind::Fire, 300, &profile, &mut rng), 0);
    }

    #[test]
    fn test_double_resistance_stacks() {
        let mut rng = GameRng::new(1);
        let single = ResistProfile::innate(Resistances::RES_FIRE);
        let double = ResistProfile {
            innate: Resistances::RES_FIRE,
            temporary: Resistances::RES_FIRE,
        };
        assert_eq!(reduce_damage(DamageKind::Fire, 90, &single, &mut rng), 30);
        assert_eq!(reduce_damage(DamageKind::Fire, 90, &double, &mut rng), 10);
    }

    #[test]
    fn test_high_resistance_is_bounded() {
        let mut rng = GameRng::new(7);
        let profile = ResistProfile::innate(Resistances::RES_NETHER);
        for _ in 0..200 {
            let dam = reduce_damage(DamageKind::Nether, 110, &profile, &mut rng);
            // 6/11 .. 6/8 of the original
            assert!((60..=82).contains(&dam), "nether damage {dam}");
        }
    }

    #[test]
    fn test_unresisted_kind_passes_through() {
        let mut rng = GameRng::new(3);
        let profile = ResistProfile::innate(Resistances::all());
        assert_eq!(reduce_damage(DamageKind::Mana, 77, &profile, &mut rng), 77);
    }

    #[test]
    fn test_ice_uses_cold_protection() {
        let mut rng = GameRng::new(3);
        let profile = ResistProfile::innate(Resistances::IM_COLD);
        assert_eq!(reduce_damage(DamageKind::Ice, 50, &profile, &mut rng), 0);
    }

    #[test]
    fn test_saving_throw_is_clamped() {
        let mut rng = GameRng::new(9);
        let saves = (0..1000).filter(|_| saving_throw(500, 0, &mut rng)).count();
        assert!(saves < 1000, "a 95% cap should fail sometimes");
        let saves = (0..1000).filter(|_| saving_throw(-500, 0, &mut rng)).count();
        assert!(saves > 0, "a 5% floor should succeed sometimes");
    }
}
