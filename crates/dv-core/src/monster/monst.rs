//! Monster instances

use serde::{Deserialize, Serialize};

use super::{RaceDef, RaceFlags, RaceId, SmartFlags};
use crate::combat::ResistProfile;
use crate::dungeon::Position;

/// Unique identifier for a monster on a level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct MonsterId(pub u32);

impl MonsterId {
    pub const NONE: MonsterId = MonsterId(0);
}

/// Timed monster conditions, in game turns
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonsterTimers {
    pub fast: u16,
    pub slow: u16,
    pub confused: u16,
    pub stunned: u16,
    pub blinded: u16,
    pub afraid: u16,
    pub held: u16,
    pub invulnerable: u16,
    pub asleep: u16,
}

impl MonsterTimers {
    /// Remove every beneficial timer
    pub fn clear_buffs(&mut self) {
        self.fast = 0;
        self.invulnerable = 0;
    }
}

/// A monster instance on the current floor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Monster {
    /// Unique identifier, assigned by the level
    pub id: MonsterId,

    pub race: RaceId,

    pub pos: Position,

    pub hp: i32,
    pub hp_max: i32,

    pub timers: MonsterTimers,

    /// What this monster has learned about the player
    pub smart: SmartFlags,

    /// Fights on the player's side
    pub pet: bool,
}

impl Monster {
    /// Create a fresh monster of the given race
    pub fn new(race: RaceId, pos: Position) -> Self {
        let hp = race.def().hp;
        Self {
            id: MonsterId::NONE,
            race,
            pos,
            hp,
            hp_max: hp,
            timers: MonsterTimers::default(),
            smart: SmartFlags::empty(),
            pet: false,
        }
    }

    pub fn def(&self) -> &'static RaceDef {
        self.race.def()
    }

    pub fn name(&self) -> &'static str {
        self.def().name
    }

    /// Name with a leading article, as used in messages
    pub fn the_name(&self) -> String {
        if self.def().is_unique() {
            self.name().to_string()
        } else {
            format!("the {}", self.name())
        }
    }

    /// Same as [`Monster::the_name`], capitalised to start a sentence
    pub fn cap_name(&self) -> String {
        let name = self.the_name();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        }
    }

    pub fn level(&self) -> i32 {
        self.def().level as i32
    }

    pub fn has(&self, flag: RaceFlags) -> bool {
        self.def().has(flag)
    }

    pub fn is_invisible(&self) -> bool {
        self.has(RaceFlags::INVISIBLE)
    }

    pub fn is_dead(&self) -> bool {
        self.hp < 0
    }

    pub fn is_undamaged(&self) -> bool {
        self.hp >= self.hp_max
    }

    /// Take damage; returns true if the monster died
    pub fn take_damage(&mut self, damage: i32) -> bool {
        if self.timers.invulnerable > 0 {
            return false;
        }
        self.hp = self.hp.saturating_sub(damage);
        self.is_dead()
    }

    /// Restore hit points up to the maximum; returns the amount restored
    pub fn heal(&mut self, amount: i32) -> i32 {
        let before = self.hp;
        self.hp = self.hp.saturating_add(amount.max(0)).min(self.hp_max);
        self.hp - before
    }

    pub fn resist_profile(&self) -> ResistProfile {
        ResistProfile::innate(self.def().resists)
    }

    /// Saving throw skill against spells
    pub fn save_skill(&self) -> i32 {
        self.level() + 25
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monster::races;

    #[test]
    fn test_new_monster_uses_race_hp() {
        let m = Monster::new(races::LICH, Position::new(3, 3));
        assert_eq!(m.hp, races::LICH.def().hp);
        assert!(m.is_undamaged());
        assert_eq!(m.the_name(), "the lich");
        assert_eq!(m.cap_name(), "The lich");
    }

    #[test]
    fn test_take_damage_and_heal() {
        let mut m = Monster::new(races::KOBOLD_SHAMAN, Position::new(3, 3));
        assert!(!m.take_damage(5));
        assert!(!m.is_undamaged());
        assert_eq!(m.heal(100), 5);
        assert!(m.take_damage(m.hp + 1));
    }

    #[test]
    fn test_invulnerable_takes_no_damage() {
        let mut m = Monster::new(races::KOBOLD_SHAMAN, Position::new(3, 3));
        m.timers.invulnerable = 3;
        assert!(!m.take_damage(1000));
        assert!(m.is_undamaged());
    }

    #[test]
    fn test_unique_name_has_no_article() {
        let m = Monster::new(races::BANOR, Position::new(3, 3));
        assert_eq!(m.the_name(), "Banor");
    }
}
