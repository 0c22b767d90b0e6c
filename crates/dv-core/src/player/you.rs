//! Main player structure

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::PlayerClass;
use crate::combat::{ResistProfile, Resistances};
use crate::dungeon::Position;
use crate::spell::MonsterSpell;

/// Timed player conditions, in game turns
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerTimers {
    pub blind: u16,
    pub confused: u16,
    pub stunned: u16,
    /// Paralysed; also blocks spell learning
    pub paralyzed: u16,
    pub slow: u16,
    pub afraid: u16,
    pub fast: u16,
    pub invulnerable: u16,
    /// Duration of the temporary resistances
    pub resist: u16,
}

/// The player character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct You {
    pub pos: Position,

    pub hp: i32,
    pub hp_max: i32,
    pub mana: i32,
    pub mana_max: i32,

    /// Experience level
    pub level: i32,
    pub class: PlayerClass,

    /// Saving throw skill against spells
    pub save_skill: i32,

    /// Intrinsic resistances (race, equipment)
    pub innate: Resistances,
    /// Timed resistances from potions and spells
    pub temporary: Resistances,

    pub timers: PlayerTimers,

    pub flying: bool,
    pub pass_wall: bool,
    pub see_invisible: bool,

    /// Concentrating on the caster to copy its spells
    pub learning: bool,

    /// Spells copied from monsters
    pub known_spells: BTreeSet<MonsterSpell>,

    /// A level teleport waits to be carried out by the game loop
    pub pending_level_teleport: bool,

    /// What killed the player, once hp drops below zero
    pub died_from: Option<String>,
}

impl Default for You {
    fn default() -> Self {
        Self::new(PlayerClass::default(), 1)
    }
}

impl You {
    pub fn new(class: PlayerClass, level: i32) -> Self {
        let hp = 10 + level * 10;
        Self {
            pos: Position::default(),
            hp,
            hp_max: hp,
            mana: level * 2,
            mana_max: level * 2,
            level,
            class,
            save_skill: class.base_save() + level,
            innate: Resistances::empty(),
            temporary: Resistances::empty(),
            timers: PlayerTimers::default(),
            flying: false,
            pass_wall: false,
            see_invisible: false,
            learning: false,
            known_spells: BTreeSet::new(),
            pending_level_teleport: false,
            died_from: None,
        }
    }

    pub fn resist_profile(&self) -> ResistProfile {
        ResistProfile {
            innate: self.innate,
            temporary: self.temporary,
        }
    }

    /// Resistances as visible to an observer
    pub fn displayed_resistances(&self) -> Resistances {
        self.innate | self.temporary
    }

    pub fn is_blind(&self) -> bool {
        self.timers.blind > 0
    }

    pub fn is_confused(&self) -> bool {
        self.timers.confused > 0
    }

    pub fn is_stunned(&self) -> bool {
        self.timers.stunned > 0
    }

    pub fn is_paralyzed(&self) -> bool {
        self.timers.paralyzed > 0
    }

    pub fn is_invulnerable(&self) -> bool {
        self.timers.invulnerable > 0
    }

    pub const fn is_dead(&self) -> bool {
        self.hp < 0
    }

    /// Take damage from `source`; returns true if this killed the player
    pub fn take_hit(&mut self, damage: i32, source: &str) -> bool {
        if damage <= 0 || self.is_invulnerable() {
            return false;
        }
        self.hp = self.hp.saturating_sub(damage);
        if self.is_dead() && self.died_from.is_none() {
            self.died_from = Some(source.to_string());
            return true;
        }
        false
    }

    /// Heal damage
    pub fn heal(&mut self, amount: i32) {
        self.hp = self.hp.saturating_add(amount).min(self.hp_max);
    }

    /// Lose up to `amount` mana; returns how much was actually lost
    pub fn drain_mana(&mut self, amount: i32) -> i32 {
        let lost = amount.clamp(0, self.mana.max(0));
        self.mana -= lost;
        lost
    }

    /// Strip temporary magical protection and haste
    pub fn dispel(&mut self) -> bool {
        let had = self.timers.fast > 0
            || self.timers.invulnerable > 0
            || self.timers.resist > 0
            || !self.temporary.is_empty();
        self.timers.fast = 0;
        self.timers.invulnerable = 0;
        self.timers.resist = 0;
        self.temporary = Resistances::empty();
        had
    }

    /// Whether the player is in a state where a spell can be copied
    pub fn can_concentrate(&self) -> bool {
        !self.is_blind() && !self.is_confused() && !self.is_stunned() && !self.is_paralyzed()
    }

    pub fn knows_spell(&self, spell: MonsterSpell) -> bool {
        self.known_spells.contains(&spell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_hit_records_cause() {
        let mut you = You::new(PlayerClass::Warrior, 1);
        assert!(!you.take_hit(5, "a kobold"));
        assert!(you.died_from.is_none());
        assert!(you.take_hit(100, "a dragon"));
        assert_eq!(you.died_from.as_deref(), Some("a dragon"));
        assert!(!you.take_hit(100, "a lich"));
        assert_eq!(you.died_from.as_deref(), Some("a dragon"));
    }

    #[test]
    fn test_invulnerable_player_is_not_hurt() {
        let mut you = You::default();
        you.timers.invulnerable = 2;
        let hp = you.hp;
        you.take_hit(50, "test");
        assert_eq!(you.hp, hp);
    }

    #[test]
    fn test_dispel_strips_buffs() {
        let mut you = You::default();
        you.timers.fast = 20;
        you.temporary = Resistances::RES_FIRE;
        assert!(you.dispel());
        assert_eq!(you.timers.fast, 0);
        assert!(you.temporary.is_empty());
        assert!(!you.dispel());
    }

    #[test]
    fn test_drain_mana_never_negative() {
        let mut you = You::new(PlayerClass::Mage, 5);
        assert_eq!(you.drain_mana(100), 10);
        assert_eq!(you.mana, 0);
    }

    #[test]
    fn test_concentration() {
        let mut you = You::default();
        assert!(you.can_concentrate());
        you.timers.stunned = 1;
        assert!(!you.can_concentrate());
    }
}
