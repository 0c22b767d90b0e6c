//! Caster snapshots, targets and the cast context
//!
//! Primitives never hold a borrow of the caster: its fields are copied into
//! a [`CasterSnapshot`] before dispatch so the floor can be mutated freely.

use super::MonsterSpell;
use crate::combat::{DamageKind, ResistProfile};
use crate::dungeon::Position;
use crate::monster::{Monster, MonsterId, RaceFlags, RaceId};
use crate::world::{GameState, player_can_see_monster};

/// Snapshot of the caster taken before the spell resolves
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CasterSnapshot {
    pub id: MonsterId,
    pub race: RaceId,
    /// Name with article, lower case
    pub name: String,
    pub symbol: char,
    pub pos: Position,
    pub level: i32,
    pub hp: i32,
    pub hp_max: i32,
    pub flags: RaceFlags,
    pub pet: bool,
}

impl CasterSnapshot {
    pub fn from_monster(m: &Monster) -> Self {
        Self {
            id: m.id,
            race: m.race,
            name: m.the_name(),
            symbol: m.def().symbol,
            pos: m.pos,
            level: m.level(),
            hp: m.hp,
            hp_max: m.hp_max,
            flags: m.def().flags,
            pet: m.pet,
        }
    }

    /// Effective level used by damage formulas; never below 1
    pub fn rlev(&self) -> i32 {
        self.level.max(1)
    }

    pub fn is_powerful(&self) -> bool {
        self.flags.contains(RaceFlags::POWERFUL)
    }

    /// Name capitalised for the start of a sentence
    pub fn cap_name(&self) -> String {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        }
    }
}

/// Who a spell is aimed at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetRef {
    Player,
    Monster(MonsterId),
}

/// Everything a primitive needs to know about one cast
#[derive(Debug, Clone)]
pub struct CastContext {
    pub spell: MonsterSpell,
    pub caster: CasterSnapshot,
    pub target: TargetRef,
    pub target_pos: Position,
    /// Cast on the player's behalf
    pub special: bool,
}

// ============================================================================
// Target queries
// ============================================================================

pub(super) fn target_pos(state: &GameState, target: TargetRef) -> Option<Position> {
    match target {
        TargetRef::Player => Some(state.player.pos),
        TargetRef::Monster(id) => state.current_level.monster(id).map(|m| m.pos),
    }
}

pub(super) fn target_profile(state: &GameState, target: TargetRef) -> Option<ResistProfile> {
    match target {
        TargetRef::Player => Some(state.player.resist_profile()),
        TargetRef::Monster(id) => state.current_level.monster(id).map(Monster::resist_profile),
    }
}

pub(super) fn target_save(state: &GameState, target: TargetRef) -> Option<i32> {
    match target {
        TargetRef::Player => Some(state.player.save_skill),
        TargetRef::Monster(id) => state.current_level.monster(id).map(Monster::save_skill),
    }
}

/// Capitalised name of a monster target, or None for the player
pub(super) fn monster_name(state: &GameState, target: TargetRef) -> Option<String> {
    match target {
        TargetRef::Player => None,
        TargetRef::Monster(id) => state.current_level.monster(id).map(Monster::cap_name),
    }
}

/// Emit a message about a monster only if the player can see it
pub(super) fn monster_message(state: &mut GameState, id: MonsterId, msg: impl Into<String>) {
    if player_can_see_monster(state, id) {
        state.message(msg);
    }
}

// ============================================================================
// Damage application
// ============================================================================

/// Apply already-resisted damage to a target, removing it if it dies
pub(super) fn damage_target(
    state: &mut GameState,
    caster: &CasterSnapshot,
    target: TargetRef,
    damage: i32,
    kind: DamageKind,
) {
    match target {
        TargetRef::Player => {
            if damage > 0 {
                state.message(format!("You are hit by {}!", kind.noun()));
                state.player.take_hit(damage, &caster.name);
            } else {
                state.message("You are unharmed.");
            }
        }
        TargetRef::Monster(id) => {
            let Some(monster) = state.current_level.monster_mut(id) else {
                return;
            };
            let name = monster.cap_name();
            let died = monster.take_damage(damage);
            if died {
                monster_message(state, id, format!("{} is destroyed.", name));
                tracing::debug!(monster = id.0, caster = caster.id.0, %kind, "killed by spell");
                state.current_level.remove_monster(id);
            } else if damage > 0 {
                monster_message(state, id, format!("{} is hit by {}.", name, kind.noun()));
            } else {
                monster_message(state, id, format!("{} is unharmed.", name));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameRng;
    use crate::monster::races;

    #[test]
    fn test_snapshot_copies_caster() {
        let m = Monster::new(races::ANCIENT_RED_DRAGON, Position::new(4, 5));
        let snap = CasterSnapshot::from_monster(&m);
        assert_eq!(snap.hp, 880);
        assert!(snap.is_powerful());
        assert_eq!(snap.cap_name(), "The ancient red dragon");
    }

    #[test]
    fn test_rlev_never_zero() {
        let mut snap = CasterSnapshot::from_monster(&Monster::new(races::GRENADE, Position::new(1, 1)));
        snap.level = 0;
        assert_eq!(snap.rlev(), 1);
    }

    #[test]
    fn test_lethal_damage_removes_monster() {
        let mut state = GameState::new(GameRng::new(3));
        let caster = state
            .current_level
            .add_monster(Monster::new(races::LICH, Position::new(30, 12)));
        let victim = state
            .current_level
            .add_monster(Monster::new(races::KOBOLD_SHAMAN, Position::new(35, 12)));
        let snap = CasterSnapshot::from_monster(state.current_level.monster(caster).unwrap());
        damage_target(&mut state, &snap, TargetRef::Monster(victim), 100, DamageKind::Fire);
        assert!(state.current_level.monster(victim).is_none());
    }

    #[test]
    fn test_player_death_names_caster() {
        let mut state = GameState::new(GameRng::new(3));
        let caster = state
            .current_level
            .add_monster(Monster::new(races::LICH, Position::new(30, 12)));
        let snap = CasterSnapshot::from_monster(state.current_level.monster(caster).unwrap());
        damage_target(&mut state, &snap, TargetRef::Player, 1000, DamageKind::Nether);
        assert_eq!(state.player.died_from.as_deref(), Some("the lich"));
    }
}
