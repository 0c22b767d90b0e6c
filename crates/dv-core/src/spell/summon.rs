//! Summoning

use super::effect::SummonKind;
use super::target::monster_message;
use super::{CastContext, CasterSnapshot, SpellOutcome, TargetRef};
use crate::dungeon::Position;
use crate::monster::{Monster, RACES, RaceDef, RaceFlags, RaceId};
use crate::world::{GameState, VisualEffect};

/// How many rings beyond the configured range are searched for room
const SUMMON_RING_SLACK: i32 = 3;

/// Whether a race answers a summons of the given category
pub fn fits_category(kind: SummonKind, race: &RaceDef, caster: &CasterSnapshot) -> bool {
    if race.has(RaceFlags::QUESTOR) || (race.is_unique() && !kind.allows_uniques()) {
        return false;
    }
    match kind {
        SummonKind::Kin => race.symbol == caster.symbol,
        SummonKind::Cyber => race.has(RaceFlags::CYBER),
        SummonKind::Monster | SummonKind::Monsters => true,
        SummonKind::Ant => race.has(RaceFlags::ANT),
        SummonKind::Spider => race.has(RaceFlags::SPIDER),
        SummonKind::Hound => race.has(RaceFlags::HOUND),
        SummonKind::Hydra => race.has(RaceFlags::HYDRA),
        SummonKind::Angel => race.has(RaceFlags::ANGEL),
        SummonKind::Demon => race.has(RaceFlags::DEMON),
        SummonKind::Undead => race.has(RaceFlags::UNDEAD),
        SummonKind::Dragon => race.has(RaceFlags::DRAGON),
        SummonKind::HiUndead => race.has(RaceFlags::UNDEAD) && race.level >= 30,
        SummonKind::HiDragon => race.has(RaceFlags::DRAGON) && race.symbol == 'D',
        SummonKind::Amberites => race.has(RaceFlags::AMBERITE),
        SummonKind::Uniques => race.is_unique(),
    }
}

/// Find a free tile near `center`, widening the search ring by ring
pub(super) fn summon_tile(state: &mut GameState, center: Position) -> Option<Position> {
    let first = state.options.summon_range.max(1) as i32;
    let player = state.player.pos;
    for range in first..=first + SUMMON_RING_SLACK {
        let tiles = state.current_level.empty_tiles_within(center, 1, range, player);
        if let Some(&pos) = state.rng.choose(&tiles) {
            return Some(pos);
        }
    }
    None
}

/// Place a new monster; returns false when there is no room
pub(super) fn place_monster(
    state: &mut GameState,
    race: RaceId,
    center: Position,
    pet: bool,
) -> bool {
    let Some(pos) = summon_tile(state, center) else {
        return false;
    };
    let mut monster = Monster::new(race, pos);
    monster.pet = pet;
    let id = state.current_level.add_monster(monster);
    tracing::trace!(monster = id.0, race = race.def().name, %pos, "placed");
    state.visual(VisualEffect::Summon { at: pos });
    true
}

pub(super) fn summon(state: &mut GameState, ctx: &CastContext, kind: SummonKind) -> SpellOutcome {
    if state.current_level.flags.no_summon {
        return SpellOutcome::Invalid;
    }

    let wanted = if ctx.special {
        kind.pet_group_size()
    } else {
        kind.group_size()
    };
    let max_level = (state.current_level.depth as i32).max(ctx.caster.level);
    let mut candidates: Vec<RaceId> = RACES
        .iter()
        .enumerate()
        .filter(|(_, race)| race.level as i32 <= max_level && fits_category(kind, race, &ctx.caster))
        .map(|(i, _)| RaceId(i as u16))
        .filter(|race| {
            !race.def().is_unique() || !state.current_level.monsters.iter().any(|m| m.race == *race)
        })
        .collect();

    let pet = ctx.special || ctx.caster.pet;
    let mut placed = 0;
    for _ in 0..wanted {
        let Some(&race) = state.rng.choose(&candidates) else {
            break;
        };
        if !place_monster(state, race, ctx.target_pos, pet) {
            break;
        }
        placed += 1;
        // A unique can only answer once
        if race.def().is_unique() {
            candidates.retain(|r| *r != race);
        }
    }

    if placed == 0 {
        return SpellOutcome::Invalid;
    }

    let msg = match (ctx.target, placed) {
        (TargetRef::Player, 1) => format!("{} summons help!", ctx.caster.cap_name()),
        (TargetRef::Player, _) => format!("{} summons monsters!", ctx.caster.cap_name()),
        (TargetRef::Monster(_), _) => format!("{} magically summons help!", ctx.caster.cap_name()),
    };
    if ctx.target == TargetRef::Player {
        state.message(msg);
    } else {
        monster_message(state, ctx.caster.id, msg);
    }
    SpellOutcome::damaged(placed, false)
}
