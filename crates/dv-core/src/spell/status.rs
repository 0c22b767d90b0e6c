//! Status afflictions and dispel

use super::effect::StatusKind;
use super::target::{monster_message, monster_name, target_profile, target_save};
use super::{CastContext, SpellOutcome, TargetRef};
use crate::combat::saving_throw;
use crate::world::GameState;

/// How an affliction attempt ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusRoll {
    /// The target's resistance blocks it
    Immune,
    /// The target made its saving throw
    Saved,
    /// The affliction took hold for this many turns
    Afflicted(u16),
}

/// Roll an affliction against a target: immunity, then save, then duration.
///
/// Returns None if the target does not exist.
pub fn roll_status(
    state: &mut GameState,
    target: TargetRef,
    kind: StatusKind,
    caster_level: i32,
) -> Option<StatusRoll> {
    let profile = target_profile(state, target)?;
    let save = target_save(state, target)?;

    if kind.blocked_by().is_some_and(|flag| profile.has(flag)) {
        return Some(StatusRoll::Immune);
    }
    if saving_throw(save, caster_level, &mut state.rng) {
        return Some(StatusRoll::Saved);
    }
    let turns = match kind {
        StatusKind::Blind => 12 + state.rng.rnd(4),
        _ => state.rng.rnd(4) + 4,
    };
    Some(StatusRoll::Afflicted(turns as u16))
}

pub(super) fn status(state: &mut GameState, ctx: &CastContext, kind: StatusKind) -> SpellOutcome {
    if kind == StatusKind::Dispel {
        return dispel(state, ctx);
    }

    let learnable = kind.blocked_by().is_some();
    let Some(roll) = roll_status(state, ctx.target, kind, ctx.caster.rlev()) else {
        return SpellOutcome::Invalid;
    };

    match ctx.target {
        TargetRef::Player => afflict_player(state, kind, roll),
        TargetRef::Monster(id) => {
            let name = monster_name(state, ctx.target).unwrap_or_default();
            let msg = match roll {
                StatusRoll::Immune => format!("{} is unaffected.", name),
                StatusRoll::Saved => format!("{} resists!", name),
                StatusRoll::Afflicted(turns) => {
                    if let Some(m) = state.current_level.monster_mut(id) {
                        let timer = match kind {
                            StatusKind::Scare => &mut m.timers.afraid,
                            StatusKind::Blind => &mut m.timers.blinded,
                            StatusKind::Confuse => &mut m.timers.confused,
                            StatusKind::Slow => &mut m.timers.slow,
                            StatusKind::Hold | StatusKind::Dispel => &mut m.timers.held,
                        };
                        *timer = timer.saturating_add(turns);
                    }
                    match kind {
                        StatusKind::Scare => format!("{} flees in terror!", name),
                        StatusKind::Blind => format!("{} is blinded!", name),
                        StatusKind::Confuse => format!("{} looks confused.", name),
                        StatusKind::Slow => format!("{} starts moving slower.", name),
                        StatusKind::Hold | StatusKind::Dispel => format!("{} is paralyzed!", name),
                    }
                }
            };
            monster_message(state, id, msg);
        }
    }
    SpellOutcome::applied(learnable)
}

fn afflict_player(state: &mut GameState, kind: StatusKind, roll: StatusRoll) {
    let msg = match roll {
        StatusRoll::Immune => match kind {
            StatusKind::Scare => "You refuse to be frightened.",
            _ => "You are unaffected!",
        },
        StatusRoll::Saved => "You resist the effects!",
        StatusRoll::Afflicted(turns) => {
            let timers = &mut state.player.timers;
            let (timer, msg) = match kind {
                StatusKind::Scare => (&mut timers.afraid, "You are terrified!"),
                StatusKind::Blind => (&mut timers.blind, "You are blinded!"),
                StatusKind::Confuse => (&mut timers.confused, "You feel confused."),
                StatusKind::Slow => (&mut timers.slow, "You feel yourself moving slower!"),
                StatusKind::Hold | StatusKind::Dispel => (&mut timers.paralyzed, "You are paralyzed!"),
            };
            *timer = timer.saturating_add(turns);
            msg
        }
    };
    state.message(msg);
}

fn dispel(state: &mut GameState, ctx: &CastContext) -> SpellOutcome {
    match ctx.target {
        TargetRef::Player => {
            if state.player.dispel() {
                state.message("You feel your magical protection fade.");
            }
        }
        TargetRef::Monster(id) => {
            let Some(m) = state.current_level.monster_mut(id) else {
                return SpellOutcome::Invalid;
            };
            m.timers.clear_buffs();
        }
    }
    SpellOutcome::applied(false)
}
