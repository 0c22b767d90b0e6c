//! Spells a caster casts on itself

use super::damage::heal_amount;
use super::effect::SupportKind;
use super::target::monster_message;
use super::{CastContext, SpellOutcome};
use crate::world::GameState;

const HASTE_TURNS: u16 = 100;

pub(super) fn support(state: &mut GameState, ctx: &CastContext, kind: SupportKind) -> SpellOutcome {
    let heal = heal_amount(&ctx.caster);
    let Some(caster) = state.current_level.monster_mut(ctx.caster.id) else {
        return SpellOutcome::Invalid;
    };

    let name = caster.cap_name();
    let msg = match kind {
        SupportKind::Haste => {
            caster.timers.fast = caster.timers.fast.saturating_add(HASTE_TURNS);
            format!("{} starts moving faster.", name)
        }
        SupportKind::Heal => {
            caster.heal(heal);
            if caster.timers.afraid > 0 {
                caster.timers.afraid = 0;
                format!("{} looks healthier and recovers its courage.", name)
            } else {
                format!("{} looks healthier.", name)
            }
        }
        SupportKind::Invulnerability => {
            let invuln_turns = state.rng.rnd(4) as u16 + 4;
            caster.timers.invulnerable = caster.timers.invulnerable.max(invuln_turns);
            format!("{} is surrounded by a globe of invulnerability.", name)
        }
    };
    monster_message(state, ctx.caster.id, msg);
    SpellOutcome::applied(false)
}
