//! Monster spell resolution
//!
//! A spell id is looked up in one descriptor table ([`MonsterSpell::effect`])
//! and executed by one generic executor against either the player or a
//! monster. [`monspell_to_player`] and [`monspell_to_monster`] add the
//! learning mechanics on top.

mod attack;
mod curse;
mod damage;
mod dispatch;
mod effect;
mod id;
mod learn;
mod outcome;
mod special;
mod status;
mod summon;
mod support;
mod target;
mod utility;

pub use damage::{hand_of_doom_damage, heal_amount, spell_damage};
pub use dispatch::{cast_at_monster, cast_at_player, resolve};
pub use effect::{Effect, PlayerOnlyEffect, StatusKind, SummonKind, SupportKind, UtilityKind};
pub use id::{MonsterSpell, SpellBand, SpellId, SpellInfo};
pub use learn::{
    learn_spell, monspell_to_monster, monspell_to_player, relevant_resistances, update_smart_learn,
};
pub use outcome::SpellOutcome;
pub use status::{StatusRoll, roll_status};
pub use summon::fits_category;
pub use target::{CastContext, CasterSnapshot, TargetRef};
