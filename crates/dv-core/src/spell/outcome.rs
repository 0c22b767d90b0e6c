//! Result of resolving one spell

/// What happened when a spell was resolved
///
/// `learnable` only exists on `Applied`, so an invalid resolution can never
/// feed the learning mechanics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpellOutcome {
    /// The id was unknown or the effect could not take place
    #[default]
    Invalid,
    Applied {
        /// Final damage dealt, or the number of creatures summoned
        damage: Option<i32>,
        /// The occurrence may teach the player or the caster something
        learnable: bool,
    },
}

impl SpellOutcome {
    pub const fn applied(learnable: bool) -> Self {
        SpellOutcome::Applied {
            damage: None,
            learnable,
        }
    }

    pub const fn damaged(damage: i32, learnable: bool) -> Self {
        SpellOutcome::Applied {
            damage: Some(damage),
            learnable,
        }
    }

    pub const fn is_valid(&self) -> bool {
        matches!(self, SpellOutcome::Applied { .. })
    }

    pub const fn is_learnable(&self) -> bool {
        matches!(self, SpellOutcome::Applied { learnable: true, .. })
    }

    pub const fn damage(&self) -> Option<i32> {
        match self {
            SpellOutcome::Applied { damage, .. } => *damage,
            SpellOutcome::Invalid => None,
        }
    }

    /// Same outcome with learning suppressed
    pub const fn unlearnable(self) -> Self {
        match self {
            SpellOutcome::Applied { damage, .. } => SpellOutcome::Applied {
                damage,
                learnable: false,
            },
            SpellOutcome::Invalid => SpellOutcome::Invalid,
        }
    }
}
