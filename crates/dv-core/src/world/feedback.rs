//! Animation requests queued for the front end

use serde::{Deserialize, Serialize};

use crate::combat::DamageKind;
use crate::dungeon::Position;

/// A visual effect a front end may animate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisualEffect {
    Bolt {
        from: Position,
        to: Position,
        kind: DamageKind,
    },
    Ball {
        center: Position,
        radius: i32,
        kind: DamageKind,
    },
    Breath {
        from: Position,
        to: Position,
        radius: i32,
        kind: DamageKind,
    },
    /// A creature vanished from one tile and appeared on another
    Teleport { from: Position, to: Position },
    Summon { at: Position },
    Quake { center: Position, radius: i32 },
}
