//! Map cell types

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Cell/terrain type
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum CellType {
    #[default]
    Granite = 0,
    PermanentWall = 1,
    MineralVein = 2,
    Rubble = 3,
    Floor = 4,
    OpenDoor = 5,
    ClosedDoor = 6,
    UpStairs = 7,
    DownStairs = 8,
}

impl CellType {
    /// Check if a creature can stand here
    pub const fn is_passable(&self) -> bool {
        matches!(
            self,
            CellType::Floor | CellType::OpenDoor | CellType::UpStairs | CellType::DownStairs
        )
    }

    /// Check if this cell blocks line of sight
    pub const fn blocks_sight(&self) -> bool {
        matches!(
            self,
            CellType::Granite
                | CellType::PermanentWall
                | CellType::MineralVein
                | CellType::Rubble
                | CellType::ClosedDoor
        )
    }

    /// Permanent features are never changed by spells or earthquakes
    pub const fn is_permanent(&self) -> bool {
        matches!(self, CellType::PermanentWall)
    }

    /// Get the display character for this cell type
    pub const fn symbol(&self) -> char {
        match self {
            CellType::Granite => '#',
            CellType::PermanentWall => '#',
            CellType::MineralVein => '%',
            CellType::Rubble => ':',
            CellType::Floor => '.',
            CellType::OpenDoor => '\'',
            CellType::ClosedDoor => '+',
            CellType::UpStairs => '<',
            CellType::DownStairs => '>',
        }
    }
}

bitflags! {
    /// Per-cell state flags
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct CellFlags: u8 {
        /// Part of a room
        const ROOM = 0x01;
        /// Permanently lit
        const LIT = 0x02;
        /// Remembered by the player
        const MARK = 0x04;
        /// Vault or other protected interior
        const ICKY = 0x08;
    }
}

// Manual serde impl for CellFlags
impl Serialize for CellFlags {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.bits().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CellFlags {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = u8::deserialize(deserializer)?;
        Ok(CellFlags::from_bits_truncate(bits))
    }
}

/// A single map cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// Actual terrain type
    pub typ: CellType,

    /// Room, light and memory flags
    pub flags: CellFlags,
}

impl Cell {
    /// Create a new granite cell
    pub const fn granite() -> Self {
        Self {
            typ: CellType::Granite,
            flags: CellFlags::empty(),
        }
    }

    /// Create a permanent wall cell
    pub const fn permanent() -> Self {
        Self {
            typ: CellType::PermanentWall,
            flags: CellFlags::empty(),
        }
    }

    /// Create a lit room floor cell
    pub const fn floor() -> Self {
        Self {
            typ: CellType::Floor,
            flags: CellFlags::ROOM.union(CellFlags::LIT),
        }
    }

    pub fn is_lit(&self) -> bool {
        self.flags.contains(CellFlags::LIT)
    }

    pub fn is_remembered(&self) -> bool {
        self.flags.contains(CellFlags::MARK)
    }
}
