//! Player class

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Player class
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum PlayerClass {
    #[default]
    Warrior,
    Mage,
    Priest,
    Rogue,
    Ranger,
    Paladin,
    #[strum(serialize = "BlueMage", serialize = "blue-mage")]
    BlueMage,
    Imitator,
}

impl PlayerClass {
    /// Classes that can copy the spells monsters cast at them
    pub const fn can_imitate(&self) -> bool {
        matches!(self, PlayerClass::BlueMage | PlayerClass::Imitator)
    }

    /// Base saving throw skill at experience level 1
    pub const fn base_save(&self) -> i32 {
        match self {
            PlayerClass::Warrior => 18,
            PlayerClass::Mage => 36,
            PlayerClass::Priest => 30,
            PlayerClass::Rogue => 29,
            PlayerClass::Ranger => 30,
            PlayerClass::Paladin => 25,
            PlayerClass::BlueMage => 33,
            PlayerClass::Imitator => 28,
        }
    }
}
