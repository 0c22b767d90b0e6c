//! Core engine constants

/// Map dimensions
pub const COLNO: usize = 80;
pub const ROWNO: usize = 24;

/// Maximum distance at which the player can see a monster
pub const MAX_SIGHT: i32 = 20;

/// Earthquake radius is clamped to this value
pub const MAX_QUAKE_RADIUS: i32 = 12;

/// Percent chance that a non-epicenter tile is left alone by an earthquake
pub const QUAKE_SPARE_CHANCE: u32 = 85;

/// Damage dealt when an earthquake leaves the player nowhere to go
pub const QUAKE_CRUSH_DAMAGE: i32 = 200;

/// Teleport distances (blink, self-teleport, teleport-away)
pub const BLINK_DISTANCE: i32 = 10;
pub const TELEPORT_DISTANCE: i32 = MAX_SIGHT * 2 + 5;
pub const TELEPORT_AWAY_DISTANCE: i32 = 100;

/// Radius of the darkness spell and of the raise-dead corpse search
pub const DARKNESS_RADIUS: i32 = 3;
pub const RAISE_DEAD_RADIUS: i32 = 5;

/// Radius of the earthquake triggered by the Earthshaker
pub const EARTHSHAKER_QUAKE_RADIUS: i32 = 8;

/// Number of spell identifiers in each band
pub const SPELL_BAND_WIDTH: u8 = 32;

/// Total size of the spell identifier space
pub const SPELL_ID_COUNT: u8 = SPELL_BAND_WIDTH * 3;
