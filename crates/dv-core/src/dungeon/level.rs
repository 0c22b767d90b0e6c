//! Level structure

use serde::{Deserialize, Serialize};

use super::{Cell, CellFlags, CellType, Position};
use crate::monster::{Monster, MonsterId, RaceId};
use crate::{COLNO, ROWNO};

/// Create default cells grid: granite surrounded by permanent wall
fn default_cells() -> Vec<Vec<Cell>> {
    let mut cells = vec![vec![Cell::granite(); ROWNO]; COLNO];
    for (x, column) in cells.iter_mut().enumerate() {
        for (y, cell) in column.iter_mut().enumerate() {
            if x == 0 || y == 0 || x == COLNO - 1 || y == ROWNO - 1 {
                *cell = Cell::permanent();
            }
        }
    }
    cells
}

/// Level flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelFlags {
    /// Fixed quest floor: terrain may not be reshaped
    pub fixed_quest: bool,
    /// Summoning is forbidden (arena-like floors)
    pub no_summon: bool,
    /// Teleportation within the floor is forbidden
    pub no_teleport: bool,
}

/// Trap kinds laid by the trap-creation spell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrapKind {
    TrapDoor,
    Pit,
    PoisonDart,
    FireRune,
    TeleportRune,
    SummonRune,
}

/// Trap on the level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trap {
    pub pos: Position,
    pub kind: TrapKind,
}

/// A corpse that raise-dead can animate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Corpse {
    pub pos: Position,
    pub race: RaceId,
}

/// Complete level structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    /// Dungeon depth; 0 is the town
    pub depth: u16,

    /// Map cells, indexed `[x][y]`
    #[serde(default = "default_cells")]
    pub cells: Vec<Vec<Cell>>,

    /// All monsters on this level
    pub monsters: Vec<Monster>,

    /// Traps
    pub traps: Vec<Trap>,

    /// Corpses lying on the floor
    pub corpses: Vec<Corpse>,

    /// Level flags
    pub flags: LevelFlags,

    /// Lighting and view caches must be recomputed
    #[serde(skip)]
    pub view_dirty: bool,

    /// Next monster ID to assign
    next_monster_id: u32,
}

impl Default for Level {
    fn default() -> Self {
        Self::new(1)
    }
}

impl Level {
    /// Create a new solid level at the given depth
    pub fn new(depth: u16) -> Self {
        Self {
            depth,
            cells: default_cells(),
            monsters: Vec::new(),
            traps: Vec::new(),
            corpses: Vec::new(),
            flags: LevelFlags::default(),
            view_dirty: false,
            next_monster_id: 1,
        }
    }

    /// Create a level whose whole interior is one lit room
    pub fn arena(depth: u16) -> Self {
        let mut level = Self::new(depth);
        for x in 1..COLNO - 1 {
            for y in 1..ROWNO - 1 {
                level.cells[x][y] = Cell::floor();
            }
        }
        level
    }

    /// Check if position is inside the map array
    pub const fn is_valid_pos(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < COLNO && (pos.y as usize) < ROWNO
    }

    /// Check if position is inside the map and off the outer wall
    pub const fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 1 && pos.y >= 1 && (pos.x as usize) < COLNO - 1 && (pos.y as usize) < ROWNO - 1
    }

    /// Get cell at position
    pub fn cell(&self, pos: Position) -> &Cell {
        &self.cells[pos.x as usize][pos.y as usize]
    }

    /// Get mutable cell at position
    pub fn cell_mut(&mut self, pos: Position) -> &mut Cell {
        &mut self.cells[pos.x as usize][pos.y as usize]
    }

    /// Set the terrain at a position
    pub fn set_terrain(&mut self, pos: Position, typ: CellType) {
        if self.is_valid_pos(pos) {
            self.cell_mut(pos).typ = typ;
        }
    }

    /// Town and fixed quest floors may not be reshaped
    pub fn is_protected(&self) -> bool {
        self.depth == 0 || self.flags.fixed_quest
    }

    /// Check if a creature could stand at position
    pub fn is_passable(&self, pos: Position) -> bool {
        self.in_bounds(pos) && self.cell(pos).typ.is_passable()
    }

    /// Passable, unoccupied by monsters, and not the given player position
    pub fn is_empty(&self, pos: Position, player: Position) -> bool {
        self.is_passable(pos) && pos != player && self.monster_at(pos).is_none()
    }

    /// Get monster at position
    pub fn monster_at(&self, pos: Position) -> Option<&Monster> {
        self.monsters.iter().find(|m| m.pos == pos)
    }

    /// Get monster by ID
    pub fn monster(&self, id: MonsterId) -> Option<&Monster> {
        self.monsters.iter().find(|m| m.id == id)
    }

    /// Get mutable monster by ID
    pub fn monster_mut(&mut self, id: MonsterId) -> Option<&mut Monster> {
        self.monsters.iter_mut().find(|m| m.id == id)
    }

    /// Add a monster to the level
    pub fn add_monster(&mut self, mut monster: Monster) -> MonsterId {
        let id = MonsterId(self.next_monster_id);
        self.next_monster_id += 1;
        monster.id = id;
        self.monsters.push(monster);
        id
    }

    /// Remove a monster from the level
    pub fn remove_monster(&mut self, id: MonsterId) -> Option<Monster> {
        let idx = self.monsters.iter().position(|m| m.id == id)?;
        Some(self.monsters.remove(idx))
    }

    /// Move a monster to a new position
    pub fn move_monster(&mut self, id: MonsterId, pos: Position) -> bool {
        match self.monster_mut(id) {
            Some(monster) => {
                monster.pos = pos;
                true
            }
            None => false,
        }
    }

    /// Get trap at position
    pub fn trap_at(&self, pos: Position) -> Option<&Trap> {
        self.traps.iter().find(|t| t.pos == pos)
    }

    /// Add a trap; fails on occupied or impassable tiles
    pub fn add_trap(&mut self, pos: Position, kind: TrapKind) -> bool {
        if !self.is_passable(pos) || self.trap_at(pos).is_some() {
            return false;
        }
        self.traps.push(Trap { pos, kind });
        true
    }

    /// Remove a trap at the given position
    pub fn remove_trap(&mut self, pos: Position) {
        self.traps.retain(|t| t.pos != pos);
    }

    /// Leave a corpse on the floor
    pub fn add_corpse(&mut self, pos: Position, race: RaceId) {
        self.corpses.push(Corpse { pos, race });
    }

    /// Take every corpse within `radius` of `center`
    pub fn take_corpses_within(&mut self, center: Position, radius: i32) -> Vec<Corpse> {
        let (near, far): (Vec<_>, Vec<_>) = self
            .corpses
            .drain(..)
            .partition(|c| c.pos.distance(&center) <= radius);
        self.corpses = far;
        near
    }

    /// Forget everything lying on a tile
    pub fn clear_tile_contents(&mut self, pos: Position) {
        self.remove_trap(pos);
        self.corpses.retain(|c| c.pos != pos);
    }

    /// Empty tiles whose distance to `center` lies in `min..=max`
    pub fn empty_tiles_within(
        &self,
        center: Position,
        min: i32,
        max: i32,
        player: Position,
    ) -> Vec<Position> {
        let mut tiles = Vec::new();
        for x in 1..COLNO - 1 {
            for y in 1..ROWNO - 1 {
                let pos = Position::new(x as i8, y as i8);
                let d = pos.distance(&center);
                if d >= min && d <= max && self.is_empty(pos, player) {
                    tiles.push(pos);
                }
            }
        }
        tiles
    }

    /// Turn off light and memory in a radius around `center`
    pub fn darken(&mut self, center: Position, radius: i32) -> usize {
        let mut count = 0;
        for dx in -radius..=radius {
            for dy in -radius..=radius {
                let Some(pos) = center.offset(dx, dy) else {
                    continue;
                };
                if !self.is_valid_pos(pos) || pos.distance(&center) > radius {
                    continue;
                }
                let cell = self.cell_mut(pos);
                if cell.flags.intersects(CellFlags::LIT | CellFlags::MARK) {
                    count += 1;
                }
                cell.flags.remove(CellFlags::LIT | CellFlags::MARK);
            }
        }
        self.view_dirty = true;
        count
    }

    /// Forget the remembered map
    pub fn forget_map(&mut self) {
        for column in &mut self.cells {
            for cell in column {
                cell.flags.remove(CellFlags::MARK);
            }
        }
        self.view_dirty = true;
    }

    /// Check if there's line of sight between two points (Bresenham's algorithm)
    pub fn has_line_of_sight(&self, from: Position, to: Position) -> bool {
        let mut x = from.x as i32;
        let mut y = from.y as i32;
        let x1 = to.x as i32;
        let y1 = to.y as i32;

        let dx = (x1 - x).abs();
        let dy = -(y1 - y).abs();
        let sx = if x < x1 { 1 } else { -1 };
        let sy = if y < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            // Check if current position blocks sight (but allow seeing the blocking tile)
            if x != from.x as i32 || y != from.y as i32 {
                let pos = Position::new(x as i8, y as i8);
                if !self.is_valid_pos(pos) {
                    return false;
                }
                if self.cell(pos).typ.blocks_sight() {
                    // Can see the blocking tile itself, but not beyond
                    return x == x1 && y == y1;
                }
            }

            if x == x1 && y == y1 {
                return true;
            }

            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }
}
