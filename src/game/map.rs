//! Town tile grid and collision lookups.

use crate::entity::{TilePos, WorldPos};

pub const TOWN_WIDTH: usize = 20;
pub const TOWN_HEIGHT: usize = 15;

/// The town layout. See [`Tile`] for the codes.
#[rustfmt::skip]
const TOWN: [[u8; TOWN_WIDTH]; TOWN_HEIGHT] = [
    [5,5,5,5,5,5,5,5,5,5,5,5,5,5,5,5,5,5,5,5],
    [5,5,5,5,5,5,5,5,5,5,5,5,5,5,5,5,5,5,5,5],
    [5,5,5,5,5,0,0,0,0,0,0,0,0,0,0,0,0,5,5,5],
    [5,5,5,5,0,4,4,4,0,0,0,0,4,4,4,4,0,5,5,5],
    [5,5,5,5,0,4,4,4,0,0,0,0,4,4,4,4,0,5,5,5],
    [5,5,5,5,0,4,4,4,4,0,0,4,4,4,4,4,0,5,5,5],
    [5,5,5,5,0,0,0,0,0,0,0,0,6,0,0,0,0,5,5,5],
    [5,5,5,5,0,0,0,0,0,0,0,0,0,0,0,0,0,5,5,5],
    [5,5,5,5,0,4,4,4,4,4,0,0,0,4,0,0,0,5,5,5],
    [5,5,5,5,0,4,4,4,4,4,0,0,0,0,0,0,0,5,5,5],
    [5,5,5,5,1,0,0,6,6,6,0,0,0,0,0,5,5,5,5,5],
    [5,5,5,5,5,0,0,0,0,0,0,0,0,0,5,5,5,5,5,5],
    [5,5,5,5,5,5,5,5,5,5,5,5,5,5,5,5,5,5,5,5],
    [5,5,5,5,5,5,5,5,5,5,5,5,5,5,5,5,5,5,5,5],
    [5,5,5,5,5,5,5,5,5,5,5,5,5,5,5,5,5,5,5,5],
];

/// Tile kinds, by their code in the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    Grass,
    Path,
    Water,
    Wall,
    Building,
    Tree,
    Flowers,
    Fence,
}

impl Tile {
    pub const fn from_code(code: u8) -> Option<Self> {
        Some(match code {
            0 => Self::Grass,
            1 => Self::Path,
            2 => Self::Water,
            3 => Self::Wall,
            4 => Self::Building,
            5 => Self::Tree,
            6 => Self::Flowers,
            7 => Self::Fence,
            _ => return None,
        })
    }

    pub const fn blocks_movement(self) -> bool {
        matches!(
            self,
            Self::Water | Self::Wall | Self::Building | Self::Tree | Self::Fence
        )
    }
}

/// Whether a raw tile code is in the blocking set. Unknown codes walk.
pub fn code_blocks(code: u8) -> bool {
    Tile::from_code(code).is_some_and(Tile::blocks_movement)
}

/// Immutable grid of tile codes.
#[derive(Debug, Clone, PartialEq)]
pub struct TileMap {
    width: i32,
    height: i32,
    tile_size: f32,
    codes: Vec<u8>,
}

impl TileMap {
    /// Build a map from equally long rows.
    pub fn from_rows<const W: usize>(rows: &[[u8; W]], tile_size: f32) -> Self {
        Self {
            width: i32::try_from(W).unwrap_or(i32::MAX),
            height: i32::try_from(rows.len()).unwrap_or(i32::MAX),
            tile_size,
            codes: rows.iter().flatten().copied().collect(),
        }
    }

    pub fn town(tile_size: f32) -> Self {
        Self::from_rows(&TOWN, tile_size)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    /// Size of the whole map in world units.
    pub fn world_size(&self) -> (f32, f32) {
        (
            self.width as f32 * self.tile_size,
            self.height as f32 * self.tile_size,
        )
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        (0..self.width).contains(&x) && (0..self.height).contains(&y)
    }

    /// Raw code at a cell, or `None` outside the map.
    pub fn code_at(&self, x: i32, y: i32) -> Option<u8> {
        if !self.in_bounds(x, y) {
            return None;
        }
        let index = usize::try_from(y * self.width + x).ok()?;
        self.codes.get(index).copied()
    }

    pub fn tile_at(&self, x: i32, y: i32) -> Option<Tile> {
        self.code_at(x, y).and_then(Tile::from_code)
    }

    /// `false` outside the map and on blocking tiles, `true` otherwise.
    pub fn is_walkable(&self, x: i32, y: i32) -> bool {
        self.code_at(x, y).is_some_and(|code| !code_blocks(code))
    }

    pub fn world_to_tile(&self, pos: WorldPos) -> TilePos {
        TilePos::new(
            (pos.x / self.tile_size).floor() as i32,
            (pos.y / self.tile_size).floor() as i32,
        )
    }

    pub fn tile_center(&self, tile: TilePos) -> WorldPos {
        WorldPos::new(
            (tile.x as f32 + 0.5) * self.tile_size,
            (tile.y as f32 + 0.5) * self.tile_size,
        )
    }

    /// Walkability of the tile under a world position.
    pub fn is_world_walkable(&self, pos: WorldPos) -> bool {
        let tile = self.world_to_tile(pos);
        self.is_walkable(tile.x, tile.y)
    }

    /// Every cell with its code, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (TilePos, u8)> + '_ {
        let width = self.width.max(1);
        (0i32..)
            .zip(&self.codes)
            .map(move |(i, code)| (TilePos::new(i % width, i / width), *code))
    }
}
