use crate::constants::{MAP_HEIGHT, MAP_WIDTH, TILE_SIZE};

/// Position of a tile on the map, in tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TilePos {
    pub x: u32,
    pub y: u32,
}

impl TilePos {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Map size in pixels as `(width, height)`.
pub fn map_pixel_size() -> (u32, u32) {
    (MAP_WIDTH * TILE_SIZE, MAP_HEIGHT * TILE_SIZE)
}

pub fn tile_in_bounds(pos: TilePos) -> bool {
    pos.x < MAP_WIDTH && pos.y < MAP_HEIGHT
}

/// Tile containing the pixel at `(x, y)`, or `None` outside the map.
pub fn tile_at_pixel(x: f64, y: f64) -> Option<TilePos> {
    let (width, height) = map_pixel_size();
    if !(x >= 0.0 && y >= 0.0 && x < width as f64 && y < height as f64) {
        return None;
    }

    let tile = TILE_SIZE as f64;
    Some(TilePos::new((x / tile) as u32, (y / tile) as u32))
}

/// Top-left pixel of a tile.
pub fn tile_origin(pos: TilePos) -> Option<(u32, u32)> {
    if !tile_in_bounds(pos) {
        return None;
    }
    Some((pos.x * TILE_SIZE, pos.y * TILE_SIZE))
}
