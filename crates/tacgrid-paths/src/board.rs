use tacgrid_core::Point;

/// Snapshot of a single board cell.
///
/// Tiles are owned by the board; searches copy them out through
/// [`Board::tile`] and never write back. Walkability may change between
/// queries (units move, terrain changes) but must stay fixed for the
/// duration of a single query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    /// Grid position; identifies the tile.
    pub pos: Point,
    /// Whether a unit may enter or stand on this tile.
    pub walkable: bool,
    /// Movement points spent to enter this tile. Non-negative; a plain
    /// tile costs 1. Only consumed by the movement-range query.
    pub move_cost: i32,
}

/// The external grid collaborator: resolves coordinates to tiles.
pub trait Board {
    /// Resolve `p` to a tile, or `None` when `p` is off the board.
    ///
    /// Must be a pure lookup with no side effects.
    fn tile(&self, p: Point) -> Option<Tile>;
}
