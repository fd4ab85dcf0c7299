use tacgrid_core::Point;

use crate::board::{Board, Tile};

/// Neighbor enumeration mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Directions {
    /// The four orthogonal neighbors.
    Cardinal,
    /// Orthogonal plus diagonal neighbors.
    #[default]
    Eight,
}

/// Offsets in fixed order: the four orthogonal directions first, then the
/// four diagonals. The order is part of the contract — it decides open-list
/// insertion order and therefore tie-breaking between equal-cost routes.
const OFFSETS: [Point; 8] = [
    Point::new(0, 1),
    Point::new(0, -1),
    Point::new(-1, 0),
    Point::new(1, 0),
    Point::new(-1, 1),
    Point::new(1, 1),
    Point::new(-1, -1),
    Point::new(1, -1),
];

/// Cached neighbor resolution helper.
///
/// Resolves the adjacent positions of a cell through the [`Board`],
/// dropping offsets that fall off the board. No walkability filtering
/// happens here — callers filter as appropriate for their query.
pub struct Neighbors {
    buf: Vec<Tile>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(8),
        }
    }

    /// Resolve the neighbors of `p` in fixed deterministic order.
    pub fn resolve(&mut self, board: &impl Board, p: Point, dirs: Directions) -> &[Tile] {
        self.buf.clear();
        let count = match dirs {
            Directions::Cardinal => 4,
            Directions::Eight => 8,
        };
        for &d in &OFFSETS[..count] {
            if let Some(t) = board.tile(p + d) {
                self.buf.push(t);
            }
        }
        &self.buf
    }
}
