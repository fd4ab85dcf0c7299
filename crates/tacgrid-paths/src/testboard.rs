//! Test fixture: boards drawn as text.

use tacgrid_core::{Point, Range};

use crate::board::{Board, Tile};

/// A board parsed from a string map: `#` is a wall, `.` a walkable tile of
/// cost 1, and a digit a walkable tile with that move cost. Lines map to
/// rows top to bottom, so `y` grows downward in fixtures.
pub(crate) struct MapBoard {
    rows: Vec<Vec<Tile>>,
}

impl MapBoard {
    pub(crate) fn parse(map: &str) -> Self {
        let rows = map
            .trim()
            .lines()
            .enumerate()
            .map(|(y, line)| {
                line.trim()
                    .chars()
                    .enumerate()
                    .map(|(x, c)| {
                        let (walkable, move_cost) = match c {
                            '#' => (false, 1),
                            '.' => (true, 1),
                            d => (true, d.to_digit(10).expect("map cell") as i32),
                        };
                        Tile {
                            pos: Point::new(x as i32, y as i32),
                            walkable,
                            move_cost,
                        }
                    })
                    .collect()
            })
            .collect();
        Self { rows }
    }

    /// A fully open `w` × `h` board of cost-1 tiles.
    pub(crate) fn open(w: i32, h: i32) -> Self {
        let row = ".".repeat(w.max(0) as usize);
        let map = vec![row; h.max(0) as usize].join("\n");
        Self::parse(&map)
    }

    pub(crate) fn range(&self) -> Range {
        let h = self.rows.len() as i32;
        let w = self.rows.first().map_or(0, |r| r.len()) as i32;
        Range::new(0, 0, w, h)
    }
}

impl Board for MapBoard {
    fn tile(&self, p: Point) -> Option<Tile> {
        if p.x < 0 || p.y < 0 {
            return None;
        }
        self.rows.get(p.y as usize)?.get(p.x as usize).copied()
    }
}
