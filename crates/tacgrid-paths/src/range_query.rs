use tacgrid_core::Point;

use crate::PathField;
use crate::board::{Board, Tile};
use crate::error::GridError;

impl PathField {
    /// The walkable tiles within Manhattan distance `range` of `start`.
    ///
    /// Pure geometric enumeration of the Manhattan ball (a diamond), no
    /// traversal: walls between `start` and a tile do not hide it.
    /// Walkability acts as a filter here — a tile a unit could stand on —
    /// not as a movement rule. When `exclude_self` is set, the origin is
    /// omitted from the result.
    ///
    /// Fails with [`GridError::UnresolvedPosition`] when `start` is off the
    /// board. A `range` below zero yields an empty result.
    pub fn attackable_tiles<B: Board>(
        &mut self,
        board: &B,
        start: Point,
        range: i32,
        exclude_self: bool,
    ) -> Result<&[Tile], GridError> {
        board
            .tile(start)
            .ok_or(GridError::UnresolvedPosition(start))?;

        self.range_results.clear();

        for dx in -range..=range {
            for dy in -range..=range {
                if exclude_self && dx == 0 && dy == 0 {
                    continue;
                }
                if dx.abs() + dy.abs() > range {
                    continue;
                }
                let Some(tile) = board.tile(start + Point::new(dx, dy)) else {
                    continue;
                };
                if !tile.walkable {
                    continue;
                }
                self.range_results.push(tile);
            }
        }

        Ok(&self.range_results)
    }
}
