use std::collections::VecDeque;

use tacgrid_core::Point;

use crate::PathField;
use crate::board::{Board, Tile};
use crate::error::GridError;
use crate::field::UNVISITED;
use crate::neighbors::Directions;

impl PathField {
    /// The tiles a unit standing on `start` can reach with `move_points`
    /// of movement budget, moving orthogonally.
    ///
    /// FIFO flood: each tile is entered at most once, with the remaining
    /// budget seen the first time the flood reaches it. A neighbor is
    /// entered when it is walkable and its `move_cost` fits the remaining
    /// budget. The result always contains `start` (the unit is already
    /// standing there, walkable or not) and is a movement preview, not a
    /// cost-optimal distance map — see [`PathField::movable_at`].
    ///
    /// Fails with [`GridError::UnresolvedPosition`] when `start` is off the
    /// board. Exploration is limited to the field's range.
    pub fn movable_tiles<B: Board>(
        &mut self,
        board: &B,
        start: Point,
        move_points: i32,
    ) -> Result<&[Tile], GridError> {
        let start_tile = board
            .tile(start)
            .ok_or(GridError::UnresolvedPosition(start))?;

        for v in self.reach_map.iter_mut() {
            *v = UNVISITED;
        }
        self.reach_results.clear();

        let mut queue: VecDeque<(Tile, i32)> = VecDeque::new();
        if let Some(si) = self.idx(start) {
            self.reach_map[si] = move_points;
        }
        queue.push_back((start_tile, move_points));

        let mut nbuf = std::mem::take(&mut self.neighbors);

        while let Some((tile, remaining)) = queue.pop_front() {
            self.reach_results.push(tile);

            for &n in nbuf.resolve(board, tile.pos, Directions::Cardinal) {
                if !n.walkable {
                    continue;
                }
                let Some(ni) = self.idx(n.pos) else {
                    continue;
                };
                if self.reach_map[ni] != UNVISITED {
                    continue;
                }
                if remaining >= n.move_cost {
                    self.reach_map[ni] = remaining - n.move_cost;
                    queue.push_back((n, remaining - n.move_cost));
                }
            }
        }

        self.neighbors = nbuf;

        log::trace!(
            "movable_tiles: {} tiles from {start} with {move_points} mp",
            self.reach_results.len()
        );
        Ok(&self.reach_results)
    }

    /// Remaining movement budget recorded at `p` by the last
    /// [`PathField::movable_tiles`] call.
    ///
    /// Returns `None` when `p` is outside the field or the flood never
    /// entered it. The value reflects the FIFO first-arrival, which is not
    /// necessarily the best possible remaining budget at `p`.
    pub fn movable_at(&self, p: Point) -> Option<i32> {
        let i = self.idx(p)?;
        let v = self.reach_map[i];
        if v == UNVISITED { None } else { Some(v) }
    }
}
