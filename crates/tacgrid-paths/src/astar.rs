use std::collections::BinaryHeap;

use tacgrid_core::Point;

use crate::PathField;
use crate::board::{Board, Tile};
use crate::distance::octile;
use crate::error::GridError;
use crate::field::OpenRef;
use crate::neighbors::Directions;

impl PathField {
    /// The shortest 8-directional route from `start` to `goal`, as A* with
    /// the octile cost model: orthogonal steps cost 10, diagonal steps 14.
    ///
    /// The route is returned in start→goal order and excludes the start
    /// tile itself, so `find_path(p, p)` is an empty route. `Ok(None)`
    /// means no route exists; a partial route is never returned. Ties
    /// between open nodes break on lower heuristic first, then on
    /// insertion order, so equal-cost routes resolve deterministically.
    ///
    /// Diagonal moves between two orthogonally blocking tiles are not
    /// forbidden (no corner-cutting check). Endpoints that fall off the
    /// board fail with [`GridError::UnresolvedPosition`] before the search
    /// starts; endpoints outside the field's range are treated as
    /// unreachable.
    pub fn find_path<B: Board>(
        &mut self,
        board: &B,
        start: Point,
        goal: Point,
    ) -> Result<Option<Vec<Tile>>, GridError> {
        board
            .tile(start)
            .ok_or(GridError::UnresolvedPosition(start))?;
        board.tile(goal).ok_or(GridError::UnresolvedPosition(goal))?;

        let Some(start_idx) = self.idx(start) else {
            return Ok(None);
        };
        let Some(goal_idx) = self.idx(goal) else {
            return Ok(None);
        };

        if start_idx == goal_idx {
            return Ok(Some(Vec::new()));
        }

        // Bump the generation to lazily invalidate the whole node arena.
        self.generation = self.generation.wrapping_add(1);
        let cur_gen = self.generation;

        {
            let node = &mut self.nodes[start_idx];
            node.g = 0;
            node.parent = usize::MAX;
            node.generation = cur_gen;
            node.open = true;
        }

        let mut open: BinaryHeap<OpenRef> = BinaryHeap::new();
        let mut seq: u32 = 0;
        let h0 = octile(start, goal);
        open.push(OpenRef {
            idx: start_idx,
            f: h0,
            h: h0,
            seq,
        });

        let mut nbuf = std::mem::take(&mut self.neighbors);

        let found = loop {
            let Some(current) = open.pop() else {
                break false;
            };
            let ci = current.idx;

            // Skip stale heap entries.
            if self.nodes[ci].generation != cur_gen || !self.nodes[ci].open {
                continue;
            }

            if ci == goal_idx {
                break true;
            }

            self.nodes[ci].open = false;
            let current_g = self.nodes[ci].g;
            let cp = self.point(ci);

            for &n in nbuf.resolve(board, cp, Directions::Eight) {
                if !n.walkable {
                    continue;
                }
                let Some(ni) = self.idx(n.pos) else {
                    continue;
                };
                // Expanded tiles keep their final g and are never revisited.
                if self.nodes[ni].generation == cur_gen && !self.nodes[ni].open {
                    continue;
                }

                let tentative = current_g + octile(cp, n.pos);
                let node = &mut self.nodes[ni];
                if node.generation == cur_gen && tentative >= node.g {
                    continue;
                }

                node.g = tentative;
                node.parent = ci;
                node.generation = cur_gen;
                node.open = true;

                let h = octile(n.pos, goal);
                seq += 1;
                open.push(OpenRef {
                    idx: ni,
                    f: tentative + h,
                    h,
                    seq,
                });
            }
        };

        self.neighbors = nbuf;

        if !found {
            log::trace!("find_path: no route {start} -> {goal}");
            return Ok(None);
        }

        // Retrace parent links from the goal; the start tile is excluded.
        let mut path: Vec<Tile> = Vec::new();
        let mut ci = goal_idx;
        while ci != start_idx {
            let p = self.point(ci);
            let tile = board.tile(p).ok_or(GridError::UnresolvedPosition(p))?;
            path.push(tile);
            ci = self.nodes[ci].parent;
        }
        path.reverse();

        log::trace!("find_path: {} steps {start} -> {goal}", path.len());
        Ok(Some(path))
    }
}
