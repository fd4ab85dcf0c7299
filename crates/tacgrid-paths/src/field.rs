use tacgrid_core::{Point, Range};

use crate::board::Tile;
use crate::neighbors::Neighbors;

/// Sentinel in the reach map for cells the last movement-range query never
/// entered. Recorded budgets are bounded below by the query's starting
/// budget, so `i32::MIN` cannot collide with a real value.
pub(crate) const UNVISITED: i32 = i32::MIN;

// ---------------------------------------------------------------------------
// A* node arena
// ---------------------------------------------------------------------------

/// Per-cell A* bookkeeping. Lives in [`PathField`]'s flat arena, never on
/// board tiles, and is lazily invalidated by the generation counter.
#[derive(Clone)]
pub(crate) struct Node {
    /// Best known cost from the start, in octile units.
    pub(crate) g: i32,
    /// Back-pointer for retrace; `usize::MAX` for the start node.
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    /// Discovered but not yet expanded. A node of the current generation
    /// with `open == false` has been expanded and is never revisited.
    pub(crate) open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0,
            parent: usize::MAX,
            generation: 0,
            open: false,
        }
    }
}

/// Open-list entry, ordered for `BinaryHeap` so that the pop order is
/// minimum `f`, then minimum `h`, then first-inserted (FIFO). The explicit
/// sequence number makes tie-breaking fully deterministic.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct OpenRef {
    pub(crate) idx: usize,
    pub(crate) f: i32,
    pub(crate) h: i32,
    pub(crate) seq: u32,
}

impl Ord for OpenRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reversed so the max-heap pops the smallest entry first.
        other
            .f
            .cmp(&self.f)
            .then(other.h.cmp(&self.h))
            .then(other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// PathField
// ---------------------------------------------------------------------------

/// Central coordinator for tactical queries on a grid rectangle.
///
/// `PathField` owns all internal caches (the A* node arena, the reach map,
/// result buffers, neighbor scratch) so that repeated queries incur no
/// allocations after the first use. It holds no board data: every query
/// takes the [`crate::Board`] it should read from.
///
/// A field serves one query at a time. For concurrent searches over the
/// same board, give each thread its own `PathField`.
pub struct PathField {
    pub(crate) rng: Range,
    pub(crate) width: usize,
    // A* caches
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
    // movement-range caches
    pub(crate) reach_map: Vec<i32>,
    pub(crate) reach_results: Vec<Tile>,
    // attack-range result buffer
    pub(crate) range_results: Vec<Tile>,
    // shared scratch for neighbor resolution
    pub(crate) neighbors: Neighbors,
}

impl PathField {
    /// Create a new `PathField` covering the given grid rectangle.
    pub fn new(rng: Range) -> Self {
        let w = rng.width().max(0) as usize;
        let len = rng.len();
        Self {
            rng,
            width: w,
            nodes: vec![Node::default(); len],
            generation: 0,
            reach_map: vec![UNVISITED; len],
            reach_results: Vec::new(),
            range_results: Vec::new(),
            neighbors: Neighbors::new(),
        }
    }

    /// Replace the underlying rectangle, reallocating caches as needed.
    ///
    /// If the new size fits within existing capacity, caches are preserved:
    /// the A* generation is bumped so stale entries are ignored, and the
    /// reach map is re-blanked. Otherwise caches are reallocated.
    pub fn set_range(&mut self, rng: Range) {
        let new_len = rng.len();
        let old_capacity = self.nodes.len();
        self.rng = rng;
        self.width = rng.width().max(0) as usize;

        if new_len <= old_capacity {
            self.generation = self.generation.wrapping_add(1);
            for v in self.reach_map.iter_mut() {
                *v = UNVISITED;
            }
            self.reach_results.clear();
            self.range_results.clear();
            return;
        }

        self.nodes.clear();
        self.nodes.resize(new_len, Node::default());
        self.generation = 0;

        self.reach_map.clear();
        self.reach_map.resize(new_len, UNVISITED);
        self.reach_results.clear();
        self.range_results.clear();
    }

    /// The grid rectangle being used.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        let x = (p.x - self.rng.min.x) as usize;
        let y = (p.y - self.rng.min.y) as usize;
        Some(y * self.width + x)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        let x = (idx % self.width) as i32 + self.rng.min.x;
        let y = (idx / self.width) as i32 + self.rng.min.y;
        Point::new(x, y)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for PathField {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.rng.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for PathField {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let range = Range::deserialize(deserializer)?;
        Ok(PathField::new(range))
    }
}
