//! Tactical pathfinding for turn-based grid games.
//!
//! Three queries over a caller-owned tile board:
//!
//! - **Movement range** ([`PathField::movable_tiles`]): the set of tiles a
//!   unit can reach within a movement-point budget.
//! - **Attack range** ([`PathField::attackable_tiles`]): the walkable tiles
//!   within a Manhattan radius of a position.
//! - **Shortest route** ([`PathField::find_path`]): A* with the octile
//!   (10/14) cost model over 8-directional movement.
//!
//! The board itself stays on the caller's side of the [`Board`] trait; the
//! algorithms only resolve coordinates to [`Tile`] snapshots and never
//! mutate tile state. All search bookkeeping lives in [`PathField`], which
//! owns and reuses its internal caches so that repeated queries incur zero
//! allocations after warm-up. One `PathField` serves one search at a time;
//! use separate fields for concurrent searches.

mod astar;
mod board;
mod distance;
mod error;
mod field;
mod neighbors;
mod range_query;
mod reach;

#[cfg(test)]
pub(crate) mod testboard;

pub use board::{Board, Tile};
pub use distance::{DIAG_COST, ORTHO_COST, chebyshev, manhattan, octile};
pub use error::GridError;
pub use field::PathField;
pub use neighbors::{Directions, Neighbors};
