//! Core geometry types for tactical grid games: [`Point`] and [`Range`].

mod geom;

pub use geom::{Point, Range};
