use tacgrid_core::Point;

/// Errors reported by the query entry points.
///
/// An exhausted search is not an error: an unreachable goal is reported as
/// `Ok(None)` from [`crate::PathField::find_path`], and range queries with
/// no qualifying tiles return an empty slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// A start or goal coordinate does not resolve to any board tile.
    /// Rejected before any traversal begins.
    #[error("position {0} does not resolve to a board tile")]
    UnresolvedPosition(Point),
}
