use tacgrid_core::Point;

/// Cost of an orthogonal step, in A* cost units.
pub const ORTHO_COST: i32 = 10;

/// Cost of a diagonal step, in A* cost units (10·√2 truncated).
pub const DIAG_COST: i32 = 14;

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Chebyshev (L∞) distance between two points.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

/// Octile distance in A* cost units: diagonal steps cover the shorter
/// axis, orthogonal steps the remainder.
///
/// Admissible and consistent for 8-directional movement under the
/// [`ORTHO_COST`]/[`DIAG_COST`] model, and exact between adjacent cells.
#[inline]
pub fn octile(a: Point, b: Point) -> i32 {
    let dx = (a.x - b.x).abs();
    let dy = (a.y - b.y).abs();
    DIAG_COST * dx.min(dy) + ORTHO_COST * (dx - dy).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn octile_adjacent_steps() {
        let o = Point::ZERO;
        assert_eq!(octile(o, Point::new(1, 0)), ORTHO_COST);
        assert_eq!(octile(o, Point::new(0, -1)), ORTHO_COST);
        assert_eq!(octile(o, Point::new(1, 1)), DIAG_COST);
        assert_eq!(octile(o, Point::new(-1, 1)), DIAG_COST);
    }

    #[test]
    fn octile_mixes_diagonal_and_straight() {
        // 3 diagonal steps + 2 orthogonal steps.
        assert_eq!(octile(Point::ZERO, Point::new(5, 3)), 3 * DIAG_COST + 2 * ORTHO_COST);
        // Symmetric.
        assert_eq!(
            octile(Point::new(5, 3), Point::ZERO),
            octile(Point::ZERO, Point::new(5, 3))
        );
    }

    #[test]
    fn manhattan_and_chebyshev() {
        let a = Point::new(2, -1);
        let b = Point::new(-1, 3);
        assert_eq!(manhattan(a, b), 7);
        assert_eq!(chebyshev(a, b), 4);
    }
}
