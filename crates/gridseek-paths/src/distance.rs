use gridseek_core::Point;

/// Manhattan (L1) distance between two points.
///
/// Admissible and consistent for a 4-connected grid with unit edge cost.
#[inline]
pub fn manhattan(a: Point, b: Point) -> u32 {
    a.manhattan(b)
}
