// Copyright 2025 Lars Brubaker
// License: SGI Free Software License B (MIT-compatible)
//
// Pure geometric predicates on planar points.
//
// Every winding and turn decision in the crate reduces to the sign of
// `orientation`, and every ordering decision to `higher`.

pub type Real = f64;

#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: Real,
    pub y: Real,
}

impl Point {
    #[inline]
    pub const fn new(x: Real, y: Real) -> Self {
        Point { x, y }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(Real, Real)> for Point {
    fn from((x, y): (Real, Real)) -> Self {
        Point { x, y }
    }
}

impl From<[Real; 2]> for Point {
    fn from([x, y]: [Real; 2]) -> Self {
        Point { x, y }
    }
}

/// Signed area (doubled) of the triangle (a, b, p).
///
/// Positive when p lies left of the directed line a -> b (counter-clockwise
/// turn), negative when it lies right, zero when the three are collinear.
#[inline]
pub fn orientation(a: Point, b: Point, p: Point) -> Real {
    (p.x - b.x) * (a.y - b.y) - (p.y - b.y) * (a.x - b.x)
}

/// The sweep order: p is above q, ties on y broken left to right.
#[inline]
pub fn higher(p: Point, q: Point) -> bool {
    p.y > q.y || (p.y == q.y && p.x < q.x)
}

/// Shoelace signed area of a closed ring; positive for counter-clockwise.
pub fn signed_area(ring: &[Point]) -> Real {
    let n = ring.len();
    if n < 3 {
        return 0.0;
    }
    let mut area = 0.0;
    for i in 0..n {
        let p = ring[i];
        let q = ring[(i + 1) % n];
        area += p.x * q.y - q.x * p.y;
    }
    area * 0.5
}

/// Signed area of a triangle; positive for counter-clockwise.
#[inline]
pub fn triangle_area(a: Point, b: Point, c: Point) -> Real {
    0.5 * orientation(a, b, c)
}

/// x-coordinate of segment (a, b) at height `y`, by linear interpolation.
///
/// Returns None when `y` is outside the segment's vertical span. A horizontal
/// segment at that height reports its rightmost x.
pub fn x_intercept(a: Point, b: Point, y: Real) -> Option<Real> {
    let (lo, hi) = if a.y <= b.y { (a, b) } else { (b, a) };
    if y < lo.y || y > hi.y {
        return None;
    }
    let dy = hi.y - lo.y;
    if dy == 0.0 {
        return Some(a.x.max(b.x));
    }
    Some(lo.x + (y - lo.y) / dy * (hi.x - lo.x))
}
