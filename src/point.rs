//! Numeric primitives: points, vectors, sizes, and rectangles in three
//! numeric flavors.
//!
//! The subdivision core only ever works in double precision ([`PointD`]);
//! [`PointF`] and [`PointI`] are peripheral flavors for callers who start
//! from lower-precision or rasterised input and are never touched by the
//! [`crate::dcel`] or [`crate::builder`] modules.

use geo::{Coord, CoordNum};
use num_traits::Float;

/// Double-precision 2D point/vector — the only flavor the DCEL builder uses.
pub type PointD = Coord<f64>;
/// Single-precision 2D point/vector, for peripheral/rasterised use.
pub type PointF = Coord<f32>;
/// Integer 2D point/vector, for peripheral/rasterised use.
pub type PointI = Coord<i64>;

/// `a.x*b.y - a.y*b.x`. Magnitude of the 2D cross product.
pub fn cross<T: CoordNum>(a: Coord<T>, b: Coord<T>) -> T {
    a.x * b.y - a.y * b.x
}

/// `a.x*b.x + a.y*b.y`.
pub fn dot<T: CoordNum>(a: Coord<T>, b: Coord<T>) -> T {
    a.x * b.x + a.y * b.y
}

/// `dot(p, p)`. Avoids the square root `length` requires.
pub fn length_squared<T: CoordNum>(p: Coord<T>) -> T {
    dot(p, p)
}

/// Euclidean length. Only defined for the float flavors.
pub fn length<T: Float>(p: Coord<T>) -> T {
    length_squared(p).sqrt()
}

/// Polar angle via the two-argument arctangent, in `(-pi, pi]`.
pub fn angle<T: Float>(p: Coord<T>) -> T {
    p.y.atan2(p.x)
}

/// Construct a point from polar coordinates `(length, angle)`.
pub fn from_polar<T: Float>(length: T, angle: T) -> Coord<T> {
    Coord { x: length * angle.cos(), y: length * angle.sin() }
}

/// Round to the nearest integer, ties to even ("banker's rounding"), applied
/// componentwise.
pub fn round_half_even<T: Float>(p: Coord<T>) -> Coord<T> {
    Coord { x: round_half_even_scalar(p.x), y: round_half_even_scalar(p.y) }
}

fn round_half_even_scalar<T: Float>(x: T) -> T {
    let floor = x.floor();
    let diff = x - floor;
    let half: T = T::from(0.5).unwrap();
    let two: T = T::from(2.0).unwrap();
    if diff < half {
        floor
    } else if diff > half {
        floor + T::one()
    } else if (floor / two).fract() == T::zero() {
        floor
    } else {
        floor + T::one()
    }
}

/// Advance `from` by `distance` units towards `to`. Returns `from` unchanged
/// if `to` coincides with `from`.
pub fn move_towards<T: Float>(from: Coord<T>, to: Coord<T>, distance: T) -> Coord<T> {
    let delta = to - from;
    let len = length(delta);
    if len == T::zero() {
        return from;
    }
    let scale = distance / len;
    Coord { x: from.x + delta.x * scale, y: from.y + delta.y * scale }
}

/// Tolerance-aware equality: `|a.x - b.x| <= eps && |a.y - b.y| <= eps`.
pub fn equals<T: Float>(a: Coord<T>, b: Coord<T>, eps: T) -> bool {
    (a.x - b.x).abs() <= eps && (a.y - b.y).abs() <= eps
}

/// True iff the signed area of triangle `(a, b, c)` has magnitude at most
/// `eps * max(1, scale)`, where `scale` is the largest side length of the
/// triangle. With `eps == 0` an exact zero is required.
pub fn is_collinear<T: Float>(a: Coord<T>, b: Coord<T>, c: Coord<T>, eps: T) -> bool {
    let area = cross(b - a, c - a);
    if eps == T::zero() {
        return area == T::zero();
    }
    let scale = [length(b - a), length(c - b), length(a - c)]
        .into_iter()
        .fold(T::one(), T::max);
    area.abs() <= eps * scale
}

// ---------------------------------------------------------------------------
// Sizes and rectangles
// ---------------------------------------------------------------------------

/// A width/height pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Size<T> {
    pub width: T,
    pub height: T,
}

pub type SizeD = Size<f64>;
pub type SizeF = Size<f32>;
pub type SizeI = Size<i64>;

/// An axis-aligned rectangle given by its lower-left origin and size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect<T> {
    pub origin: Coord<T>,
    pub size: Size<T>,
}

pub type RectD = Rect<f64>;
pub type RectF = Rect<f32>;
pub type RectI = Rect<i64>;

impl<T: CoordNum> Rect<T> {
    pub fn new(origin: Coord<T>, size: Size<T>) -> Self {
        Self { origin, size }
    }

    pub fn contains(&self, p: Coord<T>) -> bool {
        p.x >= self.origin.x
            && p.x <= self.origin.x + self.size.width
            && p.y >= self.origin.y
            && p.y <= self.origin.y + self.size.height
    }

    pub fn intersects(&self, other: &Rect<T>) -> bool {
        self.origin.x <= other.origin.x + other.size.width
            && other.origin.x <= self.origin.x + self.size.width
            && self.origin.y <= other.origin.y + other.size.height
            && other.origin.y <= self.origin.y + self.size.height
    }

    /// Clamp `p` componentwise into this rectangle.
    pub fn restrict(&self, p: Coord<T>) -> Coord<T> {
        let clamp = |v: T, lo: T, hi: T| if v < lo { lo } else if v > hi { hi } else { v };
        Coord {
            x: clamp(p.x, self.origin.x, self.origin.x + self.size.width),
            y: clamp(p.y, self.origin.y, self.origin.y + self.size.height),
        }
    }
}
