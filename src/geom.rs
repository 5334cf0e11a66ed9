//! Epsilon-aware comparison and polygon measurement.
//!
//! These are the helpers the builder and facade lean on for everything that
//! isn't pure half-edge bookkeeping: ordering vertices for the `(y, x)`
//! table order, and measuring the cycles the builder discovers.

use crate::point::PointD;

/// Ordering produced by [`eps_cmp`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ordering3 {
    Less,
    Equal,
    Greater,
}

/// `|a - b| <= eps`.
pub fn eps_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

/// Three-way compare with a symmetric epsilon band: values within `eps` of
/// each other compare `Equal`.
pub fn eps_cmp(a: f64, b: f64, eps: f64) -> Ordering3 {
    if eps_eq(a, b, eps) {
        Ordering3::Equal
    } else if a < b {
        Ordering3::Less
    } else {
        Ordering3::Greater
    }
}

/// Lexicographic `(y, x)` order used throughout the vertex/edge tables,
/// exact (no epsilon band — points have already been canonicalized by the
/// time this is called).
pub fn lex_yx_cmp(a: PointD, b: PointD) -> std::cmp::Ordering {
    a.y.partial_cmp(&b.y)
        .unwrap()
        .then(a.x.partial_cmp(&b.x).unwrap())
}

/// Signed area of the polygon with the given vertex sequence, via the
/// shoelace formula. Positive for a counterclockwise polygon.
pub fn shoelace_area(points: &[PointD]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..points.len() {
        let p = points[i];
        let q = points[(i + 1) % points.len()];
        sum += p.x * q.y - q.x * p.y;
    }
    sum * 0.5
}

/// Centroid of the polygon with the given vertex sequence. Only meaningful
/// when `shoelace_area(points) != 0`; callers are expected to check that
/// first (see [`crate::subdivision::Subdivision::cycle_centroid`]).
pub fn polygon_centroid(points: &[PointD]) -> PointD {
    let area = shoelace_area(points);
    let mut cx = 0.0;
    let mut cy = 0.0;
    for i in 0..points.len() {
        let p = points[i];
        let q = points[(i + 1) % points.len()];
        let cross = p.x * q.y - q.x * p.y;
        cx += (p.x + q.x) * cross;
        cy += (p.y + q.y) * cross;
    }
    let scale = 1.0 / (6.0 * area);
    PointD { x: cx * scale, y: cy * scale }
}

/// Orientation of a polygon's vertex sequence under its signed shoelace area.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    CounterClockwise,
    Clockwise,
    Degenerate,
}

pub fn orientation(points: &[PointD]) -> Orientation {
    let area = shoelace_area(points);
    if area > 0.0 {
        Orientation::CounterClockwise
    } else if area < 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::Degenerate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eps_eq_respects_band() {
        assert!(eps_eq(1.0, 1.05, 0.05));
        assert!(!eps_eq(1.0, 1.06, 0.05));
    }

    #[test]
    fn eps_cmp_orders_outside_band() {
        assert_eq!(eps_cmp(1.0, 2.0, 0.1), Ordering3::Less);
        assert_eq!(eps_cmp(2.0, 1.0, 0.1), Ordering3::Greater);
        assert_eq!(eps_cmp(1.0, 1.05, 0.1), Ordering3::Equal);
    }

    #[test]
    fn lex_yx_orders_by_y_then_x() {
        let a = PointD { x: 5.0, y: 0.0 };
        let b = PointD { x: 0.0, y: 1.0 };
        assert_eq!(lex_yx_cmp(a, b), std::cmp::Ordering::Less);
        let c = PointD { x: 1.0, y: 0.0 };
        assert_eq!(lex_yx_cmp(a, c), std::cmp::Ordering::Greater);
    }

    #[test]
    fn shoelace_area_of_unit_square_ccw_is_one() {
        let sq = vec![
            PointD { x: 0.0, y: 0.0 },
            PointD { x: 1.0, y: 0.0 },
            PointD { x: 1.0, y: 1.0 },
            PointD { x: 0.0, y: 1.0 },
        ];
        assert_eq!(shoelace_area(&sq), 1.0);
    }

    #[test]
    fn shoelace_area_reversed_is_negated() {
        let sq = vec![
            PointD { x: 0.0, y: 0.0 },
            PointD { x: 0.0, y: 1.0 },
            PointD { x: 1.0, y: 1.0 },
            PointD { x: 1.0, y: 0.0 },
        ];
        assert_eq!(shoelace_area(&sq), -1.0);
    }

    #[test]
    fn shoelace_area_of_degenerate_path_is_zero() {
        let path = vec![
            PointD { x: 0.0, y: 0.0 },
            PointD { x: 1.0, y: 0.0 },
            PointD { x: 0.0, y: 0.0 },
        ];
        assert_eq!(shoelace_area(&path), 0.0);
    }

    #[test]
    fn polygon_centroid_of_square_is_center() {
        let sq = vec![
            PointD { x: 0.0, y: 0.0 },
            PointD { x: 2.0, y: 0.0 },
            PointD { x: 2.0, y: 2.0 },
            PointD { x: 0.0, y: 2.0 },
        ];
        let c = polygon_centroid(&sq);
        assert!((c.x - 1.0).abs() < 1e-12);
        assert!((c.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn orientation_matches_sign_of_area() {
        let ccw = vec![
            PointD { x: 0.0, y: 0.0 },
            PointD { x: 1.0, y: 0.0 },
            PointD { x: 0.0, y: 1.0 },
        ];
        assert_eq!(orientation(&ccw), Orientation::CounterClockwise);
        let cw: Vec<_> = ccw.iter().rev().copied().collect();
        assert_eq!(orientation(&cw), Orientation::Clockwise);
    }
}
