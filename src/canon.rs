//! Point canonicalizer (SPEC_FULL §4.4).
//!
//! Collapses endpoints and intersection points that land within `eps` of
//! each other (L∞) onto a single representative, so the DCEL builder's twin
//! relation is well-defined even when the input was entered with small
//! floating-point perturbations.

use ahash::AHashMap;

use crate::point::PointD;

/// Deterministic, insertion-ordered map from "nearby" coordinates to one
/// representative point.
///
/// At `eps == 0` this degenerates to an exact-coordinate hash lookup (the
/// fast path SPEC_FULL §4.4 calls out); for `eps > 0` it falls back to a
/// linear scan of the representatives seen so far, which is fine at the
/// scenario-fixture scale this crate targets (see `intersect.rs`'s own
/// quadratic-fallback note).
pub struct Canonicalizer {
    eps: f64,
    representatives: Vec<PointD>,
    exact: AHashMap<(u64, u64), usize>,
}

impl Canonicalizer {
    pub fn new(eps: f64) -> Self {
        Self { eps, representatives: Vec::new(), exact: AHashMap::new() }
    }

    /// Canonicalize `p`: if a stored representative is within `eps` (L∞),
    /// return it; otherwise insert and return `p`.
    pub fn canonicalize(&mut self, p: PointD) -> PointD {
        if self.eps == 0.0 {
            let key = (p.x.to_bits(), p.y.to_bits());
            if let Some(&idx) = self.exact.get(&key) {
                return self.representatives[idx];
            }
            let idx = self.representatives.len();
            self.representatives.push(p);
            self.exact.insert(key, idx);
            return p;
        }

        for &q in &self.representatives {
            if (p.x - q.x).abs() <= self.eps && (p.y - q.y).abs() <= self.eps {
                return q;
            }
        }
        self.representatives.push(p);
        p
    }

    /// All distinct representatives inserted so far, in insertion order.
    pub fn representatives(&self) -> &[PointD] {
        &self.representatives
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_duplicate_collapses_at_zero_eps() {
        let mut c = Canonicalizer::new(0.0);
        let a = c.canonicalize(PointD { x: 1.0, y: 2.0 });
        let b = c.canonicalize(PointD { x: 1.0, y: 2.0 });
        assert_eq!(a, b);
        assert_eq!(c.representatives().len(), 1);
    }

    #[test]
    fn distinct_points_at_zero_eps_stay_distinct() {
        let mut c = Canonicalizer::new(0.0);
        let a = c.canonicalize(PointD { x: 1.0, y: 2.0 });
        let b = c.canonicalize(PointD { x: 1.0, y: 2.0000001 });
        assert_ne!(a, b);
        assert_eq!(c.representatives().len(), 2);
    }

    #[test]
    fn nearby_points_collapse_within_epsilon() {
        let mut c = Canonicalizer::new(0.05);
        let a = c.canonicalize(PointD { x: 1.0, y: 2.0 });
        let b = c.canonicalize(PointD { x: 1.03, y: 1.98 });
        assert_eq!(a, b);
        assert_eq!(c.representatives().len(), 1);
    }

    #[test]
    fn insertion_order_determines_surviving_coordinate() {
        let mut c = Canonicalizer::new(0.1);
        let first = c.canonicalize(PointD { x: 1.0, y: 1.0 });
        let second = c.canonicalize(PointD { x: 1.05, y: 1.05 });
        assert_eq!(first, second);
        assert_eq!(second, PointD { x: 1.0, y: 1.0 });
    }

    #[test]
    fn far_apart_points_do_not_collapse() {
        let mut c = Canonicalizer::new(0.05);
        let a = c.canonicalize(PointD { x: 0.0, y: 0.0 });
        let b = c.canonicalize(PointD { x: 10.0, y: 10.0 });
        assert_ne!(a, b);
        assert_eq!(c.representatives().len(), 2);
    }
}
