//! All-pairs segment intersection engine (SPEC_FULL §4.3).
//!
//! The quadratic fallback SPEC_FULL §4.3 sanctions for the scale this crate
//! targets: for `n` input segments, classify all `n*(n-1)/2` pairs and, for
//! each segment, collect the parameter/point events where another segment
//! crosses, touches, or overlaps it.

use crate::point::PointD;
use crate::segment::{classify, Segment, SegmentRelation};

/// For every segment in `segments`, the sorted, epsilon-merged list of
/// `(t, point)` events along it: every point at which another segment (or its
/// own endpoints) lands. Parameters `0.0` and `1.0` are always present.
pub fn intersect_all(segments: &[Segment], eps: f64) -> Vec<Vec<(f64, PointD)>> {
    let mut events: Vec<Vec<(f64, PointD)>> = segments
        .iter()
        .map(|s| vec![(0.0, s.start), (1.0, s.end)])
        .collect();

    for i in 0..segments.len() {
        for j in (i + 1)..segments.len() {
            let a = segments[i];
            let b = segments[j];
            match classify(a, b, eps) {
                SegmentRelation::IntersectWithin { t, u } => {
                    events[i].push((t, a.point_at(t)));
                    events[j].push((u, b.point_at(u)));
                }
                SegmentRelation::EndpointTouch { t, u } => {
                    events[i].push((t, a.point_at(t)));
                    events[j].push((u, b.point_at(u)));
                }
                SegmentRelation::Collinear { t0, t1 } => {
                    events[i].push((t0, a.point_at(t0)));
                    events[i].push((t1, a.point_at(t1)));
                    let u0 = project(b, a.point_at(t0));
                    let u1 = project(b, a.point_at(t1));
                    events[j].push((u0, b.point_at(u0)));
                    events[j].push((u1, b.point_at(u1)));
                }
                SegmentRelation::Disjoint | SegmentRelation::Parallel => {}
            }
        }
    }

    for ev in &mut events {
        merge_sorted(ev, eps);
    }

    events
}

/// Parameter of `p`'s projection onto `seg`, assuming `p` lies on `seg`'s line.
fn project(seg: Segment, p: PointD) -> f64 {
    let dir = seg.direction();
    let len_sq = crate::point::length_squared(dir);
    if len_sq == 0.0 {
        return 0.0;
    }
    crate::point::dot(p - seg.start, dir) / len_sq
}

/// Sort by parameter and collapse runs within `eps` of each other *in
/// Euclidean distance* — `t` is dimensionless, so two events close in
/// parameter on a long segment can still be spatially far apart. Keeps the
/// first point of each run as the representative.
fn merge_sorted(events: &mut Vec<(f64, PointD)>, eps: f64) {
    events.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap());
    let mut merged: Vec<(f64, PointD)> = Vec::with_capacity(events.len());
    for &(t, p) in events.iter() {
        match merged.last() {
            Some(&(_, last_p)) if crate::point::length(p - last_p) <= eps => continue,
            _ => merged.push((t, p)),
        }
    }
    *events = merged;
}
