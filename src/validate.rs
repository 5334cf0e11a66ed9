//! Structural invariant checker (§3, §7).
//!
//! A pure inspector: never mutates the subdivision, only reports the first
//! broken invariant it finds (one enum variant per §3 invariant, so a
//! failure names exactly which one broke).

use std::fmt;

use crate::dcel::{Dcel, HalfEdgeId, OUTER_FACE};
use crate::geom::{eps_eq, shoelace_area};
use crate::point::PointD;

#[derive(Clone, Debug, PartialEq)]
pub enum ValidationError {
    /// `twin(twin(e)) != e`, or `twin(e) == e` for some half-edge `e`.
    TwinNotInvolution(HalfEdgeId),
    /// `origin(next(e)) != destination(e)` or `face(next(e)) != face(e)`.
    NextInconsistent(HalfEdgeId),
    /// Walking `next` from `e` did not return to `e` within the total
    /// half-edge count.
    CycleNotClosed(HalfEdgeId),
    /// The unbounded face (id 0) has an `outer_edge`, which it must not.
    OuterFaceHasOuterEdge,
    /// A bounded face has no `outer_edge`.
    BoundedFaceMissingOuterEdge(usize),
    /// A vertex's stored outgoing half-edge does not originate at it.
    VertexHalfEdgeOriginMismatch(usize),
    /// Two distinct vertices lie within epsilon of each other.
    VerticesTooClose(usize, usize),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ValidationError::TwinNotInvolution(e) => write!(f, "twin is not a fixed-point-free involution at {e}"),
            ValidationError::NextInconsistent(e) => write!(f, "next/face inconsistent at {e}"),
            ValidationError::CycleNotClosed(e) => write!(f, "cycle starting at {e} did not close"),
            ValidationError::OuterFaceHasOuterEdge => write!(f, "unbounded face has an outer_edge"),
            ValidationError::BoundedFaceMissingOuterEdge(id) => write!(f, "bounded face {id} has no outer_edge"),
            ValidationError::VertexHalfEdgeOriginMismatch(id) => {
                write!(f, "vertex {id}'s stored half-edge does not originate at it")
            }
            ValidationError::VerticesTooClose(a, b) => write!(f, "vertices {a} and {b} lie within epsilon"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Check every §3 global invariant against `dcel`, under tolerance `eps`
/// for the vertex-separation check (invariant 8).
pub fn validate(dcel: &Dcel<PointD>, eps: f64) -> Result<(), ValidationError> {
    check_twin_involution(dcel)?;
    check_next_consistency(dcel)?;
    check_cycles_closed(dcel)?;
    check_face_outer_edges(dcel)?;
    check_vertex_half_edge_origins(dcel)?;
    check_vertex_separation(dcel, eps)?;
    Ok(())
}

fn check_twin_involution(dcel: &Dcel<PointD>) -> Result<(), ValidationError> {
    for i in 0..dcel.num_half_edges() {
        let e = HalfEdgeId(i);
        let twin = dcel.half_edge(e).twin;
        if twin == e {
            return Err(ValidationError::TwinNotInvolution(e));
        }
        if dcel.half_edge(twin).twin != e {
            return Err(ValidationError::TwinNotInvolution(e));
        }
    }
    Ok(())
}

fn check_next_consistency(dcel: &Dcel<PointD>) -> Result<(), ValidationError> {
    for i in 0..dcel.num_half_edges() {
        let e = HalfEdgeId(i);
        let next = dcel.half_edge(e).next;
        if dcel.half_edge(next).origin != dcel.dest(e) {
            return Err(ValidationError::NextInconsistent(e));
        }
        if dcel.half_edge(next).face != dcel.half_edge(e).face {
            return Err(ValidationError::NextInconsistent(e));
        }
    }
    Ok(())
}

fn check_cycles_closed(dcel: &Dcel<PointD>) -> Result<(), ValidationError> {
    let limit = dcel.num_half_edges();
    for i in 0..dcel.num_half_edges() {
        let start = HalfEdgeId(i);
        let mut current = dcel.half_edge(start).next;
        let mut steps = 1;
        while current != start {
            steps += 1;
            if steps > limit {
                return Err(ValidationError::CycleNotClosed(start));
            }
            current = dcel.half_edge(current).next;
        }
    }
    Ok(())
}

fn check_face_outer_edges(dcel: &Dcel<PointD>) -> Result<(), ValidationError> {
    if dcel.face(OUTER_FACE).outer_edge.is_some() {
        return Err(ValidationError::OuterFaceHasOuterEdge);
    }
    for id in 1..dcel.num_faces() {
        if dcel.faces[id].outer_edge.is_none() {
            return Err(ValidationError::BoundedFaceMissingOuterEdge(id));
        }
    }
    Ok(())
}

fn check_vertex_half_edge_origins(dcel: &Dcel<PointD>) -> Result<(), ValidationError> {
    for id in 0..dcel.num_vertices() {
        if let Some(he) = dcel.vertices[id].half_edge {
            if dcel.half_edge(he).origin.0 != id {
                return Err(ValidationError::VertexHalfEdgeOriginMismatch(id));
            }
        }
    }
    Ok(())
}

fn check_vertex_separation(dcel: &Dcel<PointD>, eps: f64) -> Result<(), ValidationError> {
    if eps <= 0.0 {
        return Ok(());
    }
    for i in 0..dcel.num_vertices() {
        for j in (i + 1)..dcel.num_vertices() {
            let a = dcel.vertices[i].coords;
            let b = dcel.vertices[j].coords;
            if eps_eq(a.x, b.x, eps) && eps_eq(a.y, b.y, eps) {
                return Err(ValidationError::VerticesTooClose(i, j));
            }
        }
    }
    Ok(())
}

/// Signed area of the polygon traced by walking `next` from `start`.
pub fn cycle_area(dcel: &Dcel<PointD>, start: HalfEdgeId) -> f64 {
    let points: Vec<PointD> = dcel.face_cycle(start).map(|he| dcel.vertex(dcel.half_edge(he).origin).coords).collect();
    shoelace_area(&points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::build;
    use crate::segment::Segment;

    fn seg(x0: f64, y0: f64, x1: f64, y1: f64) -> Segment {
        Segment::new(PointD { x: x0, y: y0 }, PointD { x: x1, y: y1 })
    }

    #[test]
    fn freshly_built_square_validates() {
        let segs = vec![
            seg(-1.0, -2.0, -1.0, 2.0),
            seg(-1.0, 2.0, 1.0, 2.0),
            seg(1.0, 2.0, 1.0, -2.0),
            seg(1.0, -2.0, -1.0, -2.0),
        ];
        let dcel = build(&segs, 0.0).unwrap();
        assert!(validate(&dcel, 0.0).is_ok());
    }

    #[test]
    fn freshly_built_triforce_validates() {
        let outer = vec![
            seg(-5.0, -4.0, 0.0, 6.0),
            seg(0.0, 6.0, 5.0, -4.0),
            seg(5.0, -4.0, -5.0, -4.0),
        ];
        let inner = vec![seg(-1.0, 2.0, 1.0, 2.0), seg(1.0, 2.0, 0.0, 0.0), seg(0.0, 0.0, -1.0, 2.0)];
        let mut segs = outer;
        segs.extend(inner);
        let dcel = build(&segs, 0.0).unwrap();
        assert!(validate(&dcel, 0.0).is_ok());
    }

    #[test]
    fn tampering_with_twin_breaks_validation() {
        let segs = vec![seg(0.0, 0.0, 1.0, 0.0)];
        let mut dcel = build(&segs, 0.0).unwrap();
        let e = HalfEdgeId(0);
        let self_twin = dcel.half_edge(e).twin;
        dcel.half_edge_mut(self_twin).twin = self_twin;
        assert!(matches!(validate(&dcel, 0.0), Err(ValidationError::TwinNotInvolution(_))));
    }
}
