//! Public facade (§4.7, §6): the immutable read model over a built DCEL.
//!
//! The builder owns a mutable scratch structure; `Subdivision` freezes it.
//! Exposing only this read-only view removes any possibility of
//! post-construction invariant drift.

use crate::builder::build;
use crate::dcel::{Dcel, FaceId, HalfEdgeId, VertexId, OUTER_FACE};
use crate::error::SubdivisionError;
use crate::geom::{lex_yx_cmp, polygon_centroid, shoelace_area};
use crate::point::PointD;
use crate::segment::Segment;
use crate::validate::{validate, ValidationError};

/// The frozen result of building a planar subdivision from a set of
/// segments: a DCEL plus the read-only queries §4.7 and §6 describe.
pub struct Subdivision {
    dcel: Dcel<PointD>,
    eps: f64,
}

impl Subdivision {
    /// Build a subdivision from a flat list of undirected segments.
    ///
    /// `eps` must be `>= 0`; every coordinate must be finite. Mirrors §6's
    /// `fromLines(segments, eps)`.
    pub fn from_lines(segments: &[Segment], eps: f64) -> Result<Self, SubdivisionError> {
        let dcel = build(segments, eps)?;
        Ok(Self { dcel, eps })
    }

    /// Check every §3 structural invariant against this subdivision.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate(&self.dcel, self.eps)
    }

    pub fn num_vertices(&self) -> usize {
        self.dcel.num_vertices()
    }
    pub fn num_half_edges(&self) -> usize {
        self.dcel.num_half_edges()
    }
    pub fn num_faces(&self) -> usize {
        self.dcel.num_faces()
    }
    pub fn num_bounded_faces(&self) -> usize {
        self.dcel.num_bounded_faces()
    }

    /// The vertex table, ordered by lex `(y, x)` ascending (§4.6).
    pub fn vertices(&self) -> Vec<(PointD, VertexId)> {
        let mut out: Vec<(PointD, VertexId)> =
            (0..self.dcel.num_vertices()).map(|i| (self.dcel.vertex(VertexId(i)).coords, VertexId(i))).collect();
        out.sort_by(|a, b| lex_yx_cmp(a.0, b.0));
        out
    }

    /// The `n`th vertex in lex `(y, x)` order.
    pub fn nth_vertex(&self, n: usize) -> Result<(PointD, VertexId), SubdivisionError> {
        self.vertices().get(n).copied().ok_or_else(|| SubdivisionError::OutOfRange(format!("vertex index {n}")))
    }

    /// Look up the vertex whose canonical coordinates are exactly `p`.
    pub fn vertex_at_point(&self, p: PointD) -> Result<VertexId, SubdivisionError> {
        (0..self.dcel.num_vertices())
            .map(VertexId)
            .find(|&id| self.dcel.vertex(id).coords == p)
            .ok_or_else(|| SubdivisionError::NotFound(format!("no vertex at {p:?}")))
    }

    /// The half-edge table, ordered by `(origin lex, destination lex)`
    /// ascending (§4.6) — a stable view computed from the id-ordered store.
    pub fn edges(&self) -> Vec<HalfEdgeId> {
        let mut out: Vec<HalfEdgeId> = (0..self.dcel.num_half_edges()).map(HalfEdgeId).collect();
        out.sort_by(|&a, &b| {
            let oa = self.dcel.vertex(self.dcel.half_edge(a).origin).coords;
            let ob = self.dcel.vertex(self.dcel.half_edge(b).origin).coords;
            let da = self.dcel.vertex(self.dcel.dest(a)).coords;
            let db = self.dcel.vertex(self.dcel.dest(b)).coords;
            lex_yx_cmp(oa, ob).then_with(|| lex_yx_cmp(da, db))
        });
        out
    }

    /// `n`th half-edge in `(origin lex, destination lex)` order.
    pub fn nth_edge(&self, n: usize) -> Result<HalfEdgeId, SubdivisionError> {
        self.edges().get(n).copied().ok_or_else(|| SubdivisionError::OutOfRange(format!("edge index {n}")))
    }

    /// All face ids, including the unbounded face at index 0.
    pub fn faces(&self) -> Vec<FaceId> {
        (0..self.dcel.num_faces()).map(FaceId).collect()
    }

    pub fn nth_face(&self, n: usize) -> Result<FaceId, SubdivisionError> {
        if n >= self.dcel.num_faces() {
            return Err(SubdivisionError::OutOfRange(format!("face index {n}")));
        }
        Ok(FaceId(n))
    }

    /// The origin point of a half-edge.
    pub fn origin(&self, he: HalfEdgeId) -> PointD {
        self.dcel.vertex(self.dcel.half_edge(he).origin).coords
    }

    /// The destination point of a half-edge.
    pub fn dest(&self, he: HalfEdgeId) -> PointD {
        self.dcel.vertex(self.dcel.dest(he)).coords
    }

    /// One undirected segment per twin pair, origin chosen as the
    /// lex-smaller endpoint; output ascending by `(start, end)` lex (§4.7).
    pub fn to_segments(&self) -> Vec<Segment> {
        let mut out = Vec::new();
        let mut seen = vec![false; self.dcel.num_half_edges()];
        for i in 0..self.dcel.num_half_edges() {
            if seen[i] {
                continue;
            }
            let he = HalfEdgeId(i);
            let twin = self.dcel.half_edge(he).twin;
            seen[i] = true;
            seen[twin.0] = true;
            let a = self.origin(he);
            let b = self.dest(he);
            let (start, end) = if lex_yx_cmp(a, b) == std::cmp::Ordering::Less { (a, b) } else { (b, a) };
            out.push(Segment::new(start, end));
        }
        out.sort_by(|a, b| lex_yx_cmp(a.start, b.start).then_with(|| lex_yx_cmp(a.end, b.end)));
        out
    }

    /// One representative half-edge per zero-area (filament) cycle, ordered
    /// by the smallest half-edge id in the cycle.
    pub fn zero_area_cycles(&self) -> Vec<HalfEdgeId> {
        let mut reps = Vec::new();
        for face in self.faces() {
            for &he in &self.dcel.face(face).inner_edges {
                if self.is_cycle_area_zero(he) {
                    reps.push(he);
                }
            }
        }
        reps.sort();
        reps
    }

    /// The sequence of origins walking `next` from `start` until it returns.
    pub fn cycle_polygon(&self, start: HalfEdgeId) -> Vec<PointD> {
        self.dcel.face_cycle(start).map(|he| self.origin(he)).collect()
    }

    /// Signed shoelace area of the cycle starting at `start`.
    pub fn cycle_area(&self, start: HalfEdgeId) -> f64 {
        shoelace_area(&self.cycle_polygon(start))
    }

    /// Centroid of the cycle starting at `start`, or `None` if its area is
    /// (exactly) zero.
    pub fn cycle_centroid(&self, start: HalfEdgeId) -> Option<PointD> {
        if self.is_cycle_area_zero(start) {
            return None;
        }
        Some(polygon_centroid(&self.cycle_polygon(start)))
    }

    /// Exact (not epsilon-banded) comparison of the cycle's shoelace sum
    /// to zero.
    pub fn is_cycle_area_zero(&self, start: HalfEdgeId) -> bool {
        self.cycle_area(start) == 0.0
    }

    /// The face to the immediate outside of face 0, i.e. always `OUTER_FACE`
    /// — exposed so callers needn't hardcode `FaceId(0)`.
    pub fn outer_face(&self) -> FaceId {
        OUTER_FACE
    }

    /// A half-edge suitable for walking one of `face`'s boundary cycles:
    /// its outer cycle if it has one, otherwise its first inner cycle.
    pub fn origin_edge_of(&self, face: FaceId) -> Option<HalfEdgeId> {
        self.dcel.face(face).outer_edge.or_else(|| self.dcel.face(face).inner_edges.first().copied())
    }
}
