//! DCEL builder (§4.5, §4.6): turns a flat segment list into a fully wired,
//! face-assigned `Dcel<PointD>`.
//!
//! Six steps, in order: sub-segmenting against the intersection engine's
//! events, half-edge emission, local-star `next`/`prev` stitching, cycle
//! extraction with shoelace classification, face assembly (outer/hole/
//! filament attachment via point-in-polygon containment), and vertex
//! outgoing-edge assignment.

use std::collections::HashMap;
use std::f64::consts::PI;

use crate::canon::Canonicalizer;
use crate::dcel::{Dcel, FaceId, HalfEdgeId, VertexId, OUTER_FACE};
use crate::error::SubdivisionError;
use crate::geom::{lex_yx_cmp, shoelace_area};
use crate::intersect::intersect_all;
use crate::point::{angle, PointD};
use crate::segment::Segment;

/// Build a `Dcel<PointD>` from a flat list of undirected segments.
///
/// `eps` must be non-negative; every coordinate in `segments` must be finite.
pub fn build(segments: &[Segment], eps: f64) -> Result<Dcel<PointD>, SubdivisionError> {
    if eps < 0.0 {
        return Err(SubdivisionError::InvalidArgument("epsilon must be non-negative".to_string()));
    }
    for s in segments {
        for p in [s.start, s.end] {
            if !p.x.is_finite() || !p.y.is_finite() {
                return Err(SubdivisionError::InvalidArgument("segment endpoint is not finite".to_string()));
            }
        }
    }

    let mut dcel: Dcel<PointD> = Dcel::new();

    // --- Step 1: sub-segments -----------------------------------------------
    let events = intersect_all(segments, eps);
    let mut canon = Canonicalizer::new(eps);
    let mut vertex_of: HashMap<(u64, u64), VertexId> = HashMap::new();
    let mut seen_edges: HashMap<(VertexId, VertexId), ()> = HashMap::new();

    let mut get_vertex = |dcel: &mut Dcel<PointD>, p: PointD| -> VertexId {
        let key = (p.x.to_bits(), p.y.to_bits());
        if let Some(&id) = vertex_of.get(&key) {
            return id;
        }
        let id = dcel.add_vertex(p);
        vertex_of.insert(key, id);
        id
    };

    for seg_events in &events {
        let canonical: Vec<PointD> = seg_events.iter().map(|&(_, p)| canon.canonicalize(p)).collect();

        // Step 2: half-edge emission, skipping sub-segments that collapsed
        // to a point after canonicalization.
        for window in canonical.windows(2) {
            let (a, b) = (window[0], window[1]);
            if a == b {
                continue;
            }
            let (lo, hi) = if lex_yx_cmp(a, b) == std::cmp::Ordering::Less { (a, b) } else { (b, a) };
            let lo_id = get_vertex(&mut dcel, lo);
            let hi_id = get_vertex(&mut dcel, hi);
            let key = (lo_id, hi_id);
            if seen_edges.contains_key(&key) {
                continue;
            }
            seen_edges.insert(key, ());
            dcel.add_edge(lo_id, hi_id, OUTER_FACE, OUTER_FACE);
        }
    }

    // --- Step 3: local star ordering ----------------------------------------
    stitch_vertex_stars(&mut dcel);

    // --- Step 4: cycle extraction -------------------------------------------
    let cycles = extract_cycles(&dcel);

    // --- Step 5: face assembly -----------------------------------------------
    assemble_faces(&mut dcel, cycles);

    // --- Step 6: vertex outgoing-edge assignment -----------------------------
    assign_vertex_outgoing_edges(&mut dcel);

    Ok(dcel)
}

/// For every vertex, sort its outgoing half-edges by CCW polar angle and
/// stitch `next(twin(e)) = ccw-successor of e`.
fn stitch_vertex_stars(dcel: &mut Dcel<PointD>) {
    let mut outgoing: Vec<Vec<HalfEdgeId>> = vec![Vec::new(); dcel.num_vertices()];
    for i in 0..dcel.num_half_edges() {
        let he = HalfEdgeId(i);
        outgoing[dcel.half_edge(he).origin.0].push(he);
    }

    for star in &mut outgoing {
        let origin_point = |dcel: &Dcel<PointD>, he: HalfEdgeId| dcel.vertex(dcel.half_edge(he).origin).coords;
        star.sort_by(|&a, &b| {
            let pa = origin_point(dcel, a);
            let pb = origin_point(dcel, b);
            let da = dcel.vertex(dcel.dest(a)).coords - pa;
            let db = dcel.vertex(dcel.dest(b)).coords - pb;
            ccw_angle(angle(da)).partial_cmp(&ccw_angle(angle(db))).unwrap()
        });
    }

    for star in &outgoing {
        if star.is_empty() {
            continue;
        }
        let n = star.len();
        for (idx, &e) in star.iter().enumerate() {
            let successor = star[(idx + 1) % n];
            let twin = dcel.half_edge(e).twin;
            dcel.set_next(twin, successor);
        }
    }
}

/// Map an `atan2`-style angle in `(-pi, pi]` to `[0, 2*pi)` so polar-angle
/// sorts start at the positive x-axis and increase counterclockwise.
fn ccw_angle(a: f64) -> f64 {
    if a < 0.0 {
        a + 2.0 * PI
    } else {
        a
    }
}

/// Classification of a boundary cycle discovered in Step 4.
enum CycleKind {
    Outer,
    Inner,
    Filament,
}

struct Cycle {
    half_edges: Vec<HalfEdgeId>,
    kind: CycleKind,
}

fn extract_cycles(dcel: &Dcel<PointD>) -> Vec<Cycle> {
    let mut visited = vec![false; dcel.num_half_edges()];
    let mut cycles = Vec::new();

    for i in 0..dcel.num_half_edges() {
        if visited[i] {
            continue;
        }
        let start = HalfEdgeId(i);
        let half_edges: Vec<HalfEdgeId> = dcel.face_cycle(start).collect();
        for &he in &half_edges {
            visited[he.0] = true;
        }
        let points: Vec<PointD> = half_edges.iter().map(|&he| dcel.vertex(dcel.half_edge(he).origin).coords).collect();
        let area = shoelace_area(&points);
        let kind = if area > 1e-9 {
            CycleKind::Outer
        } else if area < -1e-9 {
            CycleKind::Inner
        } else {
            CycleKind::Filament
        };
        cycles.push(Cycle { half_edges, kind });
    }

    cycles
}

fn assemble_faces(dcel: &mut Dcel<PointD>, cycles: Vec<Cycle>) {
    let mut outer_cycles: Vec<Vec<HalfEdgeId>> = Vec::new();
    let mut hole_like_cycles: Vec<Vec<HalfEdgeId>> = Vec::new();

    for cycle in cycles {
        match cycle.kind {
            CycleKind::Outer => outer_cycles.push(cycle.half_edges),
            CycleKind::Inner | CycleKind::Filament => hole_like_cycles.push(cycle.half_edges),
        }
    }

    // Discovery order for bounded faces: ascending by the smallest half-edge
    // id within each outer cycle.
    outer_cycles.sort_by_key(|c| c.iter().min().copied().unwrap());

    let mut bounded_faces: Vec<(FaceId, Vec<PointD>)> = Vec::new();

    for cycle in &outer_cycles {
        let face_id = dcel.add_face();
        let outer_edge = *cycle.iter().min().unwrap();
        dcel.face_mut(face_id).outer_edge = Some(outer_edge);
        for &he in cycle {
            dcel.half_edge_mut(he).face = face_id;
        }
        let polygon: Vec<PointD> = cycle.iter().map(|&he| dcel.vertex(dcel.half_edge(he).origin).coords).collect();
        bounded_faces.push((face_id, polygon));
    }

    // The innermost (smallest-area) containing face wins, found by testing
    // every bounded face and keeping the smallest-area match.
    for cycle in &hole_like_cycles {
        let sample = leftmost_point(dcel, cycle);
        let cycle_edges: std::collections::HashSet<HalfEdgeId> = cycle.iter().copied().collect();
        let mut owner = OUTER_FACE;
        let mut owner_area = f64::INFINITY;
        for (face_id, polygon) in &bounded_faces {
            // A cycle that is the CW twin of `face_id`'s own outer boundary
            // shares every vertex with `polygon`, so its leftmost vertex sits
            // exactly on `polygon`'s boundary — ray-casting can't tell that
            // apart from "inside". Such a cycle belongs to whatever lies
            // *outside* `face_id`, never to `face_id` itself, so skip it.
            let outer_edge = dcel.face(*face_id).outer_edge.unwrap();
            let is_own_twin_cycle =
                dcel.face_cycle(outer_edge).any(|he| cycle_edges.contains(&dcel.half_edge(he).twin));
            if is_own_twin_cycle {
                continue;
            }
            if point_in_polygon(sample, polygon) {
                let area = shoelace_area(polygon).abs();
                if area < owner_area {
                    owner_area = area;
                    owner = *face_id;
                }
            }
        }
        for &he in cycle {
            dcel.half_edge_mut(he).face = owner;
        }
        let representative = *cycle.iter().min().unwrap();
        dcel.face_mut(owner).inner_edges.push(representative);
    }
}

fn leftmost_point(dcel: &Dcel<PointD>, cycle: &[HalfEdgeId]) -> PointD {
    cycle
        .iter()
        .map(|&he| dcel.vertex(dcel.half_edge(he).origin).coords)
        .min_by(|a, b| a.x.partial_cmp(&b.x).unwrap().then(a.y.partial_cmp(&b.y).unwrap()))
        .unwrap()
}

/// Standard ray-casting point-in-polygon test (even-odd rule).
fn point_in_polygon(p: PointD, polygon: &[PointD]) -> bool {
    let n = polygon.len();
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let pi = polygon[i];
        let pj = polygon[j];
        let crosses_y = (pi.y > p.y) != (pj.y > p.y);
        if crosses_y {
            let x_at_y = pj.x + (p.y - pj.y) / (pi.y - pj.y) * (pi.x - pj.x);
            if p.x < x_at_y {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

fn assign_vertex_outgoing_edges(dcel: &mut Dcel<PointD>) {
    let mut smallest: Vec<Option<HalfEdgeId>> = vec![None; dcel.num_vertices()];
    for i in 0..dcel.num_half_edges() {
        let he = HalfEdgeId(i);
        let v = dcel.half_edge(he).origin.0;
        if smallest[v].is_none() {
            smallest[v] = Some(he);
        }
    }
    for (v, he) in smallest.into_iter().enumerate() {
        dcel.vertex_mut(VertexId(v)).half_edge = he;
    }
}
