// Integration tests for the §8 scenario fixtures, exercised end-to-end
// through `Subdivision::from_lines`.

use planar_subdivision::point::PointD;
use planar_subdivision::{Segment, Subdivision};

fn seg(x0: f64, y0: f64, x1: f64, y1: f64) -> Segment {
    Segment::new(PointD { x: x0, y: y0 }, PointD { x: x1, y: y1 })
}

#[test]
fn two_parallel_segments_have_no_bounded_faces() {
    let segs = vec![seg(-1.0, -2.0, 1.0, -2.0), seg(-1.0, 2.0, 1.0, 2.0)];
    let sub = Subdivision::from_lines(&segs, 0.0).unwrap();
    sub.validate().unwrap();
    assert_eq!(sub.num_vertices(), 4);
    assert_eq!(sub.num_half_edges(), 4);
    assert_eq!(sub.num_bounded_faces(), 0);
    assert_eq!(sub.zero_area_cycles().len(), 2);
}

#[test]
fn axis_aligned_square_has_two_faces() {
    let segs = vec![
        seg(-1.0, -2.0, -1.0, 2.0),
        seg(-1.0, 2.0, 1.0, 2.0),
        seg(1.0, 2.0, 1.0, -2.0),
        seg(1.0, -2.0, -1.0, -2.0),
    ];
    let sub = Subdivision::from_lines(&segs, 0.0).unwrap();
    sub.validate().unwrap();
    assert_eq!(sub.num_vertices(), 4);
    assert_eq!(sub.num_half_edges(), 8);
    assert_eq!(sub.num_faces(), 2);
    assert_eq!(sub.zero_area_cycles().len(), 0);
}

#[test]
fn epsilon_perturbed_square_matches_exact_topology() {
    let exact = vec![
        seg(-1.0, -2.0, -1.0, 2.0),
        seg(-1.0, 2.0, 1.0, 2.0),
        seg(1.0, 2.0, 1.0, -2.0),
        seg(1.0, -2.0, -1.0, -2.0),
    ];
    let perturbed = vec![
        seg(-1.03, -1.98, -0.97, 2.02),
        seg(-1.0, 1.97, 1.02, 2.0),
        seg(0.98, 2.0, 1.01, -1.99),
        seg(1.0, -2.02, -0.99, -2.0),
    ];
    let a = Subdivision::from_lines(&exact, 0.0).unwrap();
    let b = Subdivision::from_lines(&perturbed, 0.2).unwrap();
    b.validate().unwrap();
    assert_eq!(a.num_vertices(), b.num_vertices());
    assert_eq!(a.num_half_edges(), b.num_half_edges());
    assert_eq!(a.num_faces(), b.num_faces());
}

#[test]
fn star_has_one_vertex_at_center_and_one_filament() {
    let segs = vec![
        seg(0.0, 0.0, -1.0, -2.0),
        seg(0.0, 0.0, -1.0, 2.0),
        seg(0.0, 0.0, 1.0, 2.0),
        seg(0.0, 0.0, 1.0, -2.0),
    ];
    let sub = Subdivision::from_lines(&segs, 0.0).unwrap();
    sub.validate().unwrap();
    assert_eq!(sub.num_vertices(), 5);
    assert_eq!(sub.num_half_edges(), 8);
    assert_eq!(sub.num_bounded_faces(), 0);
    assert_eq!(sub.zero_area_cycles().len(), 1);
}

#[test]
fn triforce_has_three_faces_and_matching_areas() {
    let segs = vec![
        seg(-5.0, -4.0, 0.0, 6.0),
        seg(0.0, 6.0, 5.0, -4.0),
        seg(5.0, -4.0, -5.0, -4.0),
        seg(-1.0, 2.0, 1.0, 2.0),
        seg(1.0, 2.0, 0.0, 0.0),
        seg(0.0, 0.0, -1.0, 2.0),
    ];
    let sub = Subdivision::from_lines(&segs, 0.0).unwrap();
    sub.validate().unwrap();
    assert_eq!(sub.num_vertices(), 6);
    assert_eq!(sub.num_half_edges(), 12);
    assert_eq!(sub.num_faces(), 3);
}

#[test]
fn diamond_has_four_faces() {
    let segs = vec![
        seg(0.0, -4.0, -6.0, 0.0),
        seg(0.0, -4.0, -3.0, 0.0),
        seg(0.0, -4.0, 3.0, 0.0),
        seg(0.0, -4.0, 6.0, 0.0),
        seg(0.0, 4.0, -6.0, 0.0),
        seg(0.0, 4.0, -3.0, 0.0),
        seg(0.0, 4.0, 3.0, 0.0),
        seg(0.0, 4.0, 6.0, 0.0),
    ];
    let sub = Subdivision::from_lines(&segs, 0.0).unwrap();
    sub.validate().unwrap();
    assert_eq!(sub.num_vertices(), 6);
    assert_eq!(sub.num_half_edges(), 16);
    assert_eq!(sub.num_faces(), 4);
}

#[test]
fn natural_sort_pinned_scenario() {
    use planar_subdivision::util::natural_sort::{natural_cmp, natural_eq};
    assert!(natural_eq("b-2", "b-02"));
    assert_eq!(natural_cmp("02-b-2", "2-b-1"), std::cmp::Ordering::Greater);
}
