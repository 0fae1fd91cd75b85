// Copyright 2025 Lars Brubaker
// Shared test utilities for monotess tests.

#![allow(dead_code)]

use monotess::geom::{signed_area, triangle_area};
use monotess::{ElementType, Point, Tessellator};

/// Install a test logger once; `RUST_LOG=debug cargo test` shows the sweep.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn points(coords: &[(f64, f64)]) -> Vec<Point> {
    coords.iter().map(|&p| Point::from(p)).collect()
}

/// The 8-vertex star with two notches, counter-clockwise.
pub fn star() -> Vec<Point> {
    points(&[
        (-1.0, -2.0),
        (0.0, -1.0),
        (1.0, -2.0),
        (2.0, 0.0),
        (1.0, 2.0),
        (0.0, 1.0),
        (-1.0, 2.0),
        (-2.0, 0.0),
    ])
}

/// Tessellate a single contour into triangles, panicking on failure.
pub fn tessellate(contour: &[Point]) -> Tessellator {
    tessellate_as(contour, ElementType::Triangles)
}

pub fn tessellate_as(contour: &[Point], element_type: ElementType) -> Tessellator {
    init_logging();
    let mut tess = Tessellator::new();
    tess.add_contour(contour)
        .unwrap_or_else(|e| panic!("contour rejected: {}", e));
    tess.tessellate(element_type)
        .unwrap_or_else(|e| panic!("tessellation failed: {}", e));
    tess
}

/// Signed area of every output triangle.
pub fn triangle_areas(tess: &Tessellator) -> Vec<f64> {
    let v = tess.vertices();
    tess.triangles()
        .iter()
        .map(|t| triangle_area(v[t[0] as usize], v[t[1] as usize], v[t[2] as usize]))
        .collect()
}

/// Sum of the signed triangle areas.
pub fn total_signed_area(tess: &Tessellator) -> f64 {
    triangle_areas(tess).iter().sum()
}

pub fn polygon_area(tess: &Tessellator) -> f64 {
    signed_area(tess.vertices())
}

/// Indices in range, each triangle uses three distinct vertices, the triangle
/// count is n - 2 and the mesh invariants hold.
pub fn verify_valid_output(tess: &Tessellator) {
    let n = tess.vertex_count();
    assert!(n >= 3, "no vertices in output");
    assert_eq!(
        tess.triangles().len(),
        n - 2,
        "expected n - 2 triangles for n = {}",
        n
    );
    for (i, t) in tess.triangles().iter().enumerate() {
        for &idx in t {
            assert!((idx as usize) < n, "triangle {} index {} out of range", i, idx);
        }
        assert!(
            t[0] != t[1] && t[1] != t[2] && t[0] != t[2],
            "triangle {} repeats a vertex: {:?}",
            i,
            t
        );
    }
    let mesh = tess.mesh().expect("mesh missing after tessellate");
    mesh.validate()
        .unwrap_or_else(|e| panic!("mesh invariants broken: {}", e));
    for (f, cycle) in tess.faces() {
        assert!(cycle.len() >= 3, "face {} has {} vertices", f, cycle.len());
    }
}

/// Every triangle winds like the input polygon. Collinear input points may
/// give triangles whose area is within `epsilon` of zero.
pub fn verify_orientation(tess: &Tessellator, epsilon: f64) {
    let sign = polygon_area(tess).signum();
    for (i, a) in triangle_areas(tess).into_iter().enumerate() {
        assert!(
            a * sign >= -epsilon,
            "triangle {} has area {} against polygon sign {}",
            i,
            a,
            sign
        );
    }
}

/// Adjacent faces never share a color.
pub fn verify_coloring(tess: &Tessellator, max_colors: usize) {
    let colors = tess.colors().expect("coloring disabled");
    assert_eq!(colors.len(), tess.faces().len());
    for (f, neighbours) in tess.adjacency() {
        for n in neighbours {
            assert_ne!(colors[f], colors[n], "faces {} and {} share a color", f, n);
        }
    }
    assert!(
        colors.values().all(|&c| c < max_colors),
        "more than {} colors used: {:?}",
        max_colors,
        colors
    );
}
