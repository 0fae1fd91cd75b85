// Copyright 2025 Lars Brubaker
// Unit tests for the tessellator internals.

use super::*;
use crate::geom::triangle_area;
use crate::sweep::VertexKind::*;

fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
    coords.iter().map(|&p| Point::from(p)).collect()
}

fn star() -> Vec<Point> {
    pts(&[
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

fn square() -> Vec<Point> {
    pts(&[(0.0, 0.0), (3.0, 0.0), (3.0, 3.0), (0.0, 3.0)])
}

fn orientations(tess: &Tessellator) -> Vec<f64> {
    let v = tess.vertices();
    tess.triangles()
        .iter()
        .map(|t| triangle_area(v[t[0] as usize], v[t[1] as usize], v[t[2] as usize]))
        .collect()
}

#[test]
fn validate_rejects_short_contours() {
    assert_eq!(
        validate_contour(&square()[..2]),
        Err(TessError::TooFewVertices { count: 2 })
    );
}

#[test]
fn validate_rejects_non_finite() {
    let mut p = square();
    p[1].x = f64::NAN;
    assert_eq!(
        validate_contour(&p),
        Err(TessError::InvalidCoordinate { index: 1 })
    );
    p[1].x = f64::INFINITY;
    assert_eq!(
        validate_contour(&p),
        Err(TessError::InvalidCoordinate { index: 1 })
    );
}

#[test]
fn validate_rejects_repeated_points() {
    let p = pts(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (1.0, 0.0)]);
    assert_eq!(
        validate_contour(&p),
        Err(TessError::DuplicateVertex {
            first: 1,
            second: 3
        })
    );
}

#[test]
fn validate_rejects_zero_area() {
    let p = pts(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
    assert_eq!(validate_contour(&p), Err(TessError::DegenerateContour));
}

#[test]
fn tessellate_without_contour() {
    let mut tess = Tessellator::new();
    assert_eq!(
        tess.tessellate(ElementType::Triangles),
        Err(TessError::NoContour)
    );
}

#[test]
fn triangle_is_its_own_triangulation() {
    let mut tess = Tessellator::new();
    tess.add_contour(&pts(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]))
        .unwrap();
    tess.tessellate(ElementType::Triangles).unwrap();
    assert_eq!(tess.triangles(), &[[0, 1, 2]]);
    assert_eq!(tess.sweep_diagonal_count(), 0);
    assert_eq!(tess.faces().len(), 1);
    assert_eq!(tess.vertex_kinds(), &[Regular, End, Start]);
    assert_eq!(tess.colors().map(|c| c[&0]), Some(0));
}

#[test]
fn star_pipeline() {
    let mut tess = Tessellator::new();
    tess.add_contour(&star()).unwrap();
    tess.tessellate(ElementType::Triangles).unwrap();

    assert_eq!(
        tess.vertex_kinds(),
        &[End, Split, End, Regular, Start, Merge, Start, Regular]
    );
    assert_eq!(tess.sweep_diagonal_count(), 2);
    assert_eq!(tess.monotone_pieces().len(), 3);
    assert_eq!(tess.element_count(), 6);
    assert_eq!(tess.faces().len(), 6);
    assert!(tess.faces().values().all(|c| c.len() == 3));
    assert!(orientations(&tess).iter().all(|&a| a > 0.0));

    let mesh = tess.mesh().unwrap();
    assert_eq!(mesh.face_count(), 6);
    assert_eq!(mesh.edge_count(), 8 + 2 * 5);
    mesh.validate().unwrap();
}

#[test]
fn monotone_pieces_stop_before_triangles() {
    let mut tess = Tessellator::new();
    tess.add_contour(&star()).unwrap();
    tess.tessellate(ElementType::MonotonePieces).unwrap();

    assert_eq!(tess.element_count(), 3);
    assert_eq!(tess.faces(), tess.monotone_pieces());
    assert_eq!(tess.triangles().len(), 6);
    assert_eq!(tess.mesh().unwrap().face_count(), 3);
    let colors = tess.colors().unwrap();
    for (f, ns) in tess.adjacency() {
        for n in ns {
            assert_ne!(colors[f], colors[n]);
        }
    }
}

#[test]
fn clockwise_input_keeps_indices_and_winding() {
    let mut cw = star();
    cw.reverse();
    let mut tess = Tessellator::new();
    tess.add_contour(&cw).unwrap();
    tess.tessellate(ElementType::Triangles).unwrap();

    assert!(tess.is_clockwise());
    assert_eq!(tess.vertices(), cw.as_slice());
    assert_eq!(
        tess.vertex_kinds(),
        &[Regular, Start, Merge, Start, Regular, End, Split, End]
    );
    assert_eq!(tess.triangles().len(), 6);
    assert!(orientations(&tess).iter().all(|&a| a < 0.0));

    tess.set_option(TessOption::ForceCounterClockwise, true);
    tess.tessellate(ElementType::Triangles).unwrap();
    assert!(orientations(&tess).iter().all(|&a| a > 0.0));
}

#[test]
fn holes_are_rejected_and_output_cleared() {
    let mut tess = Tessellator::new();
    tess.add_contour(&square()).unwrap();
    tess.tessellate(ElementType::Triangles).unwrap();
    assert_eq!(tess.triangles().len(), 2);

    tess.add_contour(&pts(&[(1.0, 1.0), (2.0, 1.0), (2.0, 2.0), (1.0, 2.0)]))
        .unwrap();
    assert_eq!(
        tess.tessellate(ElementType::Triangles),
        Err(TessError::HolesUnsupported { holes: 1 })
    );
    assert!(tess.triangles().is_empty());
    assert!(tess.mesh().is_none());
    assert_eq!(tess.element_count(), 0);

    tess.clear();
    assert_eq!(
        tess.tessellate(ElementType::Triangles),
        Err(TessError::NoContour)
    );
}

#[test]
fn options_and_palette() {
    let mut tess = Tessellator::new();
    tess.set_palette_size(2);
    assert_eq!(tess.palette_size(), 4);
    tess.set_palette_size(7);
    assert_eq!(tess.palette_size(), 7);

    tess.set_option(TessOption::ColorFaces, false);
    tess.add_contour(&square()).unwrap();
    tess.tessellate(ElementType::Triangles).unwrap();
    assert!(tess.colors().is_none());
    assert_eq!(tess.adjacency().len(), 2);
}
