// Copyright 2025 Lars Brubaker
// License: SGI Free Software License B (MIT-compatible)
//
// Triangulation of a single y-monotone face.
//
// The face's vertices are visited top to bottom. A stack holds the vertices
// that still need triangles; each new vertex either fans to the whole stack
// (it lies on the opposite chain) or cuts off as many ears as stay inside the
// face (same chain). An n-vertex face always yields n - 3 diagonals and n - 2
// triangles.
//
// Only reads the mesh, so independent faces may be processed separately and
// their diagonals inserted afterwards.

use log::trace;

use crate::error::{Result, TessError};
use crate::geom::{higher, orientation, Point};
use crate::mesh::{FaceIdx, Mesh, VertIdx};
use crate::priorityq::PriorityQ;
use crate::sweep::Diagonal;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Chain {
    Left,
    Right,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MonotoneTriangulation {
    /// Counter-clockwise vertex triples.
    pub triangles: Vec<[VertIdx; 3]>,
    pub diagonals: Vec<Diagonal>,
}

/// Orient (a, b, c) counter-clockwise.
pub fn ccw_triangle(mesh: &Mesh, a: VertIdx, b: VertIdx, c: VertIdx) -> [VertIdx; 3] {
    if orientation(mesh.pos(a), mesh.pos(b), mesh.pos(c)) < 0.0 {
        [a, c, b]
    } else {
        [a, b, c]
    }
}

/// Triangulate the counter-clockwise vertex cycle of `face`.
pub fn triangulate_monotone(
    mesh: &Mesh,
    face: FaceIdx,
    cycle: &[VertIdx],
) -> Result<MonotoneTriangulation> {
    let n = cycle.len();
    if n < 3 {
        return Err(TessError::MalformedFace { face, len: n });
    }
    let mut out = MonotoneTriangulation::default();
    if n == 3 {
        out.triangles
            .push(ccw_triangle(mesh, cycle[0], cycle[1], cycle[2]));
        return Ok(out);
    }

    let pos = |i: u32| mesh.pos(cycle[i as usize]);
    if !is_monotone(n, &pos) {
        return Err(TessError::NotMonotone { face });
    }

    // A vertex whose ring predecessor is above it lies on the descending,
    // left chain of a counter-clockwise face.
    let chain: Vec<Chain> = (0..n)
        .map(|i| {
            let pred = ((i + n - 1) % n) as u32;
            if higher(pos(pred), pos(i as u32)) {
                Chain::Left
            } else {
                Chain::Right
            }
        })
        .collect();
    let q = PriorityQ::new(0..n as u32, pos).into_descending();

    let vert = |i: u32| cycle[i as usize];
    let emit = |out: &mut MonotoneTriangulation, a: u32, b: u32, c: u32| {
        out.triangles.push(ccw_triangle(mesh, vert(a), vert(b), vert(c)));
    };

    let mut stack: Vec<u32> = vec![q[0], q[1]];
    for j in 2..n - 1 {
        let u = q[j];
        let top = stack[stack.len() - 1];
        if chain[u as usize] != chain[top as usize] {
            // Opposite chain: fan from u to every stacked vertex.
            while stack.len() > 1 {
                let p = stack[stack.len() - 1];
                stack.pop();
                let below = stack[stack.len() - 1];
                emit(&mut out, u, p, below);
                out.diagonals.push(Diagonal {
                    src: vert(u),
                    tgt: vert(p),
                });
            }
            stack.clear();
            stack.push(q[j - 1]);
            stack.push(u);
        } else {
            // Same chain: cut ears while the diagonal stays inside.
            let mut last = stack[stack.len() - 1];
            stack.pop();
            while let Some(&t) = stack.last() {
                let turn = orientation(pos(t), pos(last), pos(u));
                let inside = match chain[u as usize] {
                    Chain::Left => turn > 0.0,
                    Chain::Right => turn < 0.0,
                };
                if !inside {
                    break;
                }
                emit(&mut out, t, last, u);
                out.diagonals.push(Diagonal {
                    src: vert(u),
                    tgt: vert(t),
                });
                last = t;
                stack.pop();
            }
            stack.push(last);
            stack.push(u);
        }
        trace!("face {}: after {} stack {:?}", face, vert(u), stack);
    }

    // The bottom vertex closes a fan over what is left on the stack.
    let bottom = q[n - 1];
    let k = stack.len();
    for idx in (1..k).rev() {
        emit(&mut out, bottom, stack[idx], stack[idx - 1]);
        if idx != k - 1 {
            out.diagonals.push(Diagonal {
                src: vert(bottom),
                tgt: vert(stack[idx]),
            });
        }
    }

    Ok(out)
}

/// Walking forward from the highest vertex, the ring descends to the lowest
/// vertex and then climbs back.
fn is_monotone(n: usize, pos: &impl Fn(u32) -> Point) -> bool {
    let mut top = 0;
    let mut bottom = 0;
    for i in 1..n {
        if higher(pos(i as u32), pos(top as u32)) {
            top = i;
        }
        if higher(pos(bottom as u32), pos(i as u32)) {
            bottom = i;
        }
    }
    let mut i = top;
    while i != bottom {
        let next = (i + 1) % n;
        if !higher(pos(i as u32), pos(next as u32)) {
            return false;
        }
        i = next;
    }
    while i != top {
        let next = (i + 1) % n;
        if !higher(pos(next as u32), pos(i as u32)) {
            return false;
        }
        i = next;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::{signed_area, triangle_area};
    use approx::assert_relative_eq;

    fn mesh_of(pts: &[(f64, f64)]) -> Mesh {
        let pts: Vec<Point> = pts.iter().map(|&p| p.into()).collect();
        Mesh::from_contour(&pts, false).unwrap()
    }

    fn area_of(mesh: &Mesh, tris: &[[VertIdx; 3]]) -> f64 {
        tris.iter()
            .map(|t| triangle_area(mesh.pos(t[0]), mesh.pos(t[1]), mesh.pos(t[2])))
            .sum()
    }

    #[test]
    fn triangle_is_returned_counter_clockwise() {
        let mesh = mesh_of(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]);
        let tri = triangulate_monotone(&mesh, 0, &[0, 2, 1]).unwrap();
        assert_eq!(tri.triangles, vec![[0, 1, 2]]);
        assert!(tri.diagonals.is_empty());
    }

    #[test]
    fn too_small_face_is_rejected() {
        let mesh = mesh_of(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]);
        assert_eq!(
            triangulate_monotone(&mesh, 4, &[0, 1]).unwrap_err(),
            TessError::MalformedFace { face: 4, len: 2 }
        );
    }

    #[test]
    fn hexagonal_piece_of_star() {
        let mesh = mesh_of(&[
            (-1.0, -2.0),
            (0.0, -1.0),
            (1.0, -2.0),
            (2.0, 0.0),
            (1.0, 2.0),
            (0.0, 1.0),
            (-1.0, 2.0),
            (-2.0, 0.0),
        ]);
        let cycle = [5, 7, 0, 1, 3, 4];
        let tri = triangulate_monotone(&mesh, 1, &cycle).unwrap();
        assert_eq!(tri.triangles.len(), 4);
        assert_eq!(tri.diagonals.len(), 3);
        let expected: Vec<Point> = cycle.iter().map(|&v| mesh.pos(v)).collect();
        assert_relative_eq!(area_of(&mesh, &tri.triangles), signed_area(&expected));
        for t in &tri.triangles {
            assert!(triangle_area(mesh.pos(t[0]), mesh.pos(t[1]), mesh.pos(t[2])) > 0.0);
        }
    }

    #[test]
    fn left_chain_with_reflex_vertex() {
        // Vertex 2 dents the left chain inward.
        let mesh = mesh_of(&[
            (0.0, 10.0),
            (-1.0, 7.0),
            (-0.5, 5.0),
            (-1.0, 3.0),
            (0.0, 0.0),
            (3.0, 5.0),
        ]);
        let cycle: Vec<VertIdx> = (0..6).collect();
        let tri = triangulate_monotone(&mesh, 0, &cycle).unwrap();
        assert_eq!(tri.triangles.len(), 4);
        assert_eq!(tri.diagonals.len(), 3);
        assert_relative_eq!(area_of(&mesh, &tri.triangles), signed_area(&[
            mesh.pos(0),
            mesh.pos(1),
            mesh.pos(2),
            mesh.pos(3),
            mesh.pos(4),
            mesh.pos(5),
        ]));
    }

    #[test]
    fn non_monotone_face_is_rejected() {
        let mesh = mesh_of(&[(0.0, 0.0), (2.0, 0.0), (2.0, 3.0), (1.0, 1.0), (0.0, 3.0)]);
        let cycle: Vec<VertIdx> = (0..5).collect();
        assert_eq!(
            triangulate_monotone(&mesh, 0, &cycle).unwrap_err(),
            TessError::NotMonotone { face: 0 }
        );
    }
}
