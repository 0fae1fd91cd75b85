// Copyright 2025 Lars Brubaker
// License: SGI Free Software License B (MIT-compatible)
//
// The tessellator front object: contour intake, validation, options and the
// triangulation pipeline.
//
//   contour -> Mesh::from_contour -> sweep (monotone diagonals) -> insert
//           -> extract_faces (monotone pieces) -> triangulate each piece
//           -> insert triangle diagonals -> extract_faces -> color faces
//
// Output assembly lives in tess/output.rs.

mod output;

#[cfg(test)]
mod tests;

use std::collections::{BTreeMap, BTreeSet};

use log::{debug, info};

use crate::error::{Result, TessError};
use crate::geom::{higher, signed_area, Point};
use crate::mesh::coloring::MIN_PALETTE;
use crate::mesh::{FaceData, FaceIdx, Mesh, VertIdx};
use crate::monotone::triangulate_monotone;
use crate::sweep::{self, Diagonal, VertexKind};

// ─────────────────────────────── Public types ──────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ElementType {
    /// Triangulation diagonals are inserted; the final faces are triangles.
    Triangles,
    /// The mesh stops after the monotone decomposition. Triangles are still
    /// computed and returned.
    MonotonePieces,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TessOption {
    /// Color the faces of the final mesh (default on).
    ColorFaces,
    /// Emit counter-clockwise triangles even for a clockwise contour
    /// (default off: triangles follow the contour's winding).
    ForceCounterClockwise,
}

// ─────────────────────────── Tessellator ──────────────────────────────────────

pub struct Tessellator {
    contours: Vec<Vec<Point>>,
    color_faces: bool,
    force_ccw: bool,
    palette_size: usize,

    // Output
    element_type: ElementType,
    mesh: Option<Mesh>,
    clockwise: bool,
    out_vertices: Vec<Point>,
    vertex_kinds: Vec<VertexKind>,
    sweep_diagonals: usize,
    monotone_pieces: BTreeMap<FaceIdx, Vec<VertIdx>>,
    faces: FaceData,
    triangles: Vec<[VertIdx; 3]>,
    colors: Option<BTreeMap<FaceIdx, usize>>,
}

impl Tessellator {
    pub fn new() -> Self {
        Tessellator {
            contours: Vec::new(),
            color_faces: true,
            force_ccw: false,
            palette_size: MIN_PALETTE,
            element_type: ElementType::Triangles,
            mesh: None,
            clockwise: false,
            out_vertices: Vec::new(),
            vertex_kinds: Vec::new(),
            sweep_diagonals: 0,
            monotone_pieces: BTreeMap::new(),
            faces: FaceData::default(),
            triangles: Vec::new(),
            colors: None,
        }
    }

    pub fn set_option(&mut self, option: TessOption, value: bool) {
        match option {
            TessOption::ColorFaces => self.color_faces = value,
            TessOption::ForceCounterClockwise => self.force_ccw = value,
        }
    }

    /// Number of colors the face colorer aims for; never below 4.
    pub fn set_palette_size(&mut self, size: usize) {
        self.palette_size = size.max(MIN_PALETTE);
    }

    pub fn palette_size(&self) -> usize {
        self.palette_size
    }

    /// Add a contour after validating it.
    ///
    /// The first contour is the polygon boundary. Any further contour is a
    /// hole; holes are kept so that `tessellate` can reject them.
    pub fn add_contour(&mut self, points: &[Point]) -> Result<()> {
        validate_contour(points)?;
        self.contours.push(points.to_vec());
        Ok(())
    }

    /// Forget all contours and output.
    pub fn clear(&mut self) {
        self.contours.clear();
        self.reset_output();
    }

    pub fn tessellate(&mut self, element_type: ElementType) -> Result<()> {
        self.reset_output();
        self.element_type = element_type;

        let points = match self.contours.as_slice() {
            [] => return Err(TessError::NoContour),
            [boundary] => boundary.clone(),
            [_, holes @ ..] => {
                return Err(TessError::HolesUnsupported { holes: holes.len() })
            }
        };
        let clockwise = signed_area(&points) < 0.0;
        info!(
            "tessellating {} vertices ({}), {:?}",
            points.len(),
            if clockwise { "clockwise" } else { "counter-clockwise" },
            element_type
        );

        let mut mesh = Mesh::from_contour(&points, clockwise)?;

        let outcome = sweep::monotone_diagonals(&mut mesh)?;
        insert_all(&mut mesh, &outcome.diagonals)?;
        let pieces = mesh.extract_faces()?;
        info!(
            "{} sweep diagonal(s), {} monotone piece(s)",
            outcome.diagonals.len(),
            pieces.len()
        );

        // Each piece only reads the mesh; diagonals are inserted afterwards.
        let mut triangles = Vec::with_capacity(points.len() - 2);
        let mut tri_diagonals = Vec::new();
        for (&face, cycle) in &pieces.cycles {
            let tri = triangulate_monotone(&mesh, face, cycle)?;
            debug!(
                "piece {}: {} vertices, {} triangle(s)",
                face,
                cycle.len(),
                tri.triangles.len()
            );
            triangles.extend(tri.triangles);
            tri_diagonals.extend(tri.diagonals);
        }

        let faces = match element_type {
            ElementType::Triangles => {
                insert_all(&mut mesh, &tri_diagonals)?;
                mesh.extract_faces()?
            }
            ElementType::MonotonePieces => pieces.clone(),
        };

        self.clockwise = clockwise;
        self.out_vertices = points;
        self.vertex_kinds = outcome.kinds;
        self.sweep_diagonals = outcome.diagonals.len();
        self.monotone_pieces = pieces.cycles;
        self.assemble_output(mesh, faces, triangles);

        info!(
            "{} triangle(s), {} face(s)",
            self.triangles.len(),
            self.faces.len()
        );
        Ok(())
    }

    fn reset_output(&mut self) {
        self.mesh = None;
        self.clockwise = false;
        self.out_vertices.clear();
        self.vertex_kinds.clear();
        self.sweep_diagonals = 0;
        self.monotone_pieces.clear();
        self.faces = FaceData::default();
        self.triangles.clear();
        self.colors = None;
    }

    // ─────── Accessors ────────────────────────────────────────────────────────

    /// Input vertices; every index in the output refers to this slice.
    pub fn vertices(&self) -> &[Point] {
        &self.out_vertices
    }
    pub fn vertex_count(&self) -> usize {
        self.out_vertices.len()
    }
    pub fn mesh(&self) -> Option<&Mesh> {
        self.mesh.as_ref()
    }
    /// Face id to counter-clockwise vertex cycle after the monotone decomposition.
    pub fn monotone_pieces(&self) -> &BTreeMap<FaceIdx, Vec<VertIdx>> {
        &self.monotone_pieces
    }
    /// Face id to counter-clockwise vertex cycle of the final mesh.
    pub fn faces(&self) -> &BTreeMap<FaceIdx, Vec<VertIdx>> {
        &self.faces.cycles
    }
    pub fn adjacency(&self) -> &BTreeMap<FaceIdx, BTreeSet<FaceIdx>> {
        &self.faces.adjacency
    }
    pub fn triangles(&self) -> &[[VertIdx; 3]] {
        &self.triangles
    }
    pub fn colors(&self) -> Option<&BTreeMap<FaceIdx, usize>> {
        self.colors.as_ref()
    }
    pub fn sweep_diagonal_count(&self) -> usize {
        self.sweep_diagonals
    }
    pub fn vertex_kinds(&self) -> &[VertexKind] {
        &self.vertex_kinds
    }
    pub fn is_clockwise(&self) -> bool {
        self.clockwise
    }
    /// Triangles or monotone pieces, depending on the last element type.
    pub fn element_count(&self) -> usize {
        match self.element_type {
            ElementType::Triangles => self.triangles.len(),
            ElementType::MonotonePieces => self.monotone_pieces.len(),
        }
    }
}

impl Default for Tessellator {
    fn default() -> Self {
        Self::new()
    }
}

fn insert_all(mesh: &mut Mesh, diagonals: &[Diagonal]) -> Result<()> {
    for d in diagonals {
        mesh.insert(d.src, d.tgt)?;
    }
    Ok(())
}

/// Reject contours the sweep cannot handle: too short, non-finite, repeated
/// points or zero area.
fn validate_contour(points: &[Point]) -> Result<()> {
    if points.len() < 3 {
        return Err(TessError::TooFewVertices {
            count: points.len(),
        });
    }
    if let Some(index) = points.iter().position(|p| !p.is_finite()) {
        return Err(TessError::InvalidCoordinate { index });
    }

    let mut order: Vec<usize> = (0..points.len()).collect();
    order.sort_by(|&a, &b| {
        let (pa, pb) = (points[a], points[b]);
        if higher(pa, pb) {
            std::cmp::Ordering::Greater
        } else if higher(pb, pa) {
            std::cmp::Ordering::Less
        } else {
            a.cmp(&b)
        }
    });
    for w in order.windows(2) {
        if points[w[0]] == points[w[1]] {
            return Err(TessError::DuplicateVertex {
                first: w[0].min(w[1]),
                second: w[0].max(w[1]),
            });
        }
    }

    if signed_area(points) == 0.0 {
        return Err(TessError::DegenerateContour);
    }
    Ok(())
}
