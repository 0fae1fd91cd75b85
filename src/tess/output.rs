// Copyright 2025 Lars Brubaker
// Output generation methods for the Tessellator.

use log::debug;

use super::Tessellator;
use crate::mesh::coloring::color_faces;
use crate::mesh::{FaceData, Mesh, VertIdx};

impl Tessellator {
    /// Store the final mesh and faces, color them and orient the triangles.
    ///
    /// Triangles come out of the triangulator counter-clockwise. Unless
    /// ForceCounterClockwise is set they are flipped to follow a clockwise
    /// contour, so every triangle winds like the input polygon. Face cycles
    /// always stay counter-clockwise, as stored in the mesh.
    pub(crate) fn assemble_output(
        &mut self,
        mesh: Mesh,
        faces: FaceData,
        mut triangles: Vec<[VertIdx; 3]>,
    ) {
        if self.clockwise && !self.force_ccw {
            for t in triangles.iter_mut() {
                t.swap(1, 2);
            }
        }

        self.colors = if self.color_faces {
            Some(color_faces(&faces.adjacency, self.palette_size))
        } else {
            None
        };

        debug!(
            "output: {} face(s), {} triangle(s), colors {}",
            faces.len(),
            triangles.len(),
            if self.colors.is_some() { "on" } else { "off" }
        );
        self.mesh = Some(mesh);
        self.faces = faces;
        self.triangles = triangles;
    }
}
