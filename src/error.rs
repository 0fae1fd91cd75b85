// Copyright 2025 Lars Brubaker
// License: SGI Free Software License B (MIT-compatible)
//
// Error type shared by the mesh, the sweep, the monotone triangulator and the
// tessellator front object. Every failure aborts the run for that polygon.

use crate::mesh::{EdgeIdx, FaceIdx, VertIdx};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TessError {
    #[error("a contour needs at least 3 vertices, got {count}")]
    TooFewVertices { count: usize },

    #[error("vertex {index} has a non-finite coordinate")]
    InvalidCoordinate { index: usize },

    #[error("vertices {first} and {second} coincide")]
    DuplicateVertex { first: usize, second: usize },

    #[error("contour has zero area")]
    DegenerateContour,

    #[error("holes are not supported ({holes} extra contour(s) given)")]
    HolesUnsupported { holes: usize },

    #[error("no contour was added before tessellating")]
    NoContour,

    #[error("diagonal {src} -> {tgt} does not lie on a common face")]
    NoCommonFace { src: VertIdx, tgt: VertIdx },

    #[error("diagonal {src} -> {tgt} is not between two distinct mesh vertices")]
    InvalidDiagonal { src: VertIdx, tgt: VertIdx },

    #[error("no active edge left of vertex {vertex}; input is degenerate or not simple")]
    MissingHelper { vertex: VertIdx },

    #[error("face {face} has {len} vertices; at least 3 are required")]
    MalformedFace { face: FaceIdx, len: usize },

    #[error("face {face} is not y-monotone")]
    NotMonotone { face: FaceIdx },

    #[error("face cycle through half-edge {edge} does not close")]
    BrokenCycle { edge: EdgeIdx },

    #[error("only {reached} of {total} faces are reachable through twin edges")]
    UnreachableFaces { reached: usize, total: usize },
}

pub type Result<T, E = TessError> = std::result::Result<T, E>;
