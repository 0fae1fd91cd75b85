// monotess: simple-polygon triangulation by y-monotone decomposition
// Copyright 2025 Lars Brubaker
// License: SGI Free Software License B (MIT-compatible)

pub mod dict;
pub mod error;
pub mod geom;
pub mod mesh;
pub mod monotone;
pub mod priorityq;
pub mod sweep;
pub mod tess;

pub use error::{Result, TessError};
pub use geom::{Point, Real};
pub use sweep::VertexKind;
pub use tess::{ElementType, TessOption, Tessellator};
