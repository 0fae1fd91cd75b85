// Copyright 2025 Lars Brubaker
// License: SGI Free Software License B (MIT-compatible)
//
// The mesh is a doubly connected edge list (half-edge structure) describing a
// simple polygon and its subdivision by diagonals.
// All links are u32 indices into Vec arenas; INVALID (u32::MAX) is the null link.
//
// Design:
//   - One half-edge per ring edge is created up front. Ring edges have no twin:
//     the unbounded outside face is not represented.
//   - Diagonals are inserted as twin pairs. An insertion never removes anything,
//     it relinks prev/next and relabels the faces on one side.
//   - Faces are not stored; a face is the set of half-edges sharing a face id,
//     recovered by walking `next`.

pub mod coloring;

use std::collections::{BTreeMap, BTreeSet};

use log::{debug, trace};

use crate::dict::NodeIdx;
use crate::error::{Result, TessError};
use crate::geom::Point;

pub const INVALID: u32 = u32::MAX;

/// Index into Mesh::verts
pub type VertIdx = u32;
/// Face identifier carried by every half-edge.
pub type FaceIdx = u32;
/// Index into Mesh::edges
pub type EdgeIdx = u32;

/// Face id of the whole polygon before any diagonal is inserted.
pub const INITIAL_FACE: FaceIdx = 0;

#[derive(Clone, Debug)]
pub struct Vertex {
    pub pos: Point,
    /// One outgoing half-edge; its prev/next recover the ring neighbours.
    pub an_edge: EdgeIdx,
}

#[derive(Clone, Debug)]
pub struct HalfEdge {
    /// Origin vertex index.
    pub org: VertIdx,
    /// Oppositely directed half-edge along the same segment.
    pub twin: EdgeIdx,
    /// Previous half-edge around the face: prev.next == self.
    pub prev: EdgeIdx,
    /// Next half-edge around the face: next.prev == self.
    pub next: EdgeIdx,
    /// Face to the left of this half-edge.
    pub face: FaceIdx,
    /// Helper vertex, only meaningful while the edge is active in the sweep.
    pub helper: VertIdx,
    /// Node in the sweep status dictionary (INVALID if not active).
    pub status_node: NodeIdx,
}

impl Default for HalfEdge {
    fn default() -> Self {
        Self {
            org: INVALID,
            twin: INVALID,
            prev: INVALID,
            next: INVALID,
            face: INITIAL_FACE,
            helper: INVALID,
            status_node: INVALID,
        }
    }
}

/// Faces of a mesh: vertex cycles and the dual adjacency graph.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FaceData {
    pub cycles: BTreeMap<FaceIdx, Vec<VertIdx>>,
    pub adjacency: BTreeMap<FaceIdx, BTreeSet<FaceIdx>>,
}

impl FaceData {
    pub fn len(&self) -> usize {
        self.cycles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cycles.is_empty()
    }
}

/// The half-edge mesh.
#[derive(Clone, Debug)]
pub struct Mesh {
    pub verts: Vec<Vertex>,
    pub edges: Vec<HalfEdge>,
    face_count: u32,
}

impl Mesh {
    /// Build the ring of a simple polygon.
    ///
    /// Half-edge `i` leaves vertex `i`. With `reverse` the ring is linked
    /// from the last point to the first, which turns a clockwise input into a
    /// counter-clockwise mesh without renumbering the vertices.
    pub fn from_contour(points: &[Point], reverse: bool) -> Result<Self> {
        let n = points.len();
        if n < 3 {
            return Err(TessError::TooFewVertices { count: n });
        }

        let verts = points
            .iter()
            .enumerate()
            .map(|(i, &pos)| Vertex {
                pos,
                an_edge: i as EdgeIdx,
            })
            .collect();

        let edges = (0..n)
            .map(|i| {
                let fwd = ((i + 1) % n) as EdgeIdx;
                let back = ((i + n - 1) % n) as EdgeIdx;
                let (next, prev) = if reverse { (back, fwd) } else { (fwd, back) };
                HalfEdge {
                    org: i as VertIdx,
                    next,
                    prev,
                    ..HalfEdge::default()
                }
            })
            .collect();

        Ok(Mesh {
            verts,
            edges,
            face_count: 1,
        })
    }

    // ──────────────────────────── Navigation ─────────────────────────────────

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.verts.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn face_count(&self) -> usize {
        self.face_count as usize
    }

    #[inline]
    pub fn pos(&self, v: VertIdx) -> Point {
        self.verts[v as usize].pos
    }

    #[inline]
    pub fn org(&self, e: EdgeIdx) -> VertIdx {
        self.edges[e as usize].org
    }

    /// Destination vertex of e (= origin of next).
    #[inline]
    pub fn dst(&self, e: EdgeIdx) -> VertIdx {
        self.edges[self.edges[e as usize].next as usize].org
    }

    /// The half-edge arriving at v along the original ring.
    ///
    /// `an_edge` is always a ring edge, but once diagonals are inserted its
    /// `prev` may be a diagonal ending at v. Rotate around v through twins
    /// until the arriving edge is a ring edge (ring edges have no twin).
    pub fn incoming(&self, v: VertIdx) -> EdgeIdx {
        let mut e = self.edges[self.verts[v as usize].an_edge as usize].prev;
        for _ in 0..self.edges.len() {
            let twin = self.edges[e as usize].twin;
            if twin == INVALID {
                break;
            }
            e = self.edges[twin as usize].prev;
        }
        e
    }

    /// Ring predecessor of v.
    #[inline]
    pub fn prev_vertex(&self, v: VertIdx) -> VertIdx {
        self.org(self.incoming(v))
    }

    /// Ring successor of v.
    #[inline]
    pub fn next_vertex(&self, v: VertIdx) -> VertIdx {
        self.dst(self.verts[v as usize].an_edge)
    }

    /// All half-edges leaving v.
    pub fn edges_from(&self, v: VertIdx) -> impl Iterator<Item = EdgeIdx> + '_ {
        self.edges
            .iter()
            .enumerate()
            .filter(move |(_, he)| he.org == v)
            .map(|(i, _)| i as EdgeIdx)
    }

    /// Half-edges of the face left of `start`, in `next` order.
    pub fn face_cycle(&self, start: EdgeIdx) -> Result<Vec<EdgeIdx>> {
        let mut cycle = vec![start];
        let mut e = self.edges[start as usize].next;
        while e != start {
            if e == INVALID || cycle.len() >= self.edges.len() {
                return Err(TessError::BrokenCycle { edge: start });
            }
            cycle.push(e);
            e = self.edges[e as usize].next;
        }
        Ok(cycle)
    }

    fn new_face(&mut self) -> FaceIdx {
        self.face_count += 1;
        self.face_count - 1
    }

    // ───────────────────────────── Mutation ──────────────────────────────────

    /// Insert the diagonal src -> tgt, splitting the face both lie on.
    ///
    /// Returns the new half-edge leaving `src`; its twin leaves `tgt` and
    /// carries the newly allocated face id.
    pub fn insert(&mut self, src: VertIdx, tgt: VertIdx) -> Result<EdgeIdx> {
        let nv = self.verts.len() as VertIdx;
        if src == tgt || src >= nv || tgt >= nv {
            return Err(TessError::InvalidDiagonal { src, tgt });
        }

        let starters: Vec<EdgeIdx> = self.edges_from(src).collect();
        let enders: Vec<EdgeIdx> = self.edges_from(tgt).collect();
        let (starter, ender) = starters
            .iter()
            .flat_map(|&s| enders.iter().map(move |&e| (s, e)))
            .find(|&(s, e)| self.edges[s as usize].face == self.edges[e as usize].face)
            .ok_or(TessError::NoCommonFace { src, tgt })?;

        // The pair must not already be joined along the face boundary.
        if self.dst(starter) == tgt || self.dst(ender) == src {
            return Err(TessError::InvalidDiagonal { src, tgt });
        }

        let face = self.edges[starter as usize].face;
        let new_face = self.new_face();
        let starter_prev = self.edges[starter as usize].prev;
        let ender_prev = self.edges[ender as usize].prev;

        let left = self.edges.len() as EdgeIdx;
        let right = left + 1;
        self.edges.push(HalfEdge {
            org: src,
            twin: right,
            prev: starter_prev,
            next: ender,
            face,
            ..HalfEdge::default()
        });
        self.edges.push(HalfEdge {
            org: tgt,
            twin: left,
            prev: ender_prev,
            next: starter,
            face: new_face,
            ..HalfEdge::default()
        });

        self.edges[starter_prev as usize].next = left;
        self.edges[ender as usize].prev = left;
        self.edges[ender_prev as usize].next = right;
        self.edges[starter as usize].prev = right;

        let mut e = starter;
        let mut steps = 0;
        while e != right {
            if steps > self.edges.len() {
                return Err(TessError::BrokenCycle { edge: right });
            }
            self.edges[e as usize].face = new_face;
            e = self.edges[e as usize].next;
            steps += 1;
        }

        debug!(
            "insert diagonal {} -> {}: face {} split off face {}",
            src, tgt, face, new_face
        );
        Ok(left)
    }

    // ───────────────────────────── Queries ───────────────────────────────────

    /// Walk the twin-adjacency graph from the first half-edge and collect every
    /// face's vertex cycle and neighbouring faces.
    ///
    /// Faces that cannot be reached through twins are reported as an error.
    pub fn extract_faces(&self) -> Result<FaceData> {
        let mut data = FaceData::default();
        if self.edges.is_empty() {
            return Ok(data);
        }

        let mut seen: BTreeSet<FaceIdx> = BTreeSet::new();
        let mut roots: Vec<EdgeIdx> = vec![0];
        seen.insert(self.edges[0].face);

        while let Some(root) = roots.pop() {
            let face = self.edges[root as usize].face;
            let cycle = self.face_cycle(root)?;
            let mut neighbours = BTreeSet::new();
            let mut verts = Vec::with_capacity(cycle.len());
            for &e in &cycle {
                verts.push(self.org(e));
                let twin = self.edges[e as usize].twin;
                if twin == INVALID {
                    continue;
                }
                let other = self.edges[twin as usize].face;
                neighbours.insert(other);
                if seen.insert(other) {
                    roots.push(twin);
                }
            }
            trace!("face {}: {:?} next to {:?}", face, verts, neighbours);
            data.cycles.insert(face, verts);
            data.adjacency.insert(face, neighbours);
        }

        if data.cycles.len() != self.face_count() {
            return Err(TessError::UnreachableFaces {
                reached: data.cycles.len(),
                total: self.face_count(),
            });
        }
        Ok(data)
    }

    /// Check the structural invariants: prev/next inverse, twin symmetry,
    /// closed single-face cycles, and the face count.
    pub fn validate(&self) -> Result<()> {
        let mut faces = BTreeSet::new();
        for (i, he) in self.edges.iter().enumerate() {
            let e = i as EdgeIdx;
            if he.next == INVALID
                || he.prev == INVALID
                || self.edges[he.next as usize].prev != e
                || self.edges[he.prev as usize].next != e
            {
                return Err(TessError::BrokenCycle { edge: e });
            }
            if he.twin != INVALID {
                let twin = &self.edges[he.twin as usize];
                if twin.twin != e || twin.org != self.dst(e) {
                    return Err(TessError::BrokenCycle { edge: e });
                }
            }
            for c in self.face_cycle(e)? {
                if self.edges[c as usize].face != he.face {
                    return Err(TessError::BrokenCycle { edge: e });
                }
            }
            faces.insert(he.face);
        }
        if faces.len() != self.face_count() {
            return Err(TessError::UnreachableFaces {
                reached: faces.len(),
                total: self.face_count(),
            });
        }
        Ok(())
    }
}
