// Copyright 2025 Lars Brubaker
// License: SGI Free Software License B (MIT-compatible)
//
// Top-to-bottom plane sweep that decomposes a simple polygon into y-monotone
// pieces. Every vertex is classified by its local topology and dispatched to
// one of five handlers. The handlers keep the active left-boundary edges in a
// dictionary, track each edge's helper vertex, and queue one diagonal for every
// split or merge vertex. The mesh is not modified beyond the transient
// helper/status fields; the caller inserts the diagonals afterwards.
//
// The mesh ring must be counter-clockwise (interior on the left of every edge).

use log::{debug, trace};

use crate::dict::Dict;
use crate::error::{Result, TessError};
use crate::geom::{higher, orientation, x_intercept, Real};
use crate::mesh::{EdgeIdx, Mesh, VertIdx, INVALID};
use crate::priorityq::PriorityQ;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VertexKind {
    /// Both neighbours below, interior angle < 180°.
    Start,
    /// Both neighbours below, reflex.
    Split,
    /// Both neighbours above, interior angle < 180°.
    End,
    /// Both neighbours above, reflex.
    Merge,
    /// One neighbour above, one below.
    Regular,
}

/// A pending diagonal between two mesh vertices.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Diagonal {
    pub src: VertIdx,
    pub tgt: VertIdx,
}

/// Result of the sweep: a classification per vertex and the queued diagonals.
#[derive(Clone, Debug, Default)]
pub struct SweepOutcome {
    pub kinds: Vec<VertexKind>,
    pub diagonals: Vec<Diagonal>,
}

/// Classify v from its two ring neighbours.
pub fn classify(mesh: &Mesh, v: VertIdx) -> VertexKind {
    let p = mesh.pos(mesh.prev_vertex(v));
    let c = mesh.pos(v);
    let n = mesh.pos(mesh.next_vertex(v));
    let convex = orientation(p, c, n) > 0.0;
    match (higher(c, p), higher(c, n)) {
        (true, true) if convex => VertexKind::Start,
        (true, true) => VertexKind::Split,
        (false, false) if convex => VertexKind::End,
        (false, false) => VertexKind::Merge,
        _ => VertexKind::Regular,
    }
}

pub fn classify_all(mesh: &Mesh) -> Vec<VertexKind> {
    (0..mesh.vertex_count() as VertIdx)
        .map(|v| classify(mesh, v))
        .collect()
}

/// Run the sweep over the mesh ring and return the diagonals that make every
/// face y-monotone.
pub fn monotone_diagonals(mesh: &mut Mesh) -> Result<SweepOutcome> {
    let kinds = classify_all(mesh);
    let mut pq = PriorityQ::new(0..mesh.vertex_count() as VertIdx, |v| mesh.pos(v));

    let mut sweep = Sweep {
        mesh,
        dict: Dict::new(),
        kinds,
        diagonals: Vec::new(),
    };

    let mut result = Ok(());
    while let Some(v) = pq.extract_max() {
        result = sweep.handle(v);
        if result.is_err() {
            break;
        }
    }
    for he in sweep.mesh.edges.iter_mut() {
        he.helper = INVALID;
        he.status_node = INVALID;
    }
    result?;

    debug!(
        "sweep queued {} diagonal(s), {} edge(s) still active",
        sweep.diagonals.len(),
        sweep.dict.len()
    );
    Ok(SweepOutcome {
        kinds: sweep.kinds,
        diagonals: sweep.diagonals,
    })
}

struct Sweep<'a> {
    mesh: &'a mut Mesh,
    /// Active edges (status set T), unordered.
    dict: Dict,
    kinds: Vec<VertexKind>,
    diagonals: Vec<Diagonal>,
}

impl Sweep<'_> {
    fn handle(&mut self, v: VertIdx) -> Result<()> {
        let kind = self.kinds[v as usize];
        debug!("event {} at {:?}: {:?}", v, self.mesh.pos(v), kind);
        match kind {
            VertexKind::Start => self.handle_start(v),
            VertexKind::End => self.handle_end(v),
            VertexKind::Split => self.handle_split(v),
            VertexKind::Merge => self.handle_merge(v),
            VertexKind::Regular => self.handle_regular(v),
        }
    }

    fn handle_start(&mut self, v: VertIdx) -> Result<()> {
        let e = self.mesh.verts[v as usize].an_edge;
        self.activate(e, v);
        Ok(())
    }

    fn handle_end(&mut self, v: VertIdx) -> Result<()> {
        let e_prev = self.mesh.incoming(v);
        self.connect_if_merge(v, e_prev)?;
        self.deactivate(e_prev);
        Ok(())
    }

    fn handle_split(&mut self, v: VertIdx) -> Result<()> {
        let e_left = self.edge_left_of(v)?;
        let helper = self.helper(e_left, v)?;
        self.queue_diagonal(v, helper);
        self.mesh.edges[e_left as usize].helper = v;
        let e = self.mesh.verts[v as usize].an_edge;
        self.activate(e, v);
        Ok(())
    }

    fn handle_merge(&mut self, v: VertIdx) -> Result<()> {
        let e_prev = self.mesh.incoming(v);
        self.connect_if_merge(v, e_prev)?;
        self.deactivate(e_prev);
        let e_left = self.edge_left_of(v)?;
        self.connect_if_merge(v, e_left)?;
        self.mesh.edges[e_left as usize].helper = v;
        Ok(())
    }

    fn handle_regular(&mut self, v: VertIdx) -> Result<()> {
        // On a counter-clockwise ring the boundary runs downward through v
        // exactly when the interior lies to its right.
        let prev = self.mesh.prev_vertex(v);
        if higher(self.mesh.pos(prev), self.mesh.pos(v)) {
            let e_prev = self.mesh.incoming(v);
            self.connect_if_merge(v, e_prev)?;
            self.deactivate(e_prev);
            let e = self.mesh.verts[v as usize].an_edge;
            self.activate(e, v);
        } else {
            let e_left = self.edge_left_of(v)?;
            self.connect_if_merge(v, e_left)?;
            self.mesh.edges[e_left as usize].helper = v;
        }
        Ok(())
    }

    // ───────────────────────────── Status set ────────────────────────────────

    fn activate(&mut self, e: EdgeIdx, helper: VertIdx) {
        let node = self.dict.insert(e);
        let he = &mut self.mesh.edges[e as usize];
        he.status_node = node;
        he.helper = helper;
        trace!("activate edge {} with helper {}", e, helper);
    }

    fn deactivate(&mut self, e: EdgeIdx) {
        let he = &mut self.mesh.edges[e as usize];
        self.dict.delete(he.status_node);
        he.status_node = INVALID;
        he.helper = INVALID;
        trace!("deactivate edge {}", e);
    }

    /// Helper of an active edge; `v` names the event for error reporting.
    fn helper(&self, e: EdgeIdx, v: VertIdx) -> Result<VertIdx> {
        let he = &self.mesh.edges[e as usize];
        if he.status_node == INVALID || he.helper == INVALID {
            return Err(TessError::MissingHelper { vertex: v });
        }
        Ok(he.helper)
    }

    /// Queue v -> helper(e) if that helper is a merge vertex.
    fn connect_if_merge(&mut self, v: VertIdx, e: EdgeIdx) -> Result<()> {
        let helper = self.helper(e, v)?;
        if self.kinds[helper as usize] == VertexKind::Merge {
            self.queue_diagonal(v, helper);
        }
        Ok(())
    }

    fn queue_diagonal(&mut self, src: VertIdx, tgt: VertIdx) {
        debug!("queue diagonal {} -> {}", src, tgt);
        self.diagonals.push(Diagonal { src, tgt });
    }

    /// The active edge directly left of v: the one crossing v's height whose
    /// intercept is the largest value still left of v. Scans the whole
    /// status set.
    fn edge_left_of(&self, v: VertIdx) -> Result<EdgeIdx> {
        let p = self.mesh.pos(v);
        let mut best: Option<(EdgeIdx, Real)> = None;
        for e in self.dict.keys() {
            let (a, b) = (self.mesh.org(e), self.mesh.dst(e));
            if a == v || b == v {
                continue;
            }
            let Some(x) = x_intercept(self.mesh.pos(a), self.mesh.pos(b), p.y) else {
                continue;
            };
            if x < p.x && best.map_or(true, |(_, bx)| x > bx) {
                best = Some((e, x));
            }
        }
        best.map(|(e, _)| e)
            .ok_or(TessError::MissingHelper { vertex: v })
    }
}
